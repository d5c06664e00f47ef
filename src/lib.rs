//! # `Seqweave` Core
//!
//! A lazy sequence-combinator engine: single-pass cursor adapters and
//! combinatorial generators that compose over finite (and some unbounded)
//! sequences without materializing intermediate results.
//!
//! ## Architecture
//!
//! The library is organized into four layers:
//!
//! 1. **Foundation Layer**: errors, lookahead, patterns and shared types
//! 2. **Core API Layer**: the [`Sequence`](crate::core::traits::Sequence) factory
//!    trait, removal, predicates and the method-style extension traits
//! 3. **Combinators**: bounding, windowing, grouping and structural adapters
//! 4. **Generators**: combinations, permutations and cartesian products
//!    driven by a counter-array state machine
//!
//! Every combinator comes as a re-iterable factory implementing `Sequence`
//! and as a cursor type that can wrap any `Iterator` directly.
//!
//! ## Example
//!
//! ```rust
//! use seqweave_core::prelude::*;
//!
//! let data = [1, 2, 4, 9, 10, 11, 12, 15];
//! let runs = (&data[..]).chunk_while(|a: &i32, b: &i32| a + 1 == *b);
//! assert_eq!(
//!     runs.cursor().collect::<Vec<_>>(),
//!     vec![vec![1, 2], vec![4], vec![9, 10, 11, 12], vec![15]]
//! );
//!
//! let pairs = vec!['a', 'b', 'c'].combination(2);
//! assert_eq!(pairs.cursor().count(), 3);
//! ```

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rustdoc::all
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

// Foundation layer modules
pub mod foundation {
    //! Foundation layer providing errors, lookahead and shared types.

    pub mod error;
    pub mod pattern;
    pub mod peek;
    pub mod types;
}

// Core API layer modules
pub mod core {
    //! Core API layer defining the sequence traits and their extensions.

    pub mod ext;
    pub mod traits;
}

// Iterator adapters
pub mod combinators {
    //! Lazy adapters over a single source sequence.

    pub mod bounding;
    pub mod grouping;
    pub mod range;
    pub mod structural;
    pub mod windowing;
}

// Combinatorial generators
pub mod generators {
    //! Counter-array generators.

    pub mod arrangement;
    pub mod counter;
    pub mod product;
}

// Re-exports for convenience
pub mod prelude {
    //! Common imports for users of the library.
    pub use crate::combinators::{
        bounding::{DropFirst, DropWhile, Grep, Select, Step, Take, TakeWhile},
        grouping::{Adjacent, Chunk, ChunkWhile, SliceAfter, SliceBefore, SliceWhen},
        range::{range, RangeBuilder, SuccessorRange},
        structural::{Cycle, EachWithIndex, FlatMap, Flatten, ReverseEach, Transform, Zip},
        windowing::{EachCons, EachSlice},
    };
    pub use crate::core::{
        ext::{CursorExt, SequenceExt},
        traits::*,
    };
    pub use crate::foundation::{
        error::{Error, Result},
        pattern::Pattern,
        peek::Peeking,
        types::*,
    };
    pub use crate::generators::{
        arrangement::{
            Combination, Combinations, Permutation, Permutations, RepeatedCombination,
            RepeatedCombinations, RepeatedPermutation, RepeatedPermutations,
        },
        product::{Product, ProductIter},
    };
}

// Version information
/// The version of the seqweave core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The minimum supported Rust version.
pub const MSRV: &str = "1.70.0";
