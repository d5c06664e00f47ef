//! The counter-array state machine shared by every generator.
//!
//! A generator keeps a fixed-length array of indices into its pool plus an
//! end sentinel: the lexicographically last valid state. Each step maps the
//! current indices to an output, then either marks the machine exhausted
//! (the state just mapped was the sentinel) or advances to the successor
//! state. The output always reflects the state *before* the advance.

/// Index state driving one generator pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    indices: Vec<usize>,
    sentinel: Vec<usize>,
    more: bool,
}

impl Counter {
    /// Creates a counter at `indices` that ends after yielding `sentinel`.
    pub fn new(indices: Vec<usize>, sentinel: Vec<usize>) -> Self {
        let more = indices.len() == sentinel.len() && indices <= sentinel;
        Self {
            indices,
            sentinel,
            more,
        }
    }

    /// Creates a counter that yields nothing.
    pub const fn exhausted() -> Self {
        Self {
            indices: Vec::new(),
            sentinel: Vec::new(),
            more: false,
        }
    }

    /// Returns whether another state remains to be yielded.
    pub const fn has_more(&self) -> bool {
        self.more
    }

    /// Returns the current indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the end sentinel.
    pub fn sentinel(&self) -> &[usize] {
        &self.sentinel
    }

    /// Builds the output for the current state, then steps the machine.
    ///
    /// `advance` is called only when the current state isn't the sentinel
    /// and must move the indices to their successor in place.
    pub fn step<B>(
        &mut self,
        build: impl FnOnce(&[usize]) -> B,
        advance: impl FnOnce(&mut [usize]),
    ) -> Option<B> {
        if !self.more {
            return None;
        }

        let output = build(&self.indices);
        if self.indices == self.sentinel {
            self.more = false;
        } else {
            advance(&mut self.indices);
        }
        Some(output)
    }
}

/// A lexicographic successor rule over index arrays.
///
/// Implementations describe one generator family: where the counter starts,
/// where it ends, and how it advances. `bounds` returns `None` when the
/// family has no valid state for the given pool and width.
pub trait SuccessorRule {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Returns the initial indices and the end sentinel.
    fn bounds(pool: usize, width: usize) -> Option<(Vec<usize>, Vec<usize>)>;

    /// Moves `indices` to its successor. Never called on the sentinel.
    fn advance(indices: &mut [usize], pool: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odometer(indices: &mut [usize]) {
        for slot in indices.iter_mut().rev() {
            *slot += 1;
            if *slot < 2 {
                return;
            }
            *slot = 0;
        }
    }

    #[test]
    fn test_step_yields_sentinel_then_stops() {
        let mut counter = Counter::new(vec![0, 0], vec![1, 1]);
        let mut states = Vec::new();
        while let Some(state) = counter.step(<[usize]>::to_vec, odometer) {
            states.push(state);
        }
        assert_eq!(states, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
        assert!(!counter.has_more());
    }

    #[test]
    fn test_empty_state_yields_once() {
        let mut counter = Counter::new(Vec::new(), Vec::new());
        assert_eq!(counter.step(<[usize]>::len, |_| {}), Some(0));
        assert_eq!(counter.step(<[usize]>::len, |_| {}), None);
    }

    #[test]
    fn test_exhausted_counter() {
        let mut counter = Counter::exhausted();
        assert!(!counter.has_more());
        assert_eq!(counter.step(<[usize]>::to_vec, |_| {}), None);
    }
}
