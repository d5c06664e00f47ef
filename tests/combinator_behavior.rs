//! Integration tests for combinator chains, degenerate sizes, and removal.

use seqweave_core::combinators::bounding::{SelectIter, StepIter, TakeIter};
use seqweave_core::combinators::structural::ZipIter;
use seqweave_core::prelude::*;
use test_case::test_case;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test_case(0, vec![vec![]] ; "zero width yields one empty bucket")]
#[test_case(-1, vec![] ; "negative width yields nothing")]
#[test_case(4, vec![] ; "width beyond pool yields nothing")]
#[test_case(3, vec![vec![1, 2, 3]] ; "full width yields the pool")]
fn test_combination_degenerate_widths(width: isize, expected: Vec<Vec<i32>>) {
    init_tracing();
    assert_eq!(vec![1, 2, 3].combination(width).to_vec(), expected);
}

#[test_case(0, 1 ; "zero width")]
#[test_case(1, 3 ; "single")]
#[test_case(2, 6 ; "pairs")]
#[test_case(3, 6 ; "full")]
#[test_case(4, 0 ; "too wide")]
#[test_case(-2, 0 ; "negative")]
fn test_permutation_counts(width: isize, expected: usize) {
    assert_eq!(vec!['a', 'b', 'c'].permutation(width).cursor().count(), expected);
}

#[test_case(0, 0 ; "take nothing")]
#[test_case(3, 3 ; "take some")]
#[test_case(10, 5 ; "take past the end")]
fn test_take_lengths(n: isize, expected: usize) {
    let data = [1, 2, 3, 4, 5];
    assert_eq!((&data).take(n).unwrap().cursor().count(), expected);
}

#[test_case(-1 ; "negative")]
#[test_case(isize::MIN ; "minimum")]
fn test_negative_counts_are_invalid(n: isize) {
    let data = [1, 2, 3];
    assert!(matches!((&data).take(n), Err(Error::InvalidArgument(_))));
    assert!(matches!((&data).drop_first(n), Err(Error::InvalidArgument(_))));
    assert!(matches!((&data).step(n), Err(Error::InvalidArgument(_))));
    assert!(matches!((&data).each_cons(n), Err(Error::InvalidArgument(_))));
    assert!(matches!((&data).each_slice(n), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_adjacency_example() {
    let data = [1, 2, 4, 9, 10, 11, 12, 15, 16, 19, 20, 21];
    let runs = (&data).chunk_while(|a: &i32, b: &i32| a + 1 == *b).to_vec();
    assert_eq!(
        runs,
        vec![
            vec![1, 2],
            vec![4],
            vec![9, 10, 11, 12],
            vec![15, 16],
            vec![19, 20, 21]
        ]
    );

    // slice_when with the negated predicate splits at the same places.
    let split = (&data).slice_when(|a: &i32, b: &i32| a + 1 != *b).to_vec();
    assert_eq!(split, runs);
}

#[test]
fn test_zip_padding_example() {
    let rows = vec![1, 2, 3].zip(vec![vec![4, 5], vec![6]]).to_vec();
    assert_eq!(
        rows,
        vec![
            vec![Some(1), Some(4), Some(6)],
            vec![Some(2), Some(5), None],
            vec![Some(3), None, None]
        ]
    );

    let cursor = ZipIter::new(vec![1].into_iter(), vec![Vec::<i32>::new().into_iter()]);
    assert_eq!(cursor.collect::<Vec<_>>(), vec![vec![Some(1), None]]);
}

#[test]
fn test_flatten_keeps_absent_slots() {
    let rows = vec![1, 2].zip(vec![vec![3]]).to_vec();
    let flat = rows
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .flatten(|value: i32| vec![value, value * 10])
        .to_vec();
    assert_eq!(
        flat,
        vec![Some(1), Some(10), Some(3), Some(30), Some(2), Some(20), None]
    );
}

#[test]
fn test_one_shot_versus_reiterable() {
    let data = vec![3, 1, 2];
    let pairs = (&data).each_cons(2).unwrap();
    assert_eq!(pairs.to_vec(), pairs.to_vec());

    let once = data.clone().into_iter().one_shot().reverse_each();
    assert_eq!(once.to_vec(), vec![2, 1, 3]);
    assert!(once.to_vec().is_empty());
}

#[test]
fn test_cycle_bounded_and_unbounded() {
    assert_eq!(vec!['a', 'b'].cycle_times(3).to_vec().len(), 6);
    assert!(vec![1].cycle_times(0).to_vec().is_empty());
    assert!(Vec::<i32>::new().cycle().to_vec().is_empty());

    let endless = vec![1, 2, 3].cycle().drop_first(2).unwrap().take(4).unwrap();
    assert_eq!(endless.to_vec(), vec![3, 1, 2, 3]);
}

#[test]
fn test_unbounded_cycle_feeds_windowing_and_step() {
    init_tracing();
    let slices = vec![1, 2].cycle().each_slice(2).unwrap().take(5).unwrap();
    assert_eq!(slices.to_vec(), vec![vec![1, 2]; 5]);

    let strided = vec![1, 2, 3].cycle().step(2).unwrap().take(4).unwrap();
    assert_eq!(strided.to_vec(), vec![1, 3, 2, 1]);

    let indexed = vec!['x'].cycle().each_cons(2).unwrap().each_with_index().take(3).unwrap();
    assert_eq!(
        indexed.to_vec(),
        vec![(vec!['x', 'x'], 0), (vec!['x', 'x'], 1), (vec!['x', 'x'], 2)]
    );
}

#[test]
fn test_range_feeds_combinators() {
    let letters = range('a', 'z').step(5).unwrap().to_vec();
    assert_eq!(letters, vec!['a', 'f', 'k', 'p', 'u', 'z']);

    let indexed = range(10_u8, 12).each_with_index().to_vec();
    assert_eq!(indexed, vec![(10, 0), (11, 1), (12, 2)]);

    let missing = SuccessorRange::builder().start(1).successor(|n: &i32| Some(n + 1)).build();
    assert_eq!(missing.unwrap_err(), Error::MissingArgument("end"));
}

#[test]
fn test_grouping_with_patterns() {
    let lines = vec!["# a", "x", "y", "# b", "z"];
    let sections = lines.slice_before_pattern("^#").unwrap().to_vec();
    assert_eq!(sections, vec![vec!["# a", "x", "y"], vec!["# b", "z"]]);

    let chunks = vec![1, 3, 5, 2, 4, 7].chunk(|n: &i32| n % 2 == 0).to_vec();
    assert_eq!(
        chunks,
        vec![(false, vec![1, 3, 5]), (true, vec![2, 4]), (false, vec![7])]
    );
}

#[test]
fn test_remove_through_view_chain() {
    let mut data = vec![1, 2, 3, 4, 5, 6];
    {
        let mut evens = SelectIter::new(VecCursor::new(&mut data), |n: &i32| n % 2 == 0, true);
        assert!(matches!(evens.remove(), Err(Error::IllegalState(_))));
        while evens.next().is_some() {
            evens.remove().unwrap();
        }
    }
    assert_eq!(data, vec![1, 3, 5]);

    let mut cursor = StepIter::new(TakeIter::new(VecCursor::new(&mut data), 2).unwrap(), 1).unwrap();
    assert_eq!(cursor.next(), Some(1));
    cursor.remove().unwrap();
    assert!(matches!(cursor.remove(), Err(Error::IllegalState(_))));
    drop(cursor);
    assert_eq!(data, vec![3, 5]);
}

#[test]
fn test_synthesized_cursors_refuse_remove() {
    let mut cycle = vec![1].cycle().cursor();
    cycle.next();
    assert!(matches!(cycle.remove(), Err(Error::Unsupported { .. })));

    let mut reversed = vec![1, 2].reverse_each().cursor();
    reversed.next();
    assert!(matches!(reversed.remove(), Err(Error::Unsupported { .. })));

    let mut product = vec![1].product(vec![vec![2]]).cursor();
    product.next();
    assert!(matches!(product.remove(), Err(Error::Unsupported { .. })));
}
