//! Property tests for the generator and windowing counting laws.

use proptest::prelude::*;
use seqweave_core::prelude::*;
use std::collections::HashSet;

fn binomial(m: usize, n: usize) -> usize {
    if n > m {
        return 0;
    }
    (0..n).fold(1, |acc, i| acc * (m - i) / (i + 1))
}

fn falling_factorial(m: usize, n: usize) -> usize {
    if n > m {
        return 0;
    }
    (0..n).map(|i| m - i).product()
}

fn is_sorted_strict(bucket: &[usize]) -> bool {
    bucket.windows(2).all(|w| w[0] < w[1])
}

fn is_sorted(bucket: &[usize]) -> bool {
    bucket.windows(2).all(|w| w[0] <= w[1])
}

fn is_lexicographic(buckets: &[Vec<usize>]) -> bool {
    buckets.windows(2).all(|w| w[0] < w[1])
}

// Pools of distinct, increasing values make index order and value order agree.
fn pool(m: usize) -> Vec<usize> {
    (0..m).collect()
}

proptest! {
    #[test]
    fn combination_count_law(m in 0usize..9, n in 0usize..9) {
        let buckets = pool(m).combination(n as isize).to_vec();
        prop_assert_eq!(buckets.len(), binomial(m, n));
        for bucket in &buckets {
            prop_assert_eq!(bucket.len(), n);
            prop_assert!(is_sorted_strict(bucket), "combination must be strictly increasing");
        }
        prop_assert!(is_lexicographic(&buckets), "combinations must be in lexicographic order");
    }

    #[test]
    fn permutation_count_law(m in 0usize..7, n in 0usize..7) {
        let buckets = pool(m).permutation(n as isize).to_vec();
        prop_assert_eq!(buckets.len(), falling_factorial(m, n));
        for bucket in &buckets {
            prop_assert_eq!(bucket.len(), n);
            let distinct: HashSet<_> = bucket.iter().collect();
            prop_assert_eq!(distinct.len(), n, "permutation must not repeat elements");
        }
        prop_assert!(is_lexicographic(&buckets), "permutations must be in lexicographic order");
    }

    #[test]
    fn repeated_combination_count_law(m in 0usize..7, n in 0usize..6) {
        let buckets = pool(m).repeated_combination(n as isize).to_vec();
        // Multisets of size n over m symbols.
        let expected = if n == 0 { 1 } else { binomial(m + n - 1, n) };
        prop_assert_eq!(buckets.len(), expected);
        for bucket in &buckets {
            prop_assert_eq!(bucket.len(), n);
            prop_assert!(is_sorted(bucket), "repeated combination must be non-decreasing");
        }
        prop_assert!(is_lexicographic(&buckets));
    }

    #[test]
    fn repeated_permutation_count_law(m in 0usize..6, n in 0usize..5) {
        let buckets = pool(m).repeated_permutation(n as isize).to_vec();
        prop_assert_eq!(buckets.len(), m.pow(n as u32));
        prop_assert!(buckets.iter().all(|bucket| bucket.len() == n));
        prop_assert!(is_lexicographic(&buckets));
    }

    #[test]
    fn product_odometer_law(lengths in proptest::collection::vec(0usize..5, 1..4)) {
        let pools: Vec<Vec<usize>> = lengths.iter().map(|&len| pool(len)).collect();
        let (primary, others) = pools.split_first().map(|(p, o)| (p.clone(), o.to_vec())).unwrap();
        let product = primary.product(others);

        let tuples = product.to_vec();
        prop_assert_eq!(tuples.len(), lengths.iter().product::<usize>());
        prop_assert_eq!(product.cursor().size_hint(), (tuples.len(), Some(tuples.len())));
        prop_assert!(is_lexicographic(&tuples), "rightmost list must vary fastest");
    }

    #[test]
    fn negative_widths_yield_nothing(m in 0usize..6, n in -5isize..0) {
        prop_assert_eq!(pool(m).combination(n).cursor().count(), 0);
        prop_assert_eq!(pool(m).permutation(n).cursor().count(), 0);
        prop_assert_eq!(pool(m).repeated_combination(n).cursor().count(), 0);
        prop_assert_eq!(pool(m).repeated_permutation(n).cursor().count(), 0);
    }

    #[test]
    fn windowing_laws(len in 0usize..40, n in 1usize..8) {
        let data = pool(len);

        let cons = (&data).each_cons(n as isize).unwrap().to_vec();
        prop_assert_eq!(cons.len(), if len >= n { len - n + 1 } else { 0 });
        prop_assert!(cons.iter().all(|window| window.len() == n));

        let slices = (&data).each_slice(n as isize).unwrap().to_vec();
        prop_assert_eq!(slices.len(), (len + n - 1) / n);
        if let Some((last, full)) = slices.split_last() {
            prop_assert!(full.iter().all(|slice| slice.len() == n));
            prop_assert!(!last.is_empty() && last.len() <= n);
        }
        prop_assert_eq!(slices.concat(), data);
    }

    #[test]
    fn zip_pads_to_primary_length(
        primary in proptest::collection::vec(any::<u8>(), 0..10),
        others in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..10), 0..4),
    ) {
        let rows = primary.clone().zip(others.clone()).to_vec();
        prop_assert_eq!(rows.len(), primary.len());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.len(), others.len() + 1);
            prop_assert_eq!(row[0], Some(primary[i]));
            for (other, cell) in others.iter().zip(&row[1..]) {
                prop_assert_eq!(*cell, other.get(i).copied());
            }
        }
    }
}
