use crate::distance::{
    birnbaum, bulk_delete, damerau, fragile_ends, jaccard, levenshtein, mmcwpa, sorensen,
    stemmatological,
};
use proptest::prelude::*;

/// Short sequences over a small alphabet, so repeated and shared elements are common.
fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..10)
}

fn non_empty_sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 1..10)
}

/// Sequences without repeated elements.
fn distinct_sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::hash_set(any::<u8>(), 0..12).prop_map(|set| set.into_iter().collect())
}

fn concat(x: &[u8], y: &[u8]) -> Vec<u8> {
    x.iter().chain(y).copied().collect()
}

proptest! {
    /// Levenshtein is a metric.
    #[test]
    fn prop_levenshtein_metric(x in sequence(), y in sequence(), z in sequence()) {
        let xy = levenshtein::distance(&x, &y);
        prop_assert!(xy >= 0.0);
        prop_assert_eq!(xy, levenshtein::distance(&y, &x));
        prop_assert_eq!(xy == 0.0, x == y);
        prop_assert!(levenshtein::distance(&x, &z) <= xy + levenshtein::distance(&y, &z));
    }

    /// The concatenation of two sequences is at most as far from either of them
    /// as the length of the other one.
    #[test]
    fn prop_levenshtein_concatenation(x in sequence(), y in sequence()) {
        let z = concat(&x, &y);
        let xy = levenshtein::distance(&x, &y);
        let xz = levenshtein::distance(&x, &z);
        let yz = levenshtein::distance(&y, &z);

        prop_assert_eq!(y.len() as f64, xz);
        prop_assert_eq!(x.len() as f64, yz);
        prop_assert!(xz <= xy + yz);
        prop_assert!(xy <= xz + yz);
    }

    /// Jaccard distance is a metric on the element sets.
    #[test]
    fn prop_jaccard_metric(x in sequence(), y in sequence(), z in sequence()) {
        let xy = jaccard::distance(&x, &y);
        prop_assert!((0.0..=1.0).contains(&xy));
        prop_assert_eq!(xy, jaccard::distance(&y, &x));
        prop_assert!(jaccard::distance(&x, &z) <= xy + jaccard::distance(&y, &z) + 1e-9);

        let xyz = concat(&x, &y);
        prop_assert!(jaccard::distance(&x, &xyz) <= xy + jaccard::distance(&y, &xyz) + 1e-9);
    }

    #[test]
    fn prop_symmetric(x in sequence(), y in sequence()) {
        prop_assert_eq!(damerau::distance(&x, &y), damerau::distance(&y, &x));
        prop_assert_eq!(sorensen::distance(&x, &y), sorensen::distance(&y, &x));
        prop_assert_eq!(jaccard::subseq_distance(&x, &y), jaccard::subseq_distance(&y, &x));
    }

    /// Equal lengths included, neither Birnbaum variant depends on argument order.
    #[test]
    fn prop_birnbaum_symmetric(x in sequence(), y in sequence()) {
        prop_assert_eq!(birnbaum::similarity(&x, &y), birnbaum::similarity(&y, &x));
        prop_assert_eq!(birnbaum::distance(&x, &y), birnbaum::distance(&y, &x));
        prop_assert_eq!(birnbaum::fast_similarity(&x, &y), birnbaum::fast_similarity(&y, &x));
        prop_assert_eq!(birnbaum::fast_distance(&x, &y), birnbaum::fast_distance(&y, &x));
    }

    #[test]
    fn prop_birnbaum_symmetric_equal_length(pairs in prop::collection::vec((0u8..3, 0u8..3), 0..8)) {
        let (x, y): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
        prop_assert_eq!(birnbaum::distance(&x, &y), birnbaum::distance(&y, &x));
        prop_assert_eq!(birnbaum::fast_similarity(&x, &y), birnbaum::fast_similarity(&y, &x));
        prop_assert_eq!(birnbaum::fast_distance(&x, &y), birnbaum::fast_distance(&y, &x));
    }

    /// Bulk deletions make the distance asymmetric, but detours never get cheaper.
    #[test]
    fn prop_bulk_delete_triangle(x in sequence(), y in sequence(), z in sequence()) {
        let xy = bulk_delete::distance(&x, &y);
        let yz = bulk_delete::distance(&y, &z);
        prop_assert!(bulk_delete::distance(&x, &z) <= xy + yz);

        let xyz = concat(&x, &y);
        prop_assert!(bulk_delete::distance(&x, &xyz) <= xy + bulk_delete::distance(&y, &xyz));
        prop_assert!(bulk_delete::distance(&xyz, &y) <= bulk_delete::distance(&xyz, &x) + xy);
        prop_assert!(xy <= bulk_delete::distance(&x, &xyz) + bulk_delete::distance(&xyz, &y));
    }

    /// Every distance of a sequence to itself is zero.
    #[test]
    fn prop_identity(x in sequence()) {
        prop_assert_eq!(0.0, levenshtein::distance(&x, &x));
        prop_assert_eq!(0.0, damerau::distance(&x, &x));
        prop_assert_eq!(0.0, bulk_delete::distance(&x, &x));
        prop_assert_eq!(0.0, stemmatological::distance(&x, &x));
        prop_assert_eq!(0.0, fragile_ends::distance(&x, &x));
        prop_assert_eq!(0.0, jaccard::distance(&x, &x));
        prop_assert_eq!(0.0, sorensen::distance(&x, &x));
        prop_assert_eq!(0.0, birnbaum::distance(&x, &x));
        prop_assert_eq!(0.0, birnbaum::fast_distance(&x, &x));
    }

    /// Matching a sequence against itself consumes it in a single round.
    #[test]
    fn prop_mmcwpa_full_match(x in non_empty_sequence()) {
        prop_assert_eq!(0.0, mmcwpa::distance(&x, &x));
    }

    #[test]
    fn prop_mmcwpa_range(x in sequence(), y in sequence()) {
        let dist = mmcwpa::distance(&x, &y);
        prop_assert!((0.0..=1.0).contains(&dist));
        prop_assert_eq!(dist == 0.0, x == y);
    }

    #[test]
    fn prop_birnbaum_self_similarity(x in distinct_sequence(), y in sequence()) {
        let expected = (x.len() * (x.len() + 1) / 2) as f64;
        prop_assert_eq!(expected, birnbaum::similarity(&x, &x));
        prop_assert_eq!(expected, birnbaum::fast_similarity(&x, &x));

        // the fast variant does not depend on repetitions
        let expected = (y.len() * (y.len() + 1) / 2) as f64;
        prop_assert_eq!(expected, birnbaum::fast_similarity(&y, &y));
    }

    #[test]
    fn prop_normalized_bound(x in sequence(), y in sequence()) {
        let values = [
            levenshtein::normalized_distance(&x, &y),
            damerau::normalized_distance(&x, &y),
            bulk_delete::normalized_distance(&x, &y),
            stemmatological::normalized_distance(&x, &y),
            fragile_ends::normalized_distance(&x, &y),
            birnbaum::distance(&x, &y),
            birnbaum::fast_distance(&x, &y),
            birnbaum::fast_normalized_similarity(&x, &y),
            jaccard::subseq_distance(&x, &y),
            sorensen::distance(&x, &y),
        ];
        for value in values {
            prop_assert!((0.0..=1.0).contains(&value), "{} out of range", value);
        }
    }

    /// Cheap deletions never make a distance larger than the plain Levenshtein distance.
    #[test]
    fn prop_cheap_deletions(x in sequence(), y in sequence()) {
        let dist = levenshtein::distance(&x, &y);
        prop_assert!(bulk_delete::distance(&x, &y) <= dist);
        prop_assert!(fragile_ends::distance(&x, &y) <= dist);
        prop_assert!(damerau::distance(&x, &y) <= dist);
    }
}
