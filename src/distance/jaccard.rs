//! Jaccard distances
//!
//! [`distance`] compares the sets of elements of both sequences, while
//! [`subseq_distance`] compares their contiguous subsequences of every length,
//! weighting longer shared subsequences higher.

use std::hash::Hash;

use ahash::AHashSet;

use crate::details::common::triangular;

/// `1 - |intersection| / |union|` of the element sets.
///
/// Two empty sequences have a distance of 0.0.
pub fn distance<Iter1, Iter2, Elem>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: Eq + Hash,
{
    let set1: AHashSet<Elem> = s1.into_iter().collect();
    let set2: AHashSet<Elem> = s2.into_iter().collect();

    let union = set1.union(&set2).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set1.intersection(&set2).count();
    1.0 - intersection as f64 / union as f64
}

/// Jaccard distance over the contiguous subsequences of both sequences.
///
/// For every length `L` from the length of the longer sequence down to 1 the
/// number of distinct shared windows is divided by the combined number of
/// windows minus that count, weighted by `L`. The weighted sum is divided by the
/// sum of all weights and the complement raised to the power of the longer
/// length, which pushes the distance of partially overlapping sequences towards
/// 1.0.
pub fn subseq_distance<Iter1, Iter2, Elem>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: Eq + Hash,
{
    let s1: Vec<Elem> = s1.into_iter().collect();
    let s2: Vec<Elem> = s2.into_iter().collect();

    let max_len = s1.len().max(s2.len());
    if max_len == 0 {
        return 0.0;
    }

    let mut score = 0.0;
    for window_len in (1..=max_len).rev() {
        let windows1: Vec<&[Elem]> = s1.windows(window_len).collect();
        let windows2: Vec<&[Elem]> = s2.windows(window_len).collect();

        let distinct1: AHashSet<&[Elem]> = windows1.iter().copied().collect();
        let distinct2: AHashSet<&[Elem]> = windows2.iter().copied().collect();
        let intersection = distinct1.intersection(&distinct2).count();

        let union = windows1.len() + windows2.len() - intersection;
        if union > 0 {
            score += intersection as f64 / union as f64 * window_len as f64;
        }
    }

    (1.0 - score / triangular(max_len) as f64).powi(max_len as i32)
}
