//! Sørensen-Dice distance
//!
//! Compares the multisets of elements of both sequences, so repeated elements
//! are matched as often as they occur in both sequences.

use std::hash::Hash;

use ahash::AHashMap;

/// `1 - 2 * |multiset intersection| / (len1 + len2)`
pub fn distance<Iter1, Iter2, Elem>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: Eq + Hash,
{
    let s1: Vec<Elem> = s1.into_iter().collect();
    let s2: Vec<Elem> = s2.into_iter().collect();

    if s1 == s2 {
        return 0.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 1.0;
    }

    let mut counts: AHashMap<&Elem, usize> = AHashMap::new();
    for elem in &s1 {
        *counts.entry(elem).or_insert(0) += 1;
    }

    let mut intersection = 0;
    for elem in &s2 {
        if let Some(count) = counts.get_mut(elem) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    1.0 - 2.0 * intersection as f64 / (s1.len() + s2.len()) as f64
}
