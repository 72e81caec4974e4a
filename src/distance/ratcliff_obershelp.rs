//! Ratcliff-Obershelp distance
//!
//! Based on the "gestalt pattern matching" similarity `2 * M / (len1 + len2)`,
//! where `M` is the number of elements in the matching blocks found by
//! recursively taking the longest common run and searching the parts to its
//! left and right.

use crate::details::blocks::matching_blocks;

pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();

    if s1 == s2 {
        return 0.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 1.0;
    }

    // longer sequence first, so the result does not depend on the argument order
    let matches: usize = if s1.len() >= s2.len() {
        matching_blocks(&s1, &s2).iter().map(|block| block.size).sum()
    } else {
        matching_blocks(&s2, &s1).iter().map(|block| block.size).sum()
    };
    1.0 - 2.0 * matches as f64 / (s1.len() + s2.len()) as f64
}
