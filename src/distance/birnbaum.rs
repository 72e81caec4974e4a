//! Birnbaum similarity and distance
//!
//! The Birnbaum similarity counts the contiguous subsequences the two inputs
//! share. The exhaustive variant checks every window of the shorter sequence
//! against the longer one and counts repeated occurrences as well, while the
//! fast variant only sums the windows contained in the non overlapping matching
//! blocks of both sequences.
//!
//! ```
//! use seqsim::distance::birnbaum;
//!
//! assert_eq!(10.0, birnbaum::similarity("kitten".chars(), "sitting".chars()));
//! assert_eq!(7.0, birnbaum::fast_similarity("kitten".chars(), "sitting".chars()));
//! ```

use std::cmp::Ordering;

use crate::details::blocks::matching_blocks;
use crate::details::common::triangular;
use crate::details::distance::SimilarityMetric;

/// Exhaustive Birnbaum similarity.
#[derive(Clone, Copy, Debug, Default)]
struct Birnbaum;

/// Birnbaum similarity computed from matching blocks.
#[derive(Clone, Copy, Debug, Default)]
struct FastBirnbaum;

/// Counts the occurrences of the windows of `shorter` inside `longer`.
fn exhaustive_similarity<Elem1, Elem2>(longer: &[Elem1], shorter: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    let mut similarity = 0;
    for window_len in (1..=shorter.len()).rev() {
        for window in shorter.windows(window_len) {
            similarity += longer
                .windows(window_len)
                .filter(|candidate| *candidate == window)
                .count();
        }
    }
    similarity
}

fn fast_similarity_impl<Elem1, Elem2>(longer: &[Elem1], shorter: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    matching_blocks(longer, shorter)
        .iter()
        .map(|block| triangular(block.size))
        .sum()
}

impl SimilarityMetric for Birnbaum {
    fn _similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let similarity = if s1.len() >= s2.len() {
            exhaustive_similarity(s1, s2)
        } else {
            exhaustive_similarity(s2, s1)
        };
        similarity as f64
    }
}

impl SimilarityMetric for FastBirnbaum {
    fn _similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        if s1 == s2 {
            return triangular(s1.len()) as f64;
        }

        let similarity = match s1.len().cmp(&s2.len()) {
            Ordering::Greater => fast_similarity_impl(s1, s2),
            Ordering::Less => fast_similarity_impl(s2, s1),
            // the blocks depend on which sequence is searched first
            Ordering::Equal => fast_similarity_impl(s1, s2).max(fast_similarity_impl(s2, s1)),
        };
        similarity as f64
    }
}

/// Distance derived from the similarity of both sequences, relative to the
/// similarity the shorter sequence would have with itself. For sequences of the
/// same length the larger self similarity is used.
fn relative_distance<Elem1, Elem2, Metric>(metric: &Metric, s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2> + PartialEq,
    Elem2: PartialEq<Elem1> + PartialEq,
    Metric: SimilarityMetric,
{
    let shorter_len = s1.len().min(s2.len());
    if shorter_len == 0 {
        log::warn!("birnbaum distance with an empty sequence");
        return if s1.len() == s2.len() { 0.0 } else { 1.0 };
    }

    let maximum = match s1.len().cmp(&s2.len()) {
        Ordering::Less => metric._similarity(s1, s1),
        Ordering::Greater => metric._similarity(s2, s2),
        Ordering::Equal => metric._similarity(s1, s1).max(metric._similarity(s2, s2)),
    };
    (1.0 - metric._similarity(s1, s2) / maximum).max(0.0)
}

/// Number of windows of the shorter sequence found in the longer one,
/// counting every occurrence.
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    Birnbaum._similarity(&s1, &s2)
}

/// [`similarity`] divided by the larger self similarity of the two sequences.
pub fn normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + PartialEq,
    Iter2::Item: PartialEq<Iter1::Item> + PartialEq,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    Birnbaum._normalized_similarity(&s1, &s2)
}

/// Distance in the range 0.0 - 1.0 based on the exhaustive similarity.
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + PartialEq,
    Iter2::Item: PartialEq<Iter1::Item> + PartialEq,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    relative_distance(&Birnbaum, &s1, &s2)
}

/// Sum of `n * (n + 1) / 2` over the sizes `n` of the matching blocks.
pub fn fast_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    FastBirnbaum._similarity(&s1, &s2)
}

pub fn fast_normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + PartialEq,
    Iter2::Item: PartialEq<Iter1::Item> + PartialEq,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    FastBirnbaum._normalized_similarity(&s1, &s2)
}

/// Distance in the range 0.0 - 1.0 based on the fast similarity.
pub fn fast_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + PartialEq,
    Iter2::Item: PartialEq<Iter1::Item> + PartialEq,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    relative_distance(&FastBirnbaum, &s1, &s2)
}
