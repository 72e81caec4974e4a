//! Levenshtein distance
//!
//! The number of single element deletions, insertions and substitutions needed
//! to turn one sequence into the other. The normalized distance divides by the
//! length of the longer sequence.

use crate::details::common::remove_common_affix;
use crate::details::distance::DistanceMetric;
use crate::wagner_fischer::{self, substitution_cost, CostMatrix, CostRule};

/// Unit cost deletion, insertion and substitution.
#[derive(Clone, Copy, Debug, Default)]
pub struct Levenshtein;

impl<Elem1, Elem2> CostRule<Elem1, Elem2> for Levenshtein
where
    Elem1: PartialEq<Elem2>,
{
    fn candidates(
        &self,
        s1: &[Elem1],
        s2: &[Elem2],
        d: &CostMatrix,
        row: usize,
        col: usize,
        costs: &mut Vec<f64>,
    ) {
        costs.push(d[(row - 1, col)] + 1.0);
        costs.push(d[(row, col - 1)] + 1.0);
        costs.push(d[(row - 1, col - 1)] + substitution_cost(&s1[row - 1], &s2[col - 1]));
    }
}

impl DistanceMetric for Levenshtein {
    fn maximum(&self, len1: usize, len2: usize) -> f64 {
        len1.max(len2) as f64
    }

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        // common affix does not effect the Levenshtein distance
        let (s1, s2) = remove_common_affix(s1, s2);
        wagner_fischer::solve(s1, s2, self).expect("levenshtein proposes candidates for every cell")
    }
}

pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    Levenshtein._distance(&s1, &s2)
}

pub fn normalized_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    Levenshtein._normalized_distance(&s1, &s2)
}
