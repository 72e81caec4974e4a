//! Damerau-Levenshtein distance (optimal string alignment)
//!
//! Levenshtein distance extended by the transposition of two adjacent elements.
//! A substring is never edited more than once, so this is the restricted variant
//! of the Damerau-Levenshtein distance.

use crate::details::common::remove_common_affix;
use crate::details::distance::DistanceMetric;
use crate::distance::levenshtein::Levenshtein;
use crate::wagner_fischer::{self, CostMatrix, CostRule};

/// [`Levenshtein`] costs plus unit cost transposition of adjacent elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct Damerau;

impl<Elem1, Elem2> CostRule<Elem1, Elem2> for Damerau
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
        Levenshtein.candidates(s1, s2, d, row, col, costs);
        if row > 1 && col > 1 && s1[row - 1] == s2[col - 2] && s1[row - 2] == s2[col - 1] {
            costs.push(d[(row - 2, col - 2)] + 1.0);
        }
    }
}

impl DistanceMetric for Damerau {
    fn maximum(&self, len1: usize, len2: usize) -> f64 {
        len1.max(len2) as f64
    }

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let (s1, s2) = remove_common_affix(s1, s2);
        wagner_fischer::solve(s1, s2, self).expect("damerau proposes candidates for every cell")
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
    Damerau._distance(&s1, &s2)
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
    Damerau._normalized_distance(&s1, &s2)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr, $d:expr) => {
            if ($x - $y).abs() > $d {
                panic!("{} != {}", $x, $y);
            }
        };
    }

    fn _test_distance_ascii(s1: &str, s2: &str) -> f64 {
        let res1 = distance(s1.chars(), s2.chars());
        let res2 = distance(s2.chars(), s1.chars());
        assert_eq!(res1, res2);
        res1
    }

    #[test]
    fn damerau_simple() {
        assert_eq!(0.0, _test_distance_ascii("", ""));
        assert_eq!(3.0, _test_distance_ascii("abc", ""));
        assert_eq!(1.0, _test_distance_ascii("ab", "ba"));
        assert_eq!(1.0, _test_distance_ascii("abcd", "acbd"));
        assert_eq!(2.0, _test_distance_ascii("abaa", "baab"));
    }

    /// the same substring is never edited twice
    #[test]
    fn damerau_restricted() {
        assert_eq!(3.0, _test_distance_ascii("ca", "abc"));
    }

    #[test]
    fn damerau_reference_values() {
        assert_eq!(3.0, _test_distance_ascii("kitten", "sitting"));
        assert_delta!(0.428571, normalized_distance("kitten".chars(), "sitting".chars()), 0.0001);
        assert_eq!(0.0, distance([1, 2, 3], [1, 2, 3]));
        assert_eq!(3.0, distance([1, 2, 3, 4, 5], [1, 2, 4, 3, 6, 7]));
        assert_eq!(4.0, distance(["1", "2", "3"], ["a", "b", "c", "d"]));
    }

    /// a transposed pair cannot be edited again, so a detour can be cheaper
    #[test]
    fn damerau_no_triangle_inequality() {
        assert_eq!(3.0, distance([0, 1], [1, 2, 0]));
        assert_eq!(1.0, distance([0, 1], [1, 0]));
        assert_eq!(1.0, distance([1, 0], [1, 2, 0]));
    }

    #[test]
    fn damerau_transposition_candidate() {
        let d = CostMatrix::with_classical_boundary(2, 2);
        let mut costs = Vec::new();
        CostRule::<char, char>::candidates(&Damerau, &['a', 'b'], &['b', 'a'], &d, 2, 2, &mut costs);
        assert_eq!(4, costs.len());
        assert_eq!(1.0, costs[3]);
    }
}
