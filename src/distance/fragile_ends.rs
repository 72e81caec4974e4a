//! Fragile ends distance
//!
//! A Levenshtein variant for sequences whose beginning and end are less stable
//! than their middle. Deleting one of the first or last 10% of the elements of
//! the first sequence costs 0.5 instead of 1.

use crate::details::common::round_half_even;
use crate::wagner_fischer::{self, substitution_cost, CostMatrix, CostRule};

const FRAGILE_SHARE: f64 = 0.1;
const FRAGILE_COST: f64 = 0.5;
const REGULAR_COST: f64 = 1.0;

/// Unit cost edits, with cheaper deletions at the ends of the first sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct FragileEnds;

impl FragileEnds {
    /// Cost of deleting the `row`-th element of a sequence of length `len1`.
    fn deletion_cost(row: usize, len1: usize) -> f64 {
        let lower = round_half_even(FRAGILE_SHARE * len1 as f64);
        let upper = round_half_even((1.0 - FRAGILE_SHARE) * len1 as f64);
        if row <= lower || row >= upper {
            FRAGILE_COST
        } else {
            REGULAR_COST
        }
    }
}

impl<Elem1, Elem2> CostRule<Elem1, Elem2> for FragileEnds
where
    Elem1: PartialEq<Elem2>,
{
    fn seed_matrix(&self, len1: usize, len2: usize) -> CostMatrix {
        let mut d = CostMatrix::with_insertion_row(len1, len2);
        for row in 1..=len1 {
            d[(row, 0)] = d[(row - 1, 0)] + Self::deletion_cost(row, len1);
        }
        d
    }

    fn candidates(
        &self,
        s1: &[Elem1],
        s2: &[Elem2],
        d: &CostMatrix,
        row: usize,
        col: usize,
        costs: &mut Vec<f64>,
    ) {
        costs.push(d[(row - 1, col)] + Self::deletion_cost(row, s1.len()));
        costs.push(d[(row, col - 1)] + REGULAR_COST);
        costs.push(d[(row - 1, col - 1)] + substitution_cost(&s1[row - 1], &s2[col - 1]));
    }
}

fn fragile_distance<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    wagner_fischer::solve(s1, s2, &FragileEnds).expect("fragile ends proposes candidates for every cell")
}

pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    fragile_distance(&s1, &s2)
}

/// Distance divided by the largest cost of deleting either sequence from their
/// concatenation, which keeps the result in the range 0.0 - 1.0.
///
/// Since the sequences are concatenated, both have to share the element type.
pub fn normalized_distance<Iter1, Iter2, Elem>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = Elem>,
    Iter2: IntoIterator<Item = Elem>,
    Elem: PartialEq + Clone,
{
    let s1: Vec<Elem> = s1.into_iter().collect();
    let s2: Vec<Elem> = s2.into_iter().collect();
    let joined: Vec<Elem> = s1.iter().chain(&s2).cloned().collect();

    let dist = fragile_distance(&s1, &s2);
    let maximum = dist
        .max(fragile_distance(&joined, &s1))
        .max(fragile_distance(&joined, &s2));
    if maximum == 0.0 {
        log::warn!("normalizing the distance between two empty sequences, using 0.0");
        return 0.0;
    }

    dist / maximum
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

    #[test]
    fn fragile_zone() {
        // len 13: rows up to round(1.3) and from round(11.7) are fragile
        assert_eq!(0.5, FragileEnds::deletion_cost(1, 13));
        assert_eq!(1.0, FragileEnds::deletion_cost(2, 13));
        assert_eq!(1.0, FragileEnds::deletion_cost(11, 13));
        assert_eq!(0.5, FragileEnds::deletion_cost(12, 13));
        // len 5: round(0.5) is 0 and round(4.5) is 4
        assert_eq!(1.0, FragileEnds::deletion_cost(1, 5));
        assert_eq!(0.5, FragileEnds::deletion_cost(4, 5));
    }

    #[test]
    fn fragile_seed() {
        let d = CostRule::<char, char>::seed_matrix(&FragileEnds, 13, 2);
        assert_eq!(0.5, d[(1, 0)]);
        assert_eq!(11.0, d[(12, 0)]);
        assert_eq!(11.5, d[(13, 0)]);
        assert_eq!(2.0, d[(0, 2)]);
    }

    #[test]
    fn fragile_reference_values() {
        assert_eq!(3.0, distance("kitten".chars(), "sitting".chars()));
        assert_eq!(0.0, distance([1, 2, 3], [1, 2, 3]));
        assert_eq!(3.0, distance([1, 2, 3, 4, 5], [1, 2, 4, 3, 6, 7]));
        assert_eq!(4.0, distance(["1", "2", "3"], ["a", "b", "c", "d"]));

        assert_delta!(0.5, normalized_distance("kitten".chars(), "sitting".chars()), 0.0001);
        assert_delta!(0.0, normalized_distance([1, 2, 3], [1, 2, 3]), 0.0001);
        assert_delta!(0.6, normalized_distance([1, 2, 3, 4, 5], [1, 2, 4, 3, 6, 7]), 0.0001);
        assert_delta!(
            1.0,
            normalized_distance(["1", "2", "3"], ["a", "b", "c", "d"]),
            0.0001
        );
    }

    #[test]
    fn fragile_deletion_at_the_ends() {
        assert_eq!(0.5, distance("xabcdefghi".chars(), "abcdefghi".chars()));
        assert_eq!(1.0, distance("abcdxefghi".chars(), "abcdefghi".chars()));
    }

    #[test]
    fn fragile_empty() {
        assert_eq!(0.0, normalized_distance("".chars(), "".chars()));
        assert_eq!(3.0, distance("".chars(), "abc".chars()));
    }
}
