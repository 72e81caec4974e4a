//! Bulk delete distance
//!
//! A Levenshtein variant where a block of up to `max_del_len` consecutive
//! elements of the first sequence can be deleted for the cost of a single
//! deletion.
//!
//! ```
//! use seqsim::distance::bulk_delete;
//!
//! let args = bulk_delete::Args::default().max_del_len(3);
//! assert_eq!(1.0, bulk_delete::distance_with_args("abcxyz".chars(), "abc".chars(), &args));
//! assert_eq!(
//!     3.0,
//!     bulk_delete::distance_with_args("abcxyz".chars(), "abc".chars(), &args.max_del_len(1))
//! );
//! ```

use crate::details::distance::DistanceMetric;
use crate::wagner_fischer::{self, substitution_cost, CostMatrix, CostRule};

pub const DEFAULT_MAX_DEL_LEN: usize = 5;

/// Configuration of the bulk delete distance, which is also its cost rule.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Args {
    max_del_len: usize,
}

impl Default for Args {
    fn default() -> Args {
        Args {
            max_del_len: DEFAULT_MAX_DEL_LEN,
        }
    }
}

impl Args {
    /// Longest block that can be deleted at once. Values below 1 are treated as 1.
    pub fn max_del_len(mut self, max_del_len: usize) -> Self {
        self.max_del_len = max_del_len;
        self
    }

    fn block_limit(&self) -> usize {
        self.max_del_len.max(1)
    }
}

/// Unit cost insertion and substitution, and unit cost deletion of whole blocks.
impl<Elem1, Elem2> CostRule<Elem1, Elem2> for Args
where
    Elem1: PartialEq<Elem2>,
{
    fn seed_matrix(&self, len1: usize, len2: usize) -> CostMatrix {
        let block_limit = self.block_limit();
        let mut d = CostMatrix::with_insertion_row(len1, len2);
        for row in 1..=len1 {
            d[(row, 0)] = row.div_ceil(block_limit) as f64;
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
        costs.push(d[(row, col - 1)] + 1.0);
        costs.push(d[(row - 1, col - 1)] + substitution_cost(&s1[row - 1], &s2[col - 1]));
        for block_len in 1..=self.block_limit().min(row) {
            costs.push(d[(row - block_len, col)] + 1.0);
        }
    }
}

impl DistanceMetric for Args {
    fn maximum(&self, len1: usize, len2: usize) -> f64 {
        len1.max(len2) as f64
    }

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        wagner_fischer::solve(s1, s2, self).expect("bulk delete proposes candidates for every cell")
    }
}

pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    distance_with_args(s1, s2, &Args::default())
}

pub fn distance_with_args<Iter1, Iter2>(s1: Iter1, s2: Iter2, args: &Args) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    args._distance(&s1, &s2)
}

pub fn normalized_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    normalized_distance_with_args(s1, s2, &Args::default())
}

pub fn normalized_distance_with_args<Iter1, Iter2>(s1: Iter1, s2: Iter2, args: &Args) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    Iter2::Item: PartialEq<Iter1::Item>,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    args._normalized_distance(&s1, &s2)
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
    fn bulk_reference_values() {
        assert_eq!(3.0, distance("kitten".chars(), "sitting".chars()));
        assert_eq!(0.0, distance([1, 2, 3], [1, 2, 3]));
        assert_eq!(3.0, distance([1, 2, 3, 4, 5], [1, 2, 4, 3, 6, 7]));
        assert_eq!(4.0, distance(["1", "2", "3"], ["a", "b", "c", "d"]));

        assert_delta!(0.428571, normalized_distance("kitten".chars(), "sitting".chars()), 0.0001);
        assert_delta!(0.5, normalized_distance([1, 2, 3, 4, 5], [1, 2, 4, 3, 6, 7]), 0.0001);
        assert_eq!(1.0, normalized_distance(["1", "2", "3"], ["a", "b", "c", "d"]));
    }

    #[test]
    fn bulk_seed() {
        let args = Args::default().max_del_len(2);
        let d = CostRule::<u8, u8>::seed_matrix(&args, 5, 1);
        assert_eq!(1.0, d[(1, 0)]);
        assert_eq!(1.0, d[(2, 0)]);
        assert_eq!(2.0, d[(3, 0)]);
        assert_eq!(3.0, d[(5, 0)]);
        assert_eq!(1.0, d[(0, 1)]);
    }

    #[test]
    fn bulk_blocks() {
        assert_eq!(1.0, distance("abcdefgh".chars(), "abch".chars()));
        assert_eq!(2.0, distance("abcdefghij".chars(), "ab".chars()));
        assert_eq!(1.0, distance("abcde".chars(), "".chars()));
        // insertions are not bulk
        assert_eq!(4.0, distance("abch".chars(), "abcdefgh".chars()));
    }

    #[test]
    fn bulk_block_limit() {
        let args = Args::default().max_del_len(2);
        assert_eq!(2.0, distance_with_args("abcdefgh".chars(), "abch".chars(), &args));
        assert_delta!(
            0.25,
            normalized_distance_with_args("abcdefgh".chars(), "abch".chars(), &args),
            0.0001
        );

        let args = Args::default().max_del_len(0);
        assert_eq!(3.0, distance_with_args("abc".chars(), "".chars(), &args));
    }
}
