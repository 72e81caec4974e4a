//! Stemmatological distance
//!
//! Combines the ideas of the [`fragile_ends`](crate::distance::fragile_ends) and
//! [`bulk_delete`](crate::distance::bulk_delete) distances, as needed when
//! comparing manuscript traditions: blocks of elements can be deleted at once,
//! and deletions at the fragile beginning and end of the first sequence cost
//! half as much as in its middle.
//!
//! The size of the fragile zones is given as a percentage of the length of the
//! first sequence. Within a column of the cost matrix, a bulk deletion ending at
//! row `i` covers between 1 and `max_del_len - 1` elements.

use crate::details::common::round_half_even;
use crate::details::distance::DistanceMetric;
use crate::wagner_fischer::{self, substitution_cost, CostMatrix, CostRule};

pub const DEFAULT_MAX_DEL_LEN: usize = 5;
pub const DEFAULT_FRAG_START: f64 = 10.0;
pub const DEFAULT_FRAG_END: f64 = 10.0;

const FRAGILE_COST: f64 = 0.5;
const REGULAR_COST: f64 = 1.0;

/// Configuration of the stemmatological distance, which is also its cost rule.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Args {
    max_del_len: usize,
    frag_start: f64,
    frag_end: f64,
}

impl Default for Args {
    fn default() -> Args {
        Args {
            max_del_len: DEFAULT_MAX_DEL_LEN,
            frag_start: DEFAULT_FRAG_START,
            frag_end: DEFAULT_FRAG_END,
        }
    }
}

impl Args {
    /// Fragile zones covering the first 20% and the last 30% of the first sequence.
    pub fn wide_ends() -> Self {
        Args::default().frag_start(20.0).frag_end(30.0)
    }

    /// Longest block considered for bulk deletion. Values below 1 are treated as 1.
    pub fn max_del_len(mut self, max_del_len: usize) -> Self {
        self.max_del_len = max_del_len;
        self
    }

    /// Share of the first sequence, in percent, that is fragile at its beginning.
    pub fn frag_start(mut self, frag_start: f64) -> Self {
        self.frag_start = frag_start;
        self
    }

    /// Share of the first sequence, in percent, that is fragile at its end.
    pub fn frag_end(mut self, frag_end: f64) -> Self {
        self.frag_end = frag_end;
        self
    }

    fn block_limit(&self) -> usize {
        self.max_del_len.max(1)
    }

    /// Rows up to the first bound and from the second bound on are fragile.
    fn fragile_bounds(&self, len1: usize) -> (usize, usize) {
        let len1 = len1 as f64;
        (
            round_half_even(len1 * self.frag_start / 100.0),
            round_half_even(len1 * (100.0 - self.frag_end) / 100.0),
        )
    }

    fn deletion_cost(row: usize, (lower, upper): (usize, usize)) -> f64 {
        if row <= lower || row >= upper {
            FRAGILE_COST
        } else {
            REGULAR_COST
        }
    }
}

impl<Elem1, Elem2> CostRule<Elem1, Elem2> for Args
where
    Elem1: PartialEq<Elem2>,
{
    fn seed_matrix(&self, len1: usize, len2: usize) -> CostMatrix {
        let bounds = self.fragile_bounds(len1);
        let block_limit = self.block_limit();

        // each row extends the row one block above it, so the boundary is not
        // necessarily monotonic
        let mut d = CostMatrix::with_insertion_row(len1, len2);
        for row in 1..=len1 {
            d[(row, 0)] = d[(row - row.min(block_limit), 0)] + Self::deletion_cost(row, bounds);
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
        let deletion_cost = Self::deletion_cost(row, self.fragile_bounds(s1.len()));

        costs.push(d[(row, col - 1)] + REGULAR_COST);
        costs.push(d[(row - 1, col - 1)] + substitution_cost(&s1[row - 1], &s2[col - 1]));
        for block_len in 1..self.block_limit().min(row) {
            costs.push(d[(row - block_len, col)] + deletion_cost);
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
        wagner_fischer::solve(s1, s2, self)
            .expect("stemmatological proposes insertion and substitution for every cell")
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
