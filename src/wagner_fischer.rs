//! Generalized Wagner-Fischer solver.
//!
//! The solver fills a `(len1 + 1) x (len2 + 1)` cost matrix where cell `(i, j)`
//! holds the cost of turning the first `i` elements of `s1` into the first `j`
//! elements of `s2`. Every inner cell is the minimum of the candidate costs a
//! [`CostRule`] proposes for it, so the various edit distances of this crate only
//! differ in their rule and in how the boundary of the matrix is seeded.
//!
//! ```
//! use seqsim::wagner_fischer::{self, CostMatrix, CostRule};
//!
//! /// Levenshtein distance where substitutions are not allowed
//! struct IndelOnly;
//!
//! impl CostRule<char, char> for IndelOnly {
//!     fn candidates(
//!         &self,
//!         s1: &[char],
//!         s2: &[char],
//!         d: &CostMatrix,
//!         row: usize,
//!         col: usize,
//!         costs: &mut Vec<f64>,
//!     ) {
//!         costs.push(d[(row - 1, col)] + 1.0);
//!         costs.push(d[(row, col - 1)] + 1.0);
//!         if s1[row - 1] == s2[col - 1] {
//!             costs.push(d[(row - 1, col - 1)]);
//!         }
//!     }
//! }
//!
//! let s1: Vec<char> = "kitten".chars().collect();
//! let s2: Vec<char> = "sitting".chars().collect();
//! assert_eq!(5.0, wagner_fischer::solve(&s1, &s2, &IndelOnly).unwrap());
//! ```

use crate::error::{Result, SeqSimError};

pub use crate::details::matrix::Matrix;

/// Cost matrix used by the solver.
pub type CostMatrix = Matrix<f64>;

/// Rule describing the edit operations available when filling a cost matrix.
pub trait CostRule<Elem1, Elem2> {
    /// Matrix with the boundary (row 0 and column 0) filled in. Inner cells are
    /// overwritten by the solver.
    fn seed_matrix(&self, len1: usize, len2: usize) -> CostMatrix {
        CostMatrix::with_classical_boundary(len1, len2)
    }

    /// Push every candidate cost for cell `(row, col)` onto `costs`.
    ///
    /// `row` and `col` are always at least 1 and all cells to the left of and
    /// above `(row, col)` are already final.
    fn candidates(
        &self,
        s1: &[Elem1],
        s2: &[Elem2],
        d: &CostMatrix,
        row: usize,
        col: usize,
        costs: &mut Vec<f64>,
    );
}

/// Cost of substituting `elem1` by `elem2`.
#[inline]
pub(crate) fn substitution_cost<Elem1, Elem2>(elem1: &Elem1, elem2: &Elem2) -> f64
where
    Elem1: PartialEq<Elem2>,
{
    if elem1 == elem2 {
        0.0
    } else {
        1.0
    }
}

/// Fill the cost matrix seeded by `rule` and return its bottom right cell.
///
/// # Errors
///
/// Fails with [`SeqSimError::NoCostCandidates`] when the rule proposes no
/// candidate for a cell.
pub fn solve<Elem1, Elem2, Rule>(s1: &[Elem1], s2: &[Elem2], rule: &Rule) -> Result<f64>
where
    Rule: CostRule<Elem1, Elem2> + ?Sized,
{
    let seed = rule.seed_matrix(s1.len(), s2.len());
    solve_seeded(s1, s2, rule, seed)
}

/// Like [`solve`], but starting from a caller provided seed matrix.
///
/// # Errors
///
/// Fails with [`SeqSimError::SeedMatrixShape`] when `seed` does not have
/// `s1.len() + 1` rows and `s2.len() + 1` columns, and with
/// [`SeqSimError::NoCostCandidates`] when the rule proposes no candidate for a cell.
pub fn solve_seeded<Elem1, Elem2, Rule>(
    s1: &[Elem1],
    s2: &[Elem2],
    rule: &Rule,
    seed: CostMatrix,
) -> Result<f64>
where
    Rule: CostRule<Elem1, Elem2> + ?Sized,
{
    let len1 = s1.len();
    let len2 = s2.len();
    if seed.rows() != len1 + 1 || seed.cols() != len2 + 1 {
        return Err(SeqSimError::SeedMatrixShape {
            expected: (len1 + 1, len2 + 1),
            found: (seed.rows(), seed.cols()),
        });
    }

    let mut d = seed;
    let mut costs = Vec::with_capacity(4);
    for col in 1..=len2 {
        for row in 1..=len1 {
            costs.clear();
            rule.candidates(s1, s2, &d, row, col, &mut costs);

            let best = costs
                .iter()
                .copied()
                .reduce(f64::min)
                .ok_or(SeqSimError::NoCostCandidates { row, col })?;
            d[(row, col)] = best;
        }
    }

    Ok(d[(len1, len2)])
}
