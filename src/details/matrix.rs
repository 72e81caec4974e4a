use std::ops::{Index, IndexMut};

/// Dense row-major matrix.
///
/// Used as the cost matrix of the Wagner-Fischer solver, where row `i` belongs to
/// the length-`i` prefix of the first sequence and column `j` to the length-`j`
/// prefix of the second one.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    matrix: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Clone,
{
    pub fn new(rows: usize, cols: usize, val: T) -> Self {
        Self {
            rows,
            cols,
            matrix: vec![val; rows * cols],
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &self.matrix[row * self.cols + col]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        &mut self.matrix[row * self.cols + col]
    }
}

impl Matrix<f64> {
    /// Cost matrix for sequences of length `len1` and `len2` with the classical
    /// boundary: `[i][0] = i` (delete everything) and `[0][j] = j` (insert everything).
    pub fn with_classical_boundary(len1: usize, len2: usize) -> Self {
        let mut matrix = Self::new(len1 + 1, len2 + 1, 0.0);
        for row in 1..=len1 {
            *matrix.get_mut(row, 0) = row as f64;
        }
        for col in 1..=len2 {
            *matrix.get_mut(0, col) = col as f64;
        }
        matrix
    }

    /// Cost matrix whose first row holds the classical insertion costs and whose
    /// first column is left at zero for the caller to fill.
    pub fn with_insertion_row(len1: usize, len2: usize) -> Self {
        let mut matrix = Self::new(len1 + 1, len2 + 1, 0.0);
        for col in 1..=len2 {
            *matrix.get_mut(0, col) = col as f64;
        }
        matrix
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: Clone,
{
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: Clone,
{
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col)
    }
}
