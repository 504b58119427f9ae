//! Dense matrix implementation for small matrices.
//!
//! The matrices built while solving a single commuting square are small
//! (rows = candidate basis, columns = target basis), so a dense row-major
//! layout with simple access patterns is the right representation.

use std::ops::{Index, IndexMut};

use verma_rings::traits::{Field, Ring};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows have unequal lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Matrix-vector multiply: y = A * x.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_cols);
        (0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &R) {
        for k in 0..self.num_cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &R) {
        for k in 0..self.num_cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }
}

/// Outcome of solving a linear system `A x = b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome<R> {
    /// The system has exactly one solution.
    Unique(Vec<R>),
    /// The system has no solution.
    Inconsistent,
    /// The system has more than one solution; the rank of the coefficient
    /// matrix is reported for diagnosis.
    Underdetermined {
        /// Rank of the coefficient matrix.
        rank: usize,
    },
}

impl<R: Field> DenseMatrix<R> {
    /// Gaussian elimination: brings the matrix to row echelon form with
    /// pivots scaled to 1.
    ///
    /// Returns (echelon form, rank).
    #[must_use]
    pub fn row_echelon(&self) -> (Self, usize) {
        let mut m = self.clone();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < m.num_rows && pivot_col < m.num_cols {
            // Find pivot (first non-zero in column)
            let mut found_row = pivot_row;
            for row in pivot_row..m.num_rows {
                if !m[(row, pivot_col)].is_zero() {
                    found_row = row;
                    break;
                }
            }

            if m[(found_row, pivot_col)].is_zero() {
                // No pivot in this column
                pivot_col += 1;
                continue;
            }

            if found_row != pivot_row {
                m.swap_rows(pivot_row, found_row);
            }

            // Scale pivot row to make pivot = 1
            let pivot_val = m[(pivot_row, pivot_col)].clone();
            if let Some(inv) = pivot_val.inv() {
                m.scale_row(pivot_row, &inv);
            }

            // Eliminate entries below pivot
            for row in pivot_row + 1..m.num_rows {
                if !m[(row, pivot_col)].is_zero() {
                    let factor = m[(row, pivot_col)].clone().neg();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }

            pivot_row += 1;
            pivot_col += 1;
        }

        let rank = pivot_row;
        (m, rank)
    }

    /// Reduced row echelon form (Gauss-Jordan elimination).
    ///
    /// Returns (rref, pivot columns, rank). The pivot columns are listed
    /// row by row, so `pivot_cols[i]` is the pivot of row `i`.
    #[must_use]
    pub fn rref(&self) -> (Self, Vec<usize>, usize) {
        let (mut m, rank) = self.row_echelon();

        // The pivot of each row is its first non-zero entry.
        let mut pivot_cols = Vec::with_capacity(rank);
        for row in 0..rank {
            for col in 0..m.num_cols {
                if !m[(row, col)].is_zero() {
                    pivot_cols.push(col);
                    break;
                }
            }
        }

        // Back-substitution to eliminate above pivots
        for (pivot_row, &pivot_col) in pivot_cols.iter().enumerate().rev() {
            for row in 0..pivot_row {
                if !m[(row, pivot_col)].is_zero() {
                    let factor = m[(row, pivot_col)].clone().neg();
                    m.add_scaled_row(row, pivot_row, &factor);
                }
            }
        }

        (m, pivot_cols, rank)
    }

    /// Solves the linear system `A x = b`, insisting on a unique solution.
    ///
    /// Unlike textbook `solve` routines this never fills free variables
    /// with zeros: a system with free variables is reported as
    /// `Underdetermined` so the caller can treat it as an error.
    ///
    /// # Panics
    ///
    /// Panics if `b` does not have one entry per matrix row.
    #[must_use]
    pub fn solve_unique(&self, b: &[R]) -> SolveOutcome<R> {
        assert_eq!(b.len(), self.num_rows);

        // Augmented matrix [A | b]
        let mut aug = Self::zeros(self.num_rows, self.num_cols + 1);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                aug[(i, j)] = self[(i, j)].clone();
            }
            aug[(i, self.num_cols)] = b[i].clone();
        }

        let (rref, pivot_cols, rank) = aug.rref();

        // A pivot in the appended column is a row [0 ... 0 | c] with c != 0.
        if pivot_cols.last() == Some(&self.num_cols) {
            return SolveOutcome::Inconsistent;
        }

        if rank < self.num_cols {
            return SolveOutcome::Underdetermined { rank };
        }

        let mut x = vec![R::zero(); self.num_cols];
        for (row, &col) in pivot_cols.iter().enumerate() {
            x[col] = rref[(row, self.num_cols)].clone();
        }
        SolveOutcome::Unique(x)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
