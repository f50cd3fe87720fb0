//! Arithmetic, transpose and transform over [`Matrix`].
//!
//! Binary operations validate operand shapes up front and return
//! [`MatrixError::DimensionMismatch`] without computing anything when the
//! shapes are incompatible.

use std::ops::Mul;

use num_traits::Num;
use rayon::prelude::*;

use crate::error::{MatrixError, Operation};
use crate::math::matrix::Matrix;

/// Multiply-adds (`m * n * q`) at which `Matrix::multiply` spreads output rows over rayon workers.
pub(crate) const PARALLEL_MULTIPLY_THRESHOLD: usize = 1 << 18;

impl<T: Copy> Matrix<T> {
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = self.shape();
        let source = self.as_slice();
        let mut data = Vec::with_capacity(source.len());
        for j in 0..cols {
            for i in 0..rows {
                data.push(source[i * cols + j]);
            }
        }
        Matrix::from_parts(cols, rows, data)
    }

    /// Apply `f` to every cell, producing a matrix of the same shape.
    pub fn transform<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        let (rows, cols) = self.shape();
        log::trace!("Transforming {}x{} matrix", rows, cols);
        let data = self.as_slice().iter().copied().map(f).collect();
        Matrix::from_parts(rows, cols, data)
    }
}

impl<T: Copy + Num> Matrix<T> {
    pub fn add(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        zip_with(left, right, Operation::Add, |a, b| a + b)
    }

    /// `left - right`, cell by cell.
    pub fn subtract(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        zip_with(left, right, Operation::Subtract, |a, b| a - b)
    }

    /// Hadamard product.
    pub fn multiply_elements(
        left: &Matrix<T>,
        right: &Matrix<T>,
    ) -> Result<Matrix<T>, MatrixError> {
        zip_with(left, right, Operation::MultiplyElements, |a, b| a * b)
    }

    pub fn multiply_scalar(matrix: &Matrix<T>, scalar: T) -> Matrix<T> {
        matrix.transform(|value| value * scalar)
    }

    /// Elementwise equality within `tolerance`. Matrices of different shapes are never equal.
    pub fn approx_eq(&self, other: &Matrix<T>, tolerance: T) -> bool
    where
        T: PartialOrd,
    {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(&a, &b)| {
                    let diff = if a > b { a - b } else { b - a };
                    diff <= tolerance
                })
    }
}

impl<T: Copy + Num + Send + Sync> Matrix<T> {
    /// Standard matrix product: `result[i][j] = sum_k left[i][k] * right[k][j]`.
    ///
    /// Requires `left.cols() == right.rows()`; the result is
    /// `left.rows() x right.cols()`. Large products fill disjoint output rows
    /// in parallel with the same per-cell kernel as the sequential path, so
    /// results do not depend on which path ran.
    pub fn multiply(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let (m, n) = left.shape();
        let (p, q) = right.shape();
        if n != p {
            log::debug!("Cannot multiply {}x{} by {}x{}", m, n, p, q);
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: (m, n),
                right: (p, q),
            });
        }
        log::trace!("Multiplying {}x{} by {}x{}", m, n, p, q);

        let lhs = left.as_slice();
        let rhs = right.as_slice();
        let fill_row = |(i, out): (usize, &mut [T])| {
            let a_row = &lhs[i * n..(i + 1) * n];
            for (j, cell) in out.iter_mut().enumerate() {
                *cell = dot_column(a_row, rhs, q, j);
            }
        };

        let mut data = vec![T::zero(); m * q];
        if m > 1 && m.saturating_mul(n).saturating_mul(q) >= PARALLEL_MULTIPLY_THRESHOLD {
            log::debug!(
                "Splitting {}x{} product over {} rayon threads",
                m,
                q,
                rayon::current_num_threads()
            );
            data.par_chunks_mut(q).enumerate().for_each(fill_row);
        } else {
            data.chunks_mut(q).enumerate().for_each(fill_row);
        }
        Ok(Matrix::from_parts(m, q, data))
    }
}

/// Row `a_row` of the left operand dotted with column `j` of a row-major `rhs` with `q` columns.
#[inline]
fn dot_column<T: Copy + Num>(a_row: &[T], rhs: &[T], q: usize, j: usize) -> T {
    a_row
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (k, &a)| acc + a * rhs[k * q + j])
}

fn zip_with<T, F>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    operation: Operation,
    f: F,
) -> Result<Matrix<T>, MatrixError>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    if left.shape() != right.shape() {
        log::debug!(
            "Cannot {} {:?} and {:?} matrices",
            operation,
            left.shape(),
            right.shape()
        );
        return Err(MatrixError::DimensionMismatch {
            operation,
            left: left.shape(),
            right: right.shape(),
        });
    }
    log::trace!("{} on {:?} matrices", operation, left.shape());

    let data = left
        .as_slice()
        .iter()
        .zip(right.as_slice())
        .map(|(&a, &b)| f(a, b))
        .collect();
    Ok(Matrix::from_parts(left.rows(), left.cols(), data))
}

impl<'a, T: Copy + Num> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        Matrix::multiply_scalar(self, scalar)
    }
}
