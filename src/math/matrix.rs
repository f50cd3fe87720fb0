use std::fmt;
use std::mem;
use std::ops::Index;
use std::slice::ChunksExact;

use num_traits::{One, Zero};

use crate::config::{positive_dimensions, MatrixConfig, MatrixInput};
use crate::error::MatrixError;
use crate::math::fill::Fill;

/// A dense, row-major matrix with at least one row and one column.
///
/// Operations never mutate their operands; each returns a new matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Number of cells in a `rows x cols` matrix of `T`, if that shape is valid and allocatable.
pub(crate) fn check_dimensions<T>(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    let len = rows
        .checked_mul(cols)
        .filter(|&len| len > 0)
        .filter(|&len| len.saturating_mul(mem::size_of::<T>()) <= isize::MAX as usize);
    len.ok_or_else(|| {
        log::debug!("Rejecting matrix dimensions {}x{}", rows, cols);
        MatrixError::InvalidDimensions {
            rows: i64::try_from(rows).unwrap_or(i64::MAX),
            cols: i64::try_from(cols).unwrap_or(i64::MAX),
        }
    })
}

impl<T> Matrix<T> {
    /// Callers guarantee `data.len() == rows * cols` with both dimensions positive.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.cols)
    }
}

impl<T: Copy> Matrix<T> {
    /// Build a matrix from a nested sequence of rows.
    ///
    /// The first row fixes the column count; any row of a different length
    /// is rejected with [`MatrixError::ShapeMismatch`].
    pub fn from_values<R>(values: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
    {
        let rows = values.len();
        let cols = values.first().map_or(0, |row| row.as_ref().len());
        let len = check_dimensions::<T>(rows, cols)?;

        let mut data = Vec::with_capacity(len);
        for (idx, row) in values.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                log::debug!(
                    "Row {} has {} values, expected {} from the first row",
                    idx,
                    row.len(),
                    cols
                );
                return Err(MatrixError::ShapeMismatch {
                    row: idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, rows, cols })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn to_vec2(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}

impl<T: Copy + Zero> Matrix<T> {
    /// Build a `rows x cols` matrix whose cells are initialized by `fill`.
    pub fn new(rows: usize, cols: usize, fill: Fill<'_, T>) -> Result<Self, MatrixError> {
        let len = check_dimensions::<T>(rows, cols)?;
        let data = fill.materialize(len);
        Ok(Self { data, rows, cols })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::new(rows, cols, Fill::Zero)
    }

    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, MatrixError> {
        Self::new(rows, cols, Fill::Constant(value))
    }

    /// An all-zero matrix with the same shape as `self`.
    pub fn zeros_like(&self) -> Self {
        Self::from_parts(self.rows, self.cols, vec![T::zero(); self.data.len()])
    }

    /// Dispatch on the construction input variant.
    pub fn from_input(input: MatrixInput<'_, T>) -> Result<Self, MatrixError> {
        match input {
            MatrixInput::Values(values) => Self::from_values(&values),
            MatrixInput::Dimensions { rows, cols, fill } => {
                let (rows, cols) = positive_dimensions(rows, cols)?;
                Self::new(rows, cols, fill)
            }
        }
    }

    pub fn from_config(config: &MatrixConfig<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = config.dimensions()?;
        let fill = config.fill.map_or(Fill::Zero, Fill::Constant);
        Self::new(rows, cols, fill)
    }
}

impl<T: Copy + Zero + One> Matrix<T> {
    /// Square matrix with ones on the main diagonal.
    pub fn identity(size: usize) -> Result<Self, MatrixError> {
        let mut identity = Self::zeros(size, size)?;
        for i in 0..size {
            let offset = identity.offset(i, i);
            identity.data[offset] = T::one();
        }
        Ok(identity)
    }
}

impl<'a, T: Copy + Zero> TryFrom<MatrixInput<'a, T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(input: MatrixInput<'a, T>) -> Result<Self, Self::Error> {
        Matrix::from_input(input)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
