//! Row-major rectangular buffer.

use std::ops::{Index, IndexMut};

use thiserror::Error;

/// Reasons a 2D buffer could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("buffer has no rows or no columns")]
    Empty,

    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("{len} values cannot be split into rows of {cols}")]
    Shape { len: usize, cols: usize },

    #[error("{rows} x {cols} values overflow usize")]
    TooLarge { rows: usize, cols: usize },
}

/// A non-empty matrix of `f64` with equal-length rows.
///
/// Values are stored contiguously in row-major order. Cloning produces an
/// independent deep copy.
///
/// # Examples
///
/// ```
/// use scalekit::Buffer2D;
///
/// let buffer = Buffer2D::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(buffer.rows(), 2);
/// assert_eq!(buffer.cols(), 2);
/// assert_eq!(buffer[(1, 0)], 3.0);
///
/// assert!(Buffer2D::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer2D {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Buffer2D {
    /// Builds a buffer from a list of rows.
    ///
    /// # Errors
    ///
    /// * [`BufferError::Empty`] if there are no rows or the rows are empty
    /// * [`BufferError::Ragged`] if any row differs in length from the first
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, BufferError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(BufferError::Empty);
        }

        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(BufferError::Ragged {
                    row: idx,
                    len: row.len(),
                    expected: cols,
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols,
        })
    }

    /// Builds a buffer from row-major values split into rows of `cols`.
    ///
    /// # Errors
    ///
    /// * [`BufferError::Empty`] if `data` is empty or `cols` is zero
    /// * [`BufferError::Shape`] if `data.len()` is not a multiple of `cols`
    pub fn from_flat(data: Vec<f64>, cols: usize) -> Result<Self, BufferError> {
        if data.is_empty() || cols == 0 {
            return Err(BufferError::Empty);
        }
        if data.len() % cols != 0 {
            return Err(BufferError::Shape {
                len: data.len(),
                cols,
            });
        }
        Ok(Self {
            rows: data.len() / cols,
            cols,
            data,
        })
    }

    /// Builds a `rows` × `cols` buffer filled with `value`.
    ///
    /// # Errors
    ///
    /// * [`BufferError::Empty`] if either dimension is zero
    /// * [`BufferError::TooLarge`] if `rows * cols` overflows `usize`
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, BufferError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(BufferError::TooLarge { rows, cols })?;
        Self::from_flat(vec![value; len], cols)
    }

    /// Number of rows (frames).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (bins).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a constructed buffer.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns row `row` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// All values in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Splits the buffer back into owned rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.cols).map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Buffer2D {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.cols, "column {} out of range ({})", col, self.cols);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Buffer2D {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(col < self.cols, "column {} out of range ({})", col, self.cols);
        &mut self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Buffer2D {
    type Error = BufferError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}
