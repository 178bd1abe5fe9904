use std::fmt;

use crate::error::{MatrixError, Result};

/// Scalar type stored in every matrix cell.
pub type Element = i64;

/// Flat storage for one N×N integer matrix.
///
/// Cells are stored row-major: cell (x, y) is row `x`, column `y`, at
/// linear index `x * N + y`. The length is always exactly N².
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    dimension: usize,
    data: Vec<Element>,
}

impl Buffer {
    /// Number of cells in an N×N buffer.
    ///
    /// # Errors
    /// Returns `TooLarge` if N² does not fit in `usize`.
    pub fn cell_count(dimension: usize) -> Result<usize> {
        dimension
            .checked_mul(dimension)
            .ok_or(MatrixError::TooLarge { dimension })
    }

    /// Create a zero-filled buffer of the given dimension.
    ///
    /// # Panics
    /// Panics if N² does not fit in `usize`.
    pub fn zeros(dimension: usize) -> Self {
        let len = match Buffer::cell_count(dimension) {
            Ok(len) => len,
            Err(e) => panic!("{}", e),
        };
        Buffer {
            dimension,
            data: vec![0; len],
        }
    }

    /// Create the N×N identity matrix.
    pub fn identity(dimension: usize) -> Self {
        let mut buffer = Buffer::zeros(dimension);
        for x in 0..dimension {
            buffer.set(x, x, 1);
        }
        buffer
    }

    /// Create a buffer from row-major data.
    ///
    /// # Errors
    /// Returns an error if `data.len()` is not `dimension²`, or if `dimension²`
    /// overflows.
    pub fn from_vec(dimension: usize, data: Vec<Element>) -> Result<Self> {
        let expected = Buffer::cell_count(dimension)?;
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch {
                dimension,
                expected,
                got: data.len(),
            });
        }
        Ok(Buffer { dimension, data })
    }

    /// Create a buffer from a slice of rows.
    ///
    /// # Errors
    /// Returns an error if any row's length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<Element>]) -> Result<Self> {
        let dimension = rows.len();
        let mut data = Vec::with_capacity(dimension * dimension);
        for row in rows {
            if row.len() != dimension {
                return Err(MatrixError::LengthMismatch {
                    dimension,
                    expected: dimension,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Buffer::from_vec(dimension, data)
    }

    /// Logical dimension N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells (N²).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if (x, y) lies inside the N×N extent.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.dimension && y < self.dimension
    }

    /// Read cell (x, y), or 0 if it lies outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Element {
        if self.contains(x, y) {
            self.data[x * self.dimension + y]
        } else {
            0
        }
    }

    /// Write cell (x, y). Writes outside the buffer are discarded.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Element) {
        if self.contains(x, y) {
            self.data[x * self.dimension + y] = value;
        }
    }

    /// Returns the cells as a row-major slice.
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Returns the cells as a mutable row-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// The main diagonal, top-left to bottom-right.
    pub fn diagonal(&self) -> Vec<Element> {
        (0..self.dimension).map(|x| self.get(x, x)).collect()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.dimension {
            for y in 0..self.dimension {
                write!(f, "{} ", self.get(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let b = Buffer::zeros(3);
        assert_eq!(b.dimension(), 3);
        assert_eq!(b.len(), 9);
        assert!(!b.is_empty());
        assert_eq!(b.as_slice(), &[0; 9]);
    }

    #[test]
    fn test_from_vec_row_major() {
        let b = Buffer::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(b.get(0, 1), 2);
        assert_eq!(b.get(1, 0), 3);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Buffer::from_vec(2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::LengthMismatch {
                dimension: 2,
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        let dimension = 1usize << (usize::BITS / 2);
        assert_eq!(
            Buffer::cell_count(dimension),
            Err(MatrixError::TooLarge { dimension })
        );
        assert_eq!(
            Buffer::from_vec(dimension, Vec::new()),
            Err(MatrixError::TooLarge { dimension })
        );
        assert_eq!(Buffer::cell_count(3), Ok(9));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_zeros_oversized_panics() {
        let _ = Buffer::zeros(usize::MAX);
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(Buffer::from_rows(&[vec![1, 2], vec![3]]).is_err());
        assert!(Buffer::from_rows(&[vec![1, 2, 3], vec![4]]).is_err());
    }

    #[test]
    fn test_out_of_extent_is_zero_and_ignored() {
        let mut b = Buffer::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(b.get(2, 0), 0);
        assert_eq!(b.get(0, 5), 0);
        b.set(2, 2, 99);
        assert_eq!(b.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_identity_and_diagonal() {
        let b = Buffer::identity(3);
        assert_eq!(b.diagonal(), vec![1, 1, 1]);
        assert_eq!(b.get(0, 1), 0);
    }

    #[test]
    fn test_display() {
        let b = Buffer::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(b.to_string(), "1 2 \n3 4 \n");
    }

    #[test]
    fn test_empty() {
        let b = Buffer::zeros(0);
        assert!(b.is_empty());
        assert_eq!(b.to_string(), "");
    }
}
