//! Dense row-major matrix container.

use super::scalar::Scalar;
use crate::error::{MatrixError, Result};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A `rows × cols` grid of `T`, stored row-major in one contiguous buffer.
///
/// Dimensions are fixed at construction. Element `(i, j)` lives at
/// `data[i * cols + j]`, so every row is exactly `cols` elements long.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero-filled `rows × cols` matrix. Either dimension may be 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::ZERO; rows * cols],
        }
    }

    /// Wrap row-major `data`. Fails if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from nested rows. The first row fixes the column count.
    ///
    /// ```
    /// use matbench::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    /// Overwrite element `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }

    /// Row `i` as a slice of `cols()` elements.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {} out of range for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The whole row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl<T: Scalar + SampleUniform> Matrix<T> {
    /// Overwrite every element with an independent sample from `[min, max)`.
    ///
    /// The generator is seeded from OS entropy and dropped when the call
    /// returns, so results are not reproducible. Use [`Matrix::randomize_with`]
    /// when they need to be.
    ///
    /// # Errors
    ///
    /// [`MatrixError::EmptyRange`] unless `min < max`, and
    /// [`MatrixError::RangeOverflow`] if `max - min` is not finite (infinite
    /// bounds, or finite ones too far apart). The matrix is left untouched.
    pub fn randomize(&mut self, min: T, max: T) -> Result<()> {
        let mut rng = StdRng::from_entropy();
        self.randomize_with(&mut rng, min, max)
    }

    /// Same as [`Matrix::randomize`] but draws from a caller-supplied RNG.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, min: T, max: T) -> Result<()> {
        // `!(min < max)` also rejects NaN bounds.
        if !(min < max) {
            return Err(MatrixError::EmptyRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        if !T::span_is_finite(min, max) {
            return Err(MatrixError::RangeOverflow {
                min: min.to_string(),
                max: max.to_string(),
            });
        }

        let dist = Uniform::new(min, max);
        for value in &mut self.data {
            *value = dist.sample(rng);
        }
        Ok(())
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset(i, j)]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let idx = self.offset(i, j);
        &mut self.data[idx]
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, value) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
