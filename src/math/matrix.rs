use rand::prelude::*;

use crate::error::{NnError, Result};

/// Dense row-major grid of `f64` values.
///
/// Shape is fixed at construction. Methods ending in `_in_place` mutate the
/// receiver; everything else leaves its inputs untouched and allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

/// Right-hand side of an elementwise in-place operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Matrix(&'a Matrix),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(value: &'a Matrix) -> Self {
        Operand::Matrix(value)
    }
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix> {
        if rows == 0 || cols == 0 {
            return Err(NnError::InvalidDimension { rows, cols });
        }
        Ok(Matrix::zeros(rows, cols))
    }

    // Callers guarantee non-zero dimensions.
    fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a column matrix (`values.len() x 1`) holding `values` in order.
    pub fn from_vec(values: &[f64]) -> Result<Matrix> {
        let mut res = Matrix::new(values.len(), 1)?;
        for (row, &v) in res.data.iter_mut().zip(values) {
            row[0] = v;
        }
        Ok(res)
    }

    /// Builds a matrix from nested rows. Every row must have the same length.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(NnError::InvalidDimension { rows, cols });
        }
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(NnError::DimensionMismatch {
                op: "from_rows",
                left_rows: 1,
                left_cols: cols,
                right_rows: 1,
                right_cols: bad.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Square identity matrix of size `n`.
    pub fn identity(n: usize) -> Result<Matrix> {
        let mut res = Matrix::new(n, n)?;
        for i in 0..n {
            res.data[i][i] = 1.0;
        }
        Ok(res)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.data.get(row).map(Vec::as_slice)
    }

    /// Flattens every entry in row-major order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().flatten().copied().collect()
    }

    /// Uniform Xavier/Glorot initialization.
    ///
    /// Each entry is drawn independently from `U[-limit, limit]` with
    /// `limit = sqrt(6 / (rows + cols))`, so fan-in and fan-out both
    /// contribute to the spread.
    pub fn randomize_uniform(&mut self) {
        let mut rng = rand::thread_rng();
        let limit = self.xavier_limit();
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = rng.gen_range(-limit..=limit);
            }
        }
    }

    pub fn xavier_limit(&self) -> f64 {
        (6.0 / (self.rows + self.cols) as f64).sqrt()
    }

    /// Adds a matrix of the same shape elementwise, or a scalar to every entry.
    pub fn add_in_place<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        self.zip_in_place("add_in_place", operand.into(), |a, b| a + b)
    }

    /// Hadamard product with a matrix of the same shape, or scaling by a scalar.
    pub fn multiply_in_place<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<()> {
        self.zip_in_place("multiply_in_place", operand.into(), |a, b| a * b)
    }

    fn zip_in_place<F>(&mut self, op: &'static str, operand: Operand<'_>, f: F) -> Result<()>
    where
        F: Fn(f64, f64) -> f64,
    {
        match operand {
            Operand::Scalar(s) => {
                self.map_in_place(|x| f(x, s));
            }
            Operand::Matrix(other) => {
                self.ensure_same_shape(op, other)?;
                for (row, other_row) in self.data.iter_mut().zip(&other.data) {
                    for (x, &y) in row.iter_mut().zip(other_row) {
                        *x = f(*x, y);
                    }
                }
            }
        }
        Ok(())
    }

    /// Elementwise `a - b` into a new matrix.
    pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        a.ensure_same_shape("subtract", b)?;
        let data = a.data.iter().zip(&b.data)
            .map(|(row_a, row_b)| row_a.iter().zip(row_b).map(|(x, y)| x - y).collect())
            .collect();
        Ok(Matrix { rows: a.rows, cols: a.cols, data })
    }

    /// Standard matrix product `a x b`, shaped `a.rows x b.cols`.
    pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.cols != b.rows {
            return Err(a.mismatch("multiply", b));
        }

        let mut res = Matrix::zeros(a.rows, b.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..a.cols {
                    sum += a.data[i][k] * b.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Replaces every entry `x` with `f(x)`.
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = f(*x);
            }
        }
    }

    /// Returns a new matrix with `f` applied to every entry of `self`.
    pub fn map_to_new<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| f(x)).collect())
                .collect(),
        }
    }

    fn ensure_same_shape(&self, op: &'static str, other: &Matrix) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch(op, other));
        }
        Ok(())
    }

    fn mismatch(&self, op: &'static str, other: &Matrix) -> NnError {
        NnError::DimensionMismatch {
            op,
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }
}
