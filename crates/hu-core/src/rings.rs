//! Dense table of per-event rings energies.

use nalgebra::DMatrix;

use crate::{Error, Result};

/// Events × rings matrix. Rows are events, columns are ring indices.
///
/// The table is never mutated in place: transformations such as
/// [`crate::norm1`] return a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct RingsTable {
    data: DMatrix<f64>,
}

impl RingsTable {
    /// Wrap an existing matrix.
    pub fn from_matrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Build from a row-major buffer of `n_rows * n_cols` values.
    pub fn from_row_major(n_rows: usize, n_cols: usize, values: &[f64]) -> Result<Self> {
        if n_rows.checked_mul(n_cols) != Some(values.len()) {
            return Err(Error::Shape(format!(
                "expected {n_rows}x{n_cols} values, got {}",
                values.len()
            )));
        }
        Ok(Self { data: DMatrix::from_row_slice(n_rows, n_cols, values) })
    }

    /// Build from per-event rows. All rows must share the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut flat = Vec::with_capacity(rows.len() * n_cols);
        for (i, r) in rows.iter().enumerate() {
            if r.len() != n_cols {
                return Err(Error::Shape(format!(
                    "row {i} has {} rings, expected {n_cols}",
                    r.len()
                )));
            }
            flat.extend_from_slice(r);
        }
        Self::from_row_major(rows.len(), n_cols, &flat)
    }

    /// An empty table with a fixed number of columns.
    pub fn empty(n_cols: usize) -> Self {
        Self { data: DMatrix::zeros(0, n_cols) }
    }

    /// Number of events.
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of rings per event.
    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(n_rows, n_cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Whether the table holds no events.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.data.row(i).iter().copied().collect()
    }

    /// Iterate over rows as owned vectors.
    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        self.data.row_iter().map(|r| r.iter().copied().collect())
    }

    /// Underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Column-wise mean and population standard deviation.
    ///
    /// With no rows both statistics are undefined and every entry is NaN.
    pub fn column_mean_std(&self) -> (Vec<f64>, Vec<f64>) {
        let (n_rows, n_cols) = self.shape();
        if n_rows == 0 {
            log::warn!("mean/std requested on an empty rings table ({n_cols} columns)");
            return (vec![f64::NAN; n_cols], vec![f64::NAN; n_cols]);
        }
        let n = n_rows as f64;
        let mut mean = Vec::with_capacity(n_cols);
        let mut std = Vec::with_capacity(n_cols);
        for col in self.data.column_iter() {
            let m = col.iter().sum::<f64>() / n;
            let var = col.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / n;
            mean.push(m);
            std.push(var.sqrt());
        }
        (mean, std)
    }
}

impl From<DMatrix<f64>> for RingsTable {
    fn from(data: DMatrix<f64>) -> Self {
        Self::from_matrix(data)
    }
}
