//! Closed-form formulas used in calorimeter analysis.

use std::f64::consts::PI;

use crate::rings::RingsTable;
use crate::{Error, Result};

/// Angular distance between two objects in (eta, phi) space.
///
/// `dphi` is folded into `[0, pi]` so that azimuth periodicity is respected.
/// Non-finite inputs propagate as NaN.
#[inline]
pub fn delta_r(eta1: f64, phi1: f64, eta2: f64, phi2: f64) -> f64 {
    let deta = (eta1 - eta2).abs();
    let mut dphi = (phi1 - phi2).abs();
    if dphi >= PI {
        dphi = 2.0 * PI - dphi;
    }
    (deta * deta + dphi * dphi).sqrt()
}

/// Elementwise [`delta_r`] over equally sized coordinate arrays.
pub fn delta_r_many(eta1: &[f64], phi1: &[f64], eta2: &[f64], phi2: &[f64]) -> Result<Vec<f64>> {
    let n = eta1.len();
    if phi1.len() != n || eta2.len() != n || phi2.len() != n {
        return Err(Error::Shape(format!(
            "delta_r inputs differ in length (eta1={}, phi1={}, eta2={}, phi2={})",
            n,
            phi1.len(),
            eta2.len(),
            phi2.len()
        )));
    }
    Ok((0..n).map(|i| delta_r(eta1[i], phi1[i], eta2[i], phi2[i])).collect())
}

/// Row-wise L1 normalization.
///
/// Every row is divided by the absolute value of its sum. Rows summing to
/// exactly zero are returned unscaled.
pub fn norm1(data: &RingsTable) -> RingsTable {
    let mut out = data.as_matrix().clone();
    for mut row in out.row_iter_mut() {
        let divisor = l1_divisor(row.sum());
        for v in row.iter_mut() {
            *v /= divisor;
        }
    }
    RingsTable::from_matrix(out)
}

/// [`norm1`] over a flat row-major buffer with `n_cols` columns.
pub fn norm1_rows(data: &[f64], n_cols: usize) -> Result<Vec<f64>> {
    if n_cols == 0 || data.len() % n_cols != 0 {
        return Err(Error::Shape(format!(
            "buffer of {} values is not a whole number of rows of width {}",
            data.len(),
            n_cols
        )));
    }
    let mut out = Vec::with_capacity(data.len());
    for row in data.chunks_exact(n_cols) {
        let divisor = l1_divisor(row.iter().sum());
        out.extend(row.iter().map(|&v| v / divisor));
    }
    Ok(out)
}

#[inline]
fn l1_divisor(sum: f64) -> f64 {
    let norm = sum.abs();
    if norm == 0.0 { 1.0 } else { norm }
}
