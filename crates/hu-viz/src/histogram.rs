//! Histogram artifacts.
//!
//! Binned and categorical histograms, with optional summary metrics that the
//! renderer lists in the legend.

use std::cmp::Ordering;
use std::fmt;

use hu_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options for a binned histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistOptions {
    /// Number of equal-width bins.
    pub nbins: usize,
    /// Lower limit; samples below are dropped. Defaults to the data minimum.
    pub bin_min: Option<f64>,
    /// Upper limit; samples above are dropped. Defaults to the data maximum.
    pub bin_max: Option<f64>,
    /// Compute summary metrics.
    pub metrics: bool,
}

impl Default for HistOptions {
    fn default() -> Self {
        Self { nbins: 100, bin_min: None, bin_max: None, metrics: false }
    }
}

/// Options for a categorical (one bar per distinct value) histogram.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoricalHistOptions {
    /// Report bar heights as percentages of the sample count.
    pub percentage: bool,
    /// Compute summary metrics.
    pub metrics: bool,
}

/// A metric value: counts print verbatim, measurements with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Integer count, such as the number of samples.
    Count(u64),
    /// Measured quantity.
    Value(f64),
}

impl MetricValue {
    /// Value as `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Count(c) => c as f64,
            MetricValue::Value(v) => v,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(c) => write!(f, "{c}"),
            MetricValue::Value(v) => write!(f, "{v:.2}"),
        }
    }
}

/// Named metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Display name (`"Mean"`, `"Std"`, ...).
    pub name: String,
    /// Metric value.
    pub value: MetricValue,
}

/// Ordered summary metrics of a histogram. Empty when not requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistMetrics(pub Vec<Metric>);

impl HistMetrics {
    fn push(&mut self, name: &str, value: MetricValue) {
        self.0.push(Metric { name: name.to_string(), value });
    }

    /// Metric by name.
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.0.iter().find(|m| m.name == name).map(|m| m.value)
    }

    /// Whether no metrics were computed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of metrics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Metrics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.0.iter()
    }

    /// `"Name: value"` legend labels, in order.
    pub fn legend_labels(&self) -> Vec<String> {
        self.0.iter().map(|m| format!("{}: {}", m.name, m.value)).collect()
    }
}

/// Equal-width binned histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Bin edges (length = n_bins + 1).
    pub bin_edges: Vec<f64>,
    /// Samples per bin.
    pub counts: Vec<f64>,
    /// Samples inside `[bin_min, bin_max]`.
    pub n_samples: u64,
    /// Lower edge of the first bin.
    pub bin_min: f64,
    /// Upper edge of the last bin.
    pub bin_max: f64,
    /// Summary metrics, empty unless requested.
    pub metrics: HistMetrics,
}

/// Bin `data` into `opts.nbins` equal-width bins.
///
/// Explicit limits drop the samples outside them; missing limits come from
/// the remaining data. NaN samples are ignored.
pub fn histogram_artifact(data: &[f64], opts: &HistOptions) -> Result<HistogramArtifact> {
    if opts.nbins == 0 {
        return Err(Error::Validation("histogram needs at least one bin".into()));
    }

    let mut kept: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if kept.len() != data.len() {
        log::warn!("histogram: ignoring {} NaN samples", data.len() - kept.len());
    }

    let bin_max = match opts.bin_max {
        Some(max) => {
            kept.retain(|&v| v <= max);
            max
        }
        None => kept.iter().copied().reduce(f64::max).ok_or_else(no_samples)?,
    };
    let bin_min = match opts.bin_min {
        Some(min) => {
            kept.retain(|&v| v >= min);
            min
        }
        None => kept.iter().copied().reduce(f64::min).ok_or_else(no_samples)?,
    };
    if bin_min > bin_max {
        return Err(Error::Validation(format!(
            "histogram range is inverted (bin_min={bin_min}, bin_max={bin_max})"
        )));
    }
    if kept.is_empty() {
        log::warn!("histogram: no samples inside [{bin_min}, {bin_max}]");
    }

    let bin_edges = linear_edges(bin_min, bin_max, opts.nbins);
    let lo = bin_edges[0];
    let width = (bin_edges[opts.nbins] - lo) / opts.nbins as f64;
    let mut counts = vec![0.0; opts.nbins];
    for &v in &kept {
        let idx = (((v - lo) / width).floor() as usize).min(opts.nbins - 1);
        counts[idx] += 1.0;
    }

    let mut metrics = HistMetrics::default();
    if opts.metrics {
        let (mean, std) = mean_std(&kept);
        metrics.push("Samples", MetricValue::Count(kept.len() as u64));
        metrics.push("Mean", MetricValue::Value(mean));
        metrics.push("Std", MetricValue::Value(std));
        metrics.push("Min", MetricValue::Value(bin_min));
        metrics.push("Max", MetricValue::Value(bin_max));
    }

    Ok(HistogramArtifact {
        schema_version: "hep_utils_histogram_v0".to_string(),
        bin_edges,
        counts,
        n_samples: kept.len() as u64,
        bin_min,
        bin_max,
        metrics,
    })
}

/// One bar per distinct value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalHistogramArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Distinct values, ascending.
    pub categories: Vec<f64>,
    /// Occurrences of each category.
    pub counts: Vec<u64>,
    /// Bar heights: counts, or percentages of `n_samples`.
    pub heights: Vec<f64>,
    /// Whether `heights` are percentages.
    pub percentage: bool,
    /// Non-NaN samples counted.
    pub n_samples: u64,
    /// Summary metrics, empty unless requested.
    pub metrics: HistMetrics,
}

/// Count the distinct values of `data`. NaN samples are ignored.
pub fn categorical_histogram_artifact(
    data: &[f64],
    opts: &CategoricalHistOptions,
) -> CategoricalHistogramArtifact {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.len() != data.len() {
        log::warn!("categorical histogram: ignoring {} NaN samples", data.len() - sorted.len());
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut categories: Vec<f64> = Vec::new();
    let mut counts: Vec<u64> = Vec::new();
    for v in sorted {
        match categories.last() {
            Some(&last) if last == v => {
                if let Some(c) = counts.last_mut() {
                    *c += 1;
                }
            }
            _ => {
                categories.push(v);
                counts.push(1);
            }
        }
    }

    let n_samples: u64 = counts.iter().sum();
    let heights = if opts.percentage && n_samples > 0 {
        counts.iter().map(|&c| 100.0 * c as f64 / n_samples as f64).collect()
    } else {
        counts.iter().map(|&c| c as f64).collect()
    };

    let mut metrics = HistMetrics::default();
    if opts.metrics {
        metrics.push("Samples", MetricValue::Count(n_samples));
    }

    CategoricalHistogramArtifact {
        schema_version: "hep_utils_categorical_histogram_v0".to_string(),
        categories,
        counts,
        heights,
        percentage: opts.percentage,
        n_samples,
        metrics,
    }
}

fn no_samples() -> Error {
    Error::Validation("histogram limits cannot be derived from an empty sample".into())
}

/// `n + 1` evenly spaced edges. A degenerate range is widened to `±0.5`.
fn linear_edges(min: f64, max: f64, n: usize) -> Vec<f64> {
    let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
    let step = (hi - lo) / n as f64;
    let mut edges: Vec<f64> = (0..n).map(|i| lo + i as f64 * step).collect();
    edges.push(hi);
    edges
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equal_width_bins() {
        let data = [0.0, 0.5, 1.0, 1.5, 2.0];
        let h = histogram_artifact(&data, &HistOptions { nbins: 4, ..Default::default() }).unwrap();
        assert_eq!(h.bin_edges, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        // The maximum lands in the last (right-closed) bin.
        assert_eq!(h.counts, vec![1.0, 1.0, 1.0, 2.0]);
        assert_eq!(h.n_samples, 5);
        assert!(h.metrics.is_empty());
    }

    #[test]
    fn explicit_limits_drop_outliers() {
        let data = [-5.0, 0.1, 0.2, 0.9, 7.0];
        let opts = HistOptions { nbins: 2, bin_min: Some(0.0), bin_max: Some(1.0), metrics: true };
        let h = histogram_artifact(&data, &opts).unwrap();
        assert_eq!(h.counts, vec![2.0, 1.0]);
        assert_eq!(h.metrics.get("Samples"), Some(MetricValue::Count(3)));
        assert_abs_diff_eq!(h.metrics.get("Mean").unwrap().as_f64(), 0.4, epsilon = 1e-12);
        assert_eq!(h.metrics.get("Min"), Some(MetricValue::Value(0.0)));
        assert_eq!(h.metrics.get("Max"), Some(MetricValue::Value(1.0)));
    }

    #[test]
    fn missing_min_uses_clipped_data() {
        let data = [1.0, 2.0, 3.0, 100.0];
        let opts = HistOptions { nbins: 2, bin_max: Some(3.0), ..Default::default() };
        let h = histogram_artifact(&data, &opts).unwrap();
        assert_eq!(h.bin_min, 1.0);
        assert_eq!(h.bin_max, 3.0);
        assert_eq!(h.n_samples, 3);
    }

    #[test]
    fn metrics_order_and_labels() {
        let opts = HistOptions { nbins: 3, metrics: true, ..Default::default() };
        let h = histogram_artifact(&[1.0, 2.0, 3.0], &opts).unwrap();
        let names: Vec<&str> = h.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Samples", "Mean", "Std", "Min", "Max"]);
        let labels = h.metrics.legend_labels();
        assert_eq!(labels[0], "Samples: 3");
        assert_eq!(labels[1], "Mean: 2.00");
        assert_eq!(labels[2], "Std: 0.82");
    }

    #[test]
    fn degenerate_inputs() {
        assert!(matches!(histogram_artifact(&[], &HistOptions::default()), Err(Error::Validation(_))));
        let zero = HistOptions { nbins: 0, ..Default::default() };
        assert!(histogram_artifact(&[1.0], &zero).is_err());
        let inverted = HistOptions { bin_min: Some(2.0), bin_max: Some(1.0), ..Default::default() };
        assert!(histogram_artifact(&[1.5], &inverted).is_err());

        let single = histogram_artifact(&[4.0, 4.0], &HistOptions { nbins: 2, ..Default::default() })
            .unwrap();
        assert_eq!(single.bin_edges, vec![3.5, 4.0, 4.5]);
        assert_eq!(single.counts, vec![0.0, 2.0]);
    }

    #[test]
    fn categorical_percentages() {
        let h = categorical_histogram_artifact(
            &[1.0, 1.0, 2.0, 3.0, 3.0, 3.0],
            &CategoricalHistOptions { percentage: true, metrics: true },
        );
        assert_eq!(h.categories, vec![1.0, 2.0, 3.0]);
        assert_eq!(h.counts, vec![2, 1, 3]);
        assert_abs_diff_eq!(h.heights[0], 33.33, epsilon = 0.01);
        assert_abs_diff_eq!(h.heights[1], 16.67, epsilon = 0.01);
        assert_abs_diff_eq!(h.heights[2], 50.0, epsilon = 0.01);
        assert_eq!(h.metrics.legend_labels(), vec!["Samples: 6"]);
    }

    #[test]
    fn categorical_counts_and_empty() {
        let h = categorical_histogram_artifact(&[5.0, f64::NAN, 2.0, 5.0], &Default::default());
        assert_eq!(h.categories, vec![2.0, 5.0]);
        assert_eq!(h.heights, vec![1.0, 2.0]);
        assert_eq!(h.n_samples, 3);

        let empty = categorical_histogram_artifact(&[], &CategoricalHistOptions {
            percentage: true,
            metrics: false,
        });
        assert!(empty.categories.is_empty());
        assert!(empty.heights.is_empty());
    }
}
