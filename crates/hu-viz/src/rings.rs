//! Rings profile artifacts.
//!
//! The mean profile summarizes a population of events by the column-wise
//! mean and standard deviation of their (optionally L1-normalized) rings.

use hu_core::{RINGS_LAYERS, RingsTable, norm1};
use serde::{Deserialize, Serialize};

/// Start marker of a detector layer on the ring-index axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerMarker {
    /// Layer name.
    pub name: String,
    /// First ring index of the layer.
    pub start: usize,
}

/// Markers for every layer that starts inside `n_rings`, left to right.
pub fn layer_markers(n_rings: usize) -> Vec<LayerMarker> {
    RINGS_LAYERS
        .iter()
        .filter(|l| l.start() < n_rings)
        .map(|l| LayerMarker { name: l.name.to_string(), start: l.start() })
        .collect()
}

/// Mean ± std profile of a rings table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingsProfileArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Legend label of the profile line.
    pub label: String,
    /// Whether rows were L1-normalized before aggregation.
    pub normalized: bool,
    /// Number of events aggregated.
    pub n_events: usize,
    /// Column-wise mean (NaN when there are no events).
    #[serde(with = "crate::nan_serde")]
    pub mean: Vec<f64>,
    /// Column-wise population standard deviation (NaN when there are no events).
    #[serde(with = "crate::nan_serde")]
    pub std: Vec<f64>,
    /// Layer boundaries to mark on the ring axis.
    pub layers: Vec<LayerMarker>,
}

impl RingsProfileArtifact {
    /// Aggregate `table`, normalizing each row first when `normalize` is set.
    pub fn from_table(table: &RingsTable, normalize: bool, label: &str) -> Self {
        let (mean, std) = if normalize {
            norm1(table).column_mean_std()
        } else {
            table.column_mean_std()
        };
        Self {
            schema_version: "hep_utils_rings_profile_v0".to_string(),
            label: label.to_string(),
            normalized: normalize,
            n_events: table.n_rows(),
            layers: layer_markers(mean.len()),
            mean,
            std,
        }
    }

    /// Number of rings on the x axis.
    pub fn n_rings(&self) -> usize {
        self.mean.len()
    }

    /// `mean - std`, per ring.
    pub fn lower(&self) -> Vec<f64> {
        self.mean.iter().zip(&self.std).map(|(m, s)| m - s).collect()
    }

    /// `mean + std`, per ring.
    pub fn upper(&self) -> Vec<f64> {
        self.mean.iter().zip(&self.std).map(|(m, s)| m + s).collect()
    }
}

/// Every event's rings, ready to be drawn one line per event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllRingsArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Whether rows were L1-normalized.
    pub normalized: bool,
    /// Ring count per event.
    pub n_rings: usize,
    /// One vector per event.
    pub rows: Vec<Vec<f64>>,
    /// Layer boundaries to mark on the ring axis.
    pub layers: Vec<LayerMarker>,
}

impl AllRingsArtifact {
    /// Collect the rows of `table`, normalizing them when `normalize` is set.
    pub fn from_table(table: &RingsTable, normalize: bool) -> Self {
        let rows: Vec<Vec<f64>> =
            if normalize { norm1(table).rows().collect() } else { table.rows().collect() };
        if rows.is_empty() {
            log::warn!("all-rings artifact built from an empty table");
        }
        Self {
            schema_version: "hep_utils_all_rings_v0".to_string(),
            normalized: normalize,
            n_rings: table.n_cols(),
            rows,
            layers: layer_markers(table.n_cols()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use hu_core::N_RINGS;

    #[test]
    fn markers_follow_layer_order() {
        let m = layer_markers(N_RINGS);
        let names: Vec<&str> = m.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["PS", "EM1", "EM2", "EM3", "HAD1", "HAD2", "HAD3"]);
        assert!(m.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn markers_outside_narrow_tables_are_dropped() {
        assert_eq!(layer_markers(10).len(), 2);
        assert!(layer_markers(0).is_empty());
    }

    #[test]
    fn band_edges() {
        let t = RingsTable::from_rows(&[vec![1.0, 0.0], vec![3.0, 0.0]]).unwrap();
        let a = RingsProfileArtifact::from_table(&t, false, "x");
        assert_abs_diff_eq!(a.lower()[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.upper()[0], 3.0, epsilon = 1e-12);
        assert_eq!(a.n_rings(), 2);
    }

    #[test]
    fn nan_statistics_survive_json() {
        let a = RingsProfileArtifact::from_table(&RingsTable::empty(3), true, "");
        let s = serde_json::to_string(&a).unwrap();
        assert!(s.contains("\"mean\":[null,null,null]"));
        let back: RingsProfileArtifact = serde_json::from_str(&s).unwrap();
        assert!(back.mean.iter().all(|v| v.is_nan()));
        assert_eq!(back.n_events, 0);
    }
}
