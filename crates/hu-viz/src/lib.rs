//! # hu-viz
//!
//! Visualization data artifacts for hep-utils.
//!
//! Every plot is computed here as a serializable artifact (plain arrays,
//! no drawing). Rendering lives in `hu-viz-render`, so the numbers a plot
//! shows can be tested without producing an image.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod histogram;

pub mod rings;

mod nan_serde;

pub use histogram::{
    CategoricalHistOptions, CategoricalHistogramArtifact, HistMetrics, HistOptions,
    HistogramArtifact, Metric, MetricValue, categorical_histogram_artifact, histogram_artifact,
};
pub use rings::{AllRingsArtifact, LayerMarker, RingsProfileArtifact, layer_markers};
