//! # hu-viz-render
//!
//! Draws hep-utils plots as SVG (PNG and PDF behind the `png`/`pdf`
//! features).
//!
//! Every plotting call records into an explicit [`Axes`]; the same surface
//! can receive several plots before it is rendered:
//!
//! ```
//! use hu_core::RingsTable;
//! use hu_viz_render::{Axes, RingsProfileOptions, VizConfig, plot_rings_profile};
//!
//! let config = VizConfig::default();
//! let electrons = RingsTable::from_rows(&[vec![4.0, 2.0, 1.0], vec![8.0, 4.0, 2.0]]).unwrap();
//! let jets = RingsTable::from_rows(&[vec![1.0, 2.0, 4.0]]).unwrap();
//!
//! let mut ax = Axes::new(&config);
//! let opts = RingsProfileOptions { label: "electrons".into(), ..Default::default() };
//! let (mean, _std) = plot_rings_profile(&mut ax, &electrons, &opts).unwrap();
//! let opts = RingsProfileOptions { label: "jets".into(), add_rings_labels: false, ..Default::default() };
//! plot_rings_profile(&mut ax, &jets, &opts).unwrap();
//!
//! assert_eq!(mean.len(), 3);
//! assert!(ax.render_svg(&config).contains("jets"));
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod font;
pub mod header;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod surface;
pub mod text;
pub mod theme;

pub use color::Color;
pub use config::{VizConfig, resolve_config};
pub use hu_viz::histogram::{CategoricalHistOptions, HistMetrics, HistOptions};
pub use plots::{
    AllRingsOptions, ErrorAreaOptions, RingsProfileOptions, categorical_histplot, errorarea, histplot,
    plot_all_rings, plot_rings_profile,
};
pub use surface::{Axes, LineOptions, YPos};
pub use theme::BuiltinTheme;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Core(#[from] hu_core::Error),
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
    #[cfg(feature = "pdf")]
    #[error("PDF conversion error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render an artifact JSON to an SVG string.
pub fn render_svg(artifact_json: &str, kind: &str, config: &VizConfig) -> Result<String> {
    let svg = match kind {
        "rings_profile" => {
            let art: hu_viz::RingsProfileArtifact = serde_json::from_str(artifact_json)?;
            plots::rings::render_profile(&art, config)?
        }
        "all_rings" => {
            let art: hu_viz::AllRingsArtifact = serde_json::from_str(artifact_json)?;
            plots::rings::render_all(&art, config)?
        }
        "histogram" => {
            let art: hu_viz::HistogramArtifact = serde_json::from_str(artifact_json)?;
            plots::histogram::render(&art, config)?
        }
        "categorical_histogram" => {
            let art: hu_viz::CategoricalHistogramArtifact = serde_json::from_str(artifact_json)?;
            plots::histogram::render_categorical(&art, config)?
        }
        other => return Err(RenderError::UnknownKind(other.to_string())),
    };
    Ok(svg)
}

/// Encode an SVG document in `format` (`svg`, `png`, `pdf`).
pub fn encode(svg: String, format: &str, config: &VizConfig) -> Result<Vec<u8>> {
    match format {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        #[cfg(feature = "pdf")]
        "pdf" => output::pdf::svg_to_pdf(&svg),
        other => {
            let _ = config;
            Err(RenderError::UnsupportedFormat(other.to_string()))
        }
    }
}

/// Render an artifact JSON to bytes in the specified format.
pub fn render_to_bytes(artifact_json: &str, kind: &str, format: &str, config: &VizConfig) -> Result<Vec<u8>> {
    let svg = render_svg(artifact_json, kind, config)?;
    encode(svg, format, config)
}

/// Output format for `path`: its extension, else `output.format`.
fn format_for<'a>(path: &'a std::path::Path, config: &'a VizConfig) -> &'a str {
    path.extension().and_then(|e| e.to_str()).unwrap_or(config.output.format.as_str())
}

/// Render an artifact JSON to a file (format inferred from extension).
pub fn render_to_file(artifact_json: &str, kind: &str, path: &std::path::Path, config: &VizConfig) -> Result<()> {
    let bytes = render_to_bytes(artifact_json, kind, format_for(path, config), config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Render a drawing surface to a file (format inferred from extension).
pub fn save_axes(ax: &Axes, path: &std::path::Path, config: &VizConfig) -> Result<()> {
    let ext = format_for(path, config);
    let svg = ax.render_svg(config);
    if ext == "svg" {
        return output::svg::save_svg(&svg, path);
    }
    std::fs::write(path, encode(svg, ext, config)?)?;
    Ok(())
}
