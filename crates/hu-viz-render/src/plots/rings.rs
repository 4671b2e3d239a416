use hu_core::RingsTable;
use hu_viz::rings::{AllRingsArtifact, LayerMarker, RingsProfileArtifact};

use crate::color::Color;
use crate::config::VizConfig;
use crate::primitives::LineStyle;
use crate::surface::{Axes, LineOptions, YPos};

/// Options for [`plot_rings_profile`].
#[derive(Debug, Clone, PartialEq)]
pub struct RingsProfileOptions {
    /// L1-normalize each event before averaging.
    pub normalize: bool,
    /// Shade mean ± std.
    pub error_margin: bool,
    pub label: String,
    /// Mark the first ring of every calorimeter layer.
    pub add_rings_labels: bool,
}

impl Default for RingsProfileOptions {
    fn default() -> Self {
        Self { normalize: true, error_margin: true, label: String::new(), add_rings_labels: true }
    }
}

/// Options for [`plot_all_rings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllRingsOptions {
    pub normalize: bool,
    pub add_rings_labels: bool,
    /// Line colour; defaults to the first colour of the cycle.
    pub color: Option<Color>,
}

impl Default for AllRingsOptions {
    fn default() -> Self {
        Self { normalize: true, add_rings_labels: true, color: None }
    }
}

/// Options for [`errorarea`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorAreaOptions {
    pub line: LineOptions,
    /// Band colour; defaults to the line colour.
    pub band_color: Option<Color>,
}

/// Plot the per-ring mean over all events, with its spread and the layer
/// boundaries. Returns `(mean, std)` per ring.
pub fn plot_rings_profile(
    ax: &mut Axes,
    table: &RingsTable,
    opts: &RingsProfileOptions,
) -> hu_core::Result<(Vec<f64>, Vec<f64>)> {
    let artifact = RingsProfileArtifact::from_table(table, opts.normalize, &opts.label);
    draw_rings_profile(ax, &artifact, opts.error_margin, opts.add_rings_labels)?;
    Ok((artifact.mean, artifact.std))
}

pub(crate) fn draw_rings_profile(
    ax: &mut Axes,
    artifact: &RingsProfileArtifact,
    error_margin: bool,
    add_rings_labels: bool,
) -> hu_core::Result<()> {
    let n = artifact.n_rings();
    let x = ring_index(n);

    let line = LineOptions { label: Some(artifact.label.clone()), marker: true, ..Default::default() };
    let color = ax.plot(&x, &artifact.mean, &line)?;
    if error_margin {
        ax.fill_between(&x, &artifact.lower(), &artifact.upper(), color)?;
    }
    if add_rings_labels {
        draw_layer_markers(ax, &artifact.layers);
    }
    let guide = LineStyle::dashed(ax.reference_color(), 1.0);
    ax.axhline(0.0, guide);
    ax.legend();
    ax.set_title("Rings mean profile");
    ax.set_xlim(0.0, n as f64);
    ax.set_xlabel("Ring index");
    ax.set_ylabel("Normalized energy");
    Ok(())
}

/// Plot one line per event.
pub fn plot_all_rings(ax: &mut Axes, table: &RingsTable, opts: &AllRingsOptions) -> hu_core::Result<()> {
    let artifact = AllRingsArtifact::from_table(table, opts.normalize);
    draw_all_rings(ax, &artifact, opts.add_rings_labels, opts.color)
}

pub(crate) fn draw_all_rings(
    ax: &mut Axes,
    artifact: &AllRingsArtifact,
    add_rings_labels: bool,
    color: Option<Color>,
) -> hu_core::Result<()> {
    let x = ring_index(artifact.n_rings);
    let line = LineOptions { color: Some(color.unwrap_or_else(|| ax.first_color())), width: 1.0, ..Default::default() };
    for row in &artifact.rows {
        ax.plot(&x, row, &line)?;
    }
    if add_rings_labels {
        draw_layer_markers(ax, &artifact.layers);
    }
    let guide = LineStyle::dashed(ax.reference_color(), 1.0);
    ax.axhline(0.0, guide);
    ax.set_title("All Rings");
    ax.set_xlim(0.0, artifact.n_rings as f64);
    ax.set_xlabel("Ring index");
    ax.set_ylabel(if artifact.normalized { "Normalized energy" } else { "Energy" });
    Ok(())
}

/// Line `y` with a shaded `y ± yerr` band.
pub fn errorarea(ax: &mut Axes, x: &[f64], y: &[f64], yerr: &[f64], opts: &ErrorAreaOptions) -> hu_core::Result<()> {
    if y.len() != yerr.len() {
        return Err(hu_core::Error::Shape(format!(
            "errorarea: {} values with {} errors",
            y.len(),
            yerr.len()
        )));
    }
    let color = ax.plot(x, y, &opts.line)?;
    let lo: Vec<f64> = y.iter().zip(yerr).map(|(v, e)| v - e).collect();
    let hi: Vec<f64> = y.iter().zip(yerr).map(|(v, e)| v + e).collect();
    ax.fill_between(x, &lo, &hi, opts.band_color.unwrap_or(color))
}

fn draw_layer_markers(ax: &mut Axes, layers: &[LayerMarker]) {
    let guide = LineStyle::dashed(ax.reference_color(), 1.0);
    for layer in layers {
        let start = layer.start as f64;
        ax.axvline(start, guide);
        ax.text(start + 0.5, YPos::UpperLimitFraction(0.95), &layer.name);
    }
}

fn ring_index(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

pub fn render_profile(artifact: &RingsProfileArtifact, config: &VizConfig) -> crate::Result<String> {
    let mut ax = Axes::new(config);
    draw_rings_profile(&mut ax, artifact, true, true)?;
    Ok(ax.render_svg(config))
}

pub fn render_all(artifact: &AllRingsArtifact, config: &VizConfig) -> crate::Result<String> {
    let mut ax = Axes::new(config);
    draw_all_rings(&mut ax, artifact, true, None)?;
    Ok(ax.render_svg(config))
}
