use hu_viz::histogram::{
    CategoricalHistOptions, CategoricalHistogramArtifact, HistMetrics, HistOptions, HistogramArtifact,
    categorical_histogram_artifact, histogram_artifact,
};

use crate::config::VizConfig;
use crate::surface::Axes;

/// Bar width of a categorical histogram, in category units.
const CATEGORY_BAR_WIDTH: f64 = 0.8;

/// Bin `data` and draw it as a filled histogram. With `opts.metrics` the
/// summary values are added as legend rows and returned.
pub fn histplot(ax: &mut Axes, data: &[f64], opts: &HistOptions) -> hu_core::Result<HistMetrics> {
    let artifact = histogram_artifact(data, opts)?;
    draw_histogram(ax, &artifact)?;
    Ok(artifact.metrics)
}

pub(crate) fn draw_histogram(ax: &mut Axes, artifact: &HistogramArtifact) -> hu_core::Result<()> {
    let color = ax.next_color();
    let bar_color = color.with_alpha(color.a * ax.bar_alpha());
    ax.hist_bars(&artifact.bin_edges, &artifact.counts, bar_color, None)?;
    add_metrics(ax, &artifact.metrics);
    Ok(())
}

/// Count each distinct value of `data` and draw one centred bar per value.
pub fn categorical_histplot(
    ax: &mut Axes,
    data: &[f64],
    opts: &CategoricalHistOptions,
) -> hu_core::Result<HistMetrics> {
    let artifact = categorical_histogram_artifact(data, opts);
    draw_categorical(ax, &artifact)?;
    Ok(artifact.metrics)
}

pub(crate) fn draw_categorical(ax: &mut Axes, artifact: &CategoricalHistogramArtifact) -> hu_core::Result<()> {
    let color = ax.next_color();
    let bar_color = color.with_alpha(color.a * ax.bar_alpha());
    ax.bar(&artifact.categories, &artifact.heights, CATEGORY_BAR_WIDTH, bar_color, None)?;
    add_metrics(ax, &artifact.metrics);
    Ok(())
}

fn add_metrics(ax: &mut Axes, metrics: &HistMetrics) {
    if metrics.is_empty() {
        return;
    }
    for label in metrics.legend_labels() {
        ax.legend_entry(label);
    }
    ax.legend();
}

pub fn render(artifact: &HistogramArtifact, config: &VizConfig) -> crate::Result<String> {
    let mut ax = Axes::new(config);
    draw_histogram(&mut ax, artifact)?;
    Ok(ax.render_svg(config))
}

pub fn render_categorical(artifact: &CategoricalHistogramArtifact, config: &VizConfig) -> crate::Result<String> {
    let mut ax = Axes::new(config);
    draw_categorical(&mut ax, artifact)?;
    if artifact.percentage {
        ax.set_ylabel("%");
    }
    Ok(ax.render_svg(config))
}
