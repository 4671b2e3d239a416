use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::primitives::TextStyle;

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Compute margins from tick labels, axis labels and an optional title.
    pub fn auto(canvas: &Canvas, x: &Axis, y: &Axis, has_title: bool, config: &VizConfig) -> Self {
        let tick_style = TextStyle::sized(config.font.tick_size);

        let max_tick_w = y
            .tick_labels
            .iter()
            .map(|l| canvas.measure_text(l, &tick_style).width)
            .fold(0.0_f64, f64::max);
        let mut left = 12.0 + max_tick_w + config.axes.tick_length + 4.0;
        if !y.label.is_empty() {
            left += config.font.label_size + 6.0;
        }

        let mut bottom = 12.0 + config.font.tick_size + config.axes.tick_length + 4.0;
        if !x.label.is_empty() {
            bottom += config.font.label_size + 6.0;
        }

        let top = if has_title { config.font.title_size * 1.6 + 8.0 } else { 14.0 };
        // Room for a half-width last tick label.
        let right = 18.0;

        let width = canvas.width - left - right;
        let height = canvas.height - top - bottom;
        Self { left, top, width: width.max(50.0), height: height.max(50.0) }
    }
}
