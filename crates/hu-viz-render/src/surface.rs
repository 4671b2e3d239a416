//! Retained drawing surface.
//!
//! Plot functions record artists on an [`Axes`]; nothing is laid out until
//! [`Axes::render_svg`], so limits and legends reflect everything drawn.

use hu_core::Error;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::header::draw_experiment_header;
use crate::layout::axes::Axis;
use crate::layout::legend::{LegendEntry, LegendKind, draw_legend};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;

/// Fraction of the data span added on each side when autoscaling.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// Vertical position of a text annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YPos {
    /// Data coordinate.
    Data(f64),
    /// Fraction of the upper y limit, resolved at render time.
    UpperLimitFraction(f64),
}

/// Line appearance for [`Axes::plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    /// Explicit colour; `None` takes the next palette colour.
    pub color: Option<Color>,
    pub label: Option<String>,
    pub width: f64,
    pub dashed: bool,
    pub marker: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self { color: None, label: None, width: 1.5, dashed: false, marker: false }
    }
}

#[derive(Debug, Clone)]
enum Artist {
    Line { x: Vec<f64>, y: Vec<f64>, style: LineStyle, marker: bool },
    Band { x: Vec<f64>, lo: Vec<f64>, hi: Vec<f64>, color: Color },
    VLine { x: f64, style: LineStyle },
    HLine { y: f64, style: LineStyle },
    Text { x: f64, y: YPos, content: String },
    Bars { left: Vec<f64>, width: Vec<f64>, height: Vec<f64>, color: Color },
}

/// A single set of axes that plotting functions draw into.
#[derive(Debug, Clone)]
pub struct Axes {
    artists: Vec<Artist>,
    legend: Vec<LegendEntry>,
    show_legend: bool,
    title: String,
    xlabel: String,
    ylabel: String,
    xlim: Option<(f64, f64)>,
    ylim: Option<(f64, f64)>,
    palette: Vec<Color>,
    next_color: usize,
    band_alpha: f64,
    bar_alpha: f64,
    reference_color: Color,
}

impl Axes {
    pub fn new(config: &VizConfig) -> Self {
        let mut palette = config.palette_colors();
        if palette.is_empty() {
            palette.push(Color::BLACK);
        }
        Self {
            artists: Vec::new(),
            legend: Vec::new(),
            show_legend: false,
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            xlim: None,
            ylim: None,
            palette,
            next_color: 0,
            band_alpha: config.colors.band_alpha,
            bar_alpha: config.colors.bar_alpha,
            reference_color: config.colors.reference_line,
        }
    }

    /// Advance the colour cycle.
    pub fn next_color(&mut self) -> Color {
        let c = self.palette[self.next_color % self.palette.len()];
        self.next_color += 1;
        c
    }

    /// First colour of the cycle, without advancing it.
    pub fn first_color(&self) -> Color {
        self.palette[0]
    }

    /// Opacity configured for error bands.
    pub fn band_alpha(&self) -> f64 {
        self.band_alpha
    }

    /// Opacity configured for histogram bars.
    pub fn bar_alpha(&self) -> f64 {
        self.bar_alpha
    }

    /// Colour configured for reference lines.
    pub fn reference_color(&self) -> Color {
        self.reference_color
    }

    /// Draw `y` against `x`. Returns the colour used.
    pub fn plot(&mut self, x: &[f64], y: &[f64], line: &LineOptions) -> hu_core::Result<Color> {
        check_len("plot", x.len(), y.len())?;
        let color = match line.color {
            Some(c) => c,
            None => self.next_color(),
        };
        let style = if line.dashed {
            LineStyle::dashed(color, line.width)
        } else {
            LineStyle::solid(color, line.width)
        };
        if let Some(label) = &line.label
            && !label.is_empty()
        {
            let kind = LegendKind::Line { dash: style.dash, marker: line.marker };
            self.legend.push(LegendEntry { label: label.clone(), color, kind });
        }
        self.artists.push(Artist::Line { x: x.to_vec(), y: y.to_vec(), style, marker: line.marker });
        Ok(color)
    }

    /// Shade the area between `lo` and `hi`.
    pub fn fill_between(&mut self, x: &[f64], lo: &[f64], hi: &[f64], color: Color) -> hu_core::Result<()> {
        check_len("fill_between", x.len(), lo.len())?;
        check_len("fill_between", x.len(), hi.len())?;
        self.artists.push(Artist::Band { x: x.to_vec(), lo: lo.to_vec(), hi: hi.to_vec(), color });
        Ok(())
    }

    pub fn axvline(&mut self, x: f64, style: LineStyle) {
        self.artists.push(Artist::VLine { x, style });
    }

    pub fn axhline(&mut self, y: f64, style: LineStyle) {
        self.artists.push(Artist::HLine { y, style });
    }

    pub fn text(&mut self, x: f64, y: YPos, content: impl Into<String>) {
        self.artists.push(Artist::Text { x, y, content: content.into() });
    }

    /// Bars of common `width` centred on `centers`.
    pub fn bar(
        &mut self,
        centers: &[f64],
        heights: &[f64],
        width: f64,
        color: Color,
        label: Option<&str>,
    ) -> hu_core::Result<()> {
        check_len("bar", centers.len(), heights.len())?;
        let left = centers.iter().map(|c| c - width / 2.0).collect();
        self.push_bars(left, vec![width; centers.len()], heights.to_vec(), color, label);
        Ok(())
    }

    /// Contiguous bars between consecutive `edges`.
    pub fn hist_bars(&mut self, edges: &[f64], counts: &[f64], color: Color, label: Option<&str>) -> hu_core::Result<()> {
        if edges.len() != counts.len() + 1 {
            return Err(Error::Shape(format!(
                "hist_bars: {} edges for {} counts",
                edges.len(),
                counts.len()
            )));
        }
        let left = edges[..counts.len()].to_vec();
        let width = edges.windows(2).map(|w| w[1] - w[0]).collect();
        self.push_bars(left, width, counts.to_vec(), color, label);
        Ok(())
    }

    fn push_bars(&mut self, left: Vec<f64>, width: Vec<f64>, height: Vec<f64>, color: Color, label: Option<&str>) {
        if let Some(label) = label
            && !label.is_empty()
        {
            self.legend.push(LegendEntry { label: label.into(), color, kind: LegendKind::FilledRect });
        }
        self.artists.push(Artist::Bars { left, width, height, color });
    }

    /// Legend row with no artist behind it.
    pub fn legend_entry(&mut self, label: impl Into<String>) {
        self.legend.push(LegendEntry { label: label.into(), color: Color::BLACK, kind: LegendKind::Blank });
    }

    /// Show the legend (if any entry was labelled).
    pub fn legend(&mut self) {
        self.show_legend = true;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = label.into();
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = label.into();
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.xlim = Some((min, max));
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.ylim = Some((min, max));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    pub fn legend_entries(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Explicit x limits, or the data span plus a small margin.
    pub fn x_limits(&self) -> (f64, f64) {
        if let Some(lim) = self.xlim {
            return lim;
        }
        let mut span = Span::default();
        for a in &self.artists {
            match a {
                Artist::Line { x, .. } | Artist::Band { x, .. } => span.extend(x),
                Artist::VLine { x, .. } => span.add(*x),
                Artist::Bars { left, width, .. } => {
                    for (l, w) in left.iter().zip(width) {
                        span.add(*l);
                        span.add(l + w);
                    }
                }
                Artist::HLine { .. } | Artist::Text { .. } => {}
            }
        }
        span.padded(false)
    }

    /// Explicit y limits, or the data span plus a small margin. Bars keep
    /// their zero baseline on the axis edge.
    pub fn y_limits(&self) -> (f64, f64) {
        if let Some(lim) = self.ylim {
            return lim;
        }
        let mut span = Span::default();
        let mut has_bars = false;
        for a in &self.artists {
            match a {
                Artist::Line { y, .. } => span.extend(y),
                Artist::Band { lo, hi, .. } => {
                    span.extend(lo);
                    span.extend(hi);
                }
                Artist::HLine { y, .. } => span.add(*y),
                Artist::Bars { height, .. } => {
                    has_bars = true;
                    span.add(0.0);
                    span.extend(height);
                }
                Artist::VLine { .. } | Artist::Text { .. } => {}
            }
        }
        span.padded(has_bars)
    }

    /// Lay out and draw everything recorded so far.
    pub fn render_svg(&self, config: &VizConfig) -> String {
        let mut canvas = Canvas::new(config.figure.width, config.figure.height);

        let (x0, x1) = self.x_limits();
        let (y0, y1) = self.y_limits();
        let x_axis = Axis::within(x0, x1, 7).with_label(&self.xlabel);
        let y_axis = Axis::within(y0, y1, 6).with_label(&self.ylabel);
        let area = PlotArea::auto(&canvas, &x_axis, &y_axis, !self.title.is_empty(), config);

        let px = |v: f64| x_axis.data_to_pixel(v, area.left, area.right());
        let py = |v: f64| y_axis.data_to_pixel(v, area.bottom(), area.top);

        canvas.push_clip(area.left, area.top, area.width, area.height);
        for artist in &self.artists {
            match artist {
                Artist::Line { x, y, style, marker } => {
                    for run in finite_runs(x.len(), |i| x[i].is_finite() && y[i].is_finite()) {
                        let pts: Vec<(f64, f64)> = run.map(|i| (px(x[i]), py(y[i]))).collect();
                        canvas.polyline(&pts, style);
                        if *marker {
                            let m = MarkerStyle::circle(style.color, 3.0);
                            for &(mx, my) in &pts {
                                canvas.marker(mx, my, &m);
                            }
                        }
                    }
                }
                Artist::Band { x, lo, hi, color } => {
                    let ok = |i: usize| x[i].is_finite() && lo[i].is_finite() && hi[i].is_finite();
                    let style = Style::filled(color.with_alpha(self.band_alpha));
                    for run in finite_runs(x.len(), ok) {
                        let xs: Vec<f64> = run.clone().map(|i| px(x[i])).collect();
                        let los: Vec<f64> = run.clone().map(|i| py(lo[i])).collect();
                        let his: Vec<f64> = run.map(|i| py(hi[i])).collect();
                        canvas.fill_between(&xs, &los, &his, &style);
                    }
                }
                Artist::VLine { x, style } if x.is_finite() => {
                    canvas.line(px(*x), area.top, px(*x), area.bottom(), style);
                }
                Artist::HLine { y, style } if y.is_finite() => {
                    canvas.line(area.left, py(*y), area.right(), py(*y), style);
                }
                Artist::Bars { left, width, height, color } => {
                    let style = Style::filled(*color);
                    let base = py(0.0);
                    for ((&l, &w), &h) in left.iter().zip(width).zip(height) {
                        if !h.is_finite() {
                            continue;
                        }
                        let (top, bottom) = if py(h) < base { (py(h), base) } else { (base, py(h)) };
                        canvas.rect(px(l), top, px(l + w) - px(l), bottom - top, &style);
                    }
                }
                _ => {}
            }
        }
        canvas.pop_clip();

        let text_style = TextStyle { baseline: TextBaseline::Central, ..TextStyle::sized(config.font.size) };
        for artist in &self.artists {
            if let Artist::Text { x, y, content } = artist {
                let yv = match *y {
                    YPos::Data(v) => v,
                    YPos::UpperLimitFraction(f) => f * y1,
                };
                if x.is_finite() && yv.is_finite() {
                    canvas.text(px(*x), py(yv), content, &text_style);
                }
            }
        }

        draw_axes(&mut canvas, &area, &x_axis, &y_axis, config);
        draw_experiment_header(&mut canvas, &area, config);

        if self.show_legend {
            draw_legend(&mut canvas, &area, &self.legend, config.font.size);
        }

        if !self.title.is_empty() {
            let style = TextStyle { anchor: TextAnchor::Middle, ..TextStyle::sized(config.font.title_size) };
            canvas.text(area.left + area.width / 2.0, area.top - config.font.title_size * 0.6, &self.title, &style);
        }

        canvas.finish_svg()
    }
}

fn check_len(what: &str, a: usize, b: usize) -> hu_core::Result<()> {
    if a != b {
        return Err(Error::Shape(format!("{what}: length mismatch ({a} vs {b})")));
    }
    Ok(())
}

/// Maximal index ranges over which `ok` holds.
fn finite_runs(n: usize, ok: impl Fn(usize) -> bool) -> Vec<std::ops::Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;
    for i in 0..n {
        match (ok(i), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..n);
    }
    runs
}

#[derive(Debug, Default)]
struct Span {
    min: Option<f64>,
    max: Option<f64>,
}

impl Span {
    fn add(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.min = Some(self.min.map_or(v, |m| m.min(v)));
        self.max = Some(self.max.map_or(v, |m| m.max(v)));
    }

    fn extend(&mut self, values: &[f64]) {
        for &v in values {
            self.add(v);
        }
    }

    /// `sticky_zero` keeps a zero bound on the edge instead of padding it.
    fn padded(&self, sticky_zero: bool) -> (f64, f64) {
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return (0.0, 1.0);
        };
        if max == min {
            return (min - 0.5, max + 0.5);
        }
        let pad = (max - min) * AUTOSCALE_MARGIN;
        let lo = if sticky_zero && min == 0.0 { 0.0 } else { min - pad };
        let hi = if sticky_zero && max == 0.0 { 0.0 } else { max + pad };
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn axes() -> Axes {
        Axes::new(&VizConfig::default())
    }

    #[test]
    fn color_cycle_wraps() {
        let mut ax = axes();
        let first = ax.next_color();
        for _ in 0..9 {
            ax.next_color();
        }
        assert_eq!(ax.next_color(), first);
        assert_eq!(ax.first_color(), first);
    }

    #[test]
    fn autoscale_ignores_nan() {
        let mut ax = axes();
        ax.plot(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 10.0], &LineOptions::default()).unwrap();
        let (lo, hi) = ax.y_limits();
        assert_abs_diff_eq!(lo, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 10.5, epsilon = 1e-12);
    }

    #[test]
    fn explicit_limits_win() {
        let mut ax = axes();
        ax.plot(&[0.0, 5.0], &[1.0, 2.0], &LineOptions::default()).unwrap();
        ax.set_xlim(0.0, 100.0);
        assert_eq!(ax.x_limits(), (0.0, 100.0));
    }

    #[test]
    fn bars_start_at_zero() {
        let mut ax = axes();
        ax.hist_bars(&[0.0, 1.0, 2.0], &[3.0, 5.0], Color::BLACK, None).unwrap();
        let (lo, hi) = ax.y_limits();
        assert_eq!(lo, 0.0);
        assert_abs_diff_eq!(hi, 5.25, epsilon = 1e-12);
    }

    #[test]
    fn length_mismatch_is_shape_error() {
        let mut ax = axes();
        let err = ax.plot(&[0.0, 1.0], &[1.0], &LineOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
        assert!(ax.hist_bars(&[0.0, 1.0], &[1.0, 2.0], Color::BLACK, None).is_err());
    }

    #[test]
    fn nan_splits_polyline() {
        let mut ax = axes();
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        ax.plot(&x, &[1.0, 2.0, f64::NAN, 3.0, 4.0], &LineOptions::default()).unwrap();
        let svg = ax.render_svg(&VizConfig::default());
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn finite_runs_splits() {
        let v = [1.0, f64::NAN, 2.0, 3.0];
        assert_eq!(finite_runs(v.len(), |i| v[i].is_finite()), vec![0..1, 2..4]);
    }

    #[test]
    fn empty_axes_render() {
        let svg = axes().render_svg(&VizConfig::default());
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn title_and_legend_rendered() {
        let mut ax = axes();
        let line = LineOptions { label: Some("electrons".into()), ..Default::default() };
        ax.plot(&[0.0, 1.0], &[0.0, 1.0], &line).unwrap();
        ax.set_title("Profile");
        ax.legend();
        let svg = ax.render_svg(&VizConfig::default());
        assert!(svg.contains(">Profile</text>"));
        assert!(svg.contains(">electrons</text>"));
    }
}
