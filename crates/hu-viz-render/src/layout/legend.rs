use crate::canvas::Canvas;
use crate::color::Color;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub kind: LegendKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegendKind {
    FilledRect,
    Line { dash: Dash, marker: bool },
    /// Label only (summary values with no artist).
    Blank,
}

/// Draw a framed legend in the top-right corner of the plot area.
pub fn draw_legend(canvas: &mut Canvas, area: &PlotArea, entries: &[LegendEntry], font_size: f64) {
    if entries.is_empty() {
        return;
    }

    let row_height = font_size + 4.0;
    let swatch_w = 18.0;
    let swatch_h = font_size - 3.0;
    let gap = 6.0;
    let padding = 5.0;

    let text_style = TextStyle { size: font_size * 0.9, baseline: TextBaseline::Central, ..Default::default() };

    let max_w = entries
        .iter()
        .map(|e| canvas.measure_text(&e.label, &text_style).width)
        .fold(0.0_f64, f64::max);

    let legend_w = padding + swatch_w + gap + max_w + padding;
    let legend_h = padding + entries.len() as f64 * row_height + padding;
    let lx = area.right() - legend_w - 6.0;
    let ly = area.top + 6.0;

    let bg_style = Style::filled(Color::rgba(255, 255, 255, 0.8)).outlined(Color::rgb(204, 204, 204), 0.8);
    canvas.rect(lx, ly, legend_w, legend_h, &bg_style);

    for (i, entry) in entries.iter().enumerate() {
        let ey = ly + padding + i as f64 * row_height + row_height / 2.0;
        let sx = lx + padding;

        match &entry.kind {
            LegendKind::FilledRect => {
                canvas.rect(sx, ey - swatch_h / 2.0, swatch_w, swatch_h, &Style::filled(entry.color));
            }
            LegendKind::Line { dash, marker } => {
                let ls = LineStyle { color: entry.color, width: 1.5, dash: *dash };
                canvas.line(sx, ey, sx + swatch_w, ey, &ls);
                if *marker {
                    canvas.marker(sx + swatch_w / 2.0, ey, &MarkerStyle::circle(entry.color, 3.0));
                }
            }
            LegendKind::Blank => {}
        }

        canvas.text(sx + swatch_w + gap, ey, &entry.label, &text_style);
    }
}
