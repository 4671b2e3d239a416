use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Draw the box frame with ticks, optional grid, tick labels and axis labels.
pub(crate) fn draw_axes(canvas: &mut Canvas, area: &PlotArea, x_axis: &Axis, y_axis: &Axis, config: &VizConfig) {
    let frame_style = LineStyle::solid(Color::BLACK, config.axes.line_width);
    let tick_line = LineStyle::solid(Color::BLACK, config.axes.line_width * 0.8);
    let grid_style = LineStyle::solid(config.grid.color.with_alpha(config.grid.alpha), 0.5);

    let inward = config.axes.tick_direction == "in";
    let tl = config.axes.tick_length;
    // Signed tick length measured away from the frame edge into the plot.
    let into = if inward { tl } else { -tl };
    let outside = if inward { 0.0 } else { tl };

    canvas.line(area.left, area.top, area.right(), area.top, &frame_style);
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &frame_style);
    canvas.line(area.left, area.top, area.left, area.bottom(), &frame_style);
    canvas.line(area.right(), area.top, area.right(), area.bottom(), &frame_style);

    let x_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };
    for (&val, label) in x_axis.tick_positions.iter().zip(&x_axis.tick_labels) {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        if config.grid.show {
            canvas.line(px, area.top, px, area.bottom(), &grid_style);
        }
        canvas.line(px, area.bottom(), px, area.bottom() - into, &tick_line);
        if config.axes.show_top_ticks {
            canvas.line(px, area.top, px, area.top + into, &tick_line);
        }
        canvas.text(px, area.bottom() + outside + 3.0, label, &x_label_style);
    }

    let y_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    let mut widest = 0.0_f64;
    for (&val, label) in y_axis.tick_positions.iter().zip(&y_axis.tick_labels) {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        if config.grid.show {
            canvas.line(area.left, py, area.right(), py, &grid_style);
        }
        canvas.line(area.left, py, area.left + into, py, &tick_line);
        if config.axes.show_right_ticks {
            canvas.line(area.right(), py, area.right() - into, py, &tick_line);
        }
        canvas.text(area.left - outside - 4.0, py, label, &y_label_style);
        widest = widest.max(canvas.measure_text(label, &y_label_style).width);
    }

    let label_style = TextStyle { size: config.font.label_size, anchor: TextAnchor::Middle, ..Default::default() };
    if !x_axis.label.is_empty() {
        let y = area.bottom() + outside + config.font.tick_size + 6.0 + config.font.label_size;
        canvas.text(area.left + area.width / 2.0, y, &x_axis.label, &label_style);
    }
    if !y_axis.label.is_empty() {
        let x = area.left - outside - 4.0 - widest - 6.0;
        canvas.text_rotated(x, area.top + area.height / 2.0, &y_axis.label, &label_style, -90.0);
    }
}
