use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Draw the experiment label inside the top-left of the frame
/// (e.g. **ATLAS** *Simulation Internal*) and the energy on the right.
pub fn draw_experiment_header(canvas: &mut Canvas, area: &PlotArea, config: &VizConfig) {
    let exp = &config.experiment;
    if exp.name.is_empty() {
        return;
    }

    let size = config.font.label_size * 1.2;
    let x = area.left + area.width * 0.03;
    let y = area.top + size * 1.3;

    let bold = TextStyle { bold: true, ..TextStyle::sized(size) };
    canvas.text(x, y, &exp.name, &bold);

    if !exp.status.is_empty() {
        let name_w = canvas.measure_text(&exp.name, &bold).width;
        let italic = TextStyle { italic: true, ..TextStyle::sized(size * 0.9) };
        canvas.text(x + name_w + 4.0, y, &exp.status, &italic);
    }

    if exp.sqrt_s_tev > 0.0 {
        let info = format!("\u{221A}s = {} TeV", exp.sqrt_s_tev);
        let style = TextStyle::sized(config.font.tick_size);
        canvas.text(x, y + size * 1.2, &info, &style);
    }
}
