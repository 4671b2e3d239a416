use ab_glyph::{Font, ScaleFont};

use crate::font;
use crate::primitives::TextStyle;

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Measure `text` set in `font` at `size` user units per em, with kerning.
pub fn measure_with_font<F: Font>(font: &F, text: &str, size: f64) -> TextMetrics {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    let scaled = font.as_scaled(size as f32 * font.height_unscaled() / units_per_em);

    let mut width: f32 = 0.0;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(p) = prev {
            width += scaled.kern(p, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }

    let ascent = scaled.ascent();
    TextMetrics { width: width as f64, height: (ascent - scaled.descent()) as f64, ascent: ascent as f64 }
}

/// Advance width of one glyph, in ems, for a generic sans-serif face.
fn advance_em(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | ' ' => 0.28,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.85,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii_digit() => 0.56,
        _ => 0.54,
    }
}

/// Width estimate used when no font face is installed.
pub fn estimate_text(text: &str, style: &TextStyle) -> TextMetrics {
    let weight = if style.bold { 1.06 } else { 1.0 };
    let em: f64 = text.chars().map(advance_em).sum();
    TextMetrics { width: em * style.size * weight, height: style.size * 1.2, ascent: style.size * 0.93 }
}

/// Extent of `text` rendered with `style`, from the system sans face when
/// one is installed.
///
/// SVG text is laid out by the viewer, so these widths size margins and
/// legend boxes only.
pub fn measure_text(text: &str, style: &TextStyle) -> TextMetrics {
    match font::shared().select(style.bold, style.italic) {
        Some(face) => measure_with_font(face, text, style.size),
        None => estimate_text(text, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_hello() {
        let m = measure_text("Hello", &TextStyle::sized(12.0));
        assert!(m.width > 20.0);
        assert!(m.height > 8.0);
        assert!(m.ascent > 0.0);
    }

    #[test]
    fn installed_face_is_used() {
        let Some(face) = font::shared().select(false, false) else {
            return;
        };
        let style = TextStyle::sized(12.0);
        let m = measure_text("Ring index", &style);
        assert_eq!(m.width, measure_with_font(face, "Ring index", 12.0).width);
        assert!(m.width > 30.0 && m.width < 90.0);
    }

    #[test]
    fn width_scales_with_size() {
        let small = measure_text("EM1", &TextStyle::sized(10.0));
        let large = measure_text("EM1", &TextStyle::sized(20.0));
        assert!((large.width / small.width - 2.0).abs() < 0.05);
    }

    #[test]
    fn estimate_bold_is_wider() {
        let r = estimate_text("EM1", &TextStyle::default());
        let b = estimate_text("EM1", &TextStyle { bold: true, ..Default::default() });
        assert!(b.width > r.width);
    }

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(measure_text("", &TextStyle::default()).width, 0.0);
        assert_eq!(estimate_text("", &TextStyle::default()).width, 0.0);
    }
}
