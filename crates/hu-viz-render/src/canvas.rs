use std::fmt::Write as _;

use crate::color::Color;
use crate::primitives::*;
use crate::text::{TextMetrics, measure_text};

#[derive(Debug, Clone)]
enum Node {
    Rect { x: f64, y: f64, w: f64, h: f64, style: Style },
    Circle { cx: f64, cy: f64, r: f64, style: Style },
    Path { d: String, style: Style },
    Line { from: (f64, f64), to: (f64, f64), style: LineStyle },
    Polyline { points: Vec<(f64, f64)>, style: LineStyle },
    Text { at: (f64, f64), content: String, style: TextStyle, rotate: Option<f64> },
    Clipped { clip_id: String, children: Vec<Node> },
}

/// SVG canvas in points (1pt = 1/72"), y growing downwards.
///
/// Drawing calls are buffered; [`Canvas::finish_svg`] serializes them in
/// call order. Everything drawn between [`Canvas::push_clip`] and
/// [`Canvas::pop_clip`] is clipped to that rectangle.
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    nodes: Vec<Node>,
    clip_defs: Vec<String>,
    clip_stack: Vec<(String, Vec<Node>)>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, nodes: Vec::new(), clip_defs: Vec::new(), clip_stack: Vec::new() }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.push(Node::Rect { x, y, w, h, style: style.clone() });
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        self.push(Node::Circle { cx, cy, r, style: style.clone() });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.push(Node::Line { from: (x1, y1), to: (x2, y2), style: *style });
    }

    /// Open polyline; fewer than two points draw nothing.
    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        if points.len() >= 2 {
            self.push(Node::Polyline { points: points.to_vec(), style: *style });
        }
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.push(Node::Text { at: (x, y), content: content.into(), style: *style, rotate: None });
    }

    /// Text rotated by `angle` degrees around its anchor.
    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.push(Node::Text { at: (x, y), content: content.into(), style: *style, rotate: Some(angle) });
    }

    /// Filled area enclosed by the `(x, y_hi)` curve and the reversed
    /// `(x, y_lo)` curve.
    pub fn fill_between(&mut self, x: &[f64], y_lo: &[f64], y_hi: &[f64], style: &Style) {
        let n = x.len().min(y_lo.len()).min(y_hi.len());
        if n < 2 {
            return;
        }
        let upper = (0..n).map(|i| (x[i], y_hi[i]));
        let lower = (0..n).rev().map(|i| (x[i], y_lo[i]));
        let mut d = String::new();
        for (k, (px, py)) in upper.chain(lower).enumerate() {
            let _ = write!(d, "{}{px:.2},{py:.2} ", if k == 0 { 'M' } else { 'L' });
        }
        d.push('Z');
        self.push(Node::Path { d, style: style.clone() });
    }

    pub fn marker(&mut self, x: f64, y: f64, marker: &MarkerStyle) {
        let fill = if marker.filled { marker.color } else { Color::WHITE };
        let style = Style::filled(fill).outlined(marker.color, 0.5);
        self.circle(x, y, marker.radius, &style);
    }

    /// Start clipping to a rectangle. Returns the clip-path id.
    pub fn push_clip(&mut self, x: f64, y: f64, w: f64, h: f64) -> String {
        let id = format!("clip{}", self.clip_defs.len());
        self.clip_defs.push(format!(
            r#"<clipPath id="{id}"><rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" /></clipPath>"#
        ));
        self.clip_stack.push((id.clone(), Vec::new()));
        id
    }

    pub fn pop_clip(&mut self) {
        if let Some((clip_id, children)) = self.clip_stack.pop() {
            self.push(Node::Clipped { clip_id, children });
        }
    }

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_text(content, style)
    }

    fn push(&mut self, node: Node) {
        match self.clip_stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => self.nodes.push(node),
        }
    }

    /// Serialize to an SVG document, closing any clip still open.
    pub fn finish_svg(mut self) -> String {
        while !self.clip_stack.is_empty() {
            self.pop_clip();
        }

        let (w, h) = (self.width, self.height);
        let mut out = String::with_capacity(32 * 1024);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if !self.clip_defs.is_empty() {
            let _ = writeln!(out, "<defs>\n{}\n</defs>", self.clip_defs.join("\n"));
        }
        let _ = writeln!(out, r#"<rect width="{w}" height="{h}" fill="white" />"#);
        for node in &self.nodes {
            write_node(&mut out, node);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Rect { x, y, w, h, style } => {
            let _ = write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#);
            shape_attrs(out, style);
        }
        Node::Circle { cx, cy, r, style } => {
            let _ = write!(out, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}""#);
            shape_attrs(out, style);
        }
        Node::Path { d, style } => {
            let _ = write!(out, r#"<path d="{d}""#);
            shape_attrs(out, style);
        }
        Node::Line { from: (x1, y1), to: (x2, y2), style } => {
            let _ = write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#);
            stroke_attrs(out, style);
        }
        Node::Polyline { points, style } => {
            out.push_str(r#"<polyline points=""#);
            let pts: Vec<String> = points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect();
            out.push_str(&pts.join(" "));
            out.push_str(r#"" fill="none""#);
            stroke_attrs(out, style);
        }
        Node::Text { at: (x, y), content, style, rotate } => {
            let _ = write!(
                out,
                r#"<text x="{x:.2}" y="{y:.2}" font-family="DejaVu Sans, Arial, sans-serif" font-size="{:.1}" fill="{}" text-anchor="{}" dominant-baseline="{}""#,
                style.size,
                style.color,
                style.anchor.svg_value(),
                style.baseline.svg_value(),
            );
            if style.bold {
                out.push_str(r#" font-weight="bold""#);
            }
            if style.italic {
                out.push_str(r#" font-style="italic""#);
            }
            if let Some(angle) = rotate {
                let _ = write!(out, r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#);
            }
            let _ = writeln!(out, ">{}</text>", escape_xml(content));
        }
        Node::Clipped { clip_id, children } => {
            let _ = writeln!(out, r#"<g clip-path="url(#{clip_id})">"#);
            for child in children {
                write_node(out, child);
            }
            out.push_str("</g>\n");
        }
    }
}

/// Fill, stroke and opacity attributes, then close the element.
fn shape_attrs(out: &mut String, style: &Style) {
    match style.fill {
        Some(fill) => {
            let _ = write!(out, r#" fill="{fill}""#);
        }
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = style.stroke {
        let _ = write!(out, r#" stroke="{stroke}" stroke-width="{:.2}""#, style.stroke_width);
    }
    if (style.opacity - 1.0).abs() > 1e-4 {
        let _ = write!(out, r#" opacity="{:.3}""#, style.opacity);
    }
    out.push_str(" />\n");
}

/// Stroke attributes of a line, then close the element.
fn stroke_attrs(out: &mut String, style: &LineStyle) {
    let _ = write!(out, r#" stroke="{}" stroke-width="{:.2}""#, style.color, style.width);
    if let Some(dash) = style.dash.dasharray() {
        let _ = write!(out, r#" stroke-dasharray="{dash}""#);
    }
    out.push_str(" />\n");
}

fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
