use std::fmt::Write as _;

use crate::config::StrokeStyle;
use crate::draw::{Drawing, Shape};
use crate::render::path::{curve_path_data, fmt_coord, polyline_path_data};

/// Render a drawing as a standalone SVG document sized to its canvas.
///
/// Scatter drawings emit one `<line>` per segment; walk drawings emit a single unfilled
/// `<path>`.
pub fn svg_document(drawing: &Drawing, stroke: &StrokeStyle) -> String {
    let w = fmt_coord(drawing.canvas.width);
    let h = fmt_coord(drawing.canvas.height);
    let color = escape_attr(&stroke.color);
    let sw = fmt_coord(stroke.width);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    match &drawing.shape {
        Shape::Scatter { lines } => {
            for l in lines {
                let _ = writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{sw}"/>"#,
                    fmt_coord(l.p0.x),
                    fmt_coord(l.p0.y),
                    fmt_coord(l.p1.x),
                    fmt_coord(l.p1.y),
                );
            }
        }
        Shape::Polyline { points } => push_path(&mut out, &polyline_path_data(points), &color, &sw),
        Shape::Smooth { curve, .. } => push_path(&mut out, &curve_path_data(curve), &color, &sw),
    }
    out.push_str("</svg>\n");
    out
}

fn push_path(out: &mut String, d: &str, color: &str, sw: &str) {
    let _ = writeln!(
        out,
        r#"  <path d="{d}" fill="none" stroke="{color}" stroke-width="{sw}" stroke-linejoin="round" stroke-linecap="round"/>"#
    );
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
