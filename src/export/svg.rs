//! SVG encoder.

use std::fmt::{self, Write};

use super::fixed::to_fixed;
use crate::error::Result;
use crate::params::SvgCanvas;
use crate::sculpture::Sculpture;

/// Encode a sculpture as a standalone SVG image
///
/// Every point becomes a gradient-filled circle. Connected archetypes
/// (spiral, dna, tornado) also get one open path through all points in
/// index order.
pub fn encode_svg(sculpture: &Sculpture) -> Result<String> {
    let mut out = String::new();
    write_body(&mut out, sculpture)?;
    Ok(out)
}

fn write_body(out: &mut impl Write, sculpture: &Sculpture) -> fmt::Result {
    let canvas = SvgCanvas::default();
    let color = &sculpture.color;

    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        out,
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
        canvas.width, canvas.height
    )?;
    writeln!(out, "  <title>Sound Sculpture - {}</title>", sculpture.shape_type)?;
    writeln!(out, "  <rect width=\"100%\" height=\"100%\" fill=\"#000\"/>")?;

    writeln!(out, "  <defs>")?;
    writeln!(out, "    <radialGradient id=\"pointGradient\" cx=\"50%\" cy=\"50%\" r=\"50%\">")?;
    writeln!(
        out,
        "      <stop offset=\"0%\" style=\"stop-color:{color};stop-opacity:1\" />"
    )?;
    writeln!(
        out,
        "      <stop offset=\"100%\" style=\"stop-color:{color};stop-opacity:0.3\" />"
    )?;
    writeln!(out, "    </radialGradient>")?;
    writeln!(out, "  </defs>")?;

    for point in &sculpture.points {
        let (x, y) = canvas.project(point.x, point.y);
        writeln!(
            out,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"url(#pointGradient)\" opacity=\"{}\"/>",
            to_fixed(x, 2),
            to_fixed(y, 2),
            to_fixed(canvas.radius(point.size), 2),
            to_fixed(canvas.opacity(point.z), 2)
        )?;
    }

    if sculpture.shape_type.is_connected() {
        let path = sculpture
            .points
            .iter()
            .map(|point| {
                let (x, y) = canvas.project(point.x, point.y);
                format!("{},{}", to_fixed(x, 2), to_fixed(y, 2))
            })
            .collect::<Vec<_>>()
            .join(" L");
        writeln!(
            out,
            "  <path d=\"M{path}\" stroke=\"{color}\" stroke-width=\"1\" fill=\"none\" opacity=\"0.5\"/>"
        )?;
    }

    write!(out, "</svg>")
}
