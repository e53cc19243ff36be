use crate::foundation::color::Rgb8;
use crate::render::frame::StrokeFrame;
use std::fmt::{self, Write as _};

/// Serialize a frame as a standalone SVG document.
///
/// The guide is drawn first, then the revealed strokes in writing order, all inside one group
/// carrying the glyph transform. `background` fills the canvas when given.
pub fn render_svg(frame: &StrokeFrame, background: Option<Rgb8>) -> String {
    let mut out = String::new();
    write_svg(&mut out, frame, background).expect("writing to a String cannot fail");
    out
}

fn write_svg(out: &mut String, frame: &StrokeFrame, background: Option<Rgb8>) -> fmt::Result {
    let w = frame.canvas.width;
    let h = frame.canvas.height;
    let [a, b, c, d, e, f] = frame.transform.as_coeffs();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    )?;
    if let Some(bg) = background {
        writeln!(
            out,
            r#"  <rect width="{w}" height="{h}" fill="{}"/>"#,
            bg.to_hex()
        )?;
    }
    writeln!(out, r#"  <g transform="matrix({a} {b} {c} {d} {e} {f})">"#)?;
    if !frame.guide.elements().is_empty() {
        writeln!(
            out,
            r#"    <path class="guide" d="{}" fill="{}"/>"#,
            frame.guide.to_svg(),
            frame.guide_color.to_hex()
        )?;
    }
    for s in &frame.strokes {
        writeln!(
            out,
            r#"    <path class="stroke" data-index="{}" d="{}" fill="{}"/>"#,
            s.index,
            s.path.to_svg(),
            s.color.to_hex()
        )?;
    }
    out.write_str("  </g>\n</svg>\n")
}
