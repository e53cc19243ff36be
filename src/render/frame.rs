use crate::foundation::color::Rgb8;
use crate::foundation::core::{Affine, BezPath, Canvas, Vec2};
use crate::render::palette::StrokePalette;
use crate::strokes::set::StrokeSet;

/// Side of the square glyph coordinate space used by the stroke data.
pub const GLYPH_UNITS: f64 = 1024.0;

/// Share of the canvas' short side the glyph is scaled to.
const FILL_RATIO: f64 = 0.9;

/// Glyph-space point placed at the canvas center. The stroke data sits on a baseline offset by
/// 100 units below the em box center, and is y-up.
const GLYPH_ANCHOR: Vec2 = Vec2::new(512.0, 412.0);

/// Map glyph space into canvas pixels: centered, scaled to 90% of the short side, y flipped.
pub fn glyph_transform(canvas: Canvas) -> Affine {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let scale = w.min(h) * FILL_RATIO / GLYPH_UNITS;
    Affine::translate(Vec2::new(w / 2.0, h / 2.0))
        * Affine::scale_non_uniform(scale, -scale)
        * Affine::translate(-GLYPH_ANCHOR)
}

/// One revealed stroke, ready to fill.
#[derive(Clone, Debug)]
pub struct VisibleStroke {
    /// Position in writing order.
    pub index: usize,
    /// Outline in glyph space.
    pub path: BezPath,
    /// Fill color.
    pub color: Rgb8,
}

/// Everything a renderer needs to draw the current animation state.
///
/// Captured from a stroke set on a "visual changed" notification; holds copies, so it can be
/// handed to another thread or kept after the engine moves on.
#[derive(Clone, Debug)]
pub struct StrokeFrame {
    /// Target surface.
    pub canvas: Canvas,
    /// Glyph space to canvas transform.
    pub transform: Affine,
    /// Union of all strokes, drawn first as a faint guide.
    pub guide: BezPath,
    /// Guide fill color.
    pub guide_color: Rgb8,
    /// Revealed strokes in writing order.
    pub strokes: Vec<VisibleStroke>,
}

impl StrokeFrame {
    /// Snapshot the visible strokes of `set`.
    pub fn capture(set: &StrokeSet, canvas: Canvas, palette: &StrokePalette) -> Self {
        let strokes = set
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_visible())
            .map(|(index, s)| VisibleStroke {
                index,
                path: s.path().clone(),
                color: palette.color_for(index),
            })
            .collect();

        Self {
            canvas,
            transform: glyph_transform(canvas),
            guide: set.outline(),
            guide_color: Rgb8::GUIDE_GRAY,
            strokes,
        }
    }

    /// `true` when there is nothing at all to draw, not even a guide.
    pub fn is_blank(&self) -> bool {
        self.strokes.is_empty() && self.guide.elements().is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
