use crate::foundation::core::BezPath;
use crate::foundation::error::{HanziError, HanziResult};

/// Parse one stroke outline from SVG path data.
///
/// Accepts the usual move/line/quad/cubic/close vocabulary in absolute or relative form. A path
/// that parses but draws nothing (no segments) is rejected as well, since it would occupy a
/// reveal step without showing anything.
pub fn parse_stroke_path(d: &str) -> HanziResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Err(HanziError::path("empty path data"));
    }
    let path = BezPath::from_svg(d).map_err(|e| HanziError::path(format!("invalid path: {e}")))?;
    if path.segments().next().is_none() {
        return Err(HanziError::path("path has no drawable segments"));
    }
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/strokes/path.rs"]
mod tests;
