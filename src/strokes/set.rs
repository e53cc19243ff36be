use crate::foundation::core::{BezPath, Rect};
use crate::strokes::path::parse_stroke_path;
use kurbo::Shape;

/// One drawable stroke of a character plus its visibility flag.
#[derive(Clone, Debug)]
pub struct Stroke {
    path: BezPath,
    visible: bool,
}

impl Stroke {
    /// Create a hidden stroke.
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            visible: false,
        }
    }

    /// Outline geometry in glyph space.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Whether the stroke is currently revealed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Ordered strokes of exactly one character.
///
/// Order is fixed at construction; it defines which stroke is revealed next. Visibility can only
/// be changed from inside the crate, so renderers holding a `&StrokeSet` are read-only.
#[derive(Clone, Debug, Default)]
pub struct StrokeSet {
    strokes: Vec<Stroke>,
    dropped: usize,
}

impl StrokeSet {
    /// A set with no strokes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse SVG path strings in order, dropping any that fail to parse.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for (i, d) in paths.into_iter().enumerate() {
            match parse_stroke_path(d.as_ref()) {
                Ok(path) => set.strokes.push(Stroke::new(path)),
                Err(e) => {
                    tracing::warn!(stroke = i, error = %e, "dropping malformed stroke");
                    set.dropped += 1;
                }
            }
        }
        set
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// `true` when the set has no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Number of input paths rejected while building the set.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Strokes in reveal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    /// Stroke at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    /// Revealed strokes, in order.
    pub fn visible(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.strokes.iter().filter(|s| s.visible)
    }

    /// Number of revealed strokes.
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Lowest-index hidden stroke.
    pub fn first_hidden(&self) -> Option<usize> {
        self.strokes.iter().position(|s| !s.visible)
    }

    /// Union of all outlines, used as the faint background guide.
    pub fn outline(&self) -> BezPath {
        let mut out = BezPath::new();
        for s in &self.strokes {
            out.extend(s.path.elements().iter().copied());
        }
        out
    }

    /// Bounding box of all outlines in glyph space.
    pub fn bounds(&self) -> Option<Rect> {
        self.strokes
            .iter()
            .map(|s| s.path.bounding_box())
            .reduce(|a, b| a.union(b))
    }

    pub(crate) fn reveal(&mut self, index: usize) {
        if let Some(s) = self.strokes.get_mut(index) {
            s.visible = true;
        }
    }

    pub(crate) fn hide_all(&mut self) {
        for s in &mut self.strokes {
            s.visible = false;
        }
    }
}

impl<'a> IntoIterator for &'a StrokeSet {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strokes/set.rs"]
mod tests;
