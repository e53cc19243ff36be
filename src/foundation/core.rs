use crate::foundation::error::{HanziError, HanziResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Point in time or duration in milliseconds on an animation clock.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Saturating addition, so far-future deadlines never wrap.
    pub fn saturating_add(self, rhs: Millis) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Millis) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Convert into a std duration (for real-time hosts).
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0)
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Identifier of one character session on an engine.
///
/// Bumped every time the engine is reset or loads a character, and stamped on every armed
/// timer so that fires belonging to an older session can be recognized and dropped.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The session that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> HanziResult<Self> {
        if width == 0 || height == 0 {
            return Err(HanziError::config("canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Canvas bounds as a kurbo rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
