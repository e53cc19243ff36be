use crate::config::settings::Settings;
use crate::foundation::color::{Hsv, Rgb8};
use crate::foundation::rng::Rng64;

const HUE_JITTER: f64 = 0.05;
const SAT_JITTER: f64 = 0.1;
const VALUE_JITTER: f64 = 0.1;

/// Fill color assignment for revealed strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokePalette {
    /// Every stroke uses the same color.
    Solid(Rgb8),
    /// Each stroke gets the base color with a small HSV offset, seeded per stroke index.
    Mixed {
        /// Color the offsets are applied to.
        base: Rgb8,
        /// Seed for the per-stroke offsets.
        seed: u64,
    },
}

impl Default for StrokePalette {
    fn default() -> Self {
        Self::Solid(Rgb8::RED)
    }
}

impl StrokePalette {
    /// Palette described by the user settings.
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        if settings.is_mixed_color {
            Self::Mixed {
                base: settings.stroke_color,
                seed,
            }
        } else {
            Self::Solid(settings.stroke_color)
        }
    }

    /// Color of the stroke at `index`. Stable for a given palette.
    pub fn color_for(&self, index: usize) -> Rgb8 {
        match *self {
            Self::Solid(c) => c,
            Self::Mixed { base, seed } => {
                let hsv = base.to_hsv();
                let mut rng = Rng64::for_stream(seed, index as u64);
                Rgb8::from_hsv(Hsv {
                    h: hsv.h + rng.jitter(HUE_JITTER),
                    s: (hsv.s + rng.jitter(SAT_JITTER)).clamp(0.0, 1.0),
                    v: (hsv.v + rng.jitter(VALUE_JITTER)).clamp(0.0, 1.0),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
