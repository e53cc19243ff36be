use crate::animation::engine::AnimationSettings;
use crate::foundation::color::Rgb8;
use crate::foundation::core::Millis;
use crate::foundation::error::{HanziError, HanziResult};
use std::path::Path;

/// User settings, stored as JSON.
///
/// Key names match the desktop app's `config.json`. Every key is optional in the file; missing
/// keys take their default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fill color of revealed strokes.
    pub stroke_color: Rgb8,
    /// Jitter the stroke color per stroke instead of using one flat color.
    pub is_mixed_color: bool,
    /// Glyph size used by font-based views.
    pub font_size: u32,
    /// Font family used by font-based views.
    pub font_family: String,
    /// Reveal cycles per character.
    pub animation_count: u32,
    /// Milliseconds between stroke reveals.
    pub animation_interval: u64,
    /// Milliseconds to rest between cycles.
    pub display_time: u64,
    /// Speak the character when its session starts and on each stroke.
    pub auto_pronounce: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stroke_color: Rgb8::RED,
            is_mixed_color: false,
            font_size: 400,
            font_family: "SimHei".to_owned(),
            animation_count: 3,
            animation_interval: 1000,
            display_time: 3000,
            auto_pronounce: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields defaults. A file that is not valid settings JSON also yields
    /// defaults, with a warning. Other I/O failures are returned.
    pub fn load(path: &Path) -> HanziResult<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&text) {
            Ok(s) => Ok(s),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Like [`Settings::load`], but writes the defaults when the file does not exist yet.
    pub fn load_or_create(path: &Path) -> HanziResult<Self> {
        if path.exists() {
            return Self::load(path);
        }
        let s = Self::default();
        s.save(path)?;
        Ok(s)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> HanziResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the animation engine cannot run with.
    pub fn validate(&self) -> HanziResult<()> {
        if self.animation_interval == 0 {
            return Err(HanziError::config("animation_interval must be > 0"));
        }
        if self.display_time == 0 {
            return Err(HanziError::config("display_time must be > 0"));
        }
        if self.animation_count == 0 {
            return Err(HanziError::config("animation_count must be > 0"));
        }
        if self.font_size == 0 {
            return Err(HanziError::config("font_size must be > 0"));
        }
        Ok(())
    }

    /// Timing snapshot handed to the animation engine.
    pub fn animation(&self) -> AnimationSettings {
        AnimationSettings {
            step_interval: Millis(self.animation_interval),
            rest_interval: Millis(self.display_time),
            target_cycle_count: self.animation_count,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
