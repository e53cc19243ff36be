//! Stroke-by-stroke animation of Chinese characters.
//!
//! The crate is built around a small timing state machine, [`AnimationEngine`], that reveals the
//! strokes of one character in writing order, rests, and repeats for a configured number of
//! cycles. Everything around it is a thin adapter:
//!
//! - **Stroke data**: [`StrokeSource`] looks up SVG outlines per character ([`GraphicsFile`] reads
//!   a Make Me A Hanzi style `graphics.txt`); [`StrokeSet`] parses them, dropping malformed ones.
//! - **Timers**: the engine drives an [`AnimationClock`]; [`VirtualClock`] is a deterministic
//!   implementation that hosts advance from their own time source.
//! - **Notifications**: the engine queues [`AnimationEvent`]s in state-change order; hosts drain
//!   them and forward to a renderer ([`StrokeFrame`], [`render_svg`]) and to a
//!   [`PronunciationRelay`].
//! - **Settings**: [`Settings`] is the persisted JSON configuration; the engine only ever sees the
//!   [`AnimationSettings`] snapshot injected into it.
//!
//! The engine never blocks, spawns threads, or fails: missing or broken stroke data simply leaves
//! it idle with fewer (or no) strokes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod data;
mod deck;
mod foundation;
mod render;
mod speech;
mod strokes;

pub use animation::clock::{AnimationClock, TimerFire, TimerKind, VirtualClock};
pub use animation::engine::{AnimationEngine, AnimationEvent, AnimationPhase, AnimationSettings};
pub use config::settings::Settings;
pub use data::graphics::GraphicsFile;
pub use data::source::{InMemorySource, StrokeSource};
pub use deck::CharacterDeck;
pub use foundation::color::{Hsv, Rgb8};
pub use foundation::core::{Affine, BezPath, Canvas, Millis, Point, Rect, SessionId, Vec2};
pub use foundation::error::{HanziError, HanziResult};
pub use foundation::rng::Rng64;
pub use render::frame::{GLYPH_UNITS, StrokeFrame, VisibleStroke, glyph_transform};
pub use render::palette::StrokePalette;
pub use render::svg::render_svg;
pub use speech::{LogPronouncer, Pronouncer, PronunciationRelay};
pub use strokes::path::parse_stroke_path;
pub use strokes::set::{Stroke, StrokeSet};
