use crate::animation::clock::{AnimationClock, TimerFire, TimerKind};
use crate::data::source::StrokeSource;
use crate::foundation::core::{Millis, SessionId};
use crate::strokes::set::{Stroke, StrokeSet};

/// Timing parameters for one character session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSettings {
    /// Delay between two stroke reveals.
    pub step_interval: Millis,
    /// Pause between the end of one cycle and the start of the next.
    pub rest_interval: Millis,
    /// Number of reveal cycles before the animation stops.
    pub target_cycle_count: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            step_interval: Millis(1000),
            rest_interval: Millis(3000),
            target_cycle_count: 3,
        }
    }
}

/// Where the engine is in its reveal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    /// Nothing to animate: no character, no strokes, or just reset.
    Idle,
    /// Step timer armed; strokes are being revealed one by one.
    Revealing,
    /// Rest timer armed; strokes hidden until the next cycle.
    Resting,
    /// All cycles done; no timer armed.
    Completed,
}

/// Notifications emitted by the engine, in the order the state changed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnimationEvent {
    /// A new character session began.
    SessionStarted {
        /// Character being animated.
        character: char,
    },
    /// The set of visible strokes (or the stroke set itself) changed.
    VisualChanged,
    /// The stroke at `index` was just revealed.
    StrokeRevealed {
        /// Position of the stroke in writing order.
        index: usize,
    },
    /// The final cycle finished and the engine entered [`AnimationPhase::Completed`].
    CycleFinished {
        /// Cycles completed in this session.
        cycles: u32,
    },
}

/// Stroke reveal state machine.
///
/// The engine owns the current [`StrokeSet`] and a pair of timers. Hosts feed timer expiries back
/// through [`AnimationEngine::handle_fire`] (or let [`AnimationEngine::advance_to`] pull them from
/// the clock) and drain notifications with [`AnimationEngine::take_events`].
///
/// Invariant: the step timer is armed exactly in `Revealing` and the rest timer exactly in
/// `Resting`. Every session change stops both timers before arming anything, and every fire is
/// checked against the current session, so a late fire from a replaced character is dropped.
///
/// In `Completed` the strokes stay fully visible, leaving the finished character on screen.
#[derive(Debug)]
pub struct AnimationEngine<C, S> {
    clock: C,
    source: S,
    configured: AnimationSettings,

    session: SessionId,
    active: AnimationSettings,
    character: Option<char>,
    strokes: StrokeSet,
    phase: AnimationPhase,
    cycle_count: u32,

    events: Vec<AnimationEvent>,
}

impl<C, S> AnimationEngine<C, S>
where
    C: AnimationClock,
    S: StrokeSource,
{
    /// Create an idle engine.
    pub fn new(clock: C, source: S, settings: AnimationSettings) -> Self {
        Self {
            clock,
            source,
            configured: settings,
            session: SessionId::default(),
            active: settings,
            character: None,
            strokes: StrokeSet::empty(),
            phase: AnimationPhase::Idle,
            cycle_count: 0,
            events: Vec::new(),
        }
    }

    /// Replace the configured timing. Takes effect at the next [`AnimationEngine::set_character`].
    pub fn configure(&mut self, settings: AnimationSettings) {
        self.configured = settings;
    }

    /// Start a new session for `character`.
    ///
    /// Unknown characters and characters whose paths all fail to parse leave the engine `Idle`
    /// with an empty stroke set.
    pub fn set_character(&mut self, character: char) {
        self.stop_timers();
        self.session = self.session.next();
        self.active = self.configured;
        self.character = Some(character);
        self.cycle_count = 0;

        self.strokes = match self.source.load(character) {
            Some(paths) => StrokeSet::from_paths(paths),
            None => {
                tracing::warn!(%character, "no stroke data");
                StrokeSet::empty()
            }
        };
        self.events.push(AnimationEvent::SessionStarted { character });

        if self.strokes.is_empty() {
            self.phase = AnimationPhase::Idle;
        } else {
            self.phase = AnimationPhase::Revealing;
            self.clock
                .start_step(self.active.step_interval, self.session);
        }
        tracing::info!(
            %character,
            strokes = self.strokes.len(),
            dropped = self.strokes.dropped(),
            phase = ?self.phase,
            "session started"
        );
        self.events.push(AnimationEvent::VisualChanged);
    }

    /// Restart the current character with the latest configured timing.
    pub fn restart(&mut self) {
        if let Some(ch) = self.character {
            self.set_character(ch);
        }
    }

    /// Stop both timers, hide every stroke and go `Idle`. The stroke set is kept.
    pub fn reset(&mut self) {
        self.stop_timers();
        self.session = self.session.next();
        let was_drawn = self.strokes.visible_count() > 0;
        self.strokes.hide_all();
        self.phase = AnimationPhase::Idle;
        self.cycle_count = 0;
        if was_drawn {
            self.events.push(AnimationEvent::VisualChanged);
        }
        tracing::debug!("animation reset");
    }

    /// Apply one timer expiry.
    ///
    /// Fires from another session, or for a timer that does not belong to the current phase, are
    /// ignored.
    pub fn handle_fire(&mut self, fire: TimerFire) {
        if fire.session != self.session {
            tracing::debug!(?fire, current = ?self.session, "dropping stale timer fire");
            return;
        }
        match (fire.kind, self.phase) {
            (TimerKind::Step, AnimationPhase::Revealing) => self.on_step(),
            (TimerKind::Rest, AnimationPhase::Resting) => self.on_rest(),
            (kind, phase) => {
                tracing::debug!(?kind, ?phase, "ignoring timer fire outside its phase");
            }
        }
    }

    /// Deliver every timer expiry up to and including `until`, in time order.
    ///
    /// Returns the number of fires handled.
    pub fn advance_to(&mut self, until: Millis) -> usize {
        let mut handled = 0;
        while let Some(fire) = self.clock.poll_due(until) {
            self.handle_fire(fire);
            handled += 1;
        }
        handled
    }

    fn on_step(&mut self) {
        if let Some(index) = self.strokes.first_hidden() {
            self.strokes.reveal(index);
            self.events.push(AnimationEvent::StrokeRevealed { index });
            self.events.push(AnimationEvent::VisualChanged);
            tracing::debug!(index, "stroke revealed");
        }
        if self.strokes.first_hidden().is_none() {
            self.finish_cycle();
        }
    }

    fn finish_cycle(&mut self) {
        self.clock.stop_step();
        self.cycle_count += 1;

        if self.cycle_count >= self.active.target_cycle_count {
            self.phase = AnimationPhase::Completed;
            self.events.push(AnimationEvent::CycleFinished {
                cycles: self.cycle_count,
            });
            tracing::debug!(cycles = self.cycle_count, "animation completed");
            return;
        }

        self.strokes.hide_all();
        self.events.push(AnimationEvent::VisualChanged);
        self.phase = AnimationPhase::Resting;
        self.clock
            .start_rest(self.active.rest_interval, self.session);
        tracing::debug!(cycles = self.cycle_count, "cycle done, resting");
    }

    fn on_rest(&mut self) {
        self.phase = AnimationPhase::Revealing;
        self.clock
            .start_step(self.active.step_interval, self.session);
        self.events.push(AnimationEvent::VisualChanged);
        tracing::debug!(cycle = self.cycle_count + 1, "next cycle");
    }

    fn stop_timers(&mut self) {
        self.clock.stop_step();
        self.clock.stop_rest();
    }

    /// Earliest armed timer expiry.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.clock.next_deadline()
    }

    /// Take all notifications emitted since the last call.
    pub fn take_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<C, S> AnimationEngine<C, S> {
    /// Current phase.
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Cycles completed in the current session.
    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Cycle target captured when the current session started.
    pub fn target_cycle_count(&self) -> u32 {
        self.active.target_cycle_count
    }

    /// Timing captured when the current session started.
    pub fn session_settings(&self) -> AnimationSettings {
        self.active
    }

    /// Timing that the next session will use.
    pub fn configured_settings(&self) -> AnimationSettings {
        self.configured
    }

    /// Identifier of the current session.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Character of the current session, if any.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Ordered strokes with their visibility.
    pub fn strokes(&self) -> &StrokeSet {
        &self.strokes
    }

    /// Currently revealed strokes, in writing order.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> + '_ {
        self.strokes.visible()
    }

    /// Borrow the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
