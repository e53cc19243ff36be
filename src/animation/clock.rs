use crate::foundation::core::{Millis, SessionId};

/// The two timers an animation engine drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Repeating timer that reveals the next stroke.
    Step,
    /// One-shot pause between two reveal cycles.
    Rest,
}

/// A single timer expiry, delivered to the engine by its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFire {
    /// Which timer fired.
    pub kind: TimerKind,
    /// Session the timer was armed for.
    pub session: SessionId,
    /// Clock time of the expiry.
    pub at: Millis,
}

/// Pair of independently restartable countdown timers.
///
/// The step timer repeats every `interval` until stopped; the rest timer fires once and then
/// disarms itself. Starting a timer that is already armed restarts it from `now()`. Stopping is
/// idempotent.
///
/// Fires are pulled one at a time through [`AnimationClock::poll_due`], so a handler always
/// finishes before the next fire of the same timer can be observed.
pub trait AnimationClock {
    /// Current clock time.
    fn now(&self) -> Millis;

    /// (Re)arm the repeating step timer.
    fn start_step(&mut self, interval: Millis, session: SessionId);

    /// (Re)arm the one-shot rest timer.
    fn start_rest(&mut self, interval: Millis, session: SessionId);

    /// Disarm the step timer.
    fn stop_step(&mut self);

    /// Disarm the rest timer.
    fn stop_rest(&mut self);

    /// Whether the step timer is armed.
    fn is_step_armed(&self) -> bool;

    /// Whether the rest timer is armed.
    fn is_rest_armed(&self) -> bool;

    /// Earliest pending expiry, if any timer is armed.
    fn next_deadline(&self) -> Option<Millis>;

    /// Pop the earliest expiry at or before `until`, moving `now()` to its time.
    ///
    /// Returns `None` (and moves `now()` to `until`) when nothing is due. A step fire re-arms the
    /// step timer one interval later; a rest fire disarms the rest timer.
    fn poll_due(&mut self, until: Millis) -> Option<TimerFire>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Armed {
    due: Millis,
    interval: Millis,
    session: SessionId,
}

/// Manually advanced clock with deterministic ordering.
///
/// Used by tests and by hosts that map their own time source onto it. When both timers are due
/// at the same instant the step timer fires first.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Millis,
    step: Option<Armed>,
    rest: Option<Armed>,
}

impl VirtualClock {
    /// Clock at time zero with nothing armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at `now` with nothing armed.
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    fn arm(&self, interval: Millis, session: SessionId) -> Armed {
        Armed {
            due: self.now.saturating_add(interval),
            interval,
            session,
        }
    }
}

impl AnimationClock for VirtualClock {
    fn now(&self) -> Millis {
        self.now
    }

    fn start_step(&mut self, interval: Millis, session: SessionId) {
        // A zero period would fire forever at a single instant.
        self.step = Some(self.arm(interval.max(Millis(1)), session));
    }

    fn start_rest(&mut self, interval: Millis, session: SessionId) {
        self.rest = Some(self.arm(interval, session));
    }

    fn stop_step(&mut self) {
        self.step = None;
    }

    fn stop_rest(&mut self) {
        self.rest = None;
    }

    fn is_step_armed(&self) -> bool {
        self.step.is_some()
    }

    fn is_rest_armed(&self) -> bool {
        self.rest.is_some()
    }

    fn next_deadline(&self) -> Option<Millis> {
        match (self.step, self.rest) {
            (Some(s), Some(r)) => Some(s.due.min(r.due)),
            (Some(s), None) => Some(s.due),
            (None, Some(r)) => Some(r.due),
            (None, None) => None,
        }
    }

    fn poll_due(&mut self, until: Millis) -> Option<TimerFire> {
        let step_due = self.step.filter(|s| s.due <= until);
        let rest_due = self.rest.filter(|r| r.due <= until);

        let kind = match (step_due, rest_due) {
            (Some(s), Some(r)) if r.due < s.due => TimerKind::Rest,
            (Some(_), _) => TimerKind::Step,
            (None, Some(_)) => TimerKind::Rest,
            (None, None) => {
                self.now = self.now.max(until);
                return None;
            }
        };

        let fired = match kind {
            TimerKind::Step => {
                let s = step_due?;
                self.step = Some(Armed {
                    due: s.due.saturating_add(s.interval),
                    ..s
                });
                s
            }
            TimerKind::Rest => {
                self.rest = None;
                rest_due?
            }
        };

        self.now = self.now.max(fired.due);
        Some(TimerFire {
            kind,
            session: fired.session,
            at: fired.due,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
