use crate::animation::engine::AnimationEvent;

/// Text-to-speech backend.
pub trait Pronouncer {
    /// Speak `text` aloud.
    fn pronounce(&mut self, text: &str);

    /// Whether an earlier utterance is still playing.
    fn is_speaking(&self) -> bool {
        false
    }
}

impl<P: Pronouncer + ?Sized> Pronouncer for &mut P {
    fn pronounce(&mut self, text: &str) {
        (**self).pronounce(text);
    }

    fn is_speaking(&self) -> bool {
        (**self).is_speaking()
    }
}

/// Pronouncer that only logs what it would say.
#[derive(Clone, Debug, Default)]
pub struct LogPronouncer {
    utterances: usize,
}

impl LogPronouncer {
    /// Pronouncer with no utterances yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of utterances so far.
    pub fn utterances(&self) -> usize {
        self.utterances
    }
}

impl Pronouncer for LogPronouncer {
    fn pronounce(&mut self, text: &str) {
        self.utterances += 1;
        tracing::info!(%text, "pronounce");
    }
}

/// Turns engine notifications into pronunciation requests.
///
/// The character is spoken when its session starts and again whenever a stroke is revealed, as
/// long as auto-pronounce is on. Requests are skipped while the backend is still speaking so that
/// utterances never overlap.
#[derive(Clone, Debug)]
pub struct PronunciationRelay {
    auto_pronounce: bool,
    character: Option<char>,
}

impl PronunciationRelay {
    /// Relay that speaks on engine events only when `auto_pronounce` is set.
    pub fn new(auto_pronounce: bool) -> Self {
        Self {
            auto_pronounce,
            character: None,
        }
    }

    /// Character of the most recent session seen.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// React to one engine event. Returns `true` if something was spoken.
    pub fn on_event(&mut self, event: &AnimationEvent, pronouncer: &mut impl Pronouncer) -> bool {
        match event {
            AnimationEvent::SessionStarted { character } => {
                self.character = Some(*character);
            }
            AnimationEvent::StrokeRevealed { .. } => {}
            AnimationEvent::VisualChanged | AnimationEvent::CycleFinished { .. } => return false,
        }
        if !self.auto_pronounce {
            return false;
        }
        self.speak(pronouncer)
    }

    /// Speak the current character now, regardless of auto-pronounce.
    pub fn speak(&mut self, pronouncer: &mut impl Pronouncer) -> bool {
        let Some(ch) = self.character else {
            return false;
        };
        if pronouncer.is_speaking() {
            return false;
        }
        let mut buf = [0u8; 4];
        pronouncer.pronounce(ch.encode_utf8(&mut buf));
        true
    }
}

#[cfg(test)]
#[path = "../tests/unit/speech.rs"]
mod tests;
