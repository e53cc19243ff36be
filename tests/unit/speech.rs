use super::*;

#[derive(Default)]
struct Recorder {
    said: Vec<String>,
    busy: bool,
}

impl Pronouncer for Recorder {
    fn pronounce(&mut self, text: &str) {
        self.said.push(text.to_owned());
    }

    fn is_speaking(&self) -> bool {
        self.busy
    }
}

#[test]
fn speaks_on_session_start_and_reveals() {
    let mut relay = PronunciationRelay::new(true);
    let mut rec = Recorder::default();

    let events = [
        AnimationEvent::SessionStarted { character: '木' },
        AnimationEvent::VisualChanged,
        AnimationEvent::StrokeRevealed { index: 0 },
        AnimationEvent::VisualChanged,
        AnimationEvent::CycleFinished { cycles: 1 },
    ];
    let spoken = events
        .iter()
        .filter(|e| relay.on_event(e, &mut rec))
        .count();

    assert_eq!(spoken, 2);
    assert_eq!(rec.said, vec!["木", "木"]);
    assert_eq!(relay.character(), Some('木'));
}

#[test]
fn auto_pronounce_off_still_tracks_character() {
    let mut relay = PronunciationRelay::new(false);
    let mut rec = Recorder::default();
    relay.on_event(&AnimationEvent::SessionStarted { character: '火' }, &mut rec);
    relay.on_event(&AnimationEvent::StrokeRevealed { index: 0 }, &mut rec);
    assert!(rec.said.is_empty());

    assert!(relay.speak(&mut rec));
    assert_eq!(rec.said, vec!["火"]);
}

#[test]
fn busy_backend_is_not_interrupted() {
    let mut relay = PronunciationRelay::new(true);
    let mut rec = Recorder {
        busy: true,
        ..Recorder::default()
    };
    assert!(!relay.on_event(&AnimationEvent::SessionStarted { character: '水' }, &mut rec));
    assert!(rec.said.is_empty());
}

#[test]
fn speak_without_session_is_a_no_op() {
    let mut relay = PronunciationRelay::new(true);
    let mut p = LogPronouncer::new();
    assert!(!relay.speak(&mut p));
    assert_eq!(p.utterances(), 0);
}
