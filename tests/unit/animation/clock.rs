use super::*;

const S: SessionId = SessionId(1);

fn drain(clock: &mut VirtualClock, until: u64) -> Vec<(TimerKind, u64)> {
    let mut out = Vec::new();
    while let Some(f) = clock.poll_due(Millis(until)) {
        out.push((f.kind, f.at.0));
    }
    out
}

#[test]
fn step_timer_repeats_until_stopped() {
    let mut c = VirtualClock::new();
    c.start_step(Millis(100), S);
    assert_eq!(
        drain(&mut c, 350),
        vec![
            (TimerKind::Step, 100),
            (TimerKind::Step, 200),
            (TimerKind::Step, 300)
        ]
    );
    assert_eq!(c.now(), Millis(350));
    assert!(c.is_step_armed());
    assert_eq!(c.next_deadline(), Some(Millis(400)));

    c.stop_step();
    c.stop_step();
    assert!(!c.is_step_armed());
    assert!(drain(&mut c, 1000).is_empty());
    assert_eq!(c.now(), Millis(1000));
}

#[test]
fn rest_timer_fires_once() {
    let mut c = VirtualClock::new();
    c.start_rest(Millis(300), S);
    assert!(c.is_rest_armed());
    assert_eq!(drain(&mut c, 1000), vec![(TimerKind::Rest, 300)]);
    assert!(!c.is_rest_armed());
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn restarting_measures_from_now() {
    let mut c = VirtualClock::new();
    c.start_step(Millis(100), S);
    assert!(c.poll_due(Millis(50)).is_none());
    c.start_step(Millis(100), S);
    assert_eq!(drain(&mut c, 160), vec![(TimerKind::Step, 150)]);

    // now = 160, rest due at 260, step due at 250
    c.start_rest(Millis(100), S);
    assert!(c.poll_due(Millis(255)).is_some_and(|f| f.kind == TimerKind::Step));
    c.start_rest(Millis(60), S);
    assert_eq!(c.next_deadline(), Some(Millis(310)));
}

#[test]
fn fires_carry_their_session() {
    let mut c = VirtualClock::starting_at(Millis(1000));
    c.start_rest(Millis(10), SessionId(7));
    let f = c.poll_due(Millis(2000)).unwrap();
    assert_eq!(f.session, SessionId(7));
    assert_eq!(f.at, Millis(1010));
}

#[test]
fn earliest_fire_wins_and_ties_go_to_step() {
    let mut c = VirtualClock::new();
    c.start_step(Millis(200), S);
    c.start_rest(Millis(100), S);
    assert_eq!(
        drain(&mut c, 200),
        vec![(TimerKind::Rest, 100), (TimerKind::Step, 200)]
    );

    let mut c = VirtualClock::new();
    c.start_step(Millis(100), S);
    c.start_rest(Millis(100), S);
    assert_eq!(
        drain(&mut c, 100),
        vec![(TimerKind::Step, 100), (TimerKind::Rest, 100)]
    );
}

#[test]
fn zero_step_interval_does_not_spin() {
    let mut c = VirtualClock::new();
    c.start_step(Millis(0), S);
    assert_eq!(drain(&mut c, 3).len(), 3);
}
