use super::*;

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(5)), Millis(u64::MAX));
    assert_eq!(Millis(3).saturating_sub(Millis(5)), Millis::ZERO);
    assert_eq!(Millis(100).saturating_add(Millis(250)), Millis(350));
}

#[test]
fn millis_serializes_as_plain_number() {
    assert_eq!(serde_json::to_string(&Millis(1000)).unwrap(), "1000");
    let m: Millis = serde_json::from_str("300").unwrap();
    assert_eq!(m, Millis(300));
    assert_eq!(m.to_string(), "300ms");
}

#[test]
fn session_ids_advance() {
    let s = SessionId::default();
    assert_eq!(s.next(), SessionId(1));
    assert!(s.next() > s);
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(640, 480).unwrap();
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 640.0, 480.0));
}
