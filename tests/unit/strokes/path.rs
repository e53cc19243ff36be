use super::*;
use kurbo::{PathEl, Shape};

#[test]
fn parses_glyph_style_outline() {
    let p = parse_stroke_path("M 531 651 Q 736 675 868 663 Q 893 662 899 670 L 531 651 Z").unwrap();
    assert!(matches!(p.elements()[0], PathEl::MoveTo(_)));
    assert!(p.elements().iter().any(|el| matches!(el, PathEl::QuadTo(..))));
    assert!(matches!(p.elements().last(), Some(PathEl::ClosePath)));
}

#[test]
fn parses_cubic_and_comma_separated_pairs() {
    let p = parse_stroke_path("M10,10 C20,20 30,20 40,10 L40,40 Z").unwrap();
    let bb = p.bounding_box();
    assert!(bb.x0 <= 10.0 && bb.x1 >= 40.0);
}

#[test]
fn rejects_garbage_and_empty_input() {
    assert!(parse_stroke_path("").is_err());
    assert!(parse_stroke_path("   ").is_err());
    assert!(parse_stroke_path("M 10 X 20").is_err());
    assert!(parse_stroke_path("hello").is_err());
}

#[test]
fn rejects_paths_without_segments() {
    let err = parse_stroke_path("M 10 10").unwrap_err();
    assert!(err.to_string().contains("no drawable segments"));
}
