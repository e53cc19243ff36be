use super::*;
use serde_json::json;

fn line(v: serde_json::Value) -> String {
    serde_json::to_string(&v).unwrap()
}

#[test]
fn indexes_records_and_ignores_extra_keys() {
    let text = [
        line(json!({
            "character": "一",
            "strokes": ["M 10 10 L 90 10 L 90 20 Z"],
            "medians": [[[10, 15], [90, 15]]],
        })),
        line(json!({
            "character": "二",
            "strokes": ["M 10 10 L 90 10 Z", "M 10 50 L 90 50 Z"],
        })),
    ]
    .join("\n");

    let g = GraphicsFile::parse_str(&text);
    assert_eq!(g.len(), 2);
    assert_eq!(g.skipped(), 0);
    assert_eq!(g.load('二').unwrap().len(), 2);
    assert!(g.load('三').is_none());
}

#[test]
fn skips_bad_lines_without_failing() {
    let text = [
        "not json".to_owned(),
        String::new(),
        line(json!({"character": "一二", "strokes": []})),
        line(json!({"character": "三"})),
        line(json!({"character": "口", "strokes": ["M 0 0 L 1 1 Z"]})),
    ]
    .join("\n");

    let g = GraphicsFile::parse_str(&text);
    assert_eq!(g.len(), 1);
    assert_eq!(g.skipped(), 3);
    assert!(g.contains('口'));
    assert!(!g.contains('三'));
}

#[test]
fn first_record_for_a_character_wins() {
    let text = [
        line(json!({"character": "人", "strokes": ["M 0 0 L 1 1 Z"]})),
        line(json!({"character": "人", "strokes": ["M 0 0 L 1 1 Z", "M 2 2 L 3 3 Z"]})),
    ]
    .join("\n");
    let g = GraphicsFile::parse_str(&text);
    assert_eq!(g.load('人').unwrap().len(), 1);
}

#[test]
fn from_reader_matches_parse_str() {
    let text = line(json!({"character": "十", "strokes": ["M 0 0 L 1 1 Z", "M 1 0 L 0 1 Z"]}));
    let g = GraphicsFile::from_reader(std::io::Cursor::new(text.as_bytes())).unwrap();
    assert_eq!(g.load('十'), GraphicsFile::parse_str(&text).load('十'));
}

#[test]
fn from_reader_skips_lines_that_are_not_utf8() {
    let mut bytes = line(json!({"character": "a", "strokes": ["M 0 0 L 1 1 Z"]})).into_bytes();
    bytes.push(b'\n');
    bytes.extend_from_slice(&[0xFF, 0xFE, b'\n']);
    bytes.extend_from_slice(
        line(json!({"character": "b", "strokes": ["M 0 0 L 1 1 Z"]})).as_bytes(),
    );

    let g = GraphicsFile::from_reader(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(g.len(), 2);
    assert_eq!(g.skipped(), 1);
    assert!(g.contains('a'));
    assert!(g.contains('b'));
}

#[test]
fn unusable_records_are_data_errors() {
    let multi = line(json!({"character": "一二", "strokes": []}));
    assert!(matches!(parse_record(&multi), Err(HanziError::Data(_))));

    let bare = line(json!({"character": "三"}));
    let err = parse_record(&bare).unwrap_err();
    assert!(matches!(err, HanziError::Data(_)));
    assert!(err.to_string().contains("no strokes"));

    assert!(matches!(parse_record("{"), Err(HanziError::Serde(_))));
}
