use super::*;
use serde_json::json;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_settings");
    std::fs::create_dir_all(&dir).unwrap();
    let p = dir.join(name);
    let _ = std::fs::remove_file(&p);
    p
}

#[test]
fn defaults_match_desktop_app() {
    let s = Settings::default();
    assert_eq!(
        serde_json::to_value(&s).unwrap(),
        json!({
            "stroke_color": "#FF0000",
            "is_mixed_color": false,
            "font_size": 400,
            "font_family": "SimHei",
            "animation_count": 3,
            "animation_interval": 1000,
            "display_time": 3000,
            "auto_pronounce": true,
        })
    );
    assert_eq!(s.animation(), AnimationSettings::default());
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let s: Settings = serde_json::from_value(json!({"animation_count": 5})).unwrap();
    assert_eq!(s.animation_count, 5);
    assert_eq!(s.animation_interval, 1000);
    assert_eq!(s.stroke_color, Rgb8::RED);
}

#[test]
fn animation_snapshot_maps_keys() {
    let s = Settings {
        animation_interval: 250,
        display_time: 900,
        animation_count: 4,
        ..Settings::default()
    };
    assert_eq!(
        s.animation(),
        AnimationSettings {
            step_interval: Millis(250),
            rest_interval: Millis(900),
            target_cycle_count: 4,
        }
    );
}

#[test]
fn validate_rejects_zero_timing() {
    assert!(Settings::default().validate().is_ok());
    for bad in [
        Settings {
            animation_interval: 0,
            ..Settings::default()
        },
        Settings {
            display_time: 0,
            ..Settings::default()
        },
        Settings {
            animation_count: 0,
            ..Settings::default()
        },
    ] {
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("config error:"));
    }
}

#[test]
fn missing_file_loads_defaults() {
    let p = scratch("absent.json");
    assert_eq!(Settings::load(&p).unwrap(), Settings::default());
    assert!(!p.exists());
}

#[test]
fn invalid_file_loads_defaults() {
    let p = scratch("broken.json");
    std::fs::write(&p, "{ not json").unwrap();
    assert_eq!(Settings::load(&p).unwrap(), Settings::default());

    std::fs::write(&p, r##"{"stroke_color": "#zz0000"}"##).unwrap();
    assert_eq!(Settings::load(&p).unwrap(), Settings::default());
}

#[test]
fn save_then_load_preserves_values() {
    let p = scratch("saved.json");
    let s = Settings {
        stroke_color: Rgb8::new(0, 128, 255),
        is_mixed_color: true,
        auto_pronounce: false,
        ..Settings::default()
    };
    s.save(&p).unwrap();
    assert_eq!(Settings::load(&p).unwrap(), s);
}

#[test]
fn load_or_create_writes_defaults_once() {
    let p = scratch("created.json");
    let s = Settings::load_or_create(&p).unwrap();
    assert_eq!(s, Settings::default());
    assert!(p.exists());

    std::fs::write(&p, r#"{"animation_count": 7}"#).unwrap();
    assert_eq!(Settings::load_or_create(&p).unwrap().animation_count, 7);
}
