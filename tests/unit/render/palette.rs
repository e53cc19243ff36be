use super::*;

#[test]
fn solid_palette_ignores_index() {
    let p = StrokePalette::Solid(Rgb8::new(1, 2, 3));
    assert_eq!(p.color_for(0), p.color_for(17));
}

#[test]
fn settings_select_palette_kind() {
    let s = Settings::default();
    assert_eq!(
        StrokePalette::from_settings(&s, 9),
        StrokePalette::Solid(Rgb8::RED)
    );
    let s = Settings {
        is_mixed_color: true,
        ..Settings::default()
    };
    assert!(matches!(
        StrokePalette::from_settings(&s, 9),
        StrokePalette::Mixed { seed: 9, .. }
    ));
}

#[test]
fn mixed_palette_is_deterministic_and_close_to_base() {
    let base = Rgb8::new(40, 120, 200);
    let p = StrokePalette::Mixed { base, seed: 42 };
    let q = StrokePalette::Mixed { base, seed: 42 };

    let colors: Vec<Rgb8> = (0..12).map(|i| p.color_for(i)).collect();
    let again: Vec<Rgb8> = (0..12).map(|i| q.color_for(i)).collect();
    assert_eq!(colors, again);
    assert!(colors.windows(2).any(|w| w[0] != w[1]));

    let b = base.to_hsv();
    for c in colors {
        let h = c.to_hsv();
        let dh = (h.h - b.h).abs().min(1.0 - (h.h - b.h).abs());
        assert!(dh <= HUE_JITTER + 0.01, "hue drift {dh}");
        assert!((h.s - b.s).abs() <= SAT_JITTER + 0.01);
        assert!((h.v - b.v).abs() <= VALUE_JITTER + 0.01);
    }
}

#[test]
fn different_seeds_give_different_colors() {
    let base = Rgb8::new(40, 120, 200);
    let a: Vec<Rgb8> = (0..8)
        .map(|i| StrokePalette::Mixed { base, seed: 1 }.color_for(i))
        .collect();
    let b: Vec<Rgb8> = (0..8)
        .map(|i| StrokePalette::Mixed { base, seed: 2 }.color_for(i))
        .collect();
    assert_ne!(a, b);
}
