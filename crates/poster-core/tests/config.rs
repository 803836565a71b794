// File: crates/poster-core/tests/config.rs
// Purpose: JSON settings defaults, validation and theme overrides.

use poster_core::config::DEFAULT_LOAD_TIMEOUT_MS;
use poster_core::{ConfigError, Orientation, PosterSettings, TextPosition};
use skia_safe as skia;

#[test]
fn empty_object_uses_defaults() {
    let s = PosterSettings::from_json_str("{}").expect("defaults");
    assert_eq!(s, PosterSettings::default());
    assert_eq!(s.load_timeout_ms, DEFAULT_LOAD_TIMEOUT_MS);
    assert_eq!(s.orientation, Orientation::Landscape);
}

#[test]
fn parses_full_document() {
    let json = r##"{
        "width": 1200, "height": 1600,
        "orientation": "portrait",
        "radius_percent": 70, "overlap_percent": 15,
        "border_width": 3,
        "border_color": "#c0a060",
        "theme": "paper",
        "swap_order": true,
        "text_items": [
            { "text": "Our night", "font_size": 48, "bold": true, "order": 1, "position": "above" },
            { "text": "Lisbon", "order": 2 }
        ]
    }"##;
    let s = PosterSettings::from_json_str(json).expect("parse");
    assert_eq!(s.orientation, Orientation::Portrait);
    assert!(s.swap_order);
    assert_eq!(s.text_items.len(), 2);
    assert_eq!(s.text_items[0].position, TextPosition::Above);
    assert!(s.text_items[0].bold);
    // Unset item fields default.
    assert_eq!(s.text_items[1].position, TextPosition::Below);
    assert_eq!(s.text_items[1].font_size, 32.0);

    let theme = s.theme().expect("theme");
    assert_eq!(theme.name, "paper");
    assert_eq!(theme.border, skia::Color::from_argb(255, 0xc0, 0xa0, 0x60));

    let req = s.request().expect("request");
    assert_eq!((req.dims.width, req.dims.height), (1200, 1600));
}

#[test]
fn rejects_bad_values() {
    assert!(matches!(PosterSettings::from_json_str(r#"{"width": 0}"#), Err(ConfigError::Dimensions(_))));
    assert!(matches!(PosterSettings::from_json_str(r#"{"border_width": -1}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(PosterSettings::from_json_str(r#"{"load_timeout_ms": 0}"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(
        PosterSettings::from_json_str(r#"{"background": "not-a-color"}"#),
        Err(ConfigError::Color { field: "background", .. })
    ));
    assert!(matches!(
        PosterSettings::from_json_str(r#"{"text_items": [{"text": "x", "font_size": 0}]}"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(PosterSettings::from_json_str("{ nope"), Err(ConfigError::Serde(_))));
}

#[test]
fn unknown_theme_falls_back_and_round_trips() {
    let mut s = PosterSettings::default();
    s.theme = "does-not-exist".into();
    assert_eq!(s.theme().expect("theme").name, "midnight");

    let json = s.to_json_pretty().expect("serialize");
    let back = PosterSettings::from_json_str(&json).expect("reparse");
    assert_eq!(back, s);
}

#[test]
fn loads_from_file() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("settings.json");
    std::fs::write(&path, r#"{"radius_percent": 45}"#).expect("write");
    let s = PosterSettings::from_path(&path).expect("load");
    assert_eq!(s.radius_percent, 45.0);
    assert!(matches!(PosterSettings::from_path(dir.join("missing.json")), Err(ConfigError::Io(_))));
}
