// File: crates/poster-core/tests/fixed.rs
// Purpose: Date and coordinate fields become ordinary text items.

use chrono::{NaiveDate, NaiveTime};
use poster_core::fixed::{format_coordinates, format_date};
use poster_core::{FixedFields, TextItem, TextPosition};

#[test]
fn formats_date_and_time() {
    let d = NaiveDate::from_ymd_opt(2024, 5, 1).expect("date");
    assert_eq!(format_date(d, None), "May 1, 2024");
    let t = NaiveTime::from_hms_opt(21, 30, 0).expect("time");
    assert_eq!(format_date(d, Some(t)), "May 1, 2024, 21:30");
}

#[test]
fn formats_hemispheres() {
    assert_eq!(format_coordinates(40.7128, -74.006), "40.7128° N, 74.0060° W");
    assert_eq!(format_coordinates(-33.8688, 151.2093), "33.8688° S, 151.2093° E");
}

#[test]
fn builds_items_from_template() {
    let fields = FixedFields {
        date: NaiveDate::from_ymd_opt(1999, 12, 31),
        time: None,
        coordinates: Some((51.5, -0.12)),
    };
    let template = TextItem::new("", 10, TextPosition::Below).with_font("Futura", 18.0).with_color("#eee");
    let items = fields.to_items(&template);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text, "December 31, 1999");
    assert_eq!(items[0].order, 10);
    assert_eq!(items[1].order, 11);
    assert_eq!(items[1].font_family, "Futura");
    assert_eq!(items[1].color, "#eee");

    assert!(FixedFields::default().to_items(&template).is_empty());
    let bad = FixedFields { coordinates: Some((f64::NAN, 0.0)), ..FixedFields::default() };
    assert!(bad.to_items(&template).is_empty());
}
