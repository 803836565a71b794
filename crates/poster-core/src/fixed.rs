// File: crates/poster-core/src/fixed.rs
// Summary: Fixed date/coordinate fields rendered as ordinary text items.

use chrono::{NaiveDate, NaiveTime};

use crate::text::TextItem;

/// Values from the poster's fixed date and location fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedFields {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// (latitude, longitude) in decimal degrees.
    pub coordinates: Option<(f64, f64)>,
}

/// `May 1, 2024`, with `, 21:30` appended when a time is known.
pub fn format_date(date: NaiveDate, time: Option<NaiveTime>) -> String {
    let mut s = date.format("%B %-d, %Y").to_string();
    if let Some(t) = time {
        s.push_str(&t.format(", %H:%M").to_string());
    }
    s
}

/// `40.7128° N, 74.0060° W`
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let ns = if latitude < 0.0 { 'S' } else { 'N' };
    let ew = if longitude < 0.0 { 'W' } else { 'E' };
    format!("{:.4}° {}, {:.4}° {}", latitude.abs(), ns, longitude.abs(), ew)
}

impl FixedFields {
    /// Build text items from the set fields. Each item clones `template` for styling and
    /// position; orders start at `template.order` and increase by one (date, then coordinates).
    pub fn to_items(&self, template: &TextItem) -> Vec<TextItem> {
        let mut out = Vec::new();
        let mut order = template.order;
        if let Some(date) = self.date {
            out.push(TextItem { text: format_date(date, self.time), order, ..template.clone() });
            order += 1;
        }
        if let Some((lat, lon)) = self.coordinates {
            if lat.is_finite() && lon.is_finite() {
                out.push(TextItem { text: format_coordinates(lat, lon), order, ..template.clone() });
            }
        }
        out
    }
}
