// File: crates/poster-core/src/text_layer.rs
// Summary: Stacks text items above/below the circle cluster and draws them centered.

use skia_safe as skia;
use tracing::warn;

use crate::color::parse_css_color;
use crate::geometry::CirclePair;
use crate::text::{FontSpec, HAlign, TextItem, TextPosition, TextShaper, VAnchor};
use crate::types::{LINE_HEIGHT, TEXT_MARGIN_FRACTION};

/// A text item pinned to a canvas position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedText<'a> {
    pub item: &'a TextItem,
    /// Horizontal center of the line.
    pub x: f32,
    pub y: f32,
    /// `Top` for items below the cluster, `Bottom` for items above it.
    pub anchor: VAnchor,
}

/// Compute positions for every item, nearest-to-cluster first within each side
/// (all `below` placements precede all `above` placements).
pub fn plan_text_layers<'a>(pair: &CirclePair, border_width: f32, items: &'a [TextItem]) -> Vec<PlacedText<'a>> {
    if items.is_empty() {
        return Vec::new();
    }
    let margin = pair.radius() * TEXT_MARGIN_FRACTION;
    let border = border_width.max(0.0);
    let x = pair.midpoint_x();

    // `sort_by_key` is stable: equal orders keep input order.
    let mut below: Vec<&TextItem> = items.iter().filter(|t| t.position == TextPosition::Below).collect();
    below.sort_by_key(|t| t.order);
    let mut above: Vec<&TextItem> = items.iter().filter(|t| t.position == TextPosition::Above).collect();
    above.sort_by_key(|t| t.order);
    above.reverse();

    let mut out = Vec::with_capacity(items.len());

    let mut y = pair.bottom_edge() + border + margin;
    for item in below {
        out.push(PlacedText { item, x, y, anchor: VAnchor::Top });
        y += item.font_size * LINE_HEIGHT;
    }

    let mut y = pair.top_edge() - border - margin;
    for item in above {
        out.push(PlacedText { item, x, y, anchor: VAnchor::Bottom });
        y -= item.font_size * LINE_HEIGHT;
    }
    out
}

/// Draw planned text. Items with an unparseable color use `fallback`.
pub fn draw_text_layers(canvas: &skia::Canvas, shaper: &TextShaper, placed: &[PlacedText<'_>], fallback: skia::Color) {
    for p in placed {
        let color = parse_css_color(&p.item.color).unwrap_or_else(|e| {
            warn!(text = %p.item.text, error = %e, "text color unusable; using theme text color");
            fallback
        });
        let font = FontSpec {
            family: &p.item.font_family,
            size: p.item.font_size,
            color,
            bold: p.item.bold,
            italic: p.item.italic,
        };
        shaper.draw_anchored(canvas, &p.item.text, &font, p.x, p.y, HAlign::Center, p.anchor);
    }
}
