// File: crates/poster-core/src/text.rs
// Summary: Poster text items and a Skia textlayout shaper that draws them with anchors.

use serde::{Deserialize, Serialize};
use skia_safe as skia;
use skia::font_style::{Slant, Weight, Width};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const FALLBACK_FAMILIES: [&str; 6] = ["Georgia", "Times New Roman", "DejaVu Serif", "Arial", "DejaVu Sans", "serif"];

/// Where a text item sits relative to the circle cluster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Above,
    #[default]
    Below,
}

impl std::str::FromStr for TextPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "above" | "top" => Ok(Self::Above),
            "below" | "bottom" => Ok(Self::Below),
            other => Err(format!("unknown text position '{other}'")),
        }
    }
}

/// One line of poster text, built from form values for a single render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextItem {
    pub text: String,
    pub font_family: String,
    pub font_size: f32,
    /// CSS color string; parsed at draw time.
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub order: i32,
    pub position: TextPosition,
}

impl Default for TextItem {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_family: "Georgia, serif".to_string(),
            font_size: 32.0,
            color: "#ffffff".to_string(),
            bold: false,
            italic: false,
            order: 0,
            position: TextPosition::Below,
        }
    }
}

impl TextItem {
    pub fn new(text: impl Into<String>, order: i32, position: TextPosition) -> Self {
        Self { text: text.into(), order, position, ..Self::default() }
    }

    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_style(mut self, bold: bool, italic: bool) -> Self {
        self.bold = bold;
        self.italic = italic;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Which edge of the text box sits on the anchor y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAnchor {
    Top,
    Middle,
    Bottom,
}

/// Font request independent of where the text goes.
#[derive(Clone, Copy, Debug)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub italic: bool,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    /// Split a CSS family list, strip quotes, then append the built-in fallbacks.
    pub fn family_list(spec: &str) -> Vec<String> {
        let mut out: Vec<String> = spec
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        for f in FALLBACK_FAMILIES {
            if !out.iter().any(|have| have.eq_ignore_ascii_case(f)) {
                out.push(f.to_string());
            }
        }
        out
    }

    fn make_style(font: &FontSpec<'_>) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(font.color);
        let families = Self::family_list(font.family);
        ts.set_font_families(families.as_slice());
        let weight = if font.bold { Weight::BOLD } else { Weight::NORMAL };
        let slant = if font.italic { Slant::Italic } else { Slant::Upright };
        ts.set_font_style(skia::FontStyle::new(weight, Width::NORMAL, slant));
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec<'_>) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font));
        builder.add_text(text);
        let mut paragraph = builder.build();
        // No wrapping: lay out on an effectively unbounded line.
        paragraph.layout(100_000.0);
        paragraph
    }

    /// Draw `text` so that the anchor point `(x, y)` lands on the requested box edge.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        font: &FontSpec<'_>,
        x: f32,
        y: f32,
        h: HAlign,
        v: VAnchor,
    ) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, font);
        let width = p.longest_line();
        let height = p.height();
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - width * 0.5,
            HAlign::Right => x - width,
        };
        let top = match v {
            VAnchor::Top => y,
            VAnchor::Middle => y - height * 0.5,
            VAnchor::Bottom => y - height,
        };
        p.paint(canvas, (left, top));
    }
}
