// File: crates/poster-core/src/theme.rs
// Summary: Poster color presets (background, borders, captions, text, placeholder).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub border: skia::Color,
    pub caption: skia::Color,
    pub text: skia::Color,
    /// Fill for a circle whose map never arrived in time.
    pub placeholder: skia::Color,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            name: "midnight",
            background: skia::Color::from_argb(255, 12, 18, 38),
            border: skia::Color::from_argb(255, 220, 200, 140),
            caption: skia::Color::from_argb(255, 200, 205, 220),
            text: skia::Color::from_argb(255, 240, 236, 224),
            placeholder: skia::Color::from_argb(255, 36, 44, 70),
        }
    }

    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 0, 0, 0),
            border: skia::Color::from_argb(255, 255, 255, 255),
            caption: skia::Color::from_argb(255, 190, 190, 190),
            text: skia::Color::from_argb(255, 255, 255, 255),
            placeholder: skia::Color::from_argb(255, 40, 40, 40),
        }
    }

    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::from_argb(255, 250, 248, 242),
            border: skia::Color::from_argb(255, 30, 30, 36),
            caption: skia::Color::from_argb(255, 90, 90, 100),
            text: skia::Color::from_argb(255, 20, 20, 28),
            placeholder: skia::Color::from_argb(255, 224, 222, 214),
        }
    }

    pub fn sepia() -> Self {
        Self {
            name: "sepia",
            background: skia::Color::from_argb(255, 0xf4, 0xec, 0xd8),
            border: skia::Color::from_argb(255, 0x70, 0x4c, 0x2c),
            caption: skia::Color::from_argb(255, 0x8a, 0x6a, 0x48),
            text: skia::Color::from_argb(255, 0x4a, 0x32, 0x1e),
            placeholder: skia::Color::from_argb(255, 0xe0, 0xd2, 0xb4),
        }
    }

    pub fn with_background(mut self, color: skia::Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_border(mut self, color: skia::Color) -> Self {
        self.border = color;
        self
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::midnight() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::midnight(), Theme::classic(), Theme::paper(), Theme::sepia()]
}

/// Find a theme by its `name`, falling back to midnight.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::midnight()
}
