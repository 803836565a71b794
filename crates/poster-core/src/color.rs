// File: crates/poster-core/src/color.rs
// Summary: CSS color parsing for form values and the HSV model behind the color picker.

use skia_safe as skia;

use crate::error::ColorError;

/// Parse a CSS-style color: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)` or a name.
pub fn parse_css_color(input: &str) -> Result<skia::Color, ColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Hex(s.to_string()));
    }
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_functional(&lower).ok_or_else(|| ColorError::Functional(s.to_string()));
    }
    named(&lower).ok_or_else(|| ColorError::Unknown(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(skia::Color::from_argb(255, nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_functional(s: &str) -> Option<skia::Color> {
    let open = s.find('(')?;
    let close = s.rfind(')')?;
    let name = s[..open].trim();
    let parts: Vec<&str> = s.get(open + 1..close)?.split(',').map(str::trim).collect();
    let channel = |p: &str| -> Option<u8> {
        if let Some(pct) = p.strip_suffix('%') {
            let v: f32 = pct.trim().parse().ok()?;
            return Some((v.clamp(0.0, 100.0) / 100.0 * 255.0).round() as u8);
        }
        let v: f32 = p.parse().ok()?;
        Some(v.clamp(0.0, 255.0).round() as u8)
    };
    match (name, parts.len()) {
        ("rgb", 3) => Some(skia::Color::from_argb(255, channel(parts[0])?, channel(parts[1])?, channel(parts[2])?)),
        ("rgba", 4) => {
            let a: f32 = parts[3].parse().ok()?;
            let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            Some(skia::Color::from_argb(a, channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
        }
        _ => None,
    }
}

fn named(name: &str) -> Option<skia::Color> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "gold" => (255, 215, 0),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "navy" => (0, 0, 128),
        "midnightblue" => (25, 25, 112),
        "transparent" => return Some(skia::Color::from_argb(0, 0, 0, 0)),
        _ => return None,
    };
    Some(skia::Color::from_argb(255, r, g, b))
}

/// Format as `#rrggbb` (alpha dropped when opaque, `#rrggbbaa` otherwise).
pub fn to_hex(color: skia::Color) -> String {
    if color.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", color.r(), color.g(), color.b(), color.a())
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h: h.rem_euclid(360.0), s: s.clamp(0.0, 1.0), v: v.clamp(0.0, 1.0) }
    }

    pub fn to_color(self) -> skia::Color {
        let c = self.v * self.s;
        let hp = self.h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.v - c;
        let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        skia::Color::from_argb(255, to_u8(r1), to_u8(g1), to_u8(b1))
    }

    pub fn from_color(color: skia::Color) -> Self {
        let r = color.r() as f32 / 255.0;
        let g = color.g() as f32 / 255.0;
        let b = color.b() as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let h = if d == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / d).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { d / max };
        Self::new(h, s, max)
    }

    pub fn to_hex(self) -> String {
        to_hex(self.to_color())
    }
}
