// File: crates/poster-core/src/types.rs
// Summary: Shared types and constants (surface sizes, orientation, layout ratios).

use serde::{Deserialize, Serialize};

use crate::error::DimensionError;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 800;

/// Share of the constrained canvas axis the circle cluster may occupy.
pub const USABLE_FRACTION: f32 = 0.9;
/// Line advance as a multiple of font size for stacked text.
pub const LINE_HEIGHT: f32 = 1.2;
/// Gap between the circle cluster and stacked text, as a fraction of the radius.
pub const TEXT_MARGIN_FRACTION: f32 = 0.1;

/// Pixel size of the output surface.
/// Contract: both sides are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasDimensions {
    pub width: u32,
    pub height: u32,
}

impl CanvasDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            return Err(DimensionError::Empty { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width_f32(&self) -> f32 { self.width as f32 }
    pub fn height_f32(&self) -> f32 { self.height as f32 }

    /// Size tuple in the form Skia surface constructors take.
    pub fn as_isize(&self) -> (i32, i32) {
        (self.width.min(i32::MAX as u32) as i32, self.height.min(i32::MAX as u32) as i32)
    }
}

impl Default for CanvasDimensions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

/// How the two circles are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Side by side (left, right).
    #[default]
    Landscape,
    /// Stacked (top, bottom).
    Portrait,
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" | "horizontal" => Ok(Self::Landscape),
            "portrait" | "vertical" => Ok(Self::Portrait),
            other => Err(format!("unknown orientation '{other}' (expected landscape or portrait)")),
        }
    }
}

/// Which map a circle shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapKind {
    Street,
    Star,
}

impl MapKind {
    pub fn caption(self) -> &'static str {
        match self {
            MapKind::Street => "Street Map",
            MapKind::Star => "Star Map",
        }
    }

    /// Source order for the two circles: street first unless swapped.
    pub fn source_order(swap: bool) -> [MapKind; 2] {
        if swap { [MapKind::Star, MapKind::Street] } else { [MapKind::Street, MapKind::Star] }
    }
}
