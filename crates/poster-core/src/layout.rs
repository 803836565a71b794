// File: crates/poster-core/src/layout.rs
// Summary: Circle layout calculator for combined star/street views (landscape and portrait).
//
// The cluster may use USABLE_FRACTION of the canvas. The constrained axis (height for
// landscape, width for portrait) sets the diameter; the arrangement axis only shrinks it
// when the pair would otherwise spill past the usable band.

use crate::geometry::{clamp_percent, CircleDescriptor, CirclePair};
use crate::types::{CanvasDimensions, Orientation, USABLE_FRACTION};

pub const MIN_RADIUS_PERCENT: f32 = 1.0;
pub const MAX_PERCENT: f32 = 100.0;

/// Inputs that fully determine a `CirclePair`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderRequest {
    pub dims: CanvasDimensions,
    pub radius_percent: f32,
    pub overlap_percent: f32,
    pub orientation: Orientation,
}

impl RenderRequest {
    pub fn circles(&self) -> CirclePair {
        let (w, h) = (self.dims.width_f32(), self.dims.height_f32());
        match self.orientation {
            Orientation::Landscape => {
                calculate_landscape_circles(w, h, self.radius_percent, self.overlap_percent)
            }
            Orientation::Portrait => {
                calculate_portrait_circles(w, h, self.radius_percent, self.overlap_percent)
            }
        }
    }
}

/// Returns `(diameter, spacing)` for a cluster laid out along an axis of length `along`
/// with `across` as the constrained axis.
fn axis_layout(along: f32, across: f32, radius_percent: f32, overlap_percent: f32) -> (f32, f32) {
    let radius_percent = clamp_percent(radius_percent, MIN_RADIUS_PERCENT, MAX_PERCENT);
    let overlap = clamp_percent(overlap_percent, 0.0, MAX_PERCENT) / 100.0;

    let mut diameter = (across.max(0.0) * USABLE_FRACTION) * (radius_percent / 100.0);
    // Extent along the axis is spacing + diameter = diameter * (2 - overlap).
    let usable_along = along.max(0.0) * USABLE_FRACTION;
    let extent = diameter * (2.0 - overlap);
    if extent > usable_along && extent > 0.0 {
        diameter *= usable_along / extent;
    }
    let spacing = diameter * (1.0 - overlap);
    (diameter, spacing)
}

/// Two circles side by side, centered on the canvas, sharing `y = height / 2`.
///
/// The diameter is `height * 0.9 * r / 100` unless the pair would exceed `width * 0.9`,
/// in which case it shrinks to fit (1000x800 at r=100, o=0 gives 450, not 720).
pub fn calculate_landscape_circles(
    canvas_width: f32,
    canvas_height: f32,
    radius_percent: f32,
    overlap_percent: f32,
) -> CirclePair {
    let (diameter, spacing) = axis_layout(canvas_width, canvas_height, radius_percent, overlap_percent);
    let radius = diameter / 2.0;
    let cx = canvas_width / 2.0;
    let cy = canvas_height / 2.0;
    CirclePair::Landscape {
        left: CircleDescriptor::new(cx - spacing / 2.0, cy, radius),
        right: CircleDescriptor::new(cx + spacing / 2.0, cy, radius),
    }
}

/// Two circles stacked vertically, centered on the canvas, sharing `x = width / 2`.
///
/// Same rule as the landscape layout with the axes swapped: `width * 0.9 * r / 100`,
/// shrunk when the stack would exceed `height * 0.9`.
pub fn calculate_portrait_circles(
    canvas_width: f32,
    canvas_height: f32,
    radius_percent: f32,
    overlap_percent: f32,
) -> CirclePair {
    let (diameter, spacing) = axis_layout(canvas_height, canvas_width, radius_percent, overlap_percent);
    let radius = diameter / 2.0;
    let cx = canvas_width / 2.0;
    let cy = canvas_height / 2.0;
    CirclePair::Portrait {
        top: CircleDescriptor::new(cx, cy - spacing / 2.0, radius),
        bottom: CircleDescriptor::new(cx, cy + spacing / 2.0, radius),
    }
}
