// File: crates/poster-core/src/geometry.rs
// Summary: Circle descriptors and pairs; lightweight pixel-math helpers.

use skia_safe as skia;

/// A circular region on the canvas. `diameter == 2 * radius` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDescriptor {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub diameter: f32,
}

impl CircleDescriptor {
    pub fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        let radius = radius.max(0.0);
        Self { center_x, center_y, radius, diameter: radius * 2.0 }
    }

    pub fn center(&self) -> skia::Point {
        skia::Point::new(self.center_x, self.center_y)
    }

    pub fn top(&self) -> f32 { self.center_y - self.radius }
    pub fn bottom(&self) -> f32 { self.center_y + self.radius }
    pub fn left(&self) -> f32 { self.center_x - self.radius }
    pub fn right(&self) -> f32 { self.center_x + self.radius }

    /// Bounding square of the circle.
    pub fn bounds(&self) -> skia::Rect {
        skia::Rect::from_xywh(self.left(), self.top(), self.diameter, self.diameter)
    }
}

/// Two equal-radius circles in either arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CirclePair {
    Landscape { left: CircleDescriptor, right: CircleDescriptor },
    Portrait { top: CircleDescriptor, bottom: CircleDescriptor },
}

impl CirclePair {
    /// Circle in the first source slot (left or top).
    pub fn first(&self) -> &CircleDescriptor {
        match self {
            CirclePair::Landscape { left, .. } => left,
            CirclePair::Portrait { top, .. } => top,
        }
    }

    /// Circle in the second source slot (right or bottom).
    pub fn second(&self) -> &CircleDescriptor {
        match self {
            CirclePair::Landscape { right, .. } => right,
            CirclePair::Portrait { bottom, .. } => bottom,
        }
    }

    pub fn slot(&self, index: usize) -> &CircleDescriptor {
        if index == 0 { self.first() } else { self.second() }
    }

    pub fn radius(&self) -> f32 { self.first().radius }

    pub fn is_landscape(&self) -> bool { matches!(self, CirclePair::Landscape { .. }) }

    /// Shared horizontal midpoint of the cluster.
    pub fn midpoint_x(&self) -> f32 {
        (self.first().center_x + self.second().center_x) * 0.5
    }

    /// Topmost y reached by either circle.
    pub fn top_edge(&self) -> f32 {
        self.first().top().min(self.second().top())
    }

    /// Lowest y reached by either circle.
    pub fn bottom_edge(&self) -> f32 {
        self.first().bottom().max(self.second().bottom())
    }

    /// Distance between the two centers along the arrangement axis.
    pub fn spacing(&self) -> f32 {
        match self {
            CirclePair::Landscape { left, right } => right.center_x - left.center_x,
            CirclePair::Portrait { top, bottom } => bottom.center_y - top.center_y,
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Clamp a percentage into `[lo, hi]`; NaN and infinities fall back to `lo`.
#[inline]
pub fn clamp_percent(v: f32, lo: f32, hi: f32) -> f32 {
    if !v.is_finite() { return lo; }
    clamp(v, lo, hi)
}
