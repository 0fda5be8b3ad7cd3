//! Rectangle and point helpers layered on top of kurbo.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Extent used to mean "unbounded" in layout limit queries.
pub const FULL_EXTENT: f64 = 1e6;

/// Clamp `value` into `[lo, hi]` by saturation.
///
/// Unlike [`f64::clamp`] this never panics: a NaN input saturates to `lo`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Saturate `value` so it never exceeds `hi`.
pub fn clamp_max(value: f64, hi: f64) -> f64 {
    value.min(hi)
}

/// Check whether a rectangle has no area (zero, negative or NaN extent).
pub fn is_degenerate(r: Rect) -> bool {
    !(r.width() > 0.0 && r.height() > 0.0)
}

/// Translate a rectangle by `dx`, `dy`.
pub fn move_rect(r: Rect, dx: f64, dy: f64) -> Rect {
    r + Vec2::new(dx, dy)
}

/// Translate a point by `dx`, `dy`.
pub fn move_point(p: Point, dx: f64, dy: f64) -> Point {
    p + Vec2::new(dx, dy)
}

/// Place `r` inside `within` at fractional positions along each axis.
///
/// An alignment of `0.0` hugs the left/top edge, `1.0` the right/bottom edge.
pub fn align(r: Rect, within: Rect, x_align: f64, y_align: f64) -> Rect {
    r.with_origin(Point::new(
        within.x0 + (within.width() - r.width()) * x_align,
        within.y0 + (within.height() - r.height()) * y_align,
    ))
}

/// Align horizontally only, keeping the vertical position of `r`.
pub fn align_h(r: Rect, within: Rect, x_align: f64) -> Rect {
    r.with_origin(Point::new(
        within.x0 + (within.width() - r.width()) * x_align,
        r.y0,
    ))
}

/// Align vertically only, keeping the horizontal position of `r`.
pub fn align_v(r: Rect, within: Rect, y_align: f64) -> Rect {
    r.with_origin(Point::new(
        r.x0,
        within.y0 + (within.height() - r.height()) * y_align,
    ))
}

/// Center `r` inside `within`.
pub fn center(r: Rect, within: Rect) -> Rect {
    align(r, within, 0.5, 0.5)
}

/// Center `r` horizontally inside `within`.
pub fn center_h(r: Rect, within: Rect) -> Rect {
    align_h(r, within, 0.5)
}

/// Center `r` vertically inside `within`.
pub fn center_v(r: Rect, within: Rect) -> Rect {
    align_v(r, within, 0.5)
}

/// Minimum and maximum sizes an element accepts from its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewLimits {
    pub min: Size,
    pub max: Size,
}

impl ViewLimits {
    /// No constraint at all.
    pub const FULL: ViewLimits = ViewLimits {
        min: Size::new(0.0, 0.0),
        max: Size::new(FULL_EXTENT, FULL_EXTENT),
    };

    /// Limits with the given minimum size and unbounded maximum.
    pub fn at_least(min: Size) -> Self {
        Self {
            min,
            max: Size::new(FULL_EXTENT, FULL_EXTENT),
        }
    }

    /// Check whether the maximum width is unbounded.
    pub fn is_width_unbounded(&self) -> bool {
        self.max.width >= FULL_EXTENT
    }

    /// Check whether the maximum height is unbounded.
    pub fn is_height_unbounded(&self) -> bool {
        self.max.height >= FULL_EXTENT
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self::FULL
    }
}
