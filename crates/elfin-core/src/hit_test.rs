//! Hit testing of rotated shapes.
//!
//! A shape is described by its bounds, a rotation about the bounds center
//! and an [`Outline`]. Drawing and hit testing both go through [`prepare`]
//! and [`outline_path`], so the region that reacts to the pointer is exactly
//! the region that gets painted.

use kurbo::{Circle, Point, Rect};

use crate::canvas::{Canvas, CanvasState};
use crate::geometry::is_degenerate;

/// Outline of a shape, relative to its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Rect,
    /// Rounded rectangle with the given corner radius.
    RoundRect(f64),
    /// Circle inscribed in the bounds.
    Circle,
}

impl Outline {
    /// Rounded rectangle whose short side is fully rounded.
    pub fn pill(bounds: Rect) -> Self {
        Outline::RoundRect(bounds.width().min(bounds.height()) / 2.0)
    }
}

/// Move the canvas origin to the center of `bounds` and rotate by `angle`.
///
/// Returns the scoped state, which restores the previous frame on drop, and
/// `bounds` re-expressed in the new frame (centered on the origin).
pub fn prepare<'a>(canvas: &'a mut dyn Canvas, bounds: Rect, angle: f64) -> (CanvasState<'a>, Rect) {
    let center = bounds.center().to_vec2();
    let mut state = CanvasState::new(canvas);
    state.translate(center);
    state.rotate(angle);
    (state, bounds - center)
}

/// Replace the current path with `outline` laid over `local`.
pub fn outline_path(canvas: &mut dyn Canvas, outline: Outline, local: Rect) {
    canvas.begin_path();
    match outline {
        Outline::Rect => canvas.add_rect(local),
        Outline::RoundRect(radius) => canvas.add_round_rect(local, radius),
        Outline::Circle => canvas.add_circle(Circle::new(
            local.center(),
            local.width().min(local.height()) / 2.0,
        )),
    }
}

/// Check whether `p` lies on the shape. `p` is in the canvas's current
/// coordinate frame. Degenerate bounds never hit.
pub fn hit_test(canvas: &mut dyn Canvas, bounds: Rect, angle: f64, outline: Outline, p: Point) -> bool {
    if is_degenerate(bounds) {
        return false;
    }
    let device = canvas.transform_point(p);
    let (mut state, local) = prepare(canvas, bounds, angle);
    outline_path(&mut *state, outline, local);
    let hit = state.hit_test(device);
    log::trace!("hit_test {:?} angle={:.3} at {:?}: {}", bounds, angle, p, hit);
    hit
}

/// Run `paint` inside the shape's local frame. `paint` receives the canvas
/// and the bounds centered on the origin.
pub fn with_frame<F>(canvas: &mut dyn Canvas, bounds: Rect, angle: f64, paint: F)
where
    F: FnOnce(&mut dyn Canvas, Rect),
{
    let (mut state, local) = prepare(canvas, bounds, angle);
    paint(&mut *state, local);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingCanvas;
    use kurbo::{Affine, Shape};
    use peniko::Color;

    fn filled_path(bounds: Rect, angle: f64, outline: Outline) -> kurbo::BezPath {
        let mut canvas = RecordingCanvas::new();
        with_frame(&mut canvas, bounds, angle, |canvas, local| {
            outline_path(canvas, outline, local);
            canvas.fill(Color::BLACK);
        });
        canvas.take_commands().remove(0).path().clone()
    }

    #[test]
    fn test_hit_matches_drawn_region() {
        let bounds = Rect::new(20.0, 10.0, 60.0, 90.0);
        let outline = Outline::pill(bounds);
        for angle in [-0.4, -0.1, 0.0, 0.25, 0.4, 1.3] {
            let drawn = filled_path(bounds, angle, outline);
            let mut canvas = RecordingCanvas::new();
            for ix in 0..40 {
                for iy in 0..40 {
                    let p = Point::new(ix as f64 * 2.5 + 0.3, iy as f64 * 2.5 + 0.7);
                    assert_eq!(
                        hit_test(&mut canvas, bounds, angle, outline, p),
                        drawn.contains(p),
                        "angle {angle} point {p:?}"
                    );
                }
            }
            assert_eq!(canvas.depth(), 0);
        }
    }

    #[test]
    fn test_rotation_moves_hit_region() {
        // 10 wide, 100 tall, centered on (50, 50).
        let bounds = Rect::new(45.0, 0.0, 55.0, 100.0);
        let mut canvas = RecordingCanvas::new();
        let p = Point::new(90.0, 50.0);

        assert!(!hit_test(&mut canvas, bounds, 0.0, Outline::Rect, p));
        assert!(hit_test(&mut canvas, bounds, std::f64::consts::FRAC_PI_2, Outline::Rect, p));
        assert!(hit_test(&mut canvas, bounds, 0.0, Outline::Rect, Point::new(50.0, 95.0)));
    }

    #[test]
    fn test_rounded_corner_excluded() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 40.0);
        let mut canvas = RecordingCanvas::new();
        assert!(hit_test(&mut canvas, bounds, 0.0, Outline::Rect, Point::new(1.0, 1.0)));
        assert!(!hit_test(&mut canvas, bounds, 0.0, Outline::RoundRect(20.0), Point::new(1.0, 1.0)));
        assert!(hit_test(&mut canvas, bounds, 0.0, Outline::Circle, Point::new(20.0, 20.0)));
        assert!(!hit_test(&mut canvas, bounds, 0.0, Outline::Circle, Point::new(2.0, 38.0)));
    }

    #[test]
    fn test_degenerate_bounds_never_hit() {
        let mut canvas = RecordingCanvas::new();
        let zero = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!hit_test(&mut canvas, zero, 0.0, Outline::Rect, Point::new(10.0, 10.0)));
        let inverted = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(!hit_test(&mut canvas, inverted, 0.0, Outline::Rect, Point::new(5.0, 5.0)));
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_respects_outer_transform() {
        let mut canvas = RecordingCanvas::new();
        canvas.translate(kurbo::Vec2::new(100.0, 0.0));
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(hit_test(&mut canvas, bounds, 0.0, Outline::Rect, Point::new(5.0, 5.0)));
        assert_eq!(canvas.transform(), Affine::translate(kurbo::Vec2::new(100.0, 0.0)));
    }
}
