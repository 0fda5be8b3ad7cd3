//! Drawing surface capability and a scoped transform guard.
//!
//! Widgets never talk to a concrete rendering backend. They draw and hit
//! test through [`Canvas`], which keeps a current transform, a current path
//! and fill/stroke operations. The same path that a fill would produce is
//! the one [`Canvas::hit_test`] queries, so the clickable region of a widget
//! always equals what it draws.

use std::ops::{Deref, DerefMut};

use kurbo::{Affine, Circle, Point, Rect, Vec2};
use peniko::Color;

/// Abstract drawing surface.
pub trait Canvas {
    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching [`Canvas::save`].
    fn restore(&mut self);

    /// Translate the current coordinate frame.
    fn translate(&mut self, offset: Vec2);

    /// Rotate the current coordinate frame by `angle` radians.
    fn rotate(&mut self, angle: f64);

    /// The current user-to-device transform.
    fn transform(&self) -> Affine;

    /// Discard the current path.
    fn begin_path(&mut self);

    /// Append a rectangle to the current path.
    fn add_rect(&mut self, rect: Rect);

    /// Append a rounded rectangle to the current path.
    fn add_round_rect(&mut self, rect: Rect, radius: f64);

    /// Append a circle to the current path.
    fn add_circle(&mut self, circle: Circle);

    /// Fill the current path. The path is kept.
    fn fill(&mut self, color: Color);

    /// Stroke the current path. The path is kept.
    fn stroke(&mut self, color: Color, width: f64);

    /// Test a device-space point against the current path.
    fn hit_test(&self, device_point: Point) -> bool;

    /// Map a user-space point to device space.
    fn transform_point(&self, p: Point) -> Point {
        self.transform() * p
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.begin_path();
        self.add_round_rect(rect, radius);
        self.fill(color);
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: f64, color: Color, width: f64) {
        self.begin_path();
        self.add_round_rect(rect, radius);
        self.stroke(color, width);
    }
}

/// Scoped canvas state.
///
/// Saves the canvas transform on creation and restores it when dropped, so
/// every exit path of a drawing or hit-testing routine leaves the canvas
/// frame as it found it.
pub struct CanvasState<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> CanvasState<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<'a> Deref for CanvasState<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl<'a> DerefMut for CanvasState<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

impl Drop for CanvasState<'_> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
