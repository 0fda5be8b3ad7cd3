//! Plain faces for buttons.

use elfin_core::hit_test::{self, Outline};
use elfin_core::{Context, Drawable, Element, HitTestable};
use kurbo::Point;
use peniko::Color;

use crate::sizing;

/// A filled rounded box covering its bounds.
#[derive(Debug, Clone, Copy)]
pub struct RoundBox {
    /// Fill color
    pub color: Color,
    /// Corner radius
    pub corner_radius: f64,
}

impl RoundBox {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            corner_radius: sizing::CORNER_RADIUS,
        }
    }

    /// Set the corner radius.
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    fn outline(&self) -> Outline {
        Outline::RoundRect(self.corner_radius)
    }
}

impl Drawable for RoundBox {
    fn draw(&self, ctx: &Context) {
        let outline = self.outline();
        hit_test::with_frame(&mut *ctx.canvas(), ctx.bounds, 0.0, |canvas, local| {
            hit_test::outline_path(canvas, outline, local);
            canvas.fill(self.color);
        });
    }
}

impl HitTestable for RoundBox {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        hit_test::hit_test(&mut *ctx.canvas(), ctx.bounds, 0.0, self.outline(), p)
    }
}

impl Element for RoundBox {}
