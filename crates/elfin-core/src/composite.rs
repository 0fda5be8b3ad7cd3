//! Containers that own child elements sharing the container's bounds.

use kurbo::{Point, Size};

use crate::context::Context;
use crate::element::{Drawable, Element, HitTestable};
use crate::geometry::ViewLimits;

/// Fixed-size set of children where exactly one is drawn and hit-tested.
pub struct Deck<const N: usize> {
    children: [Box<dyn Element>; N],
    selected: usize,
}

impl<const N: usize> Deck<N> {
    /// Create a deck showing the first child.
    pub fn new(children: [Box<dyn Element>; N]) -> Self {
        Self {
            children,
            selected: 0,
        }
    }

    /// Index of the visible child.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Show the child at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < N {
            self.selected = index;
        } else {
            log::warn!("Deck::select({}) out of range for {} children", index, N);
        }
    }

    pub fn get(&self, index: usize) -> Option<&dyn Element> {
        self.children.get(index).map(|c| c.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Element + 'static)> {
        self.children.get_mut(index).map(|c| c.as_mut())
    }

    /// The visible child.
    pub fn active(&self) -> Option<&dyn Element> {
        self.get(self.selected)
    }
}

impl<const N: usize> Drawable for Deck<N> {
    fn draw(&self, ctx: &Context) {
        if let Some(child) = self.active() {
            child.draw(ctx);
        }
    }
}

impl<const N: usize> HitTestable for Deck<N> {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.active().is_some_and(|child| child.hit_test(ctx, p))
    }
}

impl<const N: usize> Element for Deck<N> {
    fn limits(&self, ctx: &Context) -> ViewLimits {
        self.active().map_or(ViewLimits::FULL, |child| child.limits(ctx))
    }

    fn wants_control(&self) -> bool {
        self.active().is_some_and(|child| child.wants_control())
    }
}

/// Ordered children drawn bottom to top; hit testing picks the topmost.
#[derive(Default)]
pub struct Layer {
    children: Vec<Box<dyn Element>>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child on top.
    pub fn push(&mut self, child: impl Element + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Element> {
        self.children.get(index).map(|c| c.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Element + 'static)> {
        self.children.get_mut(index).map(|c| c.as_mut())
    }

    /// Index of the topmost child under `p`.
    pub fn hit_index(&self, ctx: &Context, p: Point) -> Option<usize> {
        self.children
            .iter()
            .enumerate()
            .rev()
            .find(|(_, child)| child.hit_test(ctx, p))
            .map(|(i, _)| i)
    }
}

impl Drawable for Layer {
    fn draw(&self, ctx: &Context) {
        for child in &self.children {
            child.draw(ctx);
        }
    }
}

impl HitTestable for Layer {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.hit_index(ctx, p).is_some()
    }
}

impl Element for Layer {
    fn limits(&self, ctx: &Context) -> ViewLimits {
        let mut limits = ViewLimits::FULL;
        for child in &self.children {
            let child_limits = child.limits(ctx);
            limits.min = Size::new(
                limits.min.width.max(child_limits.min.width),
                limits.min.height.max(child_limits.min.height),
            );
        }
        limits
    }

    fn wants_control(&self) -> bool {
        self.children.iter().any(|c| c.wants_control())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit_test::{self, Outline};
    use crate::recording::RecordingCanvas;
    use crate::theme::Theme;
    use crate::view::HeadlessView;
    use kurbo::Rect;
    use peniko::Color;
    use std::cell::RefCell;

    /// Fills a sub-rectangle of its bounds.
    struct Patch {
        inset: Rect,
        color: Color,
    }

    impl Patch {
        fn region(&self, ctx: &Context) -> Rect {
            self.inset + ctx.bounds.origin().to_vec2()
        }
    }

    impl Drawable for Patch {
        fn draw(&self, ctx: &Context) {
            let mut canvas = ctx.canvas();
            canvas.begin_path();
            canvas.add_rect(self.region(ctx));
            canvas.fill(self.color);
        }
    }

    impl HitTestable for Patch {
        fn hit_test(&self, ctx: &Context, p: Point) -> bool {
            hit_test::hit_test(&mut *ctx.canvas(), self.region(ctx), 0.0, Outline::Rect, p)
        }
    }

    impl Element for Patch {
        fn limits(&self, _ctx: &Context) -> ViewLimits {
            ViewLimits::at_least(self.inset.size())
        }
    }

    fn patch(x0: f64, x1: f64, color: Color) -> Patch {
        Patch {
            inset: Rect::new(x0, 0.0, x1, 10.0),
            color,
        }
    }

    #[test]
    fn test_deck_draws_and_hits_selected_only() {
        let canvas = RefCell::new(RecordingCanvas::new());
        let theme = Theme::default();
        let view = HeadlessView::new();
        let ctx = Context::new(Rect::new(0.0, 0.0, 100.0, 10.0), &canvas, &theme, &view);

        let mut deck = Deck::new([
            Box::new(patch(0.0, 10.0, Color::BLACK)) as Box<dyn Element>,
            Box::new(patch(50.0, 60.0, Color::WHITE)),
        ]);

        assert!(deck.hit_test(&ctx, Point::new(5.0, 5.0)));
        assert!(!deck.hit_test(&ctx, Point::new(55.0, 5.0)));

        deck.select(1);
        assert!(!deck.hit_test(&ctx, Point::new(5.0, 5.0)));
        assert!(deck.hit_test(&ctx, Point::new(55.0, 5.0)));

        deck.select(7);
        assert_eq!(deck.selected(), 1);

        deck.draw(&ctx);
        let commands = canvas.borrow_mut().take_commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].color().to_rgba8().r, 255);
    }

    #[test]
    fn test_layer_topmost_match() {
        let canvas = RefCell::new(RecordingCanvas::new());
        let theme = Theme::default();
        let view = HeadlessView::new();
        let ctx = Context::new(Rect::new(0.0, 0.0, 100.0, 10.0), &canvas, &theme, &view);

        let mut layer = Layer::new();
        layer.push(patch(0.0, 50.0, Color::BLACK));
        layer.push(patch(40.0, 100.0, Color::WHITE));

        assert_eq!(layer.hit_index(&ctx, Point::new(45.0, 5.0)), Some(1));
        assert_eq!(layer.hit_index(&ctx, Point::new(10.0, 5.0)), Some(0));
        assert_eq!(layer.hit_index(&ctx, Point::new(10.0, 50.0)), None);

        layer.draw(&ctx);
        assert_eq!(canvas.borrow().commands().len(), 2);

        let limits = layer.limits(&ctx);
        assert!((limits.min.width - 60.0).abs() < f64::EPSILON);
    }
}
