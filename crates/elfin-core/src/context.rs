//! Per-call bundle handed to every capability method.

use std::cell::{RefCell, RefMut};

use kurbo::{Point, Rect};

use crate::canvas::Canvas;
use crate::theme::Theme;
use crate::view::View;

/// Everything an element needs during one call: its bounds, the canvas,
/// the theme and the view. Immutable for the duration of the call.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Bounds of the element receiving the call.
    pub bounds: Rect,
    pub theme: &'a Theme,
    pub view: &'a dyn View,
    canvas: &'a RefCell<dyn Canvas>,
}

impl<'a> Context<'a> {
    pub fn new(
        bounds: Rect,
        canvas: &'a RefCell<dyn Canvas>,
        theme: &'a Theme,
        view: &'a dyn View,
    ) -> Self {
        Self {
            bounds,
            theme,
            view,
            canvas,
        }
    }

    /// Same context with different bounds, for a child element.
    pub fn with_bounds(&self, bounds: Rect) -> Context<'a> {
        Context { bounds, ..*self }
    }

    /// Borrow the canvas. Release the borrow before calling into children.
    pub fn canvas(&self) -> RefMut<'a, dyn Canvas + 'static> {
        self.canvas.borrow_mut()
    }

    pub fn cursor_pos(&self) -> Point {
        self.view.cursor_pos()
    }

    /// Request a redraw of this element's bounds.
    pub fn refresh(&self) {
        self.view.refresh(self.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingCanvas;
    use crate::view::HeadlessView;

    #[test]
    fn test_with_bounds_and_refresh() {
        let canvas = RefCell::new(RecordingCanvas::new());
        let theme = Theme::default();
        let view = HeadlessView::new();
        let ctx = Context::new(Rect::new(0.0, 0.0, 100.0, 100.0), &canvas, &theme, &view);

        let child = ctx.with_bounds(Rect::new(10.0, 10.0, 20.0, 20.0));
        child.refresh();
        assert_eq!(view.take_dirty(), vec![Rect::new(10.0, 10.0, 20.0, 20.0)]);
        assert_eq!(ctx.bounds, Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_cursor_pos_from_view() {
        let canvas = RefCell::new(RecordingCanvas::new());
        let theme = Theme::default();
        let view = HeadlessView::new();
        view.set_cursor_pos(Point::new(7.0, 8.0));
        let ctx = Context::new(Rect::ZERO, &canvas, &theme, &view);
        assert_eq!(ctx.cursor_pos(), Point::new(7.0, 8.0));
    }
}
