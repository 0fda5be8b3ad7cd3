//! The view collaborator: redraw requests and cursor position.

use std::cell::{Cell, RefCell};

use kurbo::{Point, Rect};

/// What widgets need from the window hosting them.
pub trait View {
    /// Request a redraw of `region`. Fire-and-forget.
    fn refresh(&self, region: Rect);

    /// Current pointer position in widget coordinates.
    fn cursor_pos(&self) -> Point;
}

/// View without a window: remembers the cursor and collects dirty regions.
#[derive(Debug, Default)]
pub struct HeadlessView {
    cursor: Cell<Point>,
    dirty: RefCell<Vec<Rect>>,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor.
    pub fn set_cursor_pos(&self, p: Point) {
        self.cursor.set(p);
    }

    /// Number of refresh requests since the last [`HeadlessView::take_dirty`].
    pub fn refresh_count(&self) -> usize {
        self.dirty.borrow().len()
    }

    /// Drain the collected refresh regions.
    pub fn take_dirty(&self) -> Vec<Rect> {
        std::mem::take(&mut *self.dirty.borrow_mut())
    }
}

impl View for HeadlessView {
    fn refresh(&self, region: Rect) {
        self.dirty.borrow_mut().push(region);
    }

    fn cursor_pos(&self) -> Point {
        self.cursor.get()
    }
}
