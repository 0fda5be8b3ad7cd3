//! Shared fixtures for widget tests.

use std::cell::RefCell;
use std::rc::Rc;

use elfin_core::{Context, HeadlessView, RecordingCanvas, Theme};
use kurbo::Rect;

/// Canvas, theme and view that a test context borrows from.
pub struct Harness {
    pub canvas: RefCell<RecordingCanvas>,
    pub theme: Theme,
    pub view: HeadlessView,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            canvas: RefCell::new(RecordingCanvas::new()),
            theme: Theme::default(),
            view: HeadlessView::new(),
        }
    }

    pub fn ctx(&self, bounds: Rect) -> Context<'_> {
        Context::new(bounds, &self.canvas, &self.theme, &self.view)
    }
}

/// Collects the values passed to a click callback.
pub fn click_log() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(bool) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |value| sink.borrow_mut().push(value))
}
