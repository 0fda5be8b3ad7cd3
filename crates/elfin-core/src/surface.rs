//! Headless top-level view: owns placed elements and routes pointer events.
//!
//! A press resolves the topmost element under the pointer. If it wants
//! control, it receives `click` and `begin_tracking` and captures the
//! pointer, unless it only clicks and declined the click. Once captured,
//! every following move goes to it as `drag` and `keep_tracking`, and the
//! release as `click` and `end_tracking`, wherever the pointer is.
//! Without a capture, moves drive `cursor` enter/hover/leave.

use std::cell::RefCell;

use kurbo::{Point, Rect};

use crate::canvas::Canvas;
use crate::context::Context;
use crate::element::{self, Element};
use crate::input::{ButtonKind, CursorTracking, Modifiers, MouseButton, PointerEvent, TrackingInfo};
use crate::theme::Theme;
use crate::view::{HeadlessView, View};

struct Placed {
    bounds: Rect,
    element: Box<dyn Element>,
}

/// Pointer capture held by one element for the duration of a gesture.
#[derive(Debug, Clone, Copy)]
struct Capture {
    index: usize,
    button: MouseButton,
    info: TrackingInfo,
}

/// Window stand-in for headless sessions and tests.
#[derive(Default)]
pub struct Surface {
    theme: Theme,
    view: HeadlessView,
    children: Vec<Placed>,
    capture: Option<Capture>,
    hover: Option<usize>,
}

impl Surface {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Place an element on top of the others. Returns its index.
    pub fn add(&mut self, bounds: Rect, element: impl Element + 'static) -> usize {
        self.children.push(Placed {
            bounds,
            element: Box::new(element),
        });
        self.children.len() - 1
    }

    pub fn view(&self) -> &HeadlessView {
        &self.view
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn bounds(&self, index: usize) -> Option<Rect> {
        self.children.get(index).map(|p| p.bounds)
    }

    pub fn element(&self, index: usize) -> Option<&dyn Element> {
        self.children.get(index).map(|p| p.element.as_ref())
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut (dyn Element + 'static)> {
        self.children.get_mut(index).map(|p| p.element.as_mut())
    }

    /// Index of the element holding the pointer capture.
    pub fn captured(&self) -> Option<usize> {
        self.capture.map(|c| c.index)
    }

    /// Index of the element under the cursor when nothing is captured.
    pub fn hovered(&self) -> Option<usize> {
        self.hover
    }

    /// Boolean value of an element that exposes one.
    pub fn bool_value(&self, index: usize) -> Option<bool> {
        self.children
            .get(index)
            .and_then(|p| p.element.as_bool_receiver())
            .map(|r| r.value())
    }

    /// Set the boolean value of an element and request a redraw of it if
    /// the value changed. Returns true on change.
    pub fn set_bool_value(&mut self, index: usize, value: bool) -> bool {
        let Some(placed) = self.children.get_mut(index) else {
            return false;
        };
        let Some(receiver) = placed.element.as_bool_receiver_mut() else {
            return false;
        };
        if receiver.value() == value {
            return false;
        }
        receiver.set_value(value);
        self.view.refresh(placed.bounds);
        true
    }

    /// Typed value of an element, when its value is a `T`.
    pub fn value<T: 'static>(&self, index: usize) -> Option<T> {
        self.children
            .get(index)
            .and_then(|p| element::value_of(p.element.as_ref()))
    }

    /// Set the typed value of an element and request a redraw of it.
    /// Returns false if the element has no value of type `T`.
    pub fn set_value<T: 'static>(&mut self, index: usize, value: T) -> bool {
        let Some(placed) = self.children.get_mut(index) else {
            return false;
        };
        let Some(receiver) = placed.element.as_any_receiver_mut() else {
            return false;
        };
        if !receiver.set_value_any(&value) {
            return false;
        }
        self.view.refresh(placed.bounds);
        true
    }

    /// Draw every element, bottom to top.
    pub fn draw(&self, canvas: &RefCell<dyn Canvas>) {
        for placed in &self.children {
            let ctx = Context::new(placed.bounds, canvas, &self.theme, &self.view);
            placed.element.draw(&ctx);
        }
    }

    /// Topmost element whose hit test accepts `p`.
    pub fn hit_index(&self, canvas: &RefCell<dyn Canvas>, p: Point) -> Option<usize> {
        self.children
            .iter()
            .enumerate()
            .rev()
            .find(|(_, placed)| {
                let ctx = Context::new(placed.bounds, canvas, &self.theme, &self.view);
                placed.element.hit_test(&ctx, p)
            })
            .map(|(i, _)| i)
    }

    /// Route one pointer event. Returns true if an element handled it.
    pub fn handle_pointer_event(&mut self, canvas: &RefCell<dyn Canvas>, event: PointerEvent) -> bool {
        self.view.set_cursor_pos(event.position());
        match event {
            PointerEvent::Down {
                position,
                button,
                num_clicks,
            } => self.press(canvas, position, button, num_clicks),
            PointerEvent::Move { position } => match self.capture {
                Some(_) => self.drag(canvas, position),
                None => self.track_cursor(canvas, position),
            },
            PointerEvent::Up { position, .. } => self.release(canvas, position),
        }
    }

    fn press(&mut self, canvas: &RefCell<dyn Canvas>, position: Point, kind: ButtonKind, num_clicks: u32) -> bool {
        if self.capture.is_some() {
            return false;
        }
        let Some(index) = self.hit_index(canvas, position) else {
            return false;
        };
        let placed = &mut self.children[index];
        if !placed.element.wants_control() {
            return false;
        }

        let button = MouseButton {
            down: true,
            num_clicks,
            kind,
            modifiers: Modifiers::default(),
            pos: position,
        };
        let mut info = TrackingInfo::from_button(&button);
        let ctx = Context::new(placed.bounds, canvas, &self.theme, &self.view);

        let clicked = placed
            .element
            .as_clickable()
            .map(|clickable| clickable.click(&ctx, button));
        let tracking = match placed.element.as_tracker() {
            Some(tracker) => {
                tracker.begin_tracking(&ctx, &mut info);
                true
            }
            None => false,
        };
        if clicked == Some(false) && !tracking {
            log::debug!("element {} declined the press at {:?}", index, position);
            return false;
        }

        log::debug!("element {} captured the pointer at {:?}", index, position);
        self.capture = Some(Capture {
            index,
            button,
            info,
        });
        true
    }

    fn drag(&mut self, canvas: &RefCell<dyn Canvas>, position: Point) -> bool {
        let Some(capture) = self.capture.as_mut() else {
            return false;
        };
        let Some(placed) = self.children.get_mut(capture.index) else {
            return false;
        };
        capture.info.advance(position);
        let button = MouseButton {
            pos: position,
            ..capture.button
        };
        let ctx = Context::new(placed.bounds, canvas, &self.theme, &self.view);

        if let Some(draggable) = placed.element.as_draggable() {
            draggable.drag(&ctx, button);
        }
        if let Some(tracker) = placed.element.as_tracker() {
            tracker.keep_tracking(&ctx, &mut capture.info);
        }
        true
    }

    fn release(&mut self, canvas: &RefCell<dyn Canvas>, position: Point) -> bool {
        let Some(mut capture) = self.capture.take() else {
            return false;
        };
        let Some(placed) = self.children.get_mut(capture.index) else {
            return false;
        };
        capture.info.advance(position);
        let button = MouseButton {
            down: false,
            pos: position,
            ..capture.button
        };
        let ctx = Context::new(placed.bounds, canvas, &self.theme, &self.view);

        if let Some(clickable) = placed.element.as_clickable() {
            clickable.click(&ctx, button);
        }
        if let Some(tracker) = placed.element.as_tracker() {
            tracker.end_tracking(&ctx, &mut capture.info);
        }
        log::debug!("element {} released the pointer at {:?}", capture.index, position);
        true
    }

    fn track_cursor(&mut self, canvas: &RefCell<dyn Canvas>, position: Point) -> bool {
        let hit = self.hit_index(canvas, position);
        let previous = self.hover;
        self.hover = hit;

        if previous != hit {
            if let Some(index) = previous {
                self.notify_cursor(canvas, index, position, CursorTracking::Leaving);
            }
            if let Some(index) = hit {
                self.notify_cursor(canvas, index, position, CursorTracking::Entering);
            }
        } else if let Some(index) = hit {
            self.notify_cursor(canvas, index, position, CursorTracking::Hovering);
        }
        hit.is_some()
    }

    fn notify_cursor(&mut self, canvas: &RefCell<dyn Canvas>, index: usize, p: Point, status: CursorTracking) {
        let Some(placed) = self.children.get_mut(index) else {
            return;
        };
        let ctx = Context::new(placed.bounds, canvas, &self.theme, &self.view);
        if let Some(reactive) = placed.element.as_cursor_reactive() {
            reactive.cursor(&ctx, p, status);
        }
    }
}
