//! Gesture state for the begin/keep/end tracking protocol.
//!
//! A tracked gesture moves through `None -> Start -> {Moving | Rotating}
//! -> None`. `begin_tracking` enters `Start` and immediately repositions,
//! which classifies the press into a live mode and captures the offset
//! between the pointer and the reference point being dragged. Later
//! `keep_tracking` calls reposition only while a live mode is active;
//! anything else is ignored. `end_tracking` always returns to `None`.

use kurbo::{Point, Vec2};

use crate::context::Context;
use crate::input::TrackingInfo;

/// Tracking mode of a gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackingMode {
    #[default]
    None,
    /// Press received, not yet classified.
    Start,
    Moving,
    Rotating,
}

/// Gesture-local state owned by a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gesture {
    mode: TrackingMode,
    offset: Vec2,
}

impl Gesture {
    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// Offset captured when the gesture was classified.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Whether a move or rotate is in progress.
    pub fn is_live(&self) -> bool {
        matches!(self.mode, TrackingMode::Moving | TrackingMode::Rotating)
    }

    /// Enter `Start`, dropping any previous offset.
    pub fn start(&mut self) {
        self.mode = TrackingMode::Start;
        self.offset = Vec2::ZERO;
    }

    /// Classify the gesture, remembering the offset from the pointer to the
    /// reference point.
    pub fn capture(&mut self, mode: TrackingMode, pointer: Point, reference: Point) {
        self.mode = mode;
        self.offset = pointer - reference;
        log::debug!("gesture captured as {:?} with offset {:?}", mode, self.offset);
    }

    /// Back to `None`.
    pub fn reset(&mut self) {
        self.mode = TrackingMode::None;
        self.offset = Vec2::ZERO;
    }
}

/// A widget that turns tracked pointer positions into value changes.
pub trait Reposition {
    fn gesture_mut(&mut self) -> &mut Gesture;

    /// Apply the pointer position. While the gesture is in `Start` this
    /// also classifies it. Returns false when the position was not handled.
    fn reposition(&mut self, ctx: &Context, p: Point) -> bool;
}

/// Start a gesture. A press that hits nothing draggable leaves it in `None`.
pub fn begin_tracking<R: Reposition + ?Sized>(widget: &mut R, ctx: &Context, info: &TrackingInfo) -> bool {
    widget.gesture_mut().start();
    let handled = widget.reposition(ctx, info.current);
    if !widget.gesture_mut().is_live() {
        widget.gesture_mut().reset();
    }
    log::debug!("begin_tracking at {:?}: handled={}", info.current, handled);
    handled
}

/// Continue a live gesture. Stray calls are ignored.
pub fn keep_tracking<R: Reposition + ?Sized>(widget: &mut R, ctx: &Context, info: &TrackingInfo) -> bool {
    if !widget.gesture_mut().is_live() {
        return false;
    }
    widget.reposition(ctx, info.current)
}

/// Finish the gesture. Whatever value is live stays.
pub fn end_tracking<R: Reposition + ?Sized>(widget: &mut R) {
    if widget.gesture_mut().mode() != TrackingMode::None {
        log::debug!("end_tracking");
    }
    widget.gesture_mut().reset();
}
