//! Capability traits implemented by widgets.
//!
//! Each capability is its own trait, and a widget implements only the ones
//! it needs. Containers hold children as `Box<dyn Element>` (drawable and
//! hit-testable) and ask for richer capabilities through the `as_*`
//! accessors, which return `None` unless the concrete widget opts in.

use std::any::Any;

use kurbo::Point;

use crate::context::Context;
use crate::geometry::ViewLimits;
use crate::input::{CursorTracking, MouseButton, TrackingInfo};

/// Something that can paint itself into `ctx.bounds`.
pub trait Drawable {
    fn draw(&self, ctx: &Context);
}

/// Something that can decide whether a point lies on it.
pub trait HitTestable {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool;
}

/// Reacts to button presses and releases.
pub trait Clickable {
    /// Returns true if the click was handled.
    fn click(&mut self, ctx: &Context, btn: MouseButton) -> bool;
}

/// Reacts to pointer motion while a button is held.
pub trait Draggable {
    fn drag(&mut self, ctx: &Context, btn: MouseButton);
}

/// Reacts to the cursor moving over it with no button held.
pub trait CursorReactive {
    /// Returns true if the element wants to keep receiving cursor events.
    fn cursor(&mut self, ctx: &Context, p: Point, status: CursorTracking) -> bool;
}

/// Participates in the begin/keep/end tracking protocol.
///
/// The view calls `begin_tracking` once on press, `keep_tracking` for
/// every move and `end_tracking` on release, all for the same element.
pub trait Tracker {
    fn begin_tracking(&mut self, ctx: &Context, info: &mut TrackingInfo);
    fn keep_tracking(&mut self, ctx: &Context, info: &mut TrackingInfo);
    fn end_tracking(&mut self, ctx: &Context, info: &mut TrackingInfo);
}

/// Typed value exposed by a widget.
pub trait Receiver<T> {
    fn value(&self) -> T;
    fn set_value(&mut self, value: T);
}

/// Type-erased [`Receiver`], queried by callers that name the value type
/// at the call site rather than the widget type.
pub trait AnyReceiver {
    fn value_any(&self) -> Box<dyn Any>;

    /// Returns false, leaving the value alone, if `value` has the wrong type.
    fn set_value_any(&mut self, value: &dyn Any) -> bool;
}

/// The `T` value exposed by `element`, if it exposes one of that type.
pub fn value_of<T: 'static>(element: &dyn Element) -> Option<T> {
    let value = element.as_any_receiver()?.value_any();
    value.downcast::<T>().ok().map(|v| *v)
}

/// A widget: drawable and hit-testable, with optional capabilities.
pub trait Element: Drawable + HitTestable {
    fn limits(&self, _ctx: &Context) -> ViewLimits {
        ViewLimits::FULL
    }

    /// Whether the element takes pointer control (clicks, drags).
    fn wants_control(&self) -> bool {
        false
    }

    fn as_clickable(&mut self) -> Option<&mut dyn Clickable> {
        None
    }

    fn as_draggable(&mut self) -> Option<&mut dyn Draggable> {
        None
    }

    fn as_cursor_reactive(&mut self) -> Option<&mut dyn CursorReactive> {
        None
    }

    fn as_tracker(&mut self) -> Option<&mut dyn Tracker> {
        None
    }

    fn as_bool_receiver(&self) -> Option<&dyn Receiver<bool>> {
        None
    }

    fn as_bool_receiver_mut(&mut self) -> Option<&mut dyn Receiver<bool>> {
        None
    }

    fn as_any_receiver(&self) -> Option<&dyn AnyReceiver> {
        None
    }

    fn as_any_receiver_mut(&mut self) -> Option<&mut dyn AnyReceiver> {
        None
    }
}
