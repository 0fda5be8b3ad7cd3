//! Pointer input types delivered by the view to widgets.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Which physical mouse button an event refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    #[default]
    Left,
    Middle,
    Right,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A mouse button press or release, or a held button while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseButton {
    /// True while the button is held down.
    pub down: bool,
    /// Click count of the current press (2 for a double click).
    pub num_clicks: u32,
    pub kind: ButtonKind,
    pub modifiers: Modifiers,
    /// Pointer position in the widget's coordinate space.
    pub pos: Point,
}

impl MouseButton {
    /// A left-button press at `pos`.
    pub fn down(pos: Point) -> Self {
        Self {
            down: true,
            num_clicks: 1,
            kind: ButtonKind::Left,
            modifiers: Modifiers::default(),
            pos,
        }
    }

    /// A left-button release at `pos`.
    pub fn up(pos: Point) -> Self {
        Self {
            down: false,
            ..Self::down(pos)
        }
    }

    /// Set the click count.
    pub fn with_clicks(mut self, num_clicks: u32) -> Self {
        self.num_clicks = num_clicks;
        self
    }

    /// Set the modifier keys.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Cursor movement relative to an element, for hover reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorTracking {
    Entering,
    Hovering,
    Leaving,
}

/// Per-gesture pointer information handed to trackers.
///
/// Owned by the view for the duration of one gesture and passed by
/// reference into each tracking call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackingInfo {
    /// Where the gesture started.
    pub start: Point,
    /// Pointer position at the previous tracking call.
    pub previous: Point,
    /// Current pointer position.
    pub current: Point,
    pub modifiers: Modifiers,
    /// Click count of the press that started the gesture.
    pub num_clicks: u32,
}

impl TrackingInfo {
    /// Start a new gesture at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            start,
            previous: start,
            current: start,
            modifiers: Modifiers::default(),
            num_clicks: 1,
        }
    }

    /// Create from the press that starts the gesture.
    pub fn from_button(btn: &MouseButton) -> Self {
        Self {
            modifiers: btn.modifiers,
            num_clicks: btn.num_clicks,
            ..Self::new(btn.pos)
        }
    }

    /// Record a new pointer position.
    pub fn advance(&mut self, current: Point) {
        self.previous = self.current;
        self.current = current;
    }

    /// Total movement since the gesture started.
    pub fn delta(&self) -> Vec2 {
        self.current - self.start
    }

    /// Movement since the previous tracking call.
    pub fn movement(&self) -> Vec2 {
        self.current - self.previous
    }
}

/// Pointer event produced by the host event loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: ButtonKind,
        num_clicks: u32,
    },
    Up {
        position: Point,
        button: ButtonKind,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_builders() {
        let btn = MouseButton::down(Point::new(10.0, 20.0)).with_clicks(2);
        assert!(btn.down);
        assert_eq!(btn.num_clicks, 2);
        assert_eq!(btn.kind, ButtonKind::Left);

        let up = MouseButton::up(Point::new(1.0, 2.0));
        assert!(!up.down);
        assert_eq!(up.pos, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_tracking_deltas() {
        let mut info = TrackingInfo::new(Point::new(100.0, 100.0));
        info.advance(Point::new(110.0, 105.0));
        info.advance(Point::new(150.0, 120.0));

        let delta = info.delta();
        assert!((delta.x - 50.0).abs() < f64::EPSILON);
        assert!((delta.y - 20.0).abs() < f64::EPSILON);

        let movement = info.movement();
        assert!((movement.x - 40.0).abs() < f64::EPSILON);
        assert!((movement.y - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tracking_from_button() {
        let btn = MouseButton::down(Point::new(5.0, 5.0)).with_clicks(2);
        let info = TrackingInfo::from_button(&btn);
        assert_eq!(info.start, Point::new(5.0, 5.0));
        assert_eq!(info.num_clicks, 2);
    }

    #[test]
    fn test_event_position() {
        let event = PointerEvent::Move {
            position: Point::new(3.0, 4.0),
        };
        assert_eq!(event.position(), Point::new(3.0, 4.0));
    }
}
