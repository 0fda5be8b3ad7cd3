//! Elfin Core Library
//!
//! Backend-independent interaction core for retained-mode widgets:
//! geometry helpers, the capability traits widgets implement, path-based
//! hit testing under rotation, the begin/keep/end tracking protocol, and a
//! headless surface that routes pointer events to widgets.

pub mod canvas;
pub mod composite;
pub mod context;
pub mod element;
pub mod geometry;
pub mod hit_test;
pub mod input;
pub mod recording;
pub mod surface;
pub mod theme;
pub mod tracking;
pub mod view;

pub use canvas::{Canvas, CanvasState};
pub use composite::{Deck, Layer};
pub use context::Context;
pub use element::{
    AnyReceiver, Clickable, CursorReactive, Draggable, Drawable, Element, HitTestable, Receiver, Tracker,
    value_of,
};
pub use geometry::{FULL_EXTENT, ViewLimits};
pub use hit_test::Outline;
pub use input::{ButtonKind, CursorTracking, Modifiers, MouseButton, PointerEvent, TrackingInfo};
pub use recording::{DrawCommand, RecordingCanvas};
pub use surface::Surface;
pub use theme::{ColorExt, SerializableColor, Theme, ThemeConfig, ThemeError, ThemeResult};
pub use tracking::{Gesture, Reposition, TrackingMode};
pub use view::{HeadlessView, View};
