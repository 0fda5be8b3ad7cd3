//! Interactive widgets built on `elfin-core`.
//!
//! This crate provides the stock widgets of the toolkit:
//!
//! - **Faces**: rounded boxes used as button faces
//! - **Buttons**: momentary, layered, toggle and latching buttons
//! - **Pickup**: a movable, rotatable pickup indicator (single or double)
//! - **Groups**: exclusive groups that keep at most one latched button on

pub mod buttons;
pub mod face;
pub mod group;
pub mod pickup;

#[cfg(test)]
mod testing;

pub use buttons::{
    BasicButton, ButtonBase, ButtonFunction, ButtonTracking, LatchingButton, LayeredButton,
    ToggleButton,
};
pub use face::RoundBox;
pub use group::ExclusiveGroup;
pub use pickup::{Pickup, PickupKind, PickupLayout, PickupPart, PickupValue};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Standard corner radius for button faces
    pub const CORNER_RADIUS: f64 = 4.0;
    /// Opacity of the indicator overlay on a pressed basic button
    pub const PRESSED_OVERLAY: f32 = 0.35;
    /// Opacity of the indicator overlay on a hovered basic button
    pub const HOVER_OVERLAY: f32 = 0.15;
}
