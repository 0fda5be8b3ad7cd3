//! Button family: momentary basic and layered buttons, plus toggle and
//! latching behavior layered on top of either.
//!
//! A button reports clicks through an optional callback. Momentary buttons
//! are on while pressed and fire `true` when released inside their bounds.
//! [`ToggleButton`] and [`LatchingButton`] wrap any [`ButtonBase`] and
//! replace the press/release policy while keeping its look.

mod basic;
mod latching;
mod layered;
mod toggle;

pub use basic::BasicButton;
pub use latching::LatchingButton;
pub use layered::LayeredButton;
pub use toggle::ToggleButton;

use elfin_core::{Context, Element, MouseButton};

/// Click callback. Receives the button value the click settled on.
pub type ButtonFunction = Box<dyn FnMut(bool)>;

/// Whether a button owns the current press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonTracking {
    #[default]
    None,
    Capturing,
}

/// The parts of a button that press policies build on.
pub trait ButtonBase: Element {
    fn state(&self) -> bool;

    /// Returns true if the state changed.
    fn set_state(&mut self, state: bool) -> bool;

    fn set_on_click(&mut self, on_click: ButtonFunction);

    /// Invoke the click callback, if any.
    fn fire(&mut self, value: bool);
}

/// State, press tracking and callback shared by the momentary buttons.
#[derive(Default)]
pub(crate) struct ButtonCore {
    state: bool,
    tracking: ButtonTracking,
    on_click: Option<ButtonFunction>,
}

impl ButtonCore {
    pub(crate) fn state(&self) -> bool {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: bool) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        true
    }

    pub(crate) fn set_on_click(&mut self, on_click: ButtonFunction) {
        self.on_click = Some(on_click);
    }

    pub(crate) fn fire(&mut self, value: bool) {
        if let Some(on_click) = self.on_click.as_mut() {
            on_click(value);
        }
    }

    /// Momentary press: on while held, fires on a release inside.
    pub(crate) fn click(&mut self, ctx: &Context, btn: MouseButton) -> bool {
        let inside = ctx.bounds.contains(btn.pos);
        if btn.down {
            if !inside {
                return false;
            }
            self.tracking = ButtonTracking::Capturing;
            if self.set_state(true) {
                ctx.refresh();
            }
            return true;
        }

        if self.tracking != ButtonTracking::Capturing {
            return false;
        }
        self.tracking = ButtonTracking::None;
        if self.set_state(false) {
            ctx.refresh();
        }
        if inside {
            log::debug!("momentary button clicked at {:?}", btn.pos);
            self.fire(true);
        }
        true
    }

    /// Momentary drag: on only while the pointer stays inside.
    pub(crate) fn drag(&mut self, ctx: &Context, btn: MouseButton) {
        if self.tracking != ButtonTracking::Capturing {
            return;
        }
        if self.set_state(ctx.bounds.contains(btn.pos)) {
            ctx.refresh();
        }
    }
}
