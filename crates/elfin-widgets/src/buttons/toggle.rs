use elfin_core::{
    Clickable, Context, CursorReactive, Draggable, Drawable, Element, HitTestable, MouseButton,
    Receiver, ViewLimits,
};
use kurbo::Point;

use super::{ButtonBase, ButtonTracking, LayeredButton};

/// Button that flips its value on every completed click.
///
/// Pressing shows the flipped value right away. Dragging out of the bounds
/// shows the original value again and dragging back shows the flipped one.
/// The release commits whatever is shown: released inside, the value stays
/// flipped; released outside, the click is cancelled. Either way the
/// callback receives the final value.
pub struct ToggleButton<B: ButtonBase = LayeredButton> {
    base: B,
    /// Flipped value captured at press time.
    current_state: bool,
    tracking: ButtonTracking,
}

impl<B: ButtonBase> ToggleButton<B> {
    pub fn new(base: B) -> Self {
        Self {
            base,
            current_state: false,
            tracking: ButtonTracking::None,
        }
    }

    /// Set the click callback.
    pub fn on_click(mut self, on_click: impl FnMut(bool) + 'static) -> Self {
        self.base.set_on_click(Box::new(on_click));
        self
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    fn show(&mut self, ctx: &Context, state: bool) {
        if self.base.set_state(state) {
            ctx.refresh();
        }
    }
}

impl ToggleButton<LayeredButton> {
    /// Toggle over a layered button with the given off and on faces.
    pub fn layered(off: impl Element + 'static, on: impl Element + 'static) -> Self {
        Self::new(LayeredButton::new(off, on))
    }
}

impl<B: ButtonBase> Drawable for ToggleButton<B> {
    fn draw(&self, ctx: &Context) {
        self.base.draw(ctx);
    }
}

impl<B: ButtonBase> HitTestable for ToggleButton<B> {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.base.hit_test(ctx, p)
    }
}

impl<B: ButtonBase> Clickable for ToggleButton<B> {
    fn click(&mut self, ctx: &Context, btn: MouseButton) -> bool {
        let inside = ctx.bounds.contains(btn.pos);
        if btn.down {
            if !inside {
                return false;
            }
            self.current_state = !self.base.state();
            self.tracking = ButtonTracking::Capturing;
            self.show(ctx, self.current_state);
            return true;
        }

        if self.tracking != ButtonTracking::Capturing {
            return false;
        }
        self.tracking = ButtonTracking::None;
        let value = !self.current_state ^ inside;
        self.show(ctx, value);
        log::debug!("toggle released at {:?}: value={}", btn.pos, value);
        self.base.fire(value);
        true
    }
}

impl<B: ButtonBase> Draggable for ToggleButton<B> {
    fn drag(&mut self, ctx: &Context, btn: MouseButton) {
        if self.tracking != ButtonTracking::Capturing {
            return;
        }
        let shown = !self.current_state ^ ctx.bounds.contains(btn.pos);
        self.show(ctx, shown);
    }
}

impl<B: ButtonBase> Receiver<bool> for ToggleButton<B> {
    fn value(&self) -> bool {
        self.base.state()
    }

    fn set_value(&mut self, value: bool) {
        self.base.set_state(value);
    }
}

impl<B: ButtonBase> Element for ToggleButton<B> {
    fn limits(&self, ctx: &Context) -> ViewLimits {
        self.base.limits(ctx)
    }

    fn wants_control(&self) -> bool {
        true
    }

    fn as_clickable(&mut self) -> Option<&mut dyn Clickable> {
        Some(self)
    }

    fn as_draggable(&mut self) -> Option<&mut dyn Draggable> {
        Some(self)
    }

    fn as_cursor_reactive(&mut self) -> Option<&mut dyn CursorReactive> {
        self.base.as_cursor_reactive()
    }

    fn as_bool_receiver(&self) -> Option<&dyn Receiver<bool>> {
        Some(self)
    }

    fn as_bool_receiver_mut(&mut self) -> Option<&mut dyn Receiver<bool>> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::BasicButton;
    use crate::face::RoundBox;
    use crate::testing::{Harness, click_log};
    use elfin_core::CursorTracking;
    use kurbo::Rect;
    use peniko::Color;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    const INSIDE: Point = Point::new(50.0, 20.0);
    const OUTSIDE: Point = Point::new(150.0, 20.0);

    fn toggle() -> ToggleButton {
        ToggleButton::layered(RoundBox::new(Color::BLACK), RoundBox::new(Color::WHITE))
    }

    #[test]
    fn test_click_inside_commits_flip() {
        let h = Harness::new();
        let ctx = h.ctx(BOUNDS);
        let (fired, on_click) = click_log();
        let mut button = toggle().on_click(on_click);

        assert!(button.click(&ctx, MouseButton::down(INSIDE)));
        assert!(button.value());
        assert!(button.click(&ctx, MouseButton::up(INSIDE)));
        assert!(button.value());
        assert_eq!(*fired.borrow(), vec![true]);

        button.click(&ctx, MouseButton::down(INSIDE));
        assert!(!button.value());
        button.click(&ctx, MouseButton::up(INSIDE));
        assert!(!button.value());
        assert_eq!(*fired.borrow(), vec![true, false]);
    }

    #[test]
    fn test_release_outside_cancels() {
        let h = Harness::new();
        let ctx = h.ctx(BOUNDS);
        let (fired, on_click) = click_log();
        let mut button = toggle().on_click(on_click);
        button.set_value(true);

        button.click(&ctx, MouseButton::down(INSIDE));
        assert!(!button.value());
        button.drag(&ctx, MouseButton::down(OUTSIDE));
        assert!(button.value());
        button.click(&ctx, MouseButton::up(OUTSIDE));

        assert!(button.value());
        assert_eq!(*fired.borrow(), vec![true]);
    }

    #[test]
    fn test_drag_out_and_back_fires_once() {
        let h = Harness::new();
        let ctx = h.ctx(BOUNDS);
        let (fired, on_click) = click_log();
        let mut button = toggle().on_click(on_click);

        button.click(&ctx, MouseButton::down(INSIDE));
        button.drag(&ctx, MouseButton::down(OUTSIDE));
        assert!(!button.value());
        assert_eq!(button.base().layer(), 0);
        button.drag(&ctx, MouseButton::down(INSIDE));
        assert!(button.value());
        assert_eq!(button.base().layer(), 1);
        button.click(&ctx, MouseButton::up(INSIDE));

        assert!(button.value());
        assert_eq!(*fired.borrow(), vec![true]);
    }

    #[test]
    fn test_stray_events_ignored() {
        let h = Harness::new();
        let ctx = h.ctx(BOUNDS);
        let (fired, on_click) = click_log();
        let mut button = toggle().on_click(on_click);

        assert!(!button.click(&ctx, MouseButton::down(OUTSIDE)));
        button.drag(&ctx, MouseButton::down(INSIDE));
        assert!(!button.click(&ctx, MouseButton::up(INSIDE)));
        assert!(!button.value());
        assert!(fired.borrow().is_empty());
        assert_eq!(h.view.refresh_count(), 0);
    }

    #[test]
    fn test_basic_base_keeps_hover() {
        let h = Harness::new();
        let ctx = h.ctx(BOUNDS);
        let mut button = ToggleButton::new(BasicButton::new(RoundBox::new(Color::WHITE)));

        let reactive = button.as_cursor_reactive();
        assert!(reactive.is_some_and(|r| r.cursor(&ctx, INSIDE, CursorTracking::Entering)));
        assert!(button.base().is_hilite());

        button.click(&ctx, MouseButton::down(INSIDE));
        button.click(&ctx, MouseButton::up(INSIDE));
        assert!(button.value());
    }
}
