use elfin_core::{
    Clickable, Context, CursorReactive, Draggable, Drawable, Element, HitTestable, MouseButton,
    Receiver, ViewLimits,
};
use kurbo::Point;

use super::{ButtonBase, ButtonTracking, LayeredButton};

/// Button that stays on after a completed click.
///
/// While off it behaves like a momentary button. A release inside latches
/// it on and fires `true`; a release outside turns it back off without
/// firing. While latched it ignores presses until something resets its
/// value, typically an [`ExclusiveGroup`](crate::ExclusiveGroup).
pub struct LatchingButton<B: ButtonBase = LayeredButton> {
    base: B,
    tracking: ButtonTracking,
}

impl<B: ButtonBase> LatchingButton<B> {
    pub fn new(base: B) -> Self {
        Self {
            base,
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

impl LatchingButton<LayeredButton> {
    /// Latching button over a layered button with the given faces.
    pub fn layered(off: impl Element + 'static, on: impl Element + 'static) -> Self {
        Self::new(LayeredButton::new(off, on))
    }
}

impl<B: ButtonBase> Drawable for LatchingButton<B> {
    fn draw(&self, ctx: &Context) {
        self.base.draw(ctx);
    }
}

impl<B: ButtonBase> HitTestable for LatchingButton<B> {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.base.hit_test(ctx, p)
    }
}

impl<B: ButtonBase> Clickable for LatchingButton<B> {
    fn click(&mut self, ctx: &Context, btn: MouseButton) -> bool {
        let inside = ctx.bounds.contains(btn.pos);
        if btn.down {
            if self.base.state() || !inside {
                return false;
            }
            self.tracking = ButtonTracking::Capturing;
            self.show(ctx, true);
            return true;
        }

        if self.tracking != ButtonTracking::Capturing {
            return false;
        }
        self.tracking = ButtonTracking::None;
        if !inside {
            self.show(ctx, false);
            return false;
        }
        self.show(ctx, true);
        log::debug!("latching button latched at {:?}", btn.pos);
        self.base.fire(true);
        true
    }
}

impl<B: ButtonBase> Draggable for LatchingButton<B> {
    fn drag(&mut self, ctx: &Context, btn: MouseButton) {
        if self.tracking != ButtonTracking::Capturing {
            return;
        }
        self.show(ctx, ctx.bounds.contains(btn.pos));
    }
}

impl<B: ButtonBase> Receiver<bool> for LatchingButton<B> {
    fn value(&self) -> bool {
        self.base.state()
    }

    fn set_value(&mut self, value: bool) {
        self.base.set_state(value);
    }
}

impl<B: ButtonBase> Element for LatchingButton<B> {
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
