use elfin_core::{
    Clickable, ColorExt, Context, CursorReactive, CursorTracking, Draggable, Drawable,
    Element, HitTestable, MouseButton, Receiver, ViewLimits,
};
use kurbo::Point;

use super::{ButtonBase, ButtonCore, ButtonFunction};
use crate::sizing;

/// Momentary button over a single subject element.
///
/// The subject is drawn as-is; pressing or hovering adds a translucent
/// indicator overlay on top of it.
pub struct BasicButton {
    subject: Box<dyn Element>,
    core: ButtonCore,
    hilite: bool,
}

impl BasicButton {
    pub fn new(subject: impl Element + 'static) -> Self {
        Self {
            subject: Box::new(subject),
            core: ButtonCore::default(),
            hilite: false,
        }
    }

    /// Set the click callback.
    pub fn on_click(mut self, on_click: impl FnMut(bool) + 'static) -> Self {
        self.core.set_on_click(Box::new(on_click));
        self
    }

    /// Whether the cursor is over the button.
    pub fn is_hilite(&self) -> bool {
        self.hilite
    }

    fn set_hilite(&mut self, ctx: &Context, hilite: bool) {
        if self.hilite != hilite {
            self.hilite = hilite;
            ctx.refresh();
        }
    }
}

impl Drawable for BasicButton {
    fn draw(&self, ctx: &Context) {
        self.subject.draw(ctx);

        let overlay = if self.core.state() {
            sizing::PRESSED_OVERLAY
        } else if self.hilite {
            sizing::HOVER_OVERLAY
        } else {
            return;
        };
        let color = ctx.theme.indicator_color.opacity(overlay);
        ctx.canvas().fill_round_rect(ctx.bounds, sizing::CORNER_RADIUS, color);
    }
}

impl HitTestable for BasicButton {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.subject.hit_test(ctx, p)
    }
}

impl Clickable for BasicButton {
    fn click(&mut self, ctx: &Context, btn: MouseButton) -> bool {
        self.core.click(ctx, btn)
    }
}

impl Draggable for BasicButton {
    fn drag(&mut self, ctx: &Context, btn: MouseButton) {
        self.core.drag(ctx, btn);
        self.set_hilite(ctx, ctx.bounds.contains(btn.pos));
    }
}

impl CursorReactive for BasicButton {
    fn cursor(&mut self, ctx: &Context, _p: Point, status: CursorTracking) -> bool {
        self.set_hilite(ctx, status != CursorTracking::Leaving);
        true
    }
}

impl Receiver<bool> for BasicButton {
    fn value(&self) -> bool {
        self.core.state()
    }

    fn set_value(&mut self, value: bool) {
        self.core.set_state(value);
    }
}

impl ButtonBase for BasicButton {
    fn state(&self) -> bool {
        self.core.state()
    }

    fn set_state(&mut self, state: bool) -> bool {
        self.core.set_state(state)
    }

    fn set_on_click(&mut self, on_click: ButtonFunction) {
        self.core.set_on_click(on_click);
    }

    fn fire(&mut self, value: bool) {
        self.core.fire(value);
    }
}

impl Element for BasicButton {
    fn limits(&self, ctx: &Context) -> ViewLimits {
        self.subject.limits(ctx)
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
        Some(self)
    }

    fn as_bool_receiver(&self) -> Option<&dyn Receiver<bool>> {
        Some(self)
    }

    fn as_bool_receiver_mut(&mut self) -> Option<&mut dyn Receiver<bool>> {
        Some(self)
    }
}
