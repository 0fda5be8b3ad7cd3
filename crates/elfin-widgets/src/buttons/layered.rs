use elfin_core::{
    Clickable, Context, Deck, Draggable, Drawable, Element, HitTestable, MouseButton, Receiver,
    ViewLimits,
};
use kurbo::Point;

use super::{ButtonBase, ButtonCore, ButtonFunction};

/// Momentary button with one face per state. The value selects which face
/// is drawn and hit-tested: off is layer 0, on is layer 1.
pub struct LayeredButton {
    layers: Deck<2>,
    core: ButtonCore,
}

impl LayeredButton {
    pub fn new(off: impl Element + 'static, on: impl Element + 'static) -> Self {
        let layers: [Box<dyn Element>; 2] = [Box::new(off), Box::new(on)];
        Self {
            layers: Deck::new(layers),
            core: ButtonCore::default(),
        }
    }

    /// Set the click callback.
    pub fn on_click(mut self, on_click: impl FnMut(bool) + 'static) -> Self {
        self.core.set_on_click(Box::new(on_click));
        self
    }

    /// Index of the visible layer.
    pub fn layer(&self) -> usize {
        self.layers.selected()
    }

    fn sync_layer(&mut self) {
        self.layers.select(usize::from(self.core.state()));
    }
}

impl Drawable for LayeredButton {
    fn draw(&self, ctx: &Context) {
        self.layers.draw(ctx);
    }
}

impl HitTestable for LayeredButton {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.layers.hit_test(ctx, p)
    }
}

impl Clickable for LayeredButton {
    fn click(&mut self, ctx: &Context, btn: MouseButton) -> bool {
        let handled = self.core.click(ctx, btn);
        self.sync_layer();
        handled
    }
}

impl Draggable for LayeredButton {
    fn drag(&mut self, ctx: &Context, btn: MouseButton) {
        self.core.drag(ctx, btn);
        self.sync_layer();
    }
}

impl Receiver<bool> for LayeredButton {
    fn value(&self) -> bool {
        self.core.state()
    }

    fn set_value(&mut self, value: bool) {
        self.set_state(value);
    }
}

impl ButtonBase for LayeredButton {
    fn state(&self) -> bool {
        self.core.state()
    }

    fn set_state(&mut self, state: bool) -> bool {
        let changed = self.core.set_state(state);
        self.sync_layer();
        changed
    }

    fn set_on_click(&mut self, on_click: ButtonFunction) {
        self.core.set_on_click(on_click);
    }

    fn fire(&mut self, value: bool) {
        self.core.fire(value);
    }
}

impl Element for LayeredButton {
    fn limits(&self, ctx: &Context) -> ViewLimits {
        self.layers.limits(ctx)
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

    fn as_bool_receiver(&self) -> Option<&dyn Receiver<bool>> {
        Some(self)
    }

    fn as_bool_receiver_mut(&mut self) -> Option<&mut dyn Receiver<bool>> {
        Some(self)
    }
}
