//! Pickup indicator: a pill-shaped marker (or a pair of them) that slides
//! along a horizontal track and tilts within a small angle.
//!
//! Pressing on a pill moves it, pressing on the round rotator below it
//! tilts it, and double-clicking the rotator resets the tilt. The value is
//! a [`PickupValue`]: a position in `[0, 1]` along the track and a slant in
//! radians within `[-MAX_SLANT, MAX_SLANT]`.
//!
//! Layout, for a container of width `W` and height `H`:
//!
//! - the track is `SCALE_LEN * W` long and centered horizontally,
//! - a pill is `SCALE_LEN * W * HEIGHT_RATIO` tall, capped at
//!   `MAX_HEIGHT_RATIO * H`, and `WIDTH_RATIO` of that wide,
//! - a double pickup is two pills `DOUBLE_GAP` apart, moving together.

use elfin_core::geometry::clamp;
use elfin_core::hit_test::{self, Outline};
use elfin_core::tracking::{self, Gesture, Reposition, TrackingMode};
use std::any::Any;

use elfin_core::{
    AnyReceiver, ColorExt, Context, CursorReactive, CursorTracking, Drawable, Element, HitTestable, Receiver,
    Tracker, TrackingInfo, ViewLimits,
};
use kurbo::{Circle, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Share of the container width used as the track.
pub const SCALE_LEN: f64 = 0.8;
/// Pill height relative to the track length.
pub const HEIGHT_RATIO: f64 = 0.19;
/// Cap on the pill height relative to the container height.
pub const MAX_HEIGHT_RATIO: f64 = 0.8;
/// Pill width relative to its height.
pub const WIDTH_RATIO: f64 = 0.25;
/// Horizontal gap between the two pills of a double pickup.
pub const DOUBLE_GAP: f64 = 4.0;
/// Largest slant, in radians, either way.
pub const MAX_SLANT: f64 = 0.4;
/// Rotator radius relative to the pill width.
pub const ROTATOR_RADIUS_RATIO: f64 = 0.5;
/// Gap between the pills and the rotator.
pub const ROTATOR_GAP: f64 = 4.0;
/// Narrowest width the pickup can be laid out in.
pub const MIN_WIDTH: f64 = 400.0;

/// Glow strokes drawn around each pill, widest first: (width, alpha factor).
const GLOW_STROKES: [(f64, f32); 3] = [(4.0, 0.2), (3.0, 0.4), (2.0, 0.7)];
const OUTLINE_WIDTH: f64 = 1.0;
const ROTATOR_STROKE_WIDTH: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    #[default]
    Single,
    Double,
}

/// Position along the track in `[0, 1]` and slant in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PickupValue {
    pub position: f64,
    pub slant: f64,
}

impl PickupValue {
    pub fn new(position: f64, slant: f64) -> Self {
        Self { position, slant }
    }

    /// Same value with both components brought into range.
    pub fn clamped(self) -> Self {
        Self {
            position: clamp(self.position, 0.0, 1.0),
            slant: clamp(self.slant, -MAX_SLANT, MAX_SLANT),
        }
    }
}

/// Part of the pickup under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupPart {
    Pill,
    Rotator,
}

/// Where the pills and the rotator sit for a given container and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupLayout {
    shapes: [Rect; 2],
    count: usize,
    /// Length the pills travel from position 0 to position 1.
    pub travel: f64,
    pub rotator: Circle,
}

impl PickupLayout {
    /// Unrotated bounds of each pill, left to right.
    pub fn shapes(&self) -> &[Rect] {
        &self.shapes[..self.count]
    }

    /// Unrotated bounds covering all pills.
    pub fn span(&self) -> Rect {
        self.shapes()
            .iter()
            .copied()
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }
}

/// Movable, rotatable pickup indicator.
#[derive(Debug, Clone, Default)]
pub struct Pickup {
    kind: PickupKind,
    value: PickupValue,
    gesture: Gesture,
}

impl Pickup {
    pub fn new(kind: PickupKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn single() -> Self {
        Self::new(PickupKind::Single)
    }

    pub fn double() -> Self {
        Self::new(PickupKind::Double)
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: PickupValue) -> Self {
        self.value = value.clamped();
        self
    }

    pub fn kind(&self) -> PickupKind {
        self.kind
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Lay the pickup out inside `bounds`.
    pub fn layout(&self, bounds: Rect) -> PickupLayout {
        let travel = bounds.width() * SCALE_LEN;
        let height = (travel * HEIGHT_RATIO).min(bounds.height() * MAX_HEIGHT_RATIO);
        let width = height * WIDTH_RATIO;
        let (count, span_width) = match self.kind {
            PickupKind::Single => (1, width),
            PickupKind::Double => (2, width * 2.0 + DOUBLE_GAP),
        };

        let x0 = bounds.x0 + (bounds.width() - (travel + span_width)) / 2.0 + self.value.position * travel;
        let y0 = bounds.y0 + (bounds.height() - height) / 2.0;
        let first = Rect::new(x0, y0, x0 + width, y0 + height);
        let second = first + Vec2::new(width + DOUBLE_GAP, 0.0);

        let radius = width * ROTATOR_RADIUS_RATIO;
        let distance = height / 2.0 + ROTATOR_GAP + radius;
        let (sin, cos) = self.value.slant.sin_cos();
        let span_center = Point::new(x0 + span_width / 2.0, y0 + height / 2.0);
        let rotator = Circle::new(span_center + Vec2::new(-distance * sin, distance * cos), radius);

        PickupLayout {
            shapes: [first, second],
            count,
            travel,
            rotator,
        }
    }

    /// Part of the pickup under `p`, if any.
    pub fn part_at(&self, ctx: &Context, p: Point) -> Option<PickupPart> {
        let layout = self.layout(ctx.bounds);
        if layout
            .shapes()
            .iter()
            .any(|r| hits_pill(ctx, *r, self.value.slant, p))
        {
            return Some(PickupPart::Pill);
        }
        hits_rotator(ctx, layout.rotator, p).then_some(PickupPart::Rotator)
    }
}

fn hits_pill(ctx: &Context, r: Rect, slant: f64, p: Point) -> bool {
    hit_test::hit_test(&mut *ctx.canvas(), r, slant, Outline::pill(r), p)
}

fn rotator_bounds(rotator: Circle) -> Rect {
    Rect::from_center_size(rotator.center, Size::new(rotator.radius * 2.0, rotator.radius * 2.0))
}

fn hits_rotator(ctx: &Context, rotator: Circle, p: Point) -> bool {
    hit_test::hit_test(&mut *ctx.canvas(), rotator_bounds(rotator), 0.0, Outline::Circle, p)
}

/// Draw a set of pills that highlight together: if the cursor is over any
/// of them, all of them are drawn highlighted. Returns the highlight state.
pub(crate) fn draw_pills(ctx: &Context, shapes: &[Rect], slant: f64) -> bool {
    let cursor = ctx.cursor_pos();
    let hilite = shapes.iter().any(|r| hits_pill(ctx, *r, slant, cursor));
    for r in shapes {
        draw_pill(ctx, *r, slant, hilite);
    }
    hilite
}

fn draw_pill(ctx: &Context, r: Rect, slant: f64, hilite: bool) {
    let theme = ctx.theme;
    let (outline_color, glow_color) = if hilite {
        (
            theme.frame_color.opacity(1.0).level(0.8),
            theme.indicator_color.opacity(1.0).level(1.5),
        )
    } else {
        (theme.frame_color, theme.indicator_color)
    };
    let outline = Outline::pill(r);

    hit_test::with_frame(&mut *ctx.canvas(), r, slant, |canvas, local| {
        hit_test::outline_path(canvas, outline, local);
        canvas.fill(theme.controls_color);
        let alpha = glow_color.alpha();
        for (width, strength) in GLOW_STROKES {
            canvas.stroke(glow_color.opacity(alpha * strength), width);
        }
        canvas.stroke(outline_color, OUTLINE_WIDTH);
    });
}

fn draw_rotator(ctx: &Context, rotator: Circle) {
    if rotator.radius <= 0.0 {
        return;
    }
    let hot = hits_rotator(ctx, rotator, ctx.cursor_pos());
    let color = if hot {
        ctx.theme.indicator_color
    } else {
        ctx.theme.frame_color
    };
    let mut canvas = ctx.canvas();
    canvas.begin_path();
    canvas.add_circle(rotator);
    canvas.fill(ctx.theme.controls_color);
    canvas.stroke(color, ROTATOR_STROKE_WIDTH);
}

impl Drawable for Pickup {
    fn draw(&self, ctx: &Context) {
        let layout = self.layout(ctx.bounds);
        draw_pills(ctx, layout.shapes(), self.value.slant);
        draw_rotator(ctx, layout.rotator);
    }
}

impl HitTestable for Pickup {
    fn hit_test(&self, ctx: &Context, p: Point) -> bool {
        self.part_at(ctx, p).is_some()
    }
}

impl Reposition for Pickup {
    fn gesture_mut(&mut self) -> &mut Gesture {
        &mut self.gesture
    }

    fn reposition(&mut self, ctx: &Context, p: Point) -> bool {
        let layout = self.layout(ctx.bounds);
        let span = layout.span();

        if self.gesture.mode() == TrackingMode::Start {
            match self.part_at(ctx, p) {
                Some(PickupPart::Pill) => self.gesture.capture(TrackingMode::Moving, p, span.origin()),
                Some(PickupPart::Rotator) => {
                    self.gesture
                        .capture(TrackingMode::Rotating, p, layout.rotator.center)
                }
                None => return false,
            }
        }

        match self.gesture.mode() {
            TrackingMode::Moving => {
                if layout.travel <= 0.0 {
                    return false;
                }
                let margin = (ctx.bounds.width() - (layout.travel + span.width())) / 2.0;
                let x = p.x - self.gesture.offset().x - ctx.bounds.x0 - margin;
                self.value.position = clamp(x / layout.travel, 0.0, 1.0);
            }
            TrackingMode::Rotating => {
                let grip = p - self.gesture.offset();
                let d = grip - span.center();
                self.value.slant = clamp(-d.x.atan2(d.y), -MAX_SLANT, MAX_SLANT);
            }
            TrackingMode::None | TrackingMode::Start => return false,
        }
        log::trace!("pickup value {:?}", self.value);
        ctx.refresh();
        true
    }
}

impl Tracker for Pickup {
    fn begin_tracking(&mut self, ctx: &Context, info: &mut TrackingInfo) {
        if !tracking::begin_tracking(self, ctx, info) {
            return;
        }
        if self.gesture.mode() == TrackingMode::Rotating && info.num_clicks == 2 {
            log::debug!("pickup slant reset");
            self.value.slant = 0.0;
            self.gesture.reset();
            ctx.refresh();
        }
    }

    fn keep_tracking(&mut self, ctx: &Context, info: &mut TrackingInfo) {
        tracking::keep_tracking(self, ctx, info);
    }

    fn end_tracking(&mut self, _ctx: &Context, _info: &mut TrackingInfo) {
        tracking::end_tracking(self);
    }
}

impl CursorReactive for Pickup {
    fn cursor(&mut self, ctx: &Context, _p: Point, _status: CursorTracking) -> bool {
        ctx.refresh();
        true
    }
}

impl Receiver<PickupValue> for Pickup {
    fn value(&self) -> PickupValue {
        self.value
    }

    fn set_value(&mut self, value: PickupValue) {
        self.value = value.clamped();
    }
}

impl AnyReceiver for Pickup {
    fn value_any(&self) -> Box<dyn Any> {
        Box::new(self.value)
    }

    fn set_value_any(&mut self, value: &dyn Any) -> bool {
        let Some(value) = value.downcast_ref::<PickupValue>() else {
            return false;
        };
        self.set_value(*value);
        true
    }
}

impl Element for Pickup {
    fn limits(&self, _ctx: &Context) -> ViewLimits {
        ViewLimits::at_least(Size::new(MIN_WIDTH, 0.0))
    }

    fn wants_control(&self) -> bool {
        true
    }

    fn as_cursor_reactive(&mut self) -> Option<&mut dyn CursorReactive> {
        Some(self)
    }

    fn as_tracker(&mut self) -> Option<&mut dyn Tracker> {
        Some(self)
    }

    fn as_any_receiver(&self) -> Option<&dyn AnyReceiver> {
        Some(self)
    }

    fn as_any_receiver_mut(&mut self) -> Option<&mut dyn AnyReceiver> {
        Some(self)
    }
}
