//! Display-list canvas backend built purely on kurbo paths.
//!
//! Paths are mapped to device space as they are built, so a recorded fill
//! and a hit test against the current path operate on identical geometry.
//! Used as the canvas for headless sessions and tests.

use kurbo::{Affine, BezPath, Circle, Point, Rect, RoundedRect, Shape, Vec2};
use peniko::Color;

use crate::canvas::Canvas;

/// Flattening tolerance used when converting shapes to paths.
pub const PATH_TOLERANCE: f64 = 0.01;

/// A recorded drawing operation, in device coordinates.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Fill { path: BezPath, color: Color },
    Stroke { path: BezPath, color: Color, width: f64 },
}

impl DrawCommand {
    pub fn path(&self) -> &BezPath {
        match self {
            DrawCommand::Fill { path, .. } | DrawCommand::Stroke { path, .. } => path,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Fill { color, .. } | DrawCommand::Stroke { color, .. } => *color,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, DrawCommand::Fill { .. })
    }
}

/// Canvas that records draw commands instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    transform: Affine,
    stack: Vec<Affine>,
    path: BezPath,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            path: BezPath::new(),
            commands: Vec::new(),
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of saved states not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The current path in device coordinates.
    pub fn current_path(&self) -> &BezPath {
        &self.path
    }

    fn append(&mut self, mut path: BezPath) {
        path.apply_affine(self.transform);
        self.path.extend(path.iter());
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(transform) => self.transform = transform,
            None => log::warn!("Canvas restore without matching save"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine::translate(offset);
    }

    fn rotate(&mut self, angle: f64) {
        self.transform = self.transform * Affine::rotate(angle);
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
    }

    fn add_rect(&mut self, rect: Rect) {
        self.append(rect.to_path(PATH_TOLERANCE));
    }

    fn add_round_rect(&mut self, rect: Rect, radius: f64) {
        let radius = radius.max(0.0).min(rect.width().min(rect.height()) / 2.0);
        self.append(RoundedRect::from_rect(rect, radius).to_path(PATH_TOLERANCE));
    }

    fn add_circle(&mut self, circle: Circle) {
        self.append(circle.to_path(PATH_TOLERANCE));
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: self.path.clone(),
            color,
        });
    }

    fn stroke(&mut self, color: Color, width: f64) {
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            color,
            width,
        });
    }

    fn hit_test(&self, device_point: Point) -> bool {
        self.path.contains(device_point)
    }
}
