use log::warn;

use crate::color::Color;
use crate::surface::{Point, ShapeId, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rectangle { p1: Point, p2: Point },
    Circle { center: Point, radius: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub fill: Color,
    pub outline: Color,
}

impl Shape {
    const OUTLINE_WIDTH: f32 = 1.0;

    /// Color this shape paints at `point`, if it covers it.
    pub fn color_at(&self, point: Point) -> Option<Color> {
        // Distance from the point to the nearest edge, measured inwards.
        let depth = match self.kind {
            ShapeKind::Rectangle { p1, p2 } => {
                let (left, right) = (p1.x.min(p2.x), p1.x.max(p2.x));
                let (top, bottom) = (p1.y.min(p2.y), p1.y.max(p2.y));
                (point.x - left)
                    .min(right - point.x)
                    .min(point.y - top)
                    .min(bottom - point.y)
            }
            ShapeKind::Circle { center, radius } => radius - point.distance(center),
        };

        if depth < 0.0 {
            None
        } else if depth < Self::OUTLINE_WIDTH {
            Some(self.outline)
        } else {
            Some(self.fill)
        }
    }
}

/// Retained-mode drawing surface. Shapes are kept in draw order and painted
/// over the background by [`crate::CanvasRenderer`].
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color,
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color::GRAY,
            shapes: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    fn push(&mut self, shape: Shape) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        let shape = self.shapes.get_mut(id.0);
        if shape.is_none() {
            warn!("ignoring update to unknown shape {:?}", id);
        }
        shape
    }
}

impl Surface for Canvas {
    fn draw_rectangle(&mut self, p1: Point, p2: Point, fill: Color) -> ShapeId {
        self.push(Shape {
            kind: ShapeKind::Rectangle { p1, p2 },
            fill,
            outline: Color::BLACK,
        })
    }

    fn draw_circle(&mut self, center: Point, radius: f32, fill: Color, outline: Color) -> ShapeId {
        self.push(Shape {
            kind: ShapeKind::Circle { center, radius },
            fill,
            outline,
        })
    }

    fn set_fill(&mut self, shape: ShapeId, color: Color) {
        if let Some(shape) = self.shape_mut(shape) {
            shape.fill = color;
        }
    }

    fn set_outline(&mut self, shape: ShapeId, color: Color) {
        if let Some(shape) = self.shape_mut(shape) {
            shape.outline = color;
        }
    }
}
