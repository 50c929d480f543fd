use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Handle to a shape that has already been drawn on a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub(crate) usize);

/// Something shapes can be drawn on and recolored afterwards.
pub trait Surface {
    fn draw_rectangle(&mut self, p1: Point, p2: Point, fill: Color) -> ShapeId;

    fn draw_circle(&mut self, center: Point, radius: f32, fill: Color, outline: Color) -> ShapeId;

    fn set_fill(&mut self, shape: ShapeId, color: Color);

    fn set_outline(&mut self, shape: ShapeId, color: Color);
}
