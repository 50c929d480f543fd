pub mod canvas;
pub mod color;
pub mod die_view;
pub mod error;
pub mod renderer;
pub mod surface;

pub use canvas::{Canvas, Shape, ShapeKind};
pub use color::Color;
pub use die_view::DieView;
pub use error::{DieViewError, ParseColorError};
pub use renderer::CanvasRenderer;
pub use surface::{Point, ShapeId, Surface};
