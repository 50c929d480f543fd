use crate::canvas::Canvas;
use crate::surface::Point;

pub struct CanvasRenderer;

impl CanvasRenderer {
    /// Rasterizes `canvas` into an RGBA8 frame of `width * height` pixels,
    /// painting shapes in draw order over the canvas background.
    pub fn draw(&self, canvas: &Canvas, output_frame: &mut [u8]) {
        let width = canvas.width().max(1) as usize;
        for (i, pixel) in output_frame.chunks_exact_mut(4).enumerate() {
            let x = (i % width) as f32 + 0.5;
            let y = (i / width) as f32 + 0.5;
            let sample = Point::new(x, y);
            let color = canvas
                .shapes()
                .iter()
                .filter_map(|shape| shape.color_at(sample))
                .last()
                .unwrap_or_else(|| canvas.background());
            pixel.copy_from_slice(&color.to_rgba());
        }
    }
}
