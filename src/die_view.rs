use log::debug;

use crate::color::Color;
use crate::error::DieViewError;
use crate::surface::{Point, ShapeId, Surface};

/// Pip centers as multiples of the inner offset. The visibility table
/// refers to pips by position in this list.
const PIP_OFFSETS: [(f32, f32); 7] = [
    (-1.0, -1.0), // upper left
    (-1.0, 0.0),  // left center
    (-1.0, 1.0),  // lower left
    (0.0, 0.0),   // center
    (1.0, -1.0),  // upper right
    (1.0, 0.0),   // right center
    (1.0, 1.0),   // lower right
];

/// Pips shown for each face value. Slot 0 is never displayed.
const VISIBLE_PIPS: [&[usize]; 7] = [
    &[],
    &[3],
    &[2, 4],
    &[2, 3, 4],
    &[0, 2, 4, 6],
    &[0, 2, 3, 4, 6],
    &[0, 1, 2, 4, 5, 6],
];

/// A graphical six-sided die face.
///
/// The view owns the handles of the shapes it drew; the surface itself is
/// borrowed for each call. A view created with
/// `DieView::new(&mut canvas, Point::new(40.0, 50.0), 20.0)` is centered at
/// (40, 50) with sides of length 20 and starts out showing 1.
#[derive(Debug)]
pub struct DieView {
    background: Color,
    foreground: Color,
    pip_radius: f32,
    value: u8,
    face: ShapeId,
    pips: [ShapeId; 7],
}

impl DieView {
    pub const MIN_VALUE: u8 = 1;
    pub const MAX_VALUE: u8 = 6;

    pub fn new<S: Surface>(surface: &mut S, center: Point, size: f32) -> Result<Self, DieViewError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(DieViewError::InvalidDimension(size));
        }

        let background = Color::WHITE;
        let foreground = Color::BLACK;
        let pip_radius = 0.1 * size;
        let half = size / 2.0;
        let offset = 0.6 * half;

        let face = surface.draw_rectangle(
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y + half),
            background,
        );
        let pips = PIP_OFFSETS.map(|(dx, dy)| {
            let at = Point::new(center.x + dx * offset, center.y + dy * offset);
            surface.draw_circle(at, pip_radius, background, background)
        });

        let mut view = Self {
            background,
            foreground,
            pip_radius,
            value: Self::MIN_VALUE,
            face,
            pips,
        };
        view.show(surface, Self::MIN_VALUE);
        Ok(view)
    }

    /// Indices of the pips that are on for `value`, or `None` outside 1..=6.
    pub fn visible_pips(value: u8) -> Option<&'static [usize]> {
        if (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) {
            Some(VISIBLE_PIPS[value as usize])
        } else {
            None
        }
    }

    pub fn set_value<S: Surface>(&mut self, surface: &mut S, value: u8) -> Result<(), DieViewError> {
        if Self::visible_pips(value).is_none() {
            return Err(DieViewError::OutOfRangeValue(value));
        }
        self.show(surface, value);
        Ok(())
    }

    pub fn set_color<S: Surface>(&mut self, surface: &mut S, color: Color) {
        debug!("die pip color {:?}", color);
        self.foreground = color;
        self.show(surface, self.value);
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn pip_radius(&self) -> f32 {
        self.pip_radius
    }

    pub fn face(&self) -> ShapeId {
        self.face
    }

    pub fn pips(&self) -> &[ShapeId; 7] {
        &self.pips
    }

    // Callers guarantee `value` is in range.
    fn show<S: Surface>(&mut self, surface: &mut S, value: u8) {
        for &pip in &self.pips {
            surface.set_fill(pip, self.background);
        }
        for &index in VISIBLE_PIPS[value as usize] {
            surface.set_fill(self.pips[index], self.foreground);
        }
        debug!("die showing {}", value);
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, ShapeKind};

    fn setup() -> (Canvas, DieView) {
        let mut canvas = Canvas::new(100, 100);
        let die = DieView::new(&mut canvas, Point::new(50.0, 50.0), 80.0).unwrap();
        (canvas, die)
    }

    fn pip_fills(canvas: &Canvas, die: &DieView) -> Vec<Color> {
        die.pips()
            .iter()
            .map(|&pip| canvas.shape(pip).unwrap().fill)
            .collect()
    }

    fn expected_fills(on: &[usize], foreground: Color) -> Vec<Color> {
        (0..7)
            .map(|i| if on.contains(&i) { foreground } else { Color::WHITE })
            .collect()
    }

    #[test]
    fn starts_showing_one() {
        let (canvas, die) = setup();
        assert_eq!(die.value(), 1);
        assert_eq!(pip_fills(&canvas, &die), expected_fills(&[3], Color::BLACK));
    }

    #[test]
    fn lays_out_face_and_pips() {
        let (canvas, die) = setup();
        assert_eq!(canvas.shapes().len(), 8);
        assert_eq!(die.pip_radius(), 8.0);

        let face = canvas.shape(die.face()).unwrap();
        assert_eq!(
            face.kind,
            ShapeKind::Rectangle {
                p1: Point::new(10.0, 10.0),
                p2: Point::new(90.0, 90.0),
            }
        );
        assert_eq!(face.fill, Color::WHITE);

        let centers: Vec<Point> = die
            .pips()
            .iter()
            .map(|&pip| match canvas.shape(pip).unwrap().kind {
                ShapeKind::Circle { center, radius } => {
                    assert_eq!(radius, 8.0);
                    center
                }
                other => panic!("pip is not a circle: {:?}", other),
            })
            .collect();
        let expected = [
            (26.0, 26.0),
            (26.0, 50.0),
            (26.0, 74.0),
            (50.0, 50.0),
            (74.0, 26.0),
            (74.0, 50.0),
            (74.0, 74.0),
        ];
        for (center, (x, y)) in centers.iter().zip(expected) {
            assert!(center.distance(Point::new(x, y)) < 1e-4, "{:?} != ({}, {})", center, x, y);
        }
        for &pip in die.pips() {
            assert_eq!(canvas.shape(pip).unwrap().outline, Color::WHITE);
        }
    }

    #[test]
    fn each_value_shows_its_pips() {
        let (mut canvas, mut die) = setup();
        let table: [&[usize]; 6] = [
            &[3],
            &[2, 4],
            &[2, 3, 4],
            &[0, 2, 4, 6],
            &[0, 2, 3, 4, 6],
            &[0, 1, 2, 4, 5, 6],
        ];
        for (value, on) in (1..=6).zip(table) {
            die.set_value(&mut canvas, value).unwrap();
            assert_eq!(die.value(), value);
            assert_eq!(pip_fills(&canvas, &die), expected_fills(on, Color::BLACK), "value {}", value);
        }
    }

    #[test]
    fn set_value_is_idempotent() {
        let (mut canvas, mut die) = setup();
        die.set_value(&mut canvas, 5).unwrap();
        let once = canvas.shapes().to_vec();
        die.set_value(&mut canvas, 5).unwrap();
        assert_eq!(canvas.shapes(), once.as_slice());
    }

    #[test]
    fn set_color_recolors_visible_pips_only() {
        let (mut canvas, mut die) = setup();
        die.set_value(&mut canvas, 4).unwrap();
        die.set_color(&mut canvas, Color::BLUE);
        assert_eq!(die.foreground(), Color::BLUE);
        assert_eq!(die.value(), 4);
        assert_eq!(pip_fills(&canvas, &die), expected_fills(&[0, 2, 4, 6], Color::BLUE));
    }

    #[test]
    fn color_survives_value_changes() {
        let (mut canvas, mut die) = setup();
        die.set_value(&mut canvas, 3).unwrap();
        die.set_value(&mut canvas, 3).unwrap();
        die.set_color(&mut canvas, "red".parse().unwrap());
        die.set_value(&mut canvas, 3).unwrap();
        assert_eq!(pip_fills(&canvas, &die), expected_fills(&[2, 3, 4], Color::RED));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let (mut canvas, mut die) = setup();
        die.set_value(&mut canvas, 2).unwrap();
        let before = canvas.shapes().to_vec();

        for value in [0, 7, u8::MAX] {
            assert_eq!(
                die.set_value(&mut canvas, value),
                Err(DieViewError::OutOfRangeValue(value))
            );
        }
        assert_eq!(die.value(), 2);
        assert_eq!(canvas.shapes(), before.as_slice());
    }

    #[test]
    fn bad_size_draws_nothing() {
        for size in [0.0, -20.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut canvas = Canvas::new(100, 100);
            let result = DieView::new(&mut canvas, Point::new(50.0, 50.0), size);
            assert!(matches!(result, Err(DieViewError::InvalidDimension(_))));
            assert!(canvas.shapes().is_empty());
        }
    }

    #[test]
    fn center_pip_stays_put() {
        let (mut canvas, mut die) = setup();
        let pips = *die.pips();
        for value in [6, 1, 5, 2] {
            die.set_value(&mut canvas, value).unwrap();
            die.set_color(&mut canvas, Color::GREEN);
        }
        assert_eq!(*die.pips(), pips);
        assert_eq!(canvas.shapes().len(), 8);
        assert_eq!(
            canvas.shape(die.pips()[3]).unwrap().kind,
            ShapeKind::Circle {
                center: Point::new(50.0, 50.0),
                radius: 8.0,
            }
        );
    }

    #[test]
    fn leaves_other_shapes_alone() {
        let (mut canvas, mut die) = setup();
        let others: Vec<ShapeId> = (0..5)
            .map(|_| canvas.draw_circle(Point::new(5.0, 5.0), 2.0, Color::GREEN, Color::GREEN))
            .collect();

        die.set_value(&mut canvas, 6).unwrap();
        die.set_color(&mut canvas, Color::RED);
        for id in others {
            assert_eq!(canvas.shape(id).unwrap().fill, Color::GREEN);
        }
    }

    #[test]
    fn visible_pips_lookup() {
        assert_eq!(DieView::visible_pips(0), None);
        assert_eq!(DieView::visible_pips(6), Some(&[0, 1, 2, 4, 5, 6][..]));
        assert_eq!(DieView::visible_pips(7), None);
    }
}
