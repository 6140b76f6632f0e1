//! Point value type and the fixed set of plane transforms.
//!
//! All transforms operate on a square canvas of side `size` with the origin in
//! the top-left corner and Y increasing downward. Rotations are about the
//! canvas center, so four quarter turns compose back to the starting point.

#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use crate::consts::COORD_DECIMALS;

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Map this point through `transform` on a canvas of side `size`.
    #[must_use]
    pub fn transform(self, transform: Transform, size: f64) -> Self {
        transform.apply(self, size)
    }

    /// Render as `x,y` with each coordinate rounded for path output.
    #[must_use]
    pub fn render(self) -> String {
        format!("{},{}", format_coord(self.x), format_coord(self.y))
    }
}

/// A rigid transform of the square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    /// Quarter turn clockwise about the canvas center.
    Rotate90,
    Rotate180,
    /// Quarter turn counter-clockwise about the canvas center.
    Rotate270,
    /// Mirror across the vertical center line.
    ReflectHorizontal,
}

impl Transform {
    /// The four rotations, in the order the frame is traced.
    pub const QUARTERS: [Self; 4] =
        [Self::Identity, Self::Rotate90, Self::Rotate180, Self::Rotate270];

    /// Map `point` on a canvas of side `size`.
    #[must_use]
    pub fn apply(self, point: Point, size: f64) -> Point {
        let Point { x, y } = point;
        match self {
            Self::Identity => point,
            Self::Rotate90 => Point::new(size - y, x),
            Self::Rotate180 => Point::new(size - x, size - y),
            Self::Rotate270 => Point::new(y, size - x),
            Self::ReflectHorizontal => Point::new(size - x, y),
        }
    }
}

/// Round `value` to [`COORD_DECIMALS`] places and print it in shortest form.
#[must_use]
pub fn format_coord(value: f64) -> String {
    format!("{}", round_coord(value))
}

/// Round `value` to [`COORD_DECIMALS`] places, keeping it numeric.
///
/// Ties go to the even digit. Negative zero comes back as positive zero.
#[must_use]
pub fn round_coord(value: f64) -> f64 {
    let scale = 10_f64.powi(COORD_DECIMALS);
    // Adding +0.0 folds -0.0 into +0.0.
    (value * scale).round_ties_even() / scale + 0.0
}
