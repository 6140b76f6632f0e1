//! Rounded-square frame.
//!
//! Only the top edge and its right-hand corner are computed. The other three
//! sides are that same quarter rotated through [`Transform::QUARTERS`], which
//! keeps the frame exactly 4-fold symmetric.

#[cfg(test)]
#[path = "border_test.rs"]
mod border_test;

use crate::arch::ArchGeometry;
use crate::node::Path;
use crate::point::{Point, Transform};

/// One quarter of the frame: a straight top edge and the corner after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderQuarter {
    /// Where the straight edge begins (end of the previous corner).
    pub line_start: Point,
    /// Where the straight edge ends and the corner curve begins.
    pub curve_start: Point,
    /// Where the corner curve ends, on the next edge.
    pub curve_end: Point,
    /// Control point on the top edge.
    pub control_start: Point,
    /// Control point on the right edge.
    pub control_end: Point,
}

impl BorderQuarter {
    /// Compute the canonical (top edge) quarter.
    ///
    /// `margin` is the gap between the canvas edge and the frame, `reach` how
    /// far from each corner the rounding begins, and `roundness` in `[0, 1]`
    /// pulls the control points toward the corner (0 gives a straight
    /// diagonal cut).
    #[must_use]
    pub fn new(size: f64, margin: f64, reach: f64, roundness: f64) -> Self {
        let far = size - margin;
        let pull = reach * (1.0 - roundness);
        Self {
            line_start: Point::new(margin + reach, margin),
            curve_start: Point::new(far - reach, margin),
            curve_end: Point::new(far, margin + reach),
            control_start: Point::new(far - pull, margin),
            control_end: Point::new(far, margin + pull),
        }
    }

    /// The same quarter mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: Transform, size: f64) -> Self {
        let t = |p: Point| p.transform(transform, size);
        Self {
            line_start: t(self.line_start),
            curve_start: t(self.curve_start),
            curve_end: t(self.curve_end),
            control_start: t(self.control_start),
            control_end: t(self.control_end),
        }
    }
}

/// Append the closed frame to `path`.
///
/// When `arch` is given it is rendered inline at the start of the bottom edge
/// (the [`Transform::Rotate180`] quarter), carving the vault into the outline.
/// The frame always ends with `ClosePath` right after the last corner, so the
/// closing segment is the straight run of the top edge.
pub fn compose_border(
    path: &mut Path,
    quarter: &BorderQuarter,
    size: f64,
    arch: Option<&ArchGeometry>,
) {
    for (i, transform) in Transform::QUARTERS.into_iter().enumerate() {
        let q = quarter.transformed(transform, size);
        if i == 0 {
            path.move_to(q.line_start);
        }
        if transform == Transform::Rotate180 {
            if let Some(arch) = arch {
                arch.render(path, size, true);
            }
        }
        path.line_to(q.curve_start);
        path.curve_to(q.curve_end, q.control_start, q.control_end);
    }
    path.close();
}
