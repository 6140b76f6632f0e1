//! Pointed-arch geometry.
//!
//! An arch has five structural points: two floor corners, two midpoints where
//! the straight sides turn into curves, and the apex. Only the right half is
//! derived; the left half is the [`Transform::ReflectHorizontal`] mirror of it,
//! so the arch must be centered on the canvas for the halves to meet.

#[cfg(test)]
#[path = "arch_test.rs"]
mod arch_test;

use crate::consts::ARCH_ROUNDNESS;
use crate::error::IconError;
use crate::node::Path;
use crate::point::{Point, Transform};

/// Input parameters for one arch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchSpec {
    /// Y of the floor the arch stands on.
    pub floor_y: f64,
    /// Width-to-height ratio. Below 1 the arch is taller than it is wide.
    pub ratio: f64,
    /// Midpoint position as (x, y) fractions between apex and floor corner.
    pub mid_pct: (f64, f64),
    /// Distance between the two floor corners.
    pub width: f64,
    /// X of the vertical axis of symmetry.
    pub center_x: f64,
}

impl ArchSpec {
    /// Derive the full geometry.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidParameter`] if `ratio` or `width` is not a
    /// positive finite number, or any other field is not finite. No point is
    /// computed in that case. Also rejects an arch too flat to resolve at
    /// `floor_y`: its straight side would have no height, so the slope and the
    /// control points would not be finite.
    pub fn geometry(&self) -> Result<ArchGeometry, IconError> {
        self.validate()?;
        let geometry = ArchGeometry::derive(*self);
        geometry.check_resolved()?;
        Ok(geometry)
    }

    fn validate(&self) -> Result<(), IconError> {
        if !(self.ratio.is_finite() && self.ratio > 0.0) {
            return Err(IconError::invalid("ratio", format!("must be > 0, got {}", self.ratio)));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(IconError::invalid("width", format!("must be > 0, got {}", self.width)));
        }
        let finite = [self.floor_y, self.mid_pct.0, self.mid_pct.1, self.center_x];
        if !finite.iter().all(|v| v.is_finite()) {
            return Err(IconError::invalid("arch", "floor, midpoint and center must be finite"));
        }
        Ok(())
    }
}

/// Fully derived arch, right half only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchGeometry {
    pub spec: ArchSpec,
    pub top_y: f64,
    /// `top_y - floor_y`; negative because Y grows downward.
    pub height: f64,
    /// Right floor corner.
    pub bottom: Point,
    /// Right midpoint, where the straight side ends.
    pub mid: Point,
    /// Apex.
    pub top: Point,
    /// dx/dy of the straight side from `mid` to `bottom`.
    pub slope: f64,
    /// Control point leaving `mid`, continuing the straight side's direction.
    pub mid_control: Point,
    /// Control point arriving at `top`, horizontal so the apex is level.
    pub top_control: Point,
}

impl ArchGeometry {
    fn derive(spec: ArchSpec) -> Self {
        let half = spec.width / 2.0;
        let top_y = spec.floor_y - spec.width / spec.ratio;
        let height = top_y - spec.floor_y;

        let bottom = Point::new(spec.center_x + half, spec.floor_y);
        let mid = Point::new(
            spec.center_x + half * spec.mid_pct.0,
            top_y - height * spec.mid_pct.1,
        );
        let top = Point::new(spec.center_x, top_y);

        let slope = (bottom.x - mid.x) / (bottom.y - mid.y);
        let mid_control_y = top.y + (mid.y - top.y) * ARCH_ROUNDNESS;
        let mid_control = Point::new(mid.x - (mid.y - mid_control_y) * slope, mid_control_y);
        let top_control = Point::new(top.x + (mid.x - top.x) * ARCH_ROUNDNESS, top.y);

        Self { spec, top_y, height, bottom, mid, top, slope, mid_control, top_control }
    }

    fn check_resolved(&self) -> Result<(), IconError> {
        let points = [self.bottom, self.mid, self.top, self.mid_control, self.top_control];
        let finite =
            self.slope.is_finite() && points.iter().all(|p| p.x.is_finite() && p.y.is_finite());
        if self.top_y < self.spec.floor_y && finite {
            return Ok(());
        }
        Err(IconError::invalid(
            "arch",
            format!(
                "width {} at ratio {} is too flat to resolve at y = {}",
                self.spec.width, self.spec.ratio, self.spec.floor_y
            ),
        ))
    }

    /// Width of the arch base.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.spec.width
    }

    /// Append the arch to `path`, right floor corner first.
    ///
    /// When `inline` is true the arch continues the open sub-path with a line
    /// to its first corner and is left open; otherwise it starts its own
    /// sub-path and closes it.
    pub fn render(&self, path: &mut Path, size: f64, inline: bool) {
        let flip = |p: Point| p.transform(Transform::ReflectHorizontal, size);

        if inline {
            path.line_to(self.bottom);
        } else {
            path.move_to(self.bottom);
        }
        path.line_to(self.mid);
        path.curve_to(self.top, self.mid_control, self.top_control);
        // Travel reverses on the mirrored side, so the controls swap roles.
        path.curve_to(flip(self.mid), flip(self.top_control), flip(self.mid_control));
        path.line_to(flip(self.bottom));
        if !inline {
            path.close();
        }
    }
}
