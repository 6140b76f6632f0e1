#![allow(clippy::float_cmp)]

use super::*;
use crate::node::{NodeType, PathStep};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn sample_spec() -> ArchSpec {
    ArchSpec { floor_y: 100.0, ratio: 0.5, mid_pct: (0.5, 0.25), width: 20.0, center_x: 50.0 }
}

fn outer_spec() -> ArchSpec {
    ArchSpec { ratio: 0.86, mid_pct: (0.40, 0.14), ..sample_spec() }
}

fn inner_spec() -> ArchSpec {
    ArchSpec { ratio: 0.61, mid_pct: (0.29, 0.07), ..sample_spec() }
}

fn sample() -> ArchGeometry {
    sample_spec().geometry().unwrap()
}

// =============================================================
// Derivation
// =============================================================

#[test]
fn top_and_height() {
    let g = sample();
    assert_eq!(g.top_y, 60.0);
    assert_eq!(g.height, -40.0);
}

#[test]
fn structural_points() {
    let g = sample();
    assert_eq!(g.bottom, Point::new(60.0, 100.0));
    assert_eq!(g.mid, Point::new(55.0, 70.0));
    assert_eq!(g.top, Point::new(50.0, 60.0));
}

#[test]
fn slope_follows_straight_side() {
    let g = sample();
    assert!(approx_eq(g.slope, 5.0 / 30.0));
}

#[test]
fn control_points() {
    let g = sample();
    assert!(point_approx_eq(g.mid_control, Point::new(55.0 - 6.7 / 6.0, 63.3)));
    assert!(point_approx_eq(g.top_control, Point::new(51.65, 60.0)));
}

#[test]
fn mid_control_is_collinear_with_straight_side() {
    let g = sample();
    let side = (g.bottom.x - g.mid.x) / (g.bottom.y - g.mid.y);
    let ext = (g.mid.x - g.mid_control.x) / (g.mid.y - g.mid_control.y);
    assert!(approx_eq(side, ext));
}

#[test]
fn top_control_is_level_with_apex() {
    let g = sample();
    assert_eq!(g.top_control.y, g.top.y);
}

#[test]
fn width_accessor() {
    assert_eq!(sample().width(), 20.0);
}

#[test]
fn derivation_is_deterministic() {
    assert_eq!(sample(), sample());
}

// =============================================================
// Rejection
// =============================================================

#[test]
fn zero_ratio_is_rejected() {
    let spec = ArchSpec { ratio: 0.0, ..sample_spec() };
    let err = spec.geometry().unwrap_err();
    assert!(matches!(err, IconError::InvalidParameter { name: "ratio", .. }));
}

#[test]
fn negative_ratio_is_rejected() {
    let spec = ArchSpec { ratio: -1.0, ..sample_spec() };
    assert!(spec.geometry().is_err());
}

#[test]
fn zero_width_is_rejected() {
    let spec = ArchSpec { width: 0.0, ..sample_spec() };
    let err = spec.geometry().unwrap_err();
    assert!(matches!(err, IconError::InvalidParameter { name: "width", .. }));
}

#[test]
fn nan_center_is_rejected() {
    let spec = ArchSpec { center_x: f64::NAN, ..sample_spec() };
    assert!(spec.geometry().is_err());
}

#[test]
fn arch_too_flat_for_floor_is_rejected() {
    let spec = ArchSpec { floor_y: 1480.248, ratio: 1e300, ..sample_spec() };
    let err = spec.geometry().unwrap_err();
    assert!(matches!(err, IconError::InvalidParameter { name: "arch", .. }));
}

#[test]
fn sub_ulp_width_is_rejected() {
    let spec = ArchSpec { floor_y: 98.0, width: 1e-15, ratio: 0.61, ..sample_spec() };
    assert!(spec.geometry().is_err());
}

#[test]
fn midpoint_on_floor_is_rejected() {
    let spec = ArchSpec { mid_pct: (0.5, 1.0), ..sample_spec() };
    assert!(spec.geometry().is_err());
}

#[test]
fn accepted_geometry_is_finite() {
    for ratio in [1e-6, 0.01, 0.61, 0.86, 10.0, 1e6] {
        let g = ArchSpec { ratio, ..sample_spec() }.geometry().unwrap();
        assert!(g.slope.is_finite());
        for p in [g.bottom, g.mid, g.top, g.mid_control, g.top_control] {
            assert!(p.x.is_finite() && p.y.is_finite(), "ratio {ratio}: {p:?}");
        }
    }
}

#[test]
fn out_of_range_mid_pct_is_allowed() {
    let spec = ArchSpec { mid_pct: (1.5, -0.2), ..sample_spec() };
    assert!(spec.geometry().is_ok());
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn standalone_render_opens_and_closes() {
    let mut path = Path::new();
    sample().render(&mut path, 100.0, false);
    let cmds: String = path.nodes().iter().map(|n| n.step.command()).collect();
    assert_eq!(cmds, "MLCCLZ");
    assert!(path.is_closed());
}

#[test]
fn inline_render_continues_open_path() {
    let mut path = Path::new();
    path.move_to(Point::new(0.0, 100.0));
    sample().render(&mut path, 100.0, true);
    let cmds: String = path.nodes().iter().map(|n| n.step.command()).collect();
    assert_eq!(cmds, "MLLCCL");
    assert_eq!(path.nodes()[1].step, PathStep::LineTo(Point::new(60.0, 100.0)));
}

#[test]
fn render_tags_every_node_cusp() {
    let mut path = Path::new();
    sample().render(&mut path, 100.0, false);
    assert!(path.nodes().iter().all(|n| n.node_type == NodeType::Cusp));
}

#[test]
fn first_curve_reaches_apex() {
    let g = sample();
    let mut path = Path::new();
    g.render(&mut path, 100.0, false);
    assert_eq!(
        path.nodes()[2].step,
        PathStep::CurveTo { to: g.top, ctrl_start: g.mid_control, ctrl_end: g.top_control }
    );
}

#[test]
fn mirrored_half_reflects_right_half() {
    for (spec, size) in [
        (sample_spec(), 100.0),
        (ArchSpec { floor_y: 1480.0, width: 1050.0, center_x: 756.0, ..outer_spec() }, 1512.0),
        (ArchSpec { floor_y: 97.9, width: 43.0, ..inner_spec() }, 100.0),
    ] {
        let g = spec.geometry().unwrap();
        let flip = |p: Point| p.transform(Transform::ReflectHorizontal, size);
        let mut path = Path::new();
        g.render(&mut path, size, false);

        let PathStep::CurveTo { to, ctrl_start, ctrl_end } = path.nodes()[3].step else {
            panic!("expected mirrored curve");
        };
        assert_eq!(to, flip(g.mid));
        assert_eq!(ctrl_start, flip(g.top_control));
        assert_eq!(ctrl_end, flip(g.mid_control));
        assert_eq!(path.nodes()[4].step, PathStep::LineTo(flip(g.bottom)));
    }
}

#[test]
fn centered_arch_apex_is_its_own_mirror() {
    let g = sample();
    assert_eq!(g.top.transform(Transform::ReflectHorizontal, 100.0), g.top);
}
