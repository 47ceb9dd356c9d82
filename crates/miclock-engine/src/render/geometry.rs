//! Conversions from scene geometry to tiny-skia types.

use resvg::tiny_skia as sk;

use crate::coords::{Transform, Vec2};
use crate::paint::Color;
use crate::path::{Path, PathVerb};
use crate::scene::ArcCmd;

/// Maximum angular step when flattening arcs, in degrees.
const ARC_STEP_DEG: f32 = 2.0;

#[inline]
pub(super) fn sk_transform(t: Transform) -> sk::Transform {
    sk::Transform::from_row(t.sx, t.ky, t.kx, t.sy, t.tx, t.ty)
}

/// Straight-alpha tiny-skia color from a premultiplied engine color.
#[inline]
pub(super) fn sk_color(c: Color) -> sk::Color {
    let (r, g, b, a) = c.to_straight();
    sk::Color::from_rgba(r, g, b, a).unwrap_or(sk::Color::TRANSPARENT)
}

pub(super) fn solid_paint(c: Color) -> sk::Paint<'static> {
    let mut paint = sk::Paint::default();
    paint.set_color(sk_color(c));
    paint.anti_alias = true;
    paint
}

pub(super) fn stroke(width: f32) -> sk::Stroke {
    sk::Stroke { width, ..sk::Stroke::default() }
}

/// Converts an engine path. `None` when the path has no drawable segment.
pub(super) fn sk_path(path: &Path) -> Option<sk::Path> {
    if path.is_empty() {
        return None;
    }
    let mut pb = sk::PathBuilder::new();
    for v in path.verbs() {
        match *v {
            PathVerb::MoveTo(p) => pb.move_to(p.x, p.y),
            PathVerb::LineTo(p) => pb.line_to(p.x, p.y),
            PathVerb::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathVerb::Close => pb.close(),
        }
    }
    pb.finish()
}

/// Builds a polyline through `points`, closing it when `closed`.
pub(super) fn polyline(points: &[Vec2], closed: bool) -> Option<sk::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = sk::PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

/// Flattens an arc into points along its sweep.
pub(super) fn arc_points(arc: &ArcCmd) -> Vec<Vec2> {
    let sweep = arc.sweep_angle.clamp(-360.0, 360.0);
    let steps = ((sweep.abs() / ARC_STEP_DEG).ceil() as usize).max(1);
    (0..=steps).map(|i| arc.point_at(i as f32 / steps as f32)).collect()
}

/// Splits an arc into `(points, mid_angle)` runs of at most `step_deg`
/// degrees each. Used to tessellate gradient strokes into solid pieces.
pub(super) fn arc_pieces(arc: &ArcCmd, step_deg: f32) -> Vec<(Vec<Vec2>, f32)> {
    let sweep = arc.sweep_angle.clamp(-360.0, 360.0);
    let pieces = ((sweep.abs() / step_deg.max(0.1)).ceil() as usize).max(1);
    let sub = ((step_deg / ARC_STEP_DEG).ceil() as usize).max(1);
    (0..pieces)
        .map(|i| {
            let t0 = i as f32 / pieces as f32;
            let t1 = (i + 1) as f32 / pieces as f32;
            let pts = (0..=sub)
                .map(|j| arc.point_at(t0 + (t1 - t0) * j as f32 / sub as f32))
                .collect();
            let mid = arc.start_angle + sweep * (t0 + t1) * 0.5;
            (pts, mid)
        })
        .collect()
}
