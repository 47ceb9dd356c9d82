use crate::coords::{Rect, Vec2};
use crate::paint::{Paint, PaintStyle};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Elliptical arc payload.
///
/// The arc runs along the ellipse inscribed in `oval`, starting at
/// `start_angle` degrees (0° = +X) and sweeping `sweep_angle` degrees
/// clockwise on screen. A sweep of 360° or more draws the full ellipse.
/// Arcs never include the centre (no pie wedges).
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub oval: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub paint: Paint,
    pub style: PaintStyle,
}

impl ArcCmd {
    #[inline]
    pub fn new(oval: Rect, start_angle: f32, sweep_angle: f32, paint: Paint, style: PaintStyle) -> Self {
        Self { oval, start_angle, sweep_angle, paint, style }
    }

    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.sweep_angle.abs() >= 360.0
    }

    /// Semi-axes of the underlying ellipse.
    #[inline]
    pub fn radii(&self) -> Vec2 {
        let o = self.oval.normalized();
        o.size * 0.5
    }

    /// Point on the arc at `t` in [0, 1] along the sweep.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let sweep = self.sweep_angle.clamp(-360.0, 360.0);
        Vec2::on_ellipse(self.oval.center(), self.radii(), self.start_angle + sweep * t)
    }
}

impl DrawList {
    /// Records an arc.
    #[inline]
    pub fn push_arc(
        &mut self,
        z: ZIndex,
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        paint: Paint,
        style: PaintStyle,
    ) {
        self.push(z, DrawCmd::Arc(ArcCmd::new(oval, start_angle, sweep_angle, paint, style)));
    }

    /// Records a stroked full circle.
    #[inline]
    pub fn push_stroked_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, paint: Paint, width: f32) {
        self.push_arc(z, Rect::from_center_radius(center, radius), 0.0, 360.0, paint, PaintStyle::stroke(width));
    }
}
