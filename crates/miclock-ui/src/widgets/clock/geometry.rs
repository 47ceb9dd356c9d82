use miclock_engine::coords::{Rect, Vec2};

use crate::constraints::Edges;

/// Fraction of the radius used as the face's own margin.
pub const DEFAULT_PADDING_RATIO: f32 = 0.12;
/// Fraction of the radius used as the scale ring thickness.
pub const SCALE_LENGTH_RATIO: f32 = 0.12;
/// Fraction of the radius used as the tick stroke.
pub const TICK_STROKE_RATIO: f32 = 0.012;
/// Stroke of the decorative arcs, in pixels.
pub const DECOR_ARC_STROKE: f32 = 2.0;

/// Size-derived layout of the face, in surface-local pixels.
///
/// Computed by [`FaceGeometry::compute`] whenever the surface size or
/// padding changes. Every length is a fixed fraction of `radius`, so a
/// zero radius makes all of them zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FaceGeometry {
    pub width: f32,
    pub height: f32,
    pub padding: Edges,
    pub radius: f32,
    pub default_padding: f32,
    pub scale_length: f32,
    pub tick_stroke: f32,
    pub inset_left: f32,
    pub inset_top: f32,
    pub inset_right: f32,
    pub inset_bottom: f32,
}

impl FaceGeometry {
    pub fn compute(width: f32, height: f32, padding: Edges) -> Self {
        let width = sanitize(width);
        let height = sanitize(height);
        let avail_w = width - padding.h();
        let avail_h = height - padding.v();
        let radius = sanitize(avail_w.min(avail_h) / 2.0);

        let default_padding = DEFAULT_PADDING_RATIO * radius;
        let inset_left = default_padding + width / 2.0 - radius + padding.left;
        let inset_top = default_padding + height / 2.0 - radius + padding.top;

        Self {
            width,
            height,
            padding,
            radius,
            default_padding,
            scale_length: SCALE_LENGTH_RATIO * radius,
            tick_stroke: TICK_STROKE_RATIO * radius,
            inset_left,
            inset_top,
            inset_right: inset_left,
            inset_bottom: inset_top,
        }
    }

    /// Centre of the surface; the pivot of every rotation.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ring stroke width, equal to the scale length.
    #[inline]
    pub fn ring_stroke(&self) -> f32 {
        self.scale_length
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }

    /// Oval the decorative arcs run on, inset by half the numeral height.
    pub fn decor_oval(&self, numeral_height: f32) -> Rect {
        let half = numeral_height / 2.0;
        Rect::from_ltrb(
            self.inset_left + half + 1.0,
            self.inset_top + half + 1.0,
            self.width - self.inset_right - half + 1.0,
            self.height - self.inset_bottom - half + 1.0,
        )
    }

    /// Oval of the scale ring, centred on the ring stroke.
    pub fn ring_oval(&self, numeral_height: f32) -> Rect {
        let inset = 1.5 * self.scale_length + numeral_height / 2.0;
        Rect::from_ltrb(
            self.inset_left + inset,
            self.inset_top + inset,
            self.width - self.inset_right - inset,
            self.height - self.inset_bottom - inset,
        )
    }

    /// Y of the reference line hand reach is measured from.
    #[inline]
    pub fn hand_origin_y(&self, numeral_height: f32) -> f32 {
        self.inset_top + numeral_height / 2.0
    }
}

/// Negative and non-finite lengths collapse to zero.
fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
