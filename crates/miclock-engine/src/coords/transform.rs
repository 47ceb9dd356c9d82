use super::Vec2;

/// 2D affine transform in logical pixel space.
///
/// Maps `(x, y)` to `(sx*x + kx*y + tx, ky*x + sy*y + ty)`. The field layout
/// matches the row order rasterizers expect (`sx, ky, kx, sy, tx, ty`).
///
/// Rotations follow the canvas convention: positive degrees turn clockwise on
/// a y-down surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub ky: f32,
    pub kx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { sx: 1.0, ky: 0.0, kx: 0.0, sy: 1.0, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self { sx: 1.0, ky: 0.0, kx: 0.0, sy: 1.0, tx: dx, ty: dy }
    }

    /// Rotation by `degrees` about the origin.
    #[inline]
    pub fn rotate(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self { sx: c, ky: s, kx: -s, sy: c, tx: 0.0, ty: 0.0 }
    }

    /// Rotation by `degrees` about `pivot`.
    ///
    /// Equivalent to translate(pivot) · rotate · translate(-pivot).
    pub fn rotate_about(degrees: f32, pivot: Vec2) -> Self {
        Self::translate(pivot.x, pivot.y)
            .then(Self::rotate(degrees))
            .then(Self::translate(-pivot.x, -pivot.y))
    }

    /// Returns `self · other`: `other` is applied to points first.
    ///
    /// This is the order a canvas accumulates `translate`/`rotate` calls in.
    #[must_use]
    pub fn then(self, other: Transform) -> Transform {
        Transform {
            sx: self.sx * other.sx + self.kx * other.ky,
            ky: self.ky * other.sx + self.sy * other.ky,
            kx: self.sx * other.kx + self.kx * other.sy,
            sy: self.ky * other.kx + self.sy * other.sy,
            tx: self.sx * other.tx + self.kx * other.ty + self.tx,
            ty: self.ky * other.tx + self.sy * other.ty + self.ty,
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.sx * p.x + self.kx * p.y + self.tx,
            self.ky * p.x + self.sy * p.y + self.ty,
        )
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    /// Uniform scale factor applied to lengths (geometric mean of the axes).
    ///
    /// Used to scale stroke widths for transforms that are not pure rotations.
    #[inline]
    pub fn length_scale(self) -> f32 {
        (self.sx * self.sy - self.kx * self.ky).abs().sqrt()
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(self, other: Transform, eps: f32) -> bool {
        (self.sx - other.sx).abs() <= eps
            && (self.ky - other.ky).abs() <= eps
            && (self.kx - other.kx).abs() <= eps
            && (self.sy - other.sy).abs() <= eps
            && (self.tx - other.tx).abs() <= eps
            && (self.ty - other.ty).abs() <= eps
    }
}
