//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, sweep gradient)
//! - paint style (fill or stroke)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use gradient::{ColorStop, SweepGradient};

/// Paint source for geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Sweep(SweepGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Representative color (the solid color, or the first gradient stop).
    pub fn base_color(&self) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Sweep(g) => g.stops.first().map(|s| s.color).unwrap_or_default(),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<SweepGradient> for Paint {
    fn from(g: SweepGradient) -> Self {
        Paint::Sweep(g)
    }
}

/// How a shape consumes its paint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaintStyle {
    Fill,
    /// Stroke centred on the outline, `width` in logical pixels, butt caps.
    Stroke { width: f32 },
}

impl PaintStyle {
    #[inline]
    pub fn stroke(width: f32) -> Self {
        PaintStyle::Stroke { width: width.max(0.0) }
    }
}
