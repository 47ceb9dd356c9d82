//! Coordinate and geometry types shared across the draw stream, renderers and UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//! - Angles in degrees, 0° pointing at +X, increasing clockwise on screen

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
