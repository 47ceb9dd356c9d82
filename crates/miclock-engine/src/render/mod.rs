//! CPU raster backend.
//!
//! Consumes `scene` draw streams and rasterizes them into an RGBA pixmap with
//! `tiny-skia` (re-exported by `resvg`). This stands in for the host's drawing
//! surface: snapshots, frame sequences and raster tests all go through it.
//!
//! Convention:
//! - geometry is in logical pixels, one logical pixel per device pixel
//! - each item is drawn under its recorded transform
//! - text is blended glyph by glyph from fontdue coverage masks

mod geometry;
mod glyphs;
mod raster;

pub use raster::{RasterTarget, RenderError};
