//! MiClock engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, paint, the recorded draw stream, text metrics, time sources,
//! logging, and a CPU raster backend that plays the role of the host surface.

pub mod time;

pub mod logging;
pub mod coords;
pub mod path;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
