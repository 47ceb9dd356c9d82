use crate::scene::shapes::arc::ArcCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::path::PathCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::raster` to draw it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Arc(ArcCmd),
    Line(LineCmd),
    Path(PathCmd),
    Text(TextCmd),
}
