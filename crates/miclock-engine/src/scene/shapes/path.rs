use crate::paint::{Paint, PaintStyle};
use crate::path::Path;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Outline payload, filled (non-zero winding) or stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub paint: Paint,
    pub style: PaintStyle,
}

impl PathCmd {
    #[inline]
    pub fn new(path: Path, paint: Paint, style: PaintStyle) -> Self {
        Self { path, paint, style }
    }
}

impl DrawList {
    /// Records a path.
    #[inline]
    pub fn push_path(&mut self, z: ZIndex, path: Path, paint: Paint, style: PaintStyle) {
        self.push(z, DrawCmd::Path(PathCmd::new(path, paint, style)));
    }
}
