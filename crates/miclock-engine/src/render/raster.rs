use std::fmt;
use std::io::Cursor;

use resvg::tiny_skia as sk;

use crate::paint::{Color, Paint, PaintStyle};
use crate::scene::{ArcCmd, DrawCmd, DrawList};
use crate::text::FontSystem;

use super::geometry::{arc_pieces, arc_points, polyline, sk_color, sk_path, sk_transform, solid_paint, stroke};
use super::glyphs::blit_text;

/// Angular size of the solid pieces a sweep-gradient arc is cut into.
const SWEEP_PIECE_DEG: f32 = 3.0;

/// Errors produced by the raster backend.
#[derive(Debug)]
pub enum RenderError {
    /// A pixmap needs at least one pixel in each dimension.
    EmptySurface { width: u32, height: u32 },
    /// PNG encoding failed.
    Encode(String),
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptySurface { width, height } => {
                write!(f, "cannot allocate a {width}x{height} surface")
            }
            RenderError::Encode(msg) => write!(f, "png encode error: {msg}"),
            RenderError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

/// An RGBA surface that draw streams are rasterized into.
pub struct RasterTarget {
    pixmap: sk::Pixmap,
}

impl RasterTarget {
    /// Allocates a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = sk::Pixmap::new(width, height).ok_or(RenderError::EmptySurface { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills the whole surface with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(sk_color(color));
    }

    /// Rasterizes `draw_list` in paint order. Returns the number of items drawn.
    ///
    /// Items that cannot be drawn (degenerate geometry, zero-width strokes,
    /// text in an unloaded font) are skipped.
    pub fn render(&mut self, draw_list: &mut DrawList, fonts: &FontSystem) -> usize {
        let mut drawn = 0usize;
        let mut skipped = 0usize;
        for item in draw_list.iter_in_paint_order() {
            let t = sk_transform(item.transform);
            let ok = match &item.cmd {
                DrawCmd::Rect(cmd) => {
                    let r = cmd.rect.normalized();
                    match sk::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y) {
                        Some(rect) => {
                            self.pixmap.fill_rect(rect, &solid_paint(cmd.paint.base_color()), t, None);
                            true
                        }
                        None => false,
                    }
                }
                DrawCmd::Arc(cmd) => self.draw_arc(cmd, t),
                DrawCmd::Line(cmd) => {
                    if cmd.width <= 0.0 {
                        false
                    } else {
                        match polyline(&[cmd.from, cmd.to], false) {
                            Some(path) => {
                                self.pixmap.stroke_path(&path, &solid_paint(cmd.paint.base_color()), &stroke(cmd.width), t, None);
                                true
                            }
                            None => false,
                        }
                    }
                }
                DrawCmd::Path(cmd) => match sk_path(&cmd.path) {
                    Some(path) => self.draw_shape(&path, &cmd.paint, cmd.style, t),
                    None => false,
                },
                DrawCmd::Text(cmd) => blit_text(&mut self.pixmap, cmd, item.transform, fonts),
            };
            if ok {
                drawn += 1;
            } else {
                skipped += 1;
            }
        }
        log::trace!("rasterized {drawn} items, skipped {skipped}");
        drawn
    }

    fn draw_shape(&mut self, path: &sk::Path, paint: &Paint, style: PaintStyle, t: sk::Transform) -> bool {
        let p = solid_paint(paint.base_color());
        match style {
            PaintStyle::Fill => {
                self.pixmap.fill_path(path, &p, sk::FillRule::Winding, t, None);
                true
            }
            PaintStyle::Stroke { width } if width > 0.0 => {
                self.pixmap.stroke_path(path, &p, &stroke(width), t, None);
                true
            }
            PaintStyle::Stroke { .. } => false,
        }
    }

    fn draw_arc(&mut self, cmd: &ArcCmd, t: sk::Transform) -> bool {
        if cmd.oval.normalized().is_empty() {
            return false;
        }
        match (&cmd.paint, cmd.style) {
            // Sweep strokes are cut into short solid pieces coloured by the
            // gradient at each piece's direction from the gradient centre.
            // A malformed gradient falls through to its first stop.
            (Paint::Sweep(g), PaintStyle::Stroke { width }) if width > 0.0 && g.is_valid() => {
                for (pts, _) in arc_pieces(cmd, SWEEP_PIECE_DEG) {
                    let mid = pts[pts.len() / 2];
                    let dir = (mid.y - g.center.y).atan2(mid.x - g.center.x).to_degrees();
                    if let Some(path) = polyline(&pts, false) {
                        self.pixmap.stroke_path(&path, &solid_paint(g.color_at(dir)), &stroke(width), t, None);
                    }
                }
                true
            }
            _ => {
                let pts = arc_points(cmd);
                match polyline(&pts, cmd.is_full_circle()) {
                    Some(path) => self.draw_shape(&path, &cmd.paint, cmd.style, t),
                    None => false,
                }
            }
        }
    }

    /// Straight-alpha RGBA of the pixel at `(x, y)`; `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // tiny-skia indexes `y * width + x` without checking `x`.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Straight-alpha RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Encodes the surface as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let img = image::RgbaImage::from_raw(self.width(), self.height(), self.to_rgba8())
            .ok_or_else(|| RenderError::Encode("pixel buffer does not match surface size".into()))?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        Ok(out)
    }

    /// Encodes the surface as PNG and writes it to `path`.
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Transform, Vec2};
    use crate::paint::SweepGradient;
    use crate::path::Path;
    use crate::scene::ZIndex;

    fn red() -> Color {
        Color::from_srgb_u8(255, 0, 0, 255)
    }

    #[test]
    fn zero_sized_surface_is_an_error() {
        assert!(matches!(RasterTarget::new(0, 10), Err(RenderError::EmptySurface { .. })));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut target = RasterTarget::new(4, 4).unwrap();
        target.clear(red());
        assert_eq!(target.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(4, 0), None);
    }

    #[test]
    fn pixel_outside_surface_does_not_wrap_rows() {
        let mut target = RasterTarget::new(3, 2).unwrap();
        target.clear(red());
        assert_eq!(target.pixel(2, 1), Some([255, 0, 0, 255]));
        for (x, y) in [(3, 0), (5, 0), (0, 2), (3, 1), (u32::MAX, 0)] {
            assert_eq!(target.pixel(x, y), None, "({x}, {y})");
        }
    }

    #[test]
    fn filled_path_covers_interior_only() {
        let mut target = RasterTarget::new(20, 20).unwrap();
        let mut path = Path::new();
        path.move_to(Vec2::new(5.0, 5.0))
            .line_to(Vec2::new(15.0, 5.0))
            .line_to(Vec2::new(15.0, 15.0))
            .line_to(Vec2::new(5.0, 15.0))
            .close();
        let mut dl = DrawList::new();
        dl.push_path(ZIndex(0), path, red().into(), PaintStyle::Fill);
        assert_eq!(target.render(&mut dl, &FontSystem::new()), 1);
        assert_eq!(target.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(1, 1).map(|p| p[3]), Some(0));
    }

    #[test]
    fn transform_moves_geometry() {
        let mut target = RasterTarget::new(20, 20).unwrap();
        let mut dl = DrawList::new();
        dl.push_transform(Transform::translate(10.0, 0.0));
        dl.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 5.0, 5.0), red());
        dl.pop_transform();
        target.render(&mut dl, &FontSystem::new());
        assert_eq!(target.pixel(12, 2), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(2, 2).map(|p| p[3]), Some(0));
    }

    #[test]
    fn stroked_circle_leaves_centre_empty() {
        let mut target = RasterTarget::new(40, 40).unwrap();
        let mut dl = DrawList::new();
        dl.push_stroked_circle(ZIndex(0), Vec2::new(20.0, 20.0), 15.0, red().into(), 4.0);
        target.render(&mut dl, &FontSystem::new());
        assert_eq!(target.pixel(20, 20).map(|p| p[3]), Some(0));
        // Right-hand edge of the ring.
        assert_eq!(target.pixel(35, 20).map(|p| p[3]), Some(255));
    }

    #[test]
    fn sweep_arc_varies_around_the_ring() {
        let mut target = RasterTarget::new(60, 60).unwrap();
        let center = Vec2::new(30.0, 30.0);
        let sweep = SweepGradient::two_stop(center, 0.0, Color::from_srgb_u8(0, 0, 0, 255), Color::white());
        let mut dl = DrawList::new();
        dl.push_arc(ZIndex(0), Rect::from_center_radius(center, 20.0), 0.0, 360.0, sweep.into(), PaintStyle::stroke(6.0));
        target.render(&mut dl, &FontSystem::new());
        // Just past the start (dark) vs just before a full turn (light).
        let early = target.pixel(50, 33).unwrap();
        let late = target.pixel(50, 27).unwrap();
        assert!(late[0] > early[0], "early {early:?} late {late:?}");
    }

    #[test]
    fn malformed_sweep_strokes_in_first_stop() {
        let mut target = RasterTarget::new(60, 60).unwrap();
        let center = Vec2::new(30.0, 30.0);
        let single = SweepGradient::new(center, 0.0, vec![crate::paint::ColorStop::new(0.0, red())]);
        let mut dl = DrawList::new();
        dl.push_arc(ZIndex(0), Rect::from_center_radius(center, 20.0), 0.0, 360.0, single.into(), PaintStyle::stroke(6.0));
        assert_eq!(target.render(&mut dl, &FontSystem::new()), 1);
        assert_eq!(target.pixel(50, 30), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(10, 30), Some([255, 0, 0, 255]));
    }

    #[test]
    fn zero_width_line_is_skipped() {
        let mut target = RasterTarget::new(8, 8).unwrap();
        let mut dl = DrawList::new();
        dl.push_line(ZIndex(0), Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0), 0.0, red().into());
        assert_eq!(target.render(&mut dl, &FontSystem::new()), 0);
    }

    #[test]
    fn text_without_font_is_skipped() {
        let mut target = RasterTarget::new(8, 8).unwrap();
        let mut dl = DrawList::new();
        dl.push_text(ZIndex(0), "12", crate::text::FontId::default(), 14.0, red(), Vec2::new(0.0, 8.0));
        assert_eq!(target.render(&mut dl, &FontSystem::new()), 0);
    }

    #[test]
    fn png_has_signature() {
        let target = RasterTarget::new(3, 2).unwrap();
        let png = target.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
