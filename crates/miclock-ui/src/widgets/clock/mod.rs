//! Analog clock face.
//!
//! [`ClockFaceRenderer`] turns a time of day into draw commands for a
//! surface of a given size; [`ClockView`] hosts it as a [`Widget`], reading
//! its [`TimeSource`] once per paint.
//!
//! ```rust,ignore
//! let mut clock = ClockView::new()
//!     .font(font)
//!     .text_size(14.0)
//!     .ring_style(RingStyle::Sweep);
//! let draw_list = scene.frame_widget(&mut clock, viewport);
//! ```

mod angles;
mod face;
mod geometry;
mod hands;
mod palette;
mod ticks;

pub use angles::TimeAngles;
pub use face::ClockFaceRenderer;
pub use geometry::FaceGeometry;
pub use hands::{HandKind, HandSpec};
pub use palette::{Palette, RingStyle};
pub use ticks::{TICK_COUNT, tick_angle};

use miclock_engine::coords::{Rect, Transform, Vec2};
use miclock_engine::paint::Color;
use miclock_engine::text::FontId;
use miclock_engine::time::{SystemClock, TimeSource};

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Preferred edge length when the parent leaves the size open.
pub const PREFERRED_SIZE: f32 = 800.0;
/// Label size in pixels when none is configured.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

/// The clock as a widget.
///
/// Fills its rect with the background colour, then draws the face for the
/// current time and requests another frame. Built with chained setters;
/// the palette and sizes are fixed once painting starts.
pub struct ClockView {
    palette: Palette,
    text_size: f32,
    font: FontId,
    ring_style: RingStyle,
    canvas_offset: Vec2,
    padding: Edges,
    time_source: Box<dyn TimeSource>,
    renderer: Option<ClockFaceRenderer>,
}

impl ClockView {
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            text_size: DEFAULT_TEXT_SIZE,
            font: FontId::default(),
            ring_style: RingStyle::default(),
            canvas_offset: Vec2::zero(),
            padding: Edges::default(),
            time_source: Box::new(SystemClock),
            renderer: None,
        }
    }

    pub fn palette(mut self, v: Palette) -> Self { self.palette = v; self }
    pub fn background(mut self, v: Color) -> Self { self.palette.background = v; self }
    pub fn light(mut self, v: Color) -> Self { self.palette.light = v; self }
    pub fn dark(mut self, v: Color) -> Self { self.palette.dark = v; self }
    pub fn text_size(mut self, v: f32) -> Self { self.text_size = v; self }
    pub fn font(mut self, v: FontId) -> Self { self.font = v; self }
    pub fn ring_style(mut self, v: RingStyle) -> Self { self.ring_style = v; self }
    pub fn canvas_offset(mut self, v: Vec2) -> Self { self.canvas_offset = v; self }
    pub fn padding(mut self, v: Edges) -> Self { self.padding = v; self }

    pub fn time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.time_source = Box::new(source);
        self
    }

    /// The face renderer, once the view has been painted.
    pub fn renderer(&self) -> Option<&ClockFaceRenderer> {
        self.renderer.as_ref()
    }

    fn renderer_mut(&mut self) -> &mut ClockFaceRenderer {
        let (palette, text_size, font, ring_style, offset) =
            (self.palette, self.text_size, self.font, self.ring_style, self.canvas_offset);
        self.renderer.get_or_insert_with(|| {
            ClockFaceRenderer::new(palette, text_size)
                .font(font)
                .ring_style(ring_style)
                .canvas_offset(offset)
        })
    }
}

impl Default for ClockView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ClockView {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(Vec2::new(PREFERRED_SIZE, PREFERRED_SIZE))
    }

    fn paint(&mut self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.palette.background);

        let now = self.time_source.now();
        let padding = self.padding;
        let renderer = self.renderer_mut();
        renderer.on_size_change(rect.size.x, rect.size.y, padding);
        painter.with_transform(Transform::translate(rect.origin.x, rect.origin.y), |p| {
            renderer.render_frame(now, p);
        });
    }
}
