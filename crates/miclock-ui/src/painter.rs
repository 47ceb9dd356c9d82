use miclock_engine::coords::{Rect, Transform, Vec2};
use miclock_engine::paint::{Color, Paint, PaintStyle};
use miclock_engine::path::Path;
use miclock_engine::scene::{DrawList, ZIndex};
use miclock_engine::text::{FontId, FontSystem, TextBounds};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a canvas-style API. Every call takes
/// the next z-index, so the recorded order is the paint order.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,
    redraw_requested: bool,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system, z: 0, redraw_requested: false }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Tight ink bounds of `text` relative to its baseline origin.
    #[inline]
    pub fn text_bounds(&self, text: &str, font: FontId, size: f32) -> TextBounds {
        self.font_system.text_bounds(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Stroked arc on the ellipse inscribed in `oval`. Angles in degrees,
    /// 0° at 3 o'clock, positive sweep clockwise.
    pub fn stroke_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, paint: impl Into<Paint>, width: f32) {
        let z = self.next_z();
        self.draw_list.push_arc(z, oval, start_angle, sweep_angle, paint.into(), PaintStyle::stroke(width));
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>, width: f32) {
        let z = self.next_z();
        self.draw_list.push_stroked_circle(z, center, radius, paint.into(), width);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, paint.into());
    }

    pub fn fill_path(&mut self, path: Path, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_path(z, path, paint.into(), PaintStyle::Fill);
    }

    /// Single-line text with its pen origin on the baseline at `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Like a canvas `save()` followed by `concat(t)`. Pair with [`pop_transform`](Self::pop_transform).
    pub fn push_transform(&mut self, t: Transform) {
        self.draw_list.push_transform(t);
    }

    pub fn pop_transform(&mut self) {
        self.draw_list.pop_transform();
    }

    /// Runs `f` with `t` pushed, popping it afterwards.
    pub fn with_transform<R>(&mut self, t: Transform, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_transform(t);
        let out = f(self);
        self.pop_transform();
        out
    }

    // ── frame scheduling ──────────────────────────────────────────────────

    /// Asks the host for another frame as soon as it can produce one.
    #[inline]
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    #[inline]
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
