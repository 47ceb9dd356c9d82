use miclock_engine::coords::{Rect, Vec2};
use miclock_engine::scene::DrawList;
use miclock_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Owns the resources shared across frames: fonts and the draw list.
///
/// Each [`frame`](Self::frame) clears the list, measures and paints the root
/// into the full viewport, and records whether any widget asked for another
/// frame. The host polls [`needs_redraw`](Self::needs_redraw) to decide
/// whether to schedule one.
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut clock = ClockView::new();
/// ui.frame_widget(&mut clock, viewport);
/// target.render(&mut ui.draw_list, &ui.font_system);
/// ```
pub struct UiScene {
    /// Public so hosts can split-borrow it next to `draw_list` when rendering.
    pub font_system: FontSystem,
    /// Draw stream recorded by the most recent frame.
    pub draw_list: DrawList,
    redraw_requested: bool,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new(), redraw_requested: false }
    }

    /// Loads a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Paints a boxed root. The element keeps its state between frames.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2) -> &mut DrawList {
        self.run(root.as_widget_mut(), viewport)
    }

    /// Paints a concrete root widget.
    pub fn frame_widget<W: Widget>(&mut self, root: &mut W, viewport: Vec2) -> &mut DrawList {
        self.run(root, viewport)
    }

    /// True when the last frame asked for a follow-up frame.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    fn run(&mut self, root: &mut dyn Widget, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        // The root is offered exactly the viewport and painted at the size
        // it answers with.
        let ctx = LayoutCtx { fonts: &self.font_system };
        let size = root.measure(Constraints::tight(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, size.x.max(0.0), size.y.max(0.0));

        // ── paint ─────────────────────────────────────────────────────────
        let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
        root.paint(&mut painter, rect);
        self.redraw_requested = painter.redraw_requested();

        log::trace!("frame {}x{}: {} draw items", viewport.x, viewport.y, self.draw_list.len());
        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miclock_engine::paint::Color;

    struct Swatch {
        animate: bool,
        paints: u32,
        last_rect: Option<Rect>,
    }

    fn swatch(animate: bool) -> Swatch {
        Swatch { animate, paints: 0, last_rect: None }
    }

    impl Widget for Swatch {
        fn measure(&self, c: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            c.constrain(Vec2::new(10.0, 10.0))
        }

        fn paint(&mut self, painter: &mut Painter, rect: Rect) {
            self.paints += 1;
            self.last_rect = Some(rect);
            painter.fill_rect(rect, Color::white());
            if self.animate {
                painter.request_redraw();
            }
        }
    }

    #[test]
    fn frame_clears_previous_items() {
        let mut ui = UiScene::new();
        let mut w = swatch(false);
        ui.frame_widget(&mut w, Vec2::new(20.0, 20.0));
        let n = ui.frame_widget(&mut w, Vec2::new(20.0, 20.0)).len();
        assert_eq!(n, 1);
        assert_eq!(w.paints, 2);
    }

    #[test]
    fn redraw_request_is_per_frame() {
        let mut ui = UiScene::new();
        let mut root = Element::new(swatch(true));
        ui.frame(&mut root, Vec2::new(5.0, 5.0));
        assert!(ui.needs_redraw());

        let mut still = swatch(false);
        ui.frame_widget(&mut still, Vec2::new(5.0, 5.0));
        assert!(!ui.needs_redraw());
    }

    #[test]
    fn root_is_painted_at_its_measured_size() {
        let mut ui = UiScene::new();
        let mut w = swatch(false);
        ui.frame_widget(&mut w, Vec2::new(64.0, 32.0));
        assert_eq!(w.last_rect, Some(Rect::new(0.0, 0.0, 64.0, 32.0)));
    }

    #[test]
    fn bad_font_bytes_are_rejected() {
        let mut ui = UiScene::new();
        assert!(ui.load_font(b"not a font").is_err());
    }
}
