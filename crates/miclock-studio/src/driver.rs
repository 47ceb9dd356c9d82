use std::time::{Duration, Instant};

use anyhow::Result;
use miclock_engine::coords::Vec2;
use miclock_engine::paint::Color;
use miclock_engine::render::RasterTarget;
use miclock_engine::time::{FrameClock, FrameTime};
use miclock_ui::scene::UiScene;
use miclock_ui::widget::Widget;

/// Drives a widget frame by frame onto a raster surface.
///
/// Plays the host's role: it produces a frame, hands the pixels to a
/// callback, and keeps going for as long as the last frame asked for
/// another one.
pub struct FrameDriver {
    scene: UiScene,
    target: RasterTarget,
    clock: FrameClock,
    /// Target rate; zero or less means uncapped.
    fps: f32,
}

impl FrameDriver {
    pub fn new(scene: UiScene, target: RasterTarget, fps: f32) -> Self {
        Self { scene, target, clock: FrameClock::new(), fps }
    }

    pub fn target(&self) -> &RasterTarget {
        &self.target
    }

    fn viewport(&self) -> Vec2 {
        Vec2::new(self.target.width() as f32, self.target.height() as f32)
    }

    /// Records and rasterizes one frame. Returns the number of items drawn.
    pub fn render_frame<W: Widget>(&mut self, root: &mut W) -> usize {
        let viewport = self.viewport();
        self.scene.frame_widget(root, viewport);
        self.target.clear(Color::transparent());
        self.target.render(&mut self.scene.draw_list, &self.scene.font_system)
    }

    /// Runs frames until the root stops requesting redraws or `limit`
    /// elapses. `on_frame` sees each finished surface. Returns the frame count.
    pub fn run<W: Widget>(
        &mut self,
        root: &mut W,
        limit: Option<Duration>,
        mut on_frame: impl FnMut(&RasterTarget, FrameTime) -> Result<()>,
    ) -> Result<u64> {
        let started = Instant::now();
        self.clock.reset();
        loop {
            let ft = self.clock.tick();
            let drawn = self.render_frame(root);
            on_frame(&self.target, ft)?;
            log::trace!("frame {} dt {:.4}s, {drawn} items", ft.frame_index, ft.dt);

            if !self.scene.needs_redraw() {
                log::debug!("no redraw requested; stopping");
                break;
            }
            if limit.is_some_and(|l| started.elapsed() >= l) {
                break;
            }
            let mut wait = self.clock.remaining_budget(self.fps, Instant::now());
            if let Some(l) = limit {
                wait = wait.min(l.saturating_sub(started.elapsed()));
            }
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }
        Ok(self.clock.frames())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miclock_engine::coords::Rect;
    use miclock_engine::time::{FixedClock, WallTime};
    use miclock_ui::constraints::{Constraints, LayoutCtx};
    use miclock_ui::painter::Painter;
    use miclock_ui::widgets::clock::ClockView;

    struct Still;

    impl Widget for Still {
        fn measure(&self, c: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            c.max
        }

        fn paint(&mut self, painter: &mut Painter, rect: Rect) {
            painter.fill_rect(rect, Color::white());
        }
    }

    fn driver(size: u32, fps: f32) -> FrameDriver {
        FrameDriver::new(UiScene::new(), RasterTarget::new(size, size).unwrap(), fps)
    }

    #[test]
    fn still_widget_renders_one_frame() {
        let mut d = driver(16, 60.0);
        let mut seen = 0;
        let frames = d.run(&mut Still, None, |_, _| {
            seen += 1;
            Ok(())
        });
        assert_eq!(frames.unwrap(), 1);
        assert_eq!(seen, 1);
        assert_eq!(d.target().pixel(8, 8), Some([255, 255, 255, 255]));
    }

    #[test]
    fn clock_keeps_running_until_limit() {
        let mut d = driver(64, 0.0);
        let mut view = ClockView::new().time_source(FixedClock::new(WallTime::MIDNIGHT));
        let frames = d.run(&mut view, Some(Duration::from_millis(30)), |_, _| Ok(())).unwrap();
        assert!(frames >= 2, "{frames}");
        assert!(d.scene.needs_redraw());
    }

    #[test]
    fn slow_rate_never_sleeps_past_limit() {
        let mut d = driver(16, 1e-20);
        let mut view = ClockView::new().time_source(FixedClock::new(WallTime::MIDNIGHT));
        let started = Instant::now();
        let frames = d.run(&mut view, Some(Duration::from_millis(20)), |_, _| Ok(())).unwrap();
        assert!((1..=2).contains(&frames), "{frames}");
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn callback_error_stops_the_loop() {
        let mut d = driver(8, 0.0);
        let mut view = ClockView::new().time_source(FixedClock::new(WallTime::MIDNIGHT));
        let result = d.run(&mut view, None, |_, _| anyhow::bail!("disk full"));
        assert!(result.is_err());
    }

    #[test]
    fn clock_frame_paints_background() {
        let mut d = driver(100, 0.0);
        let mut view = ClockView::new().time_source(FixedClock::new(WallTime::MIDNIGHT));
        assert!(d.render_frame(&mut view) > 200);
        // Corner lies outside the face: plain background.
        assert_eq!(d.target().pixel(1, 1), Some([0x23, 0x7E, 0xAD, 0xFF]));
    }
}
