use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use miclock_engine::render::RasterTarget;
use miclock_engine::time::{FixedClock, SystemClock, TimeSource};
use miclock_ui::constraints::Edges;
use miclock_ui::scene::UiScene;
use miclock_ui::widgets::clock::ClockView;

use crate::cli::{FramesArgs, LiveArgs, SnapshotArgs, Surface};
use crate::config::StudioConfig;
use crate::driver::FrameDriver;
use crate::fonts::load_font_bytes;

// ── setup ─────────────────────────────────────────────────────────────────

/// Scene, surface and a clock view configured from `config`.
fn setup(
    config: &StudioConfig,
    surface: Surface,
    fps: f32,
    time_source: impl TimeSource + 'static,
) -> Result<(FrameDriver, ClockView)> {
    let mut scene = UiScene::new();
    let mut view = ClockView::new()
        .palette(config.palette()?)
        .text_size(config.text_size_px())
        .ring_style(config.ring_style())
        .padding(Edges::all(surface.padding))
        .time_source(time_source);

    if let Some(bytes) = load_font_bytes(config.font.path.as_deref())? {
        let font = scene.load_font(&bytes).context("loading numeral font")?;
        view = view.font(font);
    }

    let target = RasterTarget::new(surface.size, surface.size)
        .with_context(|| format!("allocating {0}x{0} surface", surface.size))?;
    Ok((FrameDriver::new(scene, target, fps), view))
}

// ── commands ──────────────────────────────────────────────────────────────

pub fn snapshot(config: &StudioConfig, args: &SnapshotArgs) -> Result<()> {
    let (mut driver, mut view) = setup(config, args.surface, 0.0, FixedClock::new(args.time))?;
    driver.render_frame(&mut view);
    driver
        .target()
        .save_png(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    log::info!("wrote {} ({})", args.out.display(), args.time);
    Ok(())
}

/// Output path of frame `index` in `dir`.
pub fn frame_path(dir: &std::path::Path, index: u32) -> PathBuf {
    dir.join(format!("frame_{index:04}.png"))
}

pub fn frames(config: &StudioConfig, args: &FramesArgs) -> Result<()> {
    if !(args.fps > 0.0) || !args.fps.is_finite() {
        bail!("--fps must be positive, got {}", args.fps);
    }
    let step_ms = (1000.0 / args.fps).round() as u64;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let clock = Rc::new(FixedClock::new(args.start));
    let (mut driver, mut view) = setup(config, args.surface, 0.0, Rc::clone(&clock))?;
    for i in 0..args.count {
        driver.render_frame(&mut view);
        let path = frame_path(&args.out_dir, i);
        driver
            .target()
            .save_png(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::debug!("frame {i} at {}", clock.now());
        clock.advance_millis(step_ms);
    }
    log::info!("wrote {} frames to {} ({step_ms} ms apart)", args.count, args.out_dir.display());
    Ok(())
}

pub fn live(config: &StudioConfig, args: &LiveArgs) -> Result<()> {
    let limit = args
        .seconds
        .map(|s| {
            Duration::try_from_secs_f32(s)
                .with_context(|| format!("--seconds must be a non-negative number of seconds, got {s}"))
        })
        .transpose()?;
    let (mut driver, mut view) = setup(config, args.surface, args.fps, SystemClock)?;
    let out = &args.out;
    let frames = driver.run(&mut view, limit, |target, _| {
        target.save_png(out).with_context(|| format!("writing {}", out.display()))?;
        Ok(())
    })?;
    log::info!("rendered {frames} live frames to {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use miclock_engine::time::WallTime;

    fn surface(size: u32) -> Surface {
        Surface { size, padding: 0.0 }
    }

    #[test]
    fn snapshot_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("face.png");
        let args = SnapshotArgs { time: "10:08:30".parse().unwrap(), surface: surface(64), out: out.clone() };
        snapshot(&StudioConfig::default(), &args).unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn frames_writes_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("seq");
        let args = FramesArgs {
            start: WallTime::MIDNIGHT,
            count: 3,
            fps: 10.0,
            surface: surface(32),
            out_dir: out_dir.clone(),
        };
        frames(&StudioConfig::default(), &args).unwrap();
        for i in 0..3 {
            assert!(frame_path(&out_dir, i).is_file());
        }
        assert!(!frame_path(&out_dir, 3).exists());
    }

    #[test]
    fn frames_rejects_zero_fps() {
        let dir = tempfile::tempdir().unwrap();
        let args = FramesArgs {
            start: WallTime::MIDNIGHT,
            count: 1,
            fps: 0.0,
            surface: surface(8),
            out_dir: dir.path().to_path_buf(),
        };
        assert!(frames(&StudioConfig::default(), &args).is_err());
    }

    #[test]
    fn live_stops_after_limit() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("live.png");
        let args = LiveArgs { out: out.clone(), seconds: Some(0.05), fps: 60.0, surface: surface(32) };
        live(&StudioConfig::default(), &args).unwrap();
        assert!(out.is_file());
    }

    #[test]
    fn live_rejects_unrepresentable_seconds() {
        let dir = tempfile::tempdir().unwrap();
        for seconds in [1e30, -1.0, f32::NAN, f32::INFINITY] {
            let args = LiveArgs { out: dir.path().join("live.png"), seconds: Some(seconds), fps: 60.0, surface: surface(8) };
            let err = live(&StudioConfig::default(), &args).unwrap_err();
            assert!(err.to_string().contains("--seconds"), "{seconds}: {err}");
        }
        assert!(!dir.path().join("live.png").exists());
    }

    #[test]
    fn zero_size_surface_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = SnapshotArgs { time: WallTime::MIDNIGHT, surface: surface(0), out: dir.path().join("x.png") };
        assert!(snapshot(&StudioConfig::default(), &args).is_err());
    }

    #[test]
    fn frame_paths_are_zero_padded() {
        let p = frame_path(std::path::Path::new("out"), 7);
        assert_eq!(p, PathBuf::from("out/frame_0007.png"));
    }
}
