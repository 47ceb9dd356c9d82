use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miclock_engine::time::WallTime;

/// Renders the MiClock face to PNG files.
#[derive(Debug, Parser)]
#[command(name = "miclock-studio", version, about)]
pub struct Cli {
    /// TOML file with palette, text, ring and font settings.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// One frame at a fixed time.
    Snapshot(SnapshotArgs),
    /// A numbered frame sequence starting at a fixed time.
    Frames(FramesArgs),
    /// Follow the system clock, rewriting one PNG every frame.
    Live(LiveArgs),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct Surface {
    /// Edge length of the square surface, in pixels.
    #[arg(long, default_value_t = 800)]
    pub size: u32,

    /// View padding on every side, in pixels.
    #[arg(long, default_value_t = 0.0)]
    pub padding: f32,
}

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Time of day, `HH:MM[:SS[.mmm]]`.
    #[arg(long, default_value = "10:08:30")]
    pub time: WallTime,

    #[command(flatten)]
    pub surface: Surface,

    #[arg(long, default_value = "miclock.png")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct FramesArgs {
    #[arg(long, default_value = "00:00:00")]
    pub start: WallTime,

    #[arg(long, default_value_t = 60)]
    pub count: u32,

    /// Simulated frame rate; sets the time step between frames.
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    #[command(flatten)]
    pub surface: Surface,

    #[arg(long, default_value = "frames")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct LiveArgs {
    #[arg(long, default_value = "miclock-live.png")]
    pub out: PathBuf,

    /// Stop after this many seconds. Runs until interrupted when omitted.
    #[arg(long)]
    pub seconds: Option<f32>,

    /// Target frame rate. Zero renders as fast as possible.
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    #[command(flatten)]
    pub surface: Surface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_defaults() {
        let cli = Cli::try_parse_from(["miclock-studio", "snapshot"]).unwrap();
        let Command::Snapshot(args) = cli.command else { panic!("expected snapshot") };
        assert_eq!(args.time, WallTime::from_hms_milli(10, 8, 30, 0).unwrap());
        assert_eq!(args.surface.size, 800);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "miclock-studio", "frames", "--start", "11:59:59.500", "--count", "3", "-vv", "--config", "face.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("face.toml")));
        let Command::Frames(args) = cli.command else { panic!("expected frames") };
        assert_eq!(args.start.millisecond(), 500);
        assert_eq!(args.count, 3);
    }

    #[test]
    fn rejects_bad_time() {
        assert!(Cli::try_parse_from(["miclock-studio", "snapshot", "--time", "25:00"]).is_err());
    }

    #[test]
    fn live_seconds_optional() {
        let cli = Cli::try_parse_from(["miclock-studio", "live", "--seconds", "1.5", "--size", "256"]).unwrap();
        let Command::Live(args) = cli.command else { panic!("expected live") };
        assert_eq!(args.seconds, Some(1.5));
        assert_eq!(args.surface.size, 256);
    }
}
