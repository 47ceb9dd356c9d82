use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots for an animation driver.
///
/// Delta time is clamped so a stalled host (debugger, minimized window) does
/// not produce pathological values. The clock also answers how long to wait
/// before the next frame when the host wants a fixed cadence.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. after the host resumes from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Number of frames ticked so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock as if the frame started at `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Time left in the current frame budget at `now` for a target rate of
    /// `fps` frames per second. Zero when the budget is spent or `fps` is
    /// not positive (uncapped). A rate too small to express as a frame
    /// period waits for `Duration::MAX`.
    pub fn remaining_budget(&self, fps: f32, now: Instant) -> Duration {
        if !(fps > 0.0) || !fps.is_finite() {
            return Duration::ZERO;
        }
        let budget = Duration::try_from_secs_f32(1.0 / fps).unwrap_or(Duration::MAX);
        budget.saturating_sub(now.saturating_duration_since(self.last))
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
