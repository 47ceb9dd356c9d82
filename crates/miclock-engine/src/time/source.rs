use std::cell::Cell;

use super::WallTime;

/// Supplies the current time of day.
///
/// The clock face reads its source once per frame. Hosts pick the source:
/// the system clock for live display, a fixed or stepped clock for snapshots,
/// frame sequences and tests.
pub trait TimeSource {
    fn now(&self) -> WallTime;
}

/// Local wall-clock time via `chrono`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> WallTime {
        WallTime::from_timelike(&chrono::Local::now())
    }
}

/// A clock that reports a settable time; it only moves when told to.
#[derive(Debug, Default)]
pub struct FixedClock {
    time: Cell<WallTime>,
}

impl FixedClock {
    pub fn new(time: WallTime) -> Self {
        Self { time: Cell::new(time) }
    }

    /// Moves the clock forward by `ms` milliseconds.
    pub fn advance_millis(&self, ms: u64) {
        self.time.set(self.time.get().add_millis(ms));
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> WallTime {
        self.time.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::rc::Rc<T> {
    fn now(&self) -> WallTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_only_moves_when_advanced() {
        let clock = FixedClock::new(WallTime::from_hms_milli(1, 2, 3, 4).unwrap());
        assert_eq!(clock.now(), clock.now());
        clock.advance_millis(996);
        assert_eq!(clock.now(), WallTime::from_hms_milli(1, 2, 4, 0).unwrap());
    }

    #[test]
    fn system_clock_is_in_range() {
        let t = SystemClock.now();
        assert!(t.hour() < 24 && t.minute() < 60 && t.second() < 60 && t.millisecond() < 1000);
    }
}
