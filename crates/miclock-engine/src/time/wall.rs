use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};

/// Error returned when a time of day is out of range or malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError(pub String);

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "time parse error: {}", self.0)
    }
}

impl std::error::Error for TimeParseError {}

/// Time of day with millisecond resolution.
///
/// Hours run 0–23; the clock face folds them onto a 12-hour dial.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallTime(NaiveTime);

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Accepted input layouts, tried in order.
const FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];

impl WallTime {
    pub const MIDNIGHT: WallTime = WallTime(NaiveTime::MIN);

    /// Validated constructor. Leap-second milliseconds (1000+) are rejected.
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, millisecond: u32) -> Result<Self, TimeParseError> {
        if millisecond > 999 {
            return Err(TimeParseError(format!("millisecond {millisecond} out of range 0..=999")));
        }
        NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)
            .map(Self)
            .ok_or_else(|| TimeParseError(format!("{hour}:{minute}:{second}.{millisecond} is not a time of day")))
    }

    /// Builds from any chrono time-of-day value, truncated to milliseconds.
    /// A leap second is clamped into the last millisecond of its second.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        let millisecond = (t.nanosecond() / 1_000_000).min(999);
        Self(NaiveTime::from_hms_milli_opt(t.hour(), t.minute(), t.second(), millisecond).unwrap_or(NaiveTime::MIN))
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn second(self) -> u32 {
        self.0.second()
    }

    pub fn millisecond(self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }

    /// Time `ms` milliseconds later, wrapping past midnight.
    #[must_use]
    pub fn add_millis(self, ms: u64) -> Self {
        let delta = TimeDelta::milliseconds((ms % MS_PER_DAY) as i64);
        Self(self.0.overflowing_add_signed(delta).0)
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S%.3f"))
    }
}

/// Accepts `HH:MM`, `HH:MM:SS` and `HH:MM:SS.fff`. Fractions finer than a
/// millisecond are truncated.
impl FromStr for WallTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
            .ok_or_else(|| TimeParseError(format!("expected HH:MM[:SS[.fff]], got {s:?}")))?;
        if parsed.nanosecond() >= 1_000_000_000 {
            return Err(TimeParseError(format!("leap second in {s:?}")));
        }
        Ok(Self::from_timelike(&parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32, ms: u32) -> WallTime {
        WallTime::from_hms_milli(h, m, s, ms).unwrap()
    }

    #[test]
    fn parse_full_form() {
        let t: WallTime = "10:08:36.250".parse().unwrap();
        assert_eq!(t, hms(10, 8, 36, 250));
        assert_eq!((t.hour(), t.minute(), t.second(), t.millisecond()), (10, 8, 36, 250));
    }

    #[test]
    fn parse_short_forms() {
        assert_eq!("6:00".parse::<WallTime>().unwrap(), hms(6, 0, 0, 0));
        assert_eq!("23:59:59".parse::<WallTime>().unwrap().second(), 59);
        assert_eq!("00:00:01.5".parse::<WallTime>().unwrap().millisecond(), 500);
    }

    #[test]
    fn parse_truncates_sub_millisecond() {
        assert_eq!("12:00:00.1239".parse::<WallTime>().unwrap(), hms(12, 0, 0, 123));
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        for bad in ["24:00", "12:60", "12:00:60", "12", "a:b", "12:00.5", "1:2:3:4", "", "noon"] {
            assert!(bad.parse::<WallTime>().is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn constructor_rejects_leap_millis() {
        assert!(WallTime::from_hms_milli(0, 0, 59, 1500).is_err());
        assert!(WallTime::from_hms_milli(24, 0, 0, 0).is_err());
    }

    #[test]
    fn display_round_trips() {
        let t = hms(7, 5, 3, 9);
        assert_eq!(t.to_string(), "07:05:03.009");
        assert_eq!(t.to_string().parse::<WallTime>().unwrap(), t);
    }

    #[test]
    fn add_millis_wraps_midnight() {
        assert_eq!(hms(23, 59, 59, 999).add_millis(1), WallTime::MIDNIGHT);
        assert_eq!(hms(1, 0, 0, 0).add_millis(MS_PER_DAY * 3 + 500), hms(1, 0, 0, 500));
    }

    #[test]
    fn from_timelike_reads_chrono() {
        let nt = NaiveTime::from_hms_milli_opt(14, 30, 15, 750).unwrap();
        assert_eq!(WallTime::from_timelike(&nt), hms(14, 30, 15, 750));
    }

    #[test]
    fn from_timelike_clamps_leap_second() {
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_400).unwrap();
        assert_eq!(WallTime::from_timelike(&leap), hms(23, 59, 59, 999));
    }
}
