use miclock_engine::time::WallTime;

/// Hand rotations in degrees, clockwise from 12 o'clock, each in `[0, 360)`.
///
/// Motion is continuous: milliseconds feed the second hand, which feeds the
/// minute hand, which feeds the hour hand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeAngles {
    pub hour_degree: f32,
    pub minute_degree: f32,
    pub second_degree: f32,
}

impl TimeAngles {
    pub fn from_wall_time(t: WallTime) -> Self {
        let second = t.second() as f64 + t.millisecond() as f64 / 1000.0;
        let minute = t.minute() as f64 + second / 60.0;
        let hour = (t.hour() % 12) as f64 + minute / 60.0;
        Self {
            hour_degree: turn_to_degrees(hour / 12.0),
            minute_degree: turn_to_degrees(minute / 60.0),
            second_degree: turn_to_degrees(second / 60.0),
        }
    }
}

impl From<WallTime> for TimeAngles {
    fn from(t: WallTime) -> Self {
        Self::from_wall_time(t)
    }
}

/// f32 rounding can land a value just under a full turn on 360.0 itself.
fn turn_to_degrees(fraction: f64) -> f32 {
    let deg = (fraction * 360.0) as f32;
    let folded = deg.rem_euclid(360.0);
    if folded >= 360.0 { 0.0 } else { folded }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> TimeAngles {
        TimeAngles::from_wall_time(WallTime::from_hms_milli(h, m, s, ms).unwrap())
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn midnight_is_all_zero() {
        assert_eq!(at(0, 0, 0, 0), TimeAngles::default());
    }

    #[test]
    fn half_past_midnight() {
        let a = at(0, 30, 0, 0);
        assert!(close(a.minute_degree, 180.0));
        assert!(close(a.hour_degree, 15.0));
        assert!(close(a.second_degree, 0.0));
    }

    #[test]
    fn six_oclock() {
        let a = at(6, 0, 0, 0);
        assert!(close(a.hour_degree, 180.0));
        assert!(close(a.minute_degree, 0.0));
    }

    #[test]
    fn afternoon_folds_onto_dial() {
        assert_eq!(at(18, 0, 0, 0), at(6, 0, 0, 0));
        assert_eq!(at(12, 0, 0, 0), TimeAngles::default());
    }

    #[test]
    fn one_millisecond_step() {
        let a = at(0, 0, 0, 0);
        let b = at(0, 0, 0, 1);
        assert!(close(b.second_degree - a.second_degree, 360.0 / 60_000.0));
        assert!(b.minute_degree > a.minute_degree);
        assert!(b.hour_degree > a.hour_degree);
    }

    #[test]
    fn minute_rollover_keeps_slow_hands_moving() {
        let a = at(12, 7, 59, 999);
        let b = at(12, 8, 0, 0);
        assert!(a.second_degree > 359.9);
        assert!(b.second_degree < 0.01);
        assert!(b.minute_degree > a.minute_degree);
        assert!(b.hour_degree > a.hour_degree);
        assert!(close(b.minute_degree - a.minute_degree, 360.0 / 3_600_000.0));
    }

    #[test]
    fn hour_rollover_keeps_hour_hand_moving() {
        let a = at(0, 59, 59, 999);
        let b = at(1, 0, 0, 0);
        assert!(b.minute_degree < a.minute_degree);
        assert!(b.hour_degree > a.hour_degree);
        assert!(close(b.hour_degree, 30.0));
    }

    #[test]
    fn last_millisecond_stays_below_full_turn() {
        let a = at(23, 59, 59, 999);
        for d in [a.hour_degree, a.minute_degree, a.second_degree] {
            assert!((0.0..360.0).contains(&d), "{d}");
        }
    }

    #[test]
    fn every_second_of_a_day_in_range() {
        let mut t = WallTime::MIDNIGHT;
        for _ in 0..(24 * 60 * 60) {
            let a = TimeAngles::from(t);
            for d in [a.hour_degree, a.minute_degree, a.second_degree] {
                assert!((0.0..360.0).contains(&d));
            }
            t = t.add_millis(1_000);
        }
    }
}
