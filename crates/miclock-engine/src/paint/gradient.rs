use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]; stops are assumed sorted by `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Angular (sweep) gradient around `center`.
///
/// Semantics:
/// - `t = 0` sits at `start_angle` degrees (0° = +X, clockwise on screen)
/// - `t` grows clockwise and reaches 1 after a full turn
/// - stops define premultiplied colors
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    pub center: Vec2,
    pub start_angle: f32,
    pub stops: Vec<ColorStop>,
}

impl SweepGradient {
    pub fn new(center: Vec2, start_angle: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, start_angle, stops }
    }

    /// Two-stop sweep from `from` to `to`.
    pub fn two_stop(center: Vec2, start_angle: f32, from: Color, to: Color) -> Self {
        Self::new(center, start_angle, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.start_angle.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }

    /// Color at absolute angle `degrees`.
    pub fn color_at(&self, degrees: f32) -> Color {
        let t = ((degrees - self.start_angle) / 360.0).rem_euclid(1.0);
        self.color_at_t(t)
    }

    /// Color at gradient parameter `t` in [0, 1].
    pub fn color_at_t(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::transparent();
        };
        if t <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                let local = if span > 0.0 { (t - a.t) / span } else { 1.0 };
                return a.color.lerp(b.color, local);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> SweepGradient {
        SweepGradient::two_stop(Vec2::zero(), 90.0, Color::transparent(), Color::white())
    }

    #[test]
    fn starts_at_first_stop() {
        assert_eq!(sweep().color_at(90.0), Color::transparent());
    }

    #[test]
    fn halfway_round_is_midpoint() {
        let c = sweep().color_at(270.0);
        assert!((c.a - 0.5).abs() < 1e-5);
    }

    #[test]
    fn wraps_angles_below_start() {
        // 45° is 315° past the 90° start.
        let c = sweep().color_at(45.0);
        assert!((c.a - 315.0 / 360.0).abs() < 1e-5);
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = SweepGradient::new(Vec2::zero(), 0.0, vec![ColorStop::new(0.0, Color::white())]);
        assert!(!g.is_valid());
    }
}
