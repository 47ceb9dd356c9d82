use miclock_engine::coords::Vec2;

use super::geometry::FaceGeometry;

/// Marks on the scale ring.
pub const TICK_COUNT: usize = 200;

/// Absolute rotation of tick `i`, degrees clockwise from 12 o'clock.
///
/// Computed per tick rather than accumulated, so tick `TICK_COUNT` lands
/// exactly on 360°.
#[inline]
pub fn tick_angle(i: usize) -> f32 {
    i as f32 * 360.0 / TICK_COUNT as f32
}

pub fn tick_angles() -> impl Iterator<Item = f32> {
    (0..TICK_COUNT).map(tick_angle)
}

/// The unrotated tick: a vertical segment at 12 o'clock crossing the ring.
pub fn tick_segment(geom: &FaceGeometry, numeral_height: f32) -> (Vec2, Vec2) {
    let x = geom.width / 2.0;
    let base = geom.hand_origin_y(numeral_height);
    (Vec2::new(x, base + geom.scale_length), Vec2::new(x, base + 2.0 * geom.scale_length))
}
