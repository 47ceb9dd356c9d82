use miclock_engine::coords::Vec2;
use miclock_engine::path::Path;

use super::angles::TimeAngles;
use super::geometry::FaceGeometry;

/// Distance of the blade root below the centre, as a fraction of the radius.
pub const BLADE_ROOT: f32 = 0.03;
/// Radius of the pivot cap circle, as a fraction of the radius.
pub const PIVOT_CAP_RADIUS: f32 = 0.03;

/// Shape and layering constants of one hand, as fractions of the radius.
///
/// `tip_reach` and `curve_control` are measured down from
/// [`FaceGeometry::hand_origin_y`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSpec {
    pub base_half_width: f32,
    pub tip_half_width: f32,
    pub tip_reach: f32,
    pub curve_control: f32,
    pub cap_stroke: f32,
    /// Multiplier on the canvas offset vector for this hand's layer.
    pub offset_multiplier: f32,
}

impl HandSpec {
    /// Blade outline pointing at 12 o'clock.
    pub fn blade(&self, geom: &FaceGeometry, numeral_height: f32) -> Path {
        let r = geom.radius;
        let c = geom.center();
        let origin_y = geom.hand_origin_y(numeral_height);
        let root_y = c.y - BLADE_ROOT * r;
        let tip_y = origin_y + self.tip_reach * r;

        let mut path = Path::new();
        path.move_to(Vec2::new(c.x - self.base_half_width * r, root_y))
            .line_to(Vec2::new(c.x - self.tip_half_width * r, tip_y))
            .quad_to(
                Vec2::new(c.x, origin_y + self.curve_control * r),
                Vec2::new(c.x + self.tip_half_width * r, tip_y),
            )
            .line_to(Vec2::new(c.x + self.base_half_width * r, root_y))
            .close();
        path
    }
}

/// The three hands, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    Second,
    Hour,
    Minute,
}

impl HandKind {
    /// Bottom to top.
    pub const DRAW_ORDER: [HandKind; 3] = [HandKind::Second, HandKind::Hour, HandKind::Minute];

    pub const fn spec(self) -> HandSpec {
        match self {
            HandKind::Second => HandSpec {
                base_half_width: 0.018,
                tip_half_width: 0.009,
                tip_reach: 0.48,
                curve_control: 0.46,
                cap_stroke: 0.01,
                offset_multiplier: 4.0,
            },
            HandKind::Hour => HandSpec {
                base_half_width: 0.018,
                tip_half_width: 0.009,
                tip_reach: 0.48,
                curve_control: 0.46,
                cap_stroke: 0.01,
                offset_multiplier: 1.2,
            },
            HandKind::Minute => HandSpec {
                base_half_width: 0.010,
                tip_half_width: 0.008,
                tip_reach: 0.365,
                curve_control: 0.345,
                cap_stroke: 0.02,
                offset_multiplier: 2.0,
            },
        }
    }

    #[inline]
    pub fn degree(self, angles: &TimeAngles) -> f32 {
        match self {
            HandKind::Second => angles.second_degree,
            HandKind::Hour => angles.hour_degree,
            HandKind::Minute => angles.minute_degree,
        }
    }

    #[inline]
    const fn slot(self) -> usize {
        match self {
            HandKind::Second => 0,
            HandKind::Hour => 1,
            HandKind::Minute => 2,
        }
    }
}

/// What a cached set of blades was built for.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheTag {
    geometry: FaceGeometry,
    numeral_height: f32,
}

/// Blade outlines, rebuilt lazily when the geometry they were built for
/// no longer matches.
#[derive(Debug, Default)]
pub struct HandCache {
    valid_for: Option<CacheTag>,
    blades: [Path; 3],
    builds: u64,
}

impl HandCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the blades have been (re)built.
    #[inline]
    pub fn builds(&self) -> u64 {
        self.builds
    }

    pub fn is_valid_for(&self, geometry: &FaceGeometry, numeral_height: f32) -> bool {
        self.valid_for == Some(CacheTag { geometry: *geometry, numeral_height })
    }

    /// Returns the blade for `kind`, rebuilding all three first if stale.
    pub fn blade(&mut self, kind: HandKind, geometry: &FaceGeometry, numeral_height: f32) -> &Path {
        if !self.is_valid_for(geometry, numeral_height) {
            self.rebuild(geometry, numeral_height);
        }
        &self.blades[kind.slot()]
    }

    fn rebuild(&mut self, geometry: &FaceGeometry, numeral_height: f32) {
        for kind in HandKind::DRAW_ORDER {
            self.blades[kind.slot()] = kind.spec().blade(geometry, numeral_height);
        }
        self.valid_for = Some(CacheTag { geometry: *geometry, numeral_height });
        self.builds += 1;
        log::debug!("hand paths rebuilt for radius {:.1} (build {})", geometry.radius, self.builds);
    }
}
