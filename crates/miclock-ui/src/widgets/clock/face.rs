use miclock_engine::coords::{Transform, Vec2};
use miclock_engine::paint::{Color, Paint, SweepGradient};
use miclock_engine::text::FontId;
use miclock_engine::time::WallTime;

use crate::constraints::Edges;
use crate::painter::Painter;

use super::angles::TimeAngles;
use super::geometry::{DECOR_ARC_STROKE, FaceGeometry};
use super::hands::{HandCache, HandKind, PIVOT_CAP_RADIUS};
use super::palette::{Palette, RingStyle};
use super::ticks::{tick_angles, tick_segment};

/// Label used to measure the numeral height.
const REFERENCE_NUMERAL: &str = "3";
/// Decorative arcs: one per quadrant, leaving 10° gaps at the numerals.
const DECOR_ARC_STARTS: [f32; 4] = [5.0, 95.0, 185.0, 275.0];
const DECOR_ARC_SWEEP: f32 = 80.0;
/// Layer offset multiplier of the scale ring.
const RING_OFFSET_MULTIPLIER: f32 = 1.0;

/// Draws the clock face for a given time into a [`Painter`].
///
/// Geometry is derived in [`on_size_change`](Self::on_size_change) and
/// kept until the size or padding changes; hand outlines are cached
/// against that geometry. [`render_frame`](Self::render_frame) is
/// otherwise a pure function of the time.
///
/// Coordinates are surface-local: `(0, 0)` is the top-left of the face's
/// surface. Hosts translate the painter to place it.
#[derive(Debug)]
pub struct ClockFaceRenderer {
    palette: Palette,
    text_size: f32,
    font: FontId,
    ring_style: RingStyle,
    canvas_offset: Vec2,
    geometry: FaceGeometry,
    hands: HandCache,
}

impl ClockFaceRenderer {
    pub fn new(palette: Palette, text_size: f32) -> Self {
        Self {
            palette,
            text_size: text_size.max(0.0),
            font: FontId::default(),
            ring_style: RingStyle::default(),
            canvas_offset: Vec2::zero(),
            geometry: FaceGeometry::default(),
            hands: HandCache::new(),
        }
    }

    pub fn font(mut self, font: FontId) -> Self { self.font = font; self }
    pub fn ring_style(mut self, style: RingStyle) -> Self { self.ring_style = style; self }
    /// Parallax vector; each layer is shifted by it times its multiplier.
    pub fn canvas_offset(mut self, offset: Vec2) -> Self { self.canvas_offset = offset; self }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    #[inline]
    pub fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    /// How many times the hand outlines have been built.
    #[inline]
    pub fn hand_builds(&self) -> u64 {
        self.hands.builds()
    }

    /// Recomputes the face geometry. Returns `true` if it changed.
    ///
    /// Cached hand outlines are not touched here; they are rebuilt on the
    /// next frame only if the geometry they were built for differs.
    pub fn on_size_change(&mut self, width: f32, height: f32, padding: Edges) -> bool {
        let next = FaceGeometry::compute(width, height, padding);
        if next == self.geometry {
            return false;
        }
        log::debug!(
            "clock geometry {width}x{height}: radius {:.2}, scale length {:.2}",
            next.radius,
            next.scale_length
        );
        self.geometry = next;
        true
    }

    /// Records one frame for `time`, then asks the host for the next.
    pub fn render_frame(&mut self, time: WallTime, painter: &mut Painter<'_>) {
        let angles = TimeAngles::from_wall_time(time);
        let numeral_height = painter.text_bounds(REFERENCE_NUMERAL, self.font, self.text_size).height();

        self.draw_numerals(painter, numeral_height);
        self.draw_decor_arcs(painter, numeral_height);
        self.draw_scale(painter, numeral_height, &angles);
        self.draw_hands(painter, numeral_height, &angles);

        painter.request_redraw();
    }

    fn draw_numerals(&self, painter: &mut Painter<'_>, numeral_height: f32) {
        let g = &self.geometry;
        let half = numeral_height / 2.0;
        let mid_x = g.width / 2.0;
        let mid_y = g.height / 2.0;

        for label in ["12", "3", "6", "9"] {
            let b = painter.text_bounds(label, self.font, self.text_size);
            let w = b.width();
            let origin = match label {
                "12" => Vec2::new(mid_x - w / 2.0, g.inset_top + b.height()),
                "3" => Vec2::new(g.width - g.inset_right - half - w / 2.0, mid_y + half),
                "6" => Vec2::new(mid_x - w / 2.0, g.height - g.inset_bottom),
                _ => Vec2::new(g.inset_left + half - w / 2.0, mid_y + half),
            };
            painter.text(label, self.font, self.text_size, self.palette.dark, origin);
        }
    }

    fn draw_decor_arcs(&self, painter: &mut Painter<'_>, numeral_height: f32) {
        let oval = self.geometry.decor_oval(numeral_height);
        for start in DECOR_ARC_STARTS {
            painter.stroke_arc(oval, start, DECOR_ARC_SWEEP, self.palette.dark, DECOR_ARC_STROKE);
        }
    }

    fn draw_scale(&self, painter: &mut Painter<'_>, numeral_height: f32, angles: &TimeAngles) {
        let g = &self.geometry;
        let center = g.center();
        let ring = match self.ring_style {
            RingStyle::Track => Paint::Solid(self.palette.background),
            // Arc angles start at 3 o'clock; the hand's start at 12.
            RingStyle::Sweep => SweepGradient::two_stop(
                center,
                angles.second_degree - 90.0,
                self.palette.dark,
                self.palette.light,
            )
            .into(),
        };
        let (from, to) = tick_segment(g, numeral_height);
        let tick_color = self.palette.background;

        painter.with_transform(self.layer_offset(RING_OFFSET_MULTIPLIER), |p| {
            p.stroke_arc(g.ring_oval(numeral_height), 0.0, 360.0, ring, g.ring_stroke());
            for deg in tick_angles() {
                p.with_transform(Transform::rotate_about(deg, center), |p| {
                    p.line(from, to, g.tick_stroke, tick_color);
                });
            }
        });
    }

    fn draw_hands(&mut self, painter: &mut Painter<'_>, numeral_height: f32, angles: &TimeAngles) {
        let center = self.geometry.center();
        let r = self.geometry.radius;
        for kind in HandKind::DRAW_ORDER {
            let spec = kind.spec();
            let color = self.hand_color(kind);
            let blade = self.hands.blade(kind, &self.geometry, numeral_height).clone();
            let t = self
                .layer_offset(spec.offset_multiplier)
                .then(Transform::rotate_about(kind.degree(angles), center));

            painter.with_transform(t, |p| {
                p.fill_path(blade, color);
                p.stroke_circle(center, PIVOT_CAP_RADIUS * r, color, spec.cap_stroke * r);
            });
        }
    }

    fn hand_color(&self, kind: HandKind) -> Color {
        match kind {
            HandKind::Hour => self.palette.dark,
            HandKind::Second | HandKind::Minute => self.palette.light,
        }
    }

    fn layer_offset(&self, multiplier: f32) -> Transform {
        let d = self.canvas_offset * multiplier;
        Transform::translate(d.x, d.y)
    }
}
