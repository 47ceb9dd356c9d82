use std::fmt;

use crate::coords::{Rect, Vec2};

/// Advance per character, as a fraction of the font size, used when no font
/// is loaded.
const FALLBACK_ADVANCE: f32 = 0.55;
/// Ink height (cap/digit height) as a fraction of the font size, used when no
/// font is loaded.
const FALLBACK_INK_HEIGHT: f32 = 0.7;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default id refers to the first font loaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct FontId(pub(crate) usize);

/// Tight ink bounds of a text run, relative to its pen origin on the baseline.
///
/// Y grows downward, so glyphs sitting on the baseline have `top < 0` and
/// `bottom == 0`. This is the box a platform `getTextBounds` reports.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    #[inline]
    pub fn width(self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.bottom - self.top
    }

    /// Bounds positioned at a concrete baseline origin.
    #[inline]
    pub fn at(self, origin: Vec2) -> Rect {
        Rect::from_ltrb(origin.x + self.left, origin.y + self.top, origin.x + self.right, origin.y + self.bottom)
    }
}

/// One glyph of a laid-out single-line run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacedGlyph {
    pub ch: char,
    /// Pen x relative to the run origin.
    pub pen_x: f32,
    pub metrics: fontdue::Metrics,
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the host and
/// borrowed by painters (for metrics) and the raster backend (for glyphs).
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Lays out `text` on a single line with kerning.
    pub(crate) fn glyph_run(&self, text: &str, id: FontId, size: f32) -> Vec<PlacedGlyph> {
        let Some(font) = self.get(id) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(text.len());
        let mut pen_x = 0.0f32;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(p) = prev {
                pen_x += font.horizontal_kern(p, ch, size).unwrap_or(0.0);
            }
            let metrics = font.metrics(ch, size);
            out.push(PlacedGlyph { ch, pen_x, metrics });
            pen_x += metrics.advance_width;
            prev = Some(ch);
        }
        out
    }

    /// Tight ink bounds of `text` relative to its baseline origin.
    ///
    /// Glyphs without ink (spaces) advance the pen but do not extend the box.
    /// An empty string has empty bounds. Without a loaded font the bounds fall
    /// back to fixed proportions of `size`, so layout stays deterministic.
    #[must_use]
    pub fn text_bounds(&self, text: &str, id: FontId, size: f32) -> TextBounds {
        let size = size.max(0.0);
        if text.is_empty() {
            return TextBounds::default();
        }
        if self.get(id).is_none() {
            let n = text.chars().count() as f32;
            return TextBounds {
                left: 0.0,
                top: -FALLBACK_INK_HEIGHT * size,
                right: FALLBACK_ADVANCE * size * n,
                bottom: 0.0,
            };
        }

        let mut ink: Option<TextBounds> = None;
        for g in self.glyph_run(text, id, size) {
            let m = g.metrics;
            if m.width == 0 || m.height == 0 {
                continue;
            }
            let gb = TextBounds {
                left: g.pen_x + m.xmin as f32,
                top: -(m.ymin as f32 + m.height as f32),
                right: g.pen_x + m.xmin as f32 + m.width as f32,
                bottom: -(m.ymin as f32),
            };
            ink = Some(match ink {
                None => gb,
                Some(b) => TextBounds {
                    left: b.left.min(gb.left),
                    top: b.top.min(gb.top),
                    right: b.right.max(gb.right),
                    bottom: b.bottom.max(gb.bottom),
                },
            });
        }
        ink.unwrap_or_default()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_bounds_scale_with_size() {
        let fs = FontSystem::new();
        let small = fs.text_bounds("12", FontId::default(), 10.0);
        let large = fs.text_bounds("12", FontId::default(), 20.0);
        assert!((large.width() - 2.0 * small.width()).abs() < 1e-4);
        assert!((large.height() - 2.0 * small.height()).abs() < 1e-4);
        assert!(small.top < 0.0);
        assert_eq!(small.bottom, 0.0);
    }

    #[test]
    fn fallback_two_digits_wider_than_one() {
        let fs = FontSystem::new();
        let one = fs.text_bounds("3", FontId::default(), 14.0);
        let two = fs.text_bounds("12", FontId::default(), 14.0);
        assert!(two.width() > one.width());
        assert_eq!(two.height(), one.height());
    }

    #[test]
    fn empty_text_has_empty_bounds() {
        let fs = FontSystem::new();
        let b = fs.text_bounds("", FontId::default(), 14.0);
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
    }

    #[test]
    fn bounds_at_offsets_by_origin() {
        let b = TextBounds { left: 1.0, top: -10.0, right: 9.0, bottom: 0.0 };
        assert_eq!(b.at(Vec2::new(100.0, 50.0)), Rect::new(101.0, 40.0, 8.0, 10.0));
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fs = FontSystem::new();
        assert!(fs.load_font(&[0, 1, 2, 3]).is_err());
        assert!(fs.is_empty());
    }
}
