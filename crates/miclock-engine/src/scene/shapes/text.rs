use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::{FontId, FontSystem};

/// Single-line text run, positioned by its baseline like a canvas `drawText`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Pixel size the font is laid out at.
    pub size: f32,
    pub color: Color,
    /// Pen position: left end of the baseline.
    pub origin: Vec2,
}

impl TextCmd {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) -> Self {
        Self { text: text.into(), font, size, color, origin }
    }

    /// Where the run's ink lands, in command space.
    pub fn ink_rect(&self, fonts: &FontSystem) -> Rect {
        fonts.text_bounds(&self.text, self.font, self.size).at(self.origin)
    }
}

impl DrawList {
    #[inline]
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd::new(text, font, size, color, origin)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_sits_above_baseline() {
        let cmd = TextCmd::new("12", FontId::default(), 20.0, Color::white(), Vec2::new(10.0, 50.0));
        let r = cmd.ink_rect(&FontSystem::new());
        assert!((r.bottom() - 50.0).abs() < 1e-4);
        assert!(r.top() < 50.0);
        assert_eq!(r.left(), 10.0);
    }
}
