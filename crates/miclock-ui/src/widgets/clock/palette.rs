use miclock_engine::paint::Color;

/// Colours of the face. Fixed once the renderer is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// View fill, ring track and tick marks.
    pub background: Color,
    /// Second and minute hands.
    pub light: Color,
    /// Numerals, decorative arcs and the hour hand.
    pub dark: Color,
}

impl Palette {
    pub const DEFAULT_BACKGROUND: u32 = 0xFF23_7EAD;
    pub const DEFAULT_LIGHT: u32 = 0xFFFF_FFFF;
    pub const DEFAULT_DARK: u32 = 0x80FF_FFFF;
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_argb_u32(Self::DEFAULT_BACKGROUND),
            light: Color::from_argb_u32(Self::DEFAULT_LIGHT),
            dark: Color::from_argb_u32(Self::DEFAULT_DARK),
        }
    }
}

/// How the scale ring track is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RingStyle {
    /// Solid background colour. Ring and ticks are then invisible against
    /// the view fill; only the hands, numerals and arcs show.
    #[default]
    Track,
    /// Sweep gradient from `dark` to `light` whose bright end sits at the
    /// second hand and fades behind it.
    Sweep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Palette::default();
        assert_eq!(p.background.to_srgba8(), [0x23, 0x7E, 0xAD, 0xFF]);
        assert_eq!(p.light.to_srgba8(), [0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(p.dark.to_srgba8()[3], 0x80);
        assert_eq!(RingStyle::default(), RingStyle::Track);
    }
}
