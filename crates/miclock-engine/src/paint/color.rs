use std::fmt;
use std::str::FromStr;

/// Error returned when a colour literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color parse error: {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Channels are kept in sRGB encoding; the raster backend blends in the same
/// space a platform canvas does.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a color from a packed `0xAARRGGBB` integer, the layout
    /// platform colour ints use.
    #[inline]
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Parses `#RRGGBB` or `#AARRGGBB` (alpha first).
    pub fn parse_hex(src: &str) -> Result<Self, ColorParseError> {
        let hex = src
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(format!("expected leading '#', got {src:?}")))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(format!("non-hex digit in {src:?}")));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| ColorParseError(format!("{src:?}: {e}")))?;
        match hex.len() {
            6 => Ok(Self::from_argb_u32(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb_u32(value)),
            n => Err(ColorParseError(format!(
                "color literal must be #rrggbb or #aarrggbb, got {n} digits"
            ))),
        }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha bytes, rounded.
    pub fn to_srgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Linear interpolation between two premultiplied colors.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb_is_opaque() {
        let c = Color::parse_hex("#237EAD").unwrap();
        assert_eq!(c.to_srgba8(), [0x23, 0x7E, 0xAD, 0xFF]);
    }

    #[test]
    fn parse_argb_puts_alpha_first() {
        let c = Color::parse_hex("#80ffffff").unwrap();
        let [r, g, b, a] = c.to_srgba8();
        assert_eq!((r, g, b), (255, 255, 255));
        assert_eq!(a, 0x80);
        // Stored premultiplied.
        assert!((c.r - c.a).abs() < 1e-6);
    }

    #[test]
    fn parse_rejects_bad_literals() {
        assert!(Color::parse_hex("237EAD").is_err());
        assert!(Color::parse_hex("#12345").is_err());
        assert!(Color::parse_hex("#zz0000").is_err());
        assert!("#+12345".parse::<Color>().is_err());
    }

    #[test]
    fn argb_int_matches_hex() {
        assert_eq!(Color::from_argb_u32(0xFF23_7EAD), Color::parse_hex("#237EAD").unwrap());
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::transparent();
        let b = Color::white();
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert!((a.lerp(b, 0.5).a - 0.5).abs() < 1e-6);
    }
}
