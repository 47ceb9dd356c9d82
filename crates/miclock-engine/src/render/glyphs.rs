//! Glyph blitting for `DrawCmd::Text`.

use resvg::tiny_skia as sk;

use crate::coords::Transform;
use crate::scene::TextCmd;
use crate::text::FontSystem;

/// Blends `cmd` into `pixmap` source-over.
///
/// The run origin goes through `transform`; glyphs stay axis-aligned and are
/// scaled by the transform's length scale. Returns `false` when the font is
/// not loaded and nothing was drawn.
pub(super) fn blit_text(pixmap: &mut sk::Pixmap, cmd: &TextCmd, transform: Transform, fonts: &FontSystem) -> bool {
    let Some(font) = fonts.get(cmd.font) else {
        return false;
    };
    let scale = transform.length_scale();
    let size = cmd.size * scale;
    if !(size > 0.0) || cmd.color.a <= 0.0 {
        return true;
    }
    let origin = transform.apply(cmd.origin);
    let (w, h) = (pixmap.width() as i32, pixmap.height() as i32);
    let color = cmd.color;

    for g in fonts.glyph_run(&cmd.text, cmd.font, size) {
        let (m, coverage) = font.rasterize(g.ch, size);
        if m.width == 0 || m.height == 0 {
            continue;
        }
        let x0 = (origin.x + g.pen_x + m.xmin as f32).round() as i32;
        let y0 = (origin.y - (m.ymin as f32 + m.height as f32)).round() as i32;

        let pixels = pixmap.pixels_mut();
        for row in 0..m.height as i32 {
            let y = y0 + row;
            if y < 0 || y >= h {
                continue;
            }
            for col in 0..m.width as i32 {
                let x = x0 + col;
                if x < 0 || x >= w {
                    continue;
                }
                let cov = coverage[(row * m.width as i32 + col) as usize] as f32 / 255.0;
                if cov <= 0.0 {
                    continue;
                }
                let idx = (y * w + x) as usize;
                pixels[idx] = blend_over(pixels[idx], color, cov);
            }
        }
    }
    true
}

/// Premultiplied source-over of `color * coverage` onto `dst`.
fn blend_over(dst: sk::PremultipliedColorU8, color: crate::paint::Color, coverage: f32) -> sk::PremultipliedColorU8 {
    let sa = color.a * coverage;
    let inv = 1.0 - sa;
    let ch = |src: f32, d: u8| ((src * coverage * 255.0) + d as f32 * inv).round().clamp(0.0, 255.0) as u8;
    let a = ch(color.a, dst.alpha());
    let r = ch(color.r, dst.red()).min(a);
    let g = ch(color.g, dst.green()).min(a);
    let b = ch(color.b, dst.blue()).min(a);
    sk::PremultipliedColorU8::from_rgba(r, g, b, a).unwrap_or(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn full_coverage_replaces_with_opaque_color() {
        let dst = sk::PremultipliedColorU8::from_rgba(0, 0, 0, 255).unwrap();
        let out = blend_over(dst, Color::white(), 1.0);
        assert_eq!((out.red(), out.green(), out.blue(), out.alpha()), (255, 255, 255, 255));
    }

    #[test]
    fn zero_alpha_source_keeps_destination() {
        let dst = sk::PremultipliedColorU8::from_rgba(10, 20, 30, 255).unwrap();
        let out = blend_over(dst, Color::transparent(), 1.0);
        assert_eq!((out.red(), out.green(), out.blue()), (10, 20, 30));
    }
}
