use std::path::Path;

use anyhow::{Context, Result};

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Font bytes for the numerals.
///
/// An explicitly configured font must be readable. Otherwise the first
/// system font found is used, and `None` means numerals fall back to
/// placeholder metrics and are not drawn.
pub fn load_font_bytes(configured: Option<&Path>) -> Result<Option<Vec<u8>>> {
    if let Some(path) = configured {
        let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        return Ok(Some(bytes));
    }
    let found = SYSTEM_FONTS.iter().find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        log::debug!("using system font {p}");
        Some(bytes)
    });
    if found.is_none() {
        log::warn!("no system font found; numerals will not be drawn (set [font] path in the config)");
    }
    Ok(found)
}
