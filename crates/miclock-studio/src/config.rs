//! Studio configuration file.
//!
//! ```toml
//! [palette]
//! background = "#237EAD"
//! light = "#FFFFFF"
//! dark = "#80FFFFFF"
//!
//! [text]
//! size_sp = 14.0
//! scaled_density = 1.0
//!
//! [ring]
//! style = "sweep"
//!
//! [font]
//! path = "/usr/share/fonts/TTF/DejaVuSans.ttf"
//! ```
//!
//! Every section and key is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use miclock_engine::paint::Color;
use miclock_ui::widgets::clock::{Palette, RingStyle};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub palette: PaletteConfig,
    pub text: TextConfig,
    pub ring: RingConfig,
    pub font: FontConfig,
}

/// Colours as `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub background: String,
    pub light: String,
    pub dark: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: "#237EAD".into(),
            light: "#FFFFFF".into(),
            dark: "#80FFFFFF".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Numeral size in scale-independent pixels.
    pub size_sp: f32,
    /// Pixels per sp.
    pub scaled_density: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { size_sp: 14.0, scaled_density: 1.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    pub style: RingStyleName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingStyleName {
    #[default]
    Track,
    Sweep,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// TrueType / OpenType file. System fonts are searched when unset.
    pub path: Option<PathBuf>,
}

impl StudioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        // Surface colour errors at load time rather than at first render.
        config.palette()?;
        Ok(config)
    }

    pub fn palette(&self) -> Result<Palette> {
        let parse = |key: &str, v: &str| -> Result<Color> {
            v.parse::<Color>().with_context(|| format!("palette.{key}"))
        };
        Ok(Palette {
            background: parse("background", &self.palette.background)?,
            light: parse("light", &self.palette.light)?,
            dark: parse("dark", &self.palette.dark)?,
        })
    }

    pub fn text_size_px(&self) -> f32 {
        sp_to_px(self.text.size_sp, self.text.scaled_density)
    }

    pub fn ring_style(&self) -> RingStyle {
        match self.ring.style {
            RingStyleName::Track => RingStyle::Track,
            RingStyleName::Sweep => RingStyle::Sweep,
        }
    }
}

/// Converts sp to whole pixels, truncating like an integer pixel size cast.
pub fn sp_to_px(sp: f32, scaled_density: f32) -> f32 {
    let px = (sp * scaled_density).trunc();
    if px.is_finite() { px.max(0.0) } else { 0.0 }
}
