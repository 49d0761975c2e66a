//! Theme palette configuration.
//!
//! The gradient batch reads a JSON document exported by the app's theme
//! tooling, mapping theme name -> appearance mode -> a short list of hex
//! colors. Two historical export shapes are in circulation and both must be
//! accepted: a direct list of hex strings, and an "enhanced" object that
//! wraps the list under a `colors` key.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::Mode;

/// Preferred export file, probed first.
pub const ENHANCED_FILE: &str = "enhanced_theme_data.json";
/// Fallback export file.
pub const BASIC_FILE: &str = "theme_colors.json";

/// Top-level configuration document: `{ "themes": { name: { mode: palette } } }`.
///
/// A `BTreeMap` keeps batch iteration order stable across runs.
#[derive(Debug, Deserialize)]
pub struct ThemeConfig {
    pub themes: BTreeMap<String, ThemeEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeEntry {
    #[serde(default)]
    pub dark: Option<PaletteEntry>,
    #[serde(default)]
    pub light: Option<PaletteEntry>,
}

/// One palette in either accepted shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    List(Vec<String>),
    Wrapped { colors: Vec<String> },
}

impl PaletteEntry {
    pub fn hex_colors(&self) -> &[String] {
        match self {
            PaletteEntry::List(colors) => colors,
            PaletteEntry::Wrapped { colors } => colors,
        }
    }

    /// Resolve the palette to interpolation colors.
    ///
    /// Only the first three entries are used; an empty list is an error so
    /// the caller can report the theme/mode as failed instead of rendering
    /// an undefined gradient.
    pub fn resolve(&self, theme: &str, mode: Mode) -> Result<Vec<Rgb>> {
        let hex = self.hex_colors();
        if hex.is_empty() {
            return Err(Error::EmptyPalette {
                theme: theme.to_string(),
                mode: mode.as_str(),
            });
        }
        hex.iter().take(3).map(|h| Rgb::from_hex(h)).collect()
    }
}

impl ThemeEntry {
    pub fn palette(&self, mode: Mode) -> Option<&PaletteEntry> {
        match mode {
            Mode::Dark => self.dark.as_ref(),
            Mode::Light => self.light.as_ref(),
        }
    }
}

impl ThemeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Probe `dir` for the enhanced export first, then the basic one.
    pub fn discover(dir: &Path) -> Result<(Self, PathBuf)> {
        for name in [ENHANCED_FILE, BASIC_FILE] {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Ok((Self::load(&candidate)?, candidate));
            }
        }
        Err(Error::ConfigMissing(dir.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_palette_shapes() {
        let doc = r##"{
            "themes": {
                "ocean": {
                    "dark": ["#001122", "#334455", "#667788"],
                    "light": { "colors": ["#aabbcc", "#ddeeff"] }
                }
            }
        }"##;
        let cfg: ThemeConfig = serde_json::from_str(doc).unwrap();
        let entry = &cfg.themes["ocean"];
        let dark = entry.palette(Mode::Dark).unwrap();
        assert_eq!(dark.hex_colors().len(), 3);
        let light = entry.palette(Mode::Light).unwrap();
        assert_eq!(light.hex_colors().len(), 2);
    }

    #[test]
    fn resolve_truncates_to_three_colors() {
        let entry = PaletteEntry::List(vec![
            "#000000".into(),
            "#111111".into(),
            "#222222".into(),
            "#333333".into(),
        ]);
        let colors = entry.resolve("t", Mode::Dark).unwrap();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[2], Rgb::new(0x22, 0x22, 0x22));
    }

    #[test]
    fn empty_palette_is_an_error() {
        let entry = PaletteEntry::List(vec![]);
        match entry.resolve("void", Mode::Light) {
            Err(Error::EmptyPalette { theme, mode }) => {
                assert_eq!(theme, "void");
                assert_eq!(mode, "light");
            }
            other => panic!("expected EmptyPalette, got {other:?}"),
        }
    }

    #[test]
    fn malformed_hex_surfaces_as_color_format() {
        let entry = PaletteEntry::List(vec!["#zzzzzz".into()]);
        assert!(matches!(
            entry.resolve("t", Mode::Dark),
            Err(Error::ColorFormat(_))
        ));
    }

    #[test]
    fn missing_mode_is_simply_absent() {
        let doc = r##"{ "themes": { "solo": { "dark": ["#123456"] } } }"##;
        let cfg: ThemeConfig = serde_json::from_str(doc).unwrap();
        assert!(cfg.themes["solo"].palette(Mode::Light).is_none());
    }
}
