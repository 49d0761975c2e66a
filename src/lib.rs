//! BGForge: procedural theme-background generator
//!
//! Renders the decorative PNG backgrounds shipped with the mobile app's
//! visual themes: gradient fields interpolated from each theme's declared
//! palette, and per-theme procedural motifs (matrix code rain, neon grids,
//! flame columns, ...), each in a dark and a light variant.
//!
//! # Example
//!
//! ```no_run
//! use bgforge::{GeneratorConfig, Style};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig {
//!     out_dir: "assets/backgrounds".into(),
//!     style: Style::Epic,
//!     ..Default::default()
//! };
//!
//! let report = bgforge::run_motifs(&config);
//! println!("generated {} motif backgrounds", report.generated);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod canvas;
pub mod color;
pub mod config;
pub mod emit;
pub mod error;
pub mod gradient;
pub mod themes;

pub use error::{Error, Result};

/// Appearance mode a background is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Dark, Mode::Light];

    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

/// Motif intensity. The two historical generator scripts differed only in
/// tuning constants (primitive counts, opacity ranges, layer depth), so a
/// single renderer per motif is parameterized by this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Standard,
    Epic,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Standard => "standard",
            Style::Epic => "epic",
        }
    }

    /// File-name suffix: the standard variant keeps the bare name.
    pub fn suffix(self) -> &'static str {
        match self {
            Style::Standard => "",
            Style::Epic => "_epic",
        }
    }
}

impl std::str::FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(Style::Standard),
            "epic" => Ok(Style::Epic),
            other => Err(Error::Config(format!(
                "unknown style {other:?} (expected \"standard\" or \"epic\")"
            ))),
        }
    }
}

/// Output raster dimensions. Defaults to the app's logical display size.
#[derive(Debug, Clone, Copy)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self { width: 390, height: 844 }
    }
}

/// Configuration for a generation batch.
///
/// The defaults mirror the historical scripts: mobile-resolution canvases,
/// seed 42, epic-intensity motifs, output under `assets/backgrounds`.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory all PNGs (and the optional gallery) are written to
    pub out_dir: PathBuf,
    /// Canvas dimensions for every render
    pub size: CanvasSize,
    /// Base seed; each render derives its own stream from it
    pub seed: u64,
    /// Motif intensity
    pub style: Style,
    /// Explicit theme-color document; when `None` the out_dir is probed
    pub config_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("assets/backgrounds"),
            size: CanvasSize::default(),
            seed: 42,
            style: Style::Epic,
            config_path: None,
        }
    }
}

/// Aggregate outcome of a batch. One item's failure never aborts the rest.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: usize,
    pub failed: usize,
    /// (theme, file name) pairs for every emitted PNG, in batch order
    pub files: Vec<(String, String)>,
}

impl BatchReport {
    pub fn merge(&mut self, other: BatchReport) {
        self.generated += other.generated;
        self.failed += other.failed;
        self.files.extend(other.files);
    }
}

/// FNV-1a 64-bit hash, used to derive per-render seeds.
fn fnv1a_64(data: &[u8]) -> u64 {
    data.iter().fold(14695981039346656037u64, |h, &b| {
        h.wrapping_mul(1099511628211) ^ b as u64
    })
}

/// Derive an independent seed for one (theme, mode, style) render.
///
/// Renders get their own streams instead of sharing a process-global
/// generator, so batch order and future parallelism cannot change any
/// single output raster.
pub fn render_seed(base: u64, theme: &str, mode: Mode, style: Style) -> u64 {
    let tag = format!("{base}:{theme}:{}:{}", mode.as_str(), style.as_str());
    fnv1a_64(tag.as_bytes())
}

/// Render and emit every registered motif in both modes.
///
/// Failures are logged and counted; the batch always runs to completion.
pub fn run_motifs(cfg: &GeneratorConfig) -> BatchReport {
    let mut report = BatchReport::default();
    for motif in themes::REGISTRY {
        for mode in Mode::ALL {
            let seed = render_seed(cfg.seed, motif.name, mode, cfg.style);
            let mut rng = SmallRng::seed_from_u64(seed);
            let canvas = (motif.render)(cfg.size.width, cfg.size.height, mode, cfg.style, &mut rng);

            let file = format!("{}_{}{}.png", motif.name, mode.as_str(), cfg.style.suffix());
            match emit::write_png(canvas, &cfg.out_dir.join(&file)) {
                Ok(()) => {
                    log::debug!("emitted {file}");
                    report.generated += 1;
                    report.files.push((motif.name.to_string(), file));
                }
                Err(e) => {
                    log::warn!("failed to emit {file}: {e}");
                    report.failed += 1;
                }
            }
        }
    }
    report
}

/// Render and emit radial + linear gradients for every configured theme.
///
/// A missing configuration document is fatal ([`Error::ConfigMissing`]);
/// per-theme palette or emit failures are logged and counted.
pub fn run_gradients(cfg: &GeneratorConfig) -> Result<BatchReport> {
    let (doc, path) = match &cfg.config_path {
        Some(p) => (config::ThemeConfig::load(p)?, p.clone()),
        None => config::ThemeConfig::discover(&cfg.out_dir)?,
    };
    log::info!("using theme colors from {}", path.display());

    let (w, h) = (cfg.size.width, cfg.size.height);
    let mut report = BatchReport::default();
    for (name, entry) in &doc.themes {
        for mode in Mode::ALL {
            let Some(palette) = entry.palette(mode) else {
                continue;
            };
            let colors = match palette.resolve(name, mode) {
                Ok(colors) => colors,
                Err(e) => {
                    log::warn!("skipping {name} ({}): {e}", mode.as_str());
                    report.failed += 1;
                    continue;
                }
            };

            let variants = [
                ("radial", gradient::render_radial(w, h, &colors, gradient::DEFAULT_CENTER)),
                ("linear", gradient::render_linear(w, h, &colors, gradient::DEFAULT_ANGLE)),
            ];
            for (variant, canvas) in variants {
                let file = format!("{name}_{}_{variant}.png", mode.as_str());
                match emit::write_png(canvas, &cfg.out_dir.join(&file)) {
                    Ok(()) => {
                        report.generated += 1;
                        report.files.push((name.clone(), file));
                    }
                    Err(e) => {
                        log::warn!("failed to emit {file}: {e}");
                        report.failed += 1;
                    }
                }
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_mobile_resolution() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.size.width, 390);
        assert_eq!(cfg.size.height, 844);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn render_seeds_are_stable_and_distinct() {
        let a = render_seed(42, "matrix", Mode::Dark, Style::Epic);
        let b = render_seed(42, "matrix", Mode::Dark, Style::Epic);
        assert_eq!(a, b);
        assert_ne!(a, render_seed(42, "matrix", Mode::Light, Style::Epic));
        assert_ne!(a, render_seed(42, "matrix", Mode::Dark, Style::Standard));
        assert_ne!(a, render_seed(43, "matrix", Mode::Dark, Style::Epic));
    }

    #[test]
    fn style_parses_from_cli_strings() {
        assert_eq!("standard".parse::<Style>().unwrap(), Style::Standard);
        assert_eq!("epic".parse::<Style>().unwrap(), Style::Epic);
        assert!("fancy".parse::<Style>().is_err());
    }
}
