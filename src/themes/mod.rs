//! Motif renderers: one drawing strategy per theme.
//!
//! Every motif implements the same contract: paint a [`Canvas`] of the given
//! size for one appearance mode and style intensity, drawing all randomness
//! from the explicitly passed generator. Given the same seed, size, mode and
//! style the output raster is bit-reproducible.

mod artist_palette;
mod autumn_forest;
mod cyberpunk;
mod dracula;
mod executive;
mod flame;
mod hollow_void;
mod matrix;
mod starfield;
mod unicorn;
mod vegeta;

use rand::rngs::SmallRng;

use crate::canvas::Canvas;
use crate::{Mode, Style};

/// Shared render signature for all motifs.
pub type RenderFn = fn(u32, u32, Mode, Style, &mut SmallRng) -> Canvas;

/// A named motif renderer.
pub struct Motif {
    pub name: &'static str,
    pub render: RenderFn,
}

/// Dispatch table for every motif the batch driver renders.
/// Theme names double as output file-name prefixes.
pub const REGISTRY: &[Motif] = &[
    Motif { name: "matrix", render: matrix::render },
    Motif { name: "cyberpunk_2077", render: cyberpunk::render },
    Motif { name: "dracula_ide", render: dracula::render },
    Motif { name: "artist_palette", render: artist_palette::render },
    Motif { name: "vegeta_blue", render: vegeta::render },
    Motif { name: "demon_slayer_flame", render: flame::render },
    Motif { name: "autumn_forest", render: autumn_forest::render },
    Motif { name: "unicorn_dream", render: unicorn::render },
    Motif { name: "hollow_knight_shadow", render: hollow_void::render },
    Motif { name: "starfield_cosmic", render: starfield::render },
    Motif { name: "executive_platinum", render: executive::render },
];

/// Look up a motif by its theme name.
pub fn find(name: &str) -> Option<&'static Motif> {
    REGISTRY.iter().find(|m| m.name == name)
}
