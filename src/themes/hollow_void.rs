//! Hollow void: wispy shadow blobs built from overlapping, shrinking,
//! fading ellipse layers, plus a dusting of fine particles. The layering is
//! what gives the wisps their translucent depth; a single disc reads flat.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let (bg, shades) = if mode.is_dark() {
        (
            Rgb::new(5, 5, 8),
            [
                Rgb::new(64, 64, 96),
                Rgb::new(96, 96, 128),
                Rgb::new(128, 128, 160),
                Rgb::new(160, 160, 192),
            ],
        )
    } else {
        (
            Rgb::new(240, 240, 245),
            [
                Rgb::new(200, 200, 220),
                Rgb::new(180, 180, 200),
                Rgb::new(160, 160, 180),
                Rgb::new(140, 140, 160),
            ],
        )
    };
    let (wisps, layers, shrink, particles, size_lo, size_hi, alpha_lo, alpha_hi) = match style {
        Style::Standard => (25, 3, 10, 25, 20, 60, 0.08, 0.2),
        Style::Epic => (30, 4, 8, 50, 30, 80, 0.15, 0.4),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    for _ in 0..wisps {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let color = shades[rng.random_range(0..shades.len())];
        let base_size = rng.random_range(size_lo..=size_hi);
        let alpha = rng.random_range(alpha_lo..alpha_hi);

        for layer in 0..layers {
            let layer_size = base_size - layer * shrink;
            if layer_size <= 0 {
                break;
            }
            let drift = layer * 3;
            let offset_x = rng.random_range(-drift..=drift);
            let offset_y = rng.random_range(-drift..=drift);
            let layer_alpha = alpha * (1.0 - layer as f64 * 0.2);
            canvas.fill_disc(x + offset_x, y + offset_y, layer_size / 2, color, layer_alpha);
        }
    }

    for _ in 0..particles {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let size = rng.random_range(1..=3);
        let color = shades[rng.random_range(0..shades.len())];
        let alpha = rng.random_range(0.3..0.7);
        canvas.fill_disc(x, y, size, color, alpha);
    }
    canvas
}
