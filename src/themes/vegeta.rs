//! Vegeta energy aura: concentric particle rings radiating from the center,
//! with jagged energy bolts in the epic style.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let (bg, aura) = if mode.is_dark() {
        (
            Rgb::new(2, 2, 5),
            [
                Rgb::new(30, 58, 138),
                Rgb::new(59, 130, 246),
                Rgb::new(147, 197, 253),
                Rgb::new(255, 255, 255),
            ],
        )
    } else {
        (
            Rgb::new(248, 250, 252),
            [
                Rgb::new(30, 58, 138),
                Rgb::new(59, 130, 246),
                Rgb::new(147, 197, 253),
                Rgb::new(200, 200, 200),
            ],
        )
    };
    let (first_ring, ring_step, jitter, bolts) = match style {
        Style::Standard => (50, 30, 10, 0),
        Style::Epic => (20, 25, 15, 12),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);
    let (cx, cy) = (wi / 2, hi / 2);

    let mut radius = first_ring;
    while radius < wi.min(hi) / 2 {
        let color = aura[((radius / 60) as usize).min(aura.len() - 1)];
        // Energy fades with distance from the core.
        let intensity = (0.8 - radius as f64 / 200.0).max(0.1);
        let particles = match style {
            Style::Standard => 36,
            Style::Epic => ((radius as f64 * 0.3) as i32).max(1),
        };

        for i in 0..particles {
            let angle = i as f64 / particles as f64 * TAU + rng.random_range(-0.2..0.2);
            let r = (radius + rng.random_range(-jitter..=jitter)) as f64;
            let x = cx + (r * angle.cos()) as i32;
            let y = cy + (r * angle.sin()) as i32;
            let alpha = intensity * rng.random_range(0.3..1.0);
            let size = rng.random_range(2..=8);
            canvas.fill_disc(x, y, size / 2, color, alpha);
        }
        radius += ring_step;
    }

    // Jagged bolts: segmented random walks outward from the center.
    for _ in 0..bolts {
        let heading = rng.random_range(0.0..TAU);
        let bolt_len = rng.random_range(80..=150);
        let (mut px, mut py) = (cx as f64, cy as f64);
        for segment in 0..bolt_len / 10 {
            let angle = heading + rng.random_range(-0.3..0.3);
            let length = rng.random_range(8..=15) as f64;
            let nx = px + length * angle.cos();
            let ny = py + length * angle.sin();
            let alpha = (0.6 - segment as f64 * 0.05).max(0.1);
            canvas.line(px as i32, py as i32, nx as i32, ny as i32, 2, aura[1], alpha);
            px = nx;
            py = ny;
        }
    }
    canvas
}
