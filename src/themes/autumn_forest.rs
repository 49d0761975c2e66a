//! Autumn forest: falling leaves with stems; the epic style also sketches
//! branch strokes wandering down from the upper half.

use std::f64::consts::FRAC_PI_2;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

const LEAVES: [Rgb; 5] = [
    Rgb::new(139, 69, 19),
    Rgb::new(205, 133, 63),
    Rgb::new(255, 140, 0),
    Rgb::new(255, 69, 0),
    Rgb::new(178, 34, 34),
];
const BRANCH: Rgb = Rgb::new(101, 67, 33);

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let bg = if mode.is_dark() {
        Rgb::new(20, 15, 10)
    } else {
        Rgb::new(255, 251, 245)
    };
    let (leaf_count, branches, alpha_lo, alpha_hi) = match style {
        Style::Standard => (30, 0, 0.12, 0.28),
        Style::Epic => (40, 8, 0.6, 0.9),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    // Branches first so leaves layer over them.
    let branch_alpha = if mode.is_dark() { 0.3 } else { 0.6 };
    for _ in 0..branches {
        let mut px = rng.random_range(-50..wi + 50) as f64;
        let mut py = rng.random_range(0..(hi / 2).max(1)) as f64;
        let total = rng.random_range(100..=200);
        for _ in 0..total / 20 {
            // Generally downward, with wobble.
            let angle = FRAC_PI_2 + rng.random_range(-0.5..0.5);
            let length = rng.random_range(15..=25) as f64;
            let nx = px + length * angle.cos();
            let ny = py + length * angle.sin();
            canvas.line(px as i32, py as i32, nx as i32, ny as i32, 3, BRANCH, branch_alpha);
            px = nx;
            py = ny;
        }
    }

    for _ in 0..leaf_count {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let color = LEAVES[rng.random_range(0..LEAVES.len())];
        let leaf_w = rng.random_range(8..=16);
        let leaf_h = rng.random_range(12..=20);
        let alpha = rng.random_range(alpha_lo..alpha_hi);
        canvas.fill_ellipse(x, y, leaf_w / 2, leaf_h / 2, color, alpha);

        // Stem trailing off the leaf tip.
        let stem_x = x + rng.random_range(-3..=3);
        let stem_y = y + leaf_h / 2 + rng.random_range(3..=8);
        canvas.line(x, y, stem_x, stem_y, 1, color.scaled(0.7), alpha);
    }
    canvas
}
