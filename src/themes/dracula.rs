//! Dracula IDE: floating translucent shapes in the signature accent colors.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

const ACCENTS: [Rgb; 4] = [
    Rgb::new(255, 121, 198), // pink
    Rgb::new(189, 147, 249), // purple
    Rgb::new(139, 233, 253), // cyan
    Rgb::new(80, 250, 123),  // green
];

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let bg = if mode.is_dark() {
        Rgb::new(40, 42, 54)
    } else {
        Rgb::new(248, 248, 242)
    };
    let (count, size_lo, size_hi) = match style {
        Style::Standard => (15, 20, 80),
        Style::Epic => (20, 30, 80),
    };
    // Standard varies opacity per shape; epic uses a fixed translucency.
    let fixed_alpha = match style {
        Style::Standard => None,
        Style::Epic => Some(if mode.is_dark() { 0.15 } else { 0.08 }),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    for _ in 0..count {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let size = rng.random_range(size_lo..=size_hi);
        let color = ACCENTS[rng.random_range(0..ACCENTS.len())];
        let alpha = fixed_alpha.unwrap_or_else(|| rng.random_range(0.08..0.24));

        match rng.random_range(0..4) {
            0 => canvas.fill_disc(x, y, size / 2, color, alpha),
            1 => canvas.fill_rect(x - size / 2, y - size / 2, size, size, color, alpha),
            2 => canvas.fill_diamond(x, y, size / 2, color, alpha),
            // Squashed ellipse standing in for the hexagonal blob.
            _ => canvas.fill_ellipse(x, y, size / 2, size / 3, color, alpha),
        }
    }
    canvas
}
