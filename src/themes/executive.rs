//! Executive platinum: sparse grid-aligned rectangles, diamonds and
//! diagonal strokes in gold and platinum tones.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let (bg, accents) = if mode.is_dark() {
        (
            Rgb::new(66, 66, 66),
            [Rgb::new(255, 179, 0), Rgb::new(224, 224, 224), Rgb::new(158, 158, 158)],
        )
    } else {
        (
            Rgb::new(248, 248, 248),
            [Rgb::new(255, 179, 0), Rgb::new(158, 158, 158), Rgb::new(97, 97, 97)],
        )
    };
    let (cell_p, alpha_lo, alpha_hi) = match style {
        Style::Standard => (0.3, 0.04, 0.12),
        Style::Epic => (0.45, 0.08, 0.24),
    };
    let grid = 60;

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    let mut y = 0;
    while y < hi {
        let mut x = 0;
        while x < wi {
            if rng.random_bool(cell_p) {
                let color = accents[rng.random_range(0..accents.len())];
                let alpha = rng.random_range(alpha_lo..alpha_hi);
                match rng.random_range(0..3) {
                    0 => {
                        let size = rng.random_range(20..=40);
                        canvas.fill_rect(x, y, size, size, color, alpha);
                    }
                    1 => {
                        let size = rng.random_range(15..=30);
                        canvas.fill_diamond(x + size / 2, y + size / 2, size / 2, color, alpha);
                    }
                    _ => canvas.line(x, y, x + grid, y + grid, 2, color, alpha),
                }
            }
            x += grid;
        }
        y += grid;
    }
    canvas
}
