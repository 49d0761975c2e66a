//! Matrix code rain: columns of falling glyphs, brighter toward the tail.
//! Glyphs are approximated with filled blocks.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    // Intensity levels, dimmest first; the column tail indexes the brightest.
    let (bg, levels) = if mode.is_dark() {
        (
            Rgb::new(0, 0, 0),
            [Rgb::new(0, 100, 0), Rgb::new(0, 150, 0), Rgb::new(0, 200, 0), Rgb::new(0, 255, 0)],
        )
    } else {
        (
            Rgb::new(250, 250, 250),
            [Rgb::new(0, 40, 0), Rgb::new(0, 60, 0), Rgb::new(0, 80, 0), Rgb::new(0, 100, 0)],
        )
    };
    let (col_width, glyph_w, glyph_h, scatter) = match style {
        Style::Standard => (20, 13, 15, 0.0),
        Style::Epic => (18, 12, 16, 0.3),
    };
    let step = 20;

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    let mut x = 0;
    while x < wi {
        let col_len = rng.random_range(hi / 3..=hi);
        let start_y = rng.random_range(-hi / 2..=0);
        let glyphs = (col_len / step).max(1);

        for i in 0..glyphs {
            let y = start_y + i * step;
            if y < 0 || y >= hi {
                continue;
            }
            let intensity = ((i + 1) as f64 / glyphs as f64).min(1.0);
            let level = ((intensity * levels.len() as f64) as usize).min(levels.len() - 1);
            let color = levels[level];
            let alpha = rng.random_range(0.75..0.95);
            canvas.fill_rect(x + 2, y, glyph_w, glyph_h, color, alpha);

            // Stray pixels around the glyph for a digital artifact look.
            if scatter > 0.0 && rng.random_bool(scatter) {
                for _ in 0..3 {
                    let px = x + rng.random_range(-2..glyph_w + 3);
                    let py = y + rng.random_range(-2..19);
                    canvas.blend(px, py, color, alpha);
                }
            }
        }
        x += col_width;
    }
    canvas
}
