//! Starfield: nebula clouds laid down first, then stars; roughly one star
//! in ten is bright and gets cross-shaped flares.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

const STARS: [Rgb; 4] = [
    Rgb::new(255, 255, 255),
    Rgb::new(255, 255, 200),
    Rgb::new(200, 200, 255),
    Rgb::new(255, 200, 200),
];

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let (bg, nebula) = if mode.is_dark() {
        (
            Rgb::new(5, 5, 15),
            [Rgb::new(100, 50, 150), Rgb::new(150, 50, 100), Rgb::new(50, 100, 150)],
        )
    } else {
        (
            Rgb::new(240, 245, 255),
            [Rgb::new(200, 150, 250), Rgb::new(250, 150, 200), Rgb::new(150, 200, 250)],
        )
    };
    let (nebulas, star_count) = match style {
        Style::Standard => (8, 100),
        Style::Epic => (12, 160),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    for _ in 0..nebulas {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let color = nebula[rng.random_range(0..nebula.len())];
        let size = rng.random_range(80..=150);
        let alpha = rng.random_range(0.06..0.14);
        canvas.fill_disc(x, y, size / 2, color, alpha);
    }

    for _ in 0..star_count {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let color = STARS[rng.random_range(0..STARS.len())];
        let mut size = rng.random_range(1..=4);
        let alpha = rng.random_range(0.7..0.95);

        if rng.random_bool(0.1) {
            size = rng.random_range(3..=6);
            canvas.line(x - size, y, x + size, y, 1, color, alpha);
            canvas.line(x, y - size, x, y + size, 1, color, alpha);
        }
        canvas.fill_disc(x, y, size / 2, color, alpha);
    }
    canvas
}
