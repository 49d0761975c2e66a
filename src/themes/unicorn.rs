//! Unicorn dream: four-pointed star sparkles with cross glints; the epic
//! style adds a rainbow swirl ring around the center.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let (bg, rainbow) = if mode.is_dark() {
        (
            Rgb::new(15, 10, 25),
            [
                Rgb::new(255, 182, 193),
                Rgb::new(221, 160, 221),
                Rgb::new(173, 216, 230),
                Rgb::new(144, 238, 144),
                Rgb::new(255, 255, 224),
                Rgb::new(255, 218, 185),
                Rgb::new(255, 192, 203),
            ],
        )
    } else {
        (
            Rgb::new(255, 250, 255),
            [
                Rgb::new(255, 105, 180),
                Rgb::new(186, 85, 211),
                Rgb::new(135, 206, 235),
                Rgb::new(144, 238, 144),
                Rgb::new(255, 255, 0),
                Rgb::new(255, 165, 0),
                Rgb::new(255, 20, 147),
            ],
        )
    };
    let (sparkles, swirl, alpha_lo, alpha_hi) = match style {
        Style::Standard => (40, false, 0.16, 0.32),
        Style::Epic => (60, true, 0.4, 0.8),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    if swirl {
        let (cx, cy) = (wi / 2, hi / 2);
        let mut radius = 50;
        while radius < 200 {
            let color = rainbow[(radius as usize / 30) % rainbow.len()];
            for deg in (0..360).step_by(10) {
                let rad = (deg as f64).to_radians();
                let spiral = radius as f64 + 20.0 * (deg as f64 * 0.1).sin();
                let x = cx + (spiral * rad.cos()) as i32;
                let y = cy + (spiral * rad.sin()) as i32;
                let alpha = rng.random_range(0.2..0.5);
                let size = rng.random_range(3..=8);
                canvas.fill_disc(x, y, size / 2, color, alpha);
            }
            radius += 30;
        }
    }

    for _ in 0..sparkles {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let color = rainbow[rng.random_range(0..rainbow.len())];
        let size = rng.random_range(4..=12);
        let alpha = rng.random_range(alpha_lo..alpha_hi);

        canvas.fill_diamond(x, y, size, color, alpha);
        // Cross glint through the star's center.
        canvas.line(x - size / 2, y, x + size / 2, y, 2, color, alpha);
        canvas.line(x, y - size / 2, x, y + size / 2, 2, color, alpha);
    }
    canvas
}
