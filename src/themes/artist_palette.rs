//! Artist palette: irregular paint splatters with satellite droplets and,
//! in the epic style, paint streaks.

use std::f64::consts::{PI, TAU};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let (bg, paints) = if mode.is_dark() {
        (
            Rgb::new(15, 12, 8),
            [
                Rgb::new(220, 50, 20),
                Rgb::new(20, 120, 220),
                Rgb::new(250, 180, 20),
                Rgb::new(180, 20, 180),
                Rgb::new(20, 200, 50),
            ],
        )
    } else {
        (
            Rgb::new(255, 253, 250),
            [
                Rgb::new(255, 87, 34),
                Rgb::new(33, 150, 243),
                Rgb::new(255, 193, 7),
                Rgb::new(156, 39, 176),
                Rgb::new(76, 175, 80),
            ],
        )
    };
    let (count, size_lo, size_hi, alpha_lo, alpha_hi, drops_lo, drops_hi, streak_p) = match style {
        Style::Standard => (25, 15, 40, 0.16, 0.32, 3, 8, 0.0),
        Style::Epic => (35, 20, 60, 0.4, 0.8, 5, 12, 0.3),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    for _ in 0..count {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let color = paints[rng.random_range(0..paints.len())];
        let size = rng.random_range(size_lo..=size_hi);
        let alpha = rng.random_range(alpha_lo..alpha_hi);

        // Irregular splatter: a central blob plus eight lobes at jittered radii.
        canvas.fill_disc(x, y, size / 2, color, alpha);
        for k in 0..8 {
            let angle = k as f64 * PI / 4.0;
            let quarter = (size / 4).max(1);
            let radius = size / 2 + rng.random_range(-quarter..=quarter);
            let lx = x + (radius as f64 * angle.cos()) as i32;
            let ly = y + (radius as f64 * angle.sin()) as i32;
            canvas.fill_disc(lx, ly, (size / 6).max(2), color, alpha);
        }

        for _ in 0..rng.random_range(drops_lo..=drops_hi) {
            let dx = rng.random_range(-size..=size);
            let dy = rng.random_range(-size..=size);
            let droplet = rng.random_range(3..=12);
            let droplet_alpha = rng.random_range(alpha_lo * 0.5..alpha_hi * 0.75);
            canvas.fill_disc(x + dx, y + dy, droplet / 2, color, droplet_alpha);
        }

        if streak_p > 0.0 && rng.random_bool(streak_p) {
            let length = rng.random_range(30..=80) as f64;
            let angle = rng.random_range(0.0..TAU);
            let end_x = x + (length * angle.cos()) as i32;
            let end_y = y + (length * angle.sin()) as i32;
            let streak_alpha = rng.random_range(0.2..0.5);
            let stroke = rng.random_range(2..=6);
            canvas.line(x, y, end_x, end_y, stroke, color, streak_alpha);
        }
    }
    canvas
}
