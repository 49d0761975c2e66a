//! Cyberpunk neon grid: glowing vertical and horizontal lines composed
//! additively, plus neon rectangle outlines in the epic style.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let (bg, neon, grid_weight) = if mode.is_dark() {
        (
            Rgb::new(5, 5, 10),
            [Rgb::new(255, 255, 0), Rgb::new(255, 0, 255), Rgb::new(0, 255, 255)],
            80.0 / 255.0,
        )
    } else {
        (
            Rgb::new(240, 240, 245),
            [Rgb::new(200, 200, 0), Rgb::new(200, 0, 200), Rgb::new(0, 200, 200)],
            40.0 / 255.0,
        )
    };
    let (grid, vline_p, hline_step, glow_v, glow_h, rects) = match style {
        Style::Standard => (40, 1.0, 3, 2, 1, 0),
        Style::Epic => (30, 0.4, 2, 5, 3, 8),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    // Vertical glow lines. Each glow ring contributes a dimmer additive
    // pass, so light accumulates toward the line center.
    let mut x = 0;
    while x < wi {
        if rng.random_bool(vline_p) {
            let color = neon[rng.random_range(0..neon.len())];
            for glow in (1..=glow_v).rev() {
                let weight = grid_weight * glow as f64 / glow_v as f64 / glow_v as f64;
                for offset in -glow..=glow {
                    canvas.vertical_line(x + offset, color, weight);
                }
            }
        }
        x += grid;
    }

    // Sparser horizontal accents.
    let mut y = 0;
    while y < hi {
        if rng.random_bool(0.3) {
            let color = neon[rng.random_range(0..neon.len())];
            for glow in (1..=glow_h).rev() {
                let weight = grid_weight * glow as f64 / glow_h as f64 / glow_h as f64;
                for offset in -glow..=glow {
                    canvas.horizontal_line(y + offset, color, weight);
                }
            }
        }
        y += grid * hline_step;
    }

    for _ in 0..rects {
        let x = rng.random_range(0..(wi - 60).max(1));
        let y = rng.random_range(0..(hi - 40).max(1));
        let w = rng.random_range(20..=60);
        let h = rng.random_range(10..=40);
        let color = neon[rng.random_range(0..neon.len())];
        canvas.outline_rect(x, y, w, h, 2, color, 0.3);
    }
    canvas
}
