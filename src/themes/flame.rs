//! Flame columns rising from the bottom edge. The color ramps from deep red
//! at the base to yellow at the tip; the epic style layers multiple tongues
//! per column, sways them with a sine-driven wind, and scatters embers.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::{Mode, Style};

pub fn render(width: u32, height: u32, mode: Mode, style: Style, rng: &mut SmallRng) -> Canvas {
    let bg = if mode.is_dark() {
        Rgb::new(10, 5, 0)
    } else {
        Rgb::new(255, 248, 240)
    };
    let tip = if mode.is_dark() {
        Rgb::new(255, 255, 100)
    } else {
        Rgb::new(255, 255, 200)
    };
    let ramp = [
        Rgb::new(139, 0, 0),
        Rgb::new(255, 69, 0),
        Rgb::new(255, 140, 0),
        Rgb::new(255, 215, 0),
        tip,
    ];
    let (col_step, seg_step, layers, min_height_div, embers, wind) = match style {
        Style::Standard => (15, 10, 1, 3, 0, false),
        Style::Epic => (25, 15, 3, 2, 30, true),
    };

    let mut canvas = Canvas::filled(width, height, bg);
    let (wi, hi) = (width as i32, height as i32);

    let mut x = 0;
    while x < wi {
        let flame_height = rng.random_range((hi / min_height_div).max(1)..=hi);
        for layer in 0..layers {
            let layer_offset = layer * 8;
            let mut y = hi;
            while y > hi - flame_height && y >= 0 {
                let progress = (hi - y) as f64 / flame_height as f64;
                // Narrows and brightens toward the tip.
                let flame_width = ((col_step as f64 * (1.0 - progress * 0.7)) as i32).max(3);
                let ramp_index = ((progress * ramp.len() as f64) as usize).min(ramp.len() - 1);

                let wind_offset = if wind {
                    (progress * 20.0 * (y as f64 * 0.02).sin()) as i32
                } else {
                    0
                };
                let third = (flame_width / 3).max(1);
                let sway = rng.random_range(-third..=third);
                let fx = x + wind_offset + sway + layer_offset;
                let alpha = rng.random_range(0.3..0.8) * (1.0 - layer as f64 * 0.2);
                canvas.fill_ellipse(fx, y, flame_width / 2, 8, ramp[ramp_index], alpha);

                y -= seg_step;
            }
        }
        x += col_step;
    }

    for _ in 0..embers {
        let x = rng.random_range(0..wi);
        let y = rng.random_range(0..hi);
        let size = rng.random_range(1..=4);
        let color = ramp[rng.random_range(2..ramp.len())];
        let alpha = rng.random_range(0.4..0.9);
        canvas.fill_disc(x, y, size, color, alpha);
    }
    canvas
}
