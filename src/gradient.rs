//! Gradient field renderers.
//!
//! Unlike the motif renderers these take no randomness: every pixel's color
//! is a pure function of its position and the resolved palette.

use crate::canvas::Canvas;
use crate::color::{self, Rgb};

/// Default gradient center (canvas midpoint, as fractions of width/height).
pub const DEFAULT_CENTER: (f64, f64) = (0.5, 0.5);
/// Default linear gradient angle in degrees.
pub const DEFAULT_ANGLE: f64 = 135.0;

/// Radial gradient: color is a function of Euclidean distance from `center`,
/// normalized by half the canvas diagonal and clamped to 1.0.
pub fn render_radial(width: u32, height: u32, colors: &[Rgb], center: (f64, f64)) -> Canvas {
    let mut canvas = Canvas::filled(width, height, colors[0]);
    let cx = center.0 * width as f64;
    let cy = center.1 * height as f64;
    let max_radius = (width as f64).hypot(height as f64) / 2.0;

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let t = ((dx * dx + dy * dy).sqrt() / max_radius).min(1.0);
            canvas.set(x, y, color::radial_stops(colors, t));
        }
    }
    canvas
}

/// Linear gradient: color is a function of the pixel's projection onto
/// `angle_deg`, normalized by the projected canvas extent and clamped.
pub fn render_linear(width: u32, height: u32, colors: &[Rgb], angle_deg: f64) -> Canvas {
    let mut canvas = Canvas::filled(width, height, colors[0]);
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let extent = (width as f64 * cos).abs() + (height as f64 * sin).abs();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let projected = (x as f64 * cos + y as f64 * sin) / extent;
            let t = projected.clamp(0.0, 1.0);
            canvas.set(x, y, color::linear_stops(colors, t));
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_center_pixel_is_the_first_color() {
        let colors = [Rgb::new(200, 10, 10), Rgb::new(10, 200, 10), Rgb::new(10, 10, 200)];
        // Even dimensions land the declared center exactly on pixel (10, 10),
        // where distance zero maps to t = 0 -> color0.
        let canvas = render_radial(20, 20, &colors, (0.5, 0.5));
        assert_eq!(canvas.get(10, 10).unwrap(), colors[0]);
    }

    #[test]
    fn radial_rim_wraps_back_toward_the_background() {
        let colors = [Rgb::new(0, 0, 0), Rgb::new(120, 120, 120), Rgb::new(240, 240, 240)];
        let canvas = render_radial(40, 40, &colors, (0.5, 0.5));
        let center = canvas.get(20, 20).unwrap();
        let corner = canvas.get(0, 0).unwrap();
        // The corner sits at the maximum normalized radius, where the third
        // stop blends back into color0.
        assert_eq!(center, colors[0]);
        assert!(corner.r < colors[2].r);
    }

    #[test]
    fn linear_black_to_white_at_zero_degrees_increases_left_to_right() {
        let colors = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let canvas = render_linear(4, 4, &colors, 0.0);
        for y in 0..4 {
            let mut prev = canvas.get(0, y).unwrap().r;
            for x in 1..4 {
                let cur = canvas.get(x, y).unwrap().r;
                assert!(cur >= prev, "brightness dipped at x={x}, y={y}");
                prev = cur;
            }
        }
        let left = canvas.get(0, 0).unwrap().r;
        let right = canvas.get(3, 0).unwrap().r;
        assert!(left < 128, "leftmost column should stay near black");
        assert!(right > left, "rightmost column should be brighter");
    }

    #[test]
    fn gradients_are_deterministic() {
        let colors = [Rgb::new(10, 20, 30), Rgb::new(200, 210, 220)];
        let a = render_linear(16, 16, &colors, DEFAULT_ANGLE);
        let b = render_linear(16, 16, &colors, DEFAULT_ANGLE);
        assert_eq!(a.raw_rgb(), b.raw_rgb());
    }
}
