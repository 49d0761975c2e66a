//! Mutable RGB raster with blend-based drawing primitives.
//!
//! A [`Canvas`] is owned by exactly one render invocation: created with a
//! flat background fill, mutated in place by the drawing calls below, then
//! serialized to PNG. Every primitive composites against the existing pixel
//! (`bg * (1 - a) + color * a`) rather than overwriting it, and silently
//! clips anything outside `[0, width) x [0, height)`.

use crate::color::Rgb;
use image::RgbImage;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Create a canvas filled with a flat background color.
    pub fn filled(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Hard overwrite, used by the gradient fields where every pixel is
    /// computed directly. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Alpha-blend `color` over the current pixel.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: f64) {
        if let Some(i) = self.index(x, y) {
            let bg = self.pixels[i];
            let mix = |b: u8, c: u8| (b as f64 * (1.0 - alpha) + c as f64 * alpha) as u8;
            self.pixels[i] = Rgb::new(mix(bg.r, color.r), mix(bg.g, color.g), mix(bg.b, color.b));
        }
    }

    /// Additive compose: `min(255, bg + color * weight)` per channel.
    /// Used for neon glow where light accumulates instead of covering.
    pub fn add(&mut self, x: i32, y: i32, color: Rgb, weight: f64) {
        if let Some(i) = self.index(x, y) {
            let bg = self.pixels[i];
            let mix = |b: u8, c: u8| (b as f64 + c as f64 * weight).min(255.0) as u8;
            self.pixels[i] = Rgb::new(mix(bg.r, color.r), mix(bg.g, color.g), mix(bg.b, color.b));
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, alpha: f64) {
        for py in y..y + h {
            for px in x..x + w {
                self.blend(px, py, color, alpha);
            }
        }
    }

    pub fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: Rgb, alpha: f64) {
        self.fill_rect(x, y, w, thickness, color, alpha);
        self.fill_rect(x, y + h - thickness, w, thickness, color, alpha);
        self.fill_rect(x, y + thickness, thickness, h - 2 * thickness, color, alpha);
        self.fill_rect(x + w - thickness, y + thickness, thickness, h - 2 * thickness, color, alpha);
    }

    pub fn fill_disc(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb, alpha: f64) {
        self.fill_ellipse(cx, cy, radius, radius, color, alpha);
    }

    /// Axis-aligned filled ellipse with half-axes `rx`, `ry`.
    pub fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgb, alpha: f64) {
        if rx <= 0 || ry <= 0 {
            self.blend(cx, cy, color, alpha);
            return;
        }
        let (fx, fy) = (rx as f64, ry as f64);
        for dy in -ry..=ry {
            for dx in -rx..=rx {
                let nx = dx as f64 / fx;
                let ny = dy as f64 / fy;
                if nx * nx + ny * ny <= 1.0 {
                    self.blend(cx + dx, cy + dy, color, alpha);
                }
            }
        }
    }

    /// Filled diamond (a square rotated 45 degrees) with half-diagonal `half`.
    pub fn fill_diamond(&mut self, cx: i32, cy: i32, half: i32, color: Rgb, alpha: f64) {
        for dy in -half..=half {
            let span = half - dy.abs();
            for dx in -span..=span {
                self.blend(cx + dx, cy + dy, color, alpha);
            }
        }
    }

    /// Line segment stamped as `width`-sized squares along the longer axis.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: Rgb, alpha: f64) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        let half = width.max(1) / 2;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let px = x0 + ((x1 - x0) as f64 * t) as i32;
            let py = y0 + ((y1 - y0) as f64 * t) as i32;
            for dy in -half..=half {
                for dx in -half..=half {
                    self.blend(px + dx, py + dy, color, alpha);
                }
            }
        }
    }

    pub fn vertical_line(&mut self, x: i32, color: Rgb, weight: f64) {
        for y in 0..self.height as i32 {
            self.add(x, y, color, weight);
        }
    }

    pub fn horizontal_line(&mut self, y: i32, color: Rgb, weight: f64) {
        for x in 0..self.width as i32 {
            self.add(x, y, color, weight);
        }
    }

    /// Raw RGB bytes in row-major order, for digesting in golden tests.
    pub fn raw_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(&[p.r, p.g, p.b]);
        }
        out
    }

    pub fn into_rgb_image(self) -> RgbImage {
        let (w, h) = (self.width, self.height);
        RgbImage::from_fn(w, h, |x, y| {
            let p = self.pixels[(y * w + x) as usize];
            image::Rgb([p.r, p.g, p.b])
        })
    }
}
