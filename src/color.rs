//! Color resolver: hex parsing and palette interpolation.
//!
//! Interpolation truncates toward zero per channel so that repeated renders
//! are bit-stable; gradients never round a channel past its endpoints.

use crate::error::{Error, Result};

/// An 8-bit RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::ColorFormat(s.to_string()));
        }
        let parse = |range| u8::from_str_radix(&digits[range], 16).unwrap_or(0);
        Ok(Self::new(parse(0..2), parse(2..4), parse(4..6)))
    }

    /// Scale every channel by `factor`, clamped to [0, 255].
    pub fn scaled(self, factor: f64) -> Self {
        let s = |c: u8| ((c as f64 * factor).min(255.0).max(0.0)) as u8;
        Self::new(s(self.r), s(self.g), s(self.b))
    }
}

/// Linear interpolation between two colors at position `t` in [0, 1].
///
/// `t = 0` yields exactly `a`; `t = 1` yields exactly `b`.
pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t) as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Piecewise interpolation used by radial fields.
///
/// With three colors: [0, 0.4) blends c0 into c1, [0.4, 0.7) blends c1 into
/// c2, and [0.7, 1.0] blends c2 back into c0 so the outer rim returns to the
/// background color. Two-color palettes fall back to a single blend.
///
/// `colors` must be non-empty; the config loader rejects empty palettes
/// before rendering starts.
pub fn radial_stops(colors: &[Rgb], t: f64) -> Rgb {
    if colors.len() >= 3 {
        if t < 0.4 {
            lerp(colors[0], colors[1], t / 0.4)
        } else if t < 0.7 {
            lerp(colors[1], colors[2], (t - 0.4) / 0.3)
        } else {
            lerp(colors[2], colors[0], (t - 0.7) / 0.3)
        }
    } else {
        lerp(colors[0], colors[colors.len() - 1], t)
    }
}

/// Piecewise interpolation used by linear fields: a single split at 0.5.
pub fn linear_stops(colors: &[Rgb], t: f64) -> Rgb {
    if colors.len() >= 3 {
        if t < 0.5 {
            lerp(colors[0], colors[1], t * 2.0)
        } else {
            lerp(colors[1], colors[2], (t - 0.5) * 2.0)
        }
    } else {
        lerp(colors[0], colors[colors.len() - 1], t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("00FF00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#fff", "gggggg", "#12345", "#1234567", "12 456"] {
            assert!(Rgb::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn lerp_hits_exact_endpoints() {
        let a = Rgb::new(10, 200, 0);
        let b = Rgb::new(250, 20, 255);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn lerp_is_monotonic_per_channel() {
        let a = Rgb::new(0, 255, 100);
        let b = Rgb::new(255, 0, 200);
        let mut prev = lerp(a, b, 0.0);
        for i in 1..=100 {
            let cur = lerp(a, b, i as f64 / 100.0);
            assert!(cur.r >= prev.r);
            assert!(cur.g <= prev.g);
            assert!(cur.b >= prev.b);
            prev = cur;
        }
    }

    #[test]
    fn radial_stops_segments_meet_their_anchors() {
        let colors = [Rgb::new(0, 0, 0), Rgb::new(100, 100, 100), Rgb::new(200, 200, 200)];
        assert_eq!(radial_stops(&colors, 0.0), colors[0]);
        // Just below each split the blend approaches the next anchor.
        assert_eq!(radial_stops(&colors, 0.4), colors[1]);
        assert_eq!(radial_stops(&colors, 0.7), colors[2]);
        // At t = 1 the rim wraps back to the background color.
        assert_eq!(radial_stops(&colors, 1.0), colors[0]);
    }

    #[test]
    fn two_color_palettes_use_a_single_blend() {
        let colors = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        assert_eq!(radial_stops(&colors, 0.5), Rgb::new(127, 127, 127));
        assert_eq!(linear_stops(&colors, 0.0), colors[0]);
        assert_eq!(linear_stops(&colors, 1.0), colors[1]);
    }
}
