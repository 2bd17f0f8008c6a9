//! HSL color type and RGB conversions.
//!
//! HSL is the working space for wheel sampling and scheme derivation: hue
//! is the angular position, saturation the radial distance from grey, and
//! lightness the black-white axis. All conversion math runs in normalized
//! `f32` space; the final RGB channels are rounded to the nearest integer.

use super::rgb::Rgb;

/// A color in HSL space.
///
/// Components are kept in their canonical ranges: hue in `0.0..360.0`
/// degrees, saturation and lightness in `0.0..=1.0`. [`Hsl::new`]
/// normalizes on construction (hue wraps modulo 360, including negative
/// values; saturation and lightness clamp), so out-of-range numeric input
/// is folded into the domain rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0.0..360.0)
    pub h: f32,
    /// Saturation (0.0..=1.0)
    pub s: f32,
    /// Lightness (0.0..=1.0)
    pub l: f32,
}

impl Hsl {
    /// Create a normalized HSL color.
    ///
    /// # Example
    /// ```
    /// use palette_kit::Hsl;
    ///
    /// // -30 degrees wraps up to 330; lightness 1.2 clamps to 1.
    /// let c = Hsl::new(-30.0, 0.5, 1.2);
    /// assert_eq!(c.h, 330.0);
    /// assert_eq!(c.l, 1.0);
    /// ```
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// Return a copy with the hue shifted by `degrees`, wrapped into
    /// `0.0..360.0`.
    #[inline]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Convert to RGB.
    ///
    /// Standard chroma/intermediate/match decomposition over the six
    /// 60-degree hue sectors. Channels are rounded to the nearest integer
    /// and clamped to `0..=255`.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(
            ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

impl From<Rgb> for Hsl {
    /// Convert from RGB using min/max channel decomposition.
    ///
    /// When all channels are equal the color is achromatic: hue and
    /// saturation are both zero. The saturation denominator branches on
    /// `l > 0.5` to stay stable near white.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h * 60.0, s, l)
    }
}
