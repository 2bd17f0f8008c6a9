//! HSL color-wheel raster and picking.
//!
//! [`ColorWheel`] renders a disk-shaped raster where each pixel's color is
//! determined by its polar position: the angle around the center selects
//! the hue, the distance from the center selects the saturation (0 at the
//! center, 1 at the rim), and the whole disk shares one caller-selected
//! lightness. Picking reads the already-rendered pixel back from the
//! raster rather than recomputing it, so a picked color always matches
//! what was rendered, rounding included.

use std::f32::consts::PI;

use crate::color::{Hsl, Rgb};

/// Default wheel diameter in pixels.
pub const DEFAULT_DIAMETER: u32 = 180;

/// A rendered HSL color wheel with persistent picker state.
///
/// The wheel owns its RGBA raster (alpha 255 inside the disk, 0 outside)
/// and the current picker position and color. Changing the lightness
/// re-renders the full raster and then re-samples the stored picker
/// position against it, so the current color tracks the slider the way
/// the visible wheel does.
///
/// # Example
///
/// ```
/// use palette_kit::ColorWheel;
///
/// let mut wheel = ColorWheel::new(180, 0.5);
///
/// // The exact center is achromatic.
/// let center = wheel.pick(90, 90).unwrap();
/// assert_eq!(center.r, center.g);
/// assert_eq!(center.g, center.b);
///
/// // Outside the disk there is nothing to pick.
/// assert!(wheel.pick(0, 0).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ColorWheel {
    diameter: u32,
    lightness: f32,
    /// Rendered raster, `diameter * diameter * 4` RGBA bytes, row-major.
    rgba: Vec<u8>,
    picker: Option<(u32, u32)>,
    current: Option<Rgb>,
}

impl ColorWheel {
    /// Create a wheel of the given diameter and render it at `lightness`
    /// (clamped to `0.0..=1.0`).
    pub fn new(diameter: u32, lightness: f32) -> Self {
        let mut wheel = Self {
            diameter,
            lightness: lightness.clamp(0.0, 1.0),
            rgba: vec![0; diameter as usize * diameter as usize * 4],
            picker: None,
            current: None,
        };
        wheel.render();
        wheel
    }

    /// Wheel diameter in pixels.
    #[inline]
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// The lightness the raster was rendered at.
    #[inline]
    pub fn lightness(&self) -> f32 {
        self.lightness
    }

    /// Read-only view of the rendered RGBA raster.
    ///
    /// Pixels outside the disk have all four bytes zero.
    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// The most recently picked color, if any.
    #[inline]
    pub fn current_color(&self) -> Option<Rgb> {
        self.current
    }

    /// The most recently picked pixel position, if any.
    #[inline]
    pub fn picker_position(&self) -> Option<(u32, u32)> {
        self.picker
    }

    /// Change the wheel lightness, re-render, and re-sample the stored
    /// picker position against the new raster.
    ///
    /// The render completes over the entire raster before any read-back,
    /// so the refreshed current color comes from the new lightness.
    pub fn set_lightness(&mut self, lightness: f32) {
        self.lightness = lightness.clamp(0.0, 1.0);
        self.render();
        if let Some((x, y)) = self.picker {
            self.current = self.read_pixel(x, y);
        }
    }

    /// Pick the color at pixel `(x, y)`.
    ///
    /// Returns `None` when the position lies outside the disk (the picker
    /// state is left unchanged). Inside the disk, the rendered pixel is
    /// read back from the raster, stored as the current selection, and
    /// returned.
    pub fn pick(&mut self, x: u32, y: u32) -> Option<Rgb> {
        let color = self.read_pixel(x, y)?;
        self.picker = Some((x, y));
        self.current = Some(color);
        Some(color)
    }

    /// Read the rendered color at `(x, y)` without touching picker state.
    fn read_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.diameter || y >= self.diameter {
            return None;
        }
        let radius = self.diameter as f32 / 2.0;
        let dx = x as f32 - radius;
        let dy = y as f32 - radius;
        if (dx * dx + dy * dy).sqrt() > radius {
            return None;
        }
        let offset = (y as usize * self.diameter as usize + x as usize) * 4;
        Some(Rgb::new(
            self.rgba[offset],
            self.rgba[offset + 1],
            self.rgba[offset + 2],
        ))
    }

    /// Render the full raster at the current lightness.
    fn render(&mut self) {
        let radius = self.diameter as f32 / 2.0;
        for y in 0..self.diameter {
            for x in 0..self.diameter {
                let offset = (y as usize * self.diameter as usize + x as usize) * 4;
                let dx = x as f32 - radius;
                let dy = y as f32 - radius;
                let dist = (dx * dx + dy * dy).sqrt();

                if dist > radius {
                    self.rgba[offset..offset + 4].copy_from_slice(&[0, 0, 0, 0]);
                    continue;
                }

                let mut angle = dy.atan2(dx);
                if angle < 0.0 {
                    angle += 2.0 * PI;
                }
                let hue = angle / (2.0 * PI) * 360.0;
                let saturation = dist / radius;

                let rgb = Hsl::new(hue, saturation, self.lightness).to_rgb();
                self.rgba[offset..offset + 4].copy_from_slice(&[rgb.r, rgb.g, rgb.b, 255]);
            }
        }
    }
}

impl Default for ColorWheel {
    /// A wheel at [`DEFAULT_DIAMETER`] and half lightness.
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_achromatic() {
        let mut wheel = ColorWheel::new(180, 0.5);
        let center = wheel.pick(90, 90).unwrap();
        assert_eq!(center.r, center.g, "center should be grey, got {center:?}");
        assert_eq!(center.g, center.b, "center should be grey, got {center:?}");
        // Saturation 0 at lightness 0.5 rounds to mid-grey.
        assert_eq!(center, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_pick_outside_disk_is_none() {
        let mut wheel = ColorWheel::new(180, 0.5);
        // Corners are outside the inscribed disk.
        assert!(wheel.pick(0, 0).is_none());
        assert!(wheel.pick(179, 179).is_none());
        // Out of the raster entirely.
        assert!(wheel.pick(180, 90).is_none());
        assert!(wheel.pick(90, 500).is_none());
        // A failed pick leaves no selection behind.
        assert!(wheel.current_color().is_none());
        assert!(wheel.picker_position().is_none());
    }

    #[test]
    fn test_outside_pixels_are_transparent() {
        let wheel = ColorWheel::new(180, 0.5);
        let rgba = wheel.rgba();
        // Top-left corner pixel.
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0]);
        // An interior pixel is opaque.
        let center = (90 * 180 + 90) * 4;
        assert_eq!(rgba[center + 3], 255);
    }

    #[test]
    fn test_pick_matches_rendered_raster() {
        let mut wheel = ColorWheel::new(180, 0.5);
        let picked = wheel.pick(120, 60).unwrap();

        let offset = (60 * 180 + 120) * 4;
        let rgba = wheel.rgba();
        assert_eq!(picked, Rgb::new(rgba[offset], rgba[offset + 1], rgba[offset + 2]));
    }

    #[test]
    fn test_hue_by_direction() {
        let mut wheel = ColorWheel::new(180, 0.5);

        // Due right of center: angle 0, hue 0 (red family, saturated).
        let right = wheel.pick(170, 90).unwrap();
        assert!(right.r > right.g && right.r > right.b, "expected reddish, got {right:?}");

        // Due below center: angle 90 degrees, hue 90 (green-yellow).
        let below = wheel.pick(90, 170).unwrap();
        assert!(below.g > below.b, "expected greenish, got {below:?}");
    }

    #[test]
    fn test_set_lightness_resamples_picker() {
        let mut wheel = ColorWheel::new(180, 0.5);
        let before = wheel.pick(130, 90).unwrap();

        wheel.set_lightness(0.9);
        let after = wheel.current_color().unwrap();

        assert_eq!(wheel.picker_position(), Some((130, 90)));
        assert_ne!(before, after, "lightness change should refresh the selection");

        // The refreshed color matches a direct pick at the same position.
        let repicked = wheel.pick(130, 90).unwrap();
        assert_eq!(after, repicked);
    }

    #[test]
    fn test_lightness_extremes() {
        let mut black = ColorWheel::new(180, 0.0);
        assert_eq!(black.pick(130, 90).unwrap(), Rgb::new(0, 0, 0));

        let mut white = ColorWheel::new(180, 1.0);
        assert_eq!(white.pick(130, 90).unwrap(), Rgb::new(255, 255, 255));

        // Out-of-range lightness clamps instead of failing.
        let clamped = ColorWheel::new(180, 7.5);
        assert_eq!(clamped.lightness(), 1.0);
    }

    #[test]
    fn test_raster_dimensions() {
        let wheel = ColorWheel::new(64, 0.5);
        assert_eq!(wheel.diameter(), 64);
        assert_eq!(wheel.rgba().len(), 64 * 64 * 4);
    }
}
