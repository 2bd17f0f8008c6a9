//! Dominant-color extraction from raster images.
//!
//! The quantizer reduces an RGBA pixel buffer to a ranked list of dominant
//! colors via bucketed histogramming: the image is first downsampled to a
//! fixed 100x100 sample (bounding the histogram cost and smoothing
//! near-duplicate colors), then each channel of every pixel is rounded to
//! the nearest multiple of 32 to form a bucket key. The top 8 buckets by
//! frequency become the dominant colors.
//!
//! # Example
//!
//! ```
//! use palette_kit::quantize::dominant_colors;
//! use palette_kit::Rgb;
//!
//! // A solid red 2x2 image.
//! let rgba = [255u8, 0, 0, 255].repeat(4);
//! let colors = dominant_colors(&rgba, 2, 2).unwrap();
//!
//! // One bucket: 255 rounds to the top of the channel range.
//! assert_eq!(colors, vec![Rgb::new(255, 0, 0)]);
//! ```

mod scale;

use std::collections::HashMap;

use thiserror::Error;

use crate::color::Rgb;

pub use scale::downscale_rgba;

/// Side length of the fixed sampling raster the image is reduced to
/// before histogramming.
pub const SAMPLE_SIZE: u32 = 100;

/// Channel quantization step: each channel is rounded to the nearest
/// multiple of this value to form its bucket coordinate.
pub const BUCKET_STEP: f32 = 32.0;

/// Maximum number of dominant colors emitted.
pub const MAX_DOMINANT: usize = 8;

/// Error type for quantization input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// The pixel buffer length does not match `width * height * 4`.
    #[error("RGBA buffer size mismatch: expected {expected} bytes for {width}x{height}, got {actual}")]
    BufferSizeMismatch {
        /// Expected byte count (`width * height * 4`)
        expected: usize,
        /// Actual buffer length
        actual: usize,
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },
}

/// Round a channel value to the nearest multiple of [`BUCKET_STEP`].
///
/// Values from 240 up round to 256 mathematically; the u8 channel domain
/// clamps the bucket to 255.
#[inline]
fn bucket(channel: u8) -> u8 {
    let rounded = (channel as f32 / BUCKET_STEP).round() * BUCKET_STEP;
    rounded.min(255.0) as u8
}

/// Extract up to [`MAX_DOMINANT`] dominant colors from an RGBA buffer.
///
/// The buffer is `width * height * 4` bytes in row-major RGBA order; the
/// alpha byte is ignored. Images larger (or smaller) than the 100x100
/// sampling raster are resampled first with nearest-neighbor.
///
/// Buckets are ranked by descending pixel frequency; equal frequencies
/// order by first encounter in the row-major scan, which makes the result
/// deterministic. An image with fewer distinct buckets than
/// [`MAX_DOMINANT`] yields fewer colors, and a uniform image yields
/// exactly one.
pub fn dominant_colors(rgba: &[u8], width: u32, height: u32) -> Result<Vec<Rgb>, QuantizeError> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(QuantizeError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
            width,
            height,
        });
    }
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    let sampled;
    let pixels: &[u8] = if width == SAMPLE_SIZE && height == SAMPLE_SIZE {
        rgba
    } else {
        sampled = downscale_rgba(rgba, width, height, SAMPLE_SIZE, SAMPLE_SIZE);
        &sampled
    };

    // Frequency count per bucket, with the first-seen scan position as
    // the deterministic tie-break.
    let mut histogram: HashMap<Rgb, (usize, usize)> = HashMap::new();
    for (seen, pixel) in pixels.chunks_exact(4).enumerate() {
        let key = Rgb::new(bucket(pixel[0]), bucket(pixel[1]), bucket(pixel[2]));
        let entry = histogram.entry(key).or_insert((0, seen));
        entry.0 += 1;
    }

    let mut buckets: Vec<(Rgb, (usize, usize))> = histogram.into_iter().collect();
    buckets.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    buckets.truncate(MAX_DOMINANT);

    Ok(buckets.into_iter().map(|(color, _)| color).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgba(width: u32, height: u32, color: Rgb) -> Vec<u8> {
        let mut buf = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            buf.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
        buf
    }

    #[test]
    fn test_bucket_rounding() {
        assert_eq!(bucket(0), 0);
        assert_eq!(bucket(15), 0); // 15/32 = 0.47 rounds down
        assert_eq!(bucket(16), 32); // 0.5 rounds up
        assert_eq!(bucket(32), 32);
        assert_eq!(bucket(100), 96); // 3.125 rounds to 3
        assert_eq!(bucket(128), 128);
        // 240..=255 would round to 256; clamped to the channel max.
        assert_eq!(bucket(240), 255);
        assert_eq!(bucket(255), 255);
    }

    #[test]
    fn test_uniform_image_yields_one_color() {
        let rgba = solid_rgba(100, 100, Rgb::new(100, 100, 100));
        let colors = dominant_colors(&rgba, 100, 100).unwrap();
        assert_eq!(colors, vec![Rgb::new(96, 96, 96)]);
    }

    #[test]
    fn test_frequency_ordering() {
        // 100x100 buffer: 75 rows of one bucket, 25 rows of another.
        let mut rgba = Vec::new();
        for y in 0..100u32 {
            let color = if y < 75 {
                Rgb::new(0, 0, 0)
            } else {
                Rgb::new(128, 128, 128)
            };
            for _ in 0..100 {
                rgba.extend_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }

        let colors = dominant_colors(&rgba, 100, 100).unwrap();
        assert_eq!(colors, vec![Rgb::new(0, 0, 0), Rgb::new(128, 128, 128)]);
    }

    #[test]
    fn test_tie_break_is_first_encountered() {
        // Two buckets with identical counts; black is scanned first.
        let mut rgba = Vec::new();
        for y in 0..100u32 {
            let color = if y < 50 {
                Rgb::new(0, 0, 0)
            } else {
                Rgb::new(255, 255, 255)
            };
            for _ in 0..100 {
                rgba.extend_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }

        let colors = dominant_colors(&rgba, 100, 100).unwrap();
        assert_eq!(colors, vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
    }

    #[test]
    fn test_caps_at_max_dominant() {
        // 9 distinct grey buckets (the most the bucket grid allows):
        // stripes at 0, 32, ... 224 plus a double-width 255 stripe. Only
        // the top 8 survive.
        let mut rgba = Vec::new();
        for y in 0..100u32 {
            let stripe = y / 10;
            let v = if stripe >= 8 { 250 } else { (stripe * 32) as u8 };
            for _ in 0..100 {
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
        }

        let colors = dominant_colors(&rgba, 100, 100).unwrap();
        assert_eq!(colors.len(), MAX_DOMINANT);
        // The double-width 255 stripe outranks the single-width ones.
        assert_eq!(colors[0], Rgb::new(255, 255, 255));
        // The dropped bucket is one of the single-width stripes.
        assert!(!colors.contains(&Rgb::new(224, 224, 224)));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let mut opaque = solid_rgba(10, 10, Rgb::new(64, 64, 64));
        let transparent = {
            let mut buf = opaque.clone();
            for pixel in buf.chunks_exact_mut(4) {
                pixel[3] = 0;
            }
            buf
        };

        let a = dominant_colors(&opaque, 10, 10).unwrap();
        let b = dominant_colors(&transparent, 10, 10).unwrap();
        assert_eq!(a, b);

        // Also unchanged if alpha varies per pixel.
        for (i, pixel) in opaque.chunks_exact_mut(4).enumerate() {
            pixel[3] = i as u8;
        }
        assert_eq!(dominant_colors(&opaque, 10, 10).unwrap(), a);
    }

    #[test]
    fn test_non_sample_size_input_is_resampled() {
        // A 3x3 solid image still quantizes (via the 100x100 resample).
        let rgba = solid_rgba(3, 3, Rgb::new(200, 10, 10));
        let colors = dominant_colors(&rgba, 3, 3).unwrap();
        assert_eq!(colors, vec![Rgb::new(192, 0, 0)]);
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let rgba = vec![0u8; 10];
        let err = dominant_colors(&rgba, 100, 100).unwrap_err();
        assert!(matches!(
            err,
            QuantizeError::BufferSizeMismatch {
                expected: 40_000,
                actual: 10,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(dominant_colors(&[], 0, 0).unwrap(), Vec::new());
    }
}
