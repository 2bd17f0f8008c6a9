//! Nearest-neighbor raster resampling.
//!
//! The quantizer only needs a coarse, cheap resample down to its fixed
//! sampling raster; the bucket histogram smooths out the aliasing that
//! nearest-neighbor introduces.

/// Resample an RGBA buffer to `new_width` x `new_height` with
/// nearest-neighbor sampling.
///
/// Returns the input unchanged when the dimensions already match. The
/// caller guarantees `rgba.len() == width * height * 4` and non-zero
/// source dimensions.
pub fn downscale_rgba(
    rgba: &[u8],
    width: u32,
    height: u32,
    new_width: u32,
    new_height: u32,
) -> Vec<u8> {
    debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);

    if width == new_width && height == new_height {
        return rgba.to_vec();
    }

    let mut out = Vec::with_capacity(new_width as usize * new_height as usize * 4);
    for y in 0..new_height {
        let src_y = (y as u64 * height as u64 / new_height as u64) as usize;
        for x in 0..new_width {
            let src_x = (x as u64 * width as u64 / new_width as u64) as usize;
            let offset = (src_y * width as usize + src_x) * 4;
            out.extend_from_slice(&rgba[offset..offset + 4]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        pixel
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect()
    }

    #[test]
    fn test_same_dimensions_is_identity() {
        let input = solid_image(100, 100, [128, 64, 32, 255]);
        let output = downscale_rgba(&input, 100, 100, 100, 100);
        assert_eq!(output, input);
    }

    #[test]
    fn test_downscale_solid_image() {
        let input = solid_image(400, 300, [10, 20, 30, 255]);
        let output = downscale_rgba(&input, 400, 300, 100, 100);

        assert_eq!(output.len(), 100 * 100 * 4);
        for pixel in output.chunks_exact(4) {
            assert_eq!(pixel, &[10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_upscale_small_image() {
        // 1x1 source replicates across the whole target.
        let input = vec![200, 100, 50, 255];
        let output = downscale_rgba(&input, 1, 1, 100, 100);

        assert_eq!(output.len(), 100 * 100 * 4);
        for pixel in output.chunks_exact(4) {
            assert_eq!(pixel, &[200, 100, 50, 255]);
        }
    }

    #[test]
    fn test_downscale_picks_source_regions() {
        // Left half red, right half blue; a 2x1 target samples one pixel
        // from each half.
        let mut input = Vec::new();
        for _ in 0..4u32 {
            for x in 0..4u32 {
                if x < 2 {
                    input.extend_from_slice(&[255, 0, 0, 255]);
                } else {
                    input.extend_from_slice(&[0, 0, 255, 255]);
                }
            }
        }

        let output = downscale_rgba(&input, 4, 4, 2, 1);
        assert_eq!(&output[0..4], &[255, 0, 0, 255]);
        assert_eq!(&output[4..8], &[0, 0, 255, 255]);
    }
}
