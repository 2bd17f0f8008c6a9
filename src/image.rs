//! PNG decode/encode at the raster boundary.
//!
//! The core only ever sees decoded RGBA byte buffers; this module is the
//! external collaborator that produces them from PNG files (and writes
//! the wheel raster back out as one).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::ImageError;

/// A decoded raster image: `width * height * 4` RGBA bytes, row-major.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode a PNG file into an RGBA [`Bitmap`].
///
/// Indexed and sub-byte images are expanded and 16-bit depth is stripped
/// during decoding, so any of the remaining 8-bit color types
/// (grayscale, grayscale+alpha, RGB, RGBA) normalizes to RGBA here.
pub fn load_png(path: &Path) -> Result<Bitmap, ImageError> {
    let mut decoder = png::Decoder::new(File::open(path)?);
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let pixel_count = info.width as usize * info.height as usize;
    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(pixel_count * 4);
            for pixel in buf.chunks_exact(3) {
                rgba.extend_from_slice(pixel);
                rgba.push(255);
            }
            rgba
        }
        png::ColorType::Grayscale => {
            let mut rgba = Vec::with_capacity(pixel_count * 4);
            for &v in &buf {
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
            rgba
        }
        png::ColorType::GrayscaleAlpha => {
            let mut rgba = Vec::with_capacity(pixel_count * 4);
            for pixel in buf.chunks_exact(2) {
                rgba.extend_from_slice(&[pixel[0], pixel[0], pixel[0], pixel[1]]);
            }
            rgba
        }
        other => return Err(ImageError::UnsupportedColorType(other)),
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    Ok(Bitmap {
        width: info.width,
        height: info.height,
        rgba,
    })
}

/// Encode an RGBA buffer as an 8-bit RGBA PNG file.
pub fn save_rgba_png(
    path: &Path,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<(), ImageError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
