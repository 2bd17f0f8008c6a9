use thiserror::Error;

/// Errors from the raster I/O boundary.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
