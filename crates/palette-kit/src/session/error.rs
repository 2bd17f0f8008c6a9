//! Unified error type for session commands.

use thiserror::Error;

use crate::color::ParseColorError;
use crate::palette::PaletteError;
use crate::quantize::QuantizeError;

/// Unified error type for [`Session`](super::Session) commands.
///
/// Wraps the per-module error types so application code can propagate a
/// single error with `?`. None of these are fatal: a malformed input is
/// not applied, a stale index leaves state untouched, and a missing
/// selection is an empty state rather than a failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Malformed hex color input.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    /// A stale index into the palette or a scheme listing.
    #[error("index {index} out of range ({len} colors available)")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of colors available at the time of the call
        len: usize,
    },

    /// Malformed pixel buffer handed to the upload path.
    #[error(transparent)]
    Quantize(#[from] QuantizeError),

    /// A command that needs a current color ran before any pick.
    #[error("no color selected")]
    NoSelection,
}

impl From<PaletteError> for SessionError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::IndexOutOfRange { index, len } => {
                SessionError::IndexOutOfRange { index, len }
            }
        }
    }
}
