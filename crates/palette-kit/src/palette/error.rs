//! Error types for palette store operations.

use thiserror::Error;

/// Error type for palette store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// An index did not refer to a stored color.
    #[error("palette index {index} out of range (palette has {len} colors)")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Palette length at the time of the call
        len: usize,
    },
}
