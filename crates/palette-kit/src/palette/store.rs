//! The ordered, capacity-bounded palette collection.

use super::error::PaletteError;
use crate::color::Rgb;

/// Maximum number of colors a [`PaletteStore`] holds.
pub const MAX_COLORS: usize = 10;

/// An ordered collection of selected colors, bounded at [`MAX_COLORS`].
///
/// Insertion order is meaningful: it drives export order and gradient stop
/// order. When an append would exceed the capacity, the oldest entry
/// (index 0) is evicted, so the store always keeps the 10 most recent
/// selections.
///
/// # Example
///
/// ```
/// use palette_kit::{PaletteStore, Rgb};
///
/// let mut palette = PaletteStore::new();
/// palette.push(Rgb::new(255, 87, 51));
/// palette.push(Rgb::new(46, 134, 171));
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.colors()[0], Rgb::new(255, 87, 51));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteStore {
    colors: Vec<Rgb>,
}

impl PaletteStore {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored colors, never more than [`MAX_COLORS`].
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Read-only snapshot of the stored colors, in insertion order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The color at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Append a color, evicting the oldest entry when full.
    pub fn push(&mut self, color: Rgb) {
        self.colors.push(color);
        if self.colors.len() > MAX_COLORS {
            self.colors.remove(0);
        }
    }

    /// Remove and return the color at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Rgb, PaletteError> {
        if index >= self.colors.len() {
            return Err(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            });
        }
        Ok(self.colors.remove(index))
    }

    /// Remove all colors.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Replace the entire contents with `colors`.
    ///
    /// This is the quantizer's reset path. Entries go through the same
    /// evicting append as any other insertion, so a sequence longer than
    /// the capacity keeps its last [`MAX_COLORS`] entries.
    pub fn replace_all(&mut self, colors: impl IntoIterator<Item = Rgb>) {
        self.colors.clear();
        for color in colors {
            self.push(color);
        }
    }
}
