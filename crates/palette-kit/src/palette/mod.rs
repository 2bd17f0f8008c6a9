//! Bounded, ordered palette storage.

mod error;
mod store;

pub use error::PaletteError;
pub use store::{PaletteStore, MAX_COLORS};
