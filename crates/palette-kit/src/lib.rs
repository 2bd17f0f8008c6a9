//! palette-kit: colorimetric core for tintlab
//!
//! This library implements the color math behind a palette workbench:
//! dominant-color extraction from raster images, HSL color-wheel sampling,
//! harmonic scheme generation, WCAG contrast evaluation, and textual
//! palette export.
//!
//! # Quick Start
//!
//! The [`Session`] facade is the primary entry point:
//!
//! ```
//! use palette_kit::{SchemeKind, Session};
//!
//! let mut session = Session::new();
//! session.add_color_from_hex("ff5733").unwrap();
//! session.add_color_from_hex("#2e86ab").unwrap();
//!
//! assert_eq!(session.export_hex(), "#ff5733, #2e86ab");
//!
//! // Pick a color from the wheel, then derive its triad.
//! session.pick(150, 150).unwrap();
//! let triad = session.scheme_colors(SchemeKind::Triadic).unwrap();
//! assert_eq!(triad.len(), 3);
//! ```
//!
//! Each concern is also usable on its own: [`quantize::dominant_colors`]
//! for image extraction, [`ColorWheel`] for picking, [`SchemeKind`] for
//! harmonics, [`ContrastReport`] for WCAG checks, and the [`export`]
//! formatters over any `&[Rgb]` slice.
//!
//! # Color Model
//!
//! Two value types cover the whole pipeline:
//!
//! - [`Rgb`]: 8-bit channels, the storage and interchange form. Parses
//!   from and prints as `#rrggbb` hex.
//! - [`Hsl`]: cylindrical form (hue in degrees, saturation and lightness
//!   in `0..=1`), the working space for the wheel and for scheme
//!   derivation. Construction normalizes: hue wraps modulo 360 (negative
//!   values wrap up), saturation and lightness clamp.
//!
//! Conversions round rather than truncate, so `Rgb -> Hsl -> Rgb` stays
//! within one count per channel.
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA pixel buffer ──> quantize (100x100 sample, bucket histogram)
//!                           │
//!                           v   top-8 dominant colors (replace)
//! pointer (x, y) ──> ColorWheel ──> picked Rgb      PaletteStore
//!                           │                        (<= 10, FIFO)
//!                           v                          │    │
//!                      SchemeKind::generate ──(append)─┘    v
//!                                                     export / contrast
//! ```
//!
//! Everything runs synchronously on the caller's thread; the only
//! asynchronous boundary (image decoding) lives outside this crate.

pub mod color;
pub mod contrast;
pub mod export;
pub mod palette;
pub mod quantize;
pub mod scheme;
pub mod session;
pub mod wheel;


pub use color::{Hsl, ParseColorError, Rgb};
pub use contrast::{contrast_ratio, relative_luminance, ContrastReport};
pub use export::GradientKind;
pub use palette::{PaletteError, PaletteStore};
pub use quantize::QuantizeError;
pub use scheme::SchemeKind;
pub use session::{Session, SessionError};
pub use wheel::ColorWheel;
