//! Color value types and conversions.
//!
//! Two types cover the pipeline: [`Rgb`] (8-bit channels, the storage and
//! interchange form) and [`Hsl`] (the working space for wheel sampling and
//! scheme derivation). Conversions between them are pure value-to-value
//! functions; intermediate math happens in normalized `f32` space and the
//! final RGB channels are rounded, not truncated.
//!
//! # Example
//!
//! ```
//! use palette_kit::{Hsl, Rgb};
//!
//! let tomato: Rgb = "#ff6347".parse().unwrap();
//! let hsl = Hsl::from(tomato);
//! assert!(hsl.h > 8.0 && hsl.h < 10.0);
//!
//! // Back to RGB, within rounding tolerance.
//! let back = hsl.to_rgb();
//! assert!((back.r as i16 - tomato.r as i16).abs() <= 1);
//! ```

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::{ParseColorError, Rgb};
