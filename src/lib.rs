//! Tintlab - palette extraction, color harmonics and WCAG contrast tooling.
//!
//! The colorimetric core lives in the `palette-kit` crate; this library
//! exposes the I/O glue modules for the binary and for integration
//! testing.

pub mod error;
pub mod image;
pub mod report;
