//! WCAG relative luminance and contrast evaluation.
//!
//! Implements the WCAG 2.x definitions: per-channel sRGB linearization,
//! the 0.2126/0.7152/0.0722 luminance weights, and the
//! `(lighter + 0.05) / (darker + 0.05)` contrast ratio. The math is total
//! over all RGB inputs; "no selection" handling belongs to the session
//! layer.

use crate::color::Rgb;

/// Contrast ratio required for WCAG AA (normal text).
pub const AA_THRESHOLD: f64 = 4.5;

/// Contrast ratio required for WCAG AAA (normal text).
pub const AAA_THRESHOLD: f64 = 7.0;

/// WCAG relative luminance of a color, in `0.0..=1.0`.
///
/// Each channel is normalized to `0..=1` and linearized: values at or
/// below 0.03928 divide by 12.92, the rest follow
/// `((c + 0.055) / 1.055)^2.4`. The weighted sum reflects the eye's
/// sensitivity to green over red over blue.
pub fn relative_luminance(color: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`.
///
/// Symmetric in its arguments: the lighter color always goes on top.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// The outcome of a WCAG contrast check between two colors.
///
/// # Example
///
/// ```
/// use palette_kit::{ContrastReport, Rgb};
///
/// let report = ContrastReport::evaluate(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
/// assert!(report.passes_aaa);
/// assert!((report.ratio - 21.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// Contrast ratio, `1.0..=21.0`.
    pub ratio: f64,
    /// Whether the pair meets WCAG AA for normal text (ratio >= 4.5).
    pub passes_aa: bool,
    /// Whether the pair meets WCAG AAA for normal text (ratio >= 7).
    pub passes_aaa: bool,
}

impl ContrastReport {
    /// Evaluate the contrast between a foreground and background color.
    pub fn evaluate(foreground: Rgb, background: Rgb) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            ratio,
            passes_aa: ratio >= AA_THRESHOLD,
            passes_aaa: ratio >= AAA_THRESHOLD,
        }
    }
}
