//! Textual palette export formats.
//!
//! Pure formatters over a `&[Rgb]` snapshot, in palette insertion order:
//! hex, `rgb()`, `hsl()`, a CSS gradient declaration, Tailwind arbitrary
//! value classes, SCSS variables, plus a combined labeled block and the
//! gradient preview string.
//!
//! # Example
//!
//! ```
//! use palette_kit::export;
//! use palette_kit::Rgb;
//!
//! let colors = [Rgb::new(255, 87, 51), Rgb::new(46, 134, 171)];
//! assert_eq!(export::hex_list(&colors), "#ff5733, #2e86ab");
//! assert_eq!(
//!     export::scss_variables(&colors),
//!     "$color-1: #ff5733;\n$color-2: #2e86ab;"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::{Hsl, Rgb};

/// Gradient preview shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKind {
    /// `linear-gradient(<angle>deg, ...)`
    #[default]
    Linear,
    /// `radial-gradient(circle, ...)` -- the angle is ignored.
    Radial,
}

impl GradientKind {
    /// The lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientKind {
    type Err = UnknownGradientKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GradientKind::Linear),
            "radial" => Ok(GradientKind::Radial),
            _ => Err(UnknownGradientKind(s.to_string())),
        }
    }
}

/// Error for an unrecognized gradient kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gradient kind: {0:?} (expected \"linear\" or \"radial\")")]
pub struct UnknownGradientKind(pub String);

/// Gradient color stop: `rgb(r,g,b)` without inner spaces.
fn gradient_stop(color: Rgb) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

/// Comma-space-joined `#rrggbb` values.
pub fn hex_list(colors: &[Rgb]) -> String {
    colors
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-space-joined `rgb(r, g, b)` values.
pub fn rgb_list(colors: &[Rgb]) -> String {
    colors
        .iter()
        .map(|c| format!("rgb({}, {}, {})", c.r, c.g, c.b))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-space-joined `hsl(H, S%, L%)` values, components rounded to the
/// nearest integer.
pub fn hsl_list(colors: &[Rgb]) -> String {
    colors
        .iter()
        .map(|&c| {
            let hsl = Hsl::from(c);
            format!(
                "hsl({}, {}%, {}%)",
                hsl.h.round(),
                (hsl.s * 100.0).round(),
                (hsl.l * 100.0).round()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// A `background:` declaration with a linear gradient over the palette.
pub fn css_gradient(colors: &[Rgb], angle: u32) -> String {
    let stops = colors
        .iter()
        .map(|&c| gradient_stop(c))
        .collect::<Vec<_>>()
        .join(", ");
    format!("background: linear-gradient({angle}deg, {stops});")
}

/// Space-joined Tailwind arbitrary-value background classes.
pub fn tailwind_classes(colors: &[Rgb]) -> String {
    colors
        .iter()
        .map(|c| format!("bg-[{}]", c.to_hex()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Newline-joined SCSS variables, 1-indexed.
pub fn scss_variables(colors: &[Rgb]) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("$color-{}: {};", i + 1, c.to_hex()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The gradient preview value for the given shape.
///
/// Linear gradients use the angle; radial gradients ignore it.
pub fn gradient_css(colors: &[Rgb], kind: GradientKind, angle: u32) -> String {
    let stops = colors
        .iter()
        .map(|&c| gradient_stop(c))
        .collect::<Vec<_>>()
        .join(", ");
    match kind {
        GradientKind::Linear => format!("linear-gradient({angle}deg, {stops})"),
        GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
    }
}

/// All six export formats as one labeled block, sections separated by
/// blank lines.
pub fn all_formats(colors: &[Rgb], angle: u32) -> String {
    format!(
        "HEX: {}\n\nRGB: {}\n\nHSL: {}\n\nCSS: {}\n\nTailwind: {}\n\nSCSS:\n{}",
        hex_list(colors),
        rgb_list(colors),
        hsl_list(colors),
        css_gradient(colors, angle),
        tailwind_classes(colors),
        scss_variables(colors),
    )
}
