//! Harmonic color-scheme generation.
//!
//! A [`SchemeKind`] names a rule for deriving harmonically related colors
//! from a base color via fixed hue, saturation and lightness offsets. The
//! base converts to HSL once; each derived color applies its offsets and
//! converts back. The base color itself is always first in the output.

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsl, Rgb};

/// A named color-harmony rule.
///
/// Each kind derives a fixed-size ordered sequence from a base color:
///
/// | Kind | Colors | Derivation |
/// |------|--------|------------|
/// | `Monochrome` | 4 | base; lighter (+0.15, capped 0.95); darker (-0.15, floored 0.05); more saturated (+0.2, capped 1) |
/// | `Complementary` | 2 | base; hue +180 |
/// | `Analogous` | 3 | base; hue +30; hue -30 |
/// | `Triadic` | 3 | base; hue +120; hue +240 |
/// | `Tetradic` | 4 | base; hue +90; +180; +270 |
/// | `SplitComplementary` | 3 | base; hue +150; +210 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Lightness and saturation variations of a single hue.
    Monochrome,
    /// The base and its opposite on the wheel.
    Complementary,
    /// Neighbors 30 degrees to either side.
    Analogous,
    /// Three hues 120 degrees apart.
    Triadic,
    /// Four hues 90 degrees apart.
    Tetradic,
    /// The two neighbors of the complement.
    SplitComplementary,
}

impl SchemeKind {
    /// All scheme kinds, in presentation order.
    pub const ALL: [SchemeKind; 6] = [
        SchemeKind::Monochrome,
        SchemeKind::Complementary,
        SchemeKind::Analogous,
        SchemeKind::Triadic,
        SchemeKind::Tetradic,
        SchemeKind::SplitComplementary,
    ];

    /// The kebab-case name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::Monochrome => "monochrome",
            SchemeKind::Complementary => "complementary",
            SchemeKind::Analogous => "analogous",
            SchemeKind::Triadic => "triadic",
            SchemeKind::Tetradic => "tetradic",
            SchemeKind::SplitComplementary => "split-complementary",
        }
    }

    /// Number of colors this kind generates, base included.
    pub fn color_count(self) -> usize {
        match self {
            SchemeKind::Monochrome | SchemeKind::Tetradic => 4,
            SchemeKind::Complementary => 2,
            SchemeKind::Analogous | SchemeKind::Triadic | SchemeKind::SplitComplementary => 3,
        }
    }

    /// Derive this kind's colors from `base`.
    ///
    /// The base color is returned first, byte-exact (it does not go
    /// through an HSL round trip).
    ///
    /// # Example
    ///
    /// ```
    /// use palette_kit::{Rgb, SchemeKind};
    ///
    /// let scheme = SchemeKind::Complementary.generate(Rgb::new(255, 0, 0));
    /// assert_eq!(scheme, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)]);
    /// ```
    pub fn generate(self, base: Rgb) -> Vec<Rgb> {
        let hsl = Hsl::from(base);
        let mut colors = vec![base];

        match self {
            SchemeKind::Monochrome => {
                colors.push(Hsl::new(hsl.h, hsl.s, (hsl.l + 0.15).min(0.95)).to_rgb());
                colors.push(Hsl::new(hsl.h, hsl.s, (hsl.l - 0.15).max(0.05)).to_rgb());
                colors.push(Hsl::new(hsl.h, (hsl.s + 0.2).min(1.0), hsl.l).to_rgb());
            }
            SchemeKind::Complementary => {
                colors.push(hsl.shift_hue(180.0).to_rgb());
            }
            SchemeKind::Analogous => {
                colors.push(hsl.shift_hue(30.0).to_rgb());
                colors.push(hsl.shift_hue(-30.0).to_rgb());
            }
            SchemeKind::Triadic => {
                colors.push(hsl.shift_hue(120.0).to_rgb());
                colors.push(hsl.shift_hue(240.0).to_rgb());
            }
            SchemeKind::Tetradic => {
                colors.push(hsl.shift_hue(90.0).to_rgb());
                colors.push(hsl.shift_hue(180.0).to_rgb());
                colors.push(hsl.shift_hue(270.0).to_rgb());
            }
            SchemeKind::SplitComplementary => {
                colors.push(hsl.shift_hue(150.0).to_rgb());
                colors.push(hsl.shift_hue(210.0).to_rgb());
            }
        }

        colors
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = UnknownSchemeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monochrome" => Ok(SchemeKind::Monochrome),
            "complementary" => Ok(SchemeKind::Complementary),
            "analogous" => Ok(SchemeKind::Analogous),
            "triadic" => Ok(SchemeKind::Triadic),
            "tetradic" => Ok(SchemeKind::Tetradic),
            "split-complementary" => Ok(SchemeKind::SplitComplementary),
            _ => Err(UnknownSchemeKind(s.to_string())),
        }
    }
}

/// Error for an unrecognized scheme kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheme kind: {0:?} (expected one of monochrome, complementary, analogous, triadic, tetradic, split-complementary)")]
pub struct UnknownSchemeKind(pub String);
