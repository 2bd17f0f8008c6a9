//! 8-bit RGB color type and hex codec.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Both variants describe the same user-facing condition (a malformed hex
/// color); they are kept separate so messages can point at the actual
/// problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Input is not exactly 6 hex digits after the optional `#`.
    #[error("invalid hex color length (expected 6 digits, got {0})")]
    InvalidLength(usize),
    /// A non-hexadecimal character was encountered.
    #[error("invalid hex digit: {0}")]
    InvalidDigit(#[from] ParseIntError),
}

/// A color with 8-bit red, green and blue channels.
///
/// `Rgb` is the storage and interchange form throughout the crate: the
/// palette store holds it, the quantizer and wheel emit it, and the
/// exporters format it. Its canonical textual form is `#rrggbb`
/// (lowercase), which round-trips losslessly via [`FromStr`] and
/// [`Rgb::to_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as a lowercase `#rrggbb` hex string.
    ///
    /// # Example
    /// ```
    /// use palette_kit::Rgb;
    /// assert_eq!(Rgb::new(255, 87, 51).to_hex(), "#ff5733");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` or bare `RRGGBB` (a missing `#` is tolerated),
    /// case-insensitive, with surrounding whitespace trimmed. Anything
    /// that is not exactly six hex digits after the optional `#` is
    /// rejected; there is no 3-digit shorthand.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_kit::Rgb;
    ///
    /// let a: Rgb = "#ff5733".parse().unwrap();
    /// let b: Rgb = "FF5733".parse().unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!("#f00".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.len()));
        }

        let r = u8::from_str_radix(&s[0..2], 16)?;
        let g = u8::from_str_radix(&s[2..4], 16)?;
        let b = u8::from_str_radix(&s[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
