//! Color values and the mixing used for the cosmetic backdrop
//!
//! Colors travel through the generator as plain RGB triples parsed from
//! `#rrggbb` strings; the only color arithmetic the generator needs is the
//! linear mix that tints the page backdrop.

use std::fmt;

use crate::io::error::{GenerationError, Result};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// White, the mixing target for backdrop lightening
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidColor`] when the value is not a
    /// `#` followed by exactly six hex digits.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').ok_or_else(|| invalid(value))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid(value));
        }
        let channel = |span: Option<&str>| {
            span.and_then(|digit_pair| u8::from_str_radix(digit_pair, 16).ok())
                .ok_or_else(|| invalid(value))
        };
        let r = channel(digits.get(0..2))?;
        let g = channel(digits.get(2..4))?;
        let b = channel(digits.get(4..6))?;
        Ok(Self::new(r, g, b))
    }
}

impl fmt::Display for Rgb {
    /// Formats as the `#rrggbb` form the SVG attributes use
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn invalid(value: &str) -> GenerationError {
    GenerationError::InvalidColor {
        value: value.to_string(),
    }
}

/// Linear interpolation between two scalars
pub fn lerp(x: f64, y: f64, p: f64) -> f64 {
    (1.0 - p).mul_add(x, p * y)
}

/// Mix two colors, channel-wise, `p` of the way from `a` to `b`
pub fn mix(a: Rgb, b: Rgb, p: f64) -> Rgb {
    let channel = |x: u8, y: u8| lerp(f64::from(x), f64::from(y), p).round() as u8;
    Rgb::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
    )
}
