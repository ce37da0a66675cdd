#![forbid(unsafe_code)]

//! Packed RGBA colors.
//!
//! Hosts hand colors over as hex strings (`#1f77b4`). The engine treats a
//! color as opaque data: it is parsed once at the boundary, carried on the
//! row, and handed back to the drawing backend untouched.

use std::fmt;

/// A straight-alpha RGBA color packed into a `u32` (`0xRRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(hex));
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorParseError::new(hex));
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, i) in out.iter_mut().zip(0..3) {
                    let v = channel(&digits[i..i + 1])?;
                    *slot = v * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(ColorParseError::new(hex)),
        }
    }

    /// Lowercase `#rrggbb` form, with `aa` appended when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a() == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r(),
                self.g(),
                self.b(),
                self.a()
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A color string that is not valid hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color {:?} (expected #rgb, #rrggbb, or #rrggbbaa)",
            self.input
        )
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        let c = Color::from_hex("#1f77b4").unwrap();
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x1f, 0x77, 0xb4, 255));
    }

    #[test]
    fn parses_short_hex_without_hash() {
        assert_eq!(Color::from_hex("f0a").unwrap(), Color::rgb(255, 0, 170));
    }

    #[test]
    fn parses_alpha() {
        let c = Color::from_hex("#00000080").unwrap();
        assert_eq!(c.a(), 0x80);
        assert_eq!(c.to_hex(), "#00000080");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#ééé").is_err());
        let err = Color::from_hex("blue").unwrap_err();
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn rejects_signed_channels() {
        assert!(Color::from_hex("#+f+f+f").is_err());
        assert!(Color::from_hex("+fff").is_err());
        assert!(Color::from_hex("#12+456").is_err());
        assert!(Color::from_hex("#-1-1-1").is_err());
    }

    #[test]
    fn hex_round_trip_display() {
        assert_eq!(Color::rgb(255, 127, 14).to_string(), "#ff7f0e");
    }
}
