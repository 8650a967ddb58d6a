//! RGBA color value type with hex parsing.
//!
//! Colors arrive here already resolved to concrete values; mapping symbolic
//! theme identifiers to colors is the caller's concern.
//!
//! # Example
//!
//! ```
//! use numbadge::Color;
//!
//! let white = Color::from_hex("#FFF").unwrap();
//! assert_eq!(white, Color::WHITE);
//!
//! let translucent = Color::from_hex("#FF000080").unwrap();
//! assert_eq!(translucent.a, 128);
//! ```

use crate::error::BadgeError;
use image::Rgba;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);

    /// Create an opaque color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha component.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA` formats.
    pub fn from_hex(hex: &str) -> Result<Self, BadgeError> {
        let hex = hex
            .strip_prefix('#')
            .ok_or_else(|| BadgeError::Render("Color must start with '#'".to_string()))?;

        if !hex.is_ascii() {
            return Err(BadgeError::Render("Invalid hex digit".to_string()));
        }

        let component = |range: std::ops::Range<usize>| -> Result<u8, BadgeError> {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| BadgeError::Render("Invalid hex digit".to_string()))
        };

        match hex.len() {
            3 => {
                // #RGB format - each hex digit doubled: 0xF -> 0xFF, 0xA -> 0xAA
                let r = component(0..1)?;
                let g = component(1..2)?;
                let b = component(2..3)?;
                Ok(Color::new(r * 17, g * 17, b * 17))
            }
            6 => Ok(Color::new(component(0..2)?, component(2..4)?, component(4..6)?)),
            8 => Ok(Color::with_alpha(
                component(0..2)?,
                component(2..4)?,
                component(4..6)?,
                component(6..8)?,
            )),
            _ => Err(BadgeError::Render(format!(
                "Color must be #RGB, #RRGGBB or #RRGGBBAA format, got {} characters",
                hex.len()
            ))),
        }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Color::with_alpha(pixel[0], pixel[1], pixel[2], pixel[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rrggbb() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("#00FF00").unwrap(), Color::new(0, 255, 0));
        assert_eq!(Color::from_hex("#0000FF").unwrap(), Color::new(0, 0, 255));
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#000000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_from_hex_rgb() {
        assert_eq!(Color::from_hex("#F00").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("#FFF").unwrap(), Color::WHITE);
        // A=10*17=170, B=11*17=187, C=12*17=204
        assert_eq!(Color::from_hex("#ABC").unwrap(), Color::new(170, 187, 204));
    }

    #[test]
    fn test_from_hex_rrggbbaa() {
        let color = Color::from_hex("#FF000080").unwrap();
        assert_eq!(color, Color::with_alpha(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_lowercase() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("#abc").unwrap(), Color::new(170, 187, 204));
    }

    #[test]
    fn test_from_hex_invalid() {
        // Missing #
        assert!(Color::from_hex("FF0000").is_err());

        // Wrong length
        assert!(Color::from_hex("#FF00").is_err());
        assert!(Color::from_hex("#FF00000").is_err());

        // Invalid hex
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_rgba_conversion() {
        let pixel: Rgba<u8> = Color::with_alpha(1, 2, 3, 4).into();
        assert_eq!(pixel, Rgba([1, 2, 3, 4]));

        let back: Color = pixel.into();
        assert_eq!(back, Color::with_alpha(1, 2, 3, 4));
    }
}
