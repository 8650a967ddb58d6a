//! Badge configuration and builder.
//!
//! `BadgeConfig` is the immutable, fully-resolved description of one badge:
//! the source image plus colors, diameter and corner position. It is produced
//! by `BadgeConfigBuilder`, which accumulates optional fields and substitutes
//! defaults at `build()` time. The only hard requirement is a source image.
//!
//! A built config never changes and can be reused across any number of
//! `render` calls with different values.
//!
//! # Example
//!
//! ```
//! use image::RgbaImage;
//! use numbadge::{BadgeConfig, BadgePosition, Color};
//!
//! let icon = RgbaImage::from_pixel(64, 64, image::Rgba([200, 40, 40, 255]));
//! let config = BadgeConfig::builder()
//!     .image(icon)
//!     .badge_color(Color::from_hex("#2196F3").unwrap())
//!     .badge_position(BadgePosition::BottomRight)
//!     .build()
//!     .unwrap();
//!
//! let output = config.render(7).unwrap();
//! assert_eq!(output.dimensions(), (64, 64));
//! ```

use crate::color::Color;
use crate::compositor;
use crate::error::BadgeError;
use crate::position::BadgePosition;
use image::{DynamicImage, RgbaImage};

/// Default badge diameter in pixels.
pub const DEFAULT_BADGE_SIZE: f32 = 20.0;

/// Default badge text color.
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

/// Default badge fill color.
pub const DEFAULT_BADGE_COLOR: Color = Color::RED;

/// Default badge border color.
pub const DEFAULT_BORDER_COLOR: Color = Color::WHITE;

/// Immutable, validated badge appearance parameters.
#[derive(Clone)]
pub struct BadgeConfig {
    source: RgbaImage,
    text_color: Color,
    badge_color: Color,
    badge_border_color: Color,
    badge_size: f32,
    badge_position: BadgePosition,
}

impl std::fmt::Debug for BadgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeConfig")
            .field("dimensions", &(self.source.width(), self.source.height()))
            .field("text_color", &self.text_color)
            .field("badge_color", &self.badge_color)
            .field("badge_border_color", &self.badge_border_color)
            .field("badge_size", &self.badge_size)
            .field("badge_position", &self.badge_position)
            .finish()
    }
}

impl BadgeConfig {
    /// Start building a badge configuration.
    pub fn builder() -> BadgeConfigBuilder {
        BadgeConfigBuilder::new()
    }

    /// The source image the badge is composited onto.
    pub fn source_image(&self) -> &RgbaImage {
        &self.source
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn badge_color(&self) -> Color {
        self.badge_color
    }

    pub fn badge_border_color(&self) -> Color {
        self.badge_border_color
    }

    /// Diameter of the badge ellipse in pixels.
    pub fn badge_size(&self) -> f32 {
        self.badge_size
    }

    pub fn badge_position(&self) -> BadgePosition {
        self.badge_position
    }

    /// Render the badge for `value` onto a copy of the source image.
    ///
    /// Convenience wrapper around [`compositor::render`].
    pub fn render(&self, value: i32) -> Result<RgbaImage, BadgeError> {
        compositor::render(self, value)
    }
}

/// Staged builder for [`BadgeConfig`].
///
/// Every setter returns the builder for chaining. Calling an image setter
/// more than once keeps the last image (last-writer-wins). Any other field
/// left unset falls back to its documented default at `build()`.
#[derive(Debug, Default)]
pub struct BadgeConfigBuilder {
    source: Option<RgbaImage>,
    text_color: Option<Color>,
    badge_color: Option<Color>,
    badge_border_color: Option<Color>,
    badge_size: Option<f32>,
    badge_position: Option<BadgePosition>,
}

impl BadgeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source image from an RGBA pixel buffer.
    pub fn image(mut self, source: RgbaImage) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the source image from any decoded image, converting to RGBA.
    pub fn dynamic_image(mut self, source: &DynamicImage) -> Self {
        self.source = Some(source.to_rgba8());
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn badge_color(mut self, color: Color) -> Self {
        self.badge_color = Some(color);
        self
    }

    pub fn badge_border_color(mut self, color: Color) -> Self {
        self.badge_border_color = Some(color);
        self
    }

    /// Set the badge diameter in pixels.
    ///
    /// The value is not validated or clamped. A diameter exceeding the image
    /// dimensions draws partially off-canvas, as computed.
    pub fn badge_size(mut self, size: f32) -> Self {
        self.badge_size = Some(size);
        self
    }

    pub fn badge_position(mut self, position: BadgePosition) -> Self {
        self.badge_position = Some(position);
        self
    }

    /// Validate and finalize the configuration.
    ///
    /// Fails with [`BadgeError::MissingImage`] if no image setter was ever
    /// called; all other unset fields receive their defaults.
    pub fn build(self) -> Result<BadgeConfig, BadgeError> {
        let source = self.source.ok_or(BadgeError::MissingImage)?;

        Ok(BadgeConfig {
            source,
            text_color: self.text_color.unwrap_or(DEFAULT_TEXT_COLOR),
            badge_color: self.badge_color.unwrap_or(DEFAULT_BADGE_COLOR),
            badge_border_color: self.badge_border_color.unwrap_or(DEFAULT_BORDER_COLOR),
            badge_size: self.badge_size.unwrap_or(DEFAULT_BADGE_SIZE),
            badge_position: self.badge_position.unwrap_or_default(),
        })
    }
}
