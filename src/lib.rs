//! Composite a numeric count badge onto a corner of an RGBA image.
//!
//! A badge is a filled circle with a hairline border and a centered decimal
//! count, anchored to one of the four image corners. Typical use is marking
//! an icon or avatar with an unread count.
//!
//! # Usage
//!
//! ```
//! use image::RgbaImage;
//! use numbadge::{BadgeConfig, BadgePosition, Color};
//!
//! let icon = RgbaImage::from_pixel(96, 96, image::Rgba([40, 40, 40, 255]));
//!
//! let config = BadgeConfig::builder()
//!     .image(icon)
//!     .badge_color(Color::from_hex("#F00").unwrap())
//!     .badge_position(BadgePosition::TopRight)
//!     .badge_size(24.0)
//!     .build()
//!     .unwrap();
//!
//! // Zero passes the source through untouched; anything else draws a badge.
//! let unchanged = config.render(0).unwrap();
//! let badged = config.render(12).unwrap();
//! assert_eq!(unchanged.dimensions(), badged.dimensions());
//! ```
//!
//! A built [`BadgeConfig`] is immutable and renders the same pixels for the
//! same value every time, so it can be kept around and shared across threads.

pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod loader;
pub mod position;
pub mod text;

// Re-export main types for convenience
pub use color::Color;
pub use compositor::render;
pub use config::{
    BadgeConfig, BadgeConfigBuilder, DEFAULT_BADGE_COLOR, DEFAULT_BADGE_SIZE, DEFAULT_BORDER_COLOR,
    DEFAULT_TEXT_COLOR,
};
pub use error::BadgeError;
pub use loader::{load_from_bytes, load_from_path};
pub use position::{badge_rect, BadgePosition, BadgeRect};
pub use text::{draw_text, measure_text, vertical_metrics};
