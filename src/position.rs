//! Badge placement geometry.
//!
//! Computes the bounding rectangle of the badge from the configured corner
//! position, the badge diameter, and the source image dimensions.
//!
//! The rectangle is intentionally not clamped to the image bounds. A badge
//! larger than the image produces a rectangle extending off-canvas and is
//! drawn as computed, matching the historical behavior callers rely on.
//!
//! # Example
//!
//! ```
//! use numbadge::{badge_rect, BadgePosition};
//!
//! let rect = badge_rect(BadgePosition::TopRight, 100, 100, 20.0);
//! assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (80.0, 0.0, 100.0, 20.0));
//! ```

/// Corner of the image the badge is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for BadgePosition {
    fn default() -> Self {
        Self::TopRight
    }
}

/// Axis-aligned bounding rectangle of the badge ellipse, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BadgeRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// Compute the badge bounding rectangle for a given corner.
///
/// `size` is the diameter of the badge ellipse. Coordinates may extend
/// outside the image when `size` exceeds the image dimensions.
pub fn badge_rect(position: BadgePosition, image_width: u32, image_height: u32, size: f32) -> BadgeRect {
    let w = image_width as f32;
    let h = image_height as f32;

    match position {
        BadgePosition::TopLeft => BadgeRect {
            left: 0.0,
            top: 0.0,
            right: size,
            bottom: size,
        },
        BadgePosition::TopRight => BadgeRect {
            left: w - size,
            top: 0.0,
            right: w,
            bottom: size,
        },
        BadgePosition::BottomLeft => BadgeRect {
            left: 0.0,
            top: h - size,
            right: size,
            bottom: h,
        },
        BadgePosition::BottomRight => BadgeRect {
            left: w - size,
            top: h - size,
            right: w,
            bottom: h,
        },
    }
}
