//! Badge error types.
//!
//! Defines errors that can occur while building a badge configuration or
//! rendering a badge.

use std::fmt;

/// Errors that can occur during badge configuration and rendering.
#[derive(Debug)]
pub enum BadgeError {
    /// Builder finalized without any source image set
    MissingImage,

    /// Failed to read a source image from disk
    Io(String),

    /// Failed to decode a source image
    Decode(String),

    /// Failed to render badge text
    Render(String),
}

impl fmt::Display for BadgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingImage => write!(f, "Badge source image can not be missing"),
            Self::Io(msg) => write!(f, "Failed to read source image: {}", msg),
            Self::Decode(msg) => write!(f, "Failed to decode source image: {}", msg),
            Self::Render(msg) => write!(f, "Failed to render badge text: {}", msg),
        }
    }
}

impl std::error::Error for BadgeError {}
