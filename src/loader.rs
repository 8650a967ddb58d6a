//! Source image loading helpers.
//!
//! Thin convenience layer for resolving an encoded image (file or in-memory
//! bytes) into the RGBA pixel buffer the builder consumes. The compositor
//! itself never touches encoded data; callers with buffers already in hand
//! can skip this module entirely.

use crate::error::BadgeError;
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Decode an encoded image (PNG, JPEG, WebP, GIF) into an RGBA buffer.
pub fn load_from_bytes(data: &[u8]) -> Result<RgbaImage, BadgeError> {
    let format = image::guess_format(data)
        .map_err(|e| BadgeError::Decode(format!("unrecognized image format: {}", e)))?;

    debug!(?format, bytes = data.len(), "decoding source image");

    let decoded = image::load_from_memory_with_format(data, format)
        .map_err(|e| BadgeError::Decode(e.to_string()))?;

    Ok(decoded.to_rgba8())
}

/// Read and decode an image file into an RGBA buffer.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RgbaImage, BadgeError> {
    let data = std::fs::read(path.as_ref())
        .map_err(|e| BadgeError::Io(format!("{}: {}", path.as_ref().display(), e)))?;

    load_from_bytes(&data)
}
