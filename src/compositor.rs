//! Badge compositor.
//!
//! Draws the badge (filled ellipse, hairline border, centered count text)
//! onto a copy of the configured source image. The compositor holds no state;
//! `render` is a pure function of the configuration and the count value, so a
//! single `BadgeConfig` is safe to share across threads and repeated calls.
//!
//! A count of zero short-circuits to an untouched copy of the source.
//!
//! # Example
//!
//! ```
//! use image::RgbaImage;
//! use numbadge::{render, BadgeConfig};
//!
//! let icon = RgbaImage::from_pixel(48, 48, image::Rgba([0, 0, 0, 255]));
//! let config = BadgeConfig::builder().image(icon).build().unwrap();
//!
//! let plain = render(&config, 0).unwrap();
//! let badged = render(&config, 12).unwrap();
//! assert_eq!(plain.dimensions(), badged.dimensions());
//! ```

use crate::color::Color;
use crate::config::BadgeConfig;
use crate::error::BadgeError;
use crate::position::{badge_rect, BadgeRect};
use crate::text;
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Fraction of the badge rectangle height used as the text size.
const TEXT_SIZE_RATIO: f32 = 0.55;

/// Half-width in pixels of the hairline border stroke.
const BORDER_HALF_WIDTH: f32 = 0.5;

/// Render the badge for `value` onto a copy of the source image.
///
/// Returns a new buffer with the same dimensions as the source. `value == 0`
/// yields a pixel-identical copy with no badge drawn. Any other value,
/// negative included, is formatted with `to_string` and drawn as-is; text
/// wider than the badge overflows the circle rather than erroring.
pub fn render(config: &BadgeConfig, value: i32) -> Result<RgbaImage, BadgeError> {
    let source = config.source_image();

    if value == 0 {
        return Ok(source.clone());
    }

    let mut output = source.clone();
    let rect = badge_rect(
        config.badge_position(),
        output.width(),
        output.height(),
        config.badge_size(),
    );

    debug!(
        value,
        badge_size = config.badge_size(),
        position = ?config.badge_position(),
        "compositing badge"
    );

    fill_ellipse(&mut output, &rect, config.badge_color());
    stroke_ellipse(&mut output, &rect, config.badge_border_color());

    let label = value.to_string();
    let text_size = rect.height() * TEXT_SIZE_RATIO;

    // A degenerate badge size yields a degenerate text size; nothing to draw.
    if text_size > 0.0 {
        let text_width = text::measure_text(&label, text_size)?;
        let (ascent, descent) = text::vertical_metrics(text_size)?;

        // ab_glyph ascent is positive and descent negative, so this places
        // the glyph block's vertical midline on the rectangle's center.
        let origin_x = rect.center_x() - text_width / 2.0;
        let baseline_y = rect.center_y() + (ascent + descent) * 0.5;

        text::draw_text(
            &mut output,
            &label,
            origin_x,
            baseline_y,
            text_size,
            config.text_color(),
        )?;
    }

    Ok(output)
}

/// Signed distance in pixels from a pixel center to the ellipse boundary.
///
/// Positive inside, negative outside. Exact for circles; for non-square
/// rectangles the normalized radial distance is scaled by the minor radius,
/// which is close enough for a one-pixel anti-aliasing band.
fn ellipse_distance(px: f32, py: f32, rect: &BadgeRect) -> f32 {
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let dx = (px - rect.center_x()) / rx;
    let dy = (py - rect.center_y()) / ry;
    (1.0 - (dx * dx + dy * dy).sqrt()) * rx.min(ry)
}

/// Pixel range of the rect axis clipped to the canvas, as an iterable span.
fn clipped_span(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
    let start = lo.floor().max(0.0) as u32;
    let end = (hi.ceil().max(0.0) as u32).min(limit);
    start..end.max(start)
}

/// Fill the ellipse inscribed in `rect` with `color`, anti-aliased over a
/// one-pixel edge band. Drawing is clipped to the canvas; the rectangle
/// itself may extend past it.
fn fill_ellipse(canvas: &mut RgbaImage, rect: &BadgeRect, color: Color) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let (width, height) = canvas.dimensions();
    for y in clipped_span(rect.top, rect.bottom, height) {
        for x in clipped_span(rect.left, rect.right, width) {
            let dist = ellipse_distance(x as f32 + 0.5, y as f32 + 0.5, rect);
            let coverage = (dist + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_coverage(canvas, x, y, color, coverage);
            }
        }
    }
}

/// Stroke a hairline ellipse outline along the boundary of `rect`.
fn stroke_ellipse(canvas: &mut RgbaImage, rect: &BadgeRect, color: Color) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let (width, height) = canvas.dimensions();
    for y in clipped_span(rect.top, rect.bottom, height) {
        for x in clipped_span(rect.left, rect.right, width) {
            let dist = ellipse_distance(x as f32 + 0.5, y as f32 + 0.5, rect);
            let coverage = (BORDER_HALF_WIDTH - dist.abs() + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_coverage(canvas, x, y, color, coverage);
            }
        }
    }
}

/// Blend `color` scaled by `coverage` over the pixel at (x, y).
fn blend_coverage(canvas: &mut RgbaImage, x: u32, y: u32, color: Color, coverage: f32) {
    let top = Rgba([color.r, color.g, color.b, (coverage * color.a as f32) as u8]);
    let existing = canvas.get_pixel(x, y);
    let blended = blend_pixels(*existing, top);
    canvas.put_pixel(x, y, blended);
}

/// Blend two RGBA pixels using alpha compositing.
///
/// Uses the Porter-Duff "over" operator: result = top + bottom * (1 - top.alpha)
pub(crate) fn blend_pixels(bottom: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    let top_alpha = top[3] as f32 / 255.0;
    let bottom_alpha = bottom[3] as f32 / 255.0;

    let out_alpha = top_alpha + bottom_alpha * (1.0 - top_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |t: u8, b: u8| -> u8 {
        let t = t as f32 / 255.0;
        let b = b as f32 / 255.0;
        let result = (t * top_alpha + b * bottom_alpha * (1.0 - top_alpha)) / out_alpha;
        (result * 255.0).clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend(top[0], bottom[0]),
        blend(top[1], bottom[1]),
        blend(top[2], bottom[2]),
        (out_alpha * 255.0) as u8,
    ])
}
