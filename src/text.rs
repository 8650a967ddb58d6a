//! Badge text measurement and rasterization.
//!
//! Renders the decimal count string with an embedded monospace font. Glyphs
//! are rasterized directly onto the output canvas with coverage-based alpha
//! blending, so no intermediate text buffer is allocated.
//!
//! The embedded font keeps rendering deterministic across hosts; callers
//! never supply fonts and no system font lookup happens.

use crate::color::Color;
use crate::compositor::blend_pixels;
use crate::error::BadgeError;
use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::sync::OnceLock;

/// Default embedded font (DejaVu Sans Mono).
/// Using a monospace font for predictable width calculations.
static DEFAULT_FONT: OnceLock<FontRef<'static>> = OnceLock::new();

const EMBEDDED_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

/// Get the default font, initializing it lazily.
fn get_default_font() -> Result<&'static FontRef<'static>, BadgeError> {
    DEFAULT_FONT.get_or_init(|| {
        FontRef::try_from_slice(EMBEDDED_FONT_DATA)
            .expect("Failed to load embedded font - this is a bug")
    });

    DEFAULT_FONT
        .get()
        .ok_or_else(|| BadgeError::Render("Failed to initialize font".to_string()))
}

/// Measure the advance width of `text` at the given pixel size.
///
/// Accounts for kerning between glyph pairs. Returns the exact width used
/// for center alignment, without padding.
pub fn measure_text(text: &str, size: f32) -> Result<f32, BadgeError> {
    let font = get_default_font()?;
    let scale = PxScale::from(size);
    let scaled_font = font.as_scaled(scale);

    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            width += scaled_font.kern(prev, glyph_id);
        }

        width += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    Ok(width)
}

/// Font ascent and descent at the given pixel size.
///
/// Uses ab_glyph's sign convention: ascent is positive (above the baseline),
/// descent is negative (below it).
pub fn vertical_metrics(size: f32) -> Result<(f32, f32), BadgeError> {
    let font = get_default_font()?;
    let scaled_font = font.as_scaled(PxScale::from(size));
    Ok((scaled_font.ascent(), scaled_font.descent()))
}

/// Rasterize `text` onto `canvas` with the pen starting at `origin_x` on the
/// baseline `baseline_y`.
///
/// Glyph coverage is multiplied with the color's alpha and blended over the
/// existing pixels. Drawing is clipped to the canvas bounds; glyphs that fall
/// outside are silently cropped.
pub fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    origin_x: f32,
    baseline_y: f32,
    size: f32,
    color: Color,
) -> Result<(), BadgeError> {
    let font = get_default_font()?;
    let scale = PxScale::from(size);
    let scaled_font = font.as_scaled(scale);

    let canvas_width = canvas.width() as i32;
    let canvas_height = canvas.height() as i32;

    let mut cursor_x = origin_x;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            cursor_x += scaled_font.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();

            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;

                if x >= 0 && y >= 0 && x < canvas_width && y < canvas_height {
                    let pixel_alpha = (coverage * color.a as f32) as u8;
                    let pixel = Rgba([color.r, color.g, color.b, pixel_alpha]);

                    let existing = canvas.get_pixel(x as u32, y as u32);
                    let blended = blend_pixels(*existing, pixel);
                    canvas.put_pixel(x as u32, y as u32, blended);
                }
            });
        }

        cursor_x += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_scales_with_size() {
        let w1 = measure_text("42", 12.0).unwrap();
        let w2 = measure_text("42", 24.0).unwrap();
        let w3 = measure_text("42", 48.0).unwrap();

        assert!(w1 > 0.0);
        assert!(w2 > w1);
        assert!(w3 > w2);
    }

    #[test]
    fn test_measure_scales_with_length() {
        let short = measure_text("7", 24.0).unwrap();
        let long = measure_text("777", 24.0).unwrap();
        assert!(long > short * 2.0);
    }

    #[test]
    fn test_measure_empty_text() {
        assert_eq!(measure_text("", 24.0).unwrap(), 0.0);
    }

    #[test]
    fn test_vertical_metrics_sign_convention() {
        let (ascent, descent) = vertical_metrics(24.0).unwrap();
        assert!(ascent > 0.0);
        assert!(descent < 0.0);
    }

    #[test]
    fn test_draw_text_produces_pixels() {
        let mut canvas = RgbaImage::new(60, 30);
        draw_text(&mut canvas, "8", 20.0, 24.0, 24.0, Color::WHITE).unwrap();

        let has_content = canvas.pixels().any(|p| p[3] > 0);
        assert!(has_content, "Rendered text should have visible pixels");
    }

    #[test]
    fn test_draw_text_clips_to_canvas() {
        // Glyph positioned mostly off-canvas must not panic
        let mut canvas = RgbaImage::new(10, 10);
        draw_text(&mut canvas, "-123", -15.0, 8.0, 20.0, Color::WHITE).unwrap();
        draw_text(&mut canvas, "9", 8.0, 30.0, 20.0, Color::WHITE).unwrap();
    }

    #[test]
    fn test_minus_sign_measurable() {
        // Negative counts render with their sign
        let signed = measure_text("-5", 24.0).unwrap();
        let unsigned = measure_text("5", 24.0).unwrap();
        assert!(signed > unsigned);
    }
}
