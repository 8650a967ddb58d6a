//! End-to-end badge rendering tests.
//!
//! Exercises the public API the way an application would: build a config
//! once, render several counts, and inspect output pixels.

use image::{Rgba, RgbaImage};
use numbadge::{badge_rect, BadgeConfig, BadgePosition, Color};

fn solid_image(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

#[test]
fn test_unread_count_scenario() {
    // 100x100 opaque red icon, 20px blue badge at the top right
    let icon = solid_image(100, 100, Rgba([255, 0, 0, 255]));
    let config = BadgeConfig::builder()
        .image(icon)
        .badge_size(20.0)
        .badge_position(BadgePosition::TopRight)
        .badge_color(Color::new(0, 0, 255))
        .build()
        .unwrap();

    let output = config.render(3).unwrap();
    assert_eq!(output.dimensions(), (100, 100));

    // Inside the badge rect, outside border and text
    assert_eq!(output.get_pixel(95, 5), &Rgba([0, 0, 255, 255]));

    // Opposite corner untouched
    assert_eq!(output.get_pixel(5, 95), &Rgba([255, 0, 0, 255]));
}

#[test]
fn test_config_reused_across_renders() {
    let icon = solid_image(64, 64, Rgba([0, 128, 0, 255]));
    let config = BadgeConfig::builder().image(icon.clone()).build().unwrap();

    for value in [0, 1, 9, 99, -3, i32::MAX] {
        let output = config.render(value).unwrap();
        assert_eq!(output.dimensions(), (64, 64));
    }

    // The shared source is never mutated
    assert_eq!(config.source_image().as_raw(), icon.as_raw());
}

#[test]
fn test_zero_count_is_pixel_identical() {
    let icon = solid_image(33, 47, Rgba([12, 34, 56, 200]));
    let config = BadgeConfig::builder().image(icon.clone()).build().unwrap();

    let output = config.render(0).unwrap();
    assert_eq!(output.as_raw(), icon.as_raw());
}

#[test]
fn test_badge_center_differs_from_source_for_each_corner() {
    for position in [
        BadgePosition::TopLeft,
        BadgePosition::TopRight,
        BadgePosition::BottomLeft,
        BadgePosition::BottomRight,
    ] {
        let icon = solid_image(80, 60, Rgba([255, 255, 255, 255]));
        let config = BadgeConfig::builder()
            .image(icon)
            .badge_size(16.0)
            .badge_position(position)
            .badge_color(Color::new(0, 0, 255))
            .text_color(Color::new(0, 0, 255))
            .build()
            .unwrap();

        let rect = badge_rect(position, 80, 60, 16.0);
        let output = config.render(1).unwrap();

        let pixel = output.get_pixel(rect.center_x() as u32, rect.center_y() as u32);
        assert_ne!(
            pixel,
            &Rgba([255, 255, 255, 255]),
            "badge should be visible at {:?}",
            position
        );
    }
}

#[test]
fn test_large_count_overflows_badge_without_error() {
    let icon = solid_image(100, 100, Rgba([0, 0, 0, 255]));
    let config = BadgeConfig::builder()
        .image(icon)
        .badge_size(16.0)
        .text_color(Color::WHITE)
        .build()
        .unwrap();

    // Text wider than the circle is an accepted visual edge case
    let output = config.render(123456).unwrap();
    assert_eq!(output.dimensions(), (100, 100));

    let has_text = output.pixels().any(|p| p[0] > 150 && p[1] > 150 && p[2] > 150);
    assert!(has_text, "overflowing text should still be drawn");
}

#[test]
fn test_loader_round_trip() {
    let icon = solid_image(24, 24, Rgba([5, 6, 7, 255]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    icon.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

    let decoded = numbadge::load_from_bytes(&bytes.into_inner()).unwrap();
    let config = BadgeConfig::builder().image(decoded).build().unwrap();

    let output = config.render(4).unwrap();
    assert_eq!(output.dimensions(), (24, 24));
}
