//! Composition routines: each builds one finished asset in its own buffer.
//!
//! Styling follows the iOS Health/Activity look: white rounded square, neon
//! green pictogram, soft drop shadow on the main icon only.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::draw::fill_rounded_rect;
use crate::figure::draw_walking_figure;

/// iOS Activity green (#32D74B).
pub const NEON_GREEN: Rgba<u8> = Rgba([50, 215, 75, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Near-transparent black for the drop shadow layer.
const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 40]);

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Main app icon: white rounded square with the walking figure, over a soft
/// drop shadow. Always returns exactly `size x size`.
///
/// Drawn on an oversized canvas so the shadow blur can bleed past the icon
/// box, then cropped back with a small margin and resampled down to `size`.
pub fn create_main_logo(size: u32) -> RgbaImage {
    let canvas_size = (size as f32 * 1.1) as u32;
    let mut img = RgbaImage::from_pixel(canvas_size, canvas_size, TRANSPARENT);

    let padding = (canvas_size - size) / 2;
    let icon_margin = size as f32 * 0.05;
    let x1 = padding as f32 + icon_margin;
    let y1 = padding as f32 + icon_margin;
    let x2 = (padding + size) as f32 - icon_margin;
    let y2 = (padding + size) as f32 - icon_margin;

    // iOS-style corner radius, ~22% of the icon side.
    let corner_radius = size as f32 * 0.22;

    // Shadow on its own layer: offset down-right, then gaussian blurred.
    let mut shadow = RgbaImage::from_pixel(canvas_size, canvas_size, TRANSPARENT);
    let offset = size as f32 * 0.015;
    fill_rounded_rect(
        &mut shadow,
        (x1 + offset, y1 + offset * 2.0, x2 + offset, y2 + offset * 2.0),
        corner_radius,
        SHADOW,
    );
    let shadow = imageops::blur(&shadow, size as f32 * 0.02);
    imageops::overlay(&mut img, &shadow, 0, 0);

    fill_rounded_rect(&mut img, (x1, y1, x2, y2), corner_radius, WHITE);

    let centre = (canvas_size / 2) as f32;
    draw_walking_figure(&mut img, centre, centre, size as f32 * 0.55, NEON_GREEN);

    // Crop back toward the icon, keeping a sliver of shadow bleed visible.
    let final_margin = (size as f32 * 0.02) as u32;
    let crop_x = padding.saturating_sub(final_margin);
    let crop_side = (size + 2 * final_margin).min(canvas_size - crop_x);
    let cropped = imageops::crop_imm(&img, crop_x, crop_x, crop_side, crop_side).to_image();

    imageops::resize(&cropped, size, size, FilterType::Lanczos3)
}

/// Android adaptive-icon foreground: the figure alone on transparency, held
/// inside the central safe zone that survives every launcher mask shape.
pub fn create_foreground_logo(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let centre = (size / 2) as f32;
    draw_walking_figure(&mut img, centre, centre, size as f32 * 0.45, NEON_GREEN);
    img
}

/// Splash-screen pictogram on transparency; the splash background behind it
/// is dark, so the figure stays green with no backing shape.
pub fn create_splash_logo(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let centre = (size / 2) as f32;
    draw_walking_figure(&mut img, centre, centre, size as f32 * 0.6, NEON_GREEN);
    img
}
