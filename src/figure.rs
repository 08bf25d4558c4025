//! The walking-figure pictogram used on every Healtiefy asset.

use image::{Rgba, RgbaImage};

use crate::draw::{fill_circle, stroke_line};

/// Draw the minimal walking silhouette centred on `(cx, cy)`: a head disk plus
/// torso, two arms, and two legs in mid-stride.
///
/// Every anchor point is `center + scale * fraction`, so one parameter moves
/// the figure and one resizes it uniformly. Stroke widths scale the same way,
/// truncated to whole pixels.
pub fn draw_walking_figure(canvas: &mut RgbaImage, cx: f32, cy: f32, scale: f32, color: Rgba<u8>) {
    if scale <= 0.0 {
        return;
    }
    let s = scale;

    // Head
    fill_circle(canvas, cx, cy - s * 0.32, s * 0.09, color);

    // Torso, leaning slightly into the stride
    let hip = (cx + s * 0.02, cy + s * 0.08);
    stroke_line(canvas, (cx, cy - s * 0.22), hip, (s * 0.055).floor(), color);

    // Arms: back arm swings down, forward arm up
    let shoulder = (cx, cy - s * 0.18);
    let arm_width = (s * 0.045).floor();
    stroke_line(canvas, shoulder, (cx - s * 0.14, cy + s * 0.02), arm_width, color);
    stroke_line(canvas, shoulder, (cx + s * 0.16, cy - s * 0.12), arm_width, color);

    // Legs: one stepping back, one forward
    let leg_width = (s * 0.05).floor();
    stroke_line(canvas, hip, (cx - s * 0.10, cy + s * 0.38), leg_width, color);
    stroke_line(canvas, hip, (cx + s * 0.16, cy + s * 0.38), leg_width, color);
}
