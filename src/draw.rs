//! Low-level canvas primitives on top of `imageproc`'s rasterizers.
//!
//! Coordinates are inclusive pixel bounds, in the style of box tuples:
//! a rect `(x1, y1, x2, y2)` covers columns `x1..=x2` and rows `y1..=y2`.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Fill a rounded rectangle: two overlapping axis-aligned bands plus one disk
/// per corner, so no native rounded-rect primitive is needed.
///
/// A radius larger than half the shorter side is clamped to that bound;
/// drawing it as given would leave the corner disks overlapping each other.
pub fn fill_rounded_rect(
    canvas: &mut RgbaImage,
    bounds: (f32, f32, f32, f32),
    radius: f32,
    fill: Rgba<u8>,
) {
    let (x1, y1, x2, y2) = bounds;
    if x2 <= x1 || y2 <= y1 {
        return;
    }

    let max_radius = (x2 - x1).min(y2 - y1) / 2.0;
    let r = radius.clamp(0.0, max_radius).floor() as i32;

    let (x1, y1) = (x1.round() as i32, y1.round() as i32);
    let (x2, y2) = (x2.round() as i32, y2.round() as i32);
    let w = x2 - x1 + 1;
    let h = y2 - y1 + 1;

    // Horizontal band between the left and right corner caps.
    if w > 2 * r {
        draw_filled_rect_mut(
            canvas,
            Rect::at(x1 + r, y1).of_size((w - 2 * r) as u32, h as u32),
            fill,
        );
    }
    // Vertical band between the top and bottom caps.
    if h > 2 * r {
        draw_filled_rect_mut(
            canvas,
            Rect::at(x1, y1 + r).of_size(w as u32, (h - 2 * r) as u32),
            fill,
        );
    }

    if r > 0 {
        for (cx, cy) in [
            (x1 + r, y1 + r),
            (x2 - r, y1 + r),
            (x1 + r, y2 - r),
            (x2 - r, y2 - r),
        ] {
            draw_filled_circle_mut(canvas, (cx, cy), r, fill);
        }
    }
}

/// Fill a disk of the given radius centred at `(cx, cy)`.
pub fn fill_circle(canvas: &mut RgbaImage, cx: f32, cy: f32, radius: f32, fill: Rgba<u8>) {
    let r = radius.round() as i32;
    if r <= 0 {
        return;
    }
    draw_filled_circle_mut(canvas, (cx.round() as i32, cy.round() as i32), r, fill);
}

/// Stroke a flat-capped line segment of the given width, rasterized as the
/// filled quad of the segment swept `width / 2` to each side.
pub fn stroke_line(
    canvas: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON || width <= 0.0 {
        return;
    }

    // Unit normal of the segment.
    let (nx, ny) = (-dy / len, dx / len);
    let half = width / 2.0;

    let corner = |px: f32, py: f32, sign: f32| {
        Point::new(
            (px + sign * nx * half).round() as i32,
            (py + sign * ny * half).round() as i32,
        )
    };
    let quad = [
        corner(from.0, from.1, 1.0),
        corner(to.0, to.1, 1.0),
        corner(to.0, to.1, -1.0),
        corner(from.0, from.1, -1.0),
    ];

    // A stroke narrower than a pixel collapses the quad; draw_polygon_mut
    // rejects polygons whose first and last points coincide.
    if quad[0] == quad[3] || quad[1] == quad[2] {
        draw_line_segment_mut(canvas, from, to, color);
        return;
    }
    draw_polygon_mut(canvas, &quad, color);
}
