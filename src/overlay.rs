//! Drawing lane results on top of a frame.
//!
//! Lines are rasterized into a black layer which is then added to a copy of
//! the frame with saturation, so the source image is never modified and the
//! overlay stays visible on bright road surfaces.
use crate::lanes::{classify_segment, LaneSide, PixelLaneLine, RawSegment};
use image::{Rgb, RgbImage};

pub const LANE_COLOR: [u8; 3] = [0, 0, 255];
pub const LEFT_SEGMENT_COLOR: [u8; 3] = [0, 0, 255];
pub const RIGHT_SEGMENT_COLOR: [u8; 3] = [255, 0, 0];
pub const LANE_THICKNESS: u32 = 12;
pub const SEGMENT_THICKNESS: u32 = 2;

/// Draw the projected lane lines with a thick stroke.
pub fn draw_lane_lines(
    image: &RgbImage,
    lines: &[PixelLaneLine],
    color: [u8; 3],
    thickness: u32,
) -> RgbImage {
    let mut layer = RgbImage::new(image.width(), image.height());
    for line in lines {
        let (a, b) = line.to_pixels();
        draw_thick_line(&mut layer, a, b, color, thickness);
    }
    add_saturating(image, &layer)
}

/// Draw raw segments, colored by the side they classify to.
///
/// Vertical segments have no side and are skipped.
pub fn draw_hough_lines(image: &RgbImage, segments: &[RawSegment], thickness: u32) -> RgbImage {
    let mut layer = RgbImage::new(image.width(), image.height());
    for seg in segments {
        let Some(cls) = classify_segment(seg) else {
            continue;
        };
        let color = match cls.side {
            LaneSide::Left => LEFT_SEGMENT_COLOR,
            LaneSide::Right => RIGHT_SEGMENT_COLOR,
        };
        draw_thick_line(
            &mut layer,
            (seg.x1, seg.y1),
            (seg.x2, seg.y2),
            color,
            thickness,
        );
    }
    add_saturating(image, &layer)
}

/// Paint every pixel whose centre is within `thickness / 2` of segment `ab`.
fn draw_thick_line(
    img: &mut RgbImage,
    a: (i32, i32),
    b: (i32, i32),
    color: [u8; 3],
    thickness: u32,
) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    if w == 0 || h == 0 {
        return;
    }
    let radius = (thickness.max(1) as f32) * 0.5;
    let reach = radius.ceil() as i64;
    let (ax, ay) = (a.0 as f32, a.1 as f32);
    let (bx, by) = (b.0 as f32, b.1 as f32);

    let x_lo = (a.0.min(b.0) as i64 - reach).max(0);
    let x_hi = (a.0.max(b.0) as i64 + reach).min(w - 1);
    let y_lo = (a.1.min(b.1) as i64 - reach).max(0);
    let y_hi = (a.1.max(b.1) as i64 + reach).min(h - 1);
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }

    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let (px, py) = (x as f32, y as f32);
            let t = if len_sq > 0.0 {
                (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (cx, cy) = (ax + t * dx - px, ay + t * dy - py);
            if cx * cx + cy * cy <= radius * radius {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}

fn add_saturating(base: &RgbImage, layer: &RgbImage) -> RgbImage {
    let mut out = base.clone();
    for (dst, src) in out.pixels_mut().zip(layer.pixels()) {
        for c in 0..3 {
            dst.0[c] = dst.0[c].saturating_add(src.0[c]);
        }
    }
    out
}
