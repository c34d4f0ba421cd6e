//! Non-maximum suppression and hysteresis thresholding.
//!
//! NMS compares each pixel with its two neighbours along the gradient
//! direction quantized to 0°, 45°, 90° or 135°. Ties are broken
//! asymmetrically (strictly greater than the "previous" neighbour, greater or
//! equal to the "next" one) so a two-pixel-wide plateau keeps exactly one
//! pixel. The outermost 1-pixel frame is never marked.
use super::grad::Grad;
use crate::image::{GrayImageU8, ImageF32, ImageView};
use std::collections::VecDeque;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Edge value written to the output map.
pub const EDGE_ON: u8 = 255;

/// Thin the gradient magnitude to ridge pixels above `low`.
///
/// Returns the magnitude at surviving pixels and 0 elsewhere.
pub fn suppress_non_maxima(grad: &Grad, low: f32) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= low {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (before, after) = if abs_gy <= abs_gx * TAN_22_5_DEG {
                (mag_row[x - 1], mag_row[x + 1])
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            if mag > before && mag >= after {
                out.set(x, y, mag);
            }
        }
    }
    out
}

/// Keep candidate pixels above `high` plus every candidate 8-connected to them.
pub fn hysteresis(candidates: &ImageF32, high: f32) -> GrayImageU8 {
    let (w, h) = (candidates.w, candidates.h);
    let mut out = GrayImageU8::zeros(w, h);
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            if candidates.get(x, y) > high && out.get(x, y) == 0 {
                out.set(x, y, EDGE_ON);
                queue.push_back((x, y));
            }
            while let Some((cx, cy)) = queue.pop_front() {
                for ny in cy.saturating_sub(1)..=(cy + 1).min(h - 1) {
                    for nx in cx.saturating_sub(1)..=(cx + 1).min(w - 1) {
                        if out.get(nx, ny) == 0 && candidates.get(nx, ny) > 0.0 {
                            out.set(nx, ny, EDGE_ON);
                            queue.push_back((nx, ny));
                        }
                    }
                }
            }
        }
    }
    out
}
