//! Sobel image gradients.
//!
//! - Convolves the 3×3 Sobel pair with border clamping.
//! - Outputs per-pixel `gx`, `gy` and a magnitude, either L1 (`|gx|+|gy|`) or
//!   L2 (`sqrt(gx^2+gy^2)`).
//!
//! Complexity: O(W·H); memory: three float buffers.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative
    pub gy: ImageF32,
    /// Gradient magnitude (L1 or L2, see `sobel_gradients`)
    pub mag: ImageF32,
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32, l2: bool) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = if l2 {
                (sum_x * sum_x + sum_y * sum_y).sqrt()
            } else {
                sum_x.abs() + sum_y.abs()
            };
        }
    }

    Grad { gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_ramp_has_constant_gx() {
        let mut img = ImageF32::new(8, 4);
        for y in 0..4 {
            for x in 0..8 {
                img.set(x, y, x as f32 * 10.0);
            }
        }
        let grad = sobel_gradients(&img, false);
        // interior: (x+1 - (x-1)) * 10 * (1 + 2 + 1)
        assert_eq!(grad.gx.get(3, 2), 80.0);
        assert_eq!(grad.gy.get(3, 2), 0.0);
        assert_eq!(grad.mag.get(3, 2), 80.0);
    }
}
