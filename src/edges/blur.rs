use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Normalised 5-tap Gaussian `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Separable Gaussian smoothing with replicated borders.
pub fn gaussian_5tap(src: &ImageF32) -> ImageF32 {
    separable(src, &GAUSSIAN_5TAP)
}

fn separable(src: &ImageF32, taps: &[f32]) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut horiz = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let radius = (taps.len() / 2) as isize;
    let clamp = |v: isize, max: usize| v.clamp(0, max as isize - 1) as usize;

    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = horiz.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            *dst = taps
                .iter()
                .enumerate()
                .map(|(k, &t)| t * src_row[clamp(x as isize + k as isize - radius, w)])
                .sum();
        }
    }
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            *dst = taps
                .iter()
                .enumerate()
                .map(|(k, &t)| t * horiz.get(x, clamp(y as isize + k as isize - radius, h)))
                .sum();
        }
    }
    out
}
