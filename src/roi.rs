//! Region-of-interest masking.
//!
//! The ROI is a fixed hexagon expressed as fractions of the frame size. It
//! keeps the lower-central road area and drops the sky and the roadside above
//! 40% of the frame height:
//!
//! ```text
//!          (0.33,0.40)_______(0.66,0.40)
//!                   /         \
//!      (0,0.66)    /           \    (1,0.66)
//!              |                 |
//!      (0,1)   |_________________|  (1,1)
//! ```
//!
//! Vertex coordinates are truncated to whole pixels; the polygon is filled with
//! a scanline rule that includes pixels lying exactly on an edge.
use crate::error::LaneError;
use crate::image::{GrayImageU8, ImageView, ImageViewMut};
use log::trace;

/// Hexagon vertices as `(x, y)` fractions of `(width, height)`.
pub const ROI_VERTICES: [[f32; 2]; 6] = [
    [0.0, 1.0],
    [0.0, 0.66],
    [0.33, 0.4],
    [0.66, 0.4],
    [1.0, 0.66],
    [1.0, 1.0],
];

/// Value written inside the polygon.
pub const MASK_ON: u8 = 255;

/// Pixel vertices of the ROI hexagon for a `w × h` frame.
pub fn roi_polygon(w: usize, h: usize) -> [[i32; 2]; 6] {
    ROI_VERTICES.map(|[fx, fy]| [(w as f32 * fx) as i32, (h as f32 * fy) as i32])
}

/// Single-channel mask of size `w × h`: 255 inside the ROI hexagon, 0 outside.
pub fn build_roi_mask(w: usize, h: usize) -> GrayImageU8 {
    let mut mask = GrayImageU8::zeros(w, h);
    fill_polygon(&mut mask, &roi_polygon(w, h), MASK_ON);
    mask
}

/// Scanline fill of a simple polygon with `value`.
///
/// Rows are sampled at integer `y`; each edge covers the half-open span
/// `[y_min, y_max)` so shared vertices are not counted twice. Horizontal edges
/// are skipped; they are closed by their neighbours.
pub fn fill_polygon(img: &mut GrayImageU8, vertices: &[[i32; 2]], value: u8) {
    let (w, h) = (img.width(), img.height());
    if vertices.len() < 3 || w == 0 || h == 0 {
        return;
    }
    let y_lo = vertices.iter().map(|v| v[1]).min().unwrap_or(0).max(0);
    let y_hi = vertices
        .iter()
        .map(|v| v[1])
        .max()
        .unwrap_or(0)
        .min(h as i32 - 1);

    let mut crossings: Vec<f32> = Vec::with_capacity(vertices.len());
    for y in y_lo..=y_hi {
        crossings.clear();
        let yf = y as f32;
        for (i, a) in vertices.iter().enumerate() {
            let b = &vertices[(i + 1) % vertices.len()];
            if a[1] == b[1] {
                continue;
            }
            let (top, bottom) = if a[1] < b[1] { (a, b) } else { (b, a) };
            if y < top[1] || y >= bottom[1] {
                continue;
            }
            let t = (yf - top[1] as f32) / (bottom[1] - top[1]) as f32;
            crossings.push(top[0] as f32 + t * (bottom[0] - top[0]) as f32);
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        let row = img.row_mut(y as usize);
        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].ceil().max(0.0) as usize;
            let x1 = pair[1].floor().min((w - 1) as f32);
            if x1 < 0.0 {
                continue;
            }
            let x1 = x1 as usize;
            if x0 <= x1 {
                row[x0..=x1].fill(value);
            }
        }
    }
    // The bottom-most polygon row is excluded by the half-open rule; close it
    // when it lies inside the image.
    close_bottom_row(img, vertices, value);
}

fn close_bottom_row(img: &mut GrayImageU8, vertices: &[[i32; 2]], value: u8) {
    let h = img.height() as i32;
    let w = img.width();
    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        let is_bottom = a[1] == b[1] && vertices.iter().all(|v| v[1] <= a[1]);
        if !is_bottom || a[1] < 0 || a[1] >= h {
            continue;
        }
        let x0 = a[0].min(b[0]).max(0) as usize;
        let x1 = (a[0].max(b[0]) as usize).min(w - 1);
        if x0 <= x1 {
            img.row_mut(a[1] as usize)[x0..=x1].fill(value);
        }
    }
}

/// Keep edge pixels that fall inside the mask (bitwise AND).
pub fn apply_mask(edges: &GrayImageU8, mask: &GrayImageU8) -> Result<GrayImageU8, LaneError> {
    if !edges.same_size(mask) {
        return Err(LaneError::SizeMismatch {
            expected: (mask.width(), mask.height()),
            actual: (edges.width(), edges.height()),
        });
    }
    let data = edges
        .data()
        .iter()
        .zip(mask.data())
        .map(|(&e, &m)| e & m)
        .collect();
    let out = GrayImageU8::from_raw(edges.width(), edges.height(), data).ok_or_else(|| {
        LaneError::InvalidInput("masked edge buffer has unexpected length".to_string())
    })?;
    trace!(
        "ROI: kept {} of {} edge pixels",
        out.count_nonzero(),
        edges.count_nonzero()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_vertices_scale_with_frame() {
        let poly = roi_polygon(100, 200);
        assert_eq!(
            poly,
            [[0, 200], [0, 132], [33, 80], [66, 80], [100, 132], [100, 200]]
        );
    }

    #[test]
    fn mask_covers_lower_center_and_excludes_sky() {
        let mask = build_roi_mask(100, 100);
        assert_eq!(mask.get(50, 50), MASK_ON, "road centre inside ROI");
        assert_eq!(mask.get(0, 99), MASK_ON, "bottom-left corner inside ROI");
        assert_eq!(mask.get(99, 99), MASK_ON, "bottom-right corner inside ROI");
        assert_eq!(mask.get(50, 10), 0, "sky outside ROI");
        assert_eq!(mask.get(5, 45), 0, "upper-left roadside outside ROI");
        assert_eq!(mask.get(94, 45), 0, "upper-right roadside outside ROI");
        assert_eq!(mask.get(40, 40), MASK_ON, "top edge is inclusive");
        assert_eq!(mask.get(40, 39), 0);
    }

    #[test]
    fn mask_is_binary() {
        let mask = build_roi_mask(64, 48);
        assert!(mask.data().iter().all(|&v| v == 0 || v == MASK_ON));
        assert!(mask.count_nonzero() > 0);
    }

    #[test]
    fn apply_mask_intersects_and_checks_size() {
        let edges = GrayImageU8::from_raw(100, 100, vec![255; 100 * 100]).expect("buffer");
        let mask = build_roi_mask(100, 100);
        let masked = apply_mask(&edges, &mask).expect("same size");
        assert_eq!(masked, mask);

        let small = GrayImageU8::zeros(10, 10);
        assert!(matches!(
            apply_mask(&small, &mask),
            Err(LaneError::SizeMismatch { .. })
        ));
    }
}
