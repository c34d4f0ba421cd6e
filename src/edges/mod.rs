//! Binary edge extraction (Canny-style) for road frames.
//!
//! The lane engine only needs "a 0/255 edge map of this frame"; this module
//! provides a default way to get one, behind the `EdgeDetector` trait so a
//! caller can plug in its own primitive:
//!
//! - RGB → luma, optional separable 5-tap Gaussian smoothing.
//! - Sobel gradients with L1 (`|gx|+|gy|`) or L2 magnitude.
//! - Non-maximum suppression along the quantized gradient direction.
//! - Double threshold with 8-connected hysteresis.
//!
//! Thresholds are in Sobel units over 0..255 intensities, so the classic
//! `(50, 150)` pair behaves like it does in common vision toolkits.

pub mod blur;
pub mod grad;
pub mod nms;

pub use grad::{sobel_gradients, Grad};
pub use nms::{hysteresis, suppress_non_maxima};

use crate::image::{GrayImageU8, ImageF32, ImageView, RgbFrame};
use log::debug;
use serde::{Deserialize, Serialize};

/// Produces a binary (0/255) edge map from a color frame.
pub trait EdgeDetector {
    fn detect(&self, frame: &RgbFrame<'_>) -> GrayImageU8;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Smooth with a 5-tap Gaussian before differentiating.
    pub blur: bool,
    /// Weak-edge threshold: pixels above it survive only when connected to a strong edge.
    pub low_threshold: f32,
    /// Strong-edge threshold.
    pub high_threshold: f32,
    /// Use `sqrt(gx^2+gy^2)` instead of `|gx|+|gy|`.
    pub l2_gradient: bool,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            blur: true,
            low_threshold: 50.0,
            high_threshold: 150.0,
            l2_gradient: false,
        }
    }
}

/// Default edge extractor.
#[derive(Clone, Debug, Default)]
pub struct CannyEdges {
    pub params: EdgeParams,
}

impl CannyEdges {
    pub fn new(params: EdgeParams) -> Self {
        Self { params }
    }

    /// Run on an already gray frame.
    pub fn detect_gray(&self, gray: &GrayImageU8) -> GrayImageU8 {
        let mut l = ImageF32::from_gray(gray);
        if self.params.blur {
            l = blur::gaussian_5tap(&l);
        }
        let grad = sobel_gradients(&l, self.params.l2_gradient);
        let (low, high) = ordered_thresholds(self.params.low_threshold, self.params.high_threshold);
        let candidates = suppress_non_maxima(&grad, low);
        let edges = hysteresis(&candidates, high);
        debug!(
            "Edges: {}x{} low={:.1} high={:.1} edge_pixels={}",
            gray.width(),
            gray.height(),
            low,
            high,
            edges.count_nonzero()
        );
        edges
    }
}

impl EdgeDetector for CannyEdges {
    fn detect(&self, frame: &RgbFrame<'_>) -> GrayImageU8 {
        self.detect_gray(&frame.to_gray())
    }
}

fn ordered_thresholds(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_frame(w: usize, h: usize, split_x: usize) -> Vec<u8> {
        let mut buf = vec![0u8; w * h * 3];
        for y in 0..h {
            for x in split_x..w {
                let i = (y * w + x) * 3;
                buf[i..i + 3].fill(255);
            }
        }
        buf
    }

    #[test]
    fn vertical_step_yields_thin_vertical_edge() {
        let (w, h) = (32, 24);
        let buf = step_frame(w, h, 16);
        let frame = RgbFrame::new(w, h, &buf).expect("frame");
        let edges = CannyEdges::default().detect(&frame);

        assert!(edges.data().iter().all(|&v| v == 0 || v == 255));
        for y in 2..h - 2 {
            let row = edges.row(y);
            let count = row.iter().filter(|&&v| v != 0).count();
            assert!(
                (1..=2).contains(&count),
                "row {y}: expected a thin edge, got {count} pixels"
            );
            let xs: Vec<usize> = (0..w).filter(|&x| row[x] != 0).collect();
            assert!(
                xs.iter().all(|&x| (14..=17).contains(&x)),
                "row {y}: edge away from the step: {xs:?}"
            );
        }
    }

    #[test]
    fn flat_frame_has_no_edges() {
        let buf = vec![90u8; 20 * 20 * 3];
        let frame = RgbFrame::new(20, 20, &buf).expect("frame");
        assert_eq!(CannyEdges::default().detect(&frame).count_nonzero(), 0);
    }
}
