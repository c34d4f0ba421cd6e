//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used by the edge extractor for smoothing and gradients.
use super::traits::{ImageView, ImageViewMut};
use super::u8::GrayImageU8;

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Promote an 8-bit image, keeping the 0..255 range.
    pub fn from_gray(gray: &GrayImageU8) -> Self {
        Self {
            w: gray.width(),
            h: gray.height(),
            data: gray.data().iter().map(|&v| v as f32).collect(),
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.data[y * self.w + x] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
