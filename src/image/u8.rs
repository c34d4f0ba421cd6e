use super::traits::{ImageView, ImageViewMut};

/// Owned 8-bit single-channel buffer (stride == width).
///
/// Used for ROI masks and binary edge maps, where pixels are either 0 or 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap raw bytes. Returns `None` when `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Zero-initialized buffer of size `width × height`.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels with a non-zero value.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_mismatched_length() {
        assert!(GrayImageU8::from_raw(4, 3, vec![0; 11]).is_none());
        assert!(GrayImageU8::from_raw(4, 3, vec![0; 12]).is_some());
    }

    #[test]
    fn rows_are_tightly_packed() {
        let mut img = GrayImageU8::zeros(3, 2);
        img.row_mut(1).copy_from_slice(&[4, 5, 6]);
        assert_eq!(img.data(), &[0, 0, 0, 4, 5, 6]);
        assert_eq!(img.get(2, 1), 6);
        assert_eq!(img.count_nonzero(), 3);
    }
}
