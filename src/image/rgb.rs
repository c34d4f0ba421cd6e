//! Borrowed interleaved RGB frame.
//!
//! The frame is the caller's buffer; stages only read it. Anything that draws
//! on a frame (see `crate::overlay`) works on its own copy.
//!
//! Frames can only be built through checked constructors, so a frame always
//! has non-zero dimensions and exactly `3 · w · h` bytes.
use super::u8::GrayImageU8;
use crate::error::LaneError;

#[derive(Clone, Copy, Debug)]
pub struct RgbFrame<'a> {
    w: usize,
    h: usize,
    /// Tightly packed `R, G, B` triples, row-major.
    data: &'a [u8],
}

impl<'a> RgbFrame<'a> {
    /// Build a frame view, checking dimensions against the buffer size.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self, LaneError> {
        crate::pipeline::validate_frame(w, h)?;
        if data.len() != w * h * 3 {
            return Err(LaneError::InvalidInput(format!(
                "RGB buffer has {} bytes, expected {} for {w}x{h}",
                data.len(),
                w * h * 3
            )));
        }
        Ok(Self { w, h, data })
    }

    /// View over an `image::RgbImage`; empty images are rejected.
    pub fn from_rgb_image(img: &'a image::RgbImage) -> Result<Self, LaneError> {
        Self::new(img.width() as usize, img.height() as usize, img.as_raw())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.w + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Luma conversion with BT.601 weights, rounded to nearest.
    pub fn to_gray(&self) -> GrayImageU8 {
        let mut out = GrayImageU8::zeros(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                let [r, g, b] = self.pixel(x, y);
                let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
                out.set(x, y, luma.round().clamp(0.0, 255.0) as u8);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions_and_short_buffers() {
        let buf = vec![0u8; 12];
        assert!(RgbFrame::new(0, 4, &buf).is_err());
        assert!(RgbFrame::new(2, 2, &buf[..11]).is_err());
        assert!(RgbFrame::new(2, 2, &buf).is_ok());
    }

    #[test]
    fn rgb_image_views_share_the_checks() {
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        let frame = RgbFrame::from_rgb_image(&img).expect("valid image");
        assert_eq!((frame.width(), frame.height()), (3, 2));
        assert_eq!(frame.pixel(2, 1), [10, 20, 30]);

        let empty = image::RgbImage::new(0, 5);
        assert!(matches!(
            RgbFrame::from_rgb_image(&empty),
            Err(LaneError::InvalidInput(_))
        ));
    }

    #[test]
    fn gray_of_white_and_black() {
        let buf = [255u8, 255, 255, 0, 0, 0];
        let frame = RgbFrame::new(2, 1, &buf).expect("valid frame");
        let gray = frame.to_gray();
        assert_eq!(gray.get(0, 0), 255);
        assert_eq!(gray.get(1, 0), 0);
    }
}
