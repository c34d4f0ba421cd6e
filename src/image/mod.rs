//! Minimal image containers used by the lane pipeline.
//!
//! - `GrayImageU8`: owned single-channel 8-bit buffer (ROI masks, edge maps).
//! - `RgbFrame`: borrowed interleaved RGB frame; the pipeline never writes to it.
//! - `ImageF32`: owned float buffer used while filtering.
pub mod f32;
pub mod io;
pub mod rgb;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::rgb::RgbFrame;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::GrayImageU8;
