//! I/O helpers for frames, masks and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB buffer.
//! - `save_gray_u8`: write an edge map or mask to a grayscale PNG.
//! - `save_rgb`: write an overlay image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::u8::GrayImageU8;
use super::ImageView;
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    Ok(image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8())
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_gray_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an RGB image, format chosen from the file extension.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
