//! I/O helpers for RGB rasters and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned [`Raster`].
//! - `save_rgb_image`: write a [`Raster`] to an image file.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Pixel, Raster};
use image::{Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to an 8-bit RGB raster.
pub fn load_rgb_image(path: &Path) -> Result<Raster, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let mut out = Raster::new(w, h);
    for y in 0..h {
        let row = out.row_mut(y);
        for (x, dst) in row.iter_mut().enumerate() {
            let Rgb([r, g, b]) = *img.get_pixel(x as u32, y as u32);
            *dst = Pixel { r, g, b };
        }
    }
    Ok(out)
}

/// Save a raster to an image file, inferring the format from the extension.
pub fn save_rgb_image(raster: &Raster, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(raster.w as u32, raster.h as u32);
    for y in 0..raster.h {
        for (x, px) in raster.row(y).iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb([px.r, px.g, px.b]));
        }
    }
    out.save(path)
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
