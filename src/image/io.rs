//! I/O helpers for rasters and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit luma buffer.
//! - `save_gray` / `save_rgb`: write rasters to disk, creating parent folders.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{PlateError, Result};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|source| PlateError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.into_luma8())
}

/// Save an 8-bit grayscale raster; the format follows the file extension.
pub fn save_gray(image: &GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| PlateError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Save an RGB raster; the format follows the file extension.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| PlateError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
