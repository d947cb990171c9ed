//! Raster helpers shared by the pipeline stages and the demo tools.
//!
//! Rasters are plain `image` buffers: `GrayImage` for luma and binary data,
//! `RgbImage` for annotated overlays.
pub mod draw;
pub mod io;

use image::{GrayImage, RgbImage};

/// Width of the placeholder raster returned when no plate is detected.
pub const PLACEHOLDER_WIDTH: u32 = 150;
/// Height of the placeholder raster returned when no plate is detected.
pub const PLACEHOLDER_HEIGHT: u32 = 50;

/// Black luma raster standing in for a missing plate crop.
pub fn placeholder_gray() -> GrayImage {
    GrayImage::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
}

/// Black RGB raster standing in for a missing plate overlay.
pub fn placeholder_rgb() -> RgbImage {
    RgbImage::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
}
