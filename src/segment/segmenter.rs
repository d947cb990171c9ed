use super::options::SegmentOptions;
use super::region::PlateRegion;
use super::threshold::adaptive_binarize;
use super::window::clip_to_raster;
use crate::error::{PlateError, Result};
use crate::image::draw::{outline_on, GROUP_COLOR};
use crate::types::BoundingBox;
use image::imageops::crop_imm;
use image::{GrayImage, RgbImage};

/// One character cut out of the binarized plate.
#[derive(Clone, Debug)]
pub struct Glyph {
    /// Crop-local box the glyph was cut from.
    pub bounds: BoundingBox,
    pub raster: GrayImage,
}

/// Ordered glyphs plus the rasters they were cut from.
#[derive(Clone, Debug)]
pub struct Segmentation {
    /// Glyphs in reading order (ascending local `x`).
    pub glyphs: Vec<Glyph>,
    /// Crop with every glyph box outlined.
    pub marked: RgbImage,
    /// Adaptive-threshold binarization of the crop.
    pub binary: GrayImage,
}

/// Cut one glyph per member of `region`, left to right.
pub fn segment_region(region: &PlateRegion, options: &SegmentOptions) -> Result<Segmentation> {
    segment_crop(&region.gray, &region.local_boxes, options)
}

/// Cut one glyph per crop-local box from `crop`, left to right.
///
/// The crop is re-binarized locally instead of reusing the full-frame
/// threshold. Calling this without boxes is reported as
/// [`PlateError::EmptyGroup`].
pub fn segment_crop(
    crop: &GrayImage,
    local_boxes: &[BoundingBox],
    options: &SegmentOptions,
) -> Result<Segmentation> {
    if local_boxes.is_empty() {
        return Err(PlateError::EmptyGroup);
    }

    let binary = adaptive_binarize(crop, options);

    let mut ordered = local_boxes.to_vec();
    ordered.sort_by_key(|b| b.x);

    let glyphs = ordered
        .iter()
        .map(|b| {
            let (x, y, w, h) = clip_to_raster(b, binary.width(), binary.height());
            Glyph {
                bounds: *b,
                raster: crop_imm(&binary, x, y, w, h).to_image(),
            }
        })
        .collect();

    Ok(Segmentation {
        glyphs,
        marked: outline_on(crop, &ordered, GROUP_COLOR, 1),
        binary,
    })
}
