use super::options::SegmentOptions;
use super::window::{envelope, padded_window, CropWindow};
use crate::image::draw::{outline_on, GROUP_COLOR};
use crate::types::BoundingBox;
use image::imageops::crop_imm;
use image::{GrayImage, RgbImage};

/// Grayscale plate crop with the group translated into crop coordinates.
#[derive(Clone, Debug)]
pub struct PlateRegion {
    pub window: CropWindow,
    pub gray: GrayImage,
    /// Group members relative to the crop origin, in group order.
    pub local_boxes: Vec<BoundingBox>,
}

impl PlateRegion {
    /// RGB copy of the crop with every member outlined.
    pub fn marked_up(&self) -> RgbImage {
        outline_on(&self.gray, &self.local_boxes, GROUP_COLOR, 1)
    }
}

/// Crop `gray` to the padded envelope of `group`. Returns `None` when the
/// group is empty.
pub fn crop_region(
    gray: &GrayImage,
    group: &[BoundingBox],
    options: &SegmentOptions,
) -> Option<PlateRegion> {
    let env = envelope(group)?;
    let window = padded_window(&env, options.padding_px, gray.width(), gray.height());
    let crop = crop_imm(gray, window.x0, window.y0, window.width(), window.height()).to_image();
    let local_boxes = group.iter().map(|b| window.to_local(b)).collect();
    Some(PlateRegion {
        window,
        gray: crop,
        local_boxes,
    })
}
