//! Plate region cropping and glyph segmentation.
//!
//! Given the selected group in image coordinates, the segmenter
//! - computes the group envelope and pads it (clamped to the image),
//! - crops the grayscale frame and moves the members into crop coordinates,
//! - re-binarizes the crop with a Gaussian adaptive threshold, since lighting
//!   inside the plate differs from the full frame,
//! - cuts one glyph per member in left-to-right order.
//!
//! [`glyph_strip`] is a presentation helper that normalizes glyph heights and
//! concatenates them for inspection.

mod options;
mod region;
mod segmenter;
mod strip;
mod threshold;
mod window;

pub use options::SegmentOptions;
pub use region::{crop_region, PlateRegion};
pub use segmenter::{segment_crop, segment_region, Glyph, Segmentation};
pub use strip::glyph_strip;
pub use threshold::adaptive_binarize;
pub use window::{envelope, padded_window, CropWindow};

#[cfg(test)]
mod tests;
