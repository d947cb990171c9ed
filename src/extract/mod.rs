//! Character candidate extraction.
//!
//! The extractor binarizes a grayscale frame with a global Otsu threshold,
//! inverts it so dark glyphs become bright foreground, traces every contour
//! (outer borders and hole borders alike) and keeps the bounding boxes whose
//! shape is consistent with a single plate character.
//!
//! The stage is a pure filter: overlapping or duplicated boxes are passed
//! through unchanged, and an empty candidate list is a valid outcome.

mod extractor;
mod options;

pub use extractor::{
    binarize_inverted, contour_boxes, extract_candidates, filter_candidates,
    is_character_shaped, Extraction,
};
pub use options::ExtractOptions;

#[cfg(test)]
mod tests;
