use serde::{Deserialize, Serialize};

/// Shape gate deciding which contour boxes look like a single plate character.
///
/// - `min_aspect..=max_aspect`: accepted `height / width` range (inclusive).
///   Characters are taller than wide; the upper bound is generous to tolerate
///   touching glyphs and segmentation noise.
/// - `min_area..max_area`: accepted `width * height` band (exclusive), which
///   drops single-pixel specks and large background blobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub min_aspect: f64,
    pub max_aspect: f64,
    pub min_area: i64,
    pub max_area: i64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_aspect: 0.8,
            max_aspect: 5.0,
            min_area: 30,
            max_area: 5000,
        }
    }
}
