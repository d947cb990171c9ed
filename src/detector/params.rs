//! Parameter types configuring the detector stages.
//!
//! Each stage owns its option struct; `PlateParams` bundles them so a single
//! JSON object can configure a whole run. Every field has a default, so
//! partial configs are accepted.

use crate::extract::ExtractOptions;
use crate::group::GroupOptions;
use crate::segment::SegmentOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateParams {
    /// Shape gate applied to contour boxes.
    pub extract: ExtractOptions,
    /// Admission rule thresholds and minimum group size.
    pub group: GroupOptions,
    /// Crop padding, adaptive threshold and glyph strip layout.
    pub segment: SegmentOptions,
}
