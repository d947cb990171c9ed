use super::timing::TimingBreakdown;
use crate::segment::CropWindow;
use crate::types::BoundingBox;
use serde::Serialize;

/// Serializable digest of a detector run, without the rasters.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateSummary {
    /// Display form of the status, e.g. `Detected (6)`.
    pub status: String,
    pub detected: bool,
    pub image_width: u32,
    pub image_height: u32,
    pub contours_total: usize,
    pub candidates: Vec<BoundingBox>,
    pub groups_total: usize,
    /// Selected group in image coordinates.
    pub group: Vec<BoundingBox>,
    pub crop: Option<CropWindow>,
    /// Selected group in crop coordinates.
    pub local_boxes: Vec<BoundingBox>,
    pub timing: TimingBreakdown,
}

/// Batch line for one input path.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PlateSummary>,
}
