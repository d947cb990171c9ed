use serde::{Deserialize, Serialize};

/// Thresholds of the admission rule and of the final group selection.
///
/// All admission comparisons are strict. Ratios are relative to the taller of
/// the two boxes being compared; the gap ceiling scales with the width of the
/// incoming candidate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupOptions {
    /// Maximum `|h - lh| / max(h, lh)`.
    pub max_height_diff: f64,
    /// Maximum vertical offset of box centers, relative to `max(h, lh)`.
    pub max_center_offset: f64,
    /// Horizontal gap floor in pixels (negative allows slight overlap).
    pub min_gap_px: i32,
    /// Gap ceiling as a multiple of the candidate width.
    pub max_gap_factor: f64,
    /// Groups with fewer members are discarded.
    pub min_members: usize,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            max_height_diff: 0.6,
            max_center_offset: 0.4,
            min_gap_px: -5,
            max_gap_factor: 2.3,
            min_members: 3,
        }
    }
}
