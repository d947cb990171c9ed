use super::options::GroupOptions;
use crate::types::BoundingBox;

/// Whether `candidate` may follow `last` on the same text line.
///
/// Three strict tests must hold at once:
/// - height similarity: `|h - lh| / max(h, lh) < max_height_diff`
/// - vertical alignment: `|cy - lcy| / max(h, lh) < max_center_offset`
/// - spacing: `min_gap_px < x - (lx + lw) < w * max_gap_factor`
///
/// Boxes with no height on either side are never admitted.
pub fn admits(last: &BoundingBox, candidate: &BoundingBox, options: &GroupOptions) -> bool {
    let tallest = f64::from(candidate.height.max(last.height));
    if tallest <= 0.0 {
        return false;
    }

    let height_diff = f64::from((candidate.height - last.height).abs()) / tallest;
    if height_diff >= options.max_height_diff {
        return false;
    }

    let center_offset = (candidate.center_y() - last.center_y()).abs() / tallest;
    if center_offset >= options.max_center_offset {
        return false;
    }

    let gap = candidate.x - last.right_edge();
    gap > options.min_gap_px && f64::from(gap) < f64::from(candidate.width) * options.max_gap_factor
}
