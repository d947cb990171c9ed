//! Detector pipeline orchestrating end-to-end plate localisation.
//!
//! The [`PlateDetector`] exposes a simple API: feed a grayscale frame and get
//! the binarized frame, annotated overlays, the plate crop and a status.
//!
//! Typical usage:
//! ```no_run
//! use plate_locator::{PlateDetector, PlateParams};
//! use std::path::Path;
//!
//! # fn example() -> plate_locator::error::Result<()> {
//! let detector = PlateDetector::new(PlateParams::default());
//! let report = detector.process_path(Path::new("img01.png"))?;
//! println!("{}", report.status);
//! if let Some(seg) = report.segment(&detector.params().segment) {
//!     println!("{} glyphs", seg.glyphs.len());
//! }
//! # Ok(())
//! # }
//! ```

// Stages
// - Extract: Otsu binarization (inverted), contour boxes, shape gate.
// - Group: left-to-right greedy sweep, selection of the best group.
// - Crop: padded envelope clamped to the frame, members moved to crop space.
// - Annotate: candidate overlay on the frame, member overlay on the crop.
// Glyph segmentation is not part of `process`; it runs on demand.

use super::params::PlateParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{PlateSummary, Stage, TimingBreakdown};
use crate::error::Result;
use crate::extract::{extract_candidates, ExtractOptions, Extraction};
use crate::group::{build_groups, select_group, GroupOptions};
use crate::image::draw::{outline_on, CANDIDATE_COLOR};
use crate::image::io::load_grayscale_image;
use crate::image::{placeholder_gray, placeholder_rgb};
use crate::segment::{crop_region, segment_crop, CropWindow, SegmentOptions, Segmentation};
use crate::types::{BoundingBox, PlateStatus};
use image::{GrayImage, RgbImage};
use log::debug;
use std::path::Path;
use std::time::Instant;

/// Plate detector running extraction, grouping and cropping on one frame.
#[derive(Clone, Debug, Default)]
pub struct PlateDetector {
    params: PlateParams,
}

/// Everything produced for one frame.
#[derive(Clone, Debug)]
pub struct PlateReport {
    /// Inverted Otsu binarization of the full frame.
    pub binary: GrayImage,
    /// Frame with every candidate outlined.
    pub candidates_overlay: RgbImage,
    /// Plate crop with the selected members outlined, or a blank placeholder.
    pub plate_overlay: RgbImage,
    /// Selected members in crop coordinates (empty when not detected).
    pub local_boxes: Vec<BoundingBox>,
    /// Grayscale plate crop, or a blank placeholder.
    pub plate_crop: GrayImage,
    pub status: PlateStatus,
    /// All shape-gated candidates in discovery order.
    pub candidates: Vec<BoundingBox>,
    /// Selected members in frame coordinates.
    pub group: Vec<BoundingBox>,
    pub crop_window: Option<CropWindow>,
    pub contours_total: usize,
    pub groups_total: usize,
    pub image_size: (u32, u32),
    pub timing: TimingBreakdown,
}

impl PlateDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: PlateParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PlateParams {
        &self.params
    }

    /// Update the candidate shape gate.
    pub fn set_extract_options(&mut self, options: ExtractOptions) {
        self.params.extract = options;
    }

    /// Update admission thresholds and the minimum group size.
    pub fn set_group_options(&mut self, options: GroupOptions) {
        self.params.group = options;
    }

    /// Update crop padding and local thresholding.
    pub fn set_segment_options(&mut self, options: SegmentOptions) {
        self.params.segment = options;
    }

    /// Decode `path` as grayscale and process it.
    pub fn process_path(&self, path: &Path) -> Result<PlateReport> {
        let gray = load_grayscale_image(path)?;
        Ok(self.process(&gray))
    }

    /// Run extraction, grouping and cropping on one grayscale frame.
    pub fn process(&self, gray: &GrayImage) -> PlateReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let Extraction {
            binary,
            candidates,
            contours_total,
            elapsed_ms: extract_ms,
        } = extract_candidates(gray, &self.params.extract);
        timing.record(Stage::Extract, extract_ms);
        debug!(
            "PlateDetector::process {}x{}: {} candidates out of {} contours",
            gray.width(),
            gray.height(),
            candidates.len(),
            contours_total
        );

        let (groups_total, selected) = timing.time(Stage::Group, || {
            let groups = build_groups(&candidates, &self.params.group);
            (groups.len(), select_group(groups, &self.params.group))
        });
        let group = selected.map(|g| g.into_members()).unwrap_or_default();

        let region = timing.time(Stage::Crop, || {
            crop_region(gray, &group, &self.params.segment)
        });

        let annotate_start = Instant::now();
        let candidates_overlay = outline_on(gray, &candidates, CANDIDATE_COLOR, 2);
        let (status, plate_overlay, plate_crop, local_boxes, crop_window) = match region {
            Some(region) => {
                debug!(
                    "PlateDetector::process selected {} members from {} groups, crop {:?}",
                    group.len(),
                    groups_total,
                    region.window
                );
                (
                    PlateStatus::from_group(&group),
                    region.marked_up(),
                    region.gray,
                    region.local_boxes,
                    Some(region.window),
                )
            }
            None => {
                debug!(
                    "PlateDetector::process no group with >= {} members among {} groups",
                    self.params.group.min_members, groups_total
                );
                (
                    PlateStatus::NotDetected,
                    placeholder_rgb(),
                    placeholder_gray(),
                    Vec::new(),
                    None,
                )
            }
        };
        timing.record(Stage::Annotate, elapsed_ms(annotate_start));
        timing.total_ms = elapsed_ms(total_start);

        PlateReport {
            binary,
            candidates_overlay,
            plate_overlay,
            local_boxes,
            plate_crop,
            status,
            candidates,
            group,
            crop_window,
            contours_total,
            groups_total,
            image_size: gray.dimensions(),
            timing,
        }
    }
}

impl PlateReport {
    pub fn is_detected(&self) -> bool {
        self.status.is_detected()
    }

    /// Segment the plate crop into glyphs. `None` when no plate was detected.
    pub fn segment(&self, options: &SegmentOptions) -> Option<Segmentation> {
        if !self.is_detected() {
            return None;
        }
        match segment_crop(&self.plate_crop, &self.local_boxes, options) {
            Ok(segmentation) => Some(segmentation),
            Err(err) => {
                debug!("PlateReport::segment skipped: {err}");
                None
            }
        }
    }

    /// Raster-free digest suitable for JSON output.
    pub fn summary(&self) -> PlateSummary {
        PlateSummary {
            status: self.status.to_string(),
            detected: self.is_detected(),
            image_width: self.image_size.0,
            image_height: self.image_size.1,
            contours_total: self.contours_total,
            candidates: self.candidates.clone(),
            groups_total: self.groups_total,
            group: self.group.clone(),
            crop: self.crop_window,
            local_boxes: self.local_boxes.clone(),
            timing: self.timing.clone(),
        }
    }
}
