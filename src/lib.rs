#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod types;

// Stage modules – usable on their own for experiments and tools.
pub mod config;
pub mod extract;
pub mod group;
pub mod segment;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{PlateDetector, PlateParams, PlateReport};
pub use crate::error::PlateError;
pub use crate::types::{BoundingBox, PlateStatus};

// Stage entry points that are generally useful without the detector.
pub use crate::extract::extract_candidates;
pub use crate::group::group_candidates;
pub use crate::segment::{crop_region, segment_region};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use plate_locator::prelude::*;
///
/// # fn main() {
/// let gray = image::GrayImage::from_pixel(320, 120, image::Luma([200]));
/// let detector = PlateDetector::new(PlateParams::default());
/// let report = detector.process(&gray);
/// println!("{} latency_ms={:.3}", report.status, report.timing.total_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::detector::{PlateDetector, PlateParams, PlateReport};
    pub use crate::types::{BoundingBox, PlateStatus};
}
