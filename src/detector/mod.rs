//! Plate detector orchestrating extraction, grouping and cropping.
//!
//! Overview
//! - Binarizes the frame (global Otsu, inverted) and gates contour boxes by
//!   shape to obtain character candidates.
//! - Sweeps candidates left to right into groups and selects the most
//!   credible one (at least three members).
//! - Crops the padded envelope of the selected group and annotates both the
//!   full frame and the crop.
//! - Glyph segmentation is performed on demand through
//!   [`PlateReport::segment`].
//!
//! Modules
//! - [`params`] – configuration bundle for all stages.
//! - `pipeline` – the [`PlateDetector`] and its [`PlateReport`].
//! - `batch` – parallel processing of many files.
//!
//! The detector holds no per-image state, so one instance can be shared by
//! any number of threads.

mod batch;
pub mod params;
mod pipeline;

pub use batch::{detect_batch, numbered_inputs, BatchEntry};
pub use params::PlateParams;
pub use pipeline::{PlateDetector, PlateReport};
