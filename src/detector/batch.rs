//! Parallel processing of many input files.
//!
//! Frames are independent, so each path is handled by its own rayon task.
//! A file that fails to decode produces an entry with
//! [`PlateStatus::LoadFailed`] and no report; the others are unaffected.

use super::pipeline::{PlateDetector, PlateReport};
use crate::diagnostics::BatchSummary;
use crate::error::PlateError;
use crate::types::PlateStatus;
use log::warn;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome for one input path.
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub status: PlateStatus,
    pub report: Option<PlateReport>,
    pub error: Option<PlateError>,
}

impl BatchEntry {
    /// File name used in listings (falls back to the full path).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            name: self.name(),
            status: self.status.to_string(),
            error: self.error.as_ref().map(ToString::to_string),
            report: self.report.as_ref().map(PlateReport::summary),
        }
    }
}

/// Process every path in parallel; the output keeps the input order.
pub fn detect_batch(detector: &PlateDetector, paths: &[PathBuf]) -> Vec<BatchEntry> {
    paths
        .par_iter()
        .map(|path| match detector.process_path(path) {
            Ok(report) => BatchEntry {
                path: path.clone(),
                status: report.status,
                report: Some(report),
                error: None,
            },
            Err(err) => {
                warn!("detect_batch: {err}");
                BatchEntry {
                    path: path.clone(),
                    status: PlateStatus::LoadFailed,
                    report: None,
                    error: Some(err),
                }
            }
        })
        .collect()
}

/// Paths `dir/<prefix><NN>.<extension>` for `first..=last`, with two-digit
/// zero-padded indices (`img01.png`, `img02.png`, ...).
pub fn numbered_inputs(
    dir: &Path,
    prefix: &str,
    first: u32,
    last: u32,
    extension: &str,
) -> Vec<PathBuf> {
    (first..=last)
        .map(|i| dir.join(format!("{prefix}{i:02}.{extension}")))
        .collect()
}
