use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the plate pipeline and its tools.
///
/// Empty candidate sets and rejected groups are not errors; they are reported
/// through [`crate::types::PlateStatus::NotDetected`].
#[derive(Debug, Error)]
pub enum PlateError {
    #[error("Failed to open {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Segmentation requested for an empty group")]
    EmptyGroup,

    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlateError>;
