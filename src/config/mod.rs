//! JSON configs for the demo binaries.
pub mod batch;
pub mod plate;

use crate::error::{PlateError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| PlateError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&data).map_err(|e| PlateError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
