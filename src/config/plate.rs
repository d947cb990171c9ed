use crate::detector::PlateParams;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the single-image `plate_demo` tool.
#[derive(Debug, Deserialize)]
pub struct PlateToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: PlateParams,
    pub output: PlateOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct PlateOutputConfig {
    /// Folder receiving the PNG artifacts.
    pub dir: PathBuf,
    /// Where to write the JSON summary; stdout when absent.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PlateToolConfig> {
    super::read_json(path)
}
