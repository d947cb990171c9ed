use crate::detector::{numbered_inputs, PlateParams};
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the `plate_batch` tool: a numbered series of files such as
/// `img01.png ... img12.png` in one folder.
#[derive(Debug, Deserialize)]
pub struct BatchToolConfig {
    pub input_dir: PathBuf,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_first")]
    pub first: u32,
    #[serde(default = "default_last")]
    pub last: u32,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub params: PlateParams,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl BatchToolConfig {
    pub fn inputs(&self) -> Vec<PathBuf> {
        numbered_inputs(
            &self.input_dir,
            &self.prefix,
            self.first,
            self.last,
            &self.extension,
        )
    }
}

fn default_prefix() -> String {
    "img".to_string()
}

fn default_first() -> u32 {
    1
}

fn default_last() -> u32 {
    12
}

fn default_extension() -> String {
    "png".to_string()
}

pub fn load_config(path: &Path) -> Result<BatchToolConfig> {
    super::read_json(path)
}
