//! Corpus input and profile output locations

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Directory scanned for `*.txt` files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Where the profile JSON is written
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("INPUT__INPUT_DIR"));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("INPUT__OUTPUT_FILE"));
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_file: default_output_file(),
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("behavioral_data")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("output/behavioral_profile.json")
}
