use std::{fs, path::Path};

use regression::{DescentConfig, FitterConfig, GeneratorConfig};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Everything a run needs, loaded from an optional JSON file.
///
/// Missing fields fall back to the defaults of the overfitting demonstration:
/// 20 training points, 100 test points and up to 15 predictors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seeds the dataset and the baseline's initial model; random when absent.
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
    pub fitter: FitterConfig,
    pub descent: DescentConfig,
    pub format: OutputFormat,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
