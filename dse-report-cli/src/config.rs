//! Configuration loading and parsing
//!
//! An optional TOML file can preselect the decision model and the output
//! file. Command-line flags always win over values from the file.

use anyhow::{Context, Result};
use dse_result_reader::DecisionModel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub decision_model: DecisionModelConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[decision_model]` table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecisionModelConfig {
    /// `multicore` or `multicore-and-pl`
    pub preset: Option<String>,
    /// Custom tag, overrides the preset tag
    pub tag: Option<String>,
    pub logic_area_mapping: Option<bool>,
    pub average_execution_time: Option<bool>,
}

/// `[output]` table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Write the report here instead of stdout
    pub file: Option<PathBuf>,
}

impl DecisionModelConfig {
    /// Resolve into a decision model; unset fields keep the preset's values
    ///
    /// A custom tag without a preset starts with both flags off.
    pub fn resolve(&self) -> Result<DecisionModel> {
        let mut model = match (&self.preset, &self.tag) {
            (Some(preset), _) => DecisionModel::from_preset(preset)?,
            (None, Some(tag)) => DecisionModel::new(tag.clone()),
            (None, None) => DecisionModel::default(),
        };

        if let Some(tag) = &self.tag {
            model = model.with_tag(tag.clone());
        }
        if let Some(enabled) = self.logic_area_mapping {
            model = model.with_logic_area_mapping(enabled);
        }
        if let Some(enabled) = self.average_execution_time {
            model = model.with_average_execution_time(enabled);
        }

        Ok(model)
    }

    /// Overlay values from another table (the command line) on top of this one
    pub fn merge(&mut self, other: DecisionModelConfig) {
        if other.preset.is_some() {
            self.preset = other.preset;
        }
        if other.tag.is_some() {
            self.tag = other.tag;
        }
        if other.logic_area_mapping.is_some() {
            self.logic_area_mapping = other.logic_area_mapping;
        }
        if other.average_execution_time.is_some() {
            self.average_execution_time = other.average_execution_time;
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
