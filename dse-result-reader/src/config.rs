//! Decision model configuration
//!
//! A decision model names one family of result files produced by the DSE tool.
//! The tag selects which files are parsed; the two flags capture the small
//! schema differences between the known families.

use crate::types::{ReportError, Result};
use serde::{Deserialize, Serialize};

/// Extension of result files written by the DSE tool
pub const RESULT_EXTENSION: &str = ".json";

/// Marker carried by dominated, non-final exploration points
pub const INTERMEDIATE_MARKER: &str = "intermediate";

/// Tag of the pure multicore decision model
pub const MULTICORE_TAG: &str =
    "AperiodicAsynchronousDataflowToPartitionedMemoryMappableMulticore_Orchestratror.json";

/// Tag of the multicore + programmable logic decision model
pub const MULTICORE_AND_PL_TAG: &str =
    "AperiodicAsynchronousDataflowToPartitionedMemoryMappableMulticoreAndPL";

/// Which result-file family to report on, and how to read it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionModel {
    /// Substring identifying the result-file family
    pub tag: String,

    /// Merge the programmable-logic-area mapping into the actor mapping
    #[serde(default)]
    pub logic_area_mapping: bool,

    /// Print the average execution time of each actor
    #[serde(default)]
    pub average_execution_time: bool,
}

impl Default for DecisionModel {
    fn default() -> Self {
        Self::multicore()
    }
}

impl DecisionModel {
    /// Create a decision model for a custom tag with both flags disabled
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            logic_area_mapping: false,
            average_execution_time: false,
        }
    }

    /// Pure multicore results; these carry average execution times
    pub fn multicore() -> Self {
        Self::new(MULTICORE_TAG).with_average_execution_time(true)
    }

    /// Multicore + programmable logic results; actors may be mapped to logic areas
    pub fn multicore_and_pl() -> Self {
        Self::new(MULTICORE_AND_PL_TAG).with_logic_area_mapping(true)
    }

    /// Resolve a preset by name (`multicore` or `multicore-and-pl`)
    pub fn from_preset(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "multicore" => Ok(Self::multicore()),
            "multicore-and-pl" | "multicore_and_pl" => Ok(Self::multicore_and_pl()),
            _ => Err(ReportError::UnknownPreset(name.to_string())),
        }
    }

    /// Builder method: replace the tag, keeping the flags
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Builder method: enable or disable the logic-area mapping merge
    pub fn with_logic_area_mapping(mut self, enabled: bool) -> Self {
        self.logic_area_mapping = enabled;
        self
    }

    /// Builder method: enable or disable the average execution time line
    pub fn with_average_execution_time(mut self, enabled: bool) -> Self {
        self.average_execution_time = enabled;
        self
    }

    /// Check if a file name belongs to this decision model's final results
    pub fn matches_file_name(&self, name: &str) -> bool {
        name.ends_with(RESULT_EXTENSION)
            && !name.contains(INTERMEDIATE_MARKER)
            && name.contains(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let mc = DecisionModel::multicore();
        assert_eq!(mc.tag, MULTICORE_TAG);
        assert!(mc.average_execution_time);
        assert!(!mc.logic_area_mapping);

        let pl = DecisionModel::multicore_and_pl();
        assert_eq!(pl.tag, MULTICORE_AND_PL_TAG);
        assert!(pl.logic_area_mapping);
        assert!(!pl.average_execution_time);

        assert_eq!(DecisionModel::default(), mc);
    }

    #[test]
    fn test_from_preset() {
        assert_eq!(
            DecisionModel::from_preset("Multicore-and-PL").unwrap(),
            DecisionModel::multicore_and_pl()
        );
        assert!(matches!(
            DecisionModel::from_preset("fpga"),
            Err(ReportError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_file_name_filter() {
        let model = DecisionModel::new("Multicore");

        assert!(model.matches_file_name("sol1_Multicore.json"));
        assert!(!model.matches_file_name("sol1_Multicore.json.bak"));
        assert!(!model.matches_file_name("intermediate_sol1_Multicore.json"));
        assert!(!model.matches_file_name("sol1_Other.json"));
    }

    #[test]
    fn test_deserialize_defaults_flags() {
        let model: DecisionModel = serde_json::from_str(r#"{ "tag": "X" }"#).unwrap();
        assert_eq!(model, DecisionModel::new("X"));
    }
}
