//! Engine configuration.
//!
//! [`EngineConfig`] is an immutable value handed to the engine at
//! construction. It can be deserialized from YAML; every field has a default,
//! so a config file only needs to mention the values it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const DEFAULT_CONTEXT_LINES: usize = 3;
pub const MAX_CONTEXT_LINES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Lines of context on each side of a line finding.
    pub context_lines: usize,
    /// Characters on each side of a match used for excerpts and false-positive checks.
    pub excerpt_window: usize,
    /// Trimmed input shorter than this is treated as too short to rate.
    pub min_text_chars: usize,
    /// Maximum number of scenes listed as top triggers.
    pub top_trigger_scenes: usize,
    /// Weight of a depiction match found in spoken dialogue.
    pub dialogue_weight: f64,
    /// Multiplier on violence counts in scenes with heroic framing.
    pub heroic_damping: f64,
    /// Multiplier on violence, gore and sex counts in scenes with intensity markers.
    pub intensity_boost: f64,
    /// Base weight of every scene in the aggregate.
    pub scene_weight_floor: f64,
    /// How strongly scene peril amplifies child risk.
    pub child_peril_amplifier: f64,
    /// Version reported in results. Defaults to the catalog version.
    pub model_version: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            excerpt_window: 50,
            min_text_chars: 10,
            top_trigger_scenes: 10,
            dialogue_weight: 0.5,
            heroic_damping: 0.6,
            intensity_boost: 1.5,
            scene_weight_floor: 0.05,
            child_peril_amplifier: 0.5,
            model_version: None,
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|source| EngineError::Yaml {
            context: "engine configuration".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&yaml).map_err(|source| EngineError::Yaml {
            context: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.context_lines > MAX_CONTEXT_LINES {
            return Err(invalid(
                "context_lines",
                format!("{} exceeds the maximum of {}", self.context_lines, MAX_CONTEXT_LINES),
            ));
        }
        check_range("dialogue_weight", self.dialogue_weight, 0.0, 1.0)?;
        check_range("heroic_damping", self.heroic_damping, 0.0, 1.0)?;
        check_range("intensity_boost", self.intensity_boost, 1.0, 10.0)?;
        check_range("scene_weight_floor", self.scene_weight_floor, 0.0, 1.0)?;
        check_range("child_peril_amplifier", self.child_peril_amplifier, 0.0, 5.0)?;
        if self.scene_weight_floor == 0.0 {
            log::debug!("scene_weight_floor is 0: scenes without findings carry no weight");
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!("{} is outside [{}, {}]", value, min, max),
        ))
    }
}

fn invalid(field: &'static str, reason: String) -> EngineError {
    EngineError::InvalidConfig { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.context_lines, 3);
        assert_eq!(config.excerpt_window, 50);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EngineConfig::from_yaml_str("context_lines: 5\nheroic_damping: 0.5\n").unwrap();
        assert_eq!(config.context_lines, 5);
        assert_eq!(config.heroic_damping, 0.5);
        assert_eq!(config.intensity_boost, 1.5);
        assert_eq!(config.model_version, None);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = EngineConfig::from_yaml_str("context_lines: 11").unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidConfig {
                field: "context_lines",
                ..
            }
        ));

        let err = EngineConfig::from_yaml_str("heroic_damping: 1.2").unwrap_err();
        assert!(err.is_configuration());

        let config = EngineConfig {
            dialogue_weight: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = EngineConfig::from_yaml_str("context_line: 2").unwrap_err();
        assert!(matches!(err, EngineError::Yaml { .. }));
    }
}
