//! Interaction settings.

use crate::error::{ConfigError, ConfigResult};
use crate::hit_test::HIT_TOLERANCE;
use crate::shapes::Text;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the interaction controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Hit-test slack in pixels.
    pub hit_tolerance: f64,
    /// Content of text created with the text tool.
    pub text_placeholder: String,
    /// How far above a shape's top edge its annotation label sits.
    pub annotation_offset: f64,
    /// Tool active when the controller is created.
    pub initial_tool: ToolKind,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            text_placeholder: Text::PLACEHOLDER.to_string(),
            annotation_offset: 20.0,
            initial_tool: ToolKind::default(),
        }
    }
}

impl InteractionConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading interaction config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !valid_tolerance(self.hit_tolerance) {
            return Err(ConfigError::Invalid(format!(
                "hit_tolerance must be a non-negative number, got {}",
                self.hit_tolerance
            )));
        }
        if !self.annotation_offset.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "annotation_offset must be finite, got {}",
                self.annotation_offset
            )));
        }
        Ok(())
    }

    /// Reset every field that would fail [`validate`](Self::validate) to its default.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        if !valid_tolerance(self.hit_tolerance) {
            log::warn!(
                "Invalid hit_tolerance {}, using {}",
                self.hit_tolerance,
                defaults.hit_tolerance
            );
            self.hit_tolerance = defaults.hit_tolerance;
        }
        if !self.annotation_offset.is_finite() {
            log::warn!(
                "Invalid annotation_offset {}, using {}",
                self.annotation_offset,
                defaults.annotation_offset
            );
            self.annotation_offset = defaults.annotation_offset;
        }
    }
}

fn valid_tolerance(tolerance: f64) -> bool {
    tolerance.is_finite() && tolerance >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InteractionConfig::default();
        assert!((config.hit_tolerance - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.text_placeholder, "Select then double click to edit");
        assert_eq!(config.initial_tool, ToolKind::Select);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "hit_tolerance": 8.0, "initial_tool": "circle" }"#;
        let config = InteractionConfig::from_json(json).unwrap();
        assert!((config.hit_tolerance - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.initial_tool, ToolKind::Circle);
        assert_eq!(config.text_placeholder, Text::PLACEHOLDER);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = InteractionConfig::default();
        config.text_placeholder = "Type here".to_string();
        let json = config.to_json().unwrap();
        assert_eq!(InteractionConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = InteractionConfig::from_json(r#"{ "hit_tolerance": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_sanitize_resets_invalid_fields() {
        let mut config = InteractionConfig {
            hit_tolerance: f64::NAN,
            annotation_offset: f64::INFINITY,
            text_placeholder: "kept".to_string(),
            initial_tool: ToolKind::Line,
        };
        assert!(config.validate().is_err());

        config.sanitize();
        assert!(config.validate().is_ok());
        assert!((config.hit_tolerance - HIT_TOLERANCE).abs() < f64::EPSILON);
        assert!((config.annotation_offset - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.text_placeholder, "kept");
        assert_eq!(config.initial_tool, ToolKind::Line);
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = InteractionConfig::from_json(r#"{ "initial_tool": "lasso" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "annotation_offset": 12.5 }}"#).unwrap();
        let config = InteractionConfig::from_file(file.path()).unwrap();
        assert!((config.annotation_offset - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InteractionConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
