//! Error types for the edges of the core.
//!
//! The interaction state machine itself never fails; these cover parsing
//! host-supplied strings and loading configuration.

use thiserror::Error;

/// A toolbar tool name that does not match any tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolParseError {
    #[error("Unknown tool: {0}")]
    Unknown(String),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
