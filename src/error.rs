//! Error taxonomy of the rating engine.
//!
//! Configuration problems surface once, when a catalog or engine is built.
//! Analysis itself never fails: empty or too-short input produces a neutral
//! result tagged with an [`InputIssue`](crate::models::InputIssue). The only
//! per-call failure is a correction that points at something the analysed
//! script does not contain.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalog pattern failed to compile.
    #[error("invalid pattern `{pattern}` in {section}: {reason}")]
    InvalidPattern {
        section: String,
        pattern: String,
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A correction refers to a scene or line range the script does not have.
    #[error("correction target not found: {target}")]
    NotFound { target: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {context}: {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineError {
    /// Whether this is a fatal configuration error (bad pattern or setting).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::InvalidConfig { .. } | Self::Yaml { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
