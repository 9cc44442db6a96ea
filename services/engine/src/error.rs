//! services/engine/src/error.rs
//!
//! Defines the primary error type for the entire engine service.
//!
//! Port failures never surface here: the pipeline absorbs them into the
//! record's `Error` status, and the session has no failing operations.

use crate::config::ConfigError;

/// The primary error type for the `engine` service.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A non-video file was submitted to the pipeline. Recovered locally:
    /// no record is created and no notification fires.
    #[error("Invalid upload: '{file_name}' has non-video mime type '{mime_type}'")]
    InvalidUpload { file_name: String, mime_type: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_into_engine_errors() {
        let source = ConfigError::InvalidValue("RUST_LOG".to_string(), "nope".to_string());
        let err = EngineError::from(source);
        assert!(matches!(err, EngineError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
