//! Error types for the S4 engine.
//!
//! Two families are kept apart on purpose: [`SystemError`] means an external
//! dependency (a command, a file, an output format) misbehaved and halts the
//! operation; [`crate::models::Issue`] describes the spec and is never raised.

use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure failure. Aborts the check that raised it.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Command `{command}` failed: {cause}")]
    Exec { command: String, cause: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse spec: {message}")]
    Parse { message: String },

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl SystemError {
    /// The wire tag, e.g. `"exec_error"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Exec { .. } => "exec_error",
            Self::Io { .. } => "io_error",
            Self::Parse { .. } => "parse_error",
            Self::Adapter(_) => "adapter_error",
        }
    }
}

/// A test-output adapter could not make sense of its input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Adapter `{adapter}` failed: {cause}")]
pub struct AdapterError {
    pub adapter: String,
    pub cause: String,
}

impl AdapterError {
    pub fn new(adapter: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            adapter: adapter.into(),
            cause: cause.into(),
        }
    }
}

/// A user-supplied value (usually an id) does not resolve against the spec.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid value: {value} - {message}")]
pub struct ValueError {
    pub value: String,
    pub message: String,
}

impl ValueError {
    pub fn new(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn tag(&self) -> &'static str {
        "value_error"
    }
}

pub type Result<T, E = SystemError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_error_converts_to_system_error() {
        let err: SystemError = AdapterError::new("at-listing-tool", "boom").into();
        assert_eq!(err.tag(), "adapter_error");
        assert_eq!(err.to_string(), "Adapter `at-listing-tool` failed: boom");
    }

    #[test]
    fn test_value_error_display() {
        let err = ValueError::new("FE-9999", "Feature \"FE-9999\" not found in spec");
        assert_eq!(
            err.to_string(),
            "Invalid value: FE-9999 - Feature \"FE-9999\" not found in spec"
        );
    }
}
