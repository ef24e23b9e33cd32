//! Error types for relic
//!
//! All modules use `RelicResult<T>` as their return type. Expected absence
//! (no repository, no tags, no cache file) is never an error; it is `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for relic operations
pub type RelicResult<T> = Result<T, RelicError>;

/// All errors that can occur in relic
#[derive(Error, Debug)]
pub enum RelicError {
    // Parsing errors
    #[error("Malformed version string: {0:?}")]
    MalformedVersionString(String),

    #[error("Invalid tag prefix pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid version record: {0}")]
    InvalidRecord(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RelicError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MalformedVersionString(_) => {
                Some("Expected <tag>[-<distance>-g<hash>][-dirty], e.g. 1.2.3-4-gdeadbeef")
            }
            Self::InvalidPattern { .. } => {
                Some("Tag prefixes are regular expressions anchored at the start of the tag")
            }
            Self::CommandFailed { .. } => Some("Make sure git is installed and on your PATH"),
            Self::ConfigInvalid { .. } => Some("Run: relic config init --force"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RelicError::MalformedVersionString("not a tag".to_string());
        assert_eq!(err.to_string(), "Malformed version string: \"not a tag\"");
    }

    #[test]
    fn error_hint() {
        let err = RelicError::ConfigInvalid {
            path: PathBuf::from("relic.toml"),
            reason: "bad".to_string(),
        };
        assert_eq!(err.hint(), Some("Run: relic config init --force"));
        assert!(RelicError::InvalidRecord("x".to_string()).hint().is_none());
    }

    #[test]
    fn io_helper_keeps_context() {
        let err = RelicError::io(
            "writing RELIC-INFO",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("writing RELIC-INFO"));
    }
}
