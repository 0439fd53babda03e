//! Error types for versealign operations.

use thiserror::Error;

/// Type string carried by alignment invalidation payloads.
pub const INVALIDATED_ALIGNMENTS: &str = "InvalidatedAlignments";

/// Errors that can occur while merging, unmerging or reading verse data.
#[derive(Error, Debug)]
pub enum Error {
    /// The alignment data and the target-language text have diverged and
    /// cannot be reconciled without losing alignment work.
    #[error("{message}")]
    InvalidatedAlignments { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalidated(message: impl Into<String>) -> Self {
        Error::InvalidatedAlignments {
            message: message.into(),
        }
    }

    /// Machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidatedAlignments { .. } => INVALIDATED_ALIGNMENTS,
            Error::Json(_) => "Json",
            Error::Io(_) => "Io",
        }
    }

    /// True if this error signals diverged alignment data.
    pub fn is_invalidated_alignments(&self) -> bool {
        matches!(self, Error::InvalidatedAlignments { .. })
    }

    /// The `{message, type}` object handed to editor front ends.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.to_string(),
            "type": self.kind(),
        })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidated_payload() {
        let err = Error::invalidated("Word \"foo\" is missing");
        assert!(err.is_invalidated_alignments());
        assert_eq!(err.kind(), "InvalidatedAlignments");

        let payload = err.to_payload();
        assert_eq!(payload["type"], "InvalidatedAlignments");
        assert_eq!(payload["message"], "Word \"foo\" is missing");
    }

    #[test]
    fn test_json_error_kind() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.kind(), "Json");
        assert!(!err.is_invalidated_alignments());
    }

    #[test]
    fn test_io_error_kind() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "verse.json").into();
        assert_eq!(err.kind(), "Io");
        assert_eq!(err.to_payload()["type"], "Io");
    }
}
