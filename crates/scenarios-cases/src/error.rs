//! Error types for case table operations.

use thiserror::Error;

/// Primary error type for case table operations.
#[derive(Debug, Error)]
pub enum CaseError {
    /// Two rows rendered the same name while duplicates are rejected.
    #[error("duplicate case name {name}")]
    DuplicateName {
        /// Display name shared by both rows.
        name: String,
        /// Index of the first row carrying the name.
        first: usize,
        /// Index of the row that repeated it.
        duplicate: usize,
    },
    /// A row rendered an empty label while empty labels are rejected.
    #[error("empty case label")]
    EmptyLabel {
        /// Index of the offending row.
        index: usize,
    },
    /// A configuration setting held an invalid value.
    #[error("invalid case setting")]
    InvalidSetting {
        /// Setting key.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// A configuration document could not be parsed.
    #[error("failed to parse case configuration")]
    ConfigParse {
        /// Source parse error.
        source: serde_json::Error,
    },
    /// Serialising the case rows failed.
    #[error("failed to serialize case rows")]
    Serialize {
        /// Source serde error.
        source: serde_json::Error,
    },
}

/// Convenience alias for case table results.
pub type CaseResult<T> = Result<T, CaseError>;
