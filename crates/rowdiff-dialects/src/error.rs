//! Error types for the dialect layer.

use thiserror::Error;

/// Main error type for dialect operations.
///
/// Every variant carries the backend name and the offending value so that
/// failures can be diagnosed without re-running with debug flags. This layer
/// performs no retries and swallows no errors.
#[derive(Error, Debug)]
pub enum DialectError {
    /// Native client library is not available.
    ///
    /// Surfaced immediately with installation instructions, never skipped.
    #[error("{backend}: native client library '{library}' is not available. {hint}")]
    MissingDriver {
        backend: &'static str,
        library: &'static str,
        hint: &'static str,
    },

    /// Native type name absent from the backend's fixed type table.
    ///
    /// Fatal for the column in question. Defaulting to a "closest guess"
    /// would corrupt downstream comparison logic, so this is never recovered
    /// from silently.
    #[error("{backend}: unsupported native type '{native_type}'")]
    UnsupportedType {
        backend: &'static str,
        native_type: String,
    },

    /// Table path with a length outside 1..=2 segments.
    #[error("{backend}: invalid table path '{}' - expected <table> or <schema>.<table>", path.join("."))]
    InvalidTablePath {
        backend: &'static str,
        path: Vec<String>,
    },

    /// Native connect call failed. Propagated as-is with backend context.
    #[error("{backend}: connection failed: {message}")]
    ConnectionFailure {
        backend: &'static str,
        message: String,
    },

    /// Backend name not present in the driver registry.
    #[error("unknown backend '{name}'. Registered backends: {}", known.join(", "))]
    UnknownBackend { name: String, known: Vec<String> },
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
