//! Error types for the introspection library.

use thiserror::Error;

/// Main error type for introspection operations.
#[derive(Error, Debug)]
pub enum IntrospectError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configured dialect has no usable driver connection for this run.
    ///
    /// Non-fatal in a multi-dialect run: the dialect is skipped.
    #[error("Dialect '{dialect}' unavailable: {message}")]
    DialectUnavailable { dialect: String, message: String },

    /// Database driver or catalog query error.
    #[error("Driver error: {0}")]
    Driver(#[from] sqlx::Error),

    /// The catalog reported state the normalizer cannot represent,
    /// e.g. a foreign key referencing a nonexistent table.
    #[error("Malformed catalog state in table {table}: {message}")]
    Catalog { table: String, message: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntrospectError {
    /// Create a DialectUnavailable error.
    pub fn unavailable(dialect: impl Into<String>, message: impl Into<String>) -> Self {
        IntrospectError::DialectUnavailable {
            dialect: dialect.into(),
            message: message.into(),
        }
    }

    /// Create a Catalog error for a specific table.
    pub fn catalog(table: impl Into<String>, message: impl Into<String>) -> Self {
        IntrospectError::Catalog {
            table: table.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for introspection operations.
pub type Result<T> = std::result::Result<T, IntrospectError>;
