//! Dialect identification and native-type classification.

pub mod typemap;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::schema::FieldKind;
use crate::error::{IntrospectError, Result};

/// Closed set of supported database dialects.
///
/// Dialect-specific behavior is selected through this enum and fixed
/// implementations rather than open-ended plugin dispatch; the set is small
/// and known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// Embedded-file database (SQLite).
    Sqlite,
    /// Client-server database, MySQL family.
    Mysql,
    /// Client-server database, PostgreSQL family.
    Postgres,
}

impl DialectKind {
    /// Parse a dialect from a configuration name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(DialectKind::Sqlite),
            "mysql" | "mariadb" => Ok(DialectKind::Mysql),
            "postgres" | "postgresql" | "pg" => Ok(DialectKind::Postgres),
            other => Err(IntrospectError::Config(format!(
                "Unknown dialect: '{}'. Supported dialects: sqlite, mysql, postgres",
                other
            ))),
        }
    }

    /// Canonical dialect name.
    pub fn name(self) -> &'static str {
        match self {
            DialectKind::Sqlite => "sqlite",
            DialectKind::Mysql => "mysql",
            DialectKind::Postgres => "postgres",
        }
    }

    /// Surrogate primary-key column name designated when a table declares
    /// no primary key of its own.
    pub fn surrogate_pk(self) -> &'static str {
        match self {
            DialectKind::Sqlite => "rowid",
            DialectKind::Mysql | DialectKind::Postgres => "id",
        }
    }

    /// Classify a native type string into a [`FieldKind`].
    pub fn field_kind(self, data_type: &str) -> FieldKind {
        typemap::field_kind(self, data_type)
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DialectKind {
    type Err = IntrospectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
