//! Configuration validation.

use crate::dialect::DialectKind;
use crate::error::{IntrospectError, Result};

use super::types::Config;

/// Validate a loaded configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.dialects.is_empty() {
        return Err(IntrospectError::Config(
            "at least one dialect must be configured".to_string(),
        ));
    }

    for dialect_config in &config.dialects {
        let dialect = dialect_config.dialect()?;
        match dialect {
            DialectKind::Sqlite => {
                if dialect_config.path.as_deref().unwrap_or("").is_empty() {
                    return Err(IntrospectError::Config(
                        "sqlite dialect requires a non-empty 'path'".to_string(),
                    ));
                }
            }
            DialectKind::Mysql | DialectKind::Postgres => {
                if dialect_config.database.as_deref().unwrap_or("").is_empty() {
                    return Err(IntrospectError::Config(format!(
                        "{} dialect requires a non-empty 'database'",
                        dialect
                    )));
                }
                if dialect_config.user.as_deref().unwrap_or("").is_empty() {
                    return Err(IntrospectError::Config(format!(
                        "{} dialect requires a non-empty 'user'",
                        dialect
                    )));
                }
                if dialect_config.host.is_empty() {
                    return Err(IntrospectError::Config(format!(
                        "{} dialect requires a non-empty 'host'",
                        dialect
                    )));
                }
            }
        }
    }

    Ok(())
}
