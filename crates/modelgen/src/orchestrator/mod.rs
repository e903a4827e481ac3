//! Multi-dialect introspection runs.
//!
//! The orchestrator owns the connection handles; catalog readers only
//! borrow them. A run walks the configured dialects in order, skipping any
//! whose driver cannot connect — absence of a database is a diagnostic, not
//! a failure of the run.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::{info, warn};

use crate::config::{Config, DialectConfig};
use crate::core::schema::Schema;
use crate::core::traits::CatalogReader;
use crate::dialect::DialectKind;
use crate::drivers::{
    IntrospectorImpl, MysqlIntrospector, PostgresIntrospector, SqliteIntrospector,
};
use crate::error::{IntrospectError, Result};
use crate::normalize;

/// An owned connection handle for one configured dialect.
///
/// Acquired here, borrowed read-only by the catalog readers for the
/// duration of one run. Nothing in the introspection path closes or
/// mutates it.
pub enum DbHandle {
    Sqlite(sqlx::SqlitePool),
    Mysql {
        pool: sqlx::MySqlPool,
        database: String,
    },
    Postgres {
        pool: sqlx::PgPool,
        schema: String,
    },
}

impl DbHandle {
    /// Connect to the configured database.
    ///
    /// # Errors
    ///
    /// Returns [`IntrospectError::DialectUnavailable`] when no driver-backed
    /// connection can be established; callers running multiple dialects
    /// treat that as "skip this dialect".
    pub async fn connect(config: &DialectConfig) -> Result<Self> {
        let dialect = config.dialect()?;
        let url = config.url()?;
        let unavailable = |e: sqlx::Error| IntrospectError::unavailable(dialect.name(), e.to_string());

        let handle = match dialect {
            DialectKind::Sqlite => {
                let pool = SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect(&url)
                    .await
                    .map_err(unavailable)?;
                DbHandle::Sqlite(pool)
            }
            DialectKind::Mysql => {
                let pool = MySqlPoolOptions::new()
                    .max_connections(1)
                    .connect(&url)
                    .await
                    .map_err(unavailable)?;
                DbHandle::Mysql {
                    pool,
                    database: config.database.clone().unwrap_or_default(),
                }
            }
            DialectKind::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(1)
                    .connect(&url)
                    .await
                    .map_err(unavailable)?;
                DbHandle::Postgres {
                    pool,
                    schema: config.schema.clone(),
                }
            }
        };

        handle.ping().await?;
        info!("Connected to {}", dialect);
        Ok(handle)
    }

    /// The handle's dialect.
    pub fn dialect(&self) -> DialectKind {
        match self {
            DbHandle::Sqlite(_) => DialectKind::Sqlite,
            DbHandle::Mysql { .. } => DialectKind::Mysql,
            DbHandle::Postgres { .. } => DialectKind::Postgres,
        }
    }

    /// A catalog reader borrowing this handle.
    pub fn reader(&self, strict: bool) -> IntrospectorImpl<'_> {
        match self {
            DbHandle::Sqlite(pool) => {
                IntrospectorImpl::Sqlite(SqliteIntrospector::new(pool).strict(strict))
            }
            DbHandle::Mysql { pool, database } => {
                IntrospectorImpl::Mysql(MysqlIntrospector::new(pool, database.clone()))
            }
            DbHandle::Postgres { pool, schema } => {
                IntrospectorImpl::Postgres(PostgresIntrospector::new(pool, schema.clone()))
            }
        }
    }

    async fn ping(&self) -> Result<()> {
        let dialect = self.dialect();
        let unavailable = |e: sqlx::Error| IntrospectError::unavailable(dialect.name(), e.to_string());
        match self {
            DbHandle::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await.map_err(unavailable)?;
            }
            DbHandle::Mysql { pool, .. } => {
                sqlx::query("SELECT 1").execute(pool).await.map_err(unavailable)?;
            }
            DbHandle::Postgres { pool, .. } => {
                sqlx::query("SELECT 1").execute(pool).await.map_err(unavailable)?;
            }
        }
        Ok(())
    }

    /// Close the underlying pool. Owner-side only; readers never call this.
    pub async fn close(&self) {
        match self {
            DbHandle::Sqlite(pool) => pool.close().await,
            DbHandle::Mysql { pool, .. } => pool.close().await,
            DbHandle::Postgres { pool, .. } => pool.close().await,
        }
    }
}

/// Introspect one dialect through its catalog reader.
///
/// Reads the full catalog sequentially and normalizes it. Query and
/// catalog errors propagate unmodified.
pub async fn introspect(reader: &IntrospectorImpl<'_>) -> Result<Schema> {
    let raw = reader.read_catalog().await?;
    normalize::build_schema(reader.dialect(), &raw)
}

/// Result of introspecting one configured dialect.
#[derive(Debug, Clone)]
pub struct DialectRun {
    /// The dialect that was introspected.
    pub dialect: DialectKind,

    /// Its normalized schema.
    pub schema: Schema,
}

/// Runs introspection across every configured dialect.
pub struct Orchestrator {
    config: Config,
    strict: bool,
}

impl Orchestrator {
    /// Create an orchestrator for the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            strict: false,
        }
    }

    /// Surface unmatched foreign-key candidate text as warnings.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Introspect every configured dialect, in configuration order.
    ///
    /// Dialects that cannot connect, and dialects whose introspection
    /// fails, are skipped with a diagnostic; the run reports whatever
    /// succeeded.
    pub async fn run(&self) -> Result<Vec<DialectRun>> {
        let mut runs = Vec::new();

        for dialect_config in &self.config.dialects {
            let handle = match DbHandle::connect(dialect_config).await {
                Ok(handle) => handle,
                Err(e) => {
                    info!("Skipping {}: {}", dialect_config.engine, e);
                    continue;
                }
            };

            let reader = handle.reader(self.strict);
            match introspect(&reader).await {
                Ok(schema) => {
                    info!(
                        "Introspected {} tables from {}",
                        schema.tables.len(),
                        handle.dialect()
                    );
                    runs.push(DialectRun {
                        dialect: handle.dialect(),
                        schema,
                    });
                }
                Err(e) => warn!("Skipping {}: {}", handle.dialect(), e),
            }
            handle.close().await;
        }

        Ok(runs)
    }
}
