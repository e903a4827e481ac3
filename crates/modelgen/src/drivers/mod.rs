//! Dialect-specific catalog reader implementations.
//!
//! This module provides the per-dialect implementations of
//! [`CatalogReader`]:
//!
//! - [`sqlite`]: embedded-file databases (pragma introspection plus
//!   text-based foreign-key recovery)
//! - [`mysql`]: MySQL/MariaDB (INFORMATION_SCHEMA)
//! - [`postgres`]: PostgreSQL (pg_catalog / information_schema)
//!
//! # Dispatch
//!
//! The dialect set is closed, so readers are dispatched through the
//! [`IntrospectorImpl`] enum rather than `Box<dyn CatalogReader>`: the
//! compiler generates a match per method and no vtable is involved.

pub mod mysql;
pub mod postgres;
pub mod sqlite;

pub use mysql::MysqlIntrospector;
pub use postgres::PostgresIntrospector;
pub use sqlite::SqliteIntrospector;

use async_trait::async_trait;

use crate::core::schema::ForeignKeyRef;
use crate::core::traits::{CatalogReader, RawColumn};
use crate::dialect::DialectKind;
use crate::error::Result;

/// Enum-based static dispatch over the supported catalog readers.
pub enum IntrospectorImpl<'a> {
    Sqlite(SqliteIntrospector<'a>),
    Mysql(MysqlIntrospector<'a>),
    Postgres(PostgresIntrospector<'a>),
}

#[async_trait]
impl CatalogReader for IntrospectorImpl<'_> {
    fn dialect(&self) -> DialectKind {
        match self {
            IntrospectorImpl::Sqlite(r) => r.dialect(),
            IntrospectorImpl::Mysql(r) => r.dialect(),
            IntrospectorImpl::Postgres(r) => r.dialect(),
        }
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        match self {
            IntrospectorImpl::Sqlite(r) => r.list_tables().await,
            IntrospectorImpl::Mysql(r) => r.list_tables().await,
            IntrospectorImpl::Postgres(r) => r.list_tables().await,
        }
    }

    async fn load_columns(&self, table: &str) -> Result<Vec<RawColumn>> {
        match self {
            IntrospectorImpl::Sqlite(r) => r.load_columns(table).await,
            IntrospectorImpl::Mysql(r) => r.load_columns(table).await,
            IntrospectorImpl::Postgres(r) => r.load_columns(table).await,
        }
    }

    async fn load_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyRef>> {
        match self {
            IntrospectorImpl::Sqlite(r) => r.load_foreign_keys(table).await,
            IntrospectorImpl::Mysql(r) => r.load_foreign_keys(table).await,
            IntrospectorImpl::Postgres(r) => r.load_foreign_keys(table).await,
        }
    }
}
