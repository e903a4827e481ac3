//! Core trait for dialect-specific catalog access.
//!
//! Each supported dialect implements [`CatalogReader`] over a borrowed
//! connection handle and reports raw per-table facts; the normalizer turns
//! those into the uniform [`Schema`](crate::core::schema::Schema).

use async_trait::async_trait;

use crate::core::schema::ForeignKeyRef;
use crate::dialect::DialectKind;
use crate::error::Result;

/// Raw per-column facts as reported by a dialect's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    /// Column name.
    pub name: String,

    /// Native type string as spelled by the catalog.
    pub data_type: String,

    /// Whether the catalog reports the column as nullable.
    pub nullable: bool,

    /// Whether the column is part of the table's primary key.
    pub primary_key: bool,

    /// Physical column position (1-based).
    pub ordinal: i32,
}

/// Raw per-table facts: columns in physical order plus declared foreign keys
/// in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Table name.
    pub name: String,

    /// Columns in physical order.
    pub columns: Vec<RawColumn>,

    /// Declared foreign keys, in declaration order.
    pub foreign_keys: Vec<ForeignKeyRef>,
}

/// Read-only access to one dialect's catalog.
///
/// Implementations borrow a connection handle owned by the caller and issue
/// only read-only metadata queries against it; they never close or mutate
/// the handle. Queries run sequentially — one introspection run never holds
/// more than one catalog query in flight.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// The dialect this reader understands.
    fn dialect(&self) -> DialectKind;

    /// Enumerate user table names.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Load column facts for one table, in physical column order.
    async fn load_columns(&self, table: &str) -> Result<Vec<RawColumn>>;

    /// Load declared foreign keys for one table, in declaration order.
    async fn load_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyRef>>;

    /// Load the full raw facts for every table.
    ///
    /// Template method with a default implementation that drives the three
    /// per-table calls; dialects normally keep the default.
    async fn read_catalog(&self) -> Result<Vec<RawTable>> {
        let mut tables = Vec::new();
        for name in self.list_tables().await? {
            let columns = self.load_columns(&name).await?;
            let foreign_keys = self.load_foreign_keys(&name).await?;
            tables.push(RawTable {
                name,
                columns,
                foreign_keys,
            });
        }
        Ok(tables)
    }
}
