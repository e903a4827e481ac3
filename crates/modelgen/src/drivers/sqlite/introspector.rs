//! SQLite catalog introspection.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::debug;

use crate::core::schema::ForeignKeyRef;
use crate::core::traits::{CatalogReader, RawColumn};
use crate::dialect::DialectKind;
use crate::error::Result;

use super::fk_pattern;

/// Catalog reader for embedded SQLite databases.
///
/// Columns, nullability, and primary-key flags come from
/// `pragma_table_info`; foreign keys are recovered from the stored
/// `CREATE TABLE` text because the file format carries no reliable
/// constraint catalog.
pub struct SqliteIntrospector<'a> {
    pool: &'a SqlitePool,
    strict: bool,
}

impl<'a> SqliteIntrospector<'a> {
    /// Create an introspector borrowing the given pool.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            strict: false,
        }
    }

    /// Surface table-definition fragments that look like foreign keys but
    /// fail the recovery grammar at warn level instead of dropping them
    /// silently.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Stored `CREATE TABLE` statement for a table.
    async fn table_sql(&self, table: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT sql FROM sqlite_master WHERE tbl_name = ?1 AND type = 'table'")
            .bind(table)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.and_then(|r| r.get::<Option<String>, _>("sql")))
    }
}

#[async_trait]
impl CatalogReader for SqliteIntrospector<'_> {
    fn dialect(&self) -> DialectKind {
        DialectKind::Sqlite
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    async fn load_columns(&self, table: &str) -> Result<Vec<RawColumn>> {
        let rows = sqlx::query(
            "SELECT name, \"type\" AS data_type, \"notnull\", pk, cid \
             FROM pragma_table_info(?1) ORDER BY cid",
        )
        .bind(table)
        .fetch_all(self.pool)
        .await?;

        let columns = rows
            .iter()
            .map(|row| RawColumn {
                name: row.get("name"),
                data_type: row.get("data_type"),
                nullable: row.get::<i64, _>("notnull") == 0,
                primary_key: row.get::<i64, _>("pk") != 0,
                ordinal: row.get::<i64, _>("cid") as i32 + 1,
            })
            .collect();
        Ok(columns)
    }

    async fn load_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyRef>> {
        let Some(sql) = self.table_sql(table).await? else {
            debug!(table, "no stored table definition, assuming no foreign keys");
            return Ok(Vec::new());
        };
        Ok(fk_pattern::extract_foreign_keys(&sql, self.strict))
    }
}
