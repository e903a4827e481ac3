//! PostgreSQL catalog introspection via pg_catalog and information_schema.

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use crate::core::schema::ForeignKeyRef;
use crate::core::traits::{CatalogReader, RawColumn};
use crate::dialect::DialectKind;
use crate::error::Result;

/// Catalog reader for PostgreSQL databases, scoped to one schema
/// (namespace).
pub struct PostgresIntrospector<'a> {
    pool: &'a PgPool,
    schema: String,
}

impl<'a> PostgresIntrospector<'a> {
    /// Create an introspector borrowing the given pool. `schema` is the
    /// namespace to enumerate, normally `public`.
    pub fn new(pool: &'a PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    /// Names of the table's primary-key columns.
    async fn primary_key_columns(&self, table: &str) -> Result<HashSet<String>> {
        let query = r#"
            SELECT a.attname::text AS column_name
            FROM pg_catalog.pg_index i
            JOIN pg_catalog.pg_class c ON c.oid = i.indrelid
            JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
            JOIN pg_catalog.pg_attribute a ON a.attrelid = c.oid AND a.attnum = ANY(i.indkey)
            WHERE n.nspname = $1 AND c.relname = $2 AND i.indisprimary
        "#;

        let rows: Vec<PgRow> = sqlx::query(query)
            .bind(&self.schema)
            .bind(table)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("column_name"))
            .collect())
    }
}

#[async_trait]
impl CatalogReader for PostgresIntrospector<'_> {
    fn dialect(&self) -> DialectKind {
        DialectKind::Postgres
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let query = r#"
            SELECT c.relname::text AS table_name
            FROM pg_catalog.pg_class c
            JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
            WHERE n.nspname = $1 AND c.relkind = 'r'
            ORDER BY c.relname
        "#;

        let rows: Vec<PgRow> = sqlx::query(query)
            .bind(&self.schema)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("table_name"))
            .collect())
    }

    async fn load_columns(&self, table: &str) -> Result<Vec<RawColumn>> {
        let pk_columns = self.primary_key_columns(table).await?;

        let query = r#"
            SELECT
                column_name::text AS column_name,
                data_type::text AS data_type,
                (is_nullable = 'YES') AS is_nullable,
                ordinal_position::int4 AS ordinal_position
            FROM information_schema.columns
            WHERE table_schema = $1 AND table_name = $2
            ORDER BY ordinal_position
        "#;

        let rows: Vec<PgRow> = sqlx::query(query)
            .bind(&self.schema)
            .bind(table)
            .fetch_all(self.pool)
            .await?;

        let columns = rows
            .iter()
            .map(|row| {
                let name = row.get::<String, _>("column_name");
                let primary_key = pk_columns.contains(&name);
                RawColumn {
                    name,
                    data_type: row.get::<String, _>("data_type"),
                    nullable: row.get::<bool, _>("is_nullable"),
                    primary_key,
                    ordinal: row.get::<i32, _>("ordinal_position"),
                }
            })
            .collect();
        Ok(columns)
    }

    async fn load_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyRef>> {
        // Constraint OID tracks creation order; information_schema exposes
        // no declaration ordinal.
        let query = r#"
            SELECT
                a.attname::text AS column_name,
                rt.relname::text AS ref_table,
                ra.attname::text AS ref_column
            FROM pg_catalog.pg_constraint c
            JOIN pg_catalog.pg_class t ON t.oid = c.conrelid
            JOIN pg_catalog.pg_namespace n ON n.oid = t.relnamespace
            JOIN pg_catalog.pg_class rt ON rt.oid = c.confrelid
            JOIN pg_catalog.pg_attribute a ON a.attrelid = t.oid AND a.attnum = c.conkey[1]
            JOIN pg_catalog.pg_attribute ra ON ra.attrelid = rt.oid AND ra.attnum = c.confkey[1]
            WHERE n.nspname = $1 AND t.relname = $2 AND c.contype = 'f'
            ORDER BY c.oid
        "#;

        let rows: Vec<PgRow> = sqlx::query(query)
            .bind(&self.schema)
            .bind(table)
            .fetch_all(self.pool)
            .await?;

        let fks = rows
            .iter()
            .map(|row| ForeignKeyRef {
                column: row.get::<String, _>("column_name"),
                table: row.get::<String, _>("ref_table"),
                pk: row.get::<String, _>("ref_column"),
            })
            .collect();
        Ok(fks)
    }
}
