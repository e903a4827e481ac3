//! MySQL/MariaDB catalog introspection via INFORMATION_SCHEMA.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use crate::core::schema::ForeignKeyRef;
use crate::core::traits::{CatalogReader, RawColumn};
use crate::dialect::DialectKind;
use crate::error::Result;

/// Catalog reader for MySQL/MariaDB databases.
pub struct MysqlIntrospector<'a> {
    pool: &'a MySqlPool,
    database: String,
}

impl<'a> MysqlIntrospector<'a> {
    /// Create an introspector borrowing the given pool, scoped to one
    /// database (schema) name.
    pub fn new(pool: &'a MySqlPool, database: impl Into<String>) -> Self {
        Self {
            pool,
            database: database.into(),
        }
    }
}

#[async_trait]
impl CatalogReader for MysqlIntrospector<'_> {
    fn dialect(&self) -> DialectKind {
        DialectKind::Mysql
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        // CAST to CHAR to handle collation differences
        let query = r#"
            SELECT CAST(TABLE_NAME AS CHAR(255)) AS TABLE_NAME
            FROM INFORMATION_SCHEMA.TABLES
            WHERE TABLE_SCHEMA = ? AND TABLE_TYPE = 'BASE TABLE'
            ORDER BY TABLE_NAME
        "#;

        let rows: Vec<MySqlRow> = sqlx::query(query)
            .bind(&self.database)
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("TABLE_NAME"))
            .collect())
    }

    async fn load_columns(&self, table: &str) -> Result<Vec<RawColumn>> {
        let query = r#"
            SELECT
                CAST(COLUMN_NAME AS CHAR(255)) AS COLUMN_NAME,
                CAST(DATA_TYPE AS CHAR(255)) AS DATA_TYPE,
                IF(IS_NULLABLE = 'YES', 1, 0) AS is_nullable,
                IF(COLUMN_KEY = 'PRI', 1, 0) AS is_primary,
                CAST(ORDINAL_POSITION AS SIGNED) AS ORDINAL_POSITION
            FROM INFORMATION_SCHEMA.COLUMNS
            WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ?
            ORDER BY ORDINAL_POSITION
        "#;

        let rows: Vec<MySqlRow> = sqlx::query(query)
            .bind(&self.database)
            .bind(table)
            .fetch_all(self.pool)
            .await?;

        let columns = rows
            .iter()
            .map(|row| RawColumn {
                name: row.get::<String, _>("COLUMN_NAME"),
                data_type: row.get::<String, _>("DATA_TYPE"),
                nullable: row.get::<i32, _>("is_nullable") == 1,
                primary_key: row.get::<i32, _>("is_primary") == 1,
                ordinal: row.get::<i64, _>("ORDINAL_POSITION") as i32,
            })
            .collect();
        Ok(columns)
    }

    async fn load_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyRef>> {
        // CAST to CHAR to handle collation differences
        let query = r#"
            SELECT
                CAST(kcu.COLUMN_NAME AS CHAR(255)) AS COLUMN_NAME,
                CAST(kcu.REFERENCED_TABLE_NAME AS CHAR(255)) AS REFERENCED_TABLE_NAME,
                CAST(kcu.REFERENCED_COLUMN_NAME AS CHAR(255)) AS REFERENCED_COLUMN_NAME
            FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE kcu
            WHERE kcu.TABLE_SCHEMA = ? AND kcu.TABLE_NAME = ?
              AND kcu.REFERENCED_TABLE_NAME IS NOT NULL
            ORDER BY kcu.CONSTRAINT_NAME, kcu.ORDINAL_POSITION
        "#;

        let rows: Vec<MySqlRow> = sqlx::query(query)
            .bind(&self.database)
            .bind(table)
            .fetch_all(self.pool)
            .await?;

        let fks = rows
            .iter()
            .map(|row| ForeignKeyRef {
                column: row.get::<String, _>("COLUMN_NAME"),
                table: row.get::<String, _>("REFERENCED_TABLE_NAME"),
                pk: row.get::<String, _>("REFERENCED_COLUMN_NAME"),
            })
            .collect();
        Ok(fks)
    }
}
