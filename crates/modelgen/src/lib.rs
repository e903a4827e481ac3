//! # modelgen
//!
//! Reverse-engineers a relational database's schema into a normalized,
//! in-memory representation that drives generation of data-model source code.
//!
//! Three dialect families are supported:
//!
//! - **SQLite** — columns and primary keys via `pragma_table_info`; foreign
//!   keys recovered from the `CREATE TABLE` text stored in `sqlite_master`
//! - **MySQL/MariaDB** — `INFORMATION_SCHEMA` catalog views
//! - **PostgreSQL** — `pg_catalog` and `information_schema`
//!
//! Introspection is a short-lived batch: connect, read the catalog
//! sequentially, normalize, and hand the [`Schema`] to a generator. Dialects
//! whose driver cannot connect are skipped, not fatal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use modelgen::{Config, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), modelgen::IntrospectError> {
//!     let config = Config::load("config.yaml")?;
//!     let runs = Orchestrator::new(config).run().await?;
//!     for run in runs {
//!         println!("{}", modelgen::render::render_models(&run.schema));
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod render;

// Re-exports for convenient access
pub use crate::config::{Config, DialectConfig};
pub use crate::core::schema::{ColumnDef, ColumnExtra, FieldKind, ForeignKeyRef, Schema, TableDef};
pub use crate::core::traits::{CatalogReader, RawColumn, RawTable};
pub use crate::dialect::DialectKind;
pub use crate::drivers::{
    IntrospectorImpl, MysqlIntrospector, PostgresIntrospector, SqliteIntrospector,
};
pub use crate::error::{IntrospectError, Result};
pub use crate::orchestrator::{introspect, DbHandle, DialectRun, Orchestrator};
