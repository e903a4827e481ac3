//! Core types shared across dialects: the normalized schema model, the
//! catalog-access trait, and identifier derivation for generated code.

pub mod identifier;
pub mod schema;
pub mod traits;

pub use schema::{ColumnDef, ColumnExtra, FieldKind, ForeignKeyRef, Schema, TableDef};
pub use traits::{CatalogReader, RawColumn, RawTable};
