//! Normalized schema types produced by introspection.
//!
//! These types are the database-agnostic output of a run: dialect-native
//! metadata is folded into them by the dialect type maps and the normalizer,
//! and the result is consumed by a code generator. A [`Schema`] is built once
//! per run and never mutated afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalized column-type classification used by the generated data model,
/// independent of native SQL type spelling.
///
/// The native spelling is kept in [`ColumnDef::raw_type`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    BigInteger,
    Blob,
    Boolean,
    Char,
    Date,
    DateTime,
    Decimal,
    Double,
    Float,
    Integer,
    PrimaryKey,
    Text,
    Time,
    ForeignKey,
}

impl FieldKind {
    /// Fallback tag for native types no dialect map recognizes.
    pub fn fallback() -> Self {
        FieldKind::Text
    }

    /// Whether this kind can back an auto-incrementing primary key.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            FieldKind::Integer | FieldKind::BigInteger | FieldKind::PrimaryKey
        )
    }

    /// Rust type spelling used by the model renderer.
    pub fn rust_type(self) -> &'static str {
        match self {
            FieldKind::BigInteger | FieldKind::PrimaryKey | FieldKind::ForeignKey => "i64",
            FieldKind::Blob => "Vec<u8>",
            FieldKind::Boolean => "bool",
            FieldKind::Char | FieldKind::Text => "String",
            FieldKind::Date => "chrono::NaiveDate",
            FieldKind::DateTime => "chrono::NaiveDateTime",
            FieldKind::Time => "chrono::NaiveTime",
            FieldKind::Decimal => "rust_decimal::Decimal",
            FieldKind::Double => "f64",
            FieldKind::Float => "f32",
            FieldKind::Integer => "i32",
        }
    }
}

/// Per-column code-generation hints.
///
/// All hints are optional; [`Default`] means "no hints". `db_column` is kept
/// as a quoted literal (`'physical_name'`) so generated code pins the exact
/// physical column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnExtra {
    /// Explicit physical column name override, as a quoted literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_column: Option<String>,

    /// The column is the table's primary key (set when that fact is not
    /// already expressed by [`FieldKind::PrimaryKey`]).
    pub primary_key: bool,

    /// Generated model name of the referenced table, for foreign-key columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_model: Option<String>,

    /// The column accepts NULL.
    pub null: bool,
}

/// A declared foreign key: referencing column, referenced table, referenced
/// column (typically the referenced table's primary key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    /// Source column name in the owning table.
    pub column: String,

    /// Referenced table name.
    pub table: String,

    /// Referenced column name.
    pub pk: String,
}

/// Normalized column metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name, unique within the table.
    pub name: String,

    /// Normalized field-kind classification.
    pub field_kind: FieldKind,

    /// Whether the column allows NULL.
    pub nullable: bool,

    /// Dialect-native type string, kept for diagnostics.
    pub raw_type: String,

    /// Code-generation hints.
    pub extra: ColumnExtra,
}

/// Table metadata: columns in physical order plus declared foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name.
    pub name: String,

    /// Columns keyed by name; iteration order is physical catalog order.
    pub columns: IndexMap<String, ColumnDef>,

    /// Foreign keys in declaration order. Empty when none are declared.
    pub foreign_keys: Vec<ForeignKeyRef>,

    /// Designated primary-key column: the explicit PK when one is declared,
    /// otherwise the dialect's row-id surrogate name.
    pub primary_key: String,
}

impl TableDef {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.get(name)
    }

    /// Whether the designated primary key is a declared column (as opposed
    /// to a synthesized surrogate).
    pub fn has_declared_pk(&self) -> bool {
        self.columns.contains_key(&self.primary_key)
    }
}

/// The full normalized schema for one introspection run.
///
/// Iteration order of both mappings matches the order the dialect layer
/// supplied tables; identical raw facts always produce an equal `Schema`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Table name → table metadata.
    pub tables: IndexMap<String, TableDef>,

    /// Table name → generated model type name.
    pub model_names: IndexMap<String, String>,
}

impl Schema {
    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }

    /// Generated model name for a table.
    pub fn model_name(&self, table: &str) -> Option<&str> {
        self.model_names.get(table).map(String::as_str)
    }

    /// Foreign keys declared on a table, in declaration order.
    pub fn foreign_keys(&self, table: &str) -> Option<&[ForeignKeyRef]> {
        self.tables.get(table).map(|t| t.foreign_keys.as_slice())
    }
}
