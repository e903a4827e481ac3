//! Schema normalization: raw per-dialect facts → the uniform [`Schema`].
//!
//! [`build_schema`] is a pure function: identical raw facts produce
//! identical output, and every produced mapping iterates in the order the
//! dialect layer supplied its entries.

use indexmap::IndexMap;

use crate::core::identifier::{model_name, quoted_literal};
use crate::core::schema::{ColumnDef, ColumnExtra, FieldKind, ForeignKeyRef, Schema, TableDef};
use crate::core::traits::{RawColumn, RawTable};
use crate::dialect::DialectKind;
use crate::error::{IntrospectError, Result};

/// Merge raw dialect facts into the uniform schema bundle.
///
/// # Errors
///
/// Returns [`IntrospectError::Catalog`] when the catalog reports state the
/// schema cannot represent: a foreign key referencing a table absent from
/// the run, or a foreign key on a column the owning table does not have.
/// No repair is attempted.
pub fn build_schema(dialect: DialectKind, raw: &[RawTable]) -> Result<Schema> {
    // Model names first so foreign-key columns can resolve their referenced
    // model regardless of table order.
    let mut model_names = IndexMap::new();
    for table in raw {
        model_names.insert(table.name.clone(), model_name(&table.name));
    }

    let mut tables = IndexMap::new();
    for table in raw {
        tables.insert(table.name.clone(), build_table(dialect, table, &model_names)?);
    }

    Ok(Schema {
        tables,
        model_names,
    })
}

fn build_table(
    dialect: DialectKind,
    raw: &RawTable,
    model_names: &IndexMap<String, String>,
) -> Result<TableDef> {
    for fk in &raw.foreign_keys {
        if !model_names.contains_key(&fk.table) {
            return Err(IntrospectError::catalog(
                &raw.name,
                format!(
                    "foreign key on column '{}' references unknown table '{}'",
                    fk.column, fk.table
                ),
            ));
        }
        if !raw.columns.iter().any(|c| c.name == fk.column) {
            return Err(IntrospectError::catalog(
                &raw.name,
                format!("foreign key references unknown column '{}'", fk.column),
            ));
        }
    }

    let mut columns = IndexMap::new();
    for col in &raw.columns {
        let fk = raw.foreign_keys.iter().find(|fk| fk.column == col.name);
        columns.insert(col.name.clone(), build_column(dialect, col, fk, model_names));
    }

    let primary_key = raw
        .columns
        .iter()
        .find(|c| c.primary_key)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| dialect.surrogate_pk().to_string());

    Ok(TableDef {
        name: raw.name.clone(),
        columns,
        foreign_keys: raw.foreign_keys.clone(),
        primary_key,
    })
}

fn build_column(
    dialect: DialectKind,
    col: &RawColumn,
    fk: Option<&ForeignKeyRef>,
    model_names: &IndexMap<String, String>,
) -> ColumnDef {
    let declared = dialect.field_kind(&col.data_type);
    // Primary-key columns are never nullable, whatever the catalog says.
    let nullable = col.nullable && !col.primary_key;

    let field_kind = if fk.is_some() {
        FieldKind::ForeignKey
    } else if col.primary_key && declared.is_integer() {
        FieldKind::PrimaryKey
    } else {
        declared
    };

    let mut extra = ColumnExtra::default();
    if let Some(fk) = fk {
        // The generation convention derives physical column names from
        // field names, so foreign-key columns always pin theirs.
        extra.db_column = Some(quoted_literal(&col.name));
        extra.related_model = model_names.get(&fk.table).cloned();
    }
    if col.primary_key && field_kind != FieldKind::PrimaryKey {
        extra.primary_key = true;
    }
    if nullable {
        extra.null = true;
    }

    ColumnDef {
        name: col.name.clone(),
        field_kind,
        nullable,
        raw_type: col.data_type.clone(),
        extra,
    }
}
