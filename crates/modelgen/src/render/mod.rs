//! Model source generation from a normalized schema.
//!
//! Emits one Rust struct per table, in table order, with fields in physical
//! column order. Generation hints that cannot be expressed in the struct
//! itself (`db_column`, `related_model`, `primary_key`) are carried as doc
//! comments on the field.

use crate::core::identifier::field_name;
use crate::core::schema::{ColumnDef, FieldKind, Schema};

/// Rust keywords a physical column name could collide with.
const RESERVED: &[&str] = &[
    "as", "box", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "static", "struct", "trait", "type", "use", "where", "while",
];

/// Render Rust model definitions for every table in the schema.
pub fn render_models(schema: &Schema) -> String {
    let mut out = String::from("// Generated model definitions. Do not edit.\n");

    for (table, def) in &schema.tables {
        let model = schema.model_name(table).unwrap_or(table.as_str());

        out.push('\n');
        out.push_str(&format!(
            "/// Table `{}`, primary key `{}`.\n",
            table, def.primary_key
        ));
        out.push_str(&format!("pub struct {} {{\n", model));
        for column in def.columns.values() {
            if let Some(hint) = hint_comment(column) {
                out.push_str(&format!("    /// {}\n", hint));
            }
            let is_fk = column.field_kind == FieldKind::ForeignKey;
            let field = escape_field(&field_name(&column.name, is_fk));
            let ty = if column.nullable {
                format!("Option<{}>", column.field_kind.rust_type())
            } else {
                column.field_kind.rust_type().to_string()
            };
            out.push_str(&format!("    pub {}: {},\n", field, ty));
        }
        out.push_str("}\n");
    }

    out
}

fn hint_comment(column: &ColumnDef) -> Option<String> {
    let mut hints = Vec::new();
    if let Some(db_column) = &column.extra.db_column {
        hints.push(format!("column {}", db_column));
    }
    if let Some(related) = &column.extra.related_model {
        hints.push(format!("references {}", related));
    }
    if column.extra.primary_key {
        hints.push("primary key".to_string());
    }
    if hints.is_empty() {
        None
    } else {
        Some(hints.join(", "))
    }
}

fn escape_field(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}
