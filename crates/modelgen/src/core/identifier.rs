//! Identifier derivation for generated model code.
//!
//! Centralizes the naming conventions shared by the normalizer and the
//! renderer so table/column spellings map to generated identifiers in
//! exactly one place.

/// Derive the generated model type name for a table.
///
/// Title-cases each underscore-delimited segment and joins them into a
/// single token. Leading underscores are preserved verbatim as a prefix so
/// private-style table names keep their marker.
///
/// ```
/// use modelgen::core::identifier::model_name;
///
/// assert_eq!(model_name("coltypes"), "Coltypes");
/// assert_eq!(model_name("col_types"), "ColTypes");
/// assert_eq!(model_name("_audit"), "_Audit");
/// ```
pub fn model_name(table: &str) -> String {
    let trimmed = table.trim_start_matches('_');
    let prefix = &table[..table.len() - trimmed.len()];

    let mut out = String::with_capacity(table.len());
    out.push_str(prefix);
    for segment in trimmed.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Derive the generated field name for a column.
///
/// Foreign-key fields drop the conventional `_id` suffix (`col_types_id` →
/// `col_types`); every other column generates under its physical name.
pub fn field_name(column: &str, is_foreign_key: bool) -> String {
    if is_foreign_key {
        match column.strip_suffix("_id") {
            Some(stripped) if !stripped.is_empty() => return stripped.to_string(),
            _ => {}
        }
    }
    column.to_string()
}

/// Quote a physical column name as a source literal for the `db_column`
/// hint. Interior single quotes are doubled.
pub fn quoted_literal(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_single_token() {
        assert_eq!(model_name("coltypes"), "Coltypes");
        assert_eq!(model_name("fkpk"), "Fkpk");
        assert_eq!(model_name("underscores"), "Underscores");
    }

    #[test]
    fn test_model_name_joins_segments() {
        assert_eq!(model_name("col_types"), "ColTypes");
        assert_eq!(model_name("user_account_log"), "UserAccountLog");
    }

    #[test]
    fn test_model_name_keeps_leading_underscores() {
        assert_eq!(model_name("_audit"), "_Audit");
        assert_eq!(model_name("__internal_state"), "__InternalState");
    }

    #[test]
    fn test_model_name_is_idempotent_per_input() {
        assert_eq!(model_name("relmodel"), model_name("relmodel"));
    }

    #[test]
    fn test_field_name_strips_fk_suffix() {
        assert_eq!(field_name("col_types_id", true), "col_types");
        assert_eq!(field_name("owner", true), "owner");
        // A column literally named "_id" keeps its name.
        assert_eq!(field_name("_id", true), "_id");
        assert_eq!(field_name("col_types_id", false), "col_types_id");
    }

    #[test]
    fn test_quoted_literal() {
        assert_eq!(quoted_literal("col_types_id"), "'col_types_id'");
        assert_eq!(quoted_literal("o'brien"), "'o''brien'");
    }
}
