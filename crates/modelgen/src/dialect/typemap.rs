//! Native type name → field-kind classification per dialect.
//!
//! Each dialect keeps a fixed table from native type names to
//! [`FieldKind`] tags. Lookups are case-insensitive and ignore any
//! parenthesized length/precision suffix, so `VARCHAR(255)` classifies as
//! `varchar`. Unrecognized native types fall back to
//! [`FieldKind::fallback`] instead of failing, preserving forward
//! compatibility with dialect type additions.

use crate::core::schema::FieldKind;
use crate::dialect::DialectKind;

/// Classify a native type string for the given dialect.
pub fn field_kind(dialect: DialectKind, data_type: &str) -> FieldKind {
    let base = base_type(data_type);
    let kind = match dialect {
        DialectKind::Sqlite => sqlite_field_kind(&base),
        DialectKind::Mysql => mysql_field_kind(&base),
        DialectKind::Postgres => postgres_field_kind(&base),
    };
    kind.unwrap_or_else(FieldKind::fallback)
}

/// Lower-cased native type with any `(...)` suffix removed.
fn base_type(data_type: &str) -> String {
    let head = data_type.split('(').next().unwrap_or(data_type);
    head.trim().to_lowercase()
}

fn sqlite_field_kind(base: &str) -> Option<FieldKind> {
    Some(match base {
        "bigint" | "long" => FieldKind::BigInteger,
        "blob" => FieldKind::Blob,
        "bool" | "boolean" => FieldKind::Boolean,
        "char" | "character" | "varchar" => FieldKind::Char,
        "date" => FieldKind::Date,
        "datetime" | "timestamp" => FieldKind::DateTime,
        "decimal" | "numeric" => FieldKind::Decimal,
        "double" | "double precision" => FieldKind::Double,
        "float" | "real" => FieldKind::Float,
        "int" | "integer" | "smallint" | "tinyint" | "mediumint" => FieldKind::Integer,
        "text" | "clob" => FieldKind::Text,
        "time" => FieldKind::Time,
        _ => return None,
    })
}

fn mysql_field_kind(base: &str) -> Option<FieldKind> {
    Some(match base {
        "bigint" => FieldKind::BigInteger,
        "blob" | "tinyblob" | "mediumblob" | "longblob" | "binary" | "varbinary" => FieldKind::Blob,
        // tinyint(1) is MySQL's boolean spelling
        "tinyint" | "bool" | "boolean" => FieldKind::Boolean,
        "char" | "varchar" | "enum" | "set" => FieldKind::Char,
        "date" => FieldKind::Date,
        "datetime" | "timestamp" => FieldKind::DateTime,
        "decimal" | "numeric" => FieldKind::Decimal,
        "double" => FieldKind::Double,
        "float" => FieldKind::Float,
        "int" | "integer" | "smallint" | "mediumint" | "year" => FieldKind::Integer,
        "text" | "tinytext" | "mediumtext" | "longtext" => FieldKind::Text,
        "time" => FieldKind::Time,
        _ => return None,
    })
}

fn postgres_field_kind(base: &str) -> Option<FieldKind> {
    Some(match base {
        "bigint" | "int8" | "bigserial" => FieldKind::BigInteger,
        "bytea" => FieldKind::Blob,
        "boolean" | "bool" => FieldKind::Boolean,
        "character varying" | "varchar" | "character" | "char" | "bpchar" | "uuid" => {
            FieldKind::Char
        }
        "date" => FieldKind::Date,
        "timestamp" | "timestamptz" | "timestamp without time zone"
        | "timestamp with time zone" => FieldKind::DateTime,
        "numeric" | "decimal" => FieldKind::Decimal,
        "double precision" | "float8" => FieldKind::Double,
        "real" | "float4" => FieldKind::Float,
        "integer" | "int" | "int4" | "smallint" | "int2" | "serial" | "smallserial" => {
            FieldKind::Integer
        }
        "text" => FieldKind::Text,
        "time" | "timetz" | "time without time zone" | "time with time zone" => FieldKind::Time,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            field_kind(DialectKind::Sqlite, "BIGINT"),
            FieldKind::BigInteger
        );
        assert_eq!(
            field_kind(DialectKind::Postgres, "Double Precision"),
            FieldKind::Double
        );
    }

    #[test]
    fn test_parenthesized_suffix_is_ignored() {
        assert_eq!(field_kind(DialectKind::Sqlite, "VARCHAR(255)"), FieldKind::Char);
        assert_eq!(
            field_kind(DialectKind::Sqlite, "DECIMAL(10, 5)"),
            FieldKind::Decimal
        );
        assert_eq!(field_kind(DialectKind::Mysql, "tinyint(1)"), FieldKind::Boolean);
    }

    #[test]
    fn test_unknown_types_fall_back() {
        assert_eq!(
            field_kind(DialectKind::Sqlite, "GEOMETRY"),
            FieldKind::fallback()
        );
        assert_eq!(field_kind(DialectKind::Mysql, "json"), FieldKind::fallback());
        assert_eq!(
            field_kind(DialectKind::Postgres, "tsvector"),
            FieldKind::fallback()
        );
    }

    #[test]
    fn test_sqlite_map() {
        let cases = [
            ("BIGINT", FieldKind::BigInteger),
            ("BLOB", FieldKind::Blob),
            ("BOOLEAN", FieldKind::Boolean),
            ("VARCHAR(255)", FieldKind::Char),
            ("DATE", FieldKind::Date),
            ("DATETIME", FieldKind::DateTime),
            ("DECIMAL(10, 5)", FieldKind::Decimal),
            ("REAL", FieldKind::Float),
            ("INTEGER", FieldKind::Integer),
            ("SMALLINT", FieldKind::Integer),
            ("TEXT", FieldKind::Text),
            ("TIME", FieldKind::Time),
        ];
        for (raw, expected) in cases {
            assert_eq!(field_kind(DialectKind::Sqlite, raw), expected, "{}", raw);
        }
    }

    #[test]
    fn test_mysql_map() {
        let cases = [
            ("bigint", FieldKind::BigInteger),
            ("longblob", FieldKind::Blob),
            ("tinyint", FieldKind::Boolean),
            ("varchar", FieldKind::Char),
            ("enum", FieldKind::Char),
            ("datetime", FieldKind::DateTime),
            ("timestamp", FieldKind::DateTime),
            ("decimal", FieldKind::Decimal),
            ("double", FieldKind::Double),
            ("float", FieldKind::Float),
            ("int", FieldKind::Integer),
            ("longtext", FieldKind::Text),
            ("time", FieldKind::Time),
        ];
        for (raw, expected) in cases {
            assert_eq!(field_kind(DialectKind::Mysql, raw), expected, "{}", raw);
        }
    }

    #[test]
    fn test_postgres_map() {
        let cases = [
            ("bigint", FieldKind::BigInteger),
            ("bytea", FieldKind::Blob),
            ("boolean", FieldKind::Boolean),
            ("character varying", FieldKind::Char),
            ("uuid", FieldKind::Char),
            ("timestamp without time zone", FieldKind::DateTime),
            ("numeric", FieldKind::Decimal),
            ("double precision", FieldKind::Double),
            ("real", FieldKind::Float),
            ("integer", FieldKind::Integer),
            ("smallint", FieldKind::Integer),
            ("text", FieldKind::Text),
            ("time without time zone", FieldKind::Time),
        ];
        for (raw, expected) in cases {
            assert_eq!(field_kind(DialectKind::Postgres, raw), expected, "{}", raw);
        }
    }
}
