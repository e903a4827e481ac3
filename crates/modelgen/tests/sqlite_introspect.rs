//! End-to-end introspection tests against in-memory SQLite databases.
//!
//! The fixture schema is the canonical one an ORM would emit: one table
//! covering every field kind, nullable columns, a table with two foreign
//! keys (one nullable), a combined primary-key/foreign-key table, a table
//! with no declared primary key, and underscore-prefixed names.

use modelgen::{
    introspect, ColumnExtra, FieldKind, IntrospectorImpl, Schema, SqliteIntrospector,
};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

const DDL: &[&str] = &[
    r#"CREATE TABLE "coltypes" (
        "f1" BIGINT NOT NULL,
        "f2" BLOB NOT NULL,
        "f3" SMALLINT NOT NULL,
        "f4" VARCHAR(255) NOT NULL,
        "f5" DATE NOT NULL,
        "f6" DATETIME NOT NULL,
        "f7" DECIMAL(10, 5) NOT NULL,
        "f8" REAL NOT NULL,
        "f9" REAL NOT NULL,
        "f10" INTEGER NOT NULL,
        "f11" INTEGER NOT NULL PRIMARY KEY,
        "f12" TEXT NOT NULL,
        "f13" TIME NOT NULL
    )"#,
    r#"CREATE TABLE "fkpk" (
        "col_types_id" INTEGER NOT NULL PRIMARY KEY REFERENCES "coltypes" ("f11")
    )"#,
    r#"CREATE TABLE "nopk" (
        "val" TEXT
    )"#,
    r#"CREATE TABLE "nullable" (
        "id" INTEGER NOT NULL PRIMARY KEY,
        "nullable_cf" VARCHAR(255),
        "nullable_if" INTEGER
    )"#,
    r#"CREATE TABLE "relmodel" (
        "id" INTEGER NOT NULL PRIMARY KEY,
        "col_types_id" INTEGER NOT NULL,
        "col_types_nullable_id" INTEGER,
        FOREIGN KEY ("col_types_id") REFERENCES "coltypes" ("f11"),
        FOREIGN KEY ("col_types_nullable_id") REFERENCES "coltypes" ("f11")
    )"#,
    r#"CREATE TABLE "underscores" (
        "_id" INTEGER NOT NULL PRIMARY KEY,
        "_name" VARCHAR(255) NOT NULL
    )"#,
];

async fn fixture() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    for stmt in DDL {
        sqlx::query(stmt).execute(&pool).await.expect("create table");
    }
    pool
}

async fn introspect_fixture(pool: &SqlitePool) -> Schema {
    let reader = IntrospectorImpl::Sqlite(SqliteIntrospector::new(pool));
    introspect(&reader).await.expect("introspection succeeds")
}

#[tokio::test]
async fn classifies_declared_column_types() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;
    let coltypes = schema.table("coltypes").unwrap();

    let expected = [
        ("f1", FieldKind::BigInteger),
        ("f2", FieldKind::Blob),
        ("f3", FieldKind::Integer),
        ("f4", FieldKind::Char),
        ("f5", FieldKind::Date),
        ("f6", FieldKind::DateTime),
        ("f7", FieldKind::Decimal),
        ("f8", FieldKind::Float),
        ("f9", FieldKind::Float),
        ("f10", FieldKind::Integer),
        ("f11", FieldKind::PrimaryKey),
        ("f12", FieldKind::Text),
        ("f13", FieldKind::Time),
    ];

    // Physical column order is preserved.
    let names: Vec<&str> = coltypes.columns.keys().map(String::as_str).collect();
    assert_eq!(names, expected.iter().map(|(n, _)| *n).collect::<Vec<_>>());

    for (name, kind) in expected {
        let column = coltypes.column(name).unwrap();
        assert_eq!(column.field_kind, kind, "{}", name);
        assert!(!column.nullable, "{} was declared NOT NULL", name);
    }

    assert_eq!(coltypes.primary_key, "f11");
}

#[tokio::test]
async fn reports_declared_nullability() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;
    let nullable = schema.table("nullable").unwrap();

    assert!(!nullable.column("id").unwrap().nullable);
    assert!(nullable.column("nullable_cf").unwrap().nullable);
    assert!(nullable.column("nullable_if").unwrap().nullable);
    assert_eq!(
        nullable.column("nullable_cf").unwrap().field_kind,
        FieldKind::Char
    );
    assert_eq!(
        nullable.column("nullable_if").unwrap().field_kind,
        FieldKind::Integer
    );
}

#[tokio::test]
async fn collects_foreign_keys() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;

    // A table with no declared foreign keys reports an empty list, not an
    // absent entry.
    let coltypes_fks = schema.foreign_keys("coltypes");
    assert!(coltypes_fks.is_some());
    assert!(coltypes_fks.unwrap().is_empty());

    let rm = schema.foreign_keys("relmodel").unwrap();
    assert_eq!(rm.len(), 2);
    assert_eq!(rm[0].column, "col_types_id");
    assert_eq!(rm[0].table, "coltypes");
    assert_eq!(rm[0].pk, "f11");
    assert_eq!(rm[1].column, "col_types_nullable_id");

    let fkpk = schema.foreign_keys("fkpk").unwrap();
    assert_eq!(fkpk.len(), 1);
    assert_eq!(fkpk[0].column, "col_types_id");
    assert_eq!(fkpk[0].table, "coltypes");
    assert_eq!(fkpk[0].pk, "f11");
}

#[tokio::test]
async fn derives_model_names() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;

    let names = [
        ("coltypes", "Coltypes"),
        ("fkpk", "Fkpk"),
        ("nopk", "Nopk"),
        ("nullable", "Nullable"),
        ("relmodel", "Relmodel"),
        ("underscores", "Underscores"),
    ];
    for (table, model) in names {
        assert_eq!(schema.model_name(table), Some(model), "{}", table);
    }
}

#[tokio::test]
async fn records_column_extras() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;
    let rm = schema.table("relmodel").unwrap();

    assert_eq!(
        rm.column("col_types_id").unwrap().extra,
        ColumnExtra {
            db_column: Some("'col_types_id'".to_string()),
            related_model: Some("Coltypes".to_string()),
            primary_key: false,
            null: false,
        }
    );
    assert_eq!(
        rm.column("col_types_nullable_id").unwrap().extra,
        ColumnExtra {
            db_column: Some("'col_types_nullable_id'".to_string()),
            related_model: Some("Coltypes".to_string()),
            primary_key: false,
            null: true,
        }
    );
}

#[tokio::test]
async fn unifies_combined_primary_and_foreign_key() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;
    let fkpk = schema.table("fkpk").unwrap();
    let column = fkpk.column("col_types_id").unwrap();

    assert_eq!(column.field_kind, FieldKind::ForeignKey);
    assert_eq!(
        column.extra,
        ColumnExtra {
            db_column: Some("'col_types_id'".to_string()),
            related_model: Some("Coltypes".to_string()),
            primary_key: true,
            null: false,
        }
    );
    assert_eq!(fkpk.primary_key, "col_types_id");
}

#[tokio::test]
async fn designates_surrogate_rowid_primary_key() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;
    let nopk = schema.table("nopk").unwrap();

    assert_eq!(nopk.primary_key, "rowid");
    assert!(!nopk.has_declared_pk());
    assert!(nopk.column("val").unwrap().nullable);
}

#[tokio::test]
async fn introspection_is_deterministic() {
    let pool = fixture().await;
    let first = introspect_fixture(&pool).await;
    let second = introspect_fixture(&pool).await;
    assert_eq!(first, second);

    let tables: Vec<&str> = first.tables.keys().map(String::as_str).collect();
    assert_eq!(
        tables,
        ["coltypes", "fkpk", "nopk", "nullable", "relmodel", "underscores"]
    );
}

#[tokio::test]
async fn renders_models_from_live_schema() {
    let pool = fixture().await;
    let schema = introspect_fixture(&pool).await;
    let source = modelgen::render::render_models(&schema);

    assert!(source.contains("pub struct Coltypes {"));
    assert!(source.contains("pub struct Relmodel {"));
    assert!(source.contains("/// column 'col_types_id', references Coltypes"));
    assert!(source.contains("pub col_types_nullable: Option<i64>,"));
}
