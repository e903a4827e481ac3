//! Foreign-key recovery from SQLite table-definition text.
//!
//! SQLite exposes no constraint catalog this tool relies on, so foreign keys
//! are recovered from the `CREATE TABLE` statement stored in `sqlite_master`.
//! The pattern below is the entire grammar:
//!
//! - an optional `FOREIGN KEY (<column>)` prefix, or a bare `<column>`
//!   opening an inline column definition,
//! - any interleaved column constraints (`NOT NULL`, `PRIMARY KEY`, a type
//!   name) between the column and the reference,
//! - `REFERENCES <table> (<column>)`.
//!
//! Each of the three captured identifiers independently accepts
//! double-quoted, square-bracketed, or bare spelling; matching is
//! case-insensitive and tolerant of interior whitespace. The captures are
//! always `(column, table, pk)` regardless of which syntactic form matched.
//! A fragment containing none of these forms yields no match and
//! contributes no foreign key.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::core::schema::ForeignKeyRef;

pub(crate) static FOREIGN_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:FOREIGN\s+KEY\s*\(\s*)?["\[]?(?P<column>\w+)["\]]?\s*\)?[^,()]*?REFERENCES\s+["\[]?(?P<table>\w+)["\]]?\s*\(\s*["\[]?(?P<pk>\w+)["\]]?\s*\)"#,
    )
    .expect("foreign-key pattern is valid")
});

/// Match one column-definition fragment against the foreign-key grammar.
pub fn match_fragment(fragment: &str) -> Option<ForeignKeyRef> {
    FOREIGN_KEY_RE.captures(fragment).map(|caps| ForeignKeyRef {
        column: caps["column"].to_string(),
        table: caps["table"].to_string(),
        pk: caps["pk"].to_string(),
    })
}

/// Recover every foreign key declared in a `CREATE TABLE` statement.
///
/// The statement body is split into top-level column definitions and each
/// fragment is matched independently, so declaration order is preserved.
/// Fragments that look like a reference but fail the grammar are dropped;
/// with `strict` they are logged at warn level so text-recovery losses stay
/// visible.
pub fn extract_foreign_keys(sql: &str, strict: bool) -> Vec<ForeignKeyRef> {
    let mut found = Vec::new();
    for fragment in split_definitions(sql) {
        if let Some(fk) = match_fragment(fragment) {
            found.push(fk);
        } else if looks_like_reference(fragment) {
            if strict {
                warn!("unmatched reference in table definition: {}", fragment.trim());
            } else {
                debug!("skipping unmatched fragment: {}", fragment.trim());
            }
        }
    }
    found
}

/// Body of the outermost parenthesized group, split on top-level commas.
///
/// Depth-aware so type suffixes like `DECIMAL(10, 5)` stay in one fragment.
fn split_definitions(sql: &str) -> Vec<&str> {
    let Some(start) = sql.find('(') else {
        return Vec::new();
    };
    let Some(end) = sql.rfind(')') else {
        return Vec::new();
    };
    if end <= start {
        return Vec::new();
    }

    let body = &sql[start + 1..end];
    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut fragment_start = 0usize;
    for (i, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                fragments.push(&body[fragment_start..i]);
                fragment_start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(&body[fragment_start..]);
    fragments
}

fn looks_like_reference(fragment: &str) -> bool {
    fragment.to_lowercase().contains("references")
}
