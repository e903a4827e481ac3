//! SQLite (embedded-file) driver.

pub mod fk_pattern;
mod introspector;

pub use introspector::SqliteIntrospector;
