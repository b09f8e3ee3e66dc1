//! Schema, migrations, and query builders for the task list.
//!
//! Builders return `(sql, values)` pairs; the server binds the values, so no
//! request data is ever spliced into SQL text.

pub mod migrations;
pub mod projects;
pub mod tables;
pub mod tasks;

pub use tables::*;

/// A built statement: SQL with `?` placeholders plus its bound values.
pub type Built = (String, sea_query::Values);
