/// A named migration: `(name, sql)`.
pub type Migration = (&'static str, &'static str);

/// Applied in order; names are recorded in `_migrations`.
pub const MIGRATIONS: &[Migration] = &[(
    "0001_schema",
    include_str!("../migrations/0001_schema.sql"),
)];
