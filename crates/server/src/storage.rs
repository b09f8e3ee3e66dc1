use anyhow::{Context, Result};
use dela_core::{CategoryFilter, Project, Task, UserId};
use dela_db::Built;
use rusqlite::{Connection, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared database state
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        // A panic while holding the lock leaves the connection itself usable.
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Initialize the database: open connection, enable WAL, run migrations
pub fn init_db(data_dir: &Path) -> Result<Db> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;
    let db_path = data_dir.join("dela.db");
    let conn = Connection::open(&db_path).context("opening SQLite database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    run_migrations(&conn)?;

    Ok(Db {
        conn: Arc::new(Mutex::new(conn)),
    })
}

fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    for (name, sql) in dela_db::migrations::MIGRATIONS {
        let already_applied: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .with_context(|| format!("checking migration {name}"))?;

        if !already_applied {
            conn.execute_batch(sql)
                .with_context(|| format!("running migration {name}"))?;
            conn.execute("INSERT INTO _migrations (name) VALUES (?1)", [name])?;
            tracing::info!("Applied migration: {name}");
        }
    }

    Ok(())
}

// ── sea-query execution helpers ────────────────────────────────────────────

fn bind_value(value: &sea_query::Value) -> rusqlite::types::Value {
    use rusqlite::types::Value as Sql;
    use sea_query::Value as Sq;

    match value {
        Sq::Bool(Some(b)) => Sql::Integer(i64::from(*b)),
        Sq::TinyInt(Some(i)) => Sql::Integer(i64::from(*i)),
        Sq::SmallInt(Some(i)) => Sql::Integer(i64::from(*i)),
        Sq::Int(Some(i)) => Sql::Integer(i64::from(*i)),
        Sq::BigInt(Some(i)) => Sql::Integer(*i),
        Sq::TinyUnsigned(Some(u)) => Sql::Integer(i64::from(*u)),
        Sq::SmallUnsigned(Some(u)) => Sql::Integer(i64::from(*u)),
        Sq::Unsigned(Some(u)) => Sql::Integer(i64::from(*u)),
        Sq::BigUnsigned(Some(u)) => Sql::Integer(i64::try_from(*u).unwrap_or(i64::MAX)),
        Sq::Float(Some(f)) => Sql::Real(f64::from(*f)),
        Sq::Double(Some(f)) => Sql::Real(*f),
        Sq::String(Some(s)) => Sql::Text(s.to_string()),
        Sq::Char(Some(c)) => Sql::Text(c.to_string()),
        Sq::Bytes(Some(b)) => Sql::Blob(b.to_vec()),
        _ => Sql::Null,
    }
}

fn bind_values(values: &sea_query::Values) -> Vec<rusqlite::types::Value> {
    values.0.iter().map(bind_value).collect()
}

/// Run a built SELECT and map every row.
pub fn sq_query_map<T, F>(conn: &Connection, (sql, values): Built, f: F) -> rusqlite::Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(bind_values(&values)), f)?;
    rows.collect()
}

/// Run a built INSERT/UPDATE/DELETE, returning the number of changed rows.
pub fn sq_execute(conn: &Connection, (sql, values): Built) -> rusqlite::Result<usize> {
    conn.execute(&sql, rusqlite::params_from_iter(bind_values(&values)))
}

// ── Row mapping ────────────────────────────────────────────────────────────

pub fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        project_id: row.get(2)?,
        user_id: row.get(3)?,
        status: row.get(4)?,
        created_at: row.get(5)?,
        file: row.get(6)?,
        deadline: row.get(7)?,
    })
}

pub fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        alias: row.get(2)?,
        user_id: row.get(3)?,
    })
}

// ── Queries ────────────────────────────────────────────────────────────────

/// Every task of `user`.
pub fn fetch_all_tasks(conn: &Connection, user: UserId) -> rusqlite::Result<Vec<Task>> {
    sq_query_map(conn, dela_db::tasks::list_for_user(user), task_from_row)
}

/// Projects of `user`.
pub fn fetch_categories(conn: &Connection, user: UserId) -> rusqlite::Result<Vec<Project>> {
    sq_query_map(conn, dela_db::projects::list_for_user(user), project_from_row)
}

/// Tasks of `user`, narrowed to one project unless `filter` is `All`.
pub fn fetch_tasks_by_category(
    conn: &Connection,
    user: UserId,
    filter: CategoryFilter,
) -> rusqlite::Result<Vec<Task>> {
    sq_query_map(
        conn,
        dela_db::tasks::list_by_category(user, filter),
        task_from_row,
    )
}

/// Attach a stored upload to a task. Returns `false` if `user` has no such task.
pub fn attach_file(
    conn: &Connection,
    user: UserId,
    task_id: i64,
    file: &str,
) -> rusqlite::Result<bool> {
    let changed = sq_execute(conn, dela_db::tasks::set_file(user, task_id, file))?;
    Ok(changed > 0)
}


#[cfg(test)]
mod tests {
    use super::testing::{seed, test_db};
    use super::*;

    const USER: UserId = UserId(3);

    #[test]
    fn test_migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        init_db(dir.path()).unwrap();
        let db = init_db(dir.path()).unwrap();
        let applied: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, dela_db::migrations::MIGRATIONS.len() as i64);
    }

    #[test]
    fn test_fetch_all_tasks_only_for_user() {
        let (_dir, db) = test_db();
        let conn = db.conn();
        seed(&conn);

        let tasks = fetch_all_tasks(&conn, USER).unwrap();
        assert_eq!(tasks.len(), 5);
        assert!(tasks.iter().all(|t| t.user_id == 3));
        assert_eq!(tasks[1].file.as_deref(), Some("Home.psd"));
        assert!(tasks[2].status);
        assert_eq!(tasks[0].deadline.as_deref(), Some("2019-12-01"));

        assert_eq!(fetch_all_tasks(&conn, UserId(4)).unwrap().len(), 1);
        assert!(fetch_all_tasks(&conn, UserId(99)).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_categories() {
        let (_dir, db) = test_db();
        let conn = db.conn();
        seed(&conn);

        let projects = fetch_categories(&conn, USER).unwrap();
        let aliases: Vec<_> = projects.iter().map(|p| p.alias.as_str()).collect();
        assert_eq!(aliases, ["work", "home"]);
        assert_eq!(projects[1].name, "Домашние дела");
    }

    #[test]
    fn test_fetch_tasks_by_category() {
        let (_dir, db) = test_db();
        let conn = db.conn();
        seed(&conn);

        let all = fetch_tasks_by_category(&conn, USER, CategoryFilter::All).unwrap();
        assert_eq!(all, fetch_all_tasks(&conn, USER).unwrap());

        let home = fetch_tasks_by_category(&conn, USER, CategoryFilter::Project(2)).unwrap();
        let ids: Vec<_> = home.iter().map(|t| t.id).collect();
        assert_eq!(ids, [4, 5]);

        // Another user's project yields nothing.
        let foreign = fetch_tasks_by_category(&conn, USER, CategoryFilter::Project(3)).unwrap();
        assert!(foreign.is_empty());
    }

    #[test]
    fn test_attach_file() {
        let (_dir, db) = test_db();
        let conn = db.conn();
        seed(&conn);

        assert!(attach_file(&conn, USER, 4, "cat.jpg").unwrap());
        let tasks = fetch_all_tasks(&conn, USER).unwrap();
        assert_eq!(tasks[3].file.as_deref(), Some("cat.jpg"));

        assert!(!attach_file(&conn, USER, 6, "cat.jpg").unwrap());
        assert!(!attach_file(&conn, USER, 404, "cat.jpg").unwrap());
    }

    #[test]
    fn test_query_error_is_returned() {
        let (_dir, db) = test_db();
        let conn = db.conn();
        conn.execute_batch("DROP TABLE tasks;").unwrap();
        assert!(fetch_all_tasks(&conn, USER).is_err());
    }
}
