//! Database migrations for stoa.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::StoaError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, StoaError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StoaError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), StoaError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| StoaError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), StoaError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), StoaError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(StoaError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `articles`: Seeded and user-authored articles
/// - `practice_sessions`: Completed breathing and meditation sessions
fn migrate_v1(conn: &Connection) -> Result<(), StoaError> {
    conn.execute_batch(
        r"
        -- Article library
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            excerpt TEXT NOT NULL DEFAULT '',
            body TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT 'uncategorized',
            read_time TEXT NOT NULL DEFAULT '1 min',
            favorite INTEGER NOT NULL DEFAULT 0,
            seeded INTEGER NOT NULL DEFAULT 0,
            published INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_articles_category
        ON articles(category);

        CREATE INDEX IF NOT EXISTS idx_articles_published
        ON articles(published);

        -- Practice log
        CREATE TABLE IF NOT EXISTS practice_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            label TEXT NOT NULL,
            started_at TEXT NOT NULL,
            duration_seconds INTEGER NOT NULL DEFAULT 0,
            cycles INTEGER NOT NULL DEFAULT 0,
            completed INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_practice_sessions_started
        ON practice_sessions(started_at);
        ",
    )
    .map_err(|e| StoaError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        // Verify tables exist by inserting data
        conn.execute(
            "INSERT INTO articles (title, body, created_at, updated_at)
             VALUES ('Test', 'Body', '2024-01-01T10:00:00Z', '2024-01-01T10:00:00Z')",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO practice_sessions (kind, label, started_at, duration_seconds)
             VALUES ('breathing', '4-7-8 Breathing', '2024-01-01T10:00:00Z', 60)",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
