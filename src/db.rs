// ==========================================
// SRV Planner - SQLite connection setup
// ==========================================
// Goals:
// - Unify PRAGMA behavior across every Connection::open so that
//   foreign keys are enforced on all connections, not just some
// - Unify busy_timeout to reduce sporadic busy errors on
//   concurrent writes
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// schema_version expected by the current code
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Apply the unified PRAGMAs to a SQLite connection.
///
/// foreign_keys and busy_timeout are per-connection settings and
/// must be applied to every connection individually.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create the full schema if it does not exist yet.
///
/// Monthly values are stored sparse and 1-based (month 1 = January),
/// matching the external srv_* schema; the repository folds them into
/// dense 12-element arrays on read.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS srv_areas (
            area_id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS srv_objectives (
            objective_id TEXT PRIMARY KEY,
            area_id TEXT NOT NULL REFERENCES srv_areas(area_id),
            year INTEGER NOT NULL,
            name TEXT NOT NULL,
            annual_weight REAL NOT NULL DEFAULT 0,
            seq_no INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_srv_objectives_area_year
            ON srv_objectives(area_id, year);

        CREATE TABLE IF NOT EXISTS srv_plan_monthly (
            objective_id TEXT NOT NULL
                REFERENCES srv_objectives(objective_id) ON DELETE CASCADE,
            month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
            planned_value REAL NOT NULL DEFAULT 0,
            PRIMARY KEY (objective_id, month)
        );

        CREATE TABLE IF NOT EXISTS srv_exec_monthly (
            objective_id TEXT NOT NULL
                REFERENCES srv_objectives(objective_id) ON DELETE CASCADE,
            month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
            executed_value REAL NOT NULL DEFAULT 0,
            PRIMARY KEY (objective_id, month)
        );

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scope_id, key)
        );
        "#,
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;

    Ok(())
}

/// Read schema_version (None when the table does not exist).
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}
