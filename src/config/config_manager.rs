// ==========================================
// SRV Planner - Config manager
// ==========================================
// Responsibility: load engine settings from the config_kv table.
// Missing or malformed values fall back to the defaults (YTD
// policy, {100, 80} thresholds) with a warning, so an empty
// database behaves like the historical default.
// ==========================================

use rusqlite::{params, Connection};
use serde_json::json;
use std::collections::BTreeMap;
use std::error::Error;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::db::open_sqlite_connection;
use crate::domain::types::CompliancePolicy;
use crate::engine::compliance::StatusThresholds;

/// Config keys (global scope)
pub mod config_keys {
    /// Compliance window policy: "full_year" | "year_to_date"
    pub const COMPLIANCE_POLICY: &str = "compliance/policy";
    /// Status threshold for green, percent
    pub const THRESHOLD_GREEN: &str = "compliance/threshold_green";
    /// Status threshold for yellow, percent
    pub const THRESHOLD_YELLOW: &str = "compliance/threshold_yellow";
}

// ==========================================
// EngineSettings - injectable engine parameters
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineSettings {
    pub policy: CompliancePolicy,
    pub thresholds: StatusThresholds,
}

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Open a ConfigManager on its own connection.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Share an existing connection. Re-applies the unified PRAGMAs
    /// (idempotent) so connection behavior stays consistent.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| format!("lock acquisition failed: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// Read one global-scope config value.
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Write one global-scope config value (insert or overwrite).
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        conn.execute(
            r#"INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
               ON CONFLICT(scope_id, key) DO UPDATE SET
                   value = excluded.value,
                   updated_at = datetime('now')"#,
            params![key, value],
        )?;

        Ok(())
    }

    /// Engine settings with per-key fallback to defaults.
    pub fn get_engine_settings(&self) -> Result<EngineSettings, Box<dyn Error>> {
        let defaults = EngineSettings::default();

        let policy = match self.get_config_value(config_keys::COMPLIANCE_POLICY)? {
            Some(raw) => match CompliancePolicy::from_str(&raw) {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(key = config_keys::COMPLIANCE_POLICY, %e, "falling back to default");
                    defaults.policy
                }
            },
            None => defaults.policy,
        };

        let green_at =
            self.get_f64_or(config_keys::THRESHOLD_GREEN, defaults.thresholds.green_at)?;
        let yellow_at =
            self.get_f64_or(config_keys::THRESHOLD_YELLOW, defaults.thresholds.yellow_at)?;

        Ok(EngineSettings {
            policy,
            thresholds: StatusThresholds::new(green_at, yellow_at),
        })
    }

    /// Snapshot of all global-scope config as a JSON string. Used when
    /// the effective engine parameters need to be recorded alongside a
    /// published report.
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(json!(config_map).to_string())
    }

    fn get_f64_or(&self, key: &str, default: f64) -> Result<f64, Box<dyn Error>> {
        match self.get_config_value(key)? {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) => Ok(v),
                Err(e) => {
                    tracing::warn!(key, %raw, %e, "falling back to default");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }
}
