// ==========================================
// SRV Planner - Area repository
// ==========================================
// Red line: no business logic.
// ==========================================

use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

use crate::domain::objective::Area;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// AreaRepository
// ==========================================
pub struct AreaRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AreaRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Insert an area (no-op when the id already exists).
    pub fn insert(&self, area: &Area) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            "INSERT OR IGNORE INTO srv_areas (area_id, name) VALUES (?1, ?2)",
            params![&area.id, &area.name],
        )?;

        Ok(())
    }

    /// Find an area by id.
    ///
    /// # Returns
    /// - `Ok(Some(Area))`: found
    /// - `Ok(None)`: no such area
    pub fn find_by_id(&self, area_id: &str) -> RepositoryResult<Option<Area>> {
        let conn = self.get_conn()?;

        match conn.query_row(
            "SELECT area_id, name FROM srv_areas WHERE area_id = ?1",
            params![area_id],
            |row| {
                Ok(Area {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        ) {
            Ok(area) => Ok(Some(area)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All areas, ordered by name.
    pub fn list_all(&self) -> RepositoryResult<Vec<Area>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare("SELECT area_id, name FROM srv_areas ORDER BY name")?;
        let areas = stmt
            .query_map([], |row| {
                Ok(Area {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(areas)
    }
}
