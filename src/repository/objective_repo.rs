// ==========================================
// SRV Planner - Objective repository
// ==========================================
// Storage shape mirrors the srv_* schema: objective header rows
// plus sparse 1-based monthly rows (month 1 = January) in
// srv_plan_monthly / srv_exec_monthly. Reads fold the monthly
// rows into dense 0-based 12-element curves; months without a
// row read as 0.
// Red line: no business logic - derived fields are rebuilt by
// the engine after fetch, never here.
// ==========================================

use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::domain::objective::ObjectiveRecord;
use crate::domain::types::{MonthlySeries, MONTHS_PER_YEAR};
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// ObjectiveRepository
// ==========================================
pub struct ObjectiveRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ObjectiveRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Fetch the persisted objectives for one (area, year) scope.
    ///
    /// # Returns
    /// - `Ok(Vec<ObjectiveRecord>)`: insertion order (seq_no), dense
    ///   month curves
    /// - `Err`: database error
    pub fn fetch_objectives(
        &self,
        area_id: &str,
        year: i32,
    ) -> RepositoryResult<Vec<ObjectiveRecord>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"SELECT objective_id, name, annual_weight
               FROM srv_objectives
               WHERE area_id = ?1 AND year = ?2
               ORDER BY seq_no, objective_id"#,
        )?;

        let headers = stmt
            .query_map(params![area_id, year], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = Vec::with_capacity(headers.len());
        for (id, name, annual_weight) in headers {
            let plan = Self::load_monthly(&conn, "srv_plan_monthly", "planned_value", &id)?;
            let exec = Self::load_monthly(&conn, "srv_exec_monthly", "executed_value", &id)?;
            records.push(ObjectiveRecord {
                id,
                name,
                annual_weight,
                plan,
                exec,
            });
        }

        Ok(records)
    }

    /// Upsert the full objective set for one (area, year) scope in a
    /// single transaction: objectives absent from the list are deleted,
    /// the rest are inserted or updated and their monthly rows replaced.
    ///
    /// # Returns
    /// - `Ok(())`: committed
    /// - `Err`: rolled back, nothing persisted
    pub fn upsert_objectives(
        &self,
        area_id: &str,
        year: i32,
        records: &[ObjectiveRecord],
    ) -> RepositoryResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        // Delete scope members that are not in the incoming list
        let kept: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let existing: Vec<String> = {
            let mut stmt = tx.prepare(
                "SELECT objective_id FROM srv_objectives WHERE area_id = ?1 AND year = ?2",
            )?;
            let ids = stmt
                .query_map(params![area_id, year], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            ids
        };
        for id in existing.iter().filter(|id| !kept.contains(id.as_str())) {
            // Monthly rows cascade
            tx.execute(
                "DELETE FROM srv_objectives WHERE objective_id = ?1",
                params![id],
            )?;
        }

        let now = chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        for (seq_no, record) in records.iter().enumerate() {
            // List position becomes seq_no so display order survives a
            // round trip; created_at is too coarse (second granularity)
            // to order objectives saved together.
            tx.execute(
                r#"INSERT INTO srv_objectives (
                       objective_id, area_id, year, name, annual_weight, seq_no
                   ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                   ON CONFLICT(objective_id) DO UPDATE SET
                       name = excluded.name,
                       annual_weight = excluded.annual_weight,
                       seq_no = excluded.seq_no,
                       updated_at = ?7"#,
                params![
                    &record.id,
                    area_id,
                    year,
                    &record.name,
                    record.annual_weight,
                    seq_no as i64,
                    &now
                ],
            )?;

            Self::replace_monthly(&tx, "srv_plan_monthly", "planned_value", &record.id, &record.plan)?;
            Self::replace_monthly(&tx, "srv_exec_monthly", "executed_value", &record.id, &record.exec)?;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        tracing::debug!(
            area_id,
            year,
            count = records.len(),
            "objective scope upserted"
        );

        Ok(())
    }

    /// Fold the sparse 1-based monthly rows of one objective into a
    /// dense 0-based curve.
    fn load_monthly(
        conn: &Connection,
        table: &str,
        value_column: &str,
        objective_id: &str,
    ) -> RepositoryResult<MonthlySeries> {
        let mut stmt = conn.prepare(&format!(
            "SELECT month, {} FROM {} WHERE objective_id = ?1 ORDER BY month",
            value_column, table
        ))?;

        let rows = stmt
            .query_map(params![objective_id], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut values = [0.0; MONTHS_PER_YEAR];
        for (month, value) in rows {
            if !(1..=MONTHS_PER_YEAR as i64).contains(&month) {
                return Err(RepositoryError::FieldValueError {
                    field: format!("{}.month", table),
                    message: format!("month {} out of range 1..=12", month),
                });
            }
            values[(month - 1) as usize] = value;
        }

        Ok(MonthlySeries::new(values))
    }

    /// Replace all monthly rows of one objective with the given curve.
    fn replace_monthly(
        conn: &Connection,
        table: &str,
        value_column: &str,
        objective_id: &str,
        series: &MonthlySeries,
    ) -> RepositoryResult<()> {
        conn.execute(
            &format!("DELETE FROM {} WHERE objective_id = ?1", table),
            params![objective_id],
        )?;

        let mut stmt = conn.prepare(&format!(
            "INSERT INTO {} (objective_id, month, {}) VALUES (?1, ?2, ?3)",
            table, value_column
        ))?;
        for (idx, value) in series.values().iter().enumerate() {
            // 1-based in storage
            stmt.execute(params![objective_id, (idx + 1) as i64, value])?;
        }

        Ok(())
    }
}
