// ==========================================
// SRV Planner - Objective domain model
// ==========================================
// One strategic objective tracked for one (area, year) scope:
// an annual weight plus a 12-month plan curve and a 12-month
// execution curve.
// Red line: compliance/status are derived snapshots, never
// source of truth - they are recomputed on every load and on
// every edit, and must not be trusted when read back.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{MonthlySeries, ObjectiveStatus};

// ==========================================
// Area - organizational area
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: String,   // opaque stable identifier
    pub name: String, // display label
}

// ==========================================
// MonthField - which curve a monthly edit targets
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthField {
    Plan,
    Exec,
}

// ==========================================
// Objective - strategic objective with derived score
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,            // unique within an (area, year) scope
    pub name: String,          // free-text label, mutable
    pub annual_weight: f64,    // share of the area score, 0-100
    pub plan: MonthlySeries,   // planned targets, index 0 = January
    pub exec: MonthlySeries,   // realized values; 0 doubles as "not reported"
    pub compliance: f64,       // derived: percent achieved, uncapped
    pub status: ObjectiveStatus, // derived from compliance alone
}

// ==========================================
// ObjectiveRecord - persisted source-of-truth shape
// ==========================================
// The wire/storage shape: no derived fields. Fetching a summary
// yields records; the editor rebuilds Objectives (with fresh
// compliance/status) from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveRecord {
    pub id: String,
    pub name: String,
    pub annual_weight: f64,
    pub plan: MonthlySeries,
    pub exec: MonthlySeries,
}

impl From<&Objective> for ObjectiveRecord {
    fn from(obj: &Objective) -> Self {
        Self {
            id: obj.id.clone(),
            name: obj.name.clone(),
            annual_weight: obj.annual_weight,
            plan: obj.plan,
            exec: obj.exec,
        }
    }
}

// ==========================================
// AreaSummary - all objectives of one (area, year)
// ==========================================
// Ordering: insertion order only, no further invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaSummary {
    pub objectives: Vec<Objective>,
}

impl AreaSummary {
    pub fn new(objectives: Vec<Objective>) -> Self {
        Self { objectives }
    }

    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.objectives.len()
    }
}
