// ==========================================
// SRV Planner - Domain layer
// ==========================================
// Responsibility: entities, value types, lifecycle rules.
// Red line: no data access logic, no engine logic.
// ==========================================

pub mod objective;
pub mod types;

// Re-export core types
pub use objective::{Area, AreaSummary, MonthField, Objective, ObjectiveRecord};
pub use types::{CompliancePolicy, MonthlySeries, ObjectiveStatus, MONTHS_PER_YEAR};
