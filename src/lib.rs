// ==========================================
// SRV Planner - Core Library
// ==========================================
// Strategic objectives tracking for organizational areas:
// annual weights, 12-month plan/exec curves, compliance
// scoring and area-level aggregation.
// Stack: Rust + SQLite
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - business rules
pub mod engine;

// Config layer - engine settings (policy, thresholds)
pub mod config;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// API layer - business operations
pub mod api;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{CompliancePolicy, MonthlySeries, ObjectiveStatus, MONTHS_PER_YEAR};

// Domain entities
pub use domain::{Area, AreaSummary, MonthField, Objective, ObjectiveRecord};

// Engines
pub use engine::{
    AreaAggregator, AreaScorecard, ComplianceCalculator, ComplianceResult, ObjectiveEditor,
    StatusThresholds,
};

// API
pub use api::{ApiError, ApiResult, SummaryApi, WeightSumValidator};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "SRV Planner";

// Database schema version
pub const DB_VERSION: &str = "v0.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
