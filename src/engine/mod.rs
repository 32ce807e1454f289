// ==========================================
// SRV Planner - Engine layer
// ==========================================
// Responsibility: business rules (compliance calculation,
// area aggregation, immutable objective editing).
// Red line: engines never touch SQL; every derived figure is
// recomputed from source values, never read back from storage.
// ==========================================

pub mod aggregate;
pub mod compliance;
pub mod editor;

// Re-export core engines
pub use aggregate::{clamp_for_display, AreaAggregator, AreaScorecard};
pub use compliance::{ComplianceCalculator, ComplianceResult, StatusThresholds};
pub use editor::ObjectiveEditor;
