// ==========================================
// SRV Planner - Config layer
// ==========================================
// Responsibility: engine settings management. Policy and status
// thresholds have changed across revisions of the business rules,
// so they are stored configuration, not constants.
// Storage: config_kv table (global scope)
// ==========================================

pub mod config_manager;

// Re-export core config types
pub use config_manager::{config_keys, ConfigManager, EngineSettings};
