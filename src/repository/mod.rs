// ==========================================
// SRV Planner - Repository layer
// ==========================================
// Responsibility: SQLite data access for areas and objectives.
// Red line: repositories carry no business logic - compliance is
// never computed here.
// ==========================================

pub mod area_repo;
pub mod error;
pub mod objective_repo;

// Re-export core types
pub use area_repo::AreaRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use objective_repo::ObjectiveRepository;
