// ==========================================
// SRV Planner - API layer
// ==========================================
// Responsibility: business operations over the engine and the
// repositories (load summary, validate, save), converting
// repository errors into user-facing errors.
// ==========================================

pub mod error;
pub mod summary_api;
pub mod validator;

// Re-export core types
pub use error::{ApiError, ApiResult};
pub use summary_api::SummaryApi;
pub use validator::{WeightSumValidator, WEIGHT_SUM_TARGET, WEIGHT_SUM_TOLERANCE};
