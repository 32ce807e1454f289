// ==========================================
// SRV Planner - Weight-sum validator
// ==========================================
// Responsibility: the mandatory pre-save gate. Weights may drift
// from 100 freely while editing in memory; the invariant is only
// enforced at the save/commit boundary, and a failed check means
// the save request is never sent to persistence.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::objective::Objective;
use crate::engine::aggregate::AreaAggregator;

/// Required total of annual weights, in percent.
pub const WEIGHT_SUM_TARGET: f64 = 100.0;

/// Tolerance on the weight sum check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

// Accumulation slack: summing weights like [40.0, 30.0, 30.01] lands
// a few ulps past the exact boundary, and a set the tolerance declares
// valid must not be rejected for float noise.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

// ==========================================
// WeightSumValidator
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightSumValidator;

impl WeightSumValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check that annual weights total 100.0 within tolerance.
    ///
    /// # Returns
    /// - `Ok(())`: save may proceed
    /// - `Err(ApiError::WeightSumInvalid)`: carries the actual total
    pub fn validate(&self, objectives: &[Objective]) -> ApiResult<()> {
        let total_weight = AreaAggregator::new().total_weight(objectives);

        if (total_weight - WEIGHT_SUM_TARGET).abs() > WEIGHT_SUM_TOLERANCE + WEIGHT_SUM_EPSILON {
            tracing::warn!(total_weight, "weight sum validation failed");
            return Err(ApiError::WeightSumInvalid { total_weight });
        }

        Ok(())
    }
}
