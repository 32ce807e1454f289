// ==========================================
// SRV Planner - Area aggregation
// ==========================================
// Responsibility: combine per-objective compliance into the
// area-level figures shown on the dashboard: weighted score,
// total weight, green milestone count, average compliance.
// All figures are recomputed on every read.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::objective::Objective;
use crate::domain::types::ObjectiveStatus;

// ==========================================
// AreaScorecard - aggregate read model
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaScorecard {
    /// Weighted score: semantically a percentage only when the weights
    /// sum to 100 - callers validate the weight sum before reading this
    /// as one.
    pub area_score: f64,
    /// Sum of annual weights, for the validation footer.
    pub total_weight: f64,
    /// Objectives currently classified green.
    pub green_count: usize,
    /// Plain mean of compliance; 0 for an empty objective set.
    pub average_compliance: f64,
    pub objective_count: usize,
}

// ==========================================
// AreaAggregator
// ==========================================

/// Stateless aggregator over an area's objectives.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaAggregator;

impl AreaAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Weighted area score: sum of compliance scaled by annual weight.
    pub fn area_score(&self, objectives: &[Objective]) -> f64 {
        objectives
            .iter()
            .map(|o| o.compliance * o.annual_weight / 100.0)
            .sum()
    }

    /// Sum of annual weights (must reach 100.0 +/- 0.01 to save).
    pub fn total_weight(&self, objectives: &[Objective]) -> f64 {
        objectives.iter().map(|o| o.annual_weight).sum()
    }

    /// Number of objectives that hit their target (green status).
    pub fn green_count(&self, objectives: &[Objective]) -> usize {
        objectives
            .iter()
            .filter(|o| o.status == ObjectiveStatus::Green)
            .count()
    }

    /// Unweighted mean of compliance; empty sets yield 0 rather than NaN.
    pub fn average_compliance(&self, objectives: &[Objective]) -> f64 {
        if objectives.is_empty() {
            return 0.0;
        }
        objectives.iter().map(|o| o.compliance).sum::<f64>() / objectives.len() as f64
    }

    /// All aggregate figures in one pass-shaped read model.
    pub fn scorecard(&self, objectives: &[Objective]) -> AreaScorecard {
        AreaScorecard {
            area_score: self.area_score(objectives),
            total_weight: self.total_weight(objectives),
            green_count: self.green_count(objectives),
            average_compliance: self.average_compliance(objectives),
            objective_count: objectives.len(),
        }
    }
}

/// Clamp a percentage for progress-bar rendering only.
///
/// Stored compliance and area scores stay uncapped; this must never
/// feed back into persisted or aggregated values.
pub fn clamp_for_display(pct: f64) -> f64 {
    pct.min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_for_display() {
        assert_eq!(clamp_for_display(112.5), 100.0);
        assert_eq!(clamp_for_display(93.75), 93.75);
    }
}
