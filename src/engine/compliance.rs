// ==========================================
// SRV Planner - Compliance Calculator
// ==========================================
// Responsibility: map a (plan, exec) pair of 12-month curves to a
// compliance percentage and a traffic-light status.
//
// Policy and thresholds are injected, not hard-coded: both have
// changed across revisions of the business rules ({100,80} vs
// {95,85} thresholds, full-year vs year-to-date windows), and either
// historical behavior must stay reproducible through configuration
// alone.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{CompliancePolicy, MonthlySeries, ObjectiveStatus};

// ==========================================
// StatusThresholds - traffic-light cut points
// ==========================================

/// Threshold pair for status classification, in percent.
///
/// green at `compliance >= green_at`, yellow at
/// `yellow_at <= compliance < green_at`, red below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    pub green_at: f64,
    pub yellow_at: f64,
}

impl StatusThresholds {
    pub fn new(green_at: f64, yellow_at: f64) -> Self {
        Self { green_at, yellow_at }
    }

    /// Classify a compliance percentage. Pure; values over 100 are green.
    pub fn classify(&self, compliance: f64) -> ObjectiveStatus {
        if compliance >= self.green_at {
            ObjectiveStatus::Green
        } else if compliance >= self.yellow_at {
            ObjectiveStatus::Yellow
        } else {
            ObjectiveStatus::Red
        }
    }
}

impl Default for StatusThresholds {
    /// The historical default. The alternative {95, 85} set is
    /// reachable via configuration.
    fn default() -> Self {
        Self {
            green_at: 100.0,
            yellow_at: 80.0,
        }
    }
}

// ==========================================
// ComplianceResult - calculator output
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Percent achieved. Uncapped: over-execution legitimately exceeds 100.
    pub compliance: f64,
    pub status: ObjectiveStatus,
}

// ==========================================
// ComplianceCalculator
// ==========================================

/// Pure calculator over (plan, exec) curve pairs.
///
/// Stateless between calls: the same inputs always yield the same
/// output, so results are safe to recompute on every load and edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplianceCalculator {
    policy: CompliancePolicy,
    thresholds: StatusThresholds,
}

impl ComplianceCalculator {
    pub fn new(policy: CompliancePolicy, thresholds: StatusThresholds) -> Self {
        Self { policy, thresholds }
    }

    pub fn policy(&self) -> CompliancePolicy {
        self.policy
    }

    pub fn thresholds(&self) -> StatusThresholds {
        self.thresholds
    }

    /// Compute compliance and status for one objective's curves.
    pub fn evaluate(&self, plan: &MonthlySeries, exec: &MonthlySeries) -> ComplianceResult {
        let compliance = match self.policy {
            CompliancePolicy::FullYear => Self::full_year(plan, exec),
            CompliancePolicy::YearToDate => Self::year_to_date(plan, exec),
        };

        ComplianceResult {
            compliance,
            status: self.thresholds.classify(compliance),
        }
    }

    /// Full-year rule: all 12 months count, so unreported months weigh in
    /// at zero executed against their full planned value.
    fn full_year(plan: &MonthlySeries, exec: &MonthlySeries) -> f64 {
        percent_ratio(exec.sum(), plan.sum())
    }

    /// Year-to-date rule: the window ends at the last month with reported
    /// execution; later months are not yet due and do not depress the score.
    ///
    /// Known ambiguity inherited from the business rules: exec == 0 means
    /// "not reported", so a genuine zero-execution month in the tail is
    /// excluded from the window as well.
    fn year_to_date(plan: &MonthlySeries, exec: &MonthlySeries) -> f64 {
        match exec.last_reported_month() {
            Some(k) => percent_ratio(exec.sum_through(k), plan.sum_through(k)),
            None => 0.0,
        }
    }
}

/// Ratio as a percentage with the division-by-zero guard: a zero
/// denominator yields 0, never NaN or infinity.
fn percent_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let t = StatusThresholds::default();
        assert_eq!(t.classify(100.0), ObjectiveStatus::Green);
        assert_eq!(t.classify(99.999), ObjectiveStatus::Yellow);
        assert_eq!(t.classify(80.0), ObjectiveStatus::Yellow);
        assert_eq!(t.classify(79.999), ObjectiveStatus::Red);
        assert_eq!(t.classify(0.0), ObjectiveStatus::Red);
    }

    #[test]
    fn test_percent_ratio_zero_denominator() {
        assert_eq!(percent_ratio(50.0, 0.0), 0.0);
        assert_eq!(percent_ratio(0.0, 0.0), 0.0);
    }
}
