// ==========================================
// SRV Planner - Domain type definitions
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Months per tracking year; plan/exec curves always carry exactly this many values.
pub const MONTHS_PER_YEAR: usize = 12;

// ==========================================
// Objective status (traffic light)
// ==========================================
// Derived from compliance alone via threshold comparison.
// Serialization: lowercase (matches the srv_* external schema)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveStatus {
    Red,    // below the yellow threshold, or nothing reported
    Yellow, // between thresholds
    Green,  // at or above the green threshold
}

impl fmt::Display for ObjectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveStatus::Red => write!(f, "red"),
            ObjectiveStatus::Yellow => write!(f, "yellow"),
            ObjectiveStatus::Green => write!(f, "green"),
        }
    }
}

// ==========================================
// Compliance policy
// ==========================================
// Two calculation rules exist in the business history and they are
// not equivalent; the policy is a named, swappable strategy so either
// behavior is reproducible without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompliancePolicy {
    /// Full-year sum: every month counts against its full planned value,
    /// including months not yet reported.
    FullYear,
    /// Year-to-date: only months up through the last reported one count.
    YearToDate,
}

impl CompliancePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompliancePolicy::FullYear => "full_year",
            CompliancePolicy::YearToDate => "year_to_date",
        }
    }
}

impl Default for CompliancePolicy {
    fn default() -> Self {
        CompliancePolicy::YearToDate
    }
}

impl std::str::FromStr for CompliancePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full_year" | "full-year" => Ok(CompliancePolicy::FullYear),
            "year_to_date" | "year-to-date" | "ytd" => Ok(CompliancePolicy::YearToDate),
            other => Err(format!("unknown compliance policy: {}", other)),
        }
    }
}

impl fmt::Display for CompliancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// MonthlySeries - one value per calendar month
// ==========================================

/// Dense 12-month value curve, index 0 = January.
///
/// The fixed-size inner array makes the length-12 invariant structural:
/// deserializing anything but exactly 12 numbers fails, and partial-length
/// curves cannot be represented at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries([f64; MONTHS_PER_YEAR]);

impl MonthlySeries {
    /// All-zero curve (a freshly created objective).
    pub fn zero() -> Self {
        Self([0.0; MONTHS_PER_YEAR])
    }

    pub fn new(values: [f64; MONTHS_PER_YEAR]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.0
    }

    /// Value for a 0-based month index.
    pub fn month(&self, idx: usize) -> f64 {
        self.0[idx]
    }

    /// Sum over the whole year.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sum of months 0..=k inclusive.
    pub fn sum_through(&self, k: usize) -> f64 {
        self.0[..=k].iter().sum()
    }

    /// Highest 0-based month index with a value > 0, scanning December
    /// back to January. None when every month is zero/unreported.
    ///
    /// A zero value is the sentinel for "not yet reported" and is
    /// indistinguishable from a genuine zero-execution month.
    pub fn last_reported_month(&self) -> Option<usize> {
        (0..MONTHS_PER_YEAR).rev().find(|&i| self.0[i] > 0.0)
    }

    /// Replace one month, returning a new curve (the original is untouched).
    ///
    /// # Panics
    /// When `idx` is not a valid 0-based month index. Out-of-range months
    /// are a caller contract violation, not a recoverable condition.
    pub fn with_month(&self, idx: usize, value: f64) -> Self {
        assert!(idx < MONTHS_PER_YEAR, "month index out of range: {}", idx);
        let mut values = self.0;
        values[idx] = value;
        Self(values)
    }
}

impl Default for MonthlySeries {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[f64; MONTHS_PER_YEAR]> for MonthlySeries {
    fn from(values: [f64; MONTHS_PER_YEAR]) -> Self {
        Self(values)
    }
}

impl std::ops::Index<usize> for MonthlySeries {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}
