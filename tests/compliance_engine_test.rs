// ==========================================
// Compliance Calculator tests
// ==========================================
// Target: the calculation rules - YTD vs full-year windows,
// threshold classification, division-by-zero guards, uncapped
// over-execution.
// ==========================================

use srv_planner::domain::{CompliancePolicy, MonthlySeries, ObjectiveStatus};
use srv_planner::engine::{ComplianceCalculator, StatusThresholds};

const EPS: f64 = 1e-9;

fn ytd_calculator() -> ComplianceCalculator {
    ComplianceCalculator::new(CompliancePolicy::YearToDate, StatusThresholds::default())
}

fn full_year_calculator() -> ComplianceCalculator {
    ComplianceCalculator::new(CompliancePolicy::FullYear, StatusThresholds::default())
}

#[test]
fn test_all_zero_exec_is_zero_and_red() {
    let plan = MonthlySeries::new([100.0; 12]);
    let exec = MonthlySeries::zero();

    for calc in [ytd_calculator(), full_year_calculator()] {
        let result = calc.evaluate(&plan, &exec);
        assert_eq!(result.compliance, 0.0);
        assert_eq!(result.status, ObjectiveStatus::Red);
    }
}

#[test]
fn test_zero_plan_window_guards_division() {
    // Execution reported against a zero plan: the ratio must be 0,
    // never NaN or infinity
    let plan = MonthlySeries::zero();
    let mut exec_values = [0.0; 12];
    exec_values[2] = 50.0;
    let exec = MonthlySeries::new(exec_values);

    for calc in [ytd_calculator(), full_year_calculator()] {
        let result = calc.evaluate(&plan, &exec);
        assert_eq!(result.compliance, 0.0);
        assert!(result.compliance.is_finite());
        assert_eq!(result.status, ObjectiveStatus::Red);
    }
}

#[test]
fn test_ytd_concrete_scenario() {
    // Last reported month is April (index 3): window sums are
    // plan 400, exec 375 -> 93.75%, yellow under {100, 80}
    let plan = MonthlySeries::new([100.0; 12]);
    let exec = MonthlySeries::new([
        100.0, 95.0, 88.0, 92.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ]);

    let result = ytd_calculator().evaluate(&plan, &exec);
    assert!((result.compliance - 93.75).abs() < EPS);
    assert_eq!(result.status, ObjectiveStatus::Yellow);
}

#[test]
fn test_policies_diverge_on_partial_year() {
    // Same curves: full-year counts the 8 unreported months against
    // their full planned value, YTD does not
    let plan = MonthlySeries::new([100.0; 12]);
    let exec = MonthlySeries::new([
        100.0, 95.0, 88.0, 92.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ]);

    let ytd = ytd_calculator().evaluate(&plan, &exec);
    let full = full_year_calculator().evaluate(&plan, &exec);

    assert!((ytd.compliance - 93.75).abs() < EPS);
    assert!((full.compliance - 375.0 / 1200.0 * 100.0).abs() < EPS);
    assert!(full.compliance < ytd.compliance);
}

#[test]
fn test_ytd_ignores_interior_zero_months() {
    // A zero in March with execution reported in April: March stays
    // inside the window (the scan looks for the LAST reported month)
    let plan = MonthlySeries::new([100.0; 12]);
    let exec = MonthlySeries::new([
        100.0, 100.0, 0.0, 100.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ]);

    let result = ytd_calculator().evaluate(&plan, &exec);
    assert!((result.compliance - 75.0).abs() < EPS);
}

#[test]
fn test_status_boundary_at_green_threshold() {
    let plan = MonthlySeries::new([100.0; 12]);
    let exactly = ytd_calculator().evaluate(&plan, &MonthlySeries::new([100.0; 12]));
    assert_eq!(exactly.status, ObjectiveStatus::Green);

    let just_below = ytd_calculator().evaluate(&plan, &MonthlySeries::new([99.999; 12]));
    assert_eq!(just_below.status, ObjectiveStatus::Yellow);
}

#[test]
fn test_over_execution_stays_green_and_uncapped() {
    let plan = MonthlySeries::new([100.0; 12]);
    let exec = MonthlySeries::new([120.0; 12]);

    let result = ytd_calculator().evaluate(&plan, &exec);
    assert!((result.compliance - 120.0).abs() < EPS);
    assert_eq!(result.status, ObjectiveStatus::Green);
}

#[test]
fn test_alternative_threshold_set() {
    // The {95, 85} variant used by earlier revisions, injected instead
    // of hard-coded
    let calc = ComplianceCalculator::new(
        CompliancePolicy::YearToDate,
        StatusThresholds::new(95.0, 85.0),
    );
    let plan = MonthlySeries::new([100.0; 12]);

    let result = calc.evaluate(&plan, &MonthlySeries::new([96.0; 12]));
    assert_eq!(result.status, ObjectiveStatus::Green);

    let result = calc.evaluate(&plan, &MonthlySeries::new([90.0; 12]));
    assert_eq!(result.status, ObjectiveStatus::Yellow);

    let result = calc.evaluate(&plan, &MonthlySeries::new([84.0; 12]));
    assert_eq!(result.status, ObjectiveStatus::Red);
}

#[test]
fn test_evaluation_is_idempotent() {
    let plan = MonthlySeries::new([80.0; 12]);
    let exec = MonthlySeries::new([
        70.0, 75.0, 0.0, 82.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ]);

    let calc = ytd_calculator();
    let first = calc.evaluate(&plan, &exec);
    let second = calc.evaluate(&plan, &exec);

    assert_eq!(first.compliance, second.compliance);
    assert_eq!(first.status, second.status);
}
