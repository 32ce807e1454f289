// ==========================================
// SRV Planner - Objective editor
// ==========================================
// Responsibility: the immutable-edit contract. Every edit
// (rename, reweight, single-month plan/exec change) produces a
// NEW objective record with compliance and status recomputed in
// the same step - derived fields are never left stale pending a
// separate recompute pass, and inputs are never mutated.
// ==========================================

use uuid::Uuid;

use crate::domain::objective::{MonthField, Objective, ObjectiveRecord};
use crate::domain::types::MonthlySeries;
use crate::engine::compliance::ComplianceCalculator;

// ==========================================
// ObjectiveEditor
// ==========================================
pub struct ObjectiveEditor {
    calc: ComplianceCalculator,
}

impl ObjectiveEditor {
    pub fn new(calc: ComplianceCalculator) -> Self {
        Self { calc }
    }

    pub fn calculator(&self) -> &ComplianceCalculator {
        &self.calc
    }

    /// New objective in its initial lifecycle state: all-zero curves,
    /// zero weight, compliance 0, status red.
    pub fn create(&self, name: &str) -> Objective {
        self.build(
            Uuid::new_v4().to_string(),
            name.to_string(),
            0.0,
            MonthlySeries::zero(),
            MonthlySeries::zero(),
        )
    }

    /// Rebuild an objective from its persisted shape, recomputing the
    /// derived fields. Stored compliance/status are never trusted.
    pub fn from_record(&self, record: ObjectiveRecord) -> Objective {
        self.build(
            record.id,
            record.name,
            record.annual_weight,
            record.plan,
            record.exec,
        )
    }

    pub fn rename(&self, obj: &Objective, name: &str) -> Objective {
        self.build(
            obj.id.clone(),
            name.to_string(),
            obj.annual_weight,
            obj.plan,
            obj.exec,
        )
    }

    pub fn reweight(&self, obj: &Objective, annual_weight: f64) -> Objective {
        self.build(
            obj.id.clone(),
            obj.name.clone(),
            annual_weight,
            obj.plan,
            obj.exec,
        )
    }

    /// Edit one month of the plan or exec curve.
    ///
    /// # Panics
    /// When `month_idx` is out of the 0..12 range (contract violation).
    pub fn set_month(
        &self,
        obj: &Objective,
        field: MonthField,
        month_idx: usize,
        value: f64,
    ) -> Objective {
        let (plan, exec) = match field {
            MonthField::Plan => (obj.plan.with_month(month_idx, value), obj.exec),
            MonthField::Exec => (obj.plan, obj.exec.with_month(month_idx, value)),
        };
        self.build(obj.id.clone(), obj.name.clone(), obj.annual_weight, plan, exec)
    }

    // Single construction point: derived fields always come out of the
    // calculator, whatever the edit was.
    fn build(
        &self,
        id: String,
        name: String,
        annual_weight: f64,
        plan: MonthlySeries,
        exec: MonthlySeries,
    ) -> Objective {
        let result = self.calc.evaluate(&plan, &exec);
        Objective {
            id,
            name,
            annual_weight,
            plan,
            exec,
            compliance: result.compliance,
            status: result.status,
        }
    }
}
