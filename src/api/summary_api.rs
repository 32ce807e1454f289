// ==========================================
// SRV Planner - Summary API
// ==========================================
// Responsibility: the two persistence-facing operations of the
// system (load an area summary, save the edited objective set)
// plus the aggregate scorecard read.
// Architecture: API layer -> Engine (calculator/aggregator) +
// Repository; area_id/year are explicit parameters, never
// ambient state.
// ==========================================

use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::validator::WeightSumValidator;
use crate::config::EngineSettings;
use crate::domain::objective::{AreaSummary, Objective};
use crate::engine::aggregate::{AreaAggregator, AreaScorecard};
use crate::engine::compliance::ComplianceCalculator;
use crate::engine::editor::ObjectiveEditor;
use crate::repository::objective_repo::ObjectiveRepository;

// ==========================================
// SummaryApi
// ==========================================

/// Area summary API.
///
/// Responsibilities:
/// 1. Load the objective set for an (area, year), recomputing every
///    derived field on the way in - stored compliance/status are
///    never trusted.
/// 2. Gate saves behind the weight-sum validation; a failing set is
///    rejected before the repository is touched.
/// 3. Aggregate scorecard reads for the dashboard footer.
pub struct SummaryApi {
    objective_repo: Arc<ObjectiveRepository>,
    editor: ObjectiveEditor,
    aggregator: AreaAggregator,
    validator: WeightSumValidator,
}

impl SummaryApi {
    /// Build the API with engine parameters taken from settings
    /// (policy and thresholds are configuration, not constants).
    pub fn new(objective_repo: Arc<ObjectiveRepository>, settings: EngineSettings) -> Self {
        let calc = ComplianceCalculator::new(settings.policy, settings.thresholds);
        Self {
            objective_repo,
            editor: ObjectiveEditor::new(calc),
            aggregator: AreaAggregator::new(),
            validator: WeightSumValidator::new(),
        }
    }

    /// Editor sharing this API's calculator, for callers applying
    /// in-memory edits between load and save.
    pub fn editor(&self) -> &ObjectiveEditor {
        &self.editor
    }

    /// GET summary(area_id, year): fetch the persisted objectives and
    /// rebuild compliance/status for each.
    pub fn get_summary(&self, area_id: &str, year: i32) -> ApiResult<AreaSummary> {
        let records = self.objective_repo.fetch_objectives(area_id, year)?;

        let objectives: Vec<Objective> = records
            .into_iter()
            .map(|record| self.editor.from_record(record))
            .collect();

        tracing::info!(area_id, year, count = objectives.len(), "summary loaded");

        Ok(AreaSummary::new(objectives))
    }

    /// POST upsert(area_id, year, objectives): validate the weight sum,
    /// then persist the source-of-truth shape of every objective.
    ///
    /// # Returns
    /// - `Ok(())`: committed
    /// - `Err(ApiError::WeightSumInvalid)`: rejected, nothing sent to
    ///   the repository
    pub fn save_objectives(
        &self,
        area_id: &str,
        year: i32,
        objectives: &[Objective],
    ) -> ApiResult<()> {
        self.validator.validate(objectives)?;

        let records: Vec<_> = objectives.iter().map(Into::into).collect();
        self.objective_repo
            .upsert_objectives(area_id, year, &records)?;

        tracing::info!(area_id, year, count = objectives.len(), "objectives saved");

        Ok(())
    }

    /// Aggregate scorecard for one (area, year), recomputed per read.
    pub fn get_scorecard(&self, area_id: &str, year: i32) -> ApiResult<AreaScorecard> {
        let summary = self.get_summary(area_id, year)?;
        Ok(self.aggregator.scorecard(&summary.objectives))
    }
}
