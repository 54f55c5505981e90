use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use super::aggregate::TaskBreakdown;
use super::domain::{EmployeeId, TeamId};
use super::evaluation::{PerformanceAggregate, ScoreWeights, ScoringEngine};
use super::feedback::{resolve_feedback_score, FeedbackKey, FeedbackStore, DEFAULT_FEEDBACK_TIMEOUT};
use super::report::views::{ScoreBand, TeamMatrix, TeamMatrixEntry};
use super::repository::{DirectoryError, WorkforceDirectory};

/// Service composing the workforce directory, the feedback store, and the
/// scoring engine. Aggregation and sub-scoring are synchronous; the single
/// async step is the per-request feedback lookup.
pub struct PerformanceService<D, F> {
    directory: Arc<D>,
    feedback: Arc<F>,
    engine: Arc<ScoringEngine>,
    feedback_timeout: Duration,
    selection: AtomicU64,
}

impl<D, F> PerformanceService<D, F>
where
    D: WorkforceDirectory + 'static,
    F: FeedbackStore + 'static,
{
    pub fn new(directory: Arc<D>, feedback: Arc<F>, weights: ScoreWeights) -> Self {
        Self {
            directory,
            feedback,
            engine: Arc::new(ScoringEngine::new(weights)),
            feedback_timeout: DEFAULT_FEEDBACK_TIMEOUT,
            selection: AtomicU64::new(0),
        }
    }

    pub fn with_feedback_timeout(mut self, timeout: Duration) -> Self {
        self.feedback_timeout = timeout;
        self
    }

    /// Compute one employee's scorecard for the given date.
    ///
    /// Each call claims a fresh selection token; a computation that resolves
    /// after a newer selection has started returns `Superseded` instead of a
    /// result, so a stale feedback lookup can never overwrite the current
    /// view.
    pub async fn scorecard(
        &self,
        employee_id: &EmployeeId,
        today: NaiveDate,
    ) -> Result<PerformanceAggregate, ScoringError> {
        let token = self.begin_selection();

        if self.directory.employee(employee_id)?.is_none() {
            return Err(ScoringError::UnknownEmployee(employee_id.clone()));
        }

        let tasks = self.directory.tasks_for(employee_id)?;
        let breakdown = TaskBreakdown::for_employee(employee_id, &tasks, today);

        let key = FeedbackKey::new(employee_id.clone(), today);
        let hr_feedback =
            resolve_feedback_score(self.feedback.as_ref(), &key, self.feedback_timeout).await;

        self.guard_selection(token)?;
        Ok(self.engine.evaluate(employee_id, &breakdown, hr_feedback))
    }

    /// Score every member of a team and rank the rows by total score.
    pub async fn team_matrix(
        &self,
        team_id: &TeamId,
        today: NaiveDate,
    ) -> Result<TeamMatrix, ScoringError> {
        let token = self.begin_selection();

        let team = self
            .directory
            .team(team_id)?
            .ok_or_else(|| ScoringError::UnknownTeam(team_id.clone()))?;

        let mut entries = Vec::with_capacity(team.members.len());
        for member in &team.members {
            let name = self
                .directory
                .employee(member)?
                .map(|employee| employee.name)
                .unwrap_or_else(|| member.to_string());

            let tasks = self.directory.tasks_for(member)?;
            let breakdown = TaskBreakdown::for_employee(member, &tasks, today);

            let key = FeedbackKey::new(member.clone(), today);
            let hr_feedback =
                resolve_feedback_score(self.feedback.as_ref(), &key, self.feedback_timeout).await;

            let aggregate = self.engine.evaluate(member, &breakdown, hr_feedback);
            let band = ScoreBand::for_score(aggregate.total_performance_score);
            entries.push(TeamMatrixEntry {
                employee_id: member.clone(),
                name,
                total_performance_score: aggregate.total_performance_score,
                completion_rate: aggregate.completion_rate,
                on_time_rate: aggregate.on_time_rate,
                band,
                band_label: band.label(),
            });
        }

        entries.sort_by(|a, b| {
            b.total_performance_score
                .partial_cmp(&a.total_performance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        self.guard_selection(token)?;
        Ok(TeamMatrix {
            team_id: team.id,
            team_name: team.name,
            lead: team.created_by,
            entries,
        })
    }

    fn begin_selection(&self) -> u64 {
        self.selection.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn guard_selection(&self, token: u64) -> Result<(), ScoringError> {
        if self.selection.load(Ordering::SeqCst) == token {
            Ok(())
        } else {
            Err(ScoringError::Superseded)
        }
    }
}

/// Error raised by the performance service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("employee {0} not found")]
    UnknownEmployee(EmployeeId),
    #[error("team {0} not found")]
    UnknownTeam(TeamId),
    #[error("selection superseded by a newer request")]
    Superseded,
}
