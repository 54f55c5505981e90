mod config;
mod rules;

pub use config::ScoreWeights;
pub(crate) use rules::SubScores;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{ActivityBucket, TaskBreakdown};
use super::domain::EmployeeId;

/// Stateless engine applying a weight profile to one employee's breakdown.
pub struct ScoringEngine {
    weights: ScoreWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Combine the task-derived sub-scores with the externally supplied HR
    /// feedback score into the final aggregate.
    pub fn evaluate(
        &self,
        employee_id: &EmployeeId,
        breakdown: &TaskBreakdown,
        hr_feedback_score: f64,
    ) -> PerformanceAggregate {
        let sub = rules::sub_scores(breakdown);
        let total = weighted_total(&sub, hr_feedback_score, &self.weights);

        PerformanceAggregate {
            employee_id: employee_id.clone(),
            total_assigned: breakdown.total_assigned,
            completed_count: breakdown.completed_count,
            on_time_count: breakdown.on_time_count,
            reassigned_count: breakdown.reassigned_count,
            completion_rate: sub.completion_rate,
            on_time_rate: sub.on_time_rate,
            productivity_score: sub.productivity_score,
            review_score: sub.review_score,
            hr_feedback_score,
            total_performance_score: total,
            daily_buckets: breakdown.daily_buckets.clone(),
            monthly_buckets: breakdown.monthly_buckets.clone(),
        }
    }
}

/// The weighted sum, floor-clamped at 0 and rounded to two decimals. The
/// inputs are each bounded to [0, 100], so no upper clamp is applied.
pub(crate) fn weighted_total(sub: &SubScores, hr_feedback: f64, weights: &ScoreWeights) -> f64 {
    let total = sub.productivity_score * weights.productivity
        + sub.completion_rate * weights.completion
        + sub.on_time_rate * weights.on_time
        + sub.review_score * weights.review
        + hr_feedback * weights.hr_feedback;

    round2(total.max(0.0))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derived per-employee aggregate. Transient: recomputed on every selection,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAggregate {
    pub employee_id: EmployeeId,
    pub total_assigned: u32,
    pub completed_count: u32,
    pub on_time_count: u32,
    pub reassigned_count: u32,
    pub completion_rate: f64,
    pub on_time_rate: f64,
    pub productivity_score: f64,
    pub review_score: f64,
    pub hr_feedback_score: f64,
    pub total_performance_score: f64,
    pub daily_buckets: BTreeMap<NaiveDate, ActivityBucket>,
    pub monthly_buckets: BTreeMap<String, ActivityBucket>,
}
