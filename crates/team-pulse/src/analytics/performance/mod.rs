//! Per-employee performance scoring over task snapshots: aggregation,
//! sub-score calculation, weighted combination, and the single async
//! HR-feedback enrichment step.

pub mod aggregate;
pub mod domain;
pub(crate) mod evaluation;
pub mod feedback;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregate::{ActivityBucket, TaskBreakdown};
pub use domain::{EmployeeId, ProgressStatus, TaskId, TaskRecord, TeamId};
pub use evaluation::{PerformanceAggregate, ScoreWeights, ScoringEngine};
pub use feedback::{FeedbackError, FeedbackKey, FeedbackStore};
pub use report::views::{
    PerformanceInsights, ScoreBand, ScorecardView, TeamMatrix, TeamMatrixEntry, TrendPoint,
};
pub use repository::{DirectoryError, WorkforceDirectory};
pub use router::performance_router;
pub use service::{PerformanceService, ScoringError};
