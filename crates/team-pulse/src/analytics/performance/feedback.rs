use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::warn;

use super::domain::EmployeeId;

/// Key addressing one daily HR feedback document in the external store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackKey {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
}

impl FeedbackKey {
    pub fn new(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self { employee_id, date }
    }

    /// `{employee_id}_{ISO-date}`, the document id convention of the store.
    pub fn document_id(&self) -> String {
        format!("{}_{}", self.employee_id, self.date.format("%Y-%m-%d"))
    }
}

/// Error enumeration for feedback store failures.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("feedback store unavailable: {0}")]
    Unavailable(String),
    #[error("feedback document {0} is malformed")]
    Malformed(String),
}

/// Point-lookup abstraction over the external feedback store.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Resolve the day's score document, `Ok(None)` when absent.
    async fn daily_score(&self, key: &FeedbackKey) -> Result<Option<f64>, FeedbackError>;
}

pub(crate) const DEFAULT_FEEDBACK_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolve the HR feedback sub-score for one key. Every failure mode —
/// timeout, transport error, missing document, malformed score — degrades to
/// 0.0 so the overall computation always completes; failures are logged, not
/// surfaced.
pub(crate) async fn resolve_feedback_score<F>(store: &F, key: &FeedbackKey, timeout: Duration) -> f64
where
    F: FeedbackStore + ?Sized,
{
    match tokio::time::timeout(timeout, store.daily_score(key)).await {
        Ok(Ok(Some(score))) if score.is_finite() => score.clamp(0.0, 100.0),
        Ok(Ok(Some(score))) => {
            warn!(document = %key.document_id(), %score, "hr feedback score is not finite");
            0.0
        }
        Ok(Ok(None)) => 0.0,
        Ok(Err(err)) => {
            warn!(document = %key.document_id(), error = %err, "hr feedback lookup failed");
            0.0
        }
        Err(_) => {
            warn!(
                document = %key.document_id(),
                timeout_ms = timeout.as_millis() as u64,
                "hr feedback lookup timed out"
            );
            0.0
        }
    }
}
