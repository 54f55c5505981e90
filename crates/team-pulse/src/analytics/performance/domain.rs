use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for employees as keyed by the external user store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for teams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for task documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

/// Progress states tracked on a task document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Task record as materialized by the external fetch layer. Read-only to the
/// scoring pipeline; every aggregate is recomputed from a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub assigned_to: EmployeeId,
    pub progress_status: ProgressStatus,
    pub due_date: NaiveDate,
    pub created_at: Option<NaiveDateTime>,
    pub progress_updated_at: Option<NaiveDateTime>,
    /// Prior assignees, most recent last. Only the length feeds the score.
    pub reassign_history: Vec<EmployeeId>,
    pub review_points: Option<f64>,
}

impl TaskRecord {
    pub fn is_completed(&self) -> bool {
        self.progress_status == ProgressStatus::Completed
    }

    /// A completed task whose last status update landed on or before the end
    /// of its due date. Tasks with no recorded update instant never qualify.
    pub fn completed_on_time(&self) -> bool {
        if !self.is_completed() {
            return false;
        }
        match self.progress_updated_at {
            Some(updated) => updated <= end_of_day(self.due_date),
            None => false,
        }
    }
}

/// The comparison instant for a due date with no time component.
pub(crate) fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, NaiveTime::from_hms_opt(23, 59, 59).expect("valid wall-clock time"))
}
