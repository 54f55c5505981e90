use crate::analytics::roster::{Employee, Team};

use super::domain::{EmployeeId, TaskRecord, TeamId};

/// Storage abstraction over the externally materialized workforce snapshot,
/// so the scoring service can be exercised in isolation.
pub trait WorkforceDirectory: Send + Sync {
    fn tasks_for(&self, employee: &EmployeeId) -> Result<Vec<TaskRecord>, DirectoryError>;
    fn employee(&self, id: &EmployeeId) -> Result<Option<Employee>, DirectoryError>;
    fn team(&self, id: &TeamId) -> Result<Option<Team>, DirectoryError>;
}

/// Error enumeration for directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("record not found")]
    NotFound,
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
