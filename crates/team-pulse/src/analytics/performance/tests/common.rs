use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::analytics::performance::domain::{
    EmployeeId, ProgressStatus, TaskId, TaskRecord, TeamId,
};
use crate::analytics::performance::feedback::{FeedbackError, FeedbackKey, FeedbackStore};
use crate::analytics::performance::repository::{DirectoryError, WorkforceDirectory};
use crate::analytics::performance::service::PerformanceService;
use crate::analytics::performance::ScoreWeights;
use crate::analytics::roster::{Employee, Team};

pub(super) fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn dt(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    d(year, month, day).and_hms_opt(hour, 0, 0).expect("valid datetime")
}

pub(super) fn today() -> NaiveDate {
    d(2025, 6, 16)
}

pub(super) fn emp(id: &str) -> EmployeeId {
    EmployeeId(id.to_string())
}

pub(super) fn open_task(id: &str, assignee: &str, due: NaiveDate) -> TaskRecord {
    TaskRecord {
        id: TaskId(id.to_string()),
        title: format!("task {id}"),
        assigned_to: emp(assignee),
        progress_status: ProgressStatus::NotStarted,
        due_date: due,
        created_at: None,
        progress_updated_at: None,
        reassign_history: Vec::new(),
        review_points: None,
    }
}

pub(super) fn completed_task(
    id: &str,
    assignee: &str,
    created: NaiveDateTime,
    due: NaiveDate,
    updated: NaiveDateTime,
) -> TaskRecord {
    TaskRecord {
        progress_status: ProgressStatus::Completed,
        created_at: Some(created),
        progress_updated_at: Some(updated),
        ..open_task(id, assignee, due)
    }
}

/// A small mixed set for one employee: two completed (one early, one late),
/// one in progress, one untouched with a reassignment.
pub(super) fn sample_tasks() -> Vec<TaskRecord> {
    let mut early = completed_task("t-1", "ava", dt(2025, 6, 1, 9), d(2025, 6, 11), dt(2025, 6, 4, 9));
    early.review_points = Some(90.0);

    let mut late = completed_task("t-2", "ava", dt(2025, 6, 1, 0), d(2025, 6, 11), dt(2025, 6, 13, 12));
    late.review_points = Some(70.0);

    let mut in_progress = open_task("t-3", "ava", d(2025, 6, 25));
    in_progress.progress_status = ProgressStatus::InProgress;
    in_progress.progress_updated_at = Some(dt(2025, 6, 10, 9));

    let mut untouched = open_task("t-4", "ava", d(2025, 6, 30));
    untouched.reassign_history = vec![emp("noah")];

    vec![early, late, in_progress, untouched]
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    employees: HashMap<EmployeeId, Employee>,
    teams: HashMap<TeamId, Team>,
    tasks: Vec<TaskRecord>,
}

impl MemoryDirectory {
    pub(super) fn with_employee(mut self, id: &str, name: &str, team: Option<&str>) -> Self {
        self.employees.insert(
            emp(id),
            Employee {
                id: emp(id),
                name: name.to_string(),
                department: "Engineering".to_string(),
                team: team.map(|team| TeamId(team.to_string())),
            },
        );
        self
    }

    pub(super) fn with_team(mut self, id: &str, name: &str, lead: &str, members: &[&str]) -> Self {
        self.teams.insert(
            TeamId(id.to_string()),
            Team {
                id: TeamId(id.to_string()),
                name: name.to_string(),
                created_by: emp(lead),
                members: members.iter().map(|member| emp(member)).collect(),
            },
        );
        self
    }

    pub(super) fn with_tasks(mut self, tasks: Vec<TaskRecord>) -> Self {
        self.tasks.extend(tasks);
        self
    }
}

impl WorkforceDirectory for MemoryDirectory {
    fn tasks_for(&self, employee: &EmployeeId) -> Result<Vec<TaskRecord>, DirectoryError> {
        Ok(self
            .tasks
            .iter()
            .filter(|task| &task.assigned_to == employee)
            .cloned()
            .collect())
    }

    fn employee(&self, id: &EmployeeId) -> Result<Option<Employee>, DirectoryError> {
        Ok(self.employees.get(id).cloned())
    }

    fn team(&self, id: &TeamId) -> Result<Option<Team>, DirectoryError> {
        Ok(self.teams.get(id).cloned())
    }
}

pub(super) struct UnavailableDirectory;

impl WorkforceDirectory for UnavailableDirectory {
    fn tasks_for(&self, _employee: &EmployeeId) -> Result<Vec<TaskRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn employee(&self, _id: &EmployeeId) -> Result<Option<Employee>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }

    fn team(&self, _id: &TeamId) -> Result<Option<Team>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }
}

/// Scripted feedback store: optional fixed score, optional delay, optional
/// hard failure.
#[derive(Default, Clone)]
pub(super) struct StubFeedback {
    pub(super) score: Option<f64>,
    pub(super) delay: Option<Duration>,
    pub(super) fail: bool,
}

#[async_trait]
impl FeedbackStore for StubFeedback {
    async fn daily_score(&self, _key: &FeedbackKey) -> Result<Option<f64>, FeedbackError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(FeedbackError::Unavailable("feedback offline".to_string()));
        }
        Ok(self.score)
    }
}

pub(super) fn build_service(
    directory: MemoryDirectory,
    feedback: StubFeedback,
) -> PerformanceService<MemoryDirectory, StubFeedback> {
    PerformanceService::new(
        Arc::new(directory),
        Arc::new(feedback),
        ScoreWeights::standard(),
    )
}

pub(super) fn directory_with_ava() -> MemoryDirectory {
    MemoryDirectory::default()
        .with_employee("ava", "Ava Chen", Some("platform"))
        .with_tasks(sample_tasks())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
