use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;

use team_pulse::analytics::performance::{
    DirectoryError, EmployeeId, FeedbackError, FeedbackKey, FeedbackStore, ScoreWeights, TaskRecord,
    TeamId, WorkforceDirectory,
};
use team_pulse::analytics::roster::{Employee, Team};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDirectory {
    employees: Arc<Mutex<HashMap<EmployeeId, Employee>>>,
    teams: Arc<Mutex<HashMap<TeamId, Team>>>,
    tasks: Arc<Mutex<Vec<TaskRecord>>>,
}

impl InMemoryDirectory {
    pub(crate) fn insert_employee(&self, employee: Employee) {
        let mut guard = self.employees.lock().expect("employee mutex poisoned");
        guard.insert(employee.id.clone(), employee);
    }

    pub(crate) fn insert_team(&self, team: Team) {
        let mut guard = self.teams.lock().expect("team mutex poisoned");
        guard.insert(team.id.clone(), team);
    }

    pub(crate) fn extend_tasks(&self, records: Vec<TaskRecord>) {
        let mut guard = self.tasks.lock().expect("task mutex poisoned");
        guard.extend(records);
    }
}

impl WorkforceDirectory for InMemoryDirectory {
    fn tasks_for(&self, employee: &EmployeeId) -> Result<Vec<TaskRecord>, DirectoryError> {
        let guard = self.tasks.lock().expect("task mutex poisoned");
        Ok(guard
            .iter()
            .filter(|task| &task.assigned_to == employee)
            .cloned()
            .collect())
    }

    fn employee(&self, id: &EmployeeId) -> Result<Option<Employee>, DirectoryError> {
        let guard = self.employees.lock().expect("employee mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn team(&self, id: &TeamId) -> Result<Option<Team>, DirectoryError> {
        let guard = self.teams.lock().expect("team mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFeedbackStore {
    scores: Arc<Mutex<HashMap<String, f64>>>,
}

impl InMemoryFeedbackStore {
    pub(crate) fn set(&self, document_id: &str, score: f64) {
        let mut guard = self.scores.lock().expect("feedback mutex poisoned");
        guard.insert(document_id.to_string(), score);
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn daily_score(&self, key: &FeedbackKey) -> Result<Option<f64>, FeedbackError> {
        let guard = self.scores.lock().expect("feedback mutex poisoned");
        Ok(guard.get(&key.document_id()).copied())
    }
}

pub(crate) fn default_score_weights() -> ScoreWeights {
    ScoreWeights::standard()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
