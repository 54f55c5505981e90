use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

use crate::analytics::performance::domain::{EmployeeId, TaskId, TaskRecord};

use super::normalizer::status_from;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<TaskRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<SnapshotRow>().enumerate() {
        let row = record?;
        match row.into_task(index) {
            Some(task) => records.push(task),
            None => {
                warn!(row = index + 1, "skipping snapshot row without a usable due date or assignee");
            }
        }
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SnapshotRow {
    #[serde(rename = "Task ID", default, deserialize_with = "empty_string_as_none")]
    task_id: Option<String>,
    #[serde(rename = "Title", default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
    #[serde(rename = "Assigned To", default, deserialize_with = "empty_string_as_none")]
    assigned_to: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(rename = "Due Date", default, deserialize_with = "empty_string_as_none")]
    due_date: Option<String>,
    #[serde(rename = "Created At", default, deserialize_with = "empty_string_as_none")]
    created_at: Option<String>,
    #[serde(
        rename = "Progress Updated At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    progress_updated_at: Option<String>,
    #[serde(rename = "Reassigned To", default, deserialize_with = "empty_string_as_none")]
    reassigned_to: Option<String>,
    #[serde(rename = "Review Points", default, deserialize_with = "empty_string_as_none")]
    review_points: Option<String>,
}

impl SnapshotRow {
    fn into_task(self, index: usize) -> Option<TaskRecord> {
        let assigned_to = self.assigned_to?;
        let due_date = self.due_date.as_deref().and_then(parse_date)?;

        let reassign_history = self
            .reassigned_to
            .as_deref()
            .map(|cell| {
                cell.split(';')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(|entry| EmployeeId(entry.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Some(TaskRecord {
            id: TaskId(
                self.task_id
                    .unwrap_or_else(|| format!("snapshot-{}", index + 1)),
            ),
            title: self.title.unwrap_or_default(),
            assigned_to: EmployeeId(assigned_to),
            progress_status: status_from(self.status.as_deref().unwrap_or_default()),
            due_date,
            created_at: self.created_at.as_deref().and_then(parse_datetime),
            progress_updated_at: self.progress_updated_at.as_deref().and_then(parse_datetime),
            reassign_history,
            review_points: self
                .review_points
                .as_deref()
                .and_then(|cell| cell.trim().parse::<f64>().ok()),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    parse_datetime(trimmed).map(|dt| dt.date())
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
