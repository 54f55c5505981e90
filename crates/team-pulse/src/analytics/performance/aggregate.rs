use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{EmployeeId, TaskRecord};

/// Completed/reassigned counters for one calendar bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBucket {
    pub completed: u32,
    pub reassigned: u32,
}

/// Classified task counts and calendar rollups for one employee, recomputed
/// from scratch on every request. Nothing here is persisted or updated
/// incrementally; the lifecycle is create-on-selection, discard-on-deselection.
#[derive(Debug, Default, Clone)]
pub struct TaskBreakdown {
    pub total_assigned: u32,
    pub completed_count: u32,
    pub on_time_count: u32,
    pub reassigned_count: u32,
    pub daily_buckets: BTreeMap<NaiveDate, ActivityBucket>,
    pub monthly_buckets: BTreeMap<String, ActivityBucket>,
    tasks: Vec<TaskRecord>,
}

impl TaskBreakdown {
    /// Filter the snapshot to one employee's tasks and classify each one.
    ///
    /// `today` stands in as the bucketing date for tasks that carry no status
    /// update instant; the caller owns the clock.
    pub fn for_employee(employee_id: &EmployeeId, tasks: &[TaskRecord], today: NaiveDate) -> Self {
        let mut breakdown = Self::default();

        for task in tasks.iter().filter(|task| &task.assigned_to == employee_id) {
            breakdown.total_assigned += 1;

            let completed = task.is_completed();
            if completed {
                breakdown.completed_count += 1;
                if task.completed_on_time() {
                    breakdown.on_time_count += 1;
                }
            }

            let reassignments = task.reassign_history.len() as u32;
            breakdown.reassigned_count += reassignments;

            let bucket_date = task
                .progress_updated_at
                .map(|updated| updated.date())
                .unwrap_or(today);

            let daily = breakdown.daily_buckets.entry(bucket_date).or_default();
            if completed {
                daily.completed += 1;
            }
            daily.reassigned += reassignments;

            let monthly = breakdown
                .monthly_buckets
                .entry(month_key(bucket_date))
                .or_default();
            if completed {
                monthly.completed += 1;
            }
            monthly.reassigned += reassignments;

            breakdown.tasks.push(task.clone());
        }

        breakdown
    }

    /// The employee's tasks in snapshot order, for the per-task sub-scores.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }
}

pub(crate) fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
