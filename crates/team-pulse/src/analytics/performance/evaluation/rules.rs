use super::super::aggregate::TaskBreakdown;
use super::super::domain::{end_of_day, TaskRecord};

/// The four task-derived sub-scores, each bounded to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SubScores {
    pub completion_rate: f64,
    pub on_time_rate: f64,
    pub productivity_score: f64,
    pub review_score: f64,
}

pub(crate) fn sub_scores(breakdown: &TaskBreakdown) -> SubScores {
    SubScores {
        completion_rate: completion_rate(breakdown.completed_count, breakdown.total_assigned),
        on_time_rate: on_time_rate(breakdown.on_time_count, breakdown.completed_count),
        productivity_score: productivity_score(breakdown.tasks()),
        review_score: review_score(breakdown.tasks()),
    }
}

pub(crate) fn completion_rate(completed: u32, total_assigned: u32) -> f64 {
    if total_assigned == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total_assigned) * 100.0
}

pub(crate) fn on_time_rate(on_time: u32, completed: u32) -> f64 {
    if completed == 0 {
        return 0.0;
    }
    f64::from(on_time) / f64::from(completed) * 100.0
}

/// Mean of the per-task productivity bands across scoreable tasks, 0 when
/// none qualify. A task is scoreable only when completed, with `created_at`
/// and `progress_updated_at` present and a positive allotted window.
pub(crate) fn productivity_score(tasks: &[TaskRecord]) -> f64 {
    let scores: Vec<f64> = tasks.iter().filter_map(task_productivity).collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Band a single task by how early or late it closed relative to its window.
///
/// The bands mirror the dashboard's observed thresholds, including the
/// 0.1 <= left_ratio < 0.5 fall-through to 60.
pub(crate) fn task_productivity(task: &TaskRecord) -> Option<f64> {
    if !task.is_completed() {
        return None;
    }
    let created = task.created_at?;
    let completed = task.progress_updated_at?;
    let due = end_of_day(task.due_date);

    let total = (due - created).num_seconds();
    if total <= 0 {
        return None;
    }
    let total = total as f64;

    let score = if completed <= due {
        let left_ratio = (due - completed).num_seconds() as f64 / total;
        if left_ratio >= 0.5 {
            100.0
        } else if left_ratio < 0.1 {
            70.0
        } else {
            60.0
        }
    } else {
        let overdue_ratio = (completed - due).num_seconds() as f64 / total;
        if overdue_ratio <= 0.1 {
            50.0
        } else if overdue_ratio <= 0.5 {
            30.0
        } else {
            10.0
        }
    };

    Some(score)
}

/// Mean of `review_points` across tasks that carry one, 0 when none do.
pub(crate) fn review_score(tasks: &[TaskRecord]) -> f64 {
    let points: Vec<f64> = tasks.iter().filter_map(|task| task.review_points).collect();
    if points.is_empty() {
        return 0.0;
    }
    points.iter().sum::<f64>() / points.len() as f64
}
