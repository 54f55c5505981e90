use serde::Serialize;

use super::super::domain::{EmployeeId, TeamId};

/// One point of a completed/reassigned trend series, keyed by day or month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub period: String,
    pub completed: u32,
    pub reassigned: u32,
}

/// Coarse banding of the total score for cards and matrix rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Solid,
    Monitor,
    AtRisk,
}

impl ScoreBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Solid => "Solid",
            Self::Monitor => "Monitor",
            Self::AtRisk => "At Risk",
        }
    }

    pub(crate) fn for_score(total: f64) -> Self {
        if total >= 85.0 {
            Self::Excellent
        } else if total >= 70.0 {
            Self::Solid
        } else if total >= 50.0 {
            Self::Monitor
        } else {
            Self::AtRisk
        }
    }
}

/// Serialized scorecard consumed by cards and charts.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardView {
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
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub daily_trend: Vec<TrendPoint>,
    pub monthly_trend: Vec<TrendPoint>,
}

/// One row of a team matrix, pre-sorted by total score.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMatrixEntry {
    pub employee_id: EmployeeId,
    pub name: String,
    pub total_performance_score: f64,
    pub completion_rate: f64,
    pub on_time_rate: f64,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMatrix {
    pub team_id: TeamId,
    pub team_name: String,
    pub lead: EmployeeId,
    pub entries: Vec<TeamMatrixEntry>,
}

/// Narrative companion to a scorecard.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceInsights {
    pub band: ScoreBand,
    pub band_label: &'static str,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_focus: Vec<String>,
}
