use std::io::Cursor;
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::infra::{deserialize_optional_date, AppState};
use team_pulse::analytics::performance::{
    performance_router, EmployeeId, FeedbackStore, PerformanceInsights, PerformanceService,
    ScoreWeights, ScorecardView, ScoringEngine, TaskBreakdown, WorkforceDirectory,
};
use team_pulse::analytics::snapshot::TaskSnapshotImporter;
use team_pulse::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct SnapshotReportRequest {
    pub(crate) employee_id: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    pub(crate) snapshot_csv: String,
    #[serde(default)]
    pub(crate) include_insights: bool,
    #[serde(default)]
    pub(crate) delivery_focus: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct SnapshotReportResponse {
    pub(crate) employee_id: EmployeeId,
    pub(crate) today: NaiveDate,
    pub(crate) scorecard: ScorecardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) insights: Option<PerformanceInsights>,
}

pub(crate) fn with_performance_routes<D, F>(service: Arc<PerformanceService<D, F>>) -> axum::Router
where
    D: WorkforceDirectory + 'static,
    F: FeedbackStore + 'static,
{
    performance_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/performance/report",
            axum::routing::post(snapshot_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Compute a scorecard directly from an inline CSV snapshot, without touching
/// the live directory or the feedback store. HR feedback is 0 here; the
/// endpoint exists for ad-hoc what-if reports over exported data.
pub(crate) async fn snapshot_report_endpoint(
    Json(payload): Json<SnapshotReportRequest>,
) -> Result<Json<SnapshotReportResponse>, AppError> {
    let SnapshotReportRequest {
        employee_id,
        today,
        snapshot_csv,
        include_insights,
        delivery_focus,
    } = payload;

    let records = TaskSnapshotImporter::from_reader(Cursor::new(snapshot_csv.into_bytes()))?;

    let employee_id = EmployeeId(employee_id);
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let breakdown = TaskBreakdown::for_employee(&employee_id, &records, today);

    let weights = if delivery_focus {
        ScoreWeights::delivery_focus()
    } else {
        ScoreWeights::standard()
    };
    let aggregate = ScoringEngine::new(weights).evaluate(&employee_id, &breakdown, 0.0);

    let insights = include_insights.then(|| aggregate.insights());

    Ok(Json(SnapshotReportResponse {
        employee_id,
        today,
        scorecard: aggregate.summary(),
        insights,
    }))
}
