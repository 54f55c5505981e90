use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{EmployeeId, TeamId};
use super::feedback::FeedbackStore;
use super::repository::WorkforceDirectory;
use super::service::{PerformanceService, ScoringError};

/// Router builder exposing the scoring operations over HTTP.
pub fn performance_router<D, F>(service: Arc<PerformanceService<D, F>>) -> Router
where
    D: WorkforceDirectory + 'static,
    F: FeedbackStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/performance/employees/:employee_id",
            get(scorecard_handler::<D, F>),
        )
        .route(
            "/api/v1/performance/teams/:team_id/matrix",
            get(team_matrix_handler::<D, F>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreQuery {
    /// Reporting date; defaults to the caller's local date.
    pub(crate) date: Option<NaiveDate>,
}

impl ScoreQuery {
    fn resolve_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

pub(crate) async fn scorecard_handler<D, F>(
    State(service): State<Arc<PerformanceService<D, F>>>,
    Path(employee_id): Path<String>,
    Query(query): Query<ScoreQuery>,
) -> Response
where
    D: WorkforceDirectory + 'static,
    F: FeedbackStore + 'static,
{
    let id = EmployeeId(employee_id);
    let today = query.resolve_date();

    match service.scorecard(&id, today).await {
        Ok(aggregate) => (StatusCode::OK, axum::Json(aggregate.summary())).into_response(),
        Err(error) => scoring_error_response(error),
    }
}

pub(crate) async fn team_matrix_handler<D, F>(
    State(service): State<Arc<PerformanceService<D, F>>>,
    Path(team_id): Path<String>,
    Query(query): Query<ScoreQuery>,
) -> Response
where
    D: WorkforceDirectory + 'static,
    F: FeedbackStore + 'static,
{
    let id = TeamId(team_id);
    let today = query.resolve_date();

    match service.team_matrix(&id, today).await {
        Ok(matrix) => (StatusCode::OK, axum::Json(matrix)).into_response(),
        Err(error) => scoring_error_response(error),
    }
}

fn scoring_error_response(error: ScoringError) -> Response {
    let status = match &error {
        ScoringError::UnknownEmployee(_) | ScoringError::UnknownTeam(_) => StatusCode::NOT_FOUND,
        ScoringError::Superseded => StatusCode::CONFLICT,
        ScoringError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
