use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use super::common::*;
use crate::analytics::performance::router::performance_router;

fn router_with_ava() -> axum::Router {
    let directory = directory_with_ava()
        .with_employee("noah", "Noah Reyes", Some("platform"))
        .with_team("platform", "Platform", "ava", &["ava", "noah"]);
    let service = Arc::new(build_service(
        directory,
        StubFeedback {
            score: Some(40.0),
            ..StubFeedback::default()
        },
    ));
    performance_router(service)
}

async fn get(router: axum::Router, uri: &str) -> axum::response::Response {
    router
        .oneshot(
            axum::http::Request::get(uri)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn scorecard_route_returns_the_summary() {
    let response = get(
        router_with_ava(),
        "/api/v1/performance/employees/ava?date=2025-06-16",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("employee_id").and_then(serde_json::Value::as_str),
        Some("ava")
    );
    assert_eq!(
        payload.get("hr_feedback_score").and_then(serde_json::Value::as_f64),
        Some(40.0)
    );
    assert!(payload.get("total_performance_score").is_some());
    assert!(payload
        .get("daily_trend")
        .and_then(serde_json::Value::as_array)
        .is_some_and(|trend| !trend.is_empty()));
}

#[tokio::test]
async fn scorecard_route_rejects_unknown_employees() {
    let response = get(
        router_with_ava(),
        "/api/v1/performance/employees/zoe?date=2025-06-16",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("zoe"));
}

#[tokio::test]
async fn matrix_route_returns_ranked_entries() {
    let response = get(
        router_with_ava(),
        "/api/v1/performance/teams/platform/matrix?date=2025-06-16",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let entries = payload
        .get("entries")
        .and_then(serde_json::Value::as_array)
        .expect("entries array");
    assert_eq!(entries.len(), 2);
    let totals: Vec<f64> = entries
        .iter()
        .filter_map(|entry| {
            entry
                .get("total_performance_score")
                .and_then(serde_json::Value::as_f64)
        })
        .collect();
    assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn matrix_route_rejects_unknown_teams() {
    let response = get(
        router_with_ava(),
        "/api/v1/performance/teams/ghosts/matrix?date=2025-06-16",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
