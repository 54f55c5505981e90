use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::demo::seed_demo_workforce;
use crate::infra::{default_score_weights, AppState, InMemoryDirectory, InMemoryFeedbackStore};
use crate::routes::with_performance_routes;
use team_pulse::analytics::performance::PerformanceService;
use team_pulse::config::AppConfig;
use team_pulse::error::AppError;
use team_pulse::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(InMemoryDirectory::default());
    let feedback = Arc::new(InMemoryFeedbackStore::default());
    if args.seed_demo {
        seed_demo_workforce(&directory, &feedback);
        info!("seeded the demo workforce into the in-memory directory");
    }

    let service = Arc::new(
        PerformanceService::new(directory, feedback, default_score_weights())
            .with_feedback_timeout(config.scoring.feedback_timeout()),
    );

    let app = with_performance_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "performance analytics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
