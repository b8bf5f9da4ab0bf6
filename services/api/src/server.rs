use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredNotifier, InMemoryResultStore};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use heavendesk::assessment::{AssessmentService, ScoringEngine};
use heavendesk::config::AppConfig;
use heavendesk::error::AppError;
use heavendesk::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let store = Arc::new(InMemoryResultStore::default());
    let notifier = Arc::new(ConfiguredNotifier::from_config(&config.notifications)?);
    let notifier_kind = notifier.kind();
    let assessment_service = Arc::new(AssessmentService::new(
        store,
        notifier,
        ScoringEngine::new(config.scoring.clone()),
        config.notifications.delivery_settings(),
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        notifier = notifier_kind,
        base_url = %config.notifications.base_url,
        "heavendesk assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
