//! HTTP front end for the calculator
//!
//! ## Endpoints
//! - `GET  /` calculator form
//! - `GET  /calculate?<fields>` form plus results (422 on invalid input)
//! - `POST /api/v1/calculate` JSON scenario in, JSON report out
//! - `GET  /api/v1/stats` request counters
//! - `GET  /health` liveness check

use crate::calculator::{compute, CalculationInput, CalculationReport, CalculationRequest};
use crate::server::config::ServerConfig;
use crate::server::error::ApiError;
use crate::server::monitor::{ServerCounters, ServerMonitor, ServerStats};
use crate::server::page::{render_page, Outcome};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

/// Shared state available to all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    monitor: ServerMonitor,
    counters: ServerCounters,
}

impl AppState {
    pub fn new(monitor: ServerMonitor) -> Self {
        let counters = monitor.counters();
        Self { monitor, counters }
    }

    /// Monitor backing the handler counters
    pub fn monitor(&self) -> &ServerMonitor {
        &self.monitor
    }
}

/// Builds the router with every endpoint and request tracing
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/calculate", get(calculate_page_handler))
        .route("/api/v1/calculate", post(calculate_api_handler))
        .route("/api/v1/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to `config.address()` and serves until Ctrl-C is received.
pub async fn start_server(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Bandwidth calculator listening");

    let monitor = state.monitor().clone();
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    monitor.log_summary();
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    state.counters.increment_pages();
    Html(render_page(&CalculationRequest::default(), Outcome::Empty))
}

async fn calculate_page_handler(
    State(state): State<AppState>,
    Query(fields): Query<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    state.counters.increment_pages();

    let (request, parse_error) =
        CalculationRequest::from_form(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let outcome = match parse_error {
        Some(e) => Err(e),
        None => CalculationInput::try_from(request.clone()).map(|input| compute(&input)),
    };

    match outcome {
        Ok(result) => {
            state.counters.increment_calculations();
            (
                StatusCode::OK,
                Html(render_page(&request, Outcome::Computed(&result))),
            )
        }
        Err(e) => {
            state.counters.increment_rejected();
            warn!(error = %e, "Invalid calculator input");
            let message = e.to_string();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_page(&request, Outcome::Invalid(&message))),
            )
        }
    }
}

async fn calculate_api_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationReport>, ApiError> {
    let report = payload.map_err(ApiError::from).and_then(|Json(request)| {
        let report = CalculationReport::new(CalculationInput::try_from(request)?);
        report.result.ensure_finite()?;
        Ok(report)
    });

    match report {
        Ok(report) => {
            state.counters.increment_calculations();
            debug!(summary = ?report.summary, "Calculation served");
            Ok(Json(report))
        }
        Err(e) => {
            state.counters.increment_rejected();
            warn!(error = %e, status = %e.status(), "Rejected calculation request");
            Err(e)
        }
    }
}

async fn stats_handler(State(state): State<AppState>) -> Json<ServerStats> {
    Json(state.monitor().stats())
}

async fn health_handler() -> &'static str {
    "OK"
}
