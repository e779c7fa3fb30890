use std::future::Future;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::pipeline::{validate_region, MaiPipeline};
use crate::protocol::{HealthBody, SummaryRequest};

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<MaiPipeline>,
}

impl AppState {
    pub fn new(pipeline: MaiPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/weather-summary", post(weather_summary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody::ok())
}

async fn weather_summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "rejected summary request body");
            return PipelineError::Validation(rejection.body_text()).into_response();
        }
    };

    let region = match validate_region(request.region.as_deref()) {
        Ok(region) => region,
        Err(err) => return err.into_response(),
    };

    match state.pipeline.run(&region).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Binds `addr` and serves until ctrl-c.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "mai-server listening");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await
}

/// Resolves once `signal` fires. If the signal cannot be installed this never
/// resolves, so the server keeps running instead of shutting down at once.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "failed to listen for shutdown signal; graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}
