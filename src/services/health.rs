use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

/// Payload returned by `/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: String,
    /// Time the response was produced.
    pub timestamp: DateTime<Utc>,
    /// Crate version baked in at compile time.
    pub version: String,
    /// Poll sessions currently held in memory.
    pub active_polls: usize,
    /// Seconds since the service started.
    pub uptime_seconds: u64,
}

#[derive(Clone)]
struct HealthState {
    app: SharedState,
    started_at: DateTime<Utc>,
}

/// The health endpoint router, served next to the bot dispatcher.
pub struct HealthService {
    /// Axum router exposing `/health`, `/health/ready` and `/health/live`.
    pub router: Router,
}

impl HealthService {
    /// Builds the router over the shared session state.
    pub fn new(app: SharedState) -> Self {
        let health_state = HealthState {
            app,
            started_at: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(health_state);

        Self { router }
    }
}

async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    let uptime_seconds = Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_polls: state.app.active_poll_count().await,
        uptime_seconds,
    })
}

async fn readiness_check() -> Json<&'static str> {
    // Everything is in memory, so reachable means ready
    Json("ready")
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}
