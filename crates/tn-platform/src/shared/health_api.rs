//! Health Check Endpoints
//!
//! Standard endpoints for Kubernetes probes and monitoring:
//! - /health - combined status with a MongoDB ping
//! - /health/live - liveness probe
//! - /health/ready - readiness probe
//! - /health/startup - startup probe

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
    Degraded,
}

/// Individual health check result
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Full health response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<HealthCheck>,
}

/// Simple health status response
#[derive(Debug, Serialize, ToSchema)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

/// Health service state
#[derive(Clone)]
pub struct HealthState {
    /// Database for the connectivity check
    pub db: Option<mongodb::Database>,

    /// Service version
    pub version: Option<String>,

    /// Ready flag (set after wiring completes)
    pub ready: Arc<std::sync::atomic::AtomicBool>,
}

impl HealthState {
    pub fn new(db: Option<mongodb::Database>, version: Option<String>) -> Self {
        Self {
            db,
            version,
            ready: Arc::new(std::sync::atomic::AtomicBool::new(false)),
        }
    }

    pub fn set_ready(&self) {
        self.ready.store(true, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(std::sync::atomic::Ordering::SeqCst)
    }
}

async fn ping_mongo(db: &mongodb::Database) -> HealthCheck {
    let start = std::time::Instant::now();

    match db.run_command(mongodb::bson::doc! { "ping": 1 }).await {
        Ok(_) => HealthCheck {
            name: "mongodb".to_string(),
            status: HealthStatus::Up,
            message: None,
            duration_ms: Some(start.elapsed().as_millis() as u64),
        },
        Err(e) => HealthCheck {
            name: "mongodb".to_string(),
            status: HealthStatus::Down,
            message: Some(format!("Connection failed: {}", e)),
            duration_ms: Some(start.elapsed().as_millis() as u64),
        },
    }
}

/// Combined health check
pub async fn get_health(State(state): State<HealthState>) -> Response {
    let mut checks = Vec::new();
    let mut overall_status = HealthStatus::Up;

    if let Some(db) = &state.db {
        let check = ping_mongo(db).await;
        if check.status == HealthStatus::Down {
            overall_status = HealthStatus::Down;
        }
        checks.push(check);
    }

    if !state.is_ready() && overall_status == HealthStatus::Up {
        overall_status = HealthStatus::Degraded;
    }

    let response = HealthResponse {
        status: overall_status,
        timestamp: Utc::now(),
        version: state.version.clone(),
        checks,
    };

    let status_code = if overall_status == HealthStatus::Down {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status_code, Json(response)).into_response()
}

/// Liveness probe
pub async fn get_liveness() -> Json<SimpleHealthResponse> {
    Json(SimpleHealthResponse {
        status: HealthStatus::Up,
    })
}

/// Readiness probe
pub async fn get_readiness(State(state): State<HealthState>) -> Response {
    let status = if state.is_ready() {
        if let Some(db) = &state.db {
            if ping_mongo(db).await.status == HealthStatus::Up {
                HealthStatus::Up
            } else {
                HealthStatus::Down
            }
        } else {
            HealthStatus::Up
        }
    } else {
        HealthStatus::Down
    };

    let status_code = if status == HealthStatus::Down {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status_code, Json(SimpleHealthResponse { status })).into_response()
}

/// Startup probe
pub async fn get_startup(State(state): State<HealthState>) -> Response {
    let status = if state.is_ready() {
        HealthStatus::Up
    } else {
        HealthStatus::Down
    };

    let status_code = if status == HealthStatus::Down {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status_code, Json(SimpleHealthResponse { status })).into_response()
}

/// Create the health router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(get_health))
        .route("/live", get(get_liveness))
        .route("/ready", get(get_readiness))
        .route("/startup", get(get_startup))
        .with_state(state)
}
