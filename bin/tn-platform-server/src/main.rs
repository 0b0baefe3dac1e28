//! Telco Numbers Platform Server
//!
//! Production server for the phone number REST API:
//! - `GET /v{version}/phoneNumbers`
//! - `GET /v{version}/customers/{customerId}/phone-numbers`
//! - `PATCH /v{version}/phone-numbers/{phoneNumber}/activate`
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TN_API_PORT` | `8080` | HTTP API port |
//! | `TN_MONGO_URL` | `mongodb://localhost:27017` | MongoDB connection URL |
//! | `TN_MONGO_DB` | `telco_numbers` | MongoDB database name |
//! | `TN_DEV_MODE` | `false` | Seed development data on startup |
//! | `RUST_LOG` | `info` | Log level |
//! | `LOG_FORMAT` | text | Set to `json` for JSON logs |

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa_swagger_ui::SwaggerUi;

use tn_platform::api::{health_router, phone_numbers_router, HealthState, PhoneNumbersState};
use tn_platform::seed::DevDataSeeder;
use tn_platform::{ActivatePhoneNumberUseCase, CustomerRepository, PhoneNumberRepository};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    tn_common::logging::init_logging("tn-platform-server");

    info!("Starting Telco Numbers Platform Server");

    // Configuration from environment
    let api_port: u16 = env_or_parse("TN_API_PORT", 8080);
    let mongo_url = env_or("TN_MONGO_URL", "mongodb://localhost:27017");
    let mongo_db = env_or("TN_MONGO_DB", "telco_numbers");

    // Connect to MongoDB
    info!("Connecting to MongoDB: {}/{}", mongo_url, mongo_db);
    let mongo_client = mongodb::Client::with_uri_str(&mongo_url).await?;
    let db = mongo_client.database(&mongo_db);

    // Seed development data if in dev mode
    let dev_mode = std::env::var("TN_DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    if dev_mode {
        let seeder = DevDataSeeder::new(db.clone());
        if let Err(e) = seeder.seed().await {
            tracing::warn!("Dev data seeding skipped (data may already exist): {}", e);
        }
    }

    // Initialize repositories and use cases
    let phone_number_repo = Arc::new(PhoneNumberRepository::new(&db));
    let customer_repo = Arc::new(CustomerRepository::new(&db));
    let activate_use_case = Arc::new(ActivatePhoneNumberUseCase::new(phone_number_repo.clone()));
    info!("Repositories initialized");

    let phone_numbers_state = PhoneNumbersState {
        phone_number_repo,
        customer_repo,
        activate_use_case,
    };

    let health_state = HealthState::new(
        Some(db.clone()),
        Some(env!("CARGO_PKG_VERSION").to_string()),
    );

    // Build the API router with auto-collected OpenAPI paths
    let (router, mut openapi) = phone_numbers_router(phone_numbers_state).split_for_parts();

    openapi.info.title = "Telco Numbers Platform API".to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.info.description =
        Some("REST API for listing and activating customer phone numbers".to_string());

    let app = Router::new()
        .merge(router)
        .nest("/health", health_router(health_state.clone()))
        .merge(SwaggerUi::new("/swagger-ui").url("/q/openapi", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    health_state.set_ready();

    let api_addr = format!("0.0.0.0:{}", api_port);
    info!("API server listening on http://{}", api_addr);

    let listener = TcpListener::bind(&api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Telco Numbers Platform Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
