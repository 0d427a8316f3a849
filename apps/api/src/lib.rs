//! # Barber POS API
//!
//! HTTP/JSON server for a barbershop point of sale: service catalog, barber
//! roster, and the daily sales ledger.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barber POS API Server                            │
//! │                                                                         │
//! │  Browser ───► HTTP (3000) ───► Router ───► routes::* ───► SQLite       │
//! │                                   │            │                        │
//! │                              TraceLayer    barber-core                  │
//! │                                           (validation,                  │
//! │                                            commission)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path                  | Handler                           |
//! |--------|-----------------------|-----------------------------------|
//! | GET    | `/api/data`           | [`routes::data::initial_data`]    |
//! | GET    | `/api/sales?date=`    | [`routes::sales::list_sales`]     |
//! | POST   | `/api/sales`          | [`routes::sales::create_sale`]    |
//! | POST   | `/api/services`       | [`routes::services::create_service`] |
//! | DELETE | `/api/services/{id}`  | [`routes::services::delete_service`] |
//! | POST   | `/api/barbers`        | [`routes::barbers::create_barber`] |
//! | DELETE | `/api/barbers/{id}`   | [`routes::barbers::delete_barber`] |
//! | GET    | `/health`             | [`routes::health::health`]        |

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barber_db::Database;

pub use crate::config::{ConfigError, ServerConfig};
pub use crate::error::{ApiError, ApiResult};

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,barber=debug,sqlx=warn";

/// Shared application state.
///
/// Built once at startup; every handler receives it through `State`.
#[derive(Debug)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Arc<Self> {
        Arc::new(AppState { db })
    }
}

/// Handle type used by every handler.
pub type SharedState = Arc<AppState>;

/// Builds the application router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/data", get(routes::data::initial_data))
        .route(
            "/api/sales",
            get(routes::sales::list_sales).post(routes::sales::create_sale),
        )
        .route("/api/services", post(routes::services::create_service))
        .route("/api/services/{id}", delete(routes::services::delete_service))
        .route("/api/barbers", post(routes::barbers::create_barber))
        .route("/api/barbers/{id}", delete(routes::barbers::delete_barber))
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise `info`, with `debug` for the barber crates and `warn` for sqlx
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
