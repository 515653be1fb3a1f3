//! moji-web library - HTTP facade over the generator
//!
//! JSON API under `/api`, health check, and the static site (if present)
//! on every other path.

pub mod api;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use chrono::{DateTime, Utc};
use moji_common::config::MojiConfig;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved configuration (file + environment + CLI)
    pub config: Arc<MojiConfig>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: MojiConfig) -> Self {
        Self {
            config: Arc::new(config),
            startup_time: Utc::now(),
        }
    }
}

fn cors_layer(config: &MojiConfig) -> CorsLayer {
    if config.cors_allows_any() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .merge(api::generate_routes())
        .merge(api::explore_routes())
        .merge(api::preview_routes())
        .merge(api::buildinfo_routes())
        .merge(api::health_routes())
        .with_state(state);

    let router = if static_dir.is_dir() {
        info!("Serving static files from {}", static_dir.display());
        let index = ServeFile::new(static_dir.join("index.html"));
        router.fallback_service(ServeDir::new(&static_dir).fallback(index))
    } else {
        warn!("Static directory {} not found, UI disabled", static_dir.display());
        router
    };

    router.layer(cors).layer(TraceLayer::new_for_http())
}
