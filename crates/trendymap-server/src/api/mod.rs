mod geocode;
mod stores;

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use trendymap_kakao::KakaoClient;

#[derive(Clone)]
pub struct AppState {
    pub kakao: Arc<KakaoClient>,
}

/// The wire shape for every failure: one human-readable string, no
/// internals.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

/// Builds the application router.
///
/// Unmatched routes fall through to static assets, with `index.html` as
/// the catch-all so client-side routing keeps working on deep links.
pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    let assets = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/stores", get(stores::list_stores))
        .route("/api/geocode", get(geocode::resolve))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}
