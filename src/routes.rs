use crate::handlers::{self, AppState};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The only request body is the lookup form.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Builds the application router with its middleware stack.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/get_player_info",
            get(handlers::player_info_query).post(handlers::player_info_form),
        )
        .route("/api/player/:uid", get(handlers::player_json))
        .route(
            "/api/player/:uid/:region",
            get(handlers::player_json_in_region),
        )
        .route("/static/js/script.js", get(handlers::script))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
