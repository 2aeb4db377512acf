use crate::config::Config;
use crate::enrichment::enrich_player_document;
use crate::errors::{AppError, UpstreamError};
use crate::models::{LookupParams, PlayerQuery};
use crate::upstream_client::PlayerInfoClient;
use crate::views::{Templates, SCRIPT_JS};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse},
    Form, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream player-info service.
    pub player_client: PlayerInfoClient,
    /// Compiled HTML templates.
    pub templates: Templates,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let player_client = PlayerInfoClient::from_config(config)?;
        let templates = Templates::new()?;
        Ok(Self {
            player_client,
            templates,
        })
    }
}

/// Health check endpoint.
///
/// # Returns
///
/// * `(StatusCode, Json<Value>)` - HTTP 200 OK with the fixed status object.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "Free Fire Info API"
        })),
    )
}

/// GET /
///
/// The lookup form.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render_index(None)?))
}

/// GET /get_player_info?uid=...&region=...
pub async fn player_info_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Result<Html<String>, AppError> {
    tracing::info!("GET /get_player_info - params: {:?}", params);
    render_player_info(&state, params).await
}

/// POST /get_player_info (form fields `uid`, `region`)
pub async fn player_info_form(
    State(state): State<Arc<AppState>>,
    Form(params): Form<LookupParams>,
) -> Result<Html<String>, AppError> {
    tracing::info!("POST /get_player_info - params: {:?}", params);
    render_player_info(&state, params).await
}

/// Looks the player up and renders either the result page or the form with
/// an error banner.
///
/// A missing uid is the only failure returned as an error response; every
/// upstream or rendering failure ends up on the form page.
async fn render_player_info(
    state: &AppState,
    params: LookupParams,
) -> Result<Html<String>, AppError> {
    let query = params.into_query()?;

    let error_message = match state.player_client.fetch_player(&query).await {
        Ok(mut document) => {
            enrich_player_document(&mut document);
            match state.templates.render_result(&document, &query) {
                Ok(page) => return Ok(Html(page)),
                Err(e) => format!("Error: {}", e),
            }
        }
        Err(UpstreamError::Status(code)) => format!("API Error: {}", code),
        Err(e @ UpstreamError::Network(_)) => format!("Network Error: {}", e),
        Err(e) => format!("Error: {}", e),
    };

    tracing::warn!("Lookup for {} failed: {}", query.uid, error_message);
    Ok(Html(state.templates.render_index(Some(&error_message))?))
}

/// GET /api/player/:uid
pub async fn player_json(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let query = PlayerQuery::new(uid, None)?;
    Ok(player_json_response(&state, &query).await)
}

/// GET /api/player/:uid/:region
pub async fn player_json_in_region(
    State(state): State<Arc<AppState>>,
    Path((uid, region)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let query = PlayerQuery::new(uid, Some(region))?;
    Ok(player_json_response(&state, &query).await)
}

/// Proxies the upstream document as-is, without enrichment.
async fn player_json_response(
    state: &AppState,
    query: &PlayerQuery,
) -> (StatusCode, Json<Value>) {
    tracing::info!("GET /api/player/{}/{}", query.uid, query.region);

    match state.player_client.fetch_player(query).await {
        Ok(document) => (StatusCode::OK, Json(document)),
        Err(UpstreamError::Status(code)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to fetch data",
                "status_code": code
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        ),
    }
}

/// GET /static/js/script.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("{} not found", uri.path()))
}
