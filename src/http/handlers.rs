//! API route handlers.
//!
//! Each data endpoint follows the same shape: check the response cache,
//! build on miss, memoize, respond. The `source` field inside the payload
//! is the only signal of remote vs. fallback data; the HTTP layer never
//! reports degradation itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::http::server::AppState;
use crate::http::trinkets;
use crate::observability::metrics;
use crate::rankings::{DataSource, RankingError, EXPANSION_NAME, PATCH_VERSION};
use crate::specs;

/// Aggregate cache key for the full rankings map.
const ALL_RANKINGS_KEY: &str = "all_rankings";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub expansion: &'static str,
    pub patch: &'static str,
    pub specs_available: u32,
    pub warcraft_logs_connected: bool,
    pub data_source: DataSource,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = state.service.remote_configured();
    metrics::record_request("health", 200);
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        expansion: EXPANSION_NAME,
        patch: PATCH_VERSION,
        specs_available: specs::population(),
        warcraft_logs_connected: connected,
        data_source: if connected {
            DataSource::Remote
        } else {
            DataSource::LocalFallback
        },
    })
}

pub async fn all_rankings(State(state): State<AppState>) -> Response {
    if let Some(cached) = state.responses.get(ALL_RANKINGS_KEY) {
        metrics::record_request("rankings", 200);
        return Json(cached).into_response();
    }

    let results = state.service.get_all_rankings().await;
    match serde_json::to_value(&results) {
        Ok(value) => {
            state.responses.put(ALL_RANKINGS_KEY, value.clone());
            metrics::record_request("rankings", 200);
            Json(value).into_response()
        }
        Err(e) => internal_error("rankings", e),
    }
}

pub async fn spec_ranking(
    State(state): State<AppState>,
    Path(spec_id): Path<String>,
) -> Response {
    let cache_key = format!("rankings_{spec_id}");
    if let Some(cached) = state.responses.get(&cache_key) {
        metrics::record_request("rankings_spec", 200);
        return Json(cached).into_response();
    }

    let ranking = match state.service.get_ranking(&spec_id).await {
        Ok(ranking) => ranking,
        Err(RankingError::UnknownSpecialization(_)) => {
            metrics::record_request("rankings_spec", 400);
            return unknown_spec(&spec_id);
        }
    };

    match serde_json::to_value(&ranking) {
        Ok(value) => {
            state.responses.put(cache_key, value.clone());
            metrics::record_request("rankings_spec", 200);
            Json(value).into_response()
        }
        Err(e) => internal_error("rankings_spec", e),
    }
}

pub async fn spec_trinkets(
    State(state): State<AppState>,
    Path(spec_id): Path<String>,
) -> Response {
    if specs::descriptor(&spec_id).is_none() {
        metrics::record_request("trinkets", 400);
        return unknown_spec(&spec_id);
    }

    let cache_key = format!("trinkets_{spec_id}");
    if let Some(cached) = state.responses.get(&cache_key) {
        metrics::record_request("trinkets", 200);
        return Json(cached).into_response();
    }

    match serde_json::to_value(trinkets::trinket_list()) {
        Ok(value) => {
            state.responses.put(cache_key, value.clone());
            metrics::record_request("trinkets", 200);
            Json(value).into_response()
        }
        Err(e) => internal_error("trinkets", e),
    }
}

pub async fn not_found() -> Response {
    metrics::record_request("unmatched", 404);
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

fn unknown_spec(spec_id: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("unknown specialization: {spec_id}") })),
    )
        .into_response()
}

fn internal_error(route: &'static str, error: serde_json::Error) -> Response {
    tracing::error!(route, %error, "Failed to build response");
    metrics::record_request(route, 500);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "failed to build response" })),
    )
        .into_response()
}
