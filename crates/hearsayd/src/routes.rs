//! API routes for hearsayd.

use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use hearsay_common::{answer_question, engine, AskResponse, HealthResponse, MemberCountsResponse};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

/// How many raw upstream items the debug sample returns
const DEBUG_SAMPLE_SIZE: usize = 5;

// ============================================================================
// Ask Routes
// ============================================================================

pub fn ask_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/ask", get(ask))
}

#[derive(Debug, Deserialize)]
struct AskParams {
    /// Natural-language question about a member
    question: String,
}

async fn ask(
    State(state): State<AppStateArc>,
    Query(params): Query<AskParams>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    info!("  Answering question: {}", params.question);

    // Fresh fetch on every question; the engine never caches.
    let messages = state.messages.fetch_messages().await.map_err(|e| {
        error!("  Upstream fetch failed: {}", e);
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;

    let answer = answer_question(&params.question, &messages);
    Ok(Json(AskResponse { answer }))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

// ============================================================================
// Debug Routes
// ============================================================================

pub fn debug_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/debug/messages/sample", get(messages_sample))
        .route("/v1/debug/members", get(member_names))
}

/// A small slice of the raw upstream payload, to inspect the actual JSON
/// structure without pulling the full collection into a response.
async fn messages_sample(
    State(state): State<AppStateArc>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let raw = state.messages.fetch_raw().await.map_err(|e| {
        error!("  Upstream fetch failed: {}", e);
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;

    Ok(Json(truncate_raw(raw)))
}

fn truncate_raw(raw: serde_json::Value) -> serde_json::Value {
    match raw {
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().take(DEBUG_SAMPLE_SIZE).collect())
        }
        serde_json::Value::Object(mut map) => {
            if let Some(serde_json::Value::Array(items)) = map.remove("items") {
                map.insert(
                    "items".to_string(),
                    serde_json::Value::Array(
                        items.into_iter().take(DEBUG_SAMPLE_SIZE).collect(),
                    ),
                );
            }
            serde_json::Value::Object(map)
        }
        other => other,
    }
}

/// Distinct member names and how many messages each has.
async fn member_names(
    State(state): State<AppStateArc>,
) -> Result<Json<MemberCountsResponse>, (StatusCode, String)> {
    let messages = state.messages.fetch_messages().await.map_err(|e| {
        error!("  Upstream fetch failed: {}", e);
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;

    Ok(Json(MemberCountsResponse {
        members: engine::member_message_counts(&messages),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_raw_array() {
        let raw = serde_json::json!([1, 2, 3, 4, 5, 6, 7]);
        let truncated = truncate_raw(raw);
        assert_eq!(truncated, serde_json::json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_truncate_raw_envelope() {
        let raw = serde_json::json!({
            "total": 7,
            "items": [1, 2, 3, 4, 5, 6, 7]
        });
        let truncated = truncate_raw(raw);
        assert_eq!(truncated["total"], 7);
        assert_eq!(truncated["items"], serde_json::json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_truncate_raw_scalar_passthrough() {
        assert_eq!(truncate_raw(serde_json::json!("hi")), serde_json::json!("hi"));
    }
}
