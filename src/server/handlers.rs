// src/server/handlers.rs
//! Request handlers for the cookbook server

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cookbook::Entry;
use crate::error::Error;
use crate::name::normalize;
use crate::resolver::summarize;
use crate::server::SharedStore;

/// Request body for name normalization
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw freeform name
    pub input: String,
}

/// Response for successful normalization
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    /// Canonical display name
    pub msg: String,
}

/// Query parameters for summary lookups
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: String,
}

/// Normalize a raw entry name
///
/// POST /parse
pub async fn parse_name(Json(request): Json<ParseRequest>) -> Response {
    match normalize(&request.input) {
        Ok(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Register a cookbook entry
///
/// POST /entry
pub async fn create_entry(
    State(store): State<SharedStore>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    let entry = match parse_entry(payload) {
        Ok(entry) => entry,
        Err(rejection) => return rejection,
    };

    info!("Entry registration request: '{}'", entry.name());

    let mut store = store.write().await;
    match store.register_entry(entry) {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({}))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Resolve a name into its flattened summary
///
/// GET /summary?name=NAME
pub async fn get_summary(
    State(store): State<SharedStore>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let store = store.read().await;
    match summarize(&store, &query.name) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Decode a registration payload, surfacing an unrecognized `type`
/// discriminator as its own error kind rather than a generic parse failure.
fn parse_entry(payload: serde_json::Value) -> Result<Entry, Response> {
    let kind = payload.get("type").and_then(|v| v.as_str()).unwrap_or("");
    if kind != "ingredient" && kind != "recipe" {
        return Err(error_response(Error::InvalidEntryType(kind.to_string())));
    }

    serde_json::from_value(payload).map_err(|e| {
        let body = serde_json::json!({
            "error": "bad_request",
            "message": format!("malformed entry payload: {}", e),
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    })
}

/// Map a core error onto its wire representation
fn error_response(error: Error) -> Response {
    let status = match error {
        Error::DuplicateName(_) => StatusCode::CONFLICT,
        Error::EntryNotFound(_) => StatusCode::NOT_FOUND,
        Error::MissingRequiredItem(_) | Error::CyclicReference(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::BAD_REQUEST,
    };

    let body = serde_json::json!({
        "error": error.kind(),
        "message": error.to_string(),
    });
    (status, Json(body)).into_response()
}
