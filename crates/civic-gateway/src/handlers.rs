use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use civic_assistant::{AssistantError, GatewayRequest};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::error::GatewayApiError;
use crate::server::GatewayServerState;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    query: String,
}

pub(crate) async fn handle_chat(
    State(state): State<Arc<GatewayServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            return GatewayApiError::from_body_rejection(rejection, state.max_body_bytes)
                .into_response()
        }
    };
    let request: GatewayRequest = match parse_gateway_json_body(&body) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    // A panic inside the assistant surfaces here as a JoinError.
    let assistant = state.assistant.clone();
    let outcome = tokio::spawn(async move { assistant.handle(request).await }).await;
    match outcome {
        Ok(Ok(response)) => (StatusCode::OK, Json(response)).into_response(),
        Ok(Err(AssistantError::EmptyMessage)) => {
            GatewayApiError::bad_request("message_required", "message is required").into_response()
        }
        Err(join_error) => {
            tracing::error!(error = %join_error, "chat handler task failed");
            GatewayApiError::internal("internal server error").into_response()
        }
    }
}

pub(crate) async fn handle_health(State(state): State<Arc<GatewayServerState>>) -> Response {
    let timestamp_unix_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default();
    Json(json!({
        "status": "healthy",
        "ward_count": state.assistant.directory().len(),
        "remote_enabled": state.assistant.remote_enabled(),
        "timestamp_unix_ms": timestamp_unix_ms,
    }))
    .into_response()
}

pub(crate) async fn handle_wards_list(State(state): State<Arc<GatewayServerState>>) -> Response {
    Json(state.assistant.directory().display_records()).into_response()
}

pub(crate) async fn handle_ward_detail(
    State(state): State<Arc<GatewayServerState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(id) = raw_id.parse::<i64>() else {
        return GatewayApiError::bad_request(
            "invalid_ward_id",
            format!("ward id '{raw_id}' is not an integer"),
        )
        .into_response();
    };
    let directory = state.assistant.directory();
    match directory.resolve(id) {
        Some(record) => Json(directory.to_display_record(record)).into_response(),
        None => {
            let range = directory.id_range();
            GatewayApiError::not_found(
                "ward_not_found",
                format!(
                    "ward {id} was not found; valid wards are {}-{}",
                    range.start(),
                    range.end()
                ),
            )
            .into_response()
        }
    }
}

pub(crate) async fn handle_search(
    State(state): State<Arc<GatewayServerState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return GatewayApiError::bad_request("invalid_query", rejection.body_text())
                .into_response()
        }
    };
    let directory = state.assistant.directory();
    let results: Vec<_> = directory
        .search(&params.query)
        .into_iter()
        .map(|record| directory.to_display_record(record))
        .collect();
    Json(json!({
        "query": params.query,
        "count": results.len(),
        "results": results,
    }))
    .into_response()
}

fn parse_gateway_json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, GatewayApiError> {
    serde_json::from_slice::<T>(body).map_err(|error| {
        GatewayApiError::bad_request(
            "malformed_json",
            format!("failed to parse request body: {error}"),
        )
    })
}
