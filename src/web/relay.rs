use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ErrorResponse;
use super::server::AppState;

/// Body returned when the upstream itself responds with a failure status.
/// Field names are part of the relay contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpstreamError {
    pub error: String,
    pub status: u16,
    #[serde(rename = "statusText")]
    pub status_text: String,
    pub body: String,
}

/// Body returned when the relay could not reach the upstream at all.
#[derive(Debug, Serialize, ToSchema)]
pub struct RelayFailure {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Deserialize)]
pub struct TreasureQuery {
    pub id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/treasure",
    tag = "relay",
    params(
        ("id" = String, Query, description = "Snapshot id, usually a 2-digit hour")
    ),
    responses(
        (status = 200, description = "Upstream payload, passed through verbatim"),
        (status = 400, description = "Missing id parameter", body = ErrorResponse),
        (status = 500, description = "Relay could not reach the upstream", body = RelayFailure)
    )
)]
pub async fn treasure_query(
    State(state): State<AppState>,
    Query(query): Query<TreasureQuery>,
) -> Response {
    let Some(id) = query.id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing id parameter")),
        )
            .into_response();
    };
    forward(&state, &format!("{}.json", id)).await
}

#[utoipa::path(
    get,
    path = "/treasure/{id}",
    tag = "relay",
    params(
        ("id" = String, Path, description = "Snapshot file name, e.g. 05.json")
    ),
    responses(
        (status = 200, description = "Upstream payload, passed through verbatim"),
        (status = 500, description = "Relay could not reach the upstream", body = RelayFailure)
    )
)]
pub async fn treasure_path(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    forward(&state, &id).await
}

/// Forward one snapshot request upstream. Success bodies pass through
/// verbatim; upstream failure statuses are preserved together with their
/// body instead of being collapsed into a generic 502.
async fn forward(state: &AppState, id: &str) -> Response {
    let url = format!(
        "{}/{}",
        state.config.snapshots.endpoint.trim_end_matches('/'),
        id
    );
    log::info!("Relaying snapshot request to {}", url);

    let response = match state.http.get(&url).send().await {
        Ok(response) => response,
        Err(e) => return relay_failure(e),
    };

    let status = response.status();
    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = response.text().await.unwrap_or_default();
        log::warn!("Upstream returned {} for {}", status, url);
        return (
            StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            Json(UpstreamError {
                error: "Upstream error".to_string(),
                status: status.as_u16(),
                status_text,
                body,
            }),
        )
            .into_response();
    }

    match response.bytes().await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => relay_failure(e),
    }
}

fn relay_failure(e: reqwest::Error) -> Response {
    log::error!("Failed to reach snapshot upstream: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RelayFailure {
            error: "Failed to fetch data".to_string(),
            details: e.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_serializes_the_relay_contract() {
        let value = serde_json::to_value(UpstreamError {
            error: "Upstream error".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
            body: "not here".to_string(),
        })
        .unwrap();

        assert_eq!(value["error"], "Upstream error");
        assert_eq!(value["status"], 404);
        assert_eq!(value["statusText"], "Not Found");
        assert_eq!(value["body"], "not here");
    }

    #[test]
    fn relay_failure_serializes_error_and_details() {
        let value = serde_json::to_value(RelayFailure {
            error: "Failed to fetch data".to_string(),
            details: "connection refused".to_string(),
        })
        .unwrap();

        assert_eq!(value["error"], "Failed to fetch data");
        assert_eq!(value["details"], "connection refused");
    }
}
