use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, ApiResult};
use super::server::AppState;
use crate::constellation::{positions_at, SlotView, HOURS_PER_DAY};
use crate::geo::GeoPosition;
use crate::scene::{place_markers, FireMarker, Frame};
use crate::wildfire::normalize;

#[derive(Debug, Deserialize)]
pub struct FrameQuery {
    pub t: f64,
}

#[utoipa::path(
    get,
    path = "/api/frame",
    tag = "constellation",
    params(
        ("t" = f64, Query, description = "Fractional hour in [0, 23]")
    ),
    responses(
        (status = 200, description = "Interpolated, projected frame", body = Frame),
        (status = 400, description = "Cursor outside the day range")
    )
)]
pub async fn frame(
    State(state): State<AppState>,
    Query(query): Query<FrameQuery>,
) -> ApiResult<impl IntoResponse> {
    let positions = positions_at(&state.constellation, query.t)
        .await
        .ok_or_else(|| ApiError::Validation(format!("time cursor {} outside 0..=23", query.t)))?;

    Ok((
        StatusCode::OK,
        Json(Frame::assemble(query.t, &positions, state.config.globe.radius)),
    ))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SnapshotResponse {
    pub hour: u32,
    pub count: usize,
    pub positions: Vec<GeoPosition>,
}

#[utoipa::path(
    get,
    path = "/api/snapshot/{hour}",
    tag = "constellation",
    params(
        ("hour" = u32, Path, description = "Integer hour of day, 0-23")
    ),
    responses(
        (status = 200, description = "Resolved snapshot for the hour", body = SnapshotResponse),
        (status = 400, description = "Hour outside the day range")
    )
)]
pub async fn snapshot(
    State(state): State<AppState>,
    Path(hour): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    if hour as usize >= HOURS_PER_DAY {
        return Err(ApiError::Validation(format!("hour {} outside 0..=23", hour)));
    }

    let snapshot = state.constellation.snapshot(hour).await;
    Ok((
        StatusCode::OK,
        Json(SnapshotResponse {
            hour: snapshot.hour,
            count: snapshot.positions.len(),
            positions: snapshot.positions.clone(),
        }),
    ))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FiresResponse {
    pub count: usize,
    pub markers: Vec<FireMarker>,
}

#[utoipa::path(
    get,
    path = "/api/fires",
    tag = "wildfires",
    responses(
        (status = 200, description = "Normalized wildfire markers", body = FiresResponse)
    )
)]
pub async fn fires(State(state): State<AppState>) -> impl IntoResponse {
    // Fetched and normalized once per session; a failed feed serves an
    // empty marker list for the rest of the session rather than an error.
    let markers = state
        .fires
        .get_or_init(|| async {
            let feed = match state.wildfires.fetch_events().await {
                Ok(feed) => feed,
                Err(e) => {
                    log::warn!("Wildfire feed failed, serving no markers: {}", e);
                    return Arc::new(Vec::new());
                }
            };
            Arc::new(place_markers(normalize(feed), state.config.globe.radius))
        })
        .await;

    Json(FiresResponse {
        count: markers.len(),
        markers: markers.as_ref().clone(),
    })
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CacheStatus {
    pub hours: Vec<SlotStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotStatus {
    pub hour: u32,
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "constellation",
    responses(
        (status = 200, description = "Per-hour cache slot states", body = CacheStatus)
    )
)]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let hours = (0..HOURS_PER_DAY as u32)
        .map(|hour| match state.constellation.peek(hour) {
            SlotView::Idle => SlotStatus {
                hour,
                state: "idle",
                count: None,
            },
            SlotView::Loading => SlotStatus {
                hour,
                state: "loading",
                count: None,
            },
            SlotView::Ready(snapshot) => SlotStatus {
                hour,
                state: "ready",
                count: Some(snapshot.positions.len()),
            },
        })
        .collect();

    Json(CacheStatus { hours })
}
