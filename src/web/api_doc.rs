use utoipa::OpenApi;

use super::api::{CacheStatus, FiresResponse, SlotStatus, SnapshotResponse};
use super::error::ErrorResponse;
use super::relay::{RelayFailure, UpstreamError};
use crate::geo::{GeoPosition, Point3};
use crate::scene::{FireMarker, Frame};
use crate::wildfire::WildfireRecord;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::frame,
        super::api::snapshot,
        super::api::fires,
        super::api::status,
        super::relay::treasure_query,
        super::relay::treasure_path,
    ),
    components(
        schemas(
            Frame,
            Point3,
            GeoPosition,
            SnapshotResponse,
            CacheStatus,
            SlotStatus,
            FiresResponse,
            FireMarker,
            WildfireRecord,
            UpstreamError,
            RelayFailure,
            ErrorResponse,
        )
    ),
    info(
        title = "Skyglobe API",
        description = "Snapshot relay and interpolated frames for the satellite globe",
        version = "0.1.0"
    ),
    tags(
        (name = "constellation", description = "Cached snapshots and interpolated frames"),
        (name = "wildfires", description = "Normalized wildfire markers"),
        (name = "relay", description = "CORS relay in front of the snapshot upstream")
    )
)]
pub struct ApiDoc;
