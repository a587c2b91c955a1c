use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geo::GeoPosition;

/// Upstream wildfire event feed. Unknown fields are ignored; a missing
/// `events` key is an empty feed, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct EventFeed {
    #[serde(default)]
    pub events: Vec<FeedEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedEvent {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub geometry: Vec<FeedGeometry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedGeometry {
    #[serde(default)]
    pub date: Option<String>,
    /// GeoJSON axis order: longitude first.
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub magnitude_value: Option<f64>,
    #[serde(default)]
    pub magnitude_unit: Option<String>,
}

/// One render-ready fire marker. An event with several geometry entries
/// produces several records sharing its id and title; altitude is always 0
/// (surface events) and the date string passes through unparsed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WildfireRecord {
    pub id: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub alt_km: f64,
    pub size: f64,
}

impl WildfireRecord {
    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.lat_deg, self.lon_deg, self.alt_km)
    }
}
