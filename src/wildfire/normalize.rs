use super::types::{EventFeed, WildfireRecord};

/// Scale factor applied to log-magnitudes when sizing markers.
pub const MARKER_SIZE_SCALE: f64 = 0.01;
/// Marker size when magnitude is absent, degenerate, or in an unknown unit.
pub const DEFAULT_MARKER_SIZE: f64 = MARKER_SIZE_SCALE * 10.0;

const ACRES: &str = "acres";

/// Flatten the event feed into render-ready records, one per geometry entry.
pub fn normalize(feed: EventFeed) -> Vec<WildfireRecord> {
    feed.events
        .into_iter()
        .flat_map(|event| {
            let id = event.id;
            let title = event.title;
            event.geometry.into_iter().map(move |geometry| {
                let [lon_deg, lat_deg] = geometry.coordinates;
                WildfireRecord {
                    id: id.clone(),
                    title: title.clone(),
                    date: geometry.date,
                    lat_deg,
                    lon_deg,
                    alt_km: 0.0,
                    size: marker_size(
                        geometry.magnitude_value,
                        geometry.magnitude_unit.as_deref(),
                    ),
                }
            })
        })
        .collect()
}

/// Log-scaled size for acres magnitudes. Values at or below one acre, where
/// the logarithm is undefined or non-positive, clamp to the default, so the
/// result is always finite and non-negative. An unrecognized unit is the
/// only case worth reporting; absent magnitude data is normal.
fn marker_size(value: Option<f64>, unit: Option<&str>) -> f64 {
    let Some(unit) = unit else {
        return DEFAULT_MARKER_SIZE;
    };
    if unit != ACRES {
        log::warn!(
            "Unrecognized magnitude unit {:?}, using default marker size",
            unit
        );
        return DEFAULT_MARKER_SIZE;
    }
    match value {
        Some(v) if v > 1.0 => v.ln() * MARKER_SIZE_SCALE,
        _ => DEFAULT_MARKER_SIZE,
    }
}
