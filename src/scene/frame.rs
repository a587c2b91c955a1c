use serde::Serialize;
use utoipa::ToSchema;

use super::hover::hover_label;
use crate::geo::{project, GeoPosition, Point3};
use crate::wildfire::WildfireRecord;

/// Reference sphere radius in scene units.
pub const GLOBE_RADIUS: f64 = 1.0;

/// Projected satellite positions for one cursor value. Ephemeral: assembled
/// fresh per cursor change, never cached.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Frame {
    pub t: f64,
    pub count: usize,
    pub points: Vec<Point3>,
}

impl Frame {
    pub fn assemble(t: f64, positions: &[GeoPosition], radius: f64) -> Self {
        let points: Vec<Point3> = positions.iter().map(|p| project(p, radius)).collect();
        Self {
            t,
            count: points.len(),
            points,
        }
    }
}

/// One-time placement of a wildfire record, with its hover label
/// precomputed for the rendering layer.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FireMarker {
    pub record: WildfireRecord,
    pub position: Point3,
    pub label: String,
}

impl FireMarker {
    pub fn place(record: WildfireRecord, radius: f64) -> Self {
        let position = project(&record.position(), radius);
        let label = hover_label(&record);
        Self {
            record,
            position,
            label,
        }
    }
}

pub fn place_markers(records: Vec<WildfireRecord>, radius: f64) -> Vec<FireMarker> {
    records
        .into_iter()
        .map(|record| FireMarker::place(record, radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_project_every_position() {
        let positions = vec![
            GeoPosition::new(0.0, 0.0, 0.0),
            GeoPosition::new(90.0, 0.0, 0.0),
        ];

        let frame = Frame::assemble(2.5, &positions, GLOBE_RADIUS);

        assert_eq!(frame.t, 2.5);
        assert_eq!(frame.count, 2);
        assert!((frame.points[0].x - 1.0).abs() < 1e-9);
        assert!((frame.points[1].y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn markers_sit_on_the_sphere_surface() {
        let record = WildfireRecord {
            id: "EONET_2".to_string(),
            title: None,
            date: None,
            lat_deg: 45.0,
            lon_deg: 10.0,
            alt_km: 0.0,
            size: 0.1,
        };

        let marker = FireMarker::place(record, GLOBE_RADIUS);

        let len = (marker.position.x.powi(2)
            + marker.position.y.powi(2)
            + marker.position.z.powi(2))
        .sqrt();
        assert!((len - GLOBE_RADIUS).abs() < 1e-9);
        assert_eq!(marker.label, "Wildfire at 45.00°, 10.00°");
    }
}
