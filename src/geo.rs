use serde::Serialize;

/// Kilometers of altitude per scene unit of radial offset. Altitudes are
/// exaggerated so that low orbits sit visibly above the surface.
pub const ALTITUDE_SCALE: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct GeoPosition {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub alt_km: f64,
}

impl GeoPosition {
    pub fn new(lat_deg: f64, lon_deg: f64, alt_km: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_km,
        }
    }

    /// Wire order of the snapshot feed: `[lat, lon, alt]`.
    pub fn from_triple(triple: [f64; 3]) -> Self {
        Self::new(triple[0], triple[1], triple[2])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Project a geodetic position onto a sphere of the given radius.
///
/// Axis convention (fixed, shared by satellites and fire markers): +y pierces
/// the north pole, +x pierces 0°N 0°E, and the azimuth negates longitude, so
/// east longitudes rotate toward -z. Polar angle is measured from the pole
/// (`phi = 90° - lat`) and altitude inflates the radius by `ALTITUDE_SCALE`
/// per kilometer.
///
/// Pure and total: out-of-range latitudes or longitudes still map to a
/// defined point.
pub fn project(position: &GeoPosition, radius: f64) -> Point3 {
    let phi = (90.0 - position.lat_deg).to_radians();
    let theta = (-position.lon_deg).to_radians();
    let r = radius + position.alt_km * ALTITUDE_SCALE;

    Point3 {
        x: r * phi.sin() * theta.cos(),
        y: r * phi.cos(),
        z: r * phi.sin() * theta.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{} vs {}",
            actual,
            expected
        );
    }

    fn length(p: &Point3) -> f64 {
        (p.x * p.x + p.y * p.y + p.z * p.z).sqrt()
    }

    #[test]
    fn null_island_lands_on_unit_x() {
        let p = project(&GeoPosition::new(0.0, 0.0, 0.0), 1.0);
        assert_close(p.x, 1.0);
        assert_close(p.y, 0.0);
        assert_close(p.z, 0.0);
        assert_close(length(&p), 1.0);
    }

    #[test]
    fn poles_land_on_polar_axis() {
        let north = project(&GeoPosition::new(90.0, 0.0, 0.0), 2.0);
        assert_close(north.x, 0.0);
        assert_close(north.y, 2.0);
        assert_close(north.z, 0.0);

        let south = project(&GeoPosition::new(-90.0, 135.0, 0.0), 2.0);
        assert_close(south.y, -2.0);
        assert_close(length(&south), 2.0);
    }

    #[test]
    fn east_longitude_rotates_toward_negative_z() {
        let p = project(&GeoPosition::new(0.0, 90.0, 0.0), 1.0);
        assert_close(p.x, 0.0);
        assert_close(p.z, -1.0);

        let w = project(&GeoPosition::new(0.0, -90.0, 0.0), 1.0);
        assert_close(w.z, 1.0);
    }

    #[test]
    fn altitude_inflates_radius_by_scale() {
        let p = project(&GeoPosition::new(0.0, 0.0, 100.0), 1.0);
        assert_close(length(&p), 1.0 + 100.0 * ALTITUDE_SCALE);
    }

    #[test]
    fn antipodal_longitudes_coincide() {
        let east = project(&GeoPosition::new(10.0, 180.0, 0.0), 1.0);
        let west = project(&GeoPosition::new(10.0, -180.0, 0.0), 1.0);
        assert_close(east.x, west.x);
        assert_close(east.y, west.y);
        assert_close(east.z, west.z);
    }

    #[test]
    fn out_of_range_inputs_still_produce_finite_points() {
        let p = project(&GeoPosition::new(123.0, 500.0, -9000.0), 1.0);
        assert!(p.x.is_finite());
        assert!(p.y.is_finite());
        assert!(p.z.is_finite());
    }

    #[test]
    fn triple_order_is_lat_lon_alt() {
        let pos = GeoPosition::from_triple([10.0, 20.0, 30.0]);
        assert_close(pos.lat_deg, 10.0);
        assert_close(pos.lon_deg, 20.0);
        assert_close(pos.alt_km, 30.0);
    }
}
