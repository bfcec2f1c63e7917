//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` stores WGS-84 longitude/latitude in `f64`.  GeoJSON positions
//! are `[lon, lat]`, so the field order and [`GeoPoint::from_position`]
//! follow that convention rather than the more common `(lat, lon)`.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Build from a GeoJSON `[lon, lat]` position.
    #[inline]
    pub fn from_position(pos: [f64; 2]) -> Self {
        Self { lon: pos[0], lat: pos[1] }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// Sum of haversine segment lengths along a polyline, in kilometres.
///
/// Fewer than two points yields `0.0`.
pub fn polyline_length_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| w[0].distance_km(w[1]))
        .sum()
}
