//! Geographic points and great-circle distance.
//!
//! Coordinates are WGS84 decimal degrees; distances are meters. The distance
//! implementation is the Haversine formula over a spherical Earth of radius
//! [`EARTH_RADIUS_M`], which is accurate to well under a meter at the scales
//! a hunt operates on (tens to thousands of meters).
use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, as used by the Haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate meters per degree of latitude (and of longitude at the
/// equator). Used to convert planar meter offsets to degree offsets.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        haversine_distance_m(*self, *other)
    }

    /// Whether `other` lies within `threshold_m` meters of this point.
    /// The comparison is inclusive: a point exactly at the threshold passes.
    pub fn is_within_range(&self, other: &GeoPoint, threshold_m: f64) -> bool {
        self.distance_m(other) <= threshold_m
    }
}

/// Haversine great-circle distance between two points, in meters.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}
