//! Great-circle distance between coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface, in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Converts degrees to radians.
pub fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Haversine distance between two points in kilometres.
///
/// # Example
/// ```
/// use stopclock::calc::{calculate_distance, Coordinates};
///
/// let seoul = Coordinates::new(37.5665, 126.9780);
/// let busan = Coordinates::new(35.1796, 129.0756);
/// let km = calculate_distance(seoul, busan);
/// assert!((km - 325.0).abs() < 5.0);
/// ```
pub fn calculate_distance(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = radians(from.lat);
    let lat2 = radians(to.lat);
    let delta_lat = lat2 - lat1;
    let delta_lon = radians(to.lon) - radians(from.lon);

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
