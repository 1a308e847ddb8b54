//! Great-circle distance on a spherical Earth.

use crate::constants::EARTH_RADIUS_KM;
use healthassist_types::Coordinate;

/// Haversine distance in kilometres between two coordinates.
///
/// Symmetric and non-negative for finite inputs.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Rounds a distance to one decimal place for display.
pub fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
