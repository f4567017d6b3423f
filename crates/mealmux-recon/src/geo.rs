//! Great-circle distance and distance ranking.
//!
//! Distances use the spherical law of cosines, which is accurate to
//! well under the coordinate tolerance at restaurant-delivery scales.

use mealmux_core::{GeoPoint, UnifiedStore};

/// Mean Earth radius in statute miles. All distances in this module
/// are miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.75;

/// Great-circle distance between two points, in miles.
#[must_use]
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lon = (a.longitude - b.longitude).to_radians();

    let cos_angle = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * delta_lon.cos();
    // Rounding can push the cosine a hair past 1.0 for identical or
    // antipodal points, and acos would return NaN.
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_MILES
}

/// Orders stores by ascending distance from `origin`.
///
/// The sort is stable: stores at equal distance keep their input
/// order, so upstream first-seen ordering decides ties.
#[must_use]
pub fn rank(stores: Vec<UnifiedStore>, origin: GeoPoint) -> Vec<UnifiedStore> {
    let mut keyed: Vec<(f64, UnifiedStore)> = stores
        .into_iter()
        .map(|store| (distance_miles(origin, store.location), store))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, store)| store).collect()
}
