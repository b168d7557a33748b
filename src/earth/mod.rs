pub mod coordinate;

/// Mean Earth radius used for all great circle arithmetic, in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.0;

pub const NM_PER_DEGREE: f64 = 60.0;
