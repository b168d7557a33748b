use std::fmt;

use crate::earth::coordinate::Coordinate;
use crate::model::location::Location;

/// The one kind of location the engine needs: a named coordinate with a
/// field elevation in feet.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    name: String,
    loc: Coordinate,
    elevation: i32,
}

impl Waypoint {
    pub fn new(name: &str, latitude: f64, longitude: f64, elevation: i32) -> Self {
        Waypoint {
            name: name.to_string(),
            loc: Coordinate::new(latitude, longitude),
            elevation,
        }
    }
}

impl Location for Waypoint {
    fn get_elevation(&self) -> i32 {
        self.elevation
    }

    fn get_lat(&self) -> f64 {
        self.loc.get_latitude()
    }

    fn get_lat_as_string(&self) -> String {
        self.loc.get_latitude_as_string()
    }

    fn get_long(&self) -> f64 {
        self.loc.get_longitude()
    }

    fn get_long_as_string(&self) -> String {
        self.loc.get_longitude_as_string()
    }

    fn get_loc(&self) -> Coordinate {
        self.loc.clone()
    }

    fn get_name(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.name,
            self.get_lat_as_string(),
            self.get_long_as_string()
        )
    }
}
