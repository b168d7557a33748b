use super::waypoint::Waypoint;

pub fn make_waypoint(name: &str, latitude: f64, longitude: f64) -> Waypoint {
    Waypoint::new(name, latitude, longitude, 0)
}
