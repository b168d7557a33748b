use crate::earth::coordinate::Coordinate;

/// A named point on the Earth that a flight can depart from or arrive at.
///
/// Callers supply anything implementing this; the engine never needs more
/// than a name, a position and a field elevation.
pub trait Location: Clone {
    fn get_elevation(&self) -> i32;
    fn get_lat(&self) -> f64;
    fn get_lat_as_string(&self) -> String;
    fn get_long(&self) -> f64;
    fn get_long_as_string(&self) -> String;
    fn get_loc(&self) -> Coordinate;
    fn get_name(&self) -> String;
}
