use crate::model::aircraft::AircraftCategory;
use crate::model::waypoint::Waypoint;

/// An immutable flight plan between two waypoints.
///
/// Built once by the planner and handed to the simulator; nothing mutates
/// it after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightPlan {
    departure: Waypoint,
    destination: Waypoint,
    category: AircraftCategory,
    distance_nm: f64,
    estimated_time_minutes: i64,
    cruise_altitude: i32,
    cruise_speed: i32,
    fuel_required: f64,
}

impl FlightPlan {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        departure: Waypoint,
        destination: Waypoint,
        category: AircraftCategory,
        distance_nm: f64,
        estimated_time_minutes: i64,
        cruise_altitude: i32,
        cruise_speed: i32,
        fuel_required: f64,
    ) -> Self {
        FlightPlan {
            departure,
            destination,
            category,
            distance_nm,
            estimated_time_minutes,
            cruise_altitude,
            cruise_speed,
            fuel_required,
        }
    }

    pub fn get_departure(&self) -> &Waypoint {
        &self.departure
    }

    pub fn get_destination(&self) -> &Waypoint {
        &self.destination
    }

    pub fn get_category(&self) -> AircraftCategory {
        self.category
    }

    pub fn get_distance_nm(&self) -> f64 {
        self.distance_nm
    }

    pub fn get_estimated_time_minutes(&self) -> i64 {
        self.estimated_time_minutes
    }

    pub fn get_estimated_time_seconds(&self) -> f64 {
        self.estimated_time_minutes as f64 * 60.0
    }

    pub fn get_cruise_altitude(&self) -> i32 {
        self.cruise_altitude
    }

    pub fn get_cruise_speed(&self) -> i32 {
        self.cruise_speed
    }

    pub fn get_fuel_required(&self) -> f64 {
        self.fuel_required
    }
}
