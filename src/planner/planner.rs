/*
 * Copyright (c) 2024-2025. Trevor Campbell and others.
 */

use log::info;

use crate::model::aircraft::AircraftCategory;
use crate::model::location::Location;
use crate::model::plan::FlightPlan;
use crate::model::waypoint::Waypoint;

/// Minutes added to every plan for taxi, takeoff, climb, descent and landing.
pub const GROUND_OPS_MINUTES: i64 = 20;

pub struct Planner {
    ground_ops_minutes: i64,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            ground_ops_minutes: GROUND_OPS_MINUTES,
        }
    }

    /// Build a flight plan between two waypoints for the given aircraft
    /// category.
    ///
    /// The estimated duration never falls below the ground operations
    /// allowance, so a plan between coincident waypoints is still flyable.
    pub fn calculate_flight_plan(
        &self,
        departure: Waypoint,
        destination: Waypoint,
        category: AircraftCategory,
    ) -> FlightPlan {
        let distance_nm = departure.get_loc().distance_to(&destination.get_loc());
        let performance = category.performance();

        let cruise_minutes = (distance_nm / performance.get_cruise_speed() as f64 * 60.0) as i64;
        let estimated_time_minutes =
            (cruise_minutes + self.ground_ops_minutes).max(self.ground_ops_minutes);

        let fuel_required = distance_nm * performance.get_fuel_burn_per_nm();

        info!(
            "Planned {} -> {}: {:.0} nm, {} min, {:.0} gal ({})",
            departure.get_name(),
            destination.get_name(),
            distance_nm,
            estimated_time_minutes,
            fuel_required,
            performance.get_name()
        );

        FlightPlan::new(
            departure,
            destination,
            category,
            distance_nm,
            estimated_time_minutes,
            performance.get_cruise_altitude(),
            performance.get_cruise_speed(),
            fuel_required,
        )
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial heading from the plan's departure towards its destination.
pub fn initial_heading(plan: &FlightPlan) -> f64 {
    plan.get_departure()
        .get_loc()
        .bearing_to_deg(&plan.get_destination().get_loc())
}
