/*
 * Copyright (c) 2024-2025. Trevor Campbell and others.
 */

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::earth::NM_PER_DEGREE;
use crate::earth::coordinate::Coordinate;
use crate::model::location::Location;
use crate::model::plan::FlightPlan;
use crate::planner::planner::initial_heading;
use crate::sim::alerts::AlertLog;
use crate::sim::phase::FlightPhase;
use crate::sim::status::{
    ENGINE_TEMP_FALLBACK, PerformanceStatus, PerformanceSummary, StatusSnapshot, WeatherStatus,
    sanitize_as_i32, sanitize_f64,
};
use crate::sim::weather::WeatherReport;

// Drift tuning. Autopilot damps drift and wind but never cancels them.
const MANUAL_DRIFT_MULTIPLIER: f64 = 0.5;
const AUTOPILOT_DRIFT_MULTIPLIER: f64 = 0.3;
const MANUAL_WIND_COEFFICIENT: f64 = 0.02;
const AUTOPILOT_WIND_COEFFICIENT: f64 = 0.01;

// Degrees off target before the flight is counted off course / critical.
const MANUAL_WARNING_DEVIATION: f64 = 20.0;
const MANUAL_CRITICAL_DEVIATION: f64 = 45.0;
const AUTOPILOT_WARNING_DEVIATION: f64 = 30.0;
const AUTOPILOT_CRITICAL_DEVIATION: f64 = 60.0;

const OFF_COURSE_NM_PER_SEC: f64 = 0.03;
const FUEL_BURN_PERCENT_PER_SEC: f64 = 0.02;

// Autopilot heading loop: ignore errors inside the deadband, correct at a
// bounded rate towards zero.
const HEADING_DEADBAND: f64 = 0.2;
const HEADING_CORRECTION_RATE: f64 = 1.5;

// Autopilot engine management.
const AUTOPILOT_TARGET_TEMP: f64 = 200.0;
const SPEED_RAMP_RATE: f64 = 10.0;

// Engine temperature model.
const TEMP_FLOOR: f64 = 160.0;
const TEMP_CEILING: f64 = 250.0;
const TEMP_LAG_FRACTION: f64 = 0.1;
const TEMP_HIGH_THRESHOLD: f64 = 230.0;
const TEMP_CRITICAL_THRESHOLD: f64 = 240.0;

const LOW_FUEL_THRESHOLD: f64 = 20.0;
const FUEL_EMERGENCY_THRESHOLD: f64 = 5.0;

const WEATHER_CHANGE_PROBABILITY: f64 = 0.001;

/// The flight simulation engine.
///
/// Single threaded and tick driven: the owner calls `update(dt)` once per
/// frame (scaling `dt` for accelerated play) and issues commands between
/// ticks. At most one flight is active per instance.
pub struct FlightSimulator {
    current_flight: Option<FlightPlan>,
    flight_phase: FlightPhase,
    is_flying: bool,
    started_at: Option<DateTime<Utc>>,
    elapsed_time: f64,

    // Aircraft state
    altitude: f64,
    airspeed: f64,
    heading: f64,
    target_heading: f64,
    engine_temp: f64,
    fuel_remaining: f64,
    autopilot_enabled: bool,

    // Position tracking
    current_lat: f64,
    current_lng: f64,
    progress_percent: f64,

    // Drift mechanics
    drift_rate: f64,
    off_course_distance: f64,

    weather: WeatherReport,

    emergency_state: bool,
    course_deviations: u32,
    alerts: AlertLog,
    fuel_efficiency: f64,

    rng: StdRng,
}

impl FlightSimulator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let weather = WeatherReport::generate(&mut rng, 0.0);
        FlightSimulator {
            current_flight: None,
            flight_phase: FlightPhase::Preflight,
            is_flying: false,
            started_at: None,
            elapsed_time: 0.0,
            altitude: 0.0,
            airspeed: 0.0,
            heading: 0.0,
            target_heading: 0.0,
            engine_temp: ENGINE_TEMP_FALLBACK as f64,
            fuel_remaining: 100.0,
            autopilot_enabled: false,
            current_lat: 0.0,
            current_lng: 0.0,
            progress_percent: 0.0,
            drift_rate: 0.0,
            off_course_distance: 0.0,
            weather,
            emergency_state: false,
            course_deviations: 0,
            alerts: AlertLog::new(),
            fuel_efficiency: 100.0,
            rng,
        }
    }

    pub fn is_flying(&self) -> bool {
        self.is_flying
    }

    /// Wall clock time the current flight was started, for bookkeeping.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Begin a flight. Refused (returning false, touching nothing) while
    /// another flight is active.
    pub fn start_flight(&mut self, plan: FlightPlan) -> bool {
        if self.is_flying {
            warn!("start_flight refused: a flight is already active");
            return false;
        }

        let heading = initial_heading(&plan);
        let performance = plan.get_category().performance();
        let started = Utc::now();

        self.flight_phase = FlightPhase::Preflight;
        self.is_flying = true;
        self.started_at = Some(started);
        self.elapsed_time = 0.0;

        self.altitude = plan.get_departure().get_elevation() as f64;
        self.airspeed = 0.0;
        self.heading = heading;
        self.target_heading = heading;
        self.engine_temp = ENGINE_TEMP_FALLBACK as f64;
        self.fuel_remaining = 100.0;

        self.current_lat = plan.get_departure().get_lat();
        self.current_lng = plan.get_departure().get_long();
        self.progress_percent = 0.0;

        self.drift_rate = self.rng.gen_range(0.1..0.3) * performance.get_drift_sensitivity();
        self.weather = WeatherReport::generate(&mut self.rng, heading);

        self.alerts.clear();
        self.emergency_state = false;
        self.course_deviations = 0;
        self.off_course_distance = 0.0;
        self.fuel_efficiency = 100.0;

        info!(
            "Flight started {} -> {} at {}",
            plan.get_departure().get_name(),
            plan.get_destination().get_name(),
            started.to_rfc3339()
        );
        self.current_flight = Some(plan);
        true
    }

    /// Advance the simulation by `dt` seconds and return a fresh snapshot.
    ///
    /// Sub-steps always run in the same order: phase, kinematics, drift,
    /// autopilot, position, systems, weather. A no-op once the flight has
    /// completed or ended.
    pub fn update(&mut self, dt: f64) -> StatusSnapshot {
        if !self.is_flying || self.current_flight.is_none() {
            return self.get_status();
        }
        if !dt.is_finite() || dt <= 0.0 {
            return self.get_status();
        }

        self.elapsed_time += dt;

        self.advance_phase();
        self.update_aircraft_state(dt);
        self.apply_drift(dt);
        self.apply_autopilot(dt);
        self.update_position(dt);
        self.check_systems();
        self.update_weather();

        self.get_status()
    }

    /// Player steering input. Non-finite input is discarded before it can
    /// poison the heading.
    pub fn apply_course_correction(&mut self, delta_degrees: f64) {
        if !delta_degrees.is_finite() {
            warn!("Ignoring non-finite course correction");
            return;
        }
        self.heading = (self.heading + delta_degrees).rem_euclid(360.0);
        debug!(
            "Course correction {:+.1} deg, heading now {:.1}",
            delta_degrees, self.heading
        );
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.autopilot_enabled != enabled {
            info!("Autopilot {}", if enabled { "engaged" } else { "disengaged" });
        }
        self.autopilot_enabled = enabled;
    }

    /// End the flight and return the debrief, or `None` when no flight was
    /// active.
    pub fn end_flight(&mut self) -> Option<PerformanceSummary> {
        self.current_flight.take()?;

        let summary = PerformanceSummary {
            completed: self.flight_phase == FlightPhase::Completed,
            flight_time: sanitize_f64(self.elapsed_time, 0.0),
            course_deviations: self.course_deviations,
            system_alerts: self.alerts.raised(),
            fuel_efficiency: sanitize_f64(self.fuel_efficiency, 100.0),
            emergency_landing: self.emergency_state,
            final_progress: sanitize_f64(self.progress_percent, 0.0),
        };

        self.is_flying = false;
        info!(
            "Flight ended: completed={} time={:.0}s deviations={} alerts={}",
            summary.completed, summary.flight_time, summary.course_deviations, summary.system_alerts
        );
        Some(summary)
    }

    /// Estimated seconds to arrival, extrapolated from progress so far.
    pub fn eta_seconds(&self) -> Option<f64> {
        if !self.is_flying || self.progress_percent <= 0.1 {
            return None;
        }
        let remaining =
            self.elapsed_time * (100.0 - self.progress_percent) / self.progress_percent;
        if remaining.is_finite() {
            Some(remaining.max(0.0))
        } else {
            None
        }
    }

    /// Current state as a defensive, sanitized copy. Identical values are
    /// returned until the next `update` or command.
    pub fn get_status(&self) -> StatusSnapshot {
        StatusSnapshot {
            is_flying: self.is_flying,
            flight_phase: self.flight_phase.name(),
            elapsed_time: sanitize_f64(self.elapsed_time, 0.0),
            progress_percent: sanitize_f64(self.progress_percent, 0.0),
            altitude: sanitize_as_i32(self.altitude, 0),
            airspeed: sanitize_as_i32(self.airspeed, 0),
            heading: sanitize_as_i32(self.heading, 0),
            target_heading: sanitize_as_i32(self.target_heading, 0),
            engine_temp: sanitize_as_i32(self.engine_temp, ENGINE_TEMP_FALLBACK),
            fuel_remaining: sanitize_f64(self.fuel_remaining, 0.0).clamp(0.0, 100.0),
            off_course_distance: sanitize_f64(self.off_course_distance, 0.0),
            system_alerts: self.alerts.entries().to_vec(),
            emergency_state: self.emergency_state,
            weather: WeatherStatus {
                condition: self.weather.get_condition().name(),
                wind_direction: self.weather.get_wind_direction(),
                wind_speed: self.weather.get_wind_speed(),
                visibility: self.weather.get_visibility(),
            },
            performance: PerformanceStatus {
                course_deviations: self.course_deviations,
                alerts_count: self.alerts.raised(),
                fuel_efficiency: sanitize_f64(self.fuel_efficiency, 100.0),
            },
        }
    }

    fn advance_phase(&mut self) {
        let Some(plan) = self.current_flight.as_ref() else {
            return;
        };
        let total = plan.get_estimated_time_seconds();
        let next = FlightPhase::for_elapsed(self.elapsed_time, total);
        if next != self.flight_phase {
            info!("Flight phase {} -> {}", self.flight_phase.name(), next.name());
            self.flight_phase = next;
            if next == FlightPhase::Completed {
                self.is_flying = false;
                info!("Flight completed after {:.0} s", self.elapsed_time);
            }
        }
    }

    /// Drive airspeed and altitude towards the phase targets and burn fuel.
    fn update_aircraft_state(&mut self, dt: f64) {
        let Some(plan) = self.current_flight.as_ref() else {
            return;
        };
        let cruise_altitude = plan.get_cruise_altitude() as f64;
        let cruise_speed = plan.get_cruise_speed() as f64;
        let destination_elevation = plan.get_destination().get_elevation() as f64;

        match self.flight_phase {
            FlightPhase::Taxi => {
                self.airspeed = 15.0;
            }
            FlightPhase::Takeoff => {
                self.airspeed = 65.0;
                self.altitude += 500.0 * dt;
            }
            FlightPhase::Climb => {
                self.airspeed = 90.0;
                if self.altitude < cruise_altitude {
                    self.altitude += 300.0 * dt;
                }
            }
            FlightPhase::Cruise => {
                self.airspeed = cruise_speed;
            }
            FlightPhase::Descent => {
                self.airspeed = 120.0;
                self.altitude -= 400.0 * dt;
            }
            FlightPhase::Approach => {
                self.airspeed = 80.0;
                self.altitude -= 200.0 * dt;
            }
            FlightPhase::Landing => {
                self.airspeed = 60.0;
                if self.altitude > destination_elevation {
                    self.altitude -= 100.0 * dt;
                }
            }
            FlightPhase::Preflight | FlightPhase::TaxiToGate | FlightPhase::Completed => {}
        }

        if self.flight_phase.burns_fuel() {
            self.fuel_remaining =
                (self.fuel_remaining - FUEL_BURN_PERCENT_PER_SEC * dt).max(0.0);
        }
    }

    /// The drift mechanic: the heading creeps away from the target and the
    /// pilot (or autopilot) has to keep correcting.
    fn apply_drift(&mut self, dt: f64) {
        if !self.flight_phase.drift_applies() {
            return;
        }

        let drift_multiplier = if self.autopilot_enabled {
            AUTOPILOT_DRIFT_MULTIPLIER
        } else {
            MANUAL_DRIFT_MULTIPLIER
        };
        let effective_rate = self.drift_rate * self.weather.get_condition().drift_multiplier();
        let base_drift = effective_rate * dt * drift_multiplier;

        let wind_coefficient = if self.autopilot_enabled {
            AUTOPILOT_WIND_COEFFICIENT
        } else {
            MANUAL_WIND_COEFFICIENT
        };
        let crosswind = sanitize_f64(self.weather.get_crosswind_component(), 0.0);
        let wind_effect = crosswind * wind_coefficient * dt;

        let total_drift = base_drift + wind_effect;
        if total_drift.is_finite() {
            self.heading = (self.heading + total_drift).rem_euclid(360.0);
        }

        let deviation = angular_deviation(self.heading, self.target_heading);
        let (warning, critical) = if self.autopilot_enabled {
            (AUTOPILOT_WARNING_DEVIATION, AUTOPILOT_CRITICAL_DEVIATION)
        } else {
            (MANUAL_WARNING_DEVIATION, MANUAL_CRITICAL_DEVIATION)
        };

        if deviation > warning {
            self.off_course_distance += OFF_COURSE_NM_PER_SEC * dt;
            if deviation > critical {
                self.course_deviations += 1;
                if self.alerts.deviation_alert_due(self.elapsed_time) {
                    if !self.autopilot_enabled {
                        self.alerts.push("Course deviation warning");
                    } else if deviation > 90.0 {
                        // The autopilot is struggling badly; worth a call-out
                        self.alerts.push("Autopilot course correction");
                    }
                    self.alerts.mark_deviation_alert(self.elapsed_time);
                }
            }
        }
    }

    /// Heading hold plus engine temperature management through airspeed.
    fn apply_autopilot(&mut self, dt: f64) {
        if !self.autopilot_enabled {
            return;
        }
        let Some(plan) = self.current_flight.as_ref() else {
            return;
        };
        let cruise_speed = plan.get_cruise_speed() as f64;

        if self.flight_phase.is_controllable() {
            let error = signed_heading_error(self.heading, self.target_heading);
            if error.abs() > HEADING_DEADBAND {
                let max_correction = HEADING_CORRECTION_RATE * dt;
                let correction = error.clamp(-max_correction, max_correction);
                self.heading = (self.heading + correction).rem_euclid(360.0);
            }
        }

        let temp_error = self.engine_temp - AUTOPILOT_TARGET_TEMP;
        let base_speed = match self.flight_phase {
            FlightPhase::Cruise => cruise_speed,
            FlightPhase::Climb => 90.0,
            FlightPhase::Descent => 120.0,
            FlightPhase::Approach => 80.0,
            _ => self.airspeed,
        };

        let target_speed = if temp_error > 20.0 {
            self.alerts
                .push_unique_within("Autopilot reducing speed for cooling", 5);
            base_speed * 0.85
        } else if temp_error > 10.0 {
            base_speed * 0.92
        } else if temp_error < -15.0 {
            base_speed * 1.05
        } else {
            base_speed
        };

        let speed_error = target_speed - self.airspeed;
        if speed_error.abs() > 1.0 {
            let max_change = SPEED_RAMP_RATE * dt;
            let new_speed = self.airspeed + speed_error.clamp(-max_change, max_change);
            self.airspeed = match self.flight_phase {
                FlightPhase::Cruise => new_speed.clamp(80.0, cruise_speed * 1.1),
                FlightPhase::Climb => new_speed.clamp(70.0, 120.0),
                FlightPhase::Descent => new_speed.clamp(90.0, 150.0),
                FlightPhase::Approach => new_speed.clamp(65.0, 100.0),
                _ => new_speed,
            };
        }
    }

    /// Project the position along the current heading and refresh progress.
    /// Flat earth is good enough at game fidelity.
    fn update_position(&mut self, dt: f64) {
        let Some(plan) = self.current_flight.as_ref() else {
            return;
        };
        let total_distance = plan.get_distance_nm();
        let departure_loc = plan.get_departure().get_loc();

        let distance = self.airspeed / 3600.0 * dt;
        let heading_rad = self.heading.to_radians();

        let lat_change = distance * heading_rad.cos() / NM_PER_DEGREE;
        let lng_change = distance * heading_rad.sin()
            / (NM_PER_DEGREE * self.current_lat.to_radians().cos());
        if lat_change.is_finite() {
            self.current_lat += lat_change;
        }
        if lng_change.is_finite() {
            self.current_lng += lng_change;
        }

        let flown =
            departure_loc.distance_to(&Coordinate::new(self.current_lat, self.current_lng));
        let ratio = flown / total_distance;
        if ratio.is_finite() {
            self.progress_percent = (ratio * 100.0).min(100.0);
        }
    }

    /// Engine temperature model and the threshold alerts for temperature
    /// and fuel.
    fn check_systems(&mut self) {
        let target_base = if matches!(self.flight_phase, FlightPhase::Takeoff | FlightPhase::Climb)
        {
            200.0
        } else {
            180.0
        };

        let target_temp = match self.current_flight.as_ref() {
            Some(plan) => {
                let speed_factor = self.airspeed / plan.get_cruise_speed() as f64;
                target_base + (speed_factor - 1.0) * 40.0
            }
            None => target_base,
        };

        let temp_change = (target_temp - self.engine_temp) * TEMP_LAG_FRACTION
            + self.rng.gen_range(-0.5..0.5);
        if temp_change.is_finite() {
            self.engine_temp = (self.engine_temp + temp_change).clamp(TEMP_FLOOR, TEMP_CEILING);
        }

        if self.engine_temp > TEMP_CRITICAL_THRESHOLD {
            self.alerts.push_unique("ENGINE OVERHEATING");
        } else if self.engine_temp > TEMP_HIGH_THRESHOLD {
            self.alerts.push_unique("Engine temperature high");
        }

        if self.fuel_remaining < LOW_FUEL_THRESHOLD {
            self.alerts.push_unique("Low fuel warning");
        }
        if self.fuel_remaining < FUEL_EMERGENCY_THRESHOLD {
            if !self.emergency_state {
                warn!("Fuel emergency declared at {:.1}%", self.fuel_remaining);
            }
            self.emergency_state = true;
            self.alerts.push_unique("FUEL EMERGENCY");
        }

        let fuel_used = 100.0 - self.fuel_remaining;
        if fuel_used > 0.0 {
            let efficiency = self.progress_percent / fuel_used * 100.0;
            if efficiency.is_finite() {
                self.fuel_efficiency = efficiency.clamp(0.0, 200.0);
            }
        }
    }

    /// Occasionally replace the weather wholesale. The baseline drift rate
    /// is untouched; conditions scale it where it is consumed.
    fn update_weather(&mut self) {
        if self.rng.gen_range(0.0..1.0) < WEATHER_CHANGE_PROBABILITY {
            self.weather = WeatherReport::generate(&mut self.rng, self.heading);
            debug!("Weather now {}", self.weather.get_condition().name());
        }
    }
}

impl Default for FlightSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest angular distance between two headings, in [0, 180].
fn angular_deviation(current: f64, target: f64) -> f64 {
    let mut error = (current - target).abs() % 360.0;
    if error > 180.0 {
        error = 360.0 - error;
    }
    error
}

/// Signed shortest-way error from `current` to `target`, in [-180, 180].
fn signed_heading_error(current: f64, target: f64) -> f64 {
    let mut error = target - current;
    if error > 180.0 {
        error -= 360.0;
    } else if error < -180.0 {
        error += 360.0;
    }
    error
}

#[cfg(test)]
mod tests {
    use crate::model::aircraft::AircraftCategory;
    use crate::model::plan::FlightPlan;
    use crate::model::waypoint::Waypoint;
    use crate::planner::planner::Planner;
    use crate::sim::phase::FlightPhase;
    use crate::sim::weather::WeatherCondition;

    use super::{angular_deviation, signed_heading_error, FlightSimulator};

    fn nyc() -> Waypoint {
        Waypoint::new("NYC", 40.7589, -73.9851, 30)
    }

    fn lax() -> Waypoint {
        Waypoint::new("LAX", 34.0522, -118.2437, 125)
    }

    fn make_plan() -> FlightPlan {
        Planner::new().calculate_flight_plan(nyc(), lax(), AircraftCategory::SingleEngineProp)
    }

    fn started_sim() -> FlightSimulator {
        let mut sim = FlightSimulator::with_seed(7);
        assert!(sim.start_flight(make_plan()));
        sim
    }

    /// Put the simulator in the middle of the cruise window.
    fn cruising_sim() -> FlightSimulator {
        let mut sim = started_sim();
        sim.elapsed_time = make_plan().get_estimated_time_seconds() / 2.0;
        sim.advance_phase();
        assert_eq!(sim.flight_phase, FlightPhase::Cruise);
        sim
    }

    #[test]
    fn test_initial_state() {
        let sim = FlightSimulator::with_seed(1);
        assert!(!sim.is_flying());
        assert_eq!(sim.flight_phase, FlightPhase::Preflight);
        assert!(sim.current_flight.is_none());
        let status = sim.get_status();
        assert!(!status.is_flying);
        assert_eq!(status.flight_phase, "preflight");
        assert_eq!(status.airspeed, 0);
        assert_eq!(status.fuel_remaining, 100.0);
    }

    #[test]
    fn test_start_flight() {
        let sim = started_sim();
        assert!(sim.is_flying());
        assert_eq!(sim.flight_phase, FlightPhase::Preflight);
        assert!(sim.started_at.is_some());
        assert_eq!(sim.fuel_remaining, 100.0);
        assert!((0.0..360.0).contains(&sim.heading));
        assert_eq!(sim.heading, sim.target_heading);
        assert_eq!(sim.current_lat, 40.7589);
        assert_eq!(sim.current_lng, -73.9851);
        assert!(sim.drift_rate >= 0.1 && sim.drift_rate <= 0.3);
    }

    #[test]
    fn test_no_double_start() {
        let mut sim = started_sim();
        sim.update(30.0);
        let before = sim.get_status();
        assert!(!sim.start_flight(make_plan()));
        assert_eq!(sim.get_status(), before);
    }

    #[test]
    fn test_update_while_not_flying_is_a_noop() {
        let mut sim = FlightSimulator::with_seed(3);
        let status = sim.update(60.0);
        assert!(!status.is_flying);
        assert_eq!(status.elapsed_time, 0.0);
    }

    #[test]
    fn test_update_rejects_bad_dt() {
        let mut sim = started_sim();
        sim.update(f64::NAN);
        sim.update(f64::INFINITY);
        sim.update(-5.0);
        assert_eq!(sim.elapsed_time, 0.0);
    }

    #[test]
    fn test_phase_progression() {
        let mut sim = started_sim();
        assert_eq!(sim.update(100.0).flight_phase, "taxi");
        assert_eq!(sim.update(150.0).flight_phase, "takeoff");
        assert_eq!(sim.update(350.0).flight_phase, "climb");

        let total = make_plan().get_estimated_time_seconds();
        sim.elapsed_time = total / 2.0;
        assert_eq!(sim.update(1.0).flight_phase, "cruise");
        sim.elapsed_time = total - 600.0;
        assert_eq!(sim.update(1.0).flight_phase, "descent");
        sim.elapsed_time = total - 200.0;
        assert_eq!(sim.update(1.0).flight_phase, "approach");
        sim.elapsed_time = total - 50.0;
        assert_eq!(sim.update(1.0).flight_phase, "landing");
        sim.elapsed_time = total;
        let status = sim.update(1.0);
        assert_eq!(status.flight_phase, "completed");
        assert!(!status.is_flying);
    }

    #[test]
    fn test_phase_never_regresses() {
        let mut sim = started_sim();
        let mut last = FlightPhase::Preflight;
        for _ in 0..3000 {
            sim.update(30.0);
            assert!(sim.flight_phase >= last);
            last = sim.flight_phase;
            if last == FlightPhase::Completed {
                break;
            }
        }
        assert_eq!(last, FlightPhase::Completed);
    }

    #[test]
    fn test_completed_is_absorbing() {
        let mut sim = started_sim();
        sim.elapsed_time = make_plan().get_estimated_time_seconds() + 1.0;
        sim.update(1.0);
        assert_eq!(sim.flight_phase, FlightPhase::Completed);
        assert!(!sim.is_flying());

        let snap1 = sim.get_status();
        let snap2 = sim.update(60.0);
        assert_eq!(snap1, snap2);
    }

    #[test]
    fn test_taxi_burns_no_fuel() {
        let mut sim = started_sim();
        sim.update(100.0); // still taxiing
        assert_eq!(sim.fuel_remaining, 100.0);
    }

    #[test]
    fn test_fuel_burns_when_airborne_and_never_goes_negative() {
        let mut sim = cruising_sim();
        sim.update(60.0);
        assert!(sim.fuel_remaining < 100.0);

        sim.fuel_remaining = 0.01;
        sim.update(60.0);
        assert!(sim.fuel_remaining >= 0.0);
    }

    #[test]
    fn test_no_drift_during_taxi() {
        let mut sim = started_sim();
        let heading = sim.heading;
        sim.update(10.0); // inside the taxi window
        assert_eq!(sim.heading, heading);
    }

    #[test]
    fn test_drift_moves_heading_in_cruise() {
        let mut sim = cruising_sim();
        sim.drift_rate = 0.2;
        sim.weather = sim.weather.clone().with_crosswind(5.0);
        let heading = sim.heading;
        sim.apply_drift(1.0);
        assert_ne!(sim.heading, heading);
        assert!((0.0..360.0).contains(&sim.heading));
    }

    #[test]
    fn test_drift_survives_nan_crosswind() {
        let mut sim = cruising_sim();
        sim.weather = sim.weather.clone().with_crosswind(f64::NAN);
        sim.apply_drift(1.0);
        assert!(sim.heading.is_finite());
        assert!((0.0..360.0).contains(&sim.heading));
    }

    #[test]
    fn test_autopilot_does_not_worsen_drift() {
        let mut manual = cruising_sim();
        let mut auto = cruising_sim();
        auto.set_autopilot(true);

        for _ in 0..10 {
            manual.apply_drift(1.0);
            auto.apply_drift(1.0);
        }
        let manual_dev = angular_deviation(manual.heading, manual.target_heading);
        let auto_dev = angular_deviation(auto.heading, auto.target_heading);
        assert!(auto_dev <= manual_dev + 5.0);
    }

    #[test]
    fn test_course_deviation_alert_and_rate_limit() {
        let mut sim = cruising_sim();
        sim.target_heading = 0.0;
        sim.heading = 50.0;
        sim.weather = sim.weather.clone().with_crosswind(0.0);

        sim.apply_drift(1.0);
        assert_eq!(sim.course_deviations, 1);
        assert_eq!(
            sim.alerts.entries().last().unwrap(),
            "Course deviation warning"
        );
        let alerts_before = sim.alerts.entries().len();

        // Within the rate limit window nothing new is appended
        sim.apply_drift(1.0);
        assert_eq!(sim.alerts.entries().len(), alerts_before);
        assert_eq!(sim.course_deviations, 2);

        // After the window the alert fires again
        sim.elapsed_time += 11.0;
        sim.heading = 50.0;
        sim.apply_drift(1.0);
        assert_eq!(sim.alerts.entries().len(), alerts_before + 1);
    }

    #[test]
    fn test_autopilot_deviation_wording() {
        let mut sim = cruising_sim();
        sim.set_autopilot(true);
        sim.target_heading = 0.0;
        sim.weather = sim.weather.clone().with_crosswind(0.0);

        // Critical but under 90 degrees: counted, not announced
        sim.heading = 70.0;
        sim.apply_drift(1.0);
        assert_eq!(sim.course_deviations, 1);
        assert!(sim.alerts.entries().is_empty());

        // Past 90 degrees the autopilot owns up to it
        sim.elapsed_time += 11.0;
        sim.heading = 95.0;
        sim.apply_drift(1.0);
        assert_eq!(
            sim.alerts.entries().last().unwrap(),
            "Autopilot course correction"
        );
    }

    #[test]
    fn test_off_course_distance_accumulates() {
        let mut sim = cruising_sim();
        sim.target_heading = 0.0;
        sim.heading = 25.0; // beyond the manual warning threshold
        sim.weather = sim.weather.clone().with_crosswind(0.0);
        sim.apply_drift(1.0);
        assert!(sim.off_course_distance > 0.0);
    }

    #[test]
    fn test_position_update_moves_east() {
        let mut sim = started_sim();
        sim.airspeed = 120.0;
        sim.heading = 90.0;
        let lat = sim.current_lat;
        let lng = sim.current_lng;

        sim.update_position(3600.0); // one hour at 120 kn

        assert!((sim.current_lat - lat).abs() < 0.2);
        assert!(sim.current_lng > lng + 1.0);
        assert!(sim.progress_percent >= 0.0);
        assert!(sim.progress_percent <= 100.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut sim = started_sim();
        sim.current_lat = 34.0522;
        sim.current_lng = -118.2437;
        sim.airspeed = 120.0;
        sim.update_position(3600.0);
        assert!(sim.progress_percent <= 100.0);
    }

    #[test]
    fn test_engine_temp_stays_in_range() {
        let mut sim = cruising_sim();
        for _ in 0..500 {
            sim.check_systems();
            assert!(sim.engine_temp >= 160.0);
            assert!(sim.engine_temp <= 250.0);
        }
    }

    #[test]
    fn test_temperature_alerts() {
        let mut sim = cruising_sim();
        sim.engine_temp = 239.0;
        sim.airspeed = 300.0; // keep the target temperature high
        sim.check_systems();
        let alerts = sim.alerts.entries().join(" ");
        assert!(alerts.contains("temperature") || alerts.contains("OVERHEATING"));
    }

    #[test]
    fn test_overheat_alert_takes_precedence() {
        let mut sim = cruising_sim();
        sim.engine_temp = 249.0;
        sim.airspeed = 600.0; // target temperature far above the ceiling
        sim.check_systems();
        assert_eq!(sim.alerts.entries().last().unwrap(), "ENGINE OVERHEATING");
    }

    #[test]
    fn test_low_fuel_warning() {
        let mut sim = cruising_sim();
        sim.fuel_remaining = 15.0;
        sim.check_systems();
        assert!(sim
            .alerts
            .entries()
            .iter()
            .any(|a| a == "Low fuel warning"));
        assert!(!sim.emergency_state);
    }

    #[test]
    fn test_fuel_emergency_fires_exactly_once() {
        let mut sim = cruising_sim();
        sim.fuel_remaining = 3.0;
        sim.update(1.0);
        assert!(sim.emergency_state);
        let count = |sim: &FlightSimulator| {
            sim.alerts
                .entries()
                .iter()
                .filter(|a| *a == "FUEL EMERGENCY")
                .count()
        };
        assert_eq!(count(&sim), 1);

        // Next tick at the same level must not duplicate the alert,
        // and the emergency never clears
        sim.update(1.0);
        assert_eq!(count(&sim), 1);
        assert!(sim.emergency_state);
    }

    #[test]
    fn test_weather_multiplier_does_not_compound() {
        let mut sim = cruising_sim();
        sim.weather = sim.weather.clone().with_condition(WeatherCondition::Turbulence);
        let baseline = sim.drift_rate;
        for _ in 0..50 {
            sim.apply_drift(1.0);
        }
        assert_eq!(sim.drift_rate, baseline);
    }

    #[test]
    fn test_turbulence_scales_drift_by_half_again() {
        let mut clear = cruising_sim();
        clear.weather = clear
            .weather
            .clone()
            .with_condition(WeatherCondition::Clear)
            .with_crosswind(0.0);
        let mut rough = cruising_sim();
        rough.weather = rough
            .weather
            .clone()
            .with_condition(WeatherCondition::Turbulence)
            .with_crosswind(0.0);

        let start = clear.heading;
        clear.apply_drift(1.0);
        rough.apply_drift(1.0);
        let clear_delta = clear.heading - start;
        let rough_delta = rough.heading - start;
        assert!((rough_delta - clear_delta * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_apply_course_correction() {
        let mut sim = started_sim();
        sim.heading = 10.0;
        sim.apply_course_correction(-20.0);
        assert_eq!(sim.heading, 350.0);
        sim.apply_course_correction(15.0);
        assert_eq!(sim.heading, 5.0);
    }

    #[test]
    fn test_course_correction_rejects_non_finite_input() {
        let mut sim = started_sim();
        let heading = sim.heading;
        sim.apply_course_correction(f64::NAN);
        sim.apply_course_correction(f64::INFINITY);
        assert_eq!(sim.heading, heading);
        assert!(sim.heading.is_finite());
    }

    #[test]
    fn test_autopilot_heading_correction_is_bounded() {
        let mut sim = cruising_sim();
        sim.set_autopilot(true);
        sim.target_heading = 0.0;
        sim.heading = 90.0;

        sim.apply_autopilot(1.0);

        let moved = 90.0 - sim.heading;
        assert!(moved > 0.0, "heading should move towards the target");
        assert!(moved <= 1.5 + 1e-9, "bounded by the correction rate");
    }

    #[test]
    fn test_autopilot_leaves_heading_alone_on_the_ground() {
        let mut sim = started_sim();
        sim.set_autopilot(true);
        sim.update(1.0); // taxi
        sim.target_heading = 0.0;
        sim.heading = 90.0;
        sim.apply_autopilot(1.0);
        assert_eq!(sim.heading, 90.0);
    }

    #[test]
    fn test_autopilot_slows_a_hot_engine() {
        let mut sim = cruising_sim();
        sim.set_autopilot(true);
        sim.airspeed = 120.0;
        sim.engine_temp = 230.0;

        sim.apply_autopilot(1.0);

        assert!(sim.airspeed < 120.0);
        assert!(sim
            .alerts
            .entries()
            .iter()
            .any(|a| a == "Autopilot reducing speed for cooling"));
    }

    #[test]
    fn test_autopilot_respects_phase_speed_floors() {
        let mut sim = cruising_sim();
        sim.set_autopilot(true);
        sim.engine_temp = 150.0;
        sim.airspeed = 50.0;
        sim.apply_autopilot(1.0);
        assert!(sim.airspeed >= 80.0); // cruise floor

        let mut sim = started_sim();
        sim.elapsed_time = 600.0;
        sim.advance_phase();
        assert_eq!(sim.flight_phase, FlightPhase::Climb);
        sim.set_autopilot(true);
        sim.engine_temp = 150.0;
        sim.airspeed = 50.0;
        sim.apply_autopilot(1.0);
        assert!(sim.airspeed >= 70.0); // climb floor
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut sim = started_sim();
        sim.update(120.0);
        assert_eq!(sim.get_status(), sim.get_status());
    }

    #[test]
    fn test_snapshot_sanitizes_corrupt_state() {
        let mut sim = started_sim();
        sim.heading = f64::NAN;
        sim.target_heading = f64::NAN;
        sim.altitude = f64::NAN;
        sim.engine_temp = f64::NAN;
        sim.airspeed = f64::INFINITY;

        let status = sim.get_status();
        assert_eq!(status.heading, 0);
        assert_eq!(status.target_heading, 0);
        assert_eq!(status.altitude, 0);
        assert_eq!(status.engine_temp, 180);
        assert_eq!(status.airspeed, 0);
    }

    #[test]
    fn test_end_flight_without_a_flight() {
        let mut sim = FlightSimulator::with_seed(5);
        assert!(sim.end_flight().is_none());
    }

    #[test]
    fn test_end_flight_mid_air() {
        let mut sim = started_sim();
        for _ in 0..10 {
            sim.update(60.0);
        }
        let summary = sim.end_flight().expect("a flight was active");
        assert!(!summary.completed);
        assert!(summary.flight_time > 0.0);
        assert!(!sim.is_flying());
        assert!(sim.end_flight().is_none());
    }

    #[test]
    fn test_end_flight_after_natural_completion() {
        let mut sim = started_sim();
        sim.course_deviations = 5;
        sim.elapsed_time = make_plan().get_estimated_time_seconds() + 1.0;
        sim.update(1.0);
        assert_eq!(sim.flight_phase, FlightPhase::Completed);

        let summary = sim.end_flight().expect("the completed flight still ends");
        assert!(summary.completed);
        assert_eq!(summary.course_deviations, 5);
        assert!(!summary.emergency_landing);
    }

    #[test]
    fn test_full_flight_scenario() {
        let mut sim = started_sim();
        for _ in 0..10 {
            let status = sim.update(60.0);
            assert!(status.is_flying);
            assert!((0..360).contains(&status.heading));
        }
        let status = sim.get_status();
        assert!(status.elapsed_time > 0.0);
        assert!(status.fuel_remaining < 100.0);
        assert!(["taxi", "takeoff", "climb", "cruise"].contains(&status.flight_phase));
    }

    #[test]
    fn test_eta() {
        let mut sim = started_sim();
        assert!(sim.eta_seconds().is_none());
        sim.elapsed_time = 600.0;
        sim.progress_percent = 10.0;
        let eta = sim.eta_seconds().expect("progress has been made");
        assert!((eta - 5400.0).abs() < 1.0);
    }

    #[test]
    fn test_angular_deviation() {
        assert_eq!(angular_deviation(10.0, 350.0), 20.0);
        assert_eq!(angular_deviation(350.0, 10.0), 20.0);
        assert_eq!(angular_deviation(0.0, 180.0), 180.0);
        assert_eq!(angular_deviation(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_signed_heading_error() {
        assert_eq!(signed_heading_error(10.0, 350.0), -20.0);
        assert_eq!(signed_heading_error(350.0, 10.0), 20.0);
        assert_eq!(signed_heading_error(90.0, 90.0), 0.0);
    }
}
