use serde::Serialize;

/// Fallback engine temperature when the internal value has been corrupted.
pub const ENGINE_TEMP_FALLBACK: i32 = 180;

/// Replace a non-finite value before it crosses the engine boundary.
pub fn sanitize_f64(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

pub fn sanitize_as_i32(value: f64, fallback: i32) -> i32 {
    if value.is_finite() { value as i32 } else { fallback }
}

/// Weather as exposed to the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeatherStatus {
    pub condition: &'static str,
    pub wind_direction: i32,
    pub wind_speed: i32,
    pub visibility: i32,
}

/// Running performance counters exposed with every snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceStatus {
    pub course_deviations: u32,
    pub alerts_count: u32,
    pub fuel_efficiency: f64,
}

/// A defensive copy of the simulation state, safe to hand to any consumer.
///
/// Every numeric field is finite: values corrupted inside the engine are
/// replaced with documented fallbacks (heading, target heading and airspeed
/// fall back to 0, altitude to 0, engine temperature to 180).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub is_flying: bool,
    pub flight_phase: &'static str,
    pub elapsed_time: f64,
    pub progress_percent: f64,
    pub altitude: i32,
    pub airspeed: i32,
    pub heading: i32,
    pub target_heading: i32,
    pub engine_temp: i32,
    pub fuel_remaining: f64,
    pub off_course_distance: f64,
    pub system_alerts: Vec<String>,
    pub emergency_state: bool,
    pub weather: WeatherStatus,
    pub performance: PerformanceStatus,
}

/// Debrief returned by `end_flight`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub completed: bool,
    pub flight_time: f64,
    pub course_deviations: u32,
    pub system_alerts: u32,
    pub fuel_efficiency: f64,
    pub emergency_landing: bool,
    pub final_progress: f64,
}
