/// Stages of a flight, in the order they occur.
///
/// `TaxiToGate` is declared for the rollout-to-gate stage but the current
/// transition rule goes straight from `Landing` to `Completed`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum FlightPhase {
    Preflight,
    Taxi,
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Approach,
    Landing,
    TaxiToGate,
    Completed,
}

impl From<FlightPhase> for &'static str {
    fn from(value: FlightPhase) -> Self {
        match value {
            FlightPhase::Preflight => "preflight",
            FlightPhase::Taxi => "taxi",
            FlightPhase::Takeoff => "takeoff",
            FlightPhase::Climb => "climb",
            FlightPhase::Cruise => "cruise",
            FlightPhase::Descent => "descent",
            FlightPhase::Approach => "approach",
            FlightPhase::Landing => "landing",
            FlightPhase::TaxiToGate => "taxi_to_gate",
            FlightPhase::Completed => "completed",
        }
    }
}

impl FlightPhase {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Phase for a given elapsed time against the plan's total duration.
    ///
    /// The checks run in this exact order and the first match wins; on
    /// short flights the later conditions swallow the earlier windows,
    /// collapsing phases rather than stretching the flight.
    pub fn for_elapsed(elapsed: f64, total: f64) -> FlightPhase {
        if elapsed < 180.0 {
            FlightPhase::Taxi
        } else if elapsed < 300.0 {
            FlightPhase::Takeoff
        } else if elapsed < 900.0 {
            FlightPhase::Climb
        } else if elapsed < total - 900.0 {
            FlightPhase::Cruise
        } else if elapsed < total - 300.0 {
            FlightPhase::Descent
        } else if elapsed < total - 120.0 {
            FlightPhase::Approach
        } else if elapsed < total {
            FlightPhase::Landing
        } else {
            FlightPhase::Completed
        }
    }

    /// Wind and handling drift act on the aircraft in every airborne phase;
    /// ground rolls and the landing flare are flown wings level.
    pub fn drift_applies(&self) -> bool {
        !matches!(
            self,
            FlightPhase::Taxi | FlightPhase::Takeoff | FlightPhase::Landing
        )
    }

    /// Phases in which the autopilot may steer. It stays off the controls
    /// during ground and low altitude maneuvering.
    pub fn is_controllable(&self) -> bool {
        matches!(
            self,
            FlightPhase::Climb | FlightPhase::Cruise | FlightPhase::Descent | FlightPhase::Approach
        )
    }

    pub fn burns_fuel(&self) -> bool {
        !matches!(self, FlightPhase::Taxi | FlightPhase::Completed)
    }
}
