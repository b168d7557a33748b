use skylark_sim::model::aircraft::AircraftCategory;
use skylark_sim::model::waypoint::Waypoint;
use skylark_sim::planner::planner::Planner;
use skylark_sim::sim::simulator::FlightSimulator;
use skylark_sim::util::Logger;
use skylark_sim::util::hour_format::HourFormat;

/// Headless demo: plan a short hop and fly it at one simulated minute per
/// update, the way the game loop drives the engine in accelerated mode.
fn main() {
    let _logger = Logger::new();

    let departure = Waypoint::new("Boston Logan", 42.3656, -71.0096, 20);
    let destination = Waypoint::new("New York JFK", 40.6413, -73.7781, 13);
    println!("Departure:   {}", departure);
    println!("Destination: {}", destination);

    let planner = Planner::new();
    let plan =
        planner.calculate_flight_plan(departure, destination, AircraftCategory::SingleEngineProp);
    println!(
        "Planned {:.0} nm, estimated {} min",
        plan.get_distance_nm(),
        plan.get_estimated_time_minutes()
    );

    let mut simulator = FlightSimulator::new();
    if !simulator.start_flight(plan) {
        eprintln!("Unable to start the flight");
        return;
    }
    simulator.set_autopilot(true);

    let format = HourFormat::new();
    while simulator.is_flying() {
        let status = simulator.update(60.0);
        if status.elapsed_time as i64 % 600 == 0 {
            println!(
                "[{}] {:<9} alt {:>6} ft, {:>3} kn, hdg {:>3} (target {:>3}), fuel {:>5.1}%, progress {:>5.1}%",
                format.format(&status.elapsed_time),
                status.flight_phase,
                status.altitude,
                status.airspeed,
                status.heading,
                status.target_heading,
                status.fuel_remaining,
                status.progress_percent
            );
            for alert in &status.system_alerts {
                println!("          ! {}", alert);
            }
        }
    }

    if let Some(summary) = simulator.end_flight() {
        println!(
            "Flight over: completed={} time={} deviations={} alerts={} emergency={}",
            summary.completed,
            format.format(&summary.flight_time),
            summary.course_deviations,
            summary.system_alerts,
            summary.emergency_landing
        );
    }
}
