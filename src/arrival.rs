use crate::airline::Airline;
use crate::airport::Airport;
use crate::fleet::FlightState;
use crate::sim_time::Timestamp;
use log::debug;
use rand::Rng;

/// Per-flight wear divisor range: one point of condition is lost every
/// `uniform(35_000, 65_000)` kilometers since the last maintenance
/// visit. Randomized per flight so a fleet bought on the same day does
/// not wear out in lockstep.
pub const WEAR_DIVISOR_MIN: f64 = 35_000.0;
pub const WEAR_DIVISOR_MAX: f64 = 65_000.0;

/// One aircraft touching down during an arrival scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalEvent {
    pub fleet_index: usize,
    pub registration: String,
    pub arrived_at: Airport,
    /// Hours this leg took (takeoff to landing).
    pub flight_hours: f64,
    /// Condition after the post-flight wear assessment.
    pub condition_after: f64,
}

/// Land every airborne aircraft whose landing time has passed.
///
/// Transition `Airborne → Grounded`. Flight hours accrue from the
/// scheduled takeoff/landing pair, wear is recomputed from the running
/// kilometers since maintenance, and the aircraft parks at the route's
/// arrival airport. An aircraft transitions exactly once per flight; a
/// plane already grounded is never touched again.
pub fn scan_for_arrivals(
    airline: &mut Airline,
    now: Timestamp,
    rng: &mut impl Rng,
) -> Vec<ArrivalEvent> {
    let mut events = Vec::new();

    for (fleet_index, item) in airline.fleet.iter_mut().enumerate() {
        let (route, takeoff, landing) = match &item.state {
            FlightState::Airborne {
                route,
                takeoff,
                landing,
            } if now >= *landing => (route.clone(), *takeoff, *landing),
            _ => continue,
        };

        let flight_hours = landing.hours_since(takeoff);
        item.hours_flown += flight_hours;

        let wear_divisor = rng.gen_range(WEAR_DIVISOR_MIN..=WEAR_DIVISOR_MAX);
        let degradation_rate = 1.0 / wear_divisor;
        item.condition = (1.0 - item.km_since_maintenance * degradation_rate).clamp(0.0, 1.0);

        item.passenger_seats_used = None;
        let arrived_at = route.arrival.clone();
        item.state = FlightState::Grounded {
            at: arrived_at.clone(),
        };

        debug!(
            "{} landed at {} after {flight_hours:.1} h, condition {:.3}",
            item.registration, arrived_at.iata, item.condition
        );
        events.push(ArrivalEvent {
            fleet_index,
            registration: item.registration.clone(),
            arrived_at,
            flight_hours,
            condition_after: item.condition,
        });
    }

    events
}

/// Release aircraft whose maintenance window has elapsed back to the
/// apron. Returns how many came back into service. Run on the same
/// periodic tick as the arrival scan.
pub fn release_completed_maintenance(airline: &mut Airline, now: Timestamp) -> usize {
    let mut released = 0;
    for item in &mut airline.fleet {
        if let FlightState::InMaintenance { at, until } = &item.state {
            if now >= *until {
                item.state = FlightState::Grounded { at: at.clone() };
                released += 1;
            }
        }
    }
    released
}
