use crate::aircraft::{AircraftType, SeatingConfig};
use crate::airport::Airport;
use crate::error::OpsError;
use crate::pricing::FareTable;
use crate::route::Route;
use crate::sim_time::Timestamp;
use serde::{Deserialize, Serialize};

/// Where an aircraft is in its operational cycle.
///
/// Exactly one variant holds at a time, so the impossible combinations
/// the optional-field representation allowed (airborne with a parked
/// location, grounded with a landing time) cannot be expressed at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlightState {
    /// Parked at an airport, ready for assignment.
    Grounded { at: Airport },
    /// En route; lands when the caller's clock passes `landing`.
    Airborne {
        route: Route,
        takeoff: Timestamp,
        landing: Timestamp,
    },
    /// In the shop until `until`, then released back to `at`.
    InMaintenance { at: Airport, until: Timestamp },
}

/// A single owned airframe in the airline's fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetItem {
    pub id: u32,
    /// Model code into the aircraft type catalog.
    pub type_code: String,
    /// Player-given name for this airframe.
    pub display_name: String,
    pub registration: String,
    /// Lifetime hours flown.
    pub hours_flown: f64,
    /// `hours_flown` at the moment of the last maintenance visit.
    pub hours_at_last_maintenance: f64,
    /// Airframe health, 0.0–1.0. Gates departure eligibility.
    pub condition: f64,
    pub state: FlightState,
    pub assigned_route: Option<Route>,
    pub seating_layout: SeatingConfig,
    /// Running total since the last maintenance visit; wear is computed
    /// from this, not from incremental decay.
    pub km_since_maintenance: f64,
    /// Player-set fares; departures require this.
    pub assigned_pricing: Option<FareTable>,
    /// Booked seats of the most recent departure; cleared on landing.
    pub passenger_seats_used: Option<SeatingConfig>,
}

impl FleetItem {
    /// A factory-fresh airframe parked at its delivery airport, with the
    /// type's default cabin.
    pub fn new(
        id: u32,
        aircraft: &AircraftType,
        display_name: &str,
        registration: &str,
        delivered_at: Airport,
    ) -> Self {
        Self {
            id,
            type_code: aircraft.model_code.clone(),
            display_name: display_name.to_string(),
            registration: registration.to_string(),
            hours_flown: 0.0,
            hours_at_last_maintenance: 0.0,
            condition: 1.0,
            state: FlightState::Grounded { at: delivered_at },
            assigned_route: None,
            seating_layout: aircraft.default_seating,
            km_since_maintenance: 0.0,
            assigned_pricing: None,
            passenger_seats_used: None,
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self.state, FlightState::Grounded { .. })
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self.state, FlightState::Airborne { .. })
    }

    /// The airport the aircraft is parked at, if grounded.
    pub fn grounded_at(&self) -> Option<&Airport> {
        match &self.state {
            FlightState::Grounded { at } => Some(at),
            _ => None,
        }
    }

    /// Replace the assigned route wholesale, with the origin re-derived
    /// from wherever the aircraft is currently parked.
    pub fn assign_destination(
        &mut self,
        arrival: Airport,
        stopover: Option<Airport>,
    ) -> Result<(), OpsError> {
        let origin = match &self.state {
            FlightState::Grounded { at } => at.clone(),
            FlightState::Airborne { .. } => {
                return Err(OpsError::AircraftUnavailable { reason: "airborne" })
            }
            FlightState::InMaintenance { .. } => {
                return Err(OpsError::AircraftUnavailable {
                    reason: "in maintenance",
                })
            }
        };
        self.assigned_route = Some(Route {
            origin,
            arrival,
            stopover,
        });
        Ok(())
    }

    pub fn set_pricing(&mut self, pricing: FareTable) {
        self.assigned_pricing = Some(pricing);
    }
}
