use thiserror::Error;

/// Everything that can go wrong with a player-facing operation.
///
/// All of these are locally recoverable: a failed operation returns the
/// error and leaves the airline aggregate exactly as it was. Nothing in
/// the core panics on bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpsError {
    /// Departure attempted with no assigned route.
    #[error("no route assigned")]
    RouteMissing,

    /// Aircraft is airborne, in maintenance, or below the condition floor.
    #[error("aircraft unavailable: {reason}")]
    AircraftUnavailable { reason: &'static str },

    /// Fuel required for the leg exceeds the aircraft's tank capacity.
    #[error("route requires {required_liters:.0} L but tank holds {capacity_liters:.0} L")]
    RangeInfeasible {
        required_liters: f64,
        capacity_liters: f64,
    },

    /// The airline's held fuel is less than the leg requires.
    #[error("leg needs {required_liters:.0} L, airline holds {held_liters:.0} L")]
    FuelReserveInsufficient {
        required_liters: f64,
        held_liters: f64,
    },

    /// No player-set fares for the aircraft.
    #[error("no pricing assigned")]
    PricingNotSet,

    /// Account balance does not cover the cost of the action.
    #[error("need ${required:.2}, balance is ${balance:.2}")]
    InsufficientFunds { required: f64, balance: f64 },

    /// Aircraft type code not present in the reference catalog.
    #[error("unknown aircraft type {0:?}")]
    UnknownAircraftType(String),

    /// Fleet index past the end of the airline's fleet list.
    #[error("no fleet item at index {0}")]
    UnknownFleetItem(usize),

    /// Requested seating layout exceeds the airframe's floor space.
    #[error("layout needs {weighted_units:.1} seat units, airframe allows {max_seats}")]
    SeatingDoesNotFit { weighted_units: f64, max_seats: u32 },
}
