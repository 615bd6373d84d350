use crate::aircraft::AircraftCatalog;
use crate::airline::Airline;
use crate::error::OpsError;
use crate::fleet::FlightState;
use crate::sim_time::Timestamp;
use log::info;

/// How long a maintenance visit keeps an airframe out of service.
pub const MAINTENANCE_DURATION_HOURS: f64 = 24.0;

/// What a maintenance visit cost and when the aircraft returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaintenanceReceipt {
    pub cost: f64,
    pub back_in_service: Timestamp,
}

/// Pay for a maintenance visit on a grounded airframe.
///
/// Transition `Grounded → InMaintenance`. The bill is the type's hourly
/// maintenance rate times the hours flown since the last visit. On
/// success the wear counter resets, condition returns to 1.0, and the
/// aircraft sits in the shop for `MAINTENANCE_DURATION_HOURS`
/// (`arrival::release_completed_maintenance` brings it back).
pub fn perform_maintenance(
    airline: &mut Airline,
    fleet_index: usize,
    catalog: &AircraftCatalog,
    now: Timestamp,
) -> Result<MaintenanceReceipt, OpsError> {
    let balance = airline.account_balance;
    let item = airline
        .fleet
        .get(fleet_index)
        .ok_or(OpsError::UnknownFleetItem(fleet_index))?;

    let at = match &item.state {
        FlightState::Grounded { at } => at.clone(),
        FlightState::Airborne { .. } => {
            return Err(OpsError::AircraftUnavailable { reason: "airborne" })
        }
        FlightState::InMaintenance { .. } => {
            return Err(OpsError::AircraftUnavailable {
                reason: "already in maintenance",
            })
        }
    };
    let aircraft = catalog
        .get(&item.type_code)
        .ok_or_else(|| OpsError::UnknownAircraftType(item.type_code.clone()))?;

    let billable_hours = (item.hours_flown - item.hours_at_last_maintenance).max(0.0);
    let cost = aircraft.maintenance_cost_per_hour * billable_hours;
    if balance < cost {
        return Err(OpsError::InsufficientFunds {
            required: cost,
            balance,
        });
    }

    let item = &mut airline.fleet[fleet_index];
    item.km_since_maintenance = 0.0;
    item.hours_at_last_maintenance = item.hours_flown;
    item.condition = 1.0;
    let back_in_service = now.plus_hours(MAINTENANCE_DURATION_HOURS);
    item.state = FlightState::InMaintenance {
        at,
        until: back_in_service,
    };
    let registration = item.registration.clone();

    airline.debit(cost);
    info!("{registration} into maintenance for ${cost:.0}, {billable_hours:.1} billable hours");

    Ok(MaintenanceReceipt {
        cost,
        back_in_service,
    })
}
