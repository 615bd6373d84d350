use crate::aircraft::{AircraftCatalog, SeatingConfig};
use crate::airline::Airline;
use crate::demand::baseline_demand;
use crate::error::OpsError;
use crate::fleet::FlightState;
use crate::geo::distance_km;
use crate::pricing::{self, booked_seats, reference_fares, FarePredictor};
use crate::sim_time::Timestamp;
use log::{debug, info};
use rand::Rng;

/// Aircraft at or below this condition may not depart until maintained.
pub const CONDITION_FLOOR: f64 = 0.25;

/// Experience awarded per successful departure.
pub const XP_PER_DEPARTURE: u32 = 25;

/// Experience required per airline level.
pub const XP_PER_LEVEL: u32 = 1_000;

/// What a successful departure earned and loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureReceipt {
    /// Ticket revenue credited to the airline.
    pub revenue: f64,
    /// Seats sold per class.
    pub seats_booked: SeatingConfig,
    /// The aircraft's full cabin layout, for UI aggregation across
    /// simultaneous departures.
    pub cabin_layout: SeatingConfig,
    /// Reserve fuel consumed for the leg.
    pub fuel_burned_liters: f64,
    pub distance_km: f64,
    pub landing: Timestamp,
}

/// Aggregate result of a fleet-wide departure sweep. Only the successful
/// subset contributes to the revenue and seat totals.
#[derive(Debug, Default)]
pub struct FleetSummary {
    pub attempted: u32,
    pub departed: u32,
    pub total_revenue: f64,
    pub total_seats_booked: u32,
    pub failures: Vec<(usize, OpsError)>,
}

/// Try to launch one aircraft on its assigned route.
///
/// Transition `Grounded → Airborne`. Every precondition is checked before
/// anything is touched, so a failed departure is a complete no-op on the
/// airline: route assigned, currently grounded, condition above the
/// floor, fares set, leg within tank range, and enough reserve fuel held.
///
/// On success the booked load and revenue come from the demand and
/// pricing models, reserve fuel is burned, the leg distance is added to
/// the wear counter, and the aircraft flies until `now + distance/speed`.
pub fn attempt_departure(
    airline: &mut Airline,
    fleet_index: usize,
    catalog: &AircraftCatalog,
    fares: &impl FarePredictor,
    now: Timestamp,
    rng: &mut impl Rng,
) -> Result<DepartureReceipt, OpsError> {
    let reputation = airline.reputation;
    let fuel_held = airline.fuel_held_liters;

    let item = airline
        .fleet
        .get(fleet_index)
        .ok_or(OpsError::UnknownFleetItem(fleet_index))?;

    let route = item.assigned_route.clone().ok_or(OpsError::RouteMissing)?;
    match item.state {
        FlightState::Grounded { .. } => {}
        FlightState::Airborne { .. } => {
            return Err(OpsError::AircraftUnavailable { reason: "airborne" })
        }
        FlightState::InMaintenance { .. } => {
            return Err(OpsError::AircraftUnavailable {
                reason: "in maintenance",
            })
        }
    }
    if item.condition <= CONDITION_FLOOR {
        return Err(OpsError::AircraftUnavailable {
            reason: "condition below floor",
        });
    }
    let pricing_table = item.assigned_pricing.ok_or(OpsError::PricingNotSet)?;
    let aircraft = catalog
        .get(&item.type_code)
        .ok_or_else(|| OpsError::UnknownAircraftType(item.type_code.clone()))?;

    let leg_km = distance_km(&route.origin, &route.arrival);
    let fuel_required = aircraft.fuel_burn_liters_per_km * leg_km;
    if fuel_required > aircraft.fuel_capacity_liters {
        return Err(OpsError::RangeInfeasible {
            required_liters: fuel_required,
            capacity_liters: aircraft.fuel_capacity_liters,
        });
    }
    if fuel_required > fuel_held {
        return Err(OpsError::FuelReserveInsufficient {
            required_liters: fuel_required,
            held_liters: fuel_held,
        });
    }

    // All checks passed; book the cabin.
    let capacity = item.seating_layout.total_seats();
    let baseline = baseline_demand(&route.origin, &route.arrival, capacity, reputation, rng);
    let reference = reference_fares(fares, reputation, leg_km);
    let booked = booked_seats(&baseline, &pricing_table, &reference, &item.seating_layout);
    let revenue = pricing::revenue(&booked, &pricing_table);

    let flight_hours = leg_km / f64::from(aircraft.cruise_speed_kmh);
    let landing = now.plus_hours(flight_hours);
    let cabin_layout = item.seating_layout;
    let registration = item.registration.clone();

    let item = &mut airline.fleet[fleet_index];
    item.km_since_maintenance += leg_km;
    item.passenger_seats_used = Some(booked);
    item.state = FlightState::Airborne {
        route: route.clone(),
        takeoff: now,
        landing,
    };

    airline.fuel_held_liters -= fuel_required;
    airline.credit(revenue);
    airline.xp += XP_PER_DEPARTURE;
    airline.level = airline.xp / XP_PER_LEVEL;

    info!(
        "{registration} departed {} -> {} with {} pax, ${revenue:.0}",
        route.origin.iata,
        route.arrival.iata,
        booked.total_seats()
    );

    Ok(DepartureReceipt {
        revenue,
        seats_booked: booked,
        cabin_layout,
        fuel_burned_liters: fuel_required,
        distance_km: leg_km,
        landing,
    })
}

/// Depart every grounded aircraft that has an assigned route.
///
/// Failures are collected per aircraft and never abort the sweep; the
/// totals report only the planes that actually left.
pub fn depart_all(
    airline: &mut Airline,
    catalog: &AircraftCatalog,
    fares: &impl FarePredictor,
    now: Timestamp,
    rng: &mut impl Rng,
) -> FleetSummary {
    let candidates: Vec<usize> = airline
        .fleet
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_grounded() && p.assigned_route.is_some())
        .map(|(i, _)| i)
        .collect();

    let mut summary = FleetSummary::default();
    for index in candidates {
        summary.attempted += 1;
        match attempt_departure(airline, index, catalog, fares, now, rng) {
            Ok(receipt) => {
                summary.departed += 1;
                summary.total_revenue += receipt.revenue;
                summary.total_seats_booked += receipt.seats_booked.total_seats();
            }
            Err(err) => {
                debug!("fleet index {index} held at gate: {err}");
                summary.failures.push((index, err));
            }
        }
    }
    summary
}
