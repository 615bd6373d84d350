//! Shared test fixtures: small airlines in known-good states so each
//! test only sets up the detail it is about.

use crate::aircraft::AircraftCatalog;
use crate::airline::Airline;
use crate::airport::Airport;
use crate::fleet::FleetItem;
use crate::pricing::FareTable;

fn airport(icao: &str) -> Airport {
    crate::airport::AirportCatalog::standard()
        .get(icao)
        .unwrap()
        .clone()
}

/// An airline with cash, fuel and one IL96 at Madrid that is routed to
/// Heathrow and priced — one call away from a successful departure.
pub fn routed_airline() -> (Airline, AircraftCatalog) {
    let catalog = AircraftCatalog::standard();
    let mut airline = Airline::new(
        "Advait",
        "IndiGo Atlantic",
        "6E",
        airport("LEMD"),
        100_000_000.0,
    );
    airline.reputation = 0.8;
    airline.pilots = 9;
    airline.flight_attendants = 27;
    airline.maintenance_crew = 12;
    airline.weekly_pilot_salary = 500.0;
    airline.weekly_attendant_salary = 400.0;
    airline.weekly_maintenance_salary = 350.0;
    airline.fuel_held_liters = 3_000_000.0;
    airline.max_fuel_liters = 5_000_000.0;

    let mut plane = FleetItem::new(
        1,
        catalog.get("IL96-400M").unwrap(),
        "Babushka",
        "VT-SBT",
        airport("LEMD"),
    );
    plane.assign_destination(airport("EGLL"), None).unwrap();
    plane.set_pricing(FareTable::new(150.0, 260.0, 430.0, 820.0));
    airline.fleet.push(plane);

    (airline, catalog)
}

/// `routed_airline` plus a second routed-and-priced IL96, for sweep tests.
pub fn two_plane_airline() -> (Airline, AircraftCatalog) {
    let (mut airline, catalog) = routed_airline();
    let mut plane = FleetItem::new(
        2,
        catalog.get("IL96-400M").unwrap(),
        "Matryoshka",
        "VT-SBU",
        airport("LEMD"),
    );
    plane.assign_destination(airport("ESSA"), None).unwrap();
    plane.set_pricing(FareTable::new(140.0, 240.0, 410.0, 790.0));
    airline.fleet.push(plane);
    (airline, catalog)
}

/// An A320neo at JFK assigned to Sydney: priced and fueled, but the leg
/// is far beyond the airframe's tank range.
pub fn narrowbody_on_impossible_route() -> (Airline, AircraftCatalog) {
    let catalog = AircraftCatalog::standard();
    let mut airline = Airline::new(
        "Advait",
        "IndiGo Atlantic",
        "6E",
        airport("KJFK"),
        100_000_000.0,
    );
    airline.fuel_held_liters = 50_000_000.0;
    airline.max_fuel_liters = 50_000_000.0;

    let mut plane = FleetItem::new(
        1,
        catalog.get("A320NEO").unwrap(),
        "Hopper",
        "VT-HOP",
        airport("KJFK"),
    );
    plane.assign_destination(airport("YSSY"), None).unwrap();
    plane.set_pricing(FareTable::new(900.0, 1_500.0, 2_400.0, 4_000.0));
    airline.fleet.push(plane);

    (airline, catalog)
}
