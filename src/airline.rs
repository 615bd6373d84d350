use crate::aircraft::{AircraftCatalog, SeatingConfig};
use crate::airport::Airport;
use crate::error::OpsError;
use crate::fleet::FleetItem;
use crate::sim_time::Timestamp;
use log::info;
use serde::{Deserialize, Serialize};

/// The mutable root of a playthrough: one airline, its fleet, money,
/// people and fuel. Every simulation operation takes this by exclusive
/// mutable access for its whole duration; the core holds no other state.
///
/// `account_balance` may legitimately go negative (debt) — callers must
/// not treat that as a hard failure. Crew happiness stays in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    // Identity
    pub ceo_name: String,
    pub airline_name: String,
    pub iata_code: String,

    pub fleet: Vec<FleetItem>,
    pub delivery_hubs: Vec<Airport>,
    pub account_balance: f64,

    // Progression
    pub xp: u32,
    pub level: u32,
    /// 0.0–1.0; scales demand jitter and fair-fare predictions
    pub reputation: f64,
    pub reliability_index: f64,

    // Staffing
    pub pilots: u32,
    pub flight_attendants: u32,
    pub maintenance_crew: u32,
    pub weekly_pilot_salary: f64,
    pub weekly_attendant_salary: f64,
    pub weekly_maintenance_salary: f64,
    pub pilot_happiness: f64,
    pub attendant_happiness: f64,
    pub maintenance_crew_happiness: f64,

    // Fuel
    pub fuel_held_liters: f64,
    pub max_fuel_liters: f64,
    pub fuel_discount_multiplier: f64,
    /// Last paid price per liter, drifts inside [0.45, 1.40]
    pub last_fuel_price: f64,

    // Marketing campaign
    pub campaign_running: bool,
    pub campaign_effectiveness: Option<f64>,

    // Financial-week bookkeeping
    pub last_login: Timestamp,
    /// Fractional days accumulated toward the next payroll settlement
    pub days_into_financial_week: f64,
    pub weekly_spent: f64,
    pub weekly_earned: f64,

    next_fleet_id: u32,
}

impl Airline {
    /// A newly founded airline with one delivery hub and the starting
    /// staffing/fuel position.
    pub fn new(
        ceo_name: &str,
        airline_name: &str,
        iata_code: &str,
        hub: Airport,
        account_balance: f64,
    ) -> Self {
        Self {
            ceo_name: ceo_name.to_string(),
            airline_name: airline_name.to_string(),
            iata_code: iata_code.to_string(),
            fleet: Vec::new(),
            delivery_hubs: vec![hub],
            account_balance,
            xp: 0,
            level: 0,
            reputation: 0.6,
            reliability_index: 0.7,
            pilots: 3,
            flight_attendants: 6,
            maintenance_crew: 4,
            weekly_pilot_salary: 400.0,
            weekly_attendant_salary: 300.0,
            weekly_maintenance_salary: 250.0,
            pilot_happiness: 0.95,
            attendant_happiness: 0.95,
            maintenance_crew_happiness: 0.95,
            fuel_held_liters: 1_000_000.0,
            max_fuel_liters: 4_000_000.0,
            fuel_discount_multiplier: 1.0,
            last_fuel_price: 0.75,
            campaign_running: false,
            campaign_effectiveness: None,
            last_login: Timestamp::default(),
            days_into_financial_week: 0.0,
            weekly_spent: 0.0,
            weekly_earned: 0.0,
            next_fleet_id: 1,
        }
    }

    /// Total weekly payroll across all three crew categories.
    pub fn weekly_payroll(&self) -> f64 {
        f64::from(self.pilots) * self.weekly_pilot_salary
            + f64::from(self.flight_attendants) * self.weekly_attendant_salary
            + f64::from(self.maintenance_crew) * self.weekly_maintenance_salary
    }

    /// Add `amount` to the balance and the weekly earnings accumulator.
    pub fn credit(&mut self, amount: f64) {
        self.account_balance += amount;
        self.weekly_earned += amount;
    }

    /// Subtract `amount` from the balance and track it as weekly spend.
    /// The balance is allowed to go negative.
    pub fn debit(&mut self, amount: f64) {
        self.account_balance -= amount;
        self.weekly_spent += amount;
    }

    /// Grounded aircraft with a route that have not yet departed.
    pub fn undeparted_count(&self) -> usize {
        self.fleet
            .iter()
            .filter(|p| p.is_grounded() && p.assigned_route.is_some())
            .count()
    }

    /// Buy a new airframe and park it at `delivered_at` with the type's
    /// default cabin. Returns the fleet index of the new aircraft.
    pub fn purchase_aircraft(
        &mut self,
        catalog: &AircraftCatalog,
        model_code: &str,
        display_name: &str,
        registration: &str,
        delivered_at: Airport,
    ) -> Result<usize, OpsError> {
        let aircraft = catalog
            .get(model_code)
            .ok_or_else(|| OpsError::UnknownAircraftType(model_code.to_string()))?;

        if self.account_balance < aircraft.purchase_price {
            return Err(OpsError::InsufficientFunds {
                required: aircraft.purchase_price,
                balance: self.account_balance,
            });
        }

        let price = aircraft.purchase_price;
        let item = FleetItem::new(
            self.next_fleet_id,
            aircraft,
            display_name,
            registration,
            delivered_at,
        );
        self.next_fleet_id += 1;
        self.debit(price);
        self.fleet.push(item);
        info!(
            "{} purchased {} ({registration})",
            self.airline_name, model_code
        );
        Ok(self.fleet.len() - 1)
    }

    /// Reconfigure a grounded airframe's cabin. The weighted seat-unit
    /// total must fit the airframe's floor space.
    pub fn configure_seating(
        &mut self,
        fleet_index: usize,
        layout: SeatingConfig,
        catalog: &AircraftCatalog,
    ) -> Result<(), OpsError> {
        let item = self
            .fleet
            .get_mut(fleet_index)
            .ok_or(OpsError::UnknownFleetItem(fleet_index))?;
        if !item.is_grounded() {
            return Err(OpsError::AircraftUnavailable {
                reason: "not grounded",
            });
        }
        let aircraft = catalog
            .get(&item.type_code)
            .ok_or_else(|| OpsError::UnknownAircraftType(item.type_code.clone()))?;
        if !layout.fits(aircraft.max_seats) {
            return Err(OpsError::SeatingDoesNotFit {
                weighted_units: layout.weighted_seat_units(),
                max_seats: aircraft.max_seats,
            });
        }
        item.seating_layout = layout;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::AirportCatalog;

    fn founders() -> (Airline, AircraftCatalog) {
        let airports = AirportCatalog::standard();
        let airline = Airline::new(
            "Advait",
            "IndiGo Atlantic",
            "6E",
            airports.get("LEMD").unwrap().clone(),
            200_000_000.0,
        );
        (airline, AircraftCatalog::standard())
    }

    #[test]
    fn test_purchase_aircraft() {
        let (mut airline, catalog) = founders();
        let hub = airline.delivery_hubs[0].clone();
        let idx = airline
            .purchase_aircraft(&catalog, "IL96-400M", "Babushka", "VT-SBT", hub)
            .unwrap();

        assert_eq!(idx, 0);
        assert_eq!(airline.fleet.len(), 1);
        assert_eq!(airline.account_balance, 200_000_000.0 - 185_000_000.0);
        assert_eq!(airline.fleet[0].grounded_at().unwrap().icao, "LEMD");
    }

    #[test]
    fn test_purchase_unknown_type() {
        let (mut airline, catalog) = founders();
        let hub = airline.delivery_hubs[0].clone();
        let err = airline
            .purchase_aircraft(&catalog, "A380-800", "Whale", "VT-WHL", hub)
            .unwrap_err();
        assert_eq!(err, OpsError::UnknownAircraftType("A380-800".to_string()));
        assert!(airline.fleet.is_empty());
    }

    #[test]
    fn test_purchase_insufficient_funds() {
        let (mut airline, catalog) = founders();
        airline.account_balance = 50_000_000.0;
        let hub = airline.delivery_hubs[0].clone();
        let err = airline
            .purchase_aircraft(&catalog, "IL96-400M", "Babushka", "VT-SBT", hub)
            .unwrap_err();
        assert!(matches!(err, OpsError::InsufficientFunds { .. }));
        assert_eq!(airline.account_balance, 50_000_000.0);
    }

    #[test]
    fn test_configure_seating_fit_check() {
        let (mut airline, catalog) = founders();
        let hub = airline.delivery_hubs[0].clone();
        let idx = airline
            .purchase_aircraft(&catalog, "A320NEO", "Hopper", "VT-HOP", hub)
            .unwrap();

        // 60 first seats = 240 weighted units on a 230-seat airframe
        let err = airline
            .configure_seating(idx, SeatingConfig::new(0, 0, 0, 60), &catalog)
            .unwrap_err();
        assert!(matches!(err, OpsError::SeatingDoesNotFit { .. }));

        airline
            .configure_seating(idx, SeatingConfig::new(120, 20, 16, 0), &catalog)
            .unwrap();
        assert_eq!(airline.fleet[idx].seating_layout.total_seats(), 156);
    }

    #[test]
    fn test_weekly_payroll() {
        let (mut airline, _) = founders();
        airline.pilots = 9;
        airline.flight_attendants = 27;
        airline.maintenance_crew = 12;
        airline.weekly_pilot_salary = 500.0;
        airline.weekly_attendant_salary = 400.0;
        airline.weekly_maintenance_salary = 350.0;
        // 9*500 + 27*400 + 12*350 = 19_500
        assert!((airline.weekly_payroll() - 19_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_credit_debit_track_weekly_flows() {
        let (mut airline, _) = founders();
        airline.credit(5_000.0);
        airline.debit(2_000.0);
        assert!((airline.weekly_earned - 5_000.0).abs() < 1e-9);
        assert!((airline.weekly_spent - 2_000.0).abs() < 1e-9);
        assert!((airline.account_balance - 200_003_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_serde_round_trip_preserves_state_machine() {
        let (mut airline, catalog) = founders();
        let hub = airline.delivery_hubs[0].clone();
        airline
            .purchase_aircraft(&catalog, "B787-9", "Ocean Breeze", "N-PW003", hub)
            .unwrap();

        let json = serde_json::to_string(&airline).unwrap();
        let restored: Airline = serde_json::from_str(&json).unwrap();
        assert_eq!(airline, restored);
        assert!(restored.fleet[0].is_grounded());
    }
}
