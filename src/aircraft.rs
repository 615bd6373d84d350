use serde::{Deserialize, Serialize};

/// The four cabin classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl SeatClass {
    pub const ALL: [SeatClass; 4] = [
        SeatClass::Economy,
        SeatClass::PremiumEconomy,
        SeatClass::Business,
        SeatClass::First,
    ];
}

/// Seat counts per cabin class.
///
/// Seat space ratios relative to Economy: Premium Economy ~1.5x,
/// Business ~2.0x, First ~4.0x. The weighted total is only used for
/// capacity-fit checks when configuring a purchased airframe; departures
/// work on plain seat counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatingConfig {
    pub economy: u32,
    pub premium_economy: u32,
    pub business: u32,
    pub first: u32,
}

impl SeatingConfig {
    pub fn new(economy: u32, premium_economy: u32, business: u32, first: u32) -> Self {
        Self {
            economy,
            premium_economy,
            business,
            first,
        }
    }

    pub fn seats(&self, class: SeatClass) -> u32 {
        match class {
            SeatClass::Economy => self.economy,
            SeatClass::PremiumEconomy => self.premium_economy,
            SeatClass::Business => self.business,
            SeatClass::First => self.first,
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.economy + self.premium_economy + self.business + self.first
    }

    /// Floor space consumed, in economy-seat units.
    pub fn weighted_seat_units(&self) -> f64 {
        f64::from(self.economy)
            + f64::from(self.premium_economy) * 1.5
            + f64::from(self.business) * 2.0
            + f64::from(self.first) * 4.0
    }

    /// Whether this layout physically fits an airframe with `max_seats`
    /// all-economy capacity.
    pub fn fits(&self, max_seats: u32) -> bool {
        self.weighted_seat_units() <= f64::from(max_seats)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Manufacturer {
    Airbus,
    Boeing,
    Embraer,
    Ilyushin,
    Tupolev,
    Bombardier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftCategory {
    Commuter,
    RegionalJet,
    NarrowBody,
    WideBody,
}

/// Immutable reference data for one aircraft model. One row per model
/// code in the catalog; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    pub model_code: String,
    pub name: String,
    pub manufacturer: Manufacturer,
    pub category: AircraftCategory,

    /// Maximum range in km
    pub max_range_km: u32,
    /// Cruise speed in km/h
    pub cruise_speed_kmh: u32,
    /// All-economy seat limit
    pub max_seats: u32,
    /// Tank capacity in liters
    pub fuel_capacity_liters: f64,
    /// Liters burned per km flown
    pub fuel_burn_liters_per_km: f64,
    /// Minimum runway length in meters
    pub min_runway_length: u32,

    pub default_seating: SeatingConfig,

    pub purchase_price: f64,
    pub maintenance_cost_per_hour: f64,
    pub year_introduced: u32,

    pub is_supersonic: bool,
    /// Flight deck crew required
    pub pilots_required: u32,
    /// Cabin crew required
    pub attendants_required: u32,
}

/// Read-only aircraft type reference data, keyed by model code. Passed
/// explicitly into operations that need lookups.
#[derive(Debug, Clone)]
pub struct AircraftCatalog {
    types: Vec<AircraftType>,
}

impl AircraftCatalog {
    pub fn new(types: Vec<AircraftType>) -> Self {
        Self { types }
    }

    /// The aircraft types shipped with the game.
    pub fn standard() -> Self {
        Self::new(standard_types())
    }

    /// Look up a type by model code.
    pub fn get(&self, model_code: &str) -> Option<&AircraftType> {
        self.types.iter().find(|t| t.model_code == model_code)
    }

    pub fn all(&self) -> &[AircraftType] {
        &self.types
    }

    /// Types whose range and runway requirements suit a given route.
    pub fn types_for_route(&self, distance_km: f64, runway_length: u32) -> Vec<&AircraftType> {
        self.types
            .iter()
            .filter(|t| f64::from(t.max_range_km) >= distance_km && t.min_runway_length <= runway_length)
            .collect()
    }

    /// Types affordable within a budget.
    pub fn affordable(&self, budget: f64) -> Vec<&AircraftType> {
        self.types.iter().filter(|t| t.purchase_price <= budget).collect()
    }
}

fn standard_types() -> Vec<AircraftType> {
    vec![
        AircraftType {
            model_code: "IL96-400M".to_string(),
            name: "Ilyushin Il-96-400M".to_string(),
            manufacturer: Manufacturer::Ilyushin,
            category: AircraftCategory::WideBody,
            max_range_km: 8_700,
            cruise_speed_kmh: 870,
            max_seats: 436,
            fuel_capacity_liters: 150_400.0,
            fuel_burn_liters_per_km: 10.8,
            min_runway_length: 2_600,
            default_seating: SeatingConfig::new(258, 54, 28, 6),
            purchase_price: 185_000_000.0,
            maintenance_cost_per_hour: 2_900.0,
            year_introduced: 2023,
            is_supersonic: false,
            pilots_required: 3,
            attendants_required: 9,
        },
        AircraftType {
            model_code: "B777-300ER".to_string(),
            name: "Boeing 777-300ER".to_string(),
            manufacturer: Manufacturer::Boeing,
            category: AircraftCategory::WideBody,
            max_range_km: 13_650,
            cruise_speed_kmh: 905,
            max_seats: 550,
            fuel_capacity_liters: 181_280.0,
            fuel_burn_liters_per_km: 12.1,
            min_runway_length: 3_000,
            default_seating: SeatingConfig::new(264, 48, 35, 8),
            purchase_price: 375_000_000.0,
            maintenance_cost_per_hour: 4_200.0,
            year_introduced: 2004,
            is_supersonic: false,
            pilots_required: 2,
            attendants_required: 10,
        },
        AircraftType {
            model_code: "A350-900".to_string(),
            name: "Airbus A350-900".to_string(),
            manufacturer: Manufacturer::Airbus,
            category: AircraftCategory::WideBody,
            max_range_km: 15_000,
            cruise_speed_kmh: 903,
            max_seats: 440,
            fuel_capacity_liters: 138_000.0,
            fuel_burn_liters_per_km: 9.4,
            min_runway_length: 2_600,
            default_seating: SeatingConfig::new(280, 40, 30, 6),
            purchase_price: 317_000_000.0,
            maintenance_cost_per_hour: 3_600.0,
            year_introduced: 2015,
            is_supersonic: false,
            pilots_required: 2,
            attendants_required: 9,
        },
        AircraftType {
            model_code: "B787-9".to_string(),
            name: "Boeing 787-9 Dreamliner".to_string(),
            manufacturer: Manufacturer::Boeing,
            category: AircraftCategory::WideBody,
            max_range_km: 14_140,
            cruise_speed_kmh: 903,
            max_seats: 420,
            fuel_capacity_liters: 126_370.0,
            fuel_burn_liters_per_km: 8.6,
            min_runway_length: 2_800,
            default_seating: SeatingConfig::new(246, 36, 28, 0),
            purchase_price: 292_000_000.0,
            maintenance_cost_per_hour: 3_300.0,
            year_introduced: 2014,
            is_supersonic: false,
            pilots_required: 2,
            attendants_required: 8,
        },
        AircraftType {
            model_code: "A320NEO".to_string(),
            name: "Airbus A320neo".to_string(),
            manufacturer: Manufacturer::Airbus,
            category: AircraftCategory::NarrowBody,
            max_range_km: 6_300,
            cruise_speed_kmh: 833,
            max_seats: 230,
            fuel_capacity_liters: 26_730.0,
            fuel_burn_liters_per_km: 2.8,
            min_runway_length: 1_900,
            default_seating: SeatingConfig::new(150, 24, 12, 0),
            purchase_price: 110_000_000.0,
            maintenance_cost_per_hour: 1_450.0,
            year_introduced: 2016,
            is_supersonic: false,
            pilots_required: 2,
            attendants_required: 4,
        },
    ]
}
