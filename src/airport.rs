use serde::{Deserialize, Serialize};

/// Continental region an airport belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Asia,
    Europe,
    Africa,
    NorthAmerica,
    SouthAmerica,
    AustraliaAndOceania,
}

/// Demand attributes of an airport's passenger market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirportDemand {
    /// Relative passenger demand, 0.0–10.0
    pub passenger_demand: f64,
    /// Relative cargo demand
    pub cargo_demand: f64,
    /// Share of travellers flying on business, 0.0–1.0
    pub business_travel_ratio: f64,
    /// Seasonal tourism influence
    pub tourism_boost: f64,
}

/// Physical handling capacity of an airport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirportFacilities {
    /// Passengers per day
    pub terminal_capacity: u32,
    /// Tons per day
    pub cargo_capacity: u32,
    pub gates_available: u32,
    /// 0.0–1.0
    pub slot_efficiency: f64,
}

/// Immutable geographic and economic facts about an airport.
///
/// Airports are reference data owned by the catalog and copied by value
/// into routes and fleet items — there are no back-pointers. Identity is
/// the ICAO code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata: String,
    pub icao: String,
    pub region: Region,
    pub latitude: f64,
    pub longitude: f64,
    /// Longest runway in meters
    pub runway_length: u32,
    /// Field elevation in meters
    pub elevation: i32,
    pub demand: AirportDemand,
    pub facilities: AirportFacilities,
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.icao == other.icao
    }
}

impl Eq for Airport {}

/// Read-only airport reference data, passed explicitly into operations
/// that need lookups. Not a process-wide singleton.
#[derive(Debug, Clone)]
pub struct AirportCatalog {
    airports: Vec<Airport>,
}

impl AirportCatalog {
    /// Build a catalog from an arbitrary airport list (e.g. loaded by the host).
    pub fn new(airports: Vec<Airport>) -> Self {
        Self { airports }
    }

    /// The airports shipped with the game.
    pub fn standard() -> Self {
        Self::new(standard_airports())
    }

    /// Look up an airport by ICAO code.
    pub fn get(&self, icao: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.icao == icao)
    }

    /// Look up an airport by IATA code.
    pub fn get_by_iata(&self, iata: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.iata == iata)
    }

    pub fn all(&self) -> &[Airport] {
        &self.airports
    }
}

fn airport(
    name: &str,
    city: &str,
    country: &str,
    iata: &str,
    icao: &str,
    region: Region,
    latitude: f64,
    longitude: f64,
    runway_length: u32,
    elevation: i32,
    demand: AirportDemand,
    facilities: AirportFacilities,
) -> Airport {
    Airport {
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        iata: iata.to_string(),
        icao: icao.to_string(),
        region,
        latitude,
        longitude,
        runway_length,
        elevation,
        demand,
        facilities,
    }
}

fn standard_airports() -> Vec<Airport> {
    vec![
        airport(
            "Adolfo Suárez Madrid-Barajas Airport",
            "Madrid",
            "Spain",
            "MAD",
            "LEMD",
            Region::Europe,
            40.4719,
            -3.5626,
            4_179,
            610,
            AirportDemand {
                passenger_demand: 8.8,
                cargo_demand: 7.8,
                business_travel_ratio: 0.65,
                tourism_boost: 0.88,
            },
            AirportFacilities {
                terminal_capacity: 165_000,
                cargo_capacity: 3_000,
                gates_available: 90,
                slot_efficiency: 0.88,
            },
        ),
        airport(
            "London Heathrow Airport",
            "London",
            "United Kingdom",
            "LHR",
            "EGLL",
            Region::Europe,
            51.4700,
            -0.4543,
            3_902,
            25,
            AirportDemand {
                passenger_demand: 10.0,
                cargo_demand: 8.8,
                business_travel_ratio: 0.80,
                tourism_boost: 0.85,
            },
            AirportFacilities {
                terminal_capacity: 225_000,
                cargo_capacity: 3_800,
                gates_available: 115,
                slot_efficiency: 0.93,
            },
        ),
        airport(
            "Stockholm Arlanda Airport",
            "Stockholm",
            "Sweden",
            "ARN",
            "ESSA",
            Region::Europe,
            59.6498,
            17.9238,
            3_301,
            42,
            AirportDemand {
                passenger_demand: 8.4,
                cargo_demand: 7.5,
                business_travel_ratio: 0.70,
                tourism_boost: 0.78,
            },
            AirportFacilities {
                terminal_capacity: 155_000,
                cargo_capacity: 2_800,
                gates_available: 75,
                slot_efficiency: 0.89,
            },
        ),
        airport(
            "John F. Kennedy International Airport",
            "New York",
            "United States",
            "JFK",
            "KJFK",
            Region::NorthAmerica,
            40.6413,
            -73.7781,
            4_423,
            4,
            AirportDemand {
                passenger_demand: 9.5,
                cargo_demand: 8.5,
                business_travel_ratio: 0.75,
                tourism_boost: 0.80,
            },
            AirportFacilities {
                terminal_capacity: 200_000,
                cargo_capacity: 3_500,
                gates_available: 128,
                slot_efficiency: 0.91,
            },
        ),
        airport(
            "Singapore Changi Airport",
            "Singapore",
            "Singapore",
            "SIN",
            "WSSS",
            Region::Asia,
            1.3644,
            103.9915,
            4_000,
            7,
            AirportDemand {
                passenger_demand: 9.8,
                cargo_demand: 9.2,
                business_travel_ratio: 0.72,
                tourism_boost: 0.90,
            },
            AirportFacilities {
                terminal_capacity: 240_000,
                cargo_capacity: 4_200,
                gates_available: 135,
                slot_efficiency: 0.95,
            },
        ),
        airport(
            "Tokyo Haneda Airport",
            "Tokyo",
            "Japan",
            "HND",
            "RJTT",
            Region::Asia,
            35.5494,
            139.7798,
            3_360,
            11,
            AirportDemand {
                passenger_demand: 9.6,
                cargo_demand: 8.7,
                business_travel_ratio: 0.78,
                tourism_boost: 0.82,
            },
            AirportFacilities {
                terminal_capacity: 230_000,
                cargo_capacity: 3_600,
                gates_available: 110,
                slot_efficiency: 0.94,
            },
        ),
        airport(
            "Los Angeles International Airport",
            "Los Angeles",
            "United States",
            "LAX",
            "KLAX",
            Region::NorthAmerica,
            33.9416,
            -118.4085,
            3_685,
            38,
            AirportDemand {
                passenger_demand: 9.4,
                cargo_demand: 8.3,
                business_travel_ratio: 0.68,
                tourism_boost: 0.92,
            },
            AirportFacilities {
                terminal_capacity: 220_000,
                cargo_capacity: 3_400,
                gates_available: 135,
                slot_efficiency: 0.90,
            },
        ),
        airport(
            "Sydney Kingsford Smith Airport",
            "Sydney",
            "Australia",
            "SYD",
            "YSSY",
            Region::AustraliaAndOceania,
            -33.9399,
            151.1753,
            3_962,
            6,
            AirportDemand {
                passenger_demand: 9.0,
                cargo_demand: 7.8,
                business_travel_ratio: 0.65,
                tourism_boost: 0.95,
            },
            AirportFacilities {
                terminal_capacity: 180_000,
                cargo_capacity: 2_900,
                gates_available: 95,
                slot_efficiency: 0.88,
            },
        ),
        airport(
            "Dubai International Airport",
            "Dubai",
            "United Arab Emirates",
            "DXB",
            "OMDB",
            Region::Asia,
            25.2532,
            55.3657,
            4_000,
            19,
            AirportDemand {
                passenger_demand: 9.7,
                cargo_demand: 9.0,
                business_travel_ratio: 0.82,
                tourism_boost: 0.88,
            },
            AirportFacilities {
                terminal_capacity: 260_000,
                cargo_capacity: 4_500,
                gates_available: 150,
                slot_efficiency: 0.92,
            },
        ),
    ]
}
