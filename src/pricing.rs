use crate::aircraft::{SeatClass, SeatingConfig};
use serde::{Deserialize, Serialize};

/// Floor of the price-elasticity demand multiplier.
pub const MULTIPLIER_MIN: f64 = 0.3;

/// Ceiling of the price-elasticity demand multiplier.
pub const MULTIPLIER_MAX: f64 = 1.5;

/// Per-seat fares for each cabin class, in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FareTable {
    pub economy: f64,
    pub premium_economy: f64,
    pub business: f64,
    pub first: f64,
}

impl FareTable {
    pub fn new(economy: f64, premium_economy: f64, business: f64, first: f64) -> Self {
        Self {
            economy,
            premium_economy,
            business,
            first,
        }
    }

    pub fn fare(&self, class: SeatClass) -> f64 {
        match class {
            SeatClass::Economy => self.economy,
            SeatClass::PremiumEconomy => self.premium_economy,
            SeatClass::Business => self.business,
            SeatClass::First => self.first,
        }
    }
}

/// Price sensitivity per cabin class. Premium travelers care least about
/// the fare.
pub fn elasticity(class: SeatClass) -> f64 {
    match class {
        SeatClass::Economy => 1.5,
        SeatClass::PremiumEconomy => 1.3,
        SeatClass::Business => 1.0,
        SeatClass::First => 0.8,
    }
}

/// Predicts the "fair" market fare per kilometer for a seat class, given
/// the airline's reputation.
///
/// The prediction model itself lives outside the core (the host may ship
/// a learned model); the simulation only consumes it through this trait.
pub trait FarePredictor {
    fn fare_per_km(&self, reputation: f64, class: SeatClass) -> f64;
}

/// Built-in fare predictor: flat per-km class rates scaled by reputation.
///
/// A reputable airline commands higher fair fares, so the same sticker
/// price reads as a better deal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseFareModel;

/// Dollars per km for an average-reputation airline, per class.
const BASE_RATE_ECONOMY: f64 = 0.11;
const BASE_RATE_PREMIUM_ECONOMY: f64 = 0.18;
const BASE_RATE_BUSINESS: f64 = 0.30;
const BASE_RATE_FIRST: f64 = 0.55;

impl FarePredictor for BaseFareModel {
    fn fare_per_km(&self, reputation: f64, class: SeatClass) -> f64 {
        let rate = match class {
            SeatClass::Economy => BASE_RATE_ECONOMY,
            SeatClass::PremiumEconomy => BASE_RATE_PREMIUM_ECONOMY,
            SeatClass::Business => BASE_RATE_BUSINESS,
            SeatClass::First => BASE_RATE_FIRST,
        };
        rate * (0.75 + 0.5 * reputation.clamp(0.0, 1.0))
    }
}

/// Fair reference fares for a route: per-km prediction times distance.
pub fn reference_fares(
    predictor: &impl FarePredictor,
    reputation: f64,
    distance_km: f64,
) -> FareTable {
    FareTable {
        economy: predictor.fare_per_km(reputation, SeatClass::Economy) * distance_km,
        premium_economy: predictor.fare_per_km(reputation, SeatClass::PremiumEconomy) * distance_km,
        business: predictor.fare_per_km(reputation, SeatClass::Business) * distance_km,
        first: predictor.fare_per_km(reputation, SeatClass::First) * distance_km,
    }
}

/// How player pricing scales demand for one cabin class.
///
/// `(user / reference) ^ -elasticity`, clamped to [0.3, 1.5]: overpricing
/// can at worst lose 70% of baseline demand, underpricing can at best
/// gain 50%. A non-positive reference fare disables the adjustment.
pub fn demand_multiplier(user_fare: f64, reference_fare: f64, elasticity: f64) -> f64 {
    if reference_fare <= 0.0 {
        return 1.0;
    }
    (user_fare / reference_fare)
        .powf(-elasticity)
        .clamp(MULTIPLIER_MIN, MULTIPLIER_MAX)
}

/// Seats actually sold per class: baseline demand scaled by the price
/// multiplier, floored, and capped by the physical cabin layout.
pub fn booked_seats(
    baseline: &SeatingConfig,
    pricing: &FareTable,
    reference: &FareTable,
    layout: &SeatingConfig,
) -> SeatingConfig {
    let mut booked = SeatingConfig::default();
    for class in SeatClass::ALL {
        let multiplier = demand_multiplier(pricing.fare(class), reference.fare(class), elasticity(class));
        let adjusted = (f64::from(baseline.seats(class)) * multiplier).floor() as u32;
        let seats = adjusted.min(layout.seats(class));
        match class {
            SeatClass::Economy => booked.economy = seats,
            SeatClass::PremiumEconomy => booked.premium_economy = seats,
            SeatClass::Business => booked.business = seats,
            SeatClass::First => booked.first = seats,
        }
    }
    booked
}

/// Ticket revenue for a load of booked seats at the assigned fares.
pub fn revenue(booked: &SeatingConfig, pricing: &FareTable) -> f64 {
    SeatClass::ALL
        .iter()
        .map(|&class| f64::from(booked.seats(class)) * pricing.fare(class))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parity_multiplier_is_one() {
        for class in SeatClass::ALL {
            let m = demand_multiplier(250.0, 250.0, elasticity(class));
            assert!((m - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_nonpositive_reference_guard() {
        assert_eq!(demand_multiplier(300.0, 0.0, 1.5), 1.0);
        assert_eq!(demand_multiplier(300.0, -10.0, 1.5), 1.0);
    }

    #[test]
    fn test_overpricing_loses_demand_underpricing_gains() {
        let e = elasticity(SeatClass::Economy);
        assert!(demand_multiplier(400.0, 200.0, e) < 1.0);
        assert!(demand_multiplier(100.0, 200.0, e) > 1.0);
        // Extreme prices hit the clamps
        assert_eq!(demand_multiplier(10_000.0, 100.0, e), MULTIPLIER_MIN);
        assert_eq!(demand_multiplier(1.0, 100.0, e), MULTIPLIER_MAX);
    }

    #[test]
    fn test_first_class_least_price_sensitive() {
        // Same 40% overpricing hurts economy the most
        let overpriced = |class| demand_multiplier(140.0, 100.0, elasticity(class));
        assert!(overpriced(SeatClass::Economy) < overpriced(SeatClass::PremiumEconomy));
        assert!(overpriced(SeatClass::PremiumEconomy) < overpriced(SeatClass::Business));
        assert!(overpriced(SeatClass::Business) < overpriced(SeatClass::First));
    }

    #[test]
    fn test_booked_never_exceeds_layout() {
        let baseline = SeatingConfig::new(300, 60, 40, 10);
        let layout = SeatingConfig::new(200, 30, 20, 4);
        // Heavy discounts maximize demand
        let pricing = FareTable::new(10.0, 20.0, 30.0, 50.0);
        let reference = FareTable::new(150.0, 250.0, 400.0, 700.0);

        let booked = booked_seats(&baseline, &pricing, &reference, &layout);
        for class in SeatClass::ALL {
            assert!(booked.seats(class) <= layout.seats(class), "{class:?}");
        }
    }

    #[test]
    fn test_revenue_sums_per_class() {
        let booked = SeatingConfig::new(100, 10, 5, 1);
        let pricing = FareTable::new(120.0, 220.0, 450.0, 900.0);
        let expected = 100.0 * 120.0 + 10.0 * 220.0 + 5.0 * 450.0 + 900.0;
        assert!((revenue(&booked, &pricing) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_reference_fares_scale_with_distance_and_reputation() {
        let short = reference_fares(&BaseFareModel, 0.8, 1_000.0);
        let long = reference_fares(&BaseFareModel, 0.8, 2_000.0);
        assert!((long.economy - 2.0 * short.economy).abs() < 1e-9);

        let weak = reference_fares(&BaseFareModel, 0.1, 1_000.0);
        assert!(weak.first < short.first);
    }

    proptest! {
        #[test]
        fn prop_multiplier_bounded(
            user in 0.01f64..1e6,
            reference in 0.01f64..1e6,
            class_idx in 0usize..4,
        ) {
            let m = demand_multiplier(user, reference, elasticity(SeatClass::ALL[class_idx]));
            prop_assert!((MULTIPLIER_MIN..=MULTIPLIER_MAX).contains(&m));
        }
    }
}
