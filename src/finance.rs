use crate::airline::Airline;
use crate::error::OpsError;
use crate::sim_time::Timestamp;
use log::info;

/// Length of the rolling payroll period, in days.
pub const DAYS_PER_FINANCIAL_WEEK: f64 = 7.0;

/// Market fuel price band, dollars per liter.
pub const MIN_FUEL_PRICE: f64 = 0.45;
pub const MAX_FUEL_PRICE: f64 = 1.40;

/// Crew happiness below this costs reputation every settled week.
const HAPPINESS_PENALTY_THRESHOLD: f64 = 0.7;
const REPUTATION_PENALTY_PER_WEEK: f64 = 0.01;

/// Outcome of one financial-cycle tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementResult {
    /// True when at least one week of payroll was deducted this tick.
    pub payroll_settled: bool,
    pub weeks_settled: u32,
    pub payroll_deducted: f64,
}

/// A fuel purchase as executed (may be capped by tank headroom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelReceipt {
    pub liters_purchased: f64,
    pub cost: f64,
    /// Effective price paid per liter, after the airline's discount.
    pub price_per_liter: f64,
}

/// Advance the financial week and settle any payroll that came due.
///
/// Elapsed days accumulate fractionally against `last_login`; whole
/// weeks are settled in a single deduction and the remainder carries
/// over. Replaying with an unchanged `now` deducts nothing, so the
/// cycle is idempotent per elapsed real time — the caller persists
/// `last_login` between ticks.
///
/// Each settled week also drifts reputation: unhappy crew (< 0.7 in any
/// category) costs a point, and a running marketing campaign earns 1%
/// of its effectiveness.
pub fn settle_financials(airline: &mut Airline, now: Timestamp) -> SettlementResult {
    let days_elapsed = now.days_since(airline.last_login).max(0.0);
    airline.days_into_financial_week += days_elapsed;
    airline.last_login = now;

    let weeks = (airline.days_into_financial_week / DAYS_PER_FINANCIAL_WEEK).floor() as u32;
    if weeks == 0 {
        return SettlementResult {
            payroll_settled: false,
            weeks_settled: 0,
            payroll_deducted: 0.0,
        };
    }
    airline.days_into_financial_week -= f64::from(weeks) * DAYS_PER_FINANCIAL_WEEK;

    // A new financial week begins: restart the weekly flow counters,
    // then book the payroll into the fresh week.
    airline.weekly_spent = 0.0;
    airline.weekly_earned = 0.0;

    let payroll = airline.weekly_payroll() * f64::from(weeks);
    airline.debit(payroll);

    let mut drift = 0.0;
    if airline.pilot_happiness < HAPPINESS_PENALTY_THRESHOLD
        || airline.attendant_happiness < HAPPINESS_PENALTY_THRESHOLD
        || airline.maintenance_crew_happiness < HAPPINESS_PENALTY_THRESHOLD
    {
        drift -= REPUTATION_PENALTY_PER_WEEK * f64::from(weeks);
    }
    if airline.campaign_running {
        if let Some(effectiveness) = airline.campaign_effectiveness {
            drift += effectiveness * 0.01 * f64::from(weeks);
        }
    }
    airline.reputation = (airline.reputation + drift).clamp(0.0, 1.0);

    info!(
        "{}: settled {weeks} week(s) of payroll, ${payroll:.0}",
        airline.airline_name
    );
    SettlementResult {
        payroll_settled: true,
        weeks_settled: weeks,
        payroll_deducted: payroll,
    }
}

/// Buy reserve fuel at the current market price.
///
/// The order is capped at tank headroom; the cost uses the airline's
/// negotiated discount. Heavy buying pushes the market price up inside
/// the [0.45, 1.40] band.
pub fn purchase_fuel(airline: &mut Airline, liters: f64) -> Result<FuelReceipt, OpsError> {
    let price_per_liter = airline.last_fuel_price * airline.fuel_discount_multiplier;
    if liters <= 0.0 {
        return Ok(FuelReceipt {
            liters_purchased: 0.0,
            cost: 0.0,
            price_per_liter,
        });
    }

    let headroom = (airline.max_fuel_liters - airline.fuel_held_liters).max(0.0);
    let liters_purchased = liters.min(headroom);
    let cost = liters_purchased * price_per_liter;
    if cost > airline.account_balance {
        return Err(OpsError::InsufficientFunds {
            required: cost,
            balance: airline.account_balance,
        });
    }

    airline.debit(cost);
    airline.fuel_held_liters += liters_purchased;

    let demand_pressure = liters_purchased / airline.max_fuel_liters;
    airline.last_fuel_price =
        (airline.last_fuel_price * (1.0 + 0.2 * demand_pressure)).clamp(MIN_FUEL_PRICE, MAX_FUEL_PRICE);

    Ok(FuelReceipt {
        liters_purchased,
        cost,
        price_per_liter,
    })
}
