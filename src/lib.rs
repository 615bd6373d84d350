//! Deterministic simulation core for an airline management game.
//!
//! The crate holds the game's rules — demand, pricing, departures,
//! arrivals, wear, maintenance and the weekly financial cycle — behind a
//! plain Rust API. It owns no clock, no I/O and no global state: every
//! operation takes the [`airline::Airline`] aggregate, the current
//! [`sim_time::Timestamp`] and an RNG, and either mutates the aggregate
//! or fails as a complete no-op with an [`error::OpsError`]. Given the
//! same seed and the same call sequence a playthrough replays exactly.

pub mod aircraft;
pub mod airline;
pub mod airport;
pub mod arrival;
pub mod demand;
pub mod departure;
pub mod error;
pub mod finance;
pub mod fleet;
pub mod geo;
pub mod maintenance;
pub mod pricing;
pub mod route;
pub mod seed;
pub mod sim_time;

#[cfg(test)]
mod testkit;
