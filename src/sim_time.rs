use serde::{Deserialize, Serialize};

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A wall-clock instant, in seconds since the start of the playthrough.
///
/// The simulation core never reads a clock: every operation takes the
/// current instant as a parameter, so a run is fully replayable given the
/// same inputs and the same RNG seed. The host decides what "now" means
/// (real time, accelerated game time, a test fixture).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Timestamp(f64);

impl Timestamp {
    pub fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self(hours * SECONDS_PER_HOUR)
    }

    pub fn from_days(days: f64) -> Self {
        Self(days * SECONDS_PER_DAY)
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// This instant shifted forward by `hours`.
    pub fn plus_hours(&self, hours: f64) -> Self {
        Self(self.0 + hours * SECONDS_PER_HOUR)
    }

    /// Hours elapsed since `earlier`. Negative if `earlier` is in the future.
    pub fn hours_since(&self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0) / SECONDS_PER_HOUR
    }

    /// Days elapsed since `earlier`. Negative if `earlier` is in the future.
    pub fn days_since(&self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0) / SECONDS_PER_DAY
    }
}
