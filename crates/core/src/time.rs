//! Simulation time type
//!
//! Every change record carries the simulation time at which it was made.
//! History queries ask "what was the state at time T", so the only things a
//! container does with a `SimTime` are store it and compare it.
//!
//! ## Precision
//!
//! Simulation time is stored as whole microseconds since the start of the
//! replication. Fractional seconds are rounded to the nearest microsecond,
//! which keeps comparisons exact (no floating-point equality games when two
//! events share a time).
//!
//! ```
//! use tempora_core::SimTime;
//!
//! let t = SimTime::from_secs_f64(2.5);
//! assert_eq!(t, SimTime::from_millis(2_500));
//! assert!(t < SimTime::from_secs(3));
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Microsecond-precision simulation time
///
/// ## Invariants
///
/// - Never negative (`u64`)
/// - Totally ordered
/// - `SimTime::ZERO` is the start of the replication
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTime(u64);

impl SimTime {
    /// Start of the replication
    pub const ZERO: SimTime = SimTime(0);

    /// Latest representable time
    pub const MAX: SimTime = SimTime(u64::MAX);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create from microseconds since start
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        SimTime(micros)
    }

    /// Create from milliseconds since start
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        SimTime(millis.saturating_mul(1_000))
    }

    /// Create from whole seconds since start
    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        SimTime(secs.saturating_mul(1_000_000))
    }

    /// Create from fractional seconds since start
    ///
    /// Rounds to the nearest microsecond. Negative and NaN inputs map to
    /// `ZERO`, values past the range map to `MAX`.
    pub fn from_secs_f64(secs: f64) -> Self {
        // `as` saturates: NaN -> 0, negative -> 0, overflow -> u64::MAX
        SimTime((secs * 1_000_000.0).round() as u64)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Microseconds since start
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Seconds since start as a float
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    // =========================================================================
    // Duration Operations
    // =========================================================================

    /// Duration since an earlier time, `None` if `earlier` is later
    pub fn duration_since(&self, earlier: SimTime) -> Option<Duration> {
        self.0.checked_sub(earlier.0).map(Duration::from_micros)
    }

    /// Add a duration, saturating at `SimTime::MAX`
    pub fn saturating_add(&self, duration: Duration) -> Self {
        SimTime(self.0.saturating_add(duration_micros(duration)))
    }

    /// Subtract a duration, saturating at `SimTime::ZERO`
    pub fn saturating_sub(&self, duration: Duration) -> Self {
        SimTime(self.0.saturating_sub(duration_micros(duration)))
    }
}

fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

impl Default for SimTime {
    fn default() -> Self {
        SimTime::ZERO
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // "seconds.microseconds"
        write!(f, "{}.{:06}s", self.0 / 1_000_000, self.0 % 1_000_000)
    }
}

impl From<Duration> for SimTime {
    /// Time reached after `duration` has elapsed since start
    fn from(duration: Duration) -> Self {
        SimTime(duration_micros(duration))
    }
}
