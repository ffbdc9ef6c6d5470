//! Ledger time under test control.

use std::cell::Cell;
use std::time::Duration;

use stampwallet_types::Timestamp;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Stand-in for the ledger's block clock.
///
/// Reads return the same instant until a test moves it.
pub struct NullClock {
    now: Cell<Timestamp>,
}

impl NullClock {
    /// Frozen at `secs` seconds past the Unix epoch.
    pub fn at_secs(secs: u64) -> Self {
        Self::at(Timestamp::from_nanos(secs.saturating_mul(NANOS_PER_SEC)))
    }

    pub fn at(instant: Timestamp) -> Self {
        Self {
            now: Cell::new(instant),
        }
    }

    pub fn now(&self) -> Timestamp {
        self.now.get()
    }

    /// Move forward by `step`. Saturates at the last representable nanosecond.
    pub fn advance(&self, step: Duration) {
        let step = u64::try_from(step.as_nanos()).unwrap_or(u64::MAX);
        self.now
            .set(Timestamp::from_nanos(self.now().as_nanos().saturating_add(step)));
    }

    pub fn reset_to(&self, instant: Timestamp) {
        self.now.set(instant);
    }
}
