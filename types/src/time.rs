//! Ledger timestamps.
//!
//! The ledger stamps transactions with nanoseconds since the Unix epoch (UTC).
//! On the wire they travel as `{"timestamp_nanos": n}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Nanoseconds since the Unix epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    timestamp_nanos: u64,
}

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self { timestamp_nanos: 0 };

    pub fn from_nanos(nanos: u64) -> Self {
        Self {
            timestamp_nanos: nanos,
        }
    }

    /// The current system time. A clock set before the epoch reads as the epoch.
    pub fn now() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Self::from_nanos(nanos)
    }

    pub fn as_nanos(&self) -> u64 {
        self.timestamp_nanos
    }

    /// Truncated to millisecond precision.
    pub fn as_millis(&self) -> u64 {
        self.timestamp_nanos / NANOS_PER_MILLI
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.timestamp_nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_truncate() {
        assert_eq!(Timestamp::from_nanos(1_999_999).as_millis(), 1);
        assert_eq!(Timestamp::EPOCH.as_millis(), 0);
    }

    #[test]
    fn wire_shape() {
        let json = serde_json::to_string(&Timestamp::from_nanos(5)).unwrap();
        assert_eq!(json, r#"{"timestamp_nanos":5}"#);
    }

    #[test]
    fn now_is_after_2020() {
        assert!(Timestamp::now().as_nanos() > 1_577_836_800_000_000_000);
    }
}
