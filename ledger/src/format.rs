//! Display formatting for amounts, addresses and timestamps.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use stampwallet_types::StampError;

use crate::OptionParseError;

/// Placeholder for a side or time an operation does not have. Never truncated.
pub const NOT_AVAILABLE: &str = "N/A";

/// e8s per unit of the last displayed digit (10⁸ / 10⁴).
const E8S_PER_STEP: u64 = 10_000;
/// Displayed steps per whole token.
const STEPS_PER_TOKEN: u64 = 10_000;
/// Characters kept at each end of a shortened address.
const ADDRESS_EDGE: usize = 7;
const ELLIPSIS: &str = "...";
const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %H:%M";
const NANOS_PER_MILLI: u64 = 1_000_000;

/// How much of an address to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressMode {
    /// First and last seven characters.
    #[default]
    Full,
    /// First seven characters only (narrow screens).
    Compact,
}

impl FromStr for AddressMode {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            _ => Err(OptionParseError::UnknownAddressMode(s.to_string())),
        }
    }
}

impl fmt::Display for AddressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::Compact => "compact",
        })
    }
}

/// e8s as whole tokens with exactly four fractional digits.
///
/// Rounds half up on the exact integer value, so 5_000 e8s shows as `0.0001`.
pub fn format_amount(e8s: u64) -> String {
    let mut steps = e8s / E8S_PER_STEP;
    if e8s % E8S_PER_STEP >= E8S_PER_STEP / 2 {
        steps += 1;
    }
    format!("{}.{:04}", steps / STEPS_PER_TOKEN, steps % STEPS_PER_TOKEN)
}

/// Shorten an address for display.
///
/// `"N/A"` and addresses already too short to shorten come back unchanged.
pub fn format_address(addr: &str, mode: AddressMode) -> String {
    if addr == NOT_AVAILABLE {
        return addr.to_string();
    }
    let len = addr.chars().count();
    let head: String = addr.chars().take(ADDRESS_EDGE).collect();
    match mode {
        AddressMode::Full if len > 2 * ADDRESS_EDGE => {
            let tail: String = addr.chars().skip(len - ADDRESS_EDGE).collect();
            format!("{head}{ELLIPSIS}{tail}")
        }
        AddressMode::Compact if len > ADDRESS_EDGE => format!("{head}{ELLIPSIS}"),
        _ => addr.to_string(),
    }
}

/// Render a ledger timestamp as `"{Mon} {D}, {YYYY}, {HH}:{MM}"` in `zone`.
///
/// Precision is cut to milliseconds first.
pub fn format_timestamp(nanos: u64, zone: &FixedOffset) -> String {
    i64::try_from(nanos / NANOS_PER_MILLI)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| utc.with_timezone(zone).format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// A fixed UTC offset from minutes east of Greenwich.
pub fn utc_offset(minutes: i32) -> Result<FixedOffset, StampError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(StampError::InvalidTimeZone(minutes))
}
