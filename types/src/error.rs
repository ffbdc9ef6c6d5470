//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the stamp wallet core.
///
/// Only malformed inputs to the core raise these; ambiguous ledger data
/// degrades to [`crate::Direction::Unknown`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StampError {
    #[error("invalid principal: {0}")]
    InvalidPrincipal(String),

    #[error("invalid account identifier: {0}")]
    InvalidAccountIdentifier(String),

    #[error("invalid subaccount: {0}")]
    InvalidSubaccount(String),

    #[error("invalid UTC offset: {0} minutes")]
    InvalidTimeZone(i32),
}
