//! Direction of a transaction relative to a reference account.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a transaction moved funds for the account it is viewed from.
///
/// `Unknown` is a value, not an error: it is the outcome whenever a record
/// cannot be attributed to the reference account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Sent,
    Received,
    Minted,
    Burned,
    Unknown,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Received => "received",
            Self::Minted => "minted",
            Self::Burned => "burned",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
