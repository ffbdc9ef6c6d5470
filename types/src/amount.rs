//! Token amounts in e8s.
//!
//! Amounts are integers denominated in e8s (1 e8 = 10⁻⁸ of the display unit).
//! On the wire they travel as `{"e8s": n}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of e8s in one whole token.
pub const E8S_PER_TOKEN: u64 = 100_000_000;

/// An amount of tokens, stored as e8s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tokens {
    e8s: u64,
}

impl Tokens {
    pub const ZERO: Self = Self { e8s: 0 };

    pub fn from_e8s(e8s: u64) -> Self {
        Self { e8s }
    }

    /// Whole tokens, saturating at `u64::MAX` e8s.
    pub fn from_tokens(units: u64) -> Self {
        Self {
            e8s: units.saturating_mul(E8S_PER_TOKEN),
        }
    }

    pub fn e8s(&self) -> u64 {
        self.e8s
    }

    pub fn is_zero(&self) -> bool {
        self.e8s == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.e8s.checked_add(other.e8s).map(Self::from_e8s)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.e8s.checked_sub(other.e8s).map(Self::from_e8s)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self::from_e8s(self.e8s.saturating_sub(other.e8s))
    }
}

impl Add for Tokens {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_e8s(self.e8s + rhs.e8s)
    }
}

impl Sub for Tokens {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_e8s(self.e8s - rhs.e8s)
    }
}

/// Full precision: whole units, a dot, and all eight fractional digits.
impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:08}",
            self.e8s / E8S_PER_TOKEN,
            self.e8s % E8S_PER_TOKEN
        )
    }
}
