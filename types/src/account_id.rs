//! Legacy 32-byte account identifiers and 32-byte subaccounts.
//!
//! Layout: `crc32_be(hash) ‖ hash`, where `hash` is the 28-byte SHA-224 digest
//! computed by `stampwallet_crypto::derive_account_identifier`. The canonical
//! text form is 64 lowercase hex characters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::StampError;

/// Length of an account identifier in bytes.
pub const ACCOUNT_ID_LEN: usize = 32;
/// Length of the canonical hex form.
pub const ACCOUNT_ID_HEX_LEN: usize = 64;
/// Length of the CRC-32 prefix.
pub const CHECKSUM_LEN: usize = 4;

/// A 32-byte account identifier: 4-byte big-endian CRC-32 followed by a 28-byte digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountIdentifier([u8; ACCOUNT_ID_LEN]);

impl AccountIdentifier {
    pub fn new(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Assemble an identifier from a checksum and a digest.
    pub fn from_parts(checksum: [u8; CHECKSUM_LEN], hash: &[u8; 28]) -> Self {
        let mut bytes = [0u8; ACCOUNT_ID_LEN];
        bytes[..CHECKSUM_LEN].copy_from_slice(&checksum);
        bytes[CHECKSUM_LEN..].copy_from_slice(hash);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    /// The stored CRC-32 prefix.
    pub fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let mut out = [0u8; CHECKSUM_LEN];
        out.copy_from_slice(&self.0[..CHECKSUM_LEN]);
        out
    }

    /// The trailing 28-byte digest.
    pub fn hash(&self) -> &[u8] {
        &self.0[CHECKSUM_LEN..]
    }

    /// Lowercase hex, no separators, exactly 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse 64 hex characters (either case).
    ///
    /// The checksum is not checked here, so every 32-byte value round-trips.
    pub fn from_hex(s: &str) -> Result<Self, StampError> {
        if s.len() != ACCOUNT_ID_HEX_LEN {
            return Err(StampError::InvalidAccountIdentifier(format!(
                "expected {ACCOUNT_ID_HEX_LEN} hex characters, got {}",
                s.len()
            )));
        }
        let mut bytes = [0u8; ACCOUNT_ID_LEN];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| StampError::InvalidAccountIdentifier(format!("{s}: {e}")))?;
        Ok(Self(bytes))
    }

    /// Check that `s` is a well-formed identifier string and return its canonical
    /// (lowercase) form.
    pub fn validate_text(s: &str) -> Result<String, StampError> {
        Self::from_hex(s).map(|id| id.to_hex())
    }
}

impl fmt::Debug for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountIdentifier({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for AccountIdentifier {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for AccountIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Anything that can be compared as an account identifier: the typed value or
/// its text form as it arrives from the ledger index.
pub trait AccountIdLike {
    /// Lowercase text form used for comparison.
    fn canonical_text(&self) -> Cow<'_, str>;

    /// Case-insensitive identity of two identifiers.
    fn same_account<T: AccountIdLike + ?Sized>(&self, other: &T) -> bool {
        self.canonical_text() == other.canonical_text()
    }
}

impl AccountIdLike for AccountIdentifier {
    fn canonical_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_hex())
    }
}

impl AccountIdLike for str {
    fn canonical_text(&self) -> Cow<'_, str> {
        if self.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(self.to_ascii_lowercase())
        } else {
            Cow::Borrowed(self)
        }
    }
}

impl AccountIdLike for String {
    fn canonical_text(&self) -> Cow<'_, str> {
        self.as_str().canonical_text()
    }
}

// ── Subaccount ──────────────────────────────────────────────────────────

/// A 32-byte selector under a principal. All-zero is the default subaccount.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Subaccount(pub [u8; 32]);

impl Subaccount {
    /// The all-zero default subaccount.
    pub const DEFAULT: Self = Self([0u8; 32]);

    /// Build a subaccount from an index, stored big-endian in the trailing 8 bytes.
    pub fn from_index(index: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&index.to_be_bytes());
        Self(bytes)
    }

    /// Parse 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, StampError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| StampError::InvalidSubaccount(format!("{s}: {e}")))?;
        Ok(Self(bytes))
    }

    /// Build from a byte slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, StampError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            StampError::InvalidSubaccount(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Subaccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subaccount({})", hex::encode(self.0))
    }
}
