//! Ledger operations and transactions as reported by the ledger index.
//!
//! Account fields are kept as the text the index sent. The interpreter compares
//! them case-insensitively against the reference account and never rejects a
//! record for carrying an odd-looking address.
//!
//! Wire form of an operation is externally tagged: `{"Transfer": {...}}`. A tag
//! this crate does not know decodes to [`LedgerOperation::Unrecognized`] so that
//! newer index versions never break history display.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{Timestamp, Tokens};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Tokens,
    pub fee: Tokens,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mint {
    pub to: String,
    pub amount: Tokens,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burn {
    pub from: String,
    pub amount: Tokens,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approve {
    pub from: String,
    pub spender: String,
    pub allowance: Tokens,
    #[serde(default)]
    pub expected_allowance: Option<Tokens>,
    #[serde(default)]
    pub expires_at: Option<Timestamp>,
    pub fee: Tokens,
}

/// One ledger operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerOperation {
    Transfer(Transfer),
    Mint(Mint),
    Burn(Burn),
    Approve(Approve),
    /// An operation kind this version does not know; carries the wire tag.
    Unrecognized(String),
}

impl LedgerOperation {
    /// The wire tag of this operation.
    pub fn kind(&self) -> &str {
        match self {
            Self::Transfer(_) => "Transfer",
            Self::Mint(_) => "Mint",
            Self::Burn(_) => "Burn",
            Self::Approve(_) => "Approve",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl Serialize for LedgerOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Transfer(op) => map.serialize_entry("Transfer", op)?,
            Self::Mint(op) => map.serialize_entry("Mint", op)?,
            Self::Burn(op) => map.serialize_entry("Burn", op)?,
            Self::Approve(op) => map.serialize_entry("Approve", op)?,
            Self::Unrecognized(tag) => map.serialize_entry(tag, &())?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LedgerOperation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OperationVisitor;

        impl<'de> Visitor<'de> for OperationVisitor {
            type Value = LedgerOperation;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a single-entry map tagged with the operation kind")
            }

            // Payload-less variants may arrive as a bare tag string.
            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(LedgerOperation::Unrecognized(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let tag: String = map
                    .next_key()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let op = match tag.as_str() {
                    "Transfer" => LedgerOperation::Transfer(map.next_value()?),
                    "Mint" => LedgerOperation::Mint(map.next_value()?),
                    "Burn" => LedgerOperation::Burn(map.next_value()?),
                    "Approve" => LedgerOperation::Approve(map.next_value()?),
                    _ => {
                        map.next_value::<IgnoredAny>()?;
                        LedgerOperation::Unrecognized(tag)
                    }
                };
                if map.next_key::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("operation map must have exactly one entry"));
                }
                Ok(op)
            }
        }

        deserializer.deserialize_any(OperationVisitor)
    }
}

/// An immutable ledger transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub memo: u64,
    pub operation: LedgerOperation,
    /// Caller-supplied creation time.
    #[serde(default)]
    pub created_at_time: Option<Timestamp>,
    /// Time the ledger recorded the block.
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

impl Transaction {
    /// Ledger timestamp, falling back to the caller-supplied creation time.
    pub fn effective_time(&self) -> Option<Timestamp> {
        self.timestamp.or(self.created_at_time)
    }
}

/// A transaction paired with its monotonic ledger sequence number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionWithId {
    pub id: u64,
    pub transaction: Transaction,
}
