//! Direction classification and field extraction for single operations.

use stampwallet_types::{AccountIdentifier, Direction, LedgerOperation};

use crate::NOT_AVAILABLE;

/// Both sides of an operation, `"N/A"` where the operation kind has none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counterparty {
    pub from: String,
    pub to: String,
}

/// Whether an address as sent by the index names `own`.
///
/// Malformed addresses simply do not match.
pub(crate) fn is_own(addr: &str, own: &AccountIdentifier) -> bool {
    AccountIdentifier::from_hex(addr).is_ok_and(|id| id == *own)
}

/// Classify `op` relative to `own`.
///
/// A self-transfer is `Sent`: the outgoing leg is checked first.
pub fn classify_direction(op: &LedgerOperation, own: &AccountIdentifier) -> Direction {
    match op {
        LedgerOperation::Transfer(t) if is_own(&t.from, own) => Direction::Sent,
        LedgerOperation::Transfer(t) if is_own(&t.to, own) => Direction::Received,
        LedgerOperation::Mint(m) if is_own(&m.to, own) => Direction::Minted,
        LedgerOperation::Burn(b) if is_own(&b.from, own) => Direction::Burned,
        LedgerOperation::Transfer(_)
        | LedgerOperation::Mint(_)
        | LedgerOperation::Burn(_)
        | LedgerOperation::Approve(_)
        | LedgerOperation::Unrecognized(_) => Direction::Unknown,
    }
}

pub fn extract_counterparty(op: &LedgerOperation) -> Counterparty {
    let (from, to) = match op {
        LedgerOperation::Transfer(t) => (t.from.as_str(), t.to.as_str()),
        LedgerOperation::Mint(m) => (NOT_AVAILABLE, m.to.as_str()),
        LedgerOperation::Burn(b) => (b.from.as_str(), NOT_AVAILABLE),
        LedgerOperation::Approve(a) => (a.from.as_str(), NOT_AVAILABLE),
        LedgerOperation::Unrecognized(_) => (NOT_AVAILABLE, NOT_AVAILABLE),
    };
    Counterparty {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// The balance-moving amount in e8s; 0 for approvals and unknown kinds.
pub fn extract_amount(op: &LedgerOperation) -> u64 {
    match op {
        LedgerOperation::Transfer(t) => t.amount.e8s(),
        LedgerOperation::Mint(m) => m.amount.e8s(),
        LedgerOperation::Burn(b) => b.amount.e8s(),
        LedgerOperation::Approve(_) | LedgerOperation::Unrecognized(_) => 0,
    }
}

/// The fee charged to the sender in e8s.
pub fn extract_fee(op: &LedgerOperation) -> u64 {
    match op {
        LedgerOperation::Transfer(t) => t.fee.e8s(),
        LedgerOperation::Approve(a) => a.fee.e8s(),
        LedgerOperation::Mint(_) | LedgerOperation::Burn(_) | LedgerOperation::Unrecognized(_) => 0,
    }
}
