//! Fundamental types for the stamp wallet.
//!
//! This crate defines the values shared across every other crate in the workspace:
//! account identifiers and subaccounts, e8s token amounts, nanosecond timestamps,
//! ledger operations and transactions as returned by the ledger index, and the
//! transaction direction enum.

pub mod account_id;
pub mod amount;
pub mod direction;
pub mod error;
pub mod index;
pub mod operation;
pub mod time;

pub use account_id::{AccountIdLike, AccountIdentifier, Subaccount};
pub use amount::Tokens;
pub use direction::Direction;
pub use error::StampError;
pub use index::{
    GetAccountTransactionsArgs, GetTransactionsError, GetTransactionsResponse,
    GetTransactionsResult,
};
pub use operation::{
    Approve, Burn, LedgerOperation, Mint, Transaction, TransactionWithId, Transfer,
};
pub use time::Timestamp;
