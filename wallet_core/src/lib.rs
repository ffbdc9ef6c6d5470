//! Wallet core library.
//!
//! Provides what a wallet front-end needs on top of the pure codec and interpreter:
//! - Wallet identity (principal, subaccount, derived account identifier)
//! - ICRC-1 accounts and transfer error messages
//! - Access to the ledger index behind the [`TransactionIndex`] seam
//! - Paged transaction history ready for display
//! - TOML configuration

pub mod account;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod wallet;

pub use account::{Account, TransferError};
pub use config::WalletConfig;
pub use error::WalletError;
pub use history::{HistoryPage, HistoryService};
pub use index::{IndexClient, TransactionIndex};
pub use wallet::Wallet;
