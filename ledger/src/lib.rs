//! Ledger transaction interpreter.
//!
//! Turns raw index records into display-ready views relative to one account:
//! direction (sent, received, minted, burned, unknown), counterparty, amount,
//! timestamp and the balance right after each transaction. Everything here is
//! a pure function of its inputs.

pub mod balance;
pub mod classify;
pub mod error;
pub mod format;
pub mod view;

pub use balance::{apply_running_balance, net_effect};
pub use classify::{
    classify_direction, extract_amount, extract_counterparty, extract_fee, Counterparty,
};
pub use error::OptionParseError;
pub use format::{
    format_address, format_amount, format_timestamp, utc_offset, AddressMode, NOT_AVAILABLE,
};
pub use view::{
    filter_by_direction, interpret, DirectionFilter, InterpretOptions, TransactionView,
};
