//! ICRC-1 accounts and transfer errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stampwallet_crypto::{derive_account_identifier, Principal};
use stampwallet_ledger::format_amount;
use stampwallet_types::{AccountIdentifier, Subaccount};

/// An ICRC-1 account: an owner and an optional subaccount.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub owner: Principal,
    #[serde(default)]
    pub subaccount: Option<Subaccount>,
}

impl Account {
    /// The subaccount if it is set, otherwise the all-zero default.
    pub fn effective_subaccount(&self) -> &Subaccount {
        self.subaccount.as_ref().unwrap_or(&Subaccount::DEFAULT)
    }

    /// The legacy account identifier this account maps to.
    pub fn account_identifier(&self) -> AccountIdentifier {
        derive_account_identifier(&self.owner, Some(self.effective_subaccount()))
    }
}

impl From<Principal> for Account {
    fn from(owner: Principal) -> Self {
        Self {
            owner,
            subaccount: None,
        }
    }
}

/// Rejection reasons of an ICRC-1 transfer, with messages fit for the wallet UI.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferError {
    #[error("fee must be {}", fmt_e8s(.expected_fee))]
    BadFee { expected_fee: u128 },

    #[error("burn amount must be at least {}", fmt_e8s(.min_burn_amount))]
    BadBurn { min_burn_amount: u128 },

    #[error("insufficient funds: balance is {}", fmt_e8s(.balance))]
    InsufficientFunds { balance: u128 },

    #[error("transaction is too old")]
    TooOld,

    #[error("transaction was created in the future (ledger time {ledger_time})")]
    CreatedInFuture { ledger_time: u64 },

    #[error("ledger is temporarily unavailable, try again later")]
    TemporarilyUnavailable,

    #[error("duplicate of transaction {duplicate_of}")]
    Duplicate { duplicate_of: u128 },

    #[error("ledger error {error_code}: {message}")]
    GenericError { error_code: u128, message: String },
}

fn fmt_e8s(e8s: &u128) -> String {
    u64::try_from(*e8s)
        .map(format_amount)
        .unwrap_or_else(|_| format!("{e8s} e8s"))
}
