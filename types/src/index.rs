//! Query and response shapes of the ledger index `get_account_identifier_transactions` call.

use serde::{Deserialize, Serialize};

use crate::TransactionWithId;

/// Arguments for fetching one page of an account's transactions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountTransactionsArgs {
    /// 64-char hex account identifier.
    pub account_identifier: String,
    /// Return transactions with ids strictly below this one; `None` starts at the newest.
    #[serde(default)]
    pub start: Option<u64>,
    pub max_results: u64,
}

/// A page of transactions, newest first, plus the account's current balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionsResponse {
    /// Current balance in e8s.
    pub balance: u64,
    pub transactions: Vec<TransactionWithId>,
    /// Id of the oldest transaction the index knows for this account.
    #[serde(default)]
    pub oldest_tx_id: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransactionsError {
    pub message: String,
}

/// Result envelope returned by the index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GetTransactionsResult {
    Ok(GetTransactionsResponse),
    Err(GetTransactionsError),
}

impl GetTransactionsResult {
    pub fn into_result(self) -> Result<GetTransactionsResponse, GetTransactionsError> {
        match self {
            Self::Ok(response) => Ok(response),
            Self::Err(err) => Err(err),
        }
    }
}
