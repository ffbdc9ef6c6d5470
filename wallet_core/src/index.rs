//! Access to the ledger index.
//!
//! The index is an external service answering `get_account_identifier_transactions`.
//! [`TransactionIndex`] is the seam; [`IndexClient`] talks to a JSON gateway over
//! HTTP, and tests substitute `stampwallet_nullables::NullIndex`.

use std::future::Future;
use std::time::Duration;

use stampwallet_types::{GetAccountTransactionsArgs, GetTransactionsResponse, GetTransactionsResult};

use crate::WalletError;

/// Source of account transaction pages.
pub trait TransactionIndex {
    /// Fetch one page of transactions for `args.account_identifier`, newest first.
    fn get_account_transactions(
        &self,
        args: GetAccountTransactionsArgs,
    ) -> impl Future<Output = Result<GetTransactionsResponse, WalletError>> + Send;
}

/// HTTP client for a ledger index JSON gateway.
///
/// Each query is a POST of the arguments as JSON; the body of the answer is the
/// `Ok`/`Err` result envelope.
#[derive(Clone)]
pub struct IndexClient {
    http: reqwest::Client,
    index_url: String,
}

impl IndexClient {
    /// Create a client targeting `index_url` (e.g. `http://127.0.0.1:8080/transactions`).
    pub fn new(index_url: impl Into<String>, timeout: Duration) -> Result<Self, WalletError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| WalletError::Index(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            index_url: index_url.into(),
        })
    }

    /// The configured index URL.
    pub fn index_url(&self) -> &str {
        &self.index_url
    }
}

impl TransactionIndex for IndexClient {
    fn get_account_transactions(
        &self,
        args: GetAccountTransactionsArgs,
    ) -> impl Future<Output = Result<GetTransactionsResponse, WalletError>> + Send {
        let request = self.http.post(&self.index_url).json(&args);
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| WalletError::Index(format!("request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(WalletError::Index(format!(
                    "index returned HTTP {}",
                    response.status()
                )));
            }

            let result: GetTransactionsResult = response
                .json()
                .await
                .map_err(|e| WalletError::Index(format!("invalid index response: {e}")))?;

            result
                .into_result()
                .map_err(|e| WalletError::IndexRejected(e.message))
        }
    }
}
