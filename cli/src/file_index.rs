//! A ledger index backed by a saved JSON response.

use std::future::{ready, Future};
use std::path::Path;

use serde::Deserialize;
use stampwallet_types::{
    GetAccountTransactionsArgs, GetTransactionsResponse, GetTransactionsResult,
};
use stampwallet_wallet_core::{TransactionIndex, WalletError};

/// Either a bare response or the `Ok`/`Err` envelope the index returns.
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedResponse {
    Envelope(GetTransactionsResult),
    Bare(GetTransactionsResponse),
}

/// Serves pages out of one saved index response.
///
/// Queries are answered as the index would: newest first, below `start`,
/// at most `max_results` records.
pub struct FileIndex {
    saved: GetTransactionsResponse,
}

impl FileIndex {
    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        let saved: SavedResponse = serde_json::from_str(json)
            .map_err(|e| WalletError::Index(format!("invalid saved response: {e}")))?;
        let saved = match saved {
            SavedResponse::Envelope(result) => result
                .into_result()
                .map_err(|e| WalletError::IndexRejected(e.message))?,
            SavedResponse::Bare(response) => response,
        };
        Ok(Self { saved })
    }

    pub fn from_file(path: &Path) -> Result<Self, WalletError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| WalletError::Index(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    fn page(&self, args: &GetAccountTransactionsArgs) -> GetTransactionsResponse {
        let mut transactions: Vec<_> = self
            .saved
            .transactions
            .iter()
            .filter(|tx| args.start.map_or(true, |start| tx.id < start))
            .cloned()
            .collect();
        transactions.sort_by(|a, b| b.id.cmp(&a.id));
        transactions.truncate(usize::try_from(args.max_results).unwrap_or(usize::MAX));

        let oldest_tx_id = self
            .saved
            .oldest_tx_id
            .or_else(|| self.saved.transactions.iter().map(|tx| tx.id).min());
        GetTransactionsResponse {
            balance: self.saved.balance,
            transactions,
            oldest_tx_id,
        }
    }
}

impl TransactionIndex for FileIndex {
    fn get_account_transactions(
        &self,
        args: GetAccountTransactionsArgs,
    ) -> impl Future<Output = Result<GetTransactionsResponse, WalletError>> + Send {
        ready(Ok(self.page(&args)))
    }
}
