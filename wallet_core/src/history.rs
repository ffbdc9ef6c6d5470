//! Paged transaction history, interpreted for display.

use stampwallet_ledger::{
    filter_by_direction, format_amount, interpret, DirectionFilter, TransactionView,
};
use stampwallet_types::{AccountIdentifier, GetAccountTransactionsArgs, GetTransactionsResponse};

use crate::{TransactionIndex, Wallet, WalletConfig, WalletError};

/// One page of history as the wallet shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryPage {
    /// Views newest first, after the direction filter.
    pub views: Vec<TransactionView>,
    /// Current account balance reported by the index.
    pub balance_e8s: u64,
    pub balance_display: String,
    /// `start` for the following page, if the index has older transactions.
    pub next_start: Option<u64>,
}

/// Loads account history from a [`TransactionIndex`] and interprets it.
pub struct HistoryService<I> {
    index: I,
    config: WalletConfig,
}

impl<I: TransactionIndex> HistoryService<I> {
    pub fn new(index: I, config: WalletConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Load the page of `wallet`'s history ending just below `start`.
    ///
    /// Running balances are only filled on the first page (`start == None`),
    /// since the index reports the current balance only.
    pub async fn load_page(
        &self,
        wallet: &Wallet,
        start: Option<u64>,
        filter: DirectionFilter,
    ) -> Result<HistoryPage, WalletError> {
        self.load_page_for(wallet.account_id(), start, filter).await
    }

    /// [`load_page`](Self::load_page) for a bare account identifier in hex.
    pub async fn load_page_for_hex(
        &self,
        account_id: &str,
        start: Option<u64>,
        filter: DirectionFilter,
    ) -> Result<HistoryPage, WalletError> {
        let account = AccountIdentifier::from_hex(account_id)?;
        self.load_page_for(&account, start, filter).await
    }

    async fn load_page_for(
        &self,
        account: &AccountIdentifier,
        start: Option<u64>,
        filter: DirectionFilter,
    ) -> Result<HistoryPage, WalletError> {
        let response = self.fetch(account, start).await?;
        let next_start = next_start(&response, self.config.max_results);
        let current = start.is_none().then_some(response.balance);
        let options = self.config.interpret_options(current)?;
        let views = interpret(&response.transactions, &account.to_hex(), &options)?;

        Ok(HistoryPage {
            views: filter_by_direction(&views, filter),
            balance_e8s: response.balance,
            balance_display: format_amount(response.balance),
            next_start,
        })
    }

    /// Follow pages from the newest transaction, at most `max_pages` of them.
    ///
    /// The returned `next_start` is `Some` when the page limit cut the history short.
    pub async fn load_all(
        &self,
        wallet: &Wallet,
        filter: DirectionFilter,
    ) -> Result<HistoryPage, WalletError> {
        self.load_all_for(wallet.account_id(), filter).await
    }

    /// [`load_all`](Self::load_all) for a bare account identifier in hex.
    pub async fn load_all_for_hex(
        &self,
        account_id: &str,
        filter: DirectionFilter,
    ) -> Result<HistoryPage, WalletError> {
        let account = AccountIdentifier::from_hex(account_id)?;
        self.load_all_for(&account, filter).await
    }

    async fn load_all_for(
        &self,
        account: &AccountIdentifier,
        filter: DirectionFilter,
    ) -> Result<HistoryPage, WalletError> {
        let mut transactions = Vec::new();
        let mut balance = None;
        let mut start = None;

        for _ in 0..self.config.max_pages {
            let response = self.fetch(account, start).await?;
            start = next_start(&response, self.config.max_results);
            balance.get_or_insert(response.balance);
            transactions.extend(response.transactions);
            if start.is_none() {
                break;
            }
        }

        let balance = balance.unwrap_or_default();
        let options = self.config.interpret_options(Some(balance))?;
        let views = interpret(&transactions, &account.to_hex(), &options)?;
        Ok(HistoryPage {
            views: filter_by_direction(&views, filter),
            balance_e8s: balance,
            balance_display: format_amount(balance),
            next_start: start,
        })
    }

    async fn fetch(
        &self,
        account: &AccountIdentifier,
        start: Option<u64>,
    ) -> Result<GetTransactionsResponse, WalletError> {
        let args = GetAccountTransactionsArgs {
            account_identifier: account.to_hex(),
            start,
            max_results: self.config.max_results,
        };
        let response = self.index.get_account_transactions(args).await?;
        tracing::info!(
            account = %account,
            start = ?start,
            count = response.transactions.len(),
            balance = response.balance,
            "fetched transaction page"
        );
        Ok(response)
    }
}

/// Smallest id on the page while older transactions remain.
///
/// With `oldest_tx_id` known, the page length does not matter: an index may
/// cap pages below `max_results`. Without it, only a full page continues.
fn next_start(response: &GetTransactionsResponse, max_results: u64) -> Option<u64> {
    let smallest = response.transactions.iter().map(|tx| tx.id).min()?;
    let more = match response.oldest_tx_id {
        Some(oldest) => smallest > oldest,
        None => max_results > 0 && response.transactions.len() as u64 >= max_results,
    };
    more.then_some(smallest)
}
