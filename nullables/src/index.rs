//! Nullable ledger index: scripted responses, recorded queries.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::{ready, Future};

use stampwallet_types::{GetAccountTransactionsArgs, GetTransactionsResponse};
use stampwallet_wallet_core::{TransactionIndex, WalletError};

/// A test index that answers from a queue instead of the network.
///
/// Responses are handed out in the order they were pushed. Once the queue is
/// empty every query fails with [`WalletError::Index`].
pub struct NullIndex {
    responses: RefCell<VecDeque<Result<GetTransactionsResponse, WalletError>>>,
    requests: RefCell<Vec<GetAccountTransactionsArgs>>,
}

impl NullIndex {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Index with a single response queued.
    pub fn answering(response: GetTransactionsResponse) -> Self {
        let index = Self::new();
        index.push_response(response);
        index
    }

    /// Queue a successful response.
    pub fn push_response(&self, response: GetTransactionsResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: WalletError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// All queries received so far (for assertions).
    pub fn requests(&self) -> Vec<GetAccountTransactionsArgs> {
        self.requests.borrow().clone()
    }

    /// Clear all state.
    pub fn reset(&self) {
        self.responses.borrow_mut().clear();
        self.requests.borrow_mut().clear();
    }

    fn next_response(&self) -> Result<GetTransactionsResponse, WalletError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(WalletError::Index("no scripted response".to_string())))
    }
}

impl Default for NullIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionIndex for NullIndex {
    fn get_account_transactions(
        &self,
        args: GetAccountTransactionsArgs,
    ) -> impl Future<Output = Result<GetTransactionsResponse, WalletError>> + Send {
        self.requests.borrow_mut().push(args);
        ready(self.next_response())
    }
}
