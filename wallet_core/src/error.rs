use stampwallet_types::StampError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Core(#[from] StampError),

    #[error("ledger index error: {0}")]
    Index(String),

    #[error("ledger index rejected the query: {0}")]
    IndexRejected(String),

    #[error("no ledger index configured")]
    NoIndexConnection,

    #[error("config error: {0}")]
    Config(String),
}
