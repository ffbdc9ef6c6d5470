use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionParseError {
    #[error("unknown direction filter {0:?} (expected all, sent or received)")]
    UnknownFilter(String),

    #[error("unknown address mode {0:?} (expected full or compact)")]
    UnknownAddressMode(String),
}
