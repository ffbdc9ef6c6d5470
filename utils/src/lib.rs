//! Shared utilities for stampwallet.

pub mod logging;

pub use logging::{init_tracing, LogFormat, LoggingError};
