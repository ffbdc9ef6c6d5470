//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies (clock, ledger index) are abstracted behind traits or
//! plain values. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod index;

pub use clock::NullClock;
pub use index::NullIndex;
