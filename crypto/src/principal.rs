//! Principals issued by the identity provider.
//!
//! The type and its dash-grouped text form (`aaaaa-aa`, `2vxsx-fae`) come from
//! `candid`. The helpers here report failures as [`StampError::InvalidPrincipal`].

pub use candid::Principal;

use stampwallet_types::StampError;

/// Maximum principal length in bytes.
pub const MAX_PRINCIPAL_LEN: usize = 29;

/// Parse the text form. Either case is accepted; grouping must be canonical.
pub fn principal_from_text(text: &str) -> Result<Principal, StampError> {
    Principal::from_text(text).map_err(|e| StampError::InvalidPrincipal(format!("{text}: {e}")))
}

/// Wrap raw principal bytes, rejecting more than [`MAX_PRINCIPAL_LEN`].
pub fn principal_from_slice(bytes: &[u8]) -> Result<Principal, StampError> {
    Principal::try_from_slice(bytes).map_err(|e| {
        StampError::InvalidPrincipal(format!("{} bytes: {e}", bytes.len()))
    })
}
