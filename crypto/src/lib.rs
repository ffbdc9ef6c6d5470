//! Cryptographic primitives for the stamp wallet.
//!
//! - **SHA-224** for account identifier digests and self-authenticating principals
//! - **CRC-32** (ISO-HDLC) for identifier and principal-text checksums
//! - Principal parsing on top of `candid`
//! - Legacy account identifier derivation from a principal and subaccount

pub mod account_id;
pub mod crc32;
pub mod hash;
pub mod principal;

pub use account_id::{
    account_id_from_hex_checked, account_ids_equal, derive_account_identifier,
    derive_from_principal_text, verify_checksum,
};
pub use crc32::crc32;
pub use hash::{sha224, sha224_multi};
pub use principal::{principal_from_slice, principal_from_text, Principal, MAX_PRINCIPAL_LEN};
