//! Legacy account identifier derivation.
//!
//! Process:
//! 1. hash = SHA-224(0x0A ‖ "account-id" ‖ principal bytes ‖ subaccount)
//! 2. checksum = CRC-32(hash), big-endian
//! 3. identifier = checksum ‖ hash (32 bytes)
//!
//! The leading 0x0A is the length of "account-id", not a newline.

use stampwallet_types::{AccountIdLike, AccountIdentifier, StampError, Subaccount};

use crate::{crc32, principal_from_text, sha224_multi, Principal};

/// Domain separator: length byte followed by the ASCII tag.
const DOMAIN_SEPARATOR: &[u8; 11] = b"\x0Aaccount-id";

/// Derive the 32-byte account identifier of `principal` under `subaccount`
/// (the all-zero default when `None`).
pub fn derive_account_identifier(
    principal: &Principal,
    subaccount: Option<&Subaccount>,
) -> AccountIdentifier {
    let subaccount = subaccount.unwrap_or(&Subaccount::DEFAULT);
    let hash = sha224_multi(&[
        DOMAIN_SEPARATOR.as_slice(),
        principal.as_slice(),
        subaccount.as_bytes().as_slice(),
    ]);
    let id = AccountIdentifier::from_parts(crc32(&hash).to_be_bytes(), &hash);
    tracing::debug!(
        %principal,
        default_subaccount = subaccount.is_default(),
        account = %id,
        "derived account identifier"
    );
    id
}

/// Parse a principal's text form and derive its account identifier.
pub fn derive_from_principal_text(
    text: &str,
    subaccount: Option<&Subaccount>,
) -> Result<AccountIdentifier, StampError> {
    let principal = principal_from_text(text)?;
    Ok(derive_account_identifier(&principal, subaccount))
}

/// Whether the CRC-32 prefix matches the trailing digest.
pub fn verify_checksum(id: &AccountIdentifier) -> bool {
    id.checksum() == crc32(id.hash()).to_be_bytes()
}

/// Parse a hex identifier and require a valid checksum.
pub fn account_id_from_hex_checked(s: &str) -> Result<AccountIdentifier, StampError> {
    let id = AccountIdentifier::from_hex(s)?;
    if !verify_checksum(&id) {
        return Err(StampError::InvalidAccountIdentifier(format!(
            "{s}: checksum mismatch"
        )));
    }
    Ok(id)
}

/// Compare two identifiers by their canonical text form.
pub fn account_ids_equal<A, B>(a: &A, b: &B) -> bool
where
    A: AccountIdLike + ?Sized,
    B: AccountIdLike + ?Sized,
{
    a.same_account(b)
}
