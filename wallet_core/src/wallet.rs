//! Wallet identity: a principal, a subaccount, and the derived account identifier.

use stampwallet_crypto::{derive_account_identifier, principal_from_text, Principal};
use stampwallet_types::{AccountIdentifier, Subaccount};

use crate::{Account, WalletError};

/// The signed-in user's wallet.
///
/// The account identifier is derived once on construction and cached.
#[derive(Clone, Debug)]
pub struct Wallet {
    principal: Principal,
    subaccount: Subaccount,
    account_id: AccountIdentifier,
}

impl Wallet {
    /// Wallet of `principal` on the default subaccount.
    pub fn new(principal: Principal) -> Self {
        let account_id = derive_account_identifier(&principal, None);
        Self {
            principal,
            subaccount: Subaccount::DEFAULT,
            account_id,
        }
    }

    /// Wallet from the principal text handed over by the identity provider.
    pub fn from_principal_text(text: &str) -> Result<Self, WalletError> {
        Ok(Self::new(principal_from_text(text)?))
    }

    /// Switch to another subaccount of the same principal.
    pub fn with_subaccount(self, subaccount: Subaccount) -> Self {
        let account_id = derive_account_identifier(&self.principal, Some(&subaccount));
        Self {
            subaccount,
            account_id,
            ..self
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn subaccount(&self) -> &Subaccount {
        &self.subaccount
    }

    pub fn account_id(&self) -> &AccountIdentifier {
        &self.account_id
    }

    /// The 64-char hex identifier to pass to the ledger index.
    pub fn account_id_hex(&self) -> String {
        self.account_id.to_hex()
    }

    /// The ICRC-1 account of this wallet.
    pub fn icrc1_account(&self) -> Account {
        Account {
            owner: self.principal,
            subaccount: (!self.subaccount.is_default()).then_some(self.subaccount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stampwallet_types::StampError;

    const ANONYMOUS_ACCOUNT: &str =
        "1c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79";

    #[test]
    fn derives_account_on_construction() {
        let wallet = Wallet::from_principal_text("2vxsx-fae").unwrap();
        assert_eq!(wallet.account_id_hex(), ANONYMOUS_ACCOUNT);
        assert!(wallet.subaccount().is_default());
        assert_eq!(wallet.principal(), &Principal::anonymous());
    }

    #[test]
    fn invalid_principal_surfaces_as_core_error() {
        let err = Wallet::from_principal_text("2vxsx-faa").unwrap_err();
        assert!(matches!(
            err,
            WalletError::Core(StampError::InvalidPrincipal(_))
        ));
    }

    #[test]
    fn subaccount_switch_rederives() {
        let wallet = Wallet::new(Principal::anonymous()).with_subaccount(Subaccount::from_index(1));
        assert_eq!(
            wallet.account_id_hex(),
            "b8fab0be4ad596a3739ab93e7316a8647ee72e167709441da49ce9171828629d"
        );
        assert_eq!(wallet.icrc1_account().subaccount, Some(Subaccount::from_index(1)));
        assert_eq!(wallet.icrc1_account().account_identifier(), *wallet.account_id());
    }

    #[test]
    fn default_subaccount_omitted_from_icrc1_account() {
        let wallet = Wallet::new(Principal::anonymous());
        assert_eq!(wallet.icrc1_account().subaccount, None);
    }
}
