//! Running balance reconstruction.
//!
//! The index reports only the current balance. Walking the history newest
//! first and undoing each transaction's net effect yields the balance right
//! after every transaction.

use stampwallet_types::{AccountIdentifier, LedgerOperation};

use crate::classify::is_own;
use crate::TransactionView;

/// Signed change to `own`'s balance caused by `op`, in e8s.
///
/// A self-transfer nets to minus the fee.
pub fn net_effect(op: &LedgerOperation, own: &AccountIdentifier) -> i128 {
    match op {
        LedgerOperation::Transfer(t) => {
            let mut delta = 0i128;
            if is_own(&t.to, own) {
                delta += i128::from(t.amount.e8s());
            }
            if is_own(&t.from, own) {
                delta -= i128::from(t.amount.e8s()) + i128::from(t.fee.e8s());
            }
            delta
        }
        LedgerOperation::Mint(m) if is_own(&m.to, own) => i128::from(m.amount.e8s()),
        LedgerOperation::Burn(b) if is_own(&b.from, own) => -i128::from(b.amount.e8s()),
        LedgerOperation::Approve(a) if is_own(&a.from, own) => -i128::from(a.fee.e8s()),
        LedgerOperation::Mint(_)
        | LedgerOperation::Burn(_)
        | LedgerOperation::Approve(_)
        | LedgerOperation::Unrecognized(_) => 0,
    }
}

/// Fill `balance_after_e8s` on views sorted newest first, given the current balance.
///
/// `effects[i]` is the net effect of `views[i]`. Saturates at zero and `u64::MAX`.
pub fn apply_running_balance(views: &mut [TransactionView], effects: &[i128], current: u64) {
    let mut running = i128::from(current);
    for (view, effect) in views.iter_mut().zip(effects) {
        view.balance_after_e8s = Some(clamp_e8s(running));
        running = clamp_e8s(running - effect).into();
    }
}

fn clamp_e8s(value: i128) -> u64 {
    u64::try_from(value.max(0)).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::tests::{acct, approve, burn, mint, own, transfer};

    #[test]
    fn transfer_effects() {
        let me = own();
        assert_eq!(net_effect(&transfer(&acct('A'), &acct('B'), 100, 10), &me), -110);
        assert_eq!(net_effect(&transfer(&acct('B'), &acct('A'), 100, 10), &me), 100);
        assert_eq!(net_effect(&transfer(&acct('A'), &acct('A'), 100, 10), &me), -10);
        assert_eq!(net_effect(&transfer(&acct('B'), &acct('C'), 100, 10), &me), 0);
    }

    #[test]
    fn mint_burn_approve_effects() {
        let me = own();
        assert_eq!(net_effect(&mint(&acct('A'), 50), &me), 50);
        assert_eq!(net_effect(&mint(&acct('B'), 50), &me), 0);
        assert_eq!(net_effect(&burn(&acct('A'), 20), &me), -20);
        assert_eq!(net_effect(&approve(&acct('A'), 10_000), &me), -10_000);
        assert_eq!(net_effect(&approve(&acct('B'), 10_000), &me), 0);
        assert_eq!(net_effect(&LedgerOperation::Unrecognized("X".into()), &me), 0);
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp_e8s(-5), 0);
        assert_eq!(clamp_e8s(i128::from(u64::MAX) + 1), u64::MAX);
        assert_eq!(clamp_e8s(42), 42);
    }
}
