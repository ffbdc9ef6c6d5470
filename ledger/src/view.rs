//! Display-ready transaction views.

use chrono::{FixedOffset, Offset, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use stampwallet_types::{
    AccountIdentifier, Direction, LedgerOperation, StampError, TransactionWithId,
};

use crate::{
    apply_running_balance, classify_direction, extract_amount, extract_counterparty, extract_fee,
    format_address, format_amount, format_timestamp, net_effect, AddressMode, OptionParseError,
    NOT_AVAILABLE,
};

/// One transaction as seen from the reference account. Derived, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub id: u64,
    pub when_display: String,
    /// The other side in full: `to` for sent, `from` for received, otherwise `"N/A"`.
    pub counterparty: String,
    /// `counterparty` shortened per the address mode.
    pub counterparty_display: String,
    pub direction: Direction,
    pub amount_e8s: u64,
    pub amount_display: String,
    pub fee_e8s: u64,
    pub memo: u64,
    /// Balance right after this transaction, when the current balance was supplied.
    pub balance_after_e8s: Option<u64>,
}

impl TransactionView {
    /// Build the view of one record. `own` is already validated.
    pub fn from_transaction(
        tx: &TransactionWithId,
        own: &AccountIdentifier,
        options: &InterpretOptions,
    ) -> Self {
        let op = &tx.transaction.operation;
        let direction = classify_direction(op, own);
        let sides = extract_counterparty(op);
        let counterparty = match direction {
            Direction::Sent => sides.to,
            Direction::Received => sides.from,
            Direction::Minted | Direction::Burned | Direction::Unknown => {
                NOT_AVAILABLE.to_string()
            }
        };
        let amount_e8s = extract_amount(op);
        let when_display = tx
            .transaction
            .effective_time()
            .map(|t| format_timestamp(t.as_nanos(), &options.zone))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            id: tx.id,
            when_display,
            counterparty_display: format_address(&counterparty, options.address_mode),
            counterparty,
            direction,
            amount_e8s,
            amount_display: format_amount(amount_e8s),
            fee_e8s: extract_fee(op),
            memo: tx.transaction.memo,
            balance_after_e8s: None,
        }
    }
}

/// Rendering choices for [`interpret`].
#[derive(Clone, Debug)]
pub struct InterpretOptions {
    /// Timezone timestamps are shown in.
    pub zone: FixedOffset,
    pub address_mode: AddressMode,
    /// Current balance in e8s; enables `balance_after_e8s`.
    pub current_balance_e8s: Option<u64>,
}

impl Default for InterpretOptions {
    fn default() -> Self {
        Self {
            zone: Utc.fix(),
            address_mode: AddressMode::Full,
            current_balance_e8s: None,
        }
    }
}

/// Interpret a batch of records relative to `own_account_id`, newest first.
///
/// Fails only when `own_account_id` is not 64 hex characters. Records that
/// cannot be attributed come back with [`Direction::Unknown`].
pub fn interpret(
    transactions: &[TransactionWithId],
    own_account_id: &str,
    options: &InterpretOptions,
) -> Result<Vec<TransactionView>, StampError> {
    let own = AccountIdentifier::from_hex(own_account_id)?;

    let mut ordered: Vec<&TransactionWithId> = transactions.iter().collect();
    ordered.sort_by_key(|tx| Reverse(tx.id));

    let mut views = Vec::with_capacity(ordered.len());
    let mut effects = Vec::with_capacity(ordered.len());
    for tx in ordered {
        let op = &tx.transaction.operation;
        let view = TransactionView::from_transaction(tx, &own, options);
        if view.direction == Direction::Unknown {
            if let LedgerOperation::Unrecognized(kind) = op {
                tracing::warn!(id = tx.id, kind = %kind, "unrecognized ledger operation");
            } else {
                tracing::debug!(
                    id = tx.id,
                    kind = op.kind(),
                    "transaction not attributable to account"
                );
            }
        }
        effects.push(net_effect(op, &own));
        views.push(view);
    }

    if let Some(current) = options.current_balance_e8s {
        apply_running_balance(&mut views, &effects, current);
    }
    Ok(views)
}

/// Which views a history list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionFilter {
    #[default]
    All,
    Sent,
    Received,
}

impl DirectionFilter {
    /// Minted, burned and unknown entries only pass `All`.
    pub fn admits(&self, direction: Direction) -> bool {
        match self {
            Self::All => true,
            Self::Sent => direction == Direction::Sent,
            Self::Received => direction == Direction::Received,
        }
    }
}

impl FromStr for DirectionFilter {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "sent" => Ok(Self::Sent),
            "received" => Ok(Self::Received),
            _ => Err(OptionParseError::UnknownFilter(s.to_string())),
        }
    }
}

impl fmt::Display for DirectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Sent => "sent",
            Self::Received => "received",
        })
    }
}

pub fn filter_by_direction(
    views: &[TransactionView],
    filter: DirectionFilter,
) -> Vec<TransactionView> {
    views
        .iter()
        .filter(|v| filter.admits(v.direction))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::tests::{acct, approve, burn, mint, transfer};
    use stampwallet_types::{Timestamp, Transaction};

    fn record(id: u64, operation: LedgerOperation) -> TransactionWithId {
        TransactionWithId {
            id,
            transaction: Transaction {
                memo: id * 10,
                operation,
                created_at_time: None,
                timestamp: Some(Timestamp::from_nanos(1_704_164_645_678_000_000)),
            },
        }
    }

    fn history() -> Vec<TransactionWithId> {
        vec![
            record(1, mint(&acct('a'), 1_000_000_000)),
            record(4, transfer(&acct('a'), &acct('b'), 200_000_000, 10_000)),
            record(2, transfer(&acct('c'), &acct('a'), 150_000_000, 10_000)),
            record(3, approve(&acct('a'), 10_000)),
            record(5, burn(&acct('a'), 50_000_000)),
        ]
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let views = interpret(&[], &acct('a'), &InterpretOptions::default()).unwrap();
        assert!(views.is_empty());
    }

    #[test]
    fn malformed_own_account_is_rejected() {
        let err = interpret(&history(), "not-hex", &InterpretOptions::default()).unwrap_err();
        assert!(matches!(err, StampError::InvalidAccountIdentifier(_)));
    }

    #[test]
    fn views_are_sorted_newest_first() {
        let views = interpret(&history(), &acct('a'), &InterpretOptions::default()).unwrap();
        let ids: Vec<u64> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = history();
        let before = input.clone();
        interpret(&input, &acct('a'), &InterpretOptions::default()).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn view_fields() {
        let views = interpret(&history(), &acct('A'), &InterpretOptions::default()).unwrap();
        let sent = &views[1];
        assert_eq!(sent.direction, Direction::Sent);
        assert_eq!(sent.counterparty, acct('b'));
        assert_eq!(sent.counterparty_display, "bbbbbbb...bbbbbbb");
        assert_eq!(sent.amount_display, "2.0000");
        assert_eq!(sent.fee_e8s, 10_000);
        assert_eq!(sent.memo, 40);
        assert_eq!(sent.when_display, "Jan 2, 2024, 03:04");

        let received = &views[3];
        assert_eq!(received.direction, Direction::Received);
        assert_eq!(received.counterparty, acct('c'));

        let approval = &views[2];
        assert_eq!(approval.direction, Direction::Unknown);
        assert_eq!(approval.counterparty_display, "N/A");
        assert_eq!(approval.amount_display, "0.0000");

        assert_eq!(views[0].direction, Direction::Burned);
        assert_eq!(views[4].direction, Direction::Minted);
        assert_eq!(views[4].counterparty, "N/A");
    }

    #[test]
    fn missing_timestamps_fall_back() {
        let mut tx = record(1, mint(&acct('a'), 1));
        tx.transaction.timestamp = None;
        tx.transaction.created_at_time = Some(Timestamp::EPOCH);
        let views = interpret(&[tx.clone()], &acct('a'), &InterpretOptions::default()).unwrap();
        assert_eq!(views[0].when_display, "Jan 1, 1970, 00:00");

        tx.transaction.created_at_time = None;
        let views = interpret(&[tx], &acct('a'), &InterpretOptions::default()).unwrap();
        assert_eq!(views[0].when_display, "N/A");
    }

    #[test]
    fn compact_mode_and_zone_are_applied() {
        let options = InterpretOptions {
            zone: crate::utc_offset(9 * 60).unwrap(),
            address_mode: AddressMode::Compact,
            current_balance_e8s: None,
        };
        let views = interpret(&history(), &acct('a'), &options).unwrap();
        assert_eq!(views[1].counterparty_display, "bbbbbbb...");
        assert_eq!(views[1].when_display, "Jan 2, 2024, 12:04");
    }

    #[test]
    fn running_balance_reconstructs_history() {
        // mint 10, receive 1.5, approve fee, send 2 + fee, burn 0.5
        let current = 1_000_000_000 + 150_000_000 - 10_000 - 200_010_000 - 50_000_000;
        let options = InterpretOptions {
            current_balance_e8s: Some(current),
            ..InterpretOptions::default()
        };
        let views = interpret(&history(), &acct('a'), &options).unwrap();
        let balances: Vec<Option<u64>> = views.iter().map(|v| v.balance_after_e8s).collect();
        assert_eq!(
            balances,
            vec![
                Some(current),
                Some(current + 50_000_000),
                Some(current + 50_000_000 + 200_010_000),
                Some(1_150_000_000),
                Some(1_000_000_000),
            ]
        );
    }

    #[test]
    fn no_balance_without_current() {
        let views = interpret(&history(), &acct('a'), &InterpretOptions::default()).unwrap();
        assert!(views.iter().all(|v| v.balance_after_e8s.is_none()));
    }

    #[test]
    fn filters() {
        let views = interpret(&history(), &acct('a'), &InterpretOptions::default()).unwrap();
        assert_eq!(filter_by_direction(&views, DirectionFilter::All).len(), 5);
        let sent = filter_by_direction(&views, DirectionFilter::Sent);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].id, 4);
        let received = filter_by_direction(&views, DirectionFilter::Received);
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id, 2);
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("SENT".parse::<DirectionFilter>().unwrap(), DirectionFilter::Sent);
        assert_eq!("all".parse::<DirectionFilter>().unwrap(), DirectionFilter::All);
        assert!(matches!(
            "minted".parse::<DirectionFilter>(),
            Err(OptionParseError::UnknownFilter(_))
        ));
    }
}
