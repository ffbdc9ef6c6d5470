//! History pipeline against a scripted ledger index.

use std::time::Duration;

use stampwallet_crypto::Principal;
use stampwallet_ledger::DirectionFilter;
use stampwallet_nullables::{NullClock, NullIndex};
use stampwallet_types::{
    Direction, GetTransactionsResponse, LedgerOperation, Mint, StampError, Tokens, Transaction,
    TransactionWithId, Transfer,
};
use stampwallet_wallet_core::{HistoryService, Wallet, WalletConfig, WalletError};

const FEE: u64 = 10_000;

// mint 10, send 2, receive 1, send 0.5
const BALANCE: u64 = 1_000_000_000 - 200_010_000 + 100_000_000 - 50_010_000;

fn wallet() -> Wallet {
    Wallet::new(Principal::anonymous())
}

fn other() -> String {
    "b".repeat(64)
}

fn record(clock: &NullClock, id: u64, operation: LedgerOperation) -> TransactionWithId {
    clock.advance(Duration::from_secs(60));
    TransactionWithId {
        id,
        transaction: Transaction {
            memo: 0,
            operation,
            created_at_time: None,
            timestamp: Some(clock.now()),
        },
    }
}

fn mint_to(to: &str, e8s: u64) -> LedgerOperation {
    LedgerOperation::Mint(Mint {
        to: to.to_string(),
        amount: Tokens::from_e8s(e8s),
    })
}

fn send(from: &str, to: &str, e8s: u64) -> LedgerOperation {
    LedgerOperation::Transfer(Transfer {
        from: from.to_string(),
        to: to.to_string(),
        amount: Tokens::from_e8s(e8s),
        fee: Tokens::from_e8s(FEE),
    })
}

/// Ids 1..=4, one minute apart, returned newest first like the index does.
fn four_transactions(own: &str) -> Vec<TransactionWithId> {
    let clock = NullClock::at_secs(1_704_164_645);
    let mut txs = vec![
        record(&clock, 1, mint_to(own, 1_000_000_000)),
        record(&clock, 2, send(own, &other(), 200_000_000)),
        record(&clock, 3, send(&other(), own, 100_000_000)),
        record(&clock, 4, send(own, &other(), 50_000_000)),
    ];
    txs.reverse();
    txs
}

fn page_of(transactions: Vec<TransactionWithId>) -> GetTransactionsResponse {
    GetTransactionsResponse {
        balance: BALANCE,
        transactions,
        oldest_tx_id: Some(1),
    }
}

fn config(max_results: u64) -> WalletConfig {
    WalletConfig {
        max_results,
        ..WalletConfig::default()
    }
}

#[tokio::test]
async fn first_page_is_interpreted_with_running_balance() {
    let wallet = wallet();
    let own = wallet.account_id_hex();
    let index = NullIndex::answering(page_of(four_transactions(&own)));
    let service = HistoryService::new(index, config(100));

    let page = service
        .load_page(&wallet, None, DirectionFilter::All)
        .await
        .unwrap();

    let ids: Vec<u64> = page.views.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
    assert_eq!(page.views[0].direction, Direction::Sent);
    assert_eq!(page.views[1].direction, Direction::Received);
    assert_eq!(page.views[3].direction, Direction::Minted);
    assert_eq!(page.views[0].balance_after_e8s, Some(BALANCE));
    assert_eq!(page.views[3].balance_after_e8s, Some(1_000_000_000));
    assert_eq!(page.views[0].when_display, "Jan 2, 2024, 03:08");
    assert_eq!(page.balance_e8s, BALANCE);
    assert_eq!(page.balance_display, "8.4998");
    assert_eq!(page.next_start, None);

    let requests = service.index().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].account_identifier, own);
    assert_eq!(requests[0].start, None);
    assert_eq!(requests[0].max_results, 100);
}

#[tokio::test]
async fn filter_keeps_only_matching_direction() {
    let wallet = wallet();
    let own = wallet.account_id_hex();
    let index = NullIndex::answering(page_of(four_transactions(&own)));
    let service = HistoryService::new(index, config(100));

    let page = service
        .load_page(&wallet, None, DirectionFilter::Sent)
        .await
        .unwrap();
    let ids: Vec<u64> = page.views.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![4, 2]);
}

#[tokio::test]
async fn full_page_points_at_next_start() {
    let wallet = wallet();
    let mut txs = four_transactions(&wallet.account_id_hex());
    txs.truncate(2);
    let service = HistoryService::new(NullIndex::answering(page_of(txs)), config(2));

    let page = service
        .load_page(&wallet, None, DirectionFilter::All)
        .await
        .unwrap();
    assert_eq!(page.next_start, Some(3));
}

#[tokio::test]
async fn later_pages_have_no_running_balance() {
    let wallet = wallet();
    let txs = four_transactions(&wallet.account_id_hex()).split_off(2);
    let service = HistoryService::new(NullIndex::answering(page_of(txs)), config(2));

    let page = service
        .load_page(&wallet, Some(3), DirectionFilter::All)
        .await
        .unwrap();
    assert_eq!(page.next_start, None);
    assert!(page.views.iter().all(|v| v.balance_after_e8s.is_none()));
    assert_eq!(service.index().requests()[0].start, Some(3));
}

#[tokio::test]
async fn load_all_follows_pages() {
    let wallet = wallet();
    let mut newer = four_transactions(&wallet.account_id_hex());
    let older = newer.split_off(2);
    let index = NullIndex::new();
    index.push_response(page_of(newer));
    index.push_response(page_of(older));
    let service = HistoryService::new(index, config(2));

    let page = service.load_all(&wallet, DirectionFilter::All).await.unwrap();
    let ids: Vec<u64> = page.views.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
    assert_eq!(page.views[3].balance_after_e8s, Some(1_000_000_000));
    assert_eq!(page.next_start, None);

    let starts: Vec<Option<u64>> = service.index().requests().iter().map(|a| a.start).collect();
    assert_eq!(starts, vec![None, Some(3)]);
}

#[tokio::test]
async fn load_all_follows_pages_capped_by_the_index() {
    let wallet = wallet();
    let mut newer = four_transactions(&wallet.account_id_hex());
    let older = newer.split_off(2);
    let index = NullIndex::new();
    index.push_response(page_of(newer));
    index.push_response(page_of(older));
    let service = HistoryService::new(index, config(100));

    let page = service.load_all(&wallet, DirectionFilter::All).await.unwrap();
    assert_eq!(page.views.len(), 4);
    assert_eq!(page.next_start, None);
    let starts: Vec<Option<u64>> = service.index().requests().iter().map(|a| a.start).collect();
    assert_eq!(starts, vec![None, Some(3)]);
}

#[tokio::test]
async fn load_all_stops_at_page_limit() {
    let wallet = wallet();
    let mut newer = four_transactions(&wallet.account_id_hex());
    newer.truncate(2);
    let config = WalletConfig {
        max_pages: 1,
        ..config(2)
    };
    let service = HistoryService::new(NullIndex::answering(page_of(newer)), config);

    let page = service.load_all(&wallet, DirectionFilter::All).await.unwrap();
    assert_eq!(page.views.len(), 2);
    assert_eq!(page.next_start, Some(3));
    assert_eq!(service.index().requests().len(), 1);
}

#[tokio::test]
async fn index_rejection_is_surfaced() {
    let index = NullIndex::new();
    index.push_error(WalletError::IndexRejected("account not found".into()));
    let service = HistoryService::new(index, WalletConfig::default());

    let err = service
        .load_page(&wallet(), None, DirectionFilter::All)
        .await
        .unwrap_err();
    assert!(matches!(err, WalletError::IndexRejected(msg) if msg == "account not found"));
}

#[tokio::test]
async fn malformed_account_is_rejected_before_querying() {
    let service = HistoryService::new(NullIndex::new(), WalletConfig::default());

    let err = service
        .load_page_for_hex("xyz", None, DirectionFilter::All)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WalletError::Core(StampError::InvalidAccountIdentifier(_))
    ));
    assert!(service.index().requests().is_empty());
}

#[tokio::test]
async fn uppercase_hex_account_is_normalised() {
    let wallet = wallet();
    let index = NullIndex::answering(GetTransactionsResponse {
        balance: 0,
        transactions: Vec::new(),
        oldest_tx_id: None,
    });
    let service = HistoryService::new(index, WalletConfig::default());

    let page = service
        .load_page_for_hex(&wallet.account_id_hex().to_uppercase(), None, DirectionFilter::All)
        .await
        .unwrap();
    assert!(page.views.is_empty());
    assert_eq!(page.balance_display, "0.0000");
    assert_eq!(
        service.index().requests()[0].account_identifier,
        wallet.account_id_hex()
    );
}
