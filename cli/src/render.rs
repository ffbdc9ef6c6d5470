//! Plain-text rendering of history pages.

use stampwallet_ledger::{format_amount, TransactionView};
use stampwallet_wallet_core::HistoryPage;

/// One line per view: id, time, direction, amount, counterparty, and the
/// running balance when known.
pub fn view_line(view: &TransactionView) -> String {
    let mut line = format!(
        "{:>8}  {:<19}  {:<8}  {:>16}  {}",
        view.id,
        view.when_display,
        view.direction.as_str(),
        view.amount_display,
        view.counterparty_display,
    );
    if let Some(balance) = view.balance_after_e8s {
        line.push_str(&format!("  (balance {})", format_amount(balance)));
    }
    line
}

pub fn page_lines(page: &HistoryPage) -> Vec<String> {
    let mut lines = Vec::with_capacity(page.views.len() + 2);
    lines.push(format!("Balance: {}", page.balance_display));
    lines.extend(page.views.iter().map(view_line));
    if let Some(next) = page.next_start {
        lines.push(format!("More history available: --start {next}"));
    }
    lines
}
