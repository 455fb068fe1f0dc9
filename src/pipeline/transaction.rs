use std::cmp::Ordering;

use tracing::debug;
use tracing::warn;

use crate::config::PipelineConfig;
use crate::model::FilterState;
use crate::model::SortOption;
use crate::model::TimeRangeOption;
use crate::model::Transaction;

/// Time range, sort and cap over the raw transaction list. The input is never
/// modified; every call returns a fresh list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilterPipeline {
    max_transactions: usize,
}

impl Default for TransactionFilterPipeline {
    fn default() -> Self { Self::new(&PipelineConfig::default()) }
}

impl TransactionFilterPipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            max_transactions: config.max_transactions,
        }
    }

    pub fn max_transactions(&self) -> usize { self.max_transactions }

    pub fn process(
        &self,
        transactions: &[Transaction],
        address: &str,
        filters: &FilterState,
    ) -> Vec<Transaction> {
        self.process_at(transactions, address, filters, chrono::Utc::now().timestamp_millis())
    }

    /// [`process`](Self::process) with an explicit clock, in milliseconds.
    pub fn process_at(
        &self,
        transactions: &[Transaction],
        address: &str,
        filters: &FilterState,
        now_ms: i64,
    ) -> Vec<Transaction> {
        let complete = transactions.iter().filter(|tx| {
            if tx.is_complete() {
                return true;
            }
            warn!("pipeline::skip_transaction::missing_fields::hash::{:?}::from::{:?}::to::{:?}", tx.hash, tx.from, tx.to);
            false
        });

        let mut selected: Vec<Transaction> = filter_by_time_range(complete, filters.time_range, now_ms).cloned().collect();
        let eligible = selected.len();

        sort_transactions(&mut selected, filters.sort_by, address);
        selected.truncate(self.max_transactions);

        debug!(
            "pipeline::transactions_selected::input::{}::eligible::{}::kept::{}::sort::{:?}::range::{:?}",
            transactions.len(),
            eligible,
            selected.len(),
            filters.sort_by,
            filters.time_range
        );

        selected
    }
}

/// Keeps transactions strictly younger than the range window.
pub fn filter_by_time_range<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
    time_range: TimeRangeOption,
    now_ms: i64,
) -> impl Iterator<Item = &'a Transaction> {
    let window_ms = time_range.window().map(|window| window.num_milliseconds());
    transactions.filter(move |tx| match window_ms {
        Some(window_ms) => now_ms.saturating_sub(tx.timestamp) < window_ms,
        None => true,
    })
}

/// Stable in-place sort; ties keep their relative order.
pub fn sort_transactions(
    transactions: &mut [Transaction],
    sort_by: SortOption,
    address: &str,
) {
    match sort_by {
        SortOption::Time => transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortOption::Amount => transactions.sort_by(|a, b| compare_amount_desc(a.amount(), b.amount())),
        SortOption::Direction => transactions.sort_by_key(|tx| !tx.is_incoming_to(address)),
    }
}

fn compare_amount_desc(
    a: f64,
    b: f64,
) -> Ordering {
    b.total_cmp(&a)
}
