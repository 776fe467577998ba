//! Bucket gas fees by calendar day for charting.

use super::fees::parse_fee;
use crate::transaction::GasFeeEntry;
use chrono::{Duration, NaiveDate, Utc};
use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::BTreeMap;

/// Date -> total gas fee in wei, ascending by date
pub type DailyGasBuckets = BTreeMap<NaiveDate, BigInt>;

/// Build daily buckets for the `days_limit` days ending today (UTC)
///
/// **Public** - main entry point for daily aggregation
pub fn daily_buckets<T: GasFeeEntry>(transactions: &[T], days_limit: u32) -> DailyGasBuckets {
    if transactions.is_empty() {
        return DailyGasBuckets::new();
    }
    daily_buckets_at(transactions, days_limit, Utc::now().date_naive())
}

/// Build daily buckets relative to an explicit "today"
///
/// **Public** - deterministic variant
///
/// # Algorithm
/// 1. Window is `[today - (days_limit - 1), today]`, so 30 covers 30
///    calendar days including today
/// 2. Records without a timestamp or without an integer fee are skipped and
///    never create a bucket
/// 3. Fees of in-window records are summed per date
pub fn daily_buckets_at<T: GasFeeEntry>(
    transactions: &[T],
    days_limit: u32,
    today: NaiveDate,
) -> DailyGasBuckets {
    let mut buckets = DailyGasBuckets::new();
    if transactions.is_empty() || days_limit == 0 {
        return buckets;
    }

    let window_start = today
        .checked_sub_signed(Duration::days(i64::from(days_limit) - 1))
        .unwrap_or(NaiveDate::MIN);

    for tx in transactions {
        let Some(ts) = tx.timestamp() else {
            continue;
        };
        let date = ts.date_naive();
        if date < window_start || date > today {
            continue;
        }
        let Some(fee) = parse_fee(tx) else {
            continue;
        };

        *buckets.entry(date).or_insert_with(BigInt::zero) += fee;
    }

    debug!(
        "Built {} daily buckets for {} .. {}",
        buckets.len(),
        window_start,
        today
    );

    buckets
}
