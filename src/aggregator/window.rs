//! Time-window filtering and per-period gas totals.
//!
//! "Now" is read once per call, so one report generation is internally
//! consistent even if the wall clock advances while it runs.

use super::fees::aggregate_fees;
use crate::transaction::GasFeeEntry;
use chrono::{DateTime, Duration, Utc};
use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;

/// Which transactions a period total covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Everything, unfiltered
    AllTime,

    /// `[now - n days, now]`, a literal sliding window (not calendar days)
    LastDays(u32),

    /// Caller-supplied bounds, used verbatim
    Between {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl TimeWindow {
    /// Resolve to concrete bounds relative to `now`; None for `AllTime`
    pub fn bounds(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match *self {
            TimeWindow::AllTime => None,
            TimeWindow::LastDays(days) => {
                // Spans beyond chrono's range cover everything
                let start = now
                    .checked_sub_signed(Duration::days(i64::from(days)))
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                Some((start, now))
            }
            TimeWindow::Between { start, end } => Some((start, end)),
        }
    }
}

/// Select transactions whose timestamp lies in `[start, end]`
///
/// **Public** - both bounds inclusive; records without a timestamp are
/// excluded; input order is preserved
pub fn filter_by_timeframe<'a, T: GasFeeEntry>(
    transactions: &'a [T],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<&'a T> {
    transactions
        .iter()
        .filter(|tx| matches!(tx.timestamp(), Some(ts) if start <= ts && ts <= end))
        .collect()
}

/// Total gas spent in a window, reading "now" from the system clock
///
/// **Public** - main entry point for period totals
///
/// Returns zero for an empty input without reading the clock.
pub fn gas_spent_for_period<T: GasFeeEntry>(transactions: &[T], window: TimeWindow) -> BigInt {
    if transactions.is_empty() {
        return BigInt::zero();
    }
    gas_spent_for_period_at(transactions, window, Utc::now())
}

/// Total gas spent in a window relative to an explicit "now"
///
/// **Public** - deterministic variant used by the report generator and tests
pub fn gas_spent_for_period_at<T: GasFeeEntry>(
    transactions: &[T],
    window: TimeWindow,
    now: DateTime<Utc>,
) -> BigInt {
    if transactions.is_empty() {
        return BigInt::zero();
    }

    match window.bounds(now) {
        None => aggregate_fees(transactions),
        Some((start, end)) => {
            let selected = filter_by_timeframe(transactions, start, end);
            debug!(
                "Window {} .. {}: {} of {} transactions",
                start,
                end,
                selected.len(),
                transactions.len()
            );
            aggregate_fees(selected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Tx {
        ts: Option<DateTime<Utc>>,
        fee: &'static str,
    }

    impl GasFeeEntry for Tx {
        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.ts
        }

        fn gas_fee_wei(&self) -> Option<&str> {
            Some(self.fee)
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let txs = vec![
            Tx { ts: Some(at(2023, 10, 1, 0)), fee: "1" },
            Tx { ts: Some(at(2023, 10, 2, 0)), fee: "2" },
            Tx { ts: None, fee: "4" },
            Tx { ts: Some(at(2023, 10, 3, 0)), fee: "8" },
        ];
        let filtered = filter_by_timeframe(&txs, at(2023, 10, 1, 0), at(2023, 10, 2, 0));
        let fees: Vec<&str> = filtered.iter().map(|tx| tx.fee).collect();
        assert_eq!(fees, vec!["1", "2"]);
    }

    #[test]
    fn test_window_bounds() {
        let now = at(2023, 11, 2, 10);
        assert_eq!(TimeWindow::AllTime.bounds(now), None);
        assert_eq!(
            TimeWindow::LastDays(1).bounds(now),
            Some((at(2023, 11, 1, 10), now))
        );
    }

    #[test]
    fn test_one_day_window_is_sliding() {
        let now = at(2023, 11, 2, 10);
        let txs = vec![
            Tx { ts: Some(at(2023, 11, 1, 8)), fee: "100" },
            Tx { ts: Some(at(2023, 11, 2, 10)), fee: "7" },
        ];
        assert_eq!(
            gas_spent_for_period_at(&txs, TimeWindow::LastDays(1), now),
            BigInt::from(7)
        );
    }

    #[test]
    fn test_oversized_window_covers_everything() {
        let now = at(2023, 11, 2, 10);
        assert_eq!(
            TimeWindow::LastDays(u32::MAX).bounds(now),
            Some((DateTime::<Utc>::MIN_UTC, now))
        );

        let txs = vec![
            Tx { ts: Some(at(1970, 1, 1, 0)), fee: "3" },
            Tx { ts: Some(at(2023, 11, 2, 9)), fee: "4" },
            Tx { ts: Some(at(2023, 11, 3, 0)), fee: "100" },
        ];
        assert_eq!(
            gas_spent_for_period_at(&txs, TimeWindow::LastDays(u32::MAX), now),
            BigInt::from(7)
        );
    }
}
