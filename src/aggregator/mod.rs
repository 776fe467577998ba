//! Aggregation of transaction records into gas spending totals.
//!
//! This module transforms validated transactions into:
//! - Per-period totals (all time, sliding N-day windows, custom ranges)
//! - Per-day totals over a window ending today (for chart generation)

pub mod daily;
pub mod fees;
pub mod window;

// Re-export main types and functions
pub use daily::{daily_buckets, daily_buckets_at, DailyGasBuckets};
pub use fees::{aggregate_fees, parse_fee};
pub use window::{filter_by_timeframe, gas_spent_for_period, gas_spent_for_period_at, TimeWindow};
