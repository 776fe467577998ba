use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use wallet_gas_tracker::aggregator::{
    aggregate_fees, daily_buckets, daily_buckets_at, filter_by_timeframe, gas_spent_for_period,
    gas_spent_for_period_at, DailyGasBuckets, TimeWindow,
};
use wallet_gas_tracker::transaction::{GasFeeEntry, TransactionRecord};

/// Minimal entry with direct control over timestamp and fee
struct Entry {
    timestamp: Option<DateTime<Utc>>,
    fee: Option<String>,
}

impl GasFeeEntry for Entry {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    fn gas_fee_wei(&self) -> Option<&str> {
        self.fee.as_deref()
    }
}

fn at(text: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

fn entry(timestamp: &str, fee: Option<&str>) -> Entry {
    Entry {
        timestamp: Some(at(timestamp)),
        fee: fee.map(str::to_string),
    }
}

fn wei(text: &str) -> BigInt {
    text.parse().unwrap()
}

const TODAY_FEE: &str = "30000000000000000";

fn now() -> DateTime<Utc> {
    at("2023-11-02 10:00:00")
}

fn transactions() -> Vec<Entry> {
    vec![
        entry("2023-10-01 10:00:00", Some("10000000000000000")),
        entry("2023-10-15 12:00:00", Some("20000000000000000")),
        entry("2023-10-28 14:00:00", Some("5000000000000000")),
        entry("2023-11-01 08:00:00", Some("15000000000000000")),
        entry("2023-10-15 16:00:00", None),
        entry("2023-10-16 10:00:00", Some("invalid_string")),
        entry("2023-11-02 10:00:00", Some(TODAY_FEE)),
    ]
}

#[test]
fn test_filter_by_timeframe() {
    let txs = transactions();
    let start = Utc.with_ymd_and_hms(2023, 10, 15, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2023, 10, 30, 0, 0, 0).unwrap();

    let filtered = filter_by_timeframe(&txs, start, end);

    assert_eq!(filtered.len(), 4);
    assert!(filtered
        .iter()
        .all(|tx| matches!(tx.timestamp, Some(ts) if start <= ts && ts <= end)));
}

#[test]
fn test_filter_by_timeframe_no_match() {
    let txs = transactions();
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2022, 1, 31, 0, 0, 0).unwrap();

    assert!(filter_by_timeframe(&txs, start, end).is_empty());
}

#[test]
fn test_filter_skips_missing_timestamp() {
    let txs = vec![
        Entry { timestamp: None, fee: Some("1".to_string()) },
        entry("2023-10-20 00:00:00", Some("2")),
    ];
    let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(filter_by_timeframe(&txs, start, end).len(), 1);
}

#[test]
fn test_aggregate_fees_skips_missing_and_invalid() {
    let expected = wei("50000000000000000") + wei(TODAY_FEE);
    assert_eq!(aggregate_fees(&transactions()), expected);
}

#[test]
fn test_aggregate_fees_empty() {
    let empty: Vec<Entry> = Vec::new();
    assert_eq!(aggregate_fees(&empty), BigInt::from(0));
}

#[test]
fn test_gas_spent_last_day_is_sliding() {
    // [2023-11-01 10:00, 2023-11-02 10:00] leaves out 2023-11-01 08:00
    let spent = gas_spent_for_period_at(&transactions(), TimeWindow::LastDays(1), now());
    assert_eq!(spent, wei(TODAY_FEE));
}

#[test]
fn test_gas_spent_wide_window_covers_everything() {
    let txs = transactions();
    let spent = gas_spent_for_period_at(&txs, TimeWindow::LastDays(60), now());
    assert_eq!(spent, aggregate_fees(&txs));
}

#[test]
fn test_gas_spent_custom_period() {
    let window = TimeWindow::Between {
        start: Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2023, 10, 31, 0, 0, 0).unwrap(),
    };
    let spent = gas_spent_for_period_at(&transactions(), window, now());
    assert_eq!(spent, wei("35000000000000000"));
}

#[test]
fn test_gas_spent_all_time() {
    let txs = transactions();
    assert_eq!(
        gas_spent_for_period_at(&txs, TimeWindow::AllTime, now()),
        aggregate_fees(&txs)
    );
    assert_eq!(gas_spent_for_period(&txs, TimeWindow::AllTime), aggregate_fees(&txs));
}

#[test]
fn test_gas_spent_empty_input_is_zero() {
    let empty: Vec<Entry> = Vec::new();
    assert_eq!(gas_spent_for_period(&empty, TimeWindow::LastDays(7)), BigInt::from(0));
}

#[test]
fn test_daily_buckets() {
    let buckets = daily_buckets_at(&transactions(), 30, now().date_naive());

    let mut expected = DailyGasBuckets::new();
    expected.insert(NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(), wei("20000000000000000"));
    expected.insert(NaiveDate::from_ymd_opt(2023, 10, 28).unwrap(), wei("5000000000000000"));
    expected.insert(NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(), wei("15000000000000000"));
    expected.insert(NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(), wei(TODAY_FEE));

    assert_eq!(buckets, expected);
    // 2023-10-16 only has an invalid fee, so no bucket at all
    assert!(!buckets.contains_key(&NaiveDate::from_ymd_opt(2023, 10, 16).unwrap()));
}

#[test]
fn test_daily_buckets_empty() {
    let empty: Vec<Entry> = Vec::new();
    assert!(daily_buckets(&empty, 30).is_empty());
}

#[test]
fn test_daily_buckets_nothing_in_window() {
    let future = (now() + Duration::days(100)).date_naive();
    assert!(daily_buckets_at(&transactions(), 30, future).is_empty());
}

#[test]
fn test_daily_buckets_window_boundary() {
    let today = now().date_naive();
    let txs = vec![
        // First day of the 30-day span
        Entry {
            timestamp: Some(now() - Duration::days(29)),
            fee: Some("7".to_string()),
        },
        // One day earlier
        Entry {
            timestamp: Some(now() - Duration::days(30)),
            fee: Some("11".to_string()),
        },
    ];

    let buckets = daily_buckets_at(&txs, 30, today);

    assert_eq!(buckets.len(), 1);
    assert_eq!(
        buckets.get(&NaiveDate::from_ymd_opt(2023, 10, 4).unwrap()),
        Some(&BigInt::from(7))
    );
}

#[test]
fn test_daily_bucket_sum_matches_windowed_total() {
    let txs = transactions();
    let today = now().date_naive();
    let buckets = daily_buckets_at(&txs, 30, today);

    let start = today - Duration::days(29);
    let window = TimeWindow::Between {
        start: start.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        end: today.and_hms_opt(23, 59, 59).unwrap().and_utc(),
    };

    let bucket_total: BigInt = buckets.values().sum();
    assert_eq!(bucket_total, gas_spent_for_period_at(&txs, window, now()));
}

#[test]
fn test_records_feed_the_aggregator() {
    let record = TransactionRecord::from_json(&serde_json::json!({
        "blockNumber": "1",
        "timeStamp": at("2023-11-01 12:00:00").timestamp().to_string(),
        "hash": "0xhash",
        "from": "0xfrom",
        "to": "0xto",
        "value": "0",
        "gas": "21000",
        "gasPrice": "20000000000",
        "gasUsed": "21000",
        "isError": "0",
        "txreceipt_status": "1"
    }))
    .unwrap();

    let records = vec![record];
    assert_eq!(
        gas_spent_for_period_at(&records, TimeWindow::LastDays(7), now()),
        wei("420000000000000")
    );
}

#[test]
fn test_oversized_windows_do_not_panic() {
    let txs = transactions();

    assert_eq!(
        gas_spent_for_period_at(&txs, TimeWindow::LastDays(u32::MAX), now()),
        aggregate_fees(&txs)
    );

    let buckets = daily_buckets_at(&txs, u32::MAX, now().date_naive());
    let bucket_total: BigInt = buckets.values().sum();
    assert_eq!(bucket_total, aggregate_fees(&txs));
    assert_eq!(
        buckets.keys().next(),
        Some(&NaiveDate::from_ymd_opt(2023, 10, 1).unwrap())
    );
}
