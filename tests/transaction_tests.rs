use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wallet_gas_tracker::transaction::TransactionRecord;
use wallet_gas_tracker::units::calculate_fiat_value;
use wallet_gas_tracker::utils::error::ValidationError;

fn raw(overrides: Value) -> Value {
    let mut base = json!({
        "blockNumber": "123",
        "timeStamp": "1609459200",
        "hash": "0x123abc",
        "from": "0xfromAddress",
        "to": "0xtoAddress",
        "value": "1000000000000000000",
        "gas": "50000",
        "gasPrice": "20000000000",
        "gasUsed": "21000",
        "isError": "0",
        "txreceipt_status": "1"
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}

#[test]
fn test_valid_transaction() {
    let record = TransactionRecord::from_json(&raw(json!({}))).unwrap();

    assert_eq!(record.block_number(), "123");
    assert_eq!(record.hash(), "0x123abc");
    assert_eq!(record.from_address(), "0xfromAddress");
    assert_eq!(record.to_address(), "0xtoAddress");
    assert_eq!(record.gas_fee_wei(), Some("420000000000000"));
    assert_eq!(
        record.timestamp(),
        Some(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(record.value_eth_str(), "1.00 ETH");
    assert_eq!(record.gas_fee_eth_str(), "0.00042 ETH");
    assert!(!record.is_failed());
}

#[test]
fn test_fee_converts_to_fiat() {
    let record = TransactionRecord::from_json(&raw(json!({}))).unwrap();
    let fee: BigInt = record.gas_fee_wei().unwrap().parse().unwrap();
    let price: BigDecimal = "2000.00".parse().unwrap();
    let expected: BigDecimal = "0.84".parse().unwrap();

    assert_eq!(calculate_fiat_value(&fee, Some(&price)), Some(expected));
}

#[test]
fn test_empty_gas_fields_normalize_to_zero() {
    let record = TransactionRecord::from_json(&raw(json!({ "gasPrice": "" }))).unwrap();
    assert_eq!(record.gas_price(), "0");
    assert_eq!(record.gas_fee_wei(), Some("0"));
    assert_eq!(record.gas_fee_eth_str(), "0.00 ETH");

    let record = TransactionRecord::from_json(&raw(json!({ "gasUsed": "" }))).unwrap();
    assert_eq!(record.gas_used(), "0");
    assert_eq!(record.gas_fee_wei(), Some("0"));
}

#[test]
fn test_invalid_gas_price_rejected() {
    let err = TransactionRecord::from_json(&raw(json!({ "gasPrice": "not_a_number" }))).unwrap_err();
    assert!(matches!(err, ValidationError::NotAnInteger { field: "gasPrice", .. }));
    assert!(err
        .to_string()
        .contains("gasPrice must be a string representing an integer"));
}

#[test]
fn test_invalid_gas_used_rejected() {
    let err = TransactionRecord::from_json(&raw(json!({ "gasUsed": "not_a_number" }))).unwrap_err();
    assert!(err
        .to_string()
        .contains("gasUsed must be a string representing an integer"));
}

#[test]
fn test_invalid_timestamp_keeps_fee() {
    let record =
        TransactionRecord::from_json(&raw(json!({ "timeStamp": "invalid_timestamp" }))).unwrap();
    assert_eq!(record.timestamp(), None);
    assert_eq!(record.time_stamp(), "invalid_timestamp");
    assert_eq!(record.gas_fee_wei(), Some("420000000000000"));
}

#[test]
fn test_failed_transaction_still_pays_gas() {
    let record = TransactionRecord::from_json(&raw(json!({
        "gasUsed": "50000",
        "isError": "1",
        "txreceipt_status": "0"
    })))
    .unwrap();

    assert!(record.is_failed());
    assert_eq!(record.txreceipt_status(), "0");
    assert_eq!(record.gas_fee_wei(), Some("1000000000000000"));
}

#[test]
fn test_missing_field_is_malformed() {
    let mut value = raw(json!({}));
    if let Some(object) = value.as_object_mut() {
        object.remove("hash");
    }

    let err = TransactionRecord::from_json(&value).unwrap_err();
    assert!(matches!(err, ValidationError::Malformed(_)));
}

#[test]
fn test_non_string_field_is_malformed() {
    let err = TransactionRecord::from_json(&raw(json!({ "gasUsed": 21000 }))).unwrap_err();
    assert!(matches!(err, ValidationError::Malformed(_)));
}
