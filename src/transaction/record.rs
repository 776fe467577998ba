//! Validated transaction records built from raw explorer data.
//!
//! Construction runs in two separate layers:
//! 1. Field validation: gas price and gas used must be integers (or empty,
//!    which normalizes to "0"). Failure rejects the whole record.
//! 2. Derivation: gas fee and timestamp are computed once. Failure here only
//!    leaves the derived field unset.

use super::GasFeeEntry;
use crate::units::wei_to_ether_str;
use crate::utils::error::ValidationError;
use chrono::{DateTime, Utc};
use log::debug;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Raw "normal" transaction as returned by the explorer txlist endpoint
///
/// Every field is string encoded. Unknown fields (nonce, input, ...) are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "blockNumber")]
    pub block_number: String,

    /// Unix timestamp in seconds
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,

    pub hash: String,

    #[serde(rename = "from")]
    pub from_address: String,

    #[serde(rename = "to")]
    pub to_address: String,

    /// Transferred value in wei
    pub value: String,

    /// Gas limit
    pub gas: String,

    /// Gas price in wei
    #[serde(rename = "gasPrice")]
    pub gas_price: String,

    #[serde(rename = "gasUsed")]
    pub gas_used: String,

    #[serde(rename = "isError")]
    pub is_error: String,

    pub txreceipt_status: String,
}

/// One validated transfer involving the tracked wallet
///
/// **Public** - immutable once built; derived fields are computed in the
/// constructor and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    block_number: String,
    time_stamp: String,
    hash: String,
    from_address: String,
    to_address: String,
    value: String,
    gas: String,
    gas_price: String,
    gas_used: String,
    is_error: String,
    txreceipt_status: String,

    // Derived
    gas_fee_wei: Option<String>,
    timestamp: Option<DateTime<Utc>>,
}

impl TransactionRecord {
    /// Validate a raw transaction and compute its derived fields
    ///
    /// **Public** - main constructor
    ///
    /// # Errors
    /// * `ValidationError::NotAnInteger` - gas price or gas used is neither
    ///   empty nor an integer
    pub fn new(raw: RawTransaction) -> Result<Self, ValidationError> {
        let gas_price = validate_integer_field("gasPrice", &raw.gas_price)?;
        let gas_used = validate_integer_field("gasUsed", &raw.gas_used)?;

        let gas_fee_wei = derive_gas_fee(&gas_used, &gas_price);
        let timestamp = derive_timestamp(&raw.time_stamp);

        if gas_fee_wei.is_none() || timestamp.is_none() {
            debug!(
                "Transaction {} has derivation gaps (fee set: {}, timestamp set: {})",
                raw.hash,
                gas_fee_wei.is_some(),
                timestamp.is_some()
            );
        }

        Ok(Self {
            block_number: raw.block_number,
            time_stamp: raw.time_stamp,
            hash: raw.hash,
            from_address: raw.from_address,
            to_address: raw.to_address,
            value: raw.value,
            gas: raw.gas,
            gas_price,
            gas_used,
            is_error: raw.is_error,
            txreceipt_status: raw.txreceipt_status,
            gas_fee_wei,
            timestamp,
        })
    }

    /// Build a record straight from an explorer JSON object
    ///
    /// **Public** - missing or non-string fields are validation errors
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let raw: RawTransaction = serde_json::from_value(value.clone())?;
        Self::new(raw)
    }

    pub fn block_number(&self) -> &str {
        &self.block_number
    }

    /// Raw unix timestamp string
    pub fn time_stamp(&self) -> &str {
        &self.time_stamp
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn from_address(&self) -> &str {
        &self.from_address
    }

    pub fn to_address(&self) -> &str {
        &self.to_address
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn gas(&self) -> &str {
        &self.gas
    }

    /// Normalized gas price ("0" when the explorer sent an empty string)
    pub fn gas_price(&self) -> &str {
        &self.gas_price
    }

    /// Normalized gas used ("0" when the explorer sent an empty string)
    pub fn gas_used(&self) -> &str {
        &self.gas_used
    }

    pub fn is_error(&self) -> &str {
        &self.is_error
    }

    pub fn txreceipt_status(&self) -> &str {
        &self.txreceipt_status
    }

    /// gasUsed * gasPrice in wei, if both parsed
    pub fn gas_fee_wei(&self) -> Option<&str> {
        self.gas_fee_wei.as_deref()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// True when the transaction reverted on chain (fees are still paid)
    pub fn is_failed(&self) -> bool {
        self.is_error == "1"
    }

    /// Transferred value formatted in ether
    pub fn value_eth_str(&self) -> String {
        wei_to_ether_str(&self.value)
    }

    /// Gas fee formatted in ether, "N/A" when the fee is unset
    pub fn gas_fee_eth_str(&self) -> String {
        match &self.gas_fee_wei {
            Some(fee) => wei_to_ether_str(fee),
            None => "N/A".to_string(),
        }
    }
}

impl TryFrom<RawTransaction> for TransactionRecord {
    type Error = ValidationError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl GasFeeEntry for TransactionRecord {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    fn gas_fee_wei(&self) -> Option<&str> {
        self.gas_fee_wei.as_deref()
    }
}

/// Check that a numeric field is an integer, normalizing empty to "0"
///
/// **Private** - validation layer
fn validate_integer_field(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok("0".to_string());
    }

    match trimmed.parse::<BigInt>() {
        Ok(_) => Ok(trimmed.to_string()),
        Err(_) => Err(ValidationError::NotAnInteger {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Multiply gas used by gas price
///
/// **Private** - derivation layer, unset (not zero) when a factor does not parse
fn derive_gas_fee(gas_used: &str, gas_price: &str) -> Option<String> {
    let used = gas_used.parse::<BigInt>().ok()?;
    let price = gas_price.parse::<BigInt>().ok()?;
    Some((used * price).to_string())
}

/// Convert a unix timestamp string to a UTC datetime
///
/// **Private** - derivation layer
fn derive_timestamp(time_stamp: &str) -> Option<DateTime<Utc>> {
    let secs = time_stamp.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0)
}
