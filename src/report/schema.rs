//! JSON schema of the generated gas report.
//!
//! The report is presentation-ready: every amount except the raw period
//! totals is a pre-formatted string. Schema is versioned to allow future
//! evolution.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Wallet the report was generated for
    pub wallet_address: String,

    /// Current network gas price ("0.01 Gwei") or a placeholder
    pub current_gas_price: String,

    /// Current ETH/USD spot price ("$3000.00 USD") or a placeholder
    pub current_eth_usd_price: String,

    /// Spending totals per period
    pub gas_summary: GasSummary,

    /// Most recent transactions, newest first
    pub transactions: Vec<TransactionSummary>,

    /// Rendered chart, when one was produced
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub chart_path: Option<PathBuf>,

    /// Human-readable notes about degraded collaborators and dropped data
    pub diagnostics: Vec<String>,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,
}

/// Spending totals in the fixed order all-time, 30 days, 7 days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasSummary {
    pub all_time: PeriodSummary,
    pub last_30_days: PeriodSummary,
    pub last_7_days: PeriodSummary,
}

impl GasSummary {
    /// Periods with their display labels, in report order
    pub fn periods(&self) -> [(&'static str, &PeriodSummary); 3] {
        [
            ("All Time", &self.all_time),
            ("Last 30 Days", &self.last_30_days),
            ("Last 7 Days", &self.last_7_days),
        ]
    }
}

/// Gas spent in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Exact total in wei (serialized as a decimal string)
    #[serde(with = "wei_string")]
    pub wei: BigInt,

    /// Total in ether ("0.0021 ETH")
    pub eth: String,

    /// Total in USD ("$6.30 USD") or "$--.-- USD" without a price
    pub usd: String,
}

/// One transaction as shown in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub hash: String,

    /// "YYYY-MM-DD HH:MM:SS" (UTC), or the raw unix timestamp if unparsable
    pub timestamp: String,

    pub from_address: String,
    pub to_address: String,
    pub value_eth: String,
    pub gas_fee_eth: String,
    pub gas_fee_usd: String,
}

/// Serialize wei amounts as decimal strings
///
/// JSON numbers lose precision above 2^53, and wei totals pass that quickly.
mod wei_string {
    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<BigInt>()
            .map_err(|_| de::Error::custom(format!("invalid wei amount '{}'", text)))
    }
}
