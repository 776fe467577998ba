//! Report assembly.
//!
//! The generator:
//! 1. Reads the current gas price and ETH/USD rate
//! 2. Fetches and validates the wallet's transactions
//! 3. Summarizes the most recent transactions
//! 4. Computes all-time / 30 day / 7 day totals
//! 5. Buckets the last 30 days by date and renders a chart
//!
//! Collaborator failures never abort the report. Each one degrades its field
//! to a placeholder and leaves a diagnostic behind.

use super::schema::{GasReport, GasSummary, PeriodSummary, TransactionSummary};
use crate::aggregator::{daily_buckets_at, gas_spent_for_period_at, TimeWindow};
use crate::chart::ChartRenderer;
use crate::providers::{FiatRateSource, GasPriceSource, TransactionSource};
use crate::transaction::TransactionRecord;
use crate::units::{calculate_fiat_value, gwei_price_string, usd_string, wei_to_ether_str};
use crate::utils::config::{ReportConfig, LAST_30_DAYS, LAST_7_DAYS, SCHEMA_VERSION};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use num_bigint::BigInt;
use num_traits::Zero;
use std::path::PathBuf;

// Placeholders shown in place of unavailable values
pub const GAS_PRICE_NOT_CONFIGURED: &str = "RPC URL not configured";
pub const GAS_PRICE_ERROR: &str = "Error fetching L2 price";
pub const ETH_PRICE_NOT_CONFIGURED: &str = "API Key missing";
pub const ETH_PRICE_ERROR: &str = "Error fetching ETH price";
pub const USD_UNAVAILABLE: &str = "$--.-- USD";
pub const USD_ERROR: &str = "$Error USD";

/// Builds gas reports from pluggable collaborators
///
/// **Public** - every collaborator is optional; a missing one is reported
/// the same way as a misconfigured deployment would be
pub struct ReportGenerator {
    config: ReportConfig,
    gas_price_source: Option<Box<dyn GasPriceSource>>,
    fiat_rate_source: Option<Box<dyn FiatRateSource>>,
    transaction_source: Option<Box<dyn TransactionSource>>,
    chart_renderer: Option<Box<dyn ChartRenderer>>,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            gas_price_source: None,
            fiat_rate_source: None,
            transaction_source: None,
            chart_renderer: None,
        }
    }

    pub fn with_gas_price_source(mut self, source: impl GasPriceSource + 'static) -> Self {
        self.gas_price_source = Some(Box::new(source));
        self
    }

    pub fn with_fiat_rate_source(mut self, source: impl FiatRateSource + 'static) -> Self {
        self.fiat_rate_source = Some(Box::new(source));
        self
    }

    pub fn with_transaction_source(mut self, source: impl TransactionSource + 'static) -> Self {
        self.transaction_source = Some(Box::new(source));
        self
    }

    pub fn with_chart_renderer(mut self, renderer: impl ChartRenderer + 'static) -> Self {
        self.chart_renderer = Some(Box::new(renderer));
        self
    }

    /// Generate a report for `wallet_address` as of the system clock
    ///
    /// **Public** - main entry point
    pub fn generate(&self, wallet_address: &str) -> GasReport {
        self.generate_at(wallet_address, Utc::now())
    }

    /// Generate a report as of an explicit "now"
    ///
    /// **Public** - deterministic variant; "now" anchors the period windows,
    /// the daily buckets and the chart file name
    pub fn generate_at(&self, wallet_address: &str, now: DateTime<Utc>) -> GasReport {
        info!("Generating gas report for {}", wallet_address);
        let mut diagnostics = Vec::new();

        // Step 1: current prices
        let current_gas_price = self.current_gas_price(&mut diagnostics);
        let (current_eth_usd_price, eth_price) = self.current_eth_price(&mut diagnostics);

        // Step 2: transactions
        let records = self.fetch_records(wallet_address, &mut diagnostics);
        info!("Processing {} transactions", records.len());

        // Step 3: recent transaction summaries
        let transactions: Vec<TransactionSummary> = records
            .iter()
            .take(self.config.max_transactions)
            .map(|record| summarize_transaction(record, eth_price.as_ref()))
            .collect();

        // Step 4: period totals
        let period = |window: TimeWindow| {
            period_summary(gas_spent_for_period_at(&records, window, now), eth_price.as_ref())
        };
        let gas_summary = GasSummary {
            all_time: period(TimeWindow::AllTime),
            last_30_days: period(TimeWindow::LastDays(LAST_30_DAYS)),
            last_7_days: period(TimeWindow::LastDays(LAST_7_DAYS)),
        };
        debug!("All-time gas spent: {} wei", gas_summary.all_time.wei);

        // Step 5: chart
        let chart_path = if records.is_empty() {
            None
        } else {
            self.render_chart(wallet_address, &records, now, &mut diagnostics)
        };

        if !diagnostics.is_empty() {
            info!("Report finished with {} diagnostics", diagnostics.len());
        }

        GasReport {
            version: SCHEMA_VERSION.to_string(),
            wallet_address: wallet_address.to_string(),
            current_gas_price,
            current_eth_usd_price,
            gas_summary,
            transactions,
            chart_path,
            diagnostics,
            generated_at: now.to_rfc3339(),
        }
    }

    /// **Private** - gas price display string
    fn current_gas_price(&self, diagnostics: &mut Vec<String>) -> String {
        let Some(source) = &self.gas_price_source else {
            warn!("No gas price source configured");
            diagnostics.push("BASE_RPC_URL not configured.".to_string());
            return GAS_PRICE_NOT_CONFIGURED.to_string();
        };

        match source.current_gas_price_gwei() {
            Ok(gwei) => gwei_price_string(&gwei),
            Err(e) => {
                warn!("Gas price lookup failed: {}", e);
                diagnostics.push(format!("Failed to retrieve Base L2 gas price: {}", e));
                GAS_PRICE_ERROR.to_string()
            }
        }
    }

    /// **Private** - ETH/USD display string plus the price for conversions
    ///
    /// A non-positive price is treated as a failed lookup.
    fn current_eth_price(&self, diagnostics: &mut Vec<String>) -> (String, Option<BigDecimal>) {
        let Some(source) = &self.fiat_rate_source else {
            warn!("No ETH price source configured");
            diagnostics.push(
                "BASESCAN_API_KEY not configured. ETH price and transactions cannot be fetched."
                    .to_string(),
            );
            return (ETH_PRICE_NOT_CONFIGURED.to_string(), None);
        };

        match source.current_eth_usd_price() {
            Ok(price) if price > BigDecimal::zero() => (usd_string(&price), Some(price)),
            Ok(price) => {
                warn!("ETH price source returned a non-positive price: {}", price);
                diagnostics.push("Failed to retrieve current ETH to USD price.".to_string());
                (ETH_PRICE_ERROR.to_string(), None)
            }
            Err(e) => {
                warn!("ETH price lookup failed: {}", e);
                diagnostics.push(format!("Failed to retrieve current ETH to USD price: {}", e));
                (ETH_PRICE_ERROR.to_string(), None)
            }
        }
    }

    /// **Private** - fetch raw transactions and keep the ones that validate
    fn fetch_records(&self, wallet_address: &str, diagnostics: &mut Vec<String>) -> Vec<TransactionRecord> {
        let Some(source) = &self.transaction_source else {
            if self.fiat_rate_source.is_some() {
                diagnostics.push("Transaction source not configured.".to_string());
            }
            return Vec::new();
        };

        let raw = match source.normal_transactions(wallet_address) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Transaction lookup failed: {}", e);
                diagnostics.push(format!("Could not fetch transactions: {}", e));
                return Vec::new();
            }
        };

        if raw.is_empty() {
            diagnostics.push(format!("No transactions found for wallet {}.", wallet_address));
            return Vec::new();
        }

        let mut records = Vec::with_capacity(raw.len());
        for value in &raw {
            match TransactionRecord::from_json(value) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let hash = value.get("hash").and_then(|h| h.as_str()).unwrap_or("N/A");
                    warn!("Dropping transaction {}: {}", hash, e);
                    diagnostics.push(format!("Skipped transaction {}: {}", hash, e));
                }
            }
        }

        debug!("Validated {} of {} transactions", records.len(), raw.len());
        records
    }

    /// **Private** - bucket the recent window and hand it to the renderer
    fn render_chart(
        &self,
        wallet_address: &str,
        records: &[TransactionRecord],
        now: DateTime<Utc>,
        diagnostics: &mut Vec<String>,
    ) -> Option<PathBuf> {
        let buckets = daily_buckets_at(records, self.config.days_limit, now.date_naive());
        if buckets.is_empty() {
            diagnostics.push(format!(
                "No recent transactions in the last {} days to generate a graph.",
                self.config.days_limit
            ));
            return None;
        }

        let Some(renderer) = &self.chart_renderer else {
            debug!("No chart renderer configured, skipping chart");
            return None;
        };

        let path = self
            .config
            .chart_dir
            .join(chart_file_name(wallet_address, now));

        match renderer.render(&buckets, &path) {
            Ok(()) => {
                info!("✓ Chart written to: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Chart generation failed: {}", e);
                diagnostics.push(format!("Graph generation failed: {}", e));
                None
            }
        }
    }
}

/// Chart file name, unique per wallet and second
///
/// **Public** - `gas_graph_<first 6>_<last 4>_<YYYYmmddHHMMSS>.svg`
pub fn chart_file_name(wallet_address: &str, now: DateTime<Utc>) -> String {
    let head: String = wallet_address.chars().take(6).collect();
    let tail: String = {
        let mut tail: Vec<char> = wallet_address.chars().rev().take(4).collect();
        tail.reverse();
        tail.into_iter().collect()
    };

    format!("gas_graph_{}_{}_{}.svg", head, tail, now.format("%Y%m%d%H%M%S"))
}

/// Format one record for the report
///
/// **Private** - internal helper
fn summarize_transaction(record: &TransactionRecord, eth_price: Option<&BigDecimal>) -> TransactionSummary {
    let timestamp = record
        .timestamp()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| record.time_stamp().to_string());

    TransactionSummary {
        hash: record.hash().to_string(),
        timestamp,
        from_address: record.from_address().to_string(),
        to_address: record.to_address().to_string(),
        value_eth: record.value_eth_str(),
        gas_fee_eth: record.gas_fee_eth_str(),
        gas_fee_usd: fee_usd_string(record.gas_fee_wei(), eth_price),
    }
}

/// USD string for a single fee
///
/// **Public** - "$--.-- USD" without a fee or price, "$Error USD" when the
/// fee is not an integer
pub fn fee_usd_string(fee_wei: Option<&str>, eth_price: Option<&BigDecimal>) -> String {
    let (Some(fee), Some(_)) = (fee_wei, eth_price) else {
        return USD_UNAVAILABLE.to_string();
    };

    match fee.trim().parse::<BigInt>() {
        Ok(wei) => calculate_fiat_value(&wei, eth_price)
            .map(|value| usd_string(&value))
            .unwrap_or_else(|| USD_UNAVAILABLE.to_string()),
        Err(_) => USD_ERROR.to_string(),
    }
}

/// **Private** - period total in all three representations
fn period_summary(wei: BigInt, eth_price: Option<&BigDecimal>) -> PeriodSummary {
    let usd = calculate_fiat_value(&wei, eth_price)
        .map(|value| usd_string(&value))
        .unwrap_or_else(|| USD_UNAVAILABLE.to_string());

    PeriodSummary {
        eth: wei_to_ether_str(&wei),
        usd,
        wei,
    }
}
