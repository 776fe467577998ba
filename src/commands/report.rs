//! Report command implementation.
//!
//! The report command:
//! 1. Builds the configured providers
//! 2. Generates the gas report
//! 3. Writes the JSON report (if requested)
//! 4. Prints the report (summary text or JSON)

use crate::chart::{ChartConfig, SvgChartRenderer};
use crate::output::{report_to_string, write_report};
use crate::providers::{ExplorerClient, RpcClient};
use crate::report::{generate_text_summary, GasReport, ReportGenerator};
use crate::utils::config::{ReportConfig, DEFAULT_CHART_DIR, DEFAULT_MAX_TRANSACTIONS};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Wallet to report on
    pub wallet_address: String,

    /// Chain RPC endpoint for the current gas price
    pub rpc_url: Option<String>,

    /// Explorer API key for prices and transactions
    pub api_key: Option<String>,

    /// Directory for generated charts
    pub chart_dir: PathBuf,

    /// Skip chart rendering
    pub no_chart: bool,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print text summary instead of JSON to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            wallet_address: String::new(),
            rpc_url: None,
            api_key: None,
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            no_chart: false,
            output_json: None,
            print_summary: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Provider client construction failures
/// * File write errors
///
/// Provider call failures do not fail the command; they show up as report
/// diagnostics.
pub fn execute_report(args: ReportArgs) -> Result<GasReport> {
    let start_time = Instant::now();

    info!("Starting report for wallet: {}", args.wallet_address);

    let generator = build_generator(&args)?;
    let report = generator.generate(&args.wallet_address);

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("WALLET GAS REPORT");
        println!("{}", "=".repeat(80));
        println!("{}", generate_text_summary(&report, DEFAULT_MAX_TRANSACTIONS));
        println!("{}", "=".repeat(80));
    } else if args.output_json.is_none() {
        println!("{}", report_to_string(&report).context("Failed to serialize report")?);
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Wire the configured providers into a generator
///
/// **Private** - internal helper for execute_report
fn build_generator(args: &ReportArgs) -> Result<ReportGenerator> {
    let config = ReportConfig::new().with_chart_dir(&args.chart_dir);
    let mut generator = ReportGenerator::new(config);

    if let Some(rpc_url) = &args.rpc_url {
        debug!("Using RPC endpoint: {}", rpc_url);
        let client = RpcClient::new(rpc_url.as_str()).context("Failed to create RPC client")?;
        generator = generator.with_gas_price_source(client);
    }

    if let Some(api_key) = &args.api_key {
        // Separate clients: the generator owns each collaborator
        let prices = ExplorerClient::basescan(api_key.as_str())
            .context("Failed to create explorer client")?;
        let transactions = ExplorerClient::basescan(api_key.as_str())
            .context("Failed to create explorer client")?;
        generator = generator
            .with_fiat_rate_source(prices)
            .with_transaction_source(transactions);
    }

    if !args.no_chart {
        generator = generator.with_chart_renderer(SvgChartRenderer::new(ChartConfig::new()));
    }

    Ok(generator)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    validate_wallet_address(&args.wallet_address)?;

    if let Some(rpc_url) = &args.rpc_url {
        validate_rpc_url(rpc_url)?;
    }

    if let Some(api_key) = &args.api_key {
        if api_key.trim().is_empty() {
            anyhow::bail!("API key cannot be blank");
        }
    }

    Ok(())
}

/// Check the basic `0x` + 40 character wallet format
///
/// **Public** - format check only, no checksum validation
pub fn validate_wallet_address(wallet_address: &str) -> Result<()> {
    if wallet_address.is_empty() {
        anyhow::bail!("Wallet address cannot be empty");
    }

    if !wallet_address.starts_with("0x") || wallet_address.len() != 42 {
        anyhow::bail!("Invalid wallet address format: expected 0x followed by 40 characters");
    }

    Ok(())
}

/// **Public** - RPC URL must be http(s)
pub fn validate_rpc_url(rpc_url: &str) -> Result<()> {
    if rpc_url.is_empty() {
        anyhow::bail!("RPC URL cannot be empty");
    }

    if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
        anyhow::bail!("RPC URL must start with http:// or https://");
    }

    Ok(())
}
