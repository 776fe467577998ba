//! Wallet Gas Tracker CLI
//!
//! Reports how much a wallet has spent on gas fees on Base: all-time,
//! last 30 days and last 7 days, with a daily spending chart.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use wallet_gas_tracker::commands::{
    display_version, execute_prices, execute_report, validate_args, validate_report_file,
    PricesArgs, ReportArgs,
};
use wallet_gas_tracker::utils::config::DEFAULT_CHART_DIR;

/// Wallet Gas Tracker - gas fee spending reports for Base wallets
#[derive(Parser, Debug)]
#[command(name = "gas-tracker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a gas spending report for a wallet
    Report {
        /// Wallet address (0x followed by 40 hex characters)
        #[arg(short, long)]
        wallet: String,

        /// Base RPC endpoint for the current gas price
        #[arg(short, long, env = "BASE_RPC_URL")]
        rpc_url: Option<String>,

        /// Basescan API key for ETH price and transactions
        #[arg(short, long, env = "BASESCAN_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Directory for the generated chart
        #[arg(long, default_value = DEFAULT_CHART_DIR)]
        chart_dir: PathBuf,

        /// Skip chart generation
        #[arg(long)]
        no_chart: bool,

        /// Output path for JSON report (printed to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Show the current Ethereum base fee and Base L2 gas price
    Prices {
        /// Base RPC endpoint
        #[arg(short, long, env = "BASE_RPC_URL")]
        rpc_url: Option<String>,

        /// Etherscan API key for the gas oracle
        #[arg(long, env = "ETHERSCAN_API_KEY", hide_env_values = true)]
        etherscan_api_key: Option<String>,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Optional .env, values surface through clap's env fallbacks
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            wallet,
            rpc_url,
            api_key,
            chart_dir,
            no_chart,
            output,
            summary,
        } => {
            let args = ReportArgs {
                wallet_address: wallet.trim().to_string(),
                rpc_url,
                api_key,
                chart_dir,
                no_chart,
                output_json: output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Prices {
            rpc_url,
            etherscan_api_key,
        } => {
            execute_prices(PricesArgs {
                rpc_url,
                etherscan_api_key,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
