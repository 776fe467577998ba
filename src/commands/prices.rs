//! Prices command implementation.
//!
//! Prints the Ethereum suggested base fee and the current L2 gas price.
//! Either lookup is skipped with a warning when its setting is absent.

use crate::providers::{ExplorerClient, GasPriceSource, RpcClient};
use crate::units::gwei_price_string;
use anyhow::{Context, Result};
use log::{info, warn};

/// Arguments for the prices command
#[derive(Debug, Clone, Default)]
pub struct PricesArgs {
    pub rpc_url: Option<String>,
    pub etherscan_api_key: Option<String>,
}

/// Execute the prices command
///
/// **Public** - called from main.rs
///
/// Lookup failures are printed, not returned; only client construction
/// errors fail the command.
pub fn execute_prices(args: PricesArgs) -> Result<()> {
    match &args.etherscan_api_key {
        None => println!("Warning: ETHERSCAN_API_KEY not set. Skipping Ethereum gas fee."),
        Some(api_key) => {
            println!("\nFetching current Ethereum base gas fee from Etherscan...");
            let client = ExplorerClient::etherscan(api_key.as_str())
                .context("Failed to create Etherscan client")?;
            match client.suggested_base_fee() {
                Ok(fee) => println!("Current Ethereum suggested base fee: {} Gwei", fee),
                Err(e) => {
                    warn!("Gas oracle lookup failed: {}", e);
                    println!("Failed to retrieve the Ethereum current base gas fee.");
                }
            }
        }
    }

    match &args.rpc_url {
        None => println!("\nWarning: BASE_RPC_URL not set. Skipping Base L2 gas price."),
        Some(rpc_url) => {
            println!("\nFetching current Base L2 gas price from {}...", rpc_url);
            let client = RpcClient::new(rpc_url.as_str()).context("Failed to create RPC client")?;
            match client.current_gas_price_gwei() {
                Ok(gwei) => println!("Current Base L2 Gas Price: {}", gwei_price_string(&gwei)),
                Err(e) => {
                    warn!("Gas price lookup failed: {}", e);
                    println!("Failed to retrieve the Base L2 gas price.");
                }
            }
        }
    }

    info!("Price lookup finished");
    Ok(())
}
