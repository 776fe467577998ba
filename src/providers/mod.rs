//! External data providers consumed by the report generator.
//!
//! The report generator only sees the traits below; `RpcClient` and
//! `ExplorerClient` are the blocking HTTP implementations, and tests plug in
//! in-memory fakes.

pub mod explorer;
pub mod rpc;
pub mod types;

use crate::utils::error::ProviderError;
use bigdecimal::BigDecimal;

// Re-export main types
pub use explorer::{ExplorerClient, TxListQuery};
pub use rpc::RpcClient;

/// Source of the current network gas price
pub trait GasPriceSource {
    /// Current gas price in gwei
    fn current_gas_price_gwei(&self) -> Result<BigDecimal, ProviderError>;
}

/// Source of the current ETH/USD spot price
pub trait FiatRateSource {
    fn current_eth_usd_price(&self) -> Result<BigDecimal, ProviderError>;
}

/// Source of a wallet's normal transaction history
pub trait TransactionSource {
    /// Raw transaction objects, newest first
    ///
    /// `Ok` with an empty list means the wallet has no transactions, which
    /// is not an error.
    fn normal_transactions(&self, wallet_address: &str) -> Result<Vec<serde_json::Value>, ProviderError>;
}
