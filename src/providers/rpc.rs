//! HTTP client for the chain's JSON-RPC endpoint.

use super::types::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use super::GasPriceSource;
use crate::units::wei_to_gwei_decimal;
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::ProviderError;
use bigdecimal::BigDecimal;
use log::{debug, info};
use num_bigint::BigInt;
use reqwest::blocking::Client;

/// RPC client for reading the current L2 gas price
pub struct RpcClient {
    client: Client,
    rpc_url: String,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(ProviderError::RequestFailed)?;

        Ok(Self {
            client,
            rpc_url: rpc_url.into(),
        })
    }

    /// Fetch the current gas price in wei via `eth_gasPrice`
    pub fn gas_price_wei(&self) -> Result<BigInt, ProviderError> {
        info!("Fetching gas price from {}", self.rpc_url);

        let request = JsonRpcRequest::gas_price(1);
        debug!("RPC request: {:?}", request);

        let response = self
            .client
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .map_err(ProviderError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(ProviderError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let rpc_response: JsonRpcResponse<String> =
            response.json().map_err(ProviderError::RequestFailed)?;

        if let Some(error) = rpc_response.error {
            return Err(map_rpc_error(error));
        }

        let quantity = rpc_response
            .result
            .ok_or(ProviderError::MissingField("result"))?;

        parse_hex_quantity(&quantity)
    }
}

impl GasPriceSource for RpcClient {
    fn current_gas_price_gwei(&self) -> Result<BigDecimal, ProviderError> {
        let wei = self.gas_price_wei()?;
        Ok(wei_to_gwei_decimal(wei))
    }
}

/// Parse a JSON-RPC quantity ("0x..." hex, or plain decimal)
///
/// **Public** - shared with tests
pub fn parse_hex_quantity(value: &str) -> Result<BigInt, ProviderError> {
    let parsed = match value.strip_prefix("0x") {
        Some("") => None,
        Some(hex) => BigInt::parse_bytes(hex.as_bytes(), 16),
        None => value.parse::<BigInt>().ok(),
    };

    parsed.ok_or_else(|| ProviderError::InvalidResponse(format!("Invalid quantity: {}", value)))
}

/// Map JSON-RPC error to our error type
fn map_rpc_error(error: JsonRpcError) -> ProviderError {
    match error.code {
        -32601 => ProviderError::Api("eth_gasPrice not supported by this endpoint".to_string()),
        _ => ProviderError::Api(format!("{}: {}", error.code, error.message)),
    }
}
