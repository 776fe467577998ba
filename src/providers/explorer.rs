//! HTTP client for Etherscan-compatible block explorers (Basescan, Etherscan).
//!
//! Response interpretation is split from the HTTP call so the status/message
//! rules can be tested without a network.

use super::types::ExplorerResponse;
use super::{FiatRateSource, TransactionSource};
use crate::utils::config::{
    BASESCAN_API_URL, DEFAULT_HTTP_TIMEOUT, ETHERSCAN_API_URL, NO_TRANSACTIONS_MESSAGE,
    TXLIST_END_BLOCK, TXLIST_OFFSET, TXLIST_PAGE, TXLIST_START_BLOCK,
};
use crate::utils::error::ProviderError;
use bigdecimal::BigDecimal;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use std::str::FromStr;

/// Paging and ordering for the txlist endpoint
#[derive(Debug, Clone)]
pub struct TxListQuery {
    pub start_block: u64,
    pub end_block: u64,
    pub page: u32,
    pub offset: u32,
    /// "asc" or "desc"
    pub sort: String,
}

impl Default for TxListQuery {
    fn default() -> Self {
        Self {
            start_block: TXLIST_START_BLOCK,
            end_block: TXLIST_END_BLOCK,
            page: TXLIST_PAGE,
            offset: TXLIST_OFFSET,
            sort: "desc".to_string(),
        }
    }
}

/// Client for one explorer API base URL
pub struct ExplorerClient {
    client: Client,
    base_url: String,
    api_key: String,
    tx_query: TxListQuery,
}

impl ExplorerClient {
    /// Create a new explorer client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(ProviderError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            tx_query: TxListQuery::default(),
        })
    }

    /// Client for the Base mainnet explorer
    pub fn basescan(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::new(BASESCAN_API_URL, api_key)
    }

    /// Client for the Ethereum mainnet explorer
    pub fn etherscan(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::new(ETHERSCAN_API_URL, api_key)
    }

    /// Issue a GET with module/action parameters and decode the envelope
    fn get(&self, params: &[(&str, String)]) -> Result<ExplorerResponse, ProviderError> {
        debug!("Explorer request to {}: {:?}", self.base_url, params);

        let mut query: Vec<(&str, String)> = params.to_vec();
        query.push(("apikey", self.api_key.clone()));

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .map_err(ProviderError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(ProviderError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        response.json().map_err(ProviderError::RequestFailed)
    }

    /// Current ETH price in USD (`stats/ethprice`)
    pub fn eth_price(&self) -> Result<BigDecimal, ProviderError> {
        info!("Fetching ETH/USD price from {}", self.base_url);
        let response = self.get(&[
            ("module", "stats".to_string()),
            ("action", "ethprice".to_string()),
        ])?;
        interpret_price_response(&response)
    }

    /// Normal (external) transactions for a wallet (`account/txlist`)
    pub fn fetch_normal_transactions(
        &self,
        wallet_address: &str,
        query: &TxListQuery,
    ) -> Result<Vec<serde_json::Value>, ProviderError> {
        info!("Fetching transactions for {} from {}", wallet_address, self.base_url);
        let response = self.get(&txlist_params(wallet_address, query))?;
        interpret_txlist_response(response, wallet_address)
    }

    /// Suggested base fee in gwei (`gastracker/gasoracle`, Etherscan only)
    pub fn suggested_base_fee(&self) -> Result<String, ProviderError> {
        info!("Fetching gas oracle from {}", self.base_url);
        let response = self.get(&[
            ("module", "gastracker".to_string()),
            ("action", "gasoracle".to_string()),
        ])?;
        interpret_gas_oracle_response(&response)
    }
}

impl FiatRateSource for ExplorerClient {
    fn current_eth_usd_price(&self) -> Result<BigDecimal, ProviderError> {
        self.eth_price()
    }
}

impl TransactionSource for ExplorerClient {
    fn normal_transactions(&self, wallet_address: &str) -> Result<Vec<serde_json::Value>, ProviderError> {
        self.fetch_normal_transactions(wallet_address, &self.tx_query)
    }
}

/// **Private** - query parameters of an `account/txlist` request
fn txlist_params(wallet_address: &str, query: &TxListQuery) -> Vec<(&'static str, String)> {
    vec![
        ("module", "account".to_string()),
        ("action", "txlist".to_string()),
        ("address", wallet_address.to_string()),
        ("startblock", query.start_block.to_string()),
        ("endblock", query.end_block.to_string()),
        ("page", query.page.to_string()),
        ("offset", query.offset.to_string()),
        ("sort", query.sort.clone()),
    ]
}

/// Extract `result.ethusd` from an ethprice response
///
/// **Public** - pure interpretation step
pub fn interpret_price_response(response: &ExplorerResponse) -> Result<BigDecimal, ProviderError> {
    if !response.is_ok() {
        return Err(ProviderError::Api(response.error_detail()));
    }

    let raw = response
        .result
        .get("ethusd")
        .and_then(|v| v.as_str())
        .ok_or(ProviderError::MissingField("ethusd"))?;

    BigDecimal::from_str(raw)
        .map_err(|_| ProviderError::InvalidResponse(format!("Could not parse ETH price '{}'", raw)))
}

/// Interpret a txlist response
///
/// **Public** - pure interpretation step
///
/// # Returns
/// * status "1" with a list: the list
/// * message "No transactions found" (any status): an empty list
/// * anything else: an API error naming the wallet
pub fn interpret_txlist_response(
    response: ExplorerResponse,
    wallet_address: &str,
) -> Result<Vec<serde_json::Value>, ProviderError> {
    if response.status == "1" {
        return match response.result {
            serde_json::Value::Array(items) => Ok(items),
            other => {
                warn!("Explorer reported success but result was not a list: {}", other);
                Err(ProviderError::InvalidResponse(format!(
                    "Explorer reported success but 'result' was not a list: {}",
                    other
                )))
            }
        };
    }

    if response.message == NO_TRANSACTIONS_MESSAGE {
        return Ok(Vec::new());
    }

    Err(ProviderError::Api(format!(
        "Explorer error for address {}. Message: {}",
        wallet_address,
        response.error_detail()
    )))
}

/// Extract `result.suggestBaseFee` from a gas oracle response
///
/// **Public** - pure interpretation step
pub fn interpret_gas_oracle_response(response: &ExplorerResponse) -> Result<String, ProviderError> {
    if !response.is_ok() {
        return Err(ProviderError::Api(response.error_detail()));
    }

    response
        .result
        .get("suggestBaseFee")
        .and_then(|v| match v {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .ok_or(ProviderError::MissingField("suggestBaseFee"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> ExplorerResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_price_response_ok() {
        let response = envelope(json!({
            "status": "1",
            "message": "OK",
            "result": { "ethbtc": "0.05", "ethusd": "3125.42" }
        }));
        let price = interpret_price_response(&response).unwrap();
        assert_eq!(price, BigDecimal::from_str("3125.42").unwrap());
    }

    #[test]
    fn test_price_response_bad_number() {
        let response = envelope(json!({
            "status": "1",
            "message": "OK",
            "result": { "ethusd": "n/a" }
        }));
        assert!(interpret_price_response(&response).is_err());
    }

    #[test]
    fn test_price_response_api_error() {
        let response = envelope(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key"
        }));
        let err = interpret_price_response(&response).unwrap_err();
        assert_eq!(err.to_string(), "API error: Invalid API Key");
    }

    #[test]
    fn test_txlist_no_transactions_is_empty() {
        let response = envelope(json!({
            "status": "0",
            "message": "No transactions found",
            "result": []
        }));
        assert!(interpret_txlist_response(response, "0xabc").unwrap().is_empty());
    }

    #[test]
    fn test_txlist_success_non_list() {
        let response = envelope(json!({
            "status": "1",
            "message": "OK",
            "result": "unexpected"
        }));
        assert!(interpret_txlist_response(response, "0xabc").is_err());
    }

    #[test]
    fn test_txlist_api_error_mentions_wallet() {
        let response = envelope(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Max rate limit reached"
        }));
        let err = interpret_txlist_response(response, "0xabc").unwrap_err();
        assert!(err.to_string().contains("0xabc"));
        assert!(err.to_string().contains("Max rate limit reached"));
    }

    #[test]
    fn test_gas_oracle_response() {
        let response = envelope(json!({
            "status": "1",
            "message": "OK",
            "result": { "SafeGasPrice": "12", "suggestBaseFee": "11.482" }
        }));
        assert_eq!(interpret_gas_oracle_response(&response).unwrap(), "11.482");

        let missing = envelope(json!({ "status": "1", "message": "OK", "result": {} }));
        assert!(interpret_gas_oracle_response(&missing).is_err());
    }

    #[test]
    fn test_default_txlist_params() {
        let params = txlist_params("0xabc", &TxListQuery::default());
        let lookup = |key: &str| {
            params
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.as_str())
        };

        assert_eq!(lookup("action"), Some("txlist"));
        assert_eq!(lookup("address"), Some("0xabc"));
        assert_eq!(lookup("startblock"), Some("0"));
        assert_eq!(lookup("endblock"), Some("99999999"));
        assert_eq!(lookup("page"), Some("1"));
        assert_eq!(lookup("offset"), Some("100"));
        assert_eq!(lookup("sort"), Some("desc"));
    }
}
