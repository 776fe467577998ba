//! Wire types for JSON-RPC and block explorer responses.

use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request
    ///
    /// # Arguments
    /// * `method` - RPC method name (e.g. "eth_gasPrice")
    /// * `params` - Positional parameters
    /// * `id` - Request ID (for response correlation)
    pub fn new(method: impl Into<String>, params: serde_json::Value, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Request for the node's current gas price
    pub fn gas_price(id: u64) -> Self {
        Self::new("eth_gasPrice", serde_json::json!([]), id)
    }
}

/// JSON-RPC 2.0 response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Envelope shared by all Etherscan-compatible explorer endpoints
///
/// `result` is a list for txlist, an object for ethprice/gasoracle, and a
/// plain error string when the call fails, so it stays a `Value` here.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

impl ExplorerResponse {
    /// Status "1" with message "OK"
    pub fn is_ok(&self) -> bool {
        self.status == "1" && self.message == "OK"
    }

    /// Best human-readable error detail (result string, else message)
    pub fn error_detail(&self) -> String {
        match &self.result {
            serde_json::Value::String(s) if !s.is_empty() => s.clone(),
            _ if !self.message.is_empty() => self.message.clone(),
            _ => "Unknown API error".to_string(),
        }
    }
}
