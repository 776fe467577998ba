//! Configuration and constants for the tracker.

use std::path::PathBuf;
use std::time::Duration;

/// Default timeout for provider HTTP requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Base-unit scales
// 1 ether = 10^18 wei, 1 gwei = 10^9 wei
pub const WEI_DECIMALS: i64 = 18;
pub const GWEI_DECIMALS: i64 = 9;

/// Widest wei amount (integer or fractional digits) the formatters accept
pub const MAX_WEI_DIGITS: i64 = 80;

/// Ether amounts below 10^-6 are printed with full 18-decimal precision
pub const TINY_ETHER_DECIMALS: i64 = 6;

// Sliding windows of the period summaries (days)
pub const LAST_30_DAYS: u32 = 30;
pub const LAST_7_DAYS: u32 = 7;

/// Length of the daily spending window (days, including today)
pub const DEFAULT_DAYS_LIMIT: u32 = 30;

/// Number of most recent transactions exposed in a report
pub const DEFAULT_MAX_TRANSACTIONS: usize = 20;

/// Directory that receives generated charts
pub const DEFAULT_CHART_DIR: &str = "static/images";

// Block explorer endpoints (Etherscan-compatible API)
pub const BASESCAN_API_URL: &str = "https://api.basescan.org/api";
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";
pub const DEFAULT_BASE_RPC_URL: &str = "https://mainnet.base.org";

// txlist paging defaults
pub const TXLIST_START_BLOCK: u64 = 0;
pub const TXLIST_END_BLOCK: u64 = 99_999_999;
pub const TXLIST_PAGE: u32 = 1;
pub const TXLIST_OFFSET: u32 = 100;

/// Explorer message returned for wallets without history
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

/// Settings for one report generation
///
/// **Public** - passed explicitly into the report generator, nothing
/// downstream reads the process environment.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Where chart files are written
    pub chart_dir: PathBuf,

    /// Daily bucket window length
    pub days_limit: u32,

    /// Cap on transaction summaries in the report
    pub max_transactions: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            days_limit: DEFAULT_DAYS_LIMIT,
            max_transactions: DEFAULT_MAX_TRANSACTIONS,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chart_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chart_dir = dir.into();
        self
    }
}
