//! Transaction records and the view the aggregator needs of them.
//!
//! This module handles:
//! - Deserializing raw explorer transactions
//! - Validating numeric fields
//! - Deriving gas fee and timestamp once per record

pub mod record;

use chrono::{DateTime, Utc};

// Re-export main types
pub use record::{RawTransaction, TransactionRecord};

/// What the aggregation engine reads from a transaction
///
/// **Public** - implemented by `TransactionRecord`; tests implement it on
/// lightweight stand-ins to feed edge values (e.g. a non-integer fee)
pub trait GasFeeEntry {
    /// Calendar datetime of the transaction, if known
    fn timestamp(&self) -> Option<DateTime<Utc>>;

    /// Gas fee in wei as a decimal string, if known
    fn gas_fee_wei(&self) -> Option<&str>;
}
