//! Numeric conversion between base units and display units.
//!
//! This module handles:
//! - wei to ether / gwei display strings
//! - wei to gwei decimals for plotting
//! - fiat value calculation at a spot price

pub mod convert;
pub mod format;

// Re-export main functions
pub use convert::{
    calculate_fiat_value, gwei_price_string, usd_string, wei_to_ether, wei_to_ether_str,
    wei_to_gwei_decimal, wei_to_gwei_str, WeiAmount,
};
pub use format::{group_thousands, strip_trailing_zeros, to_fixed};
