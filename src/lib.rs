//! Wallet Gas Tracker
//!
//! Gas fee spending reports for wallets on Base.
//!
//! This crate provides the core implementation for the
//! `gas-tracker` CLI tool: validated transaction records, period and
//! daily gas aggregation, unit conversion, and report assembly on top of
//! pluggable price, transaction and chart collaborators.
//!
//! ## Getting Started
//!
//! ```bash
//! gas-tracker report --wallet 0x... --summary
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod providers;
pub mod report;
pub mod transaction;
pub mod units;
pub mod utils;
