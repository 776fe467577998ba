//! Gas report assembly and presentation.
//!
//! This module handles:
//! - Orchestrating providers, aggregation and charting into a `GasReport`
//! - The report JSON schema
//! - A plain-text rendering for the terminal

pub mod assembler;
pub mod schema;

// Re-export main types
pub use assembler::{chart_file_name, fee_usd_string, ReportGenerator};
pub use schema::{GasReport, GasSummary, PeriodSummary, TransactionSummary};

/// Render a report as a terminal summary
///
/// **Public** - used by the `report --summary` command
///
/// # Arguments
/// * `report` - Finished report
/// * `max_transactions` - Cap on listed transactions
pub fn generate_text_summary(report: &GasReport, max_transactions: usize) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Wallet Address:    {}", report.wallet_address));
    lines.push(format!("Current Gas Price: {}", report.current_gas_price));
    lines.push(format!("Current ETH Price: {}", report.current_eth_usd_price));

    lines.push(String::new());
    lines.push("Gas Spending Summary:".to_string());
    for (label, period) in report.gas_summary.periods() {
        lines.push(format!("  {:<13} {} ({})", format!("{}:", label), period.eth, period.usd));
    }

    if let Some(path) = &report.chart_path {
        lines.push(String::new());
        lines.push(format!("Gas Spending Chart: {}", path.display()));
    }

    if !report.transactions.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Recent Transactions (showing {} of {}):",
            report.transactions.len().min(max_transactions),
            report.transactions.len()
        ));
        for (i, tx) in report.transactions.iter().take(max_transactions).enumerate() {
            lines.push(format!("  {}. {}  {}", i + 1, tx.timestamp, tx.hash));
            lines.push(format!("     {} -> {}", tx.from_address, tx.to_address));
            lines.push(format!(
                "     Value: {}  Fee: {} ({})",
                tx.value_eth, tx.gas_fee_eth, tx.gas_fee_usd
            ));
        }
    }

    if !report.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for message in &report.diagnostics {
            lines.push(format!("  - {}", message));
        }
    }

    lines.join("\n")
}
