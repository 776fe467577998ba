use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    if report.version != SCHEMA_VERSION {
        println!(
            "⚠ Schema version {} differs from current {}",
            report.version, SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Wallet: {}", report.wallet_address);
    println!(
        "  All-Time Gas: {} ({} wei)",
        report.gas_summary.all_time.eth, report.gas_summary.all_time.wei
    );
    println!("  Transactions: {}", report.transactions.len());
    println!("  Diagnostics: {}", report.diagnostics.len());
    println!("  Generated At: {}", report.generated_at);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Wallet Gas Tracker v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Gas fee spending reports for wallets on Base.");
}
