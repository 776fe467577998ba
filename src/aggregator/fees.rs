//! Summing gas fees across a set of transactions.

use crate::transaction::GasFeeEntry;
use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;

/// Parse a stored fee, treating anything unusable as absent
///
/// **Public** - shared by the period and daily aggregations
pub fn parse_fee(entry: &impl GasFeeEntry) -> Option<BigInt> {
    entry.gas_fee_wei()?.trim().parse::<BigInt>().ok()
}

/// Sum gas fees in wei
///
/// **Public** - main entry point for fee aggregation
///
/// Unset or non-integer fees contribute zero; this never fails and the
/// result does not depend on input order.
pub fn aggregate_fees<'a, T, I>(transactions: I) -> BigInt
where
    T: GasFeeEntry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut total = BigInt::zero();
    let mut skipped = 0usize;

    for tx in transactions {
        match parse_fee(tx) {
            Some(fee) => total += fee,
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} transactions without a usable gas fee", skipped);
    }

    total
}
