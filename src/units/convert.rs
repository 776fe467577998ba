//! Conversions between wei and human units (ether, gwei) and fiat values.
//!
//! All arithmetic is done on `BigDecimal`/`BigInt`. Wei amounts routinely
//! exceed 64 bits and fiat rounding must not drift, so floats never touch
//! these values.

use super::format::{group_thousands, strip_trailing_zeros, to_fixed};
use crate::utils::config::{GWEI_DECIMALS, MAX_WEI_DIGITS, TINY_ETHER_DECIMALS, WEI_DECIMALS};
use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::str::FromStr;

/// A wei amount in any of the shapes the explorer and callers hand us
///
/// **Public** - accepted by the ether/gwei formatters via `Into<WeiAmount>`
#[derive(Debug, Clone, PartialEq)]
pub enum WeiAmount {
    /// No value at all
    Missing,

    /// Decimal string as returned by the explorer
    Text(String),

    /// Exact integer
    Integer(BigInt),

    /// Arbitrary precision decimal
    Decimal(BigDecimal),
}

impl WeiAmount {
    /// Resolve to a decimal; `Ok(None)` for missing or blank input
    ///
    /// Exponent notation such as "1e1000000000" parses, so the magnitude is
    /// bounded before any rescaling touches it.
    fn to_decimal(&self) -> Result<Option<BigDecimal>, ParseBigDecimalError> {
        let value = match self.resolve()? {
            Some(value) => value,
            None => return Ok(None),
        };

        let (_, scale) = value.as_bigint_and_exponent();
        let integer_digits = i64::try_from(value.digits())
            .unwrap_or(i64::MAX)
            .saturating_sub(scale);
        if integer_digits > MAX_WEI_DIGITS || scale > MAX_WEI_DIGITS {
            return Err(ParseBigDecimalError::Other(format!(
                "wei amount out of range ({} integer digits, scale {})",
                integer_digits, scale
            )));
        }

        Ok(Some(value))
    }

    fn resolve(&self) -> Result<Option<BigDecimal>, ParseBigDecimalError> {
        match self {
            WeiAmount::Missing => Ok(None),
            WeiAmount::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    BigDecimal::from_str(trimmed).map(Some)
                }
            }
            WeiAmount::Integer(value) => Ok(Some(BigDecimal::from(value.clone()))),
            WeiAmount::Decimal(value) => Ok(Some(value.clone())),
        }
    }
}

impl From<&str> for WeiAmount {
    fn from(value: &str) -> Self {
        WeiAmount::Text(value.to_string())
    }
}

impl From<String> for WeiAmount {
    fn from(value: String) -> Self {
        WeiAmount::Text(value)
    }
}

impl From<&String> for WeiAmount {
    fn from(value: &String) -> Self {
        WeiAmount::Text(value.clone())
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        WeiAmount::Integer(BigInt::from(value))
    }
}

impl From<u128> for WeiAmount {
    fn from(value: u128) -> Self {
        WeiAmount::Integer(BigInt::from(value))
    }
}

impl From<i64> for WeiAmount {
    fn from(value: i64) -> Self {
        WeiAmount::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for WeiAmount {
    fn from(value: BigInt) -> Self {
        WeiAmount::Integer(value)
    }
}

impl From<&BigInt> for WeiAmount {
    fn from(value: &BigInt) -> Self {
        WeiAmount::Integer(value.clone())
    }
}

impl From<BigDecimal> for WeiAmount {
    fn from(value: BigDecimal) -> Self {
        WeiAmount::Decimal(value)
    }
}

impl From<&BigDecimal> for WeiAmount {
    fn from(value: &BigDecimal) -> Self {
        WeiAmount::Decimal(value.clone())
    }
}

impl<T: Into<WeiAmount>> From<Option<T>> for WeiAmount {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(WeiAmount::Missing)
    }
}

/// Divide by 10^decimals without rounding (pure scale shift)
fn shift_decimals(value: &BigDecimal, decimals: i64) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, scale + decimals)
}

/// Exact ether value of an integer wei amount
pub fn wei_to_ether(wei: &BigInt) -> BigDecimal {
    BigDecimal::new(wei.clone(), WEI_DECIMALS)
}

/// Convert a wei amount to a display string in ether
///
/// **Public** - used for transaction values, fees and period totals
///
/// # Formatting
/// * zero or blank input: "0.00 ETH"
/// * 1 ETH or more: comma grouped, two decimals ("1,234.57 ETH")
/// * below 0.000001 ETH: up to 18 decimals, trailing zeros stripped
/// * otherwise two decimals, falling back to up to 8 decimals when two
///   decimals would print a nonzero amount as zero
///
/// Non-numeric input yields "Error converting Wei to Ether".
pub fn wei_to_ether_str(amount: impl Into<WeiAmount>) -> String {
    let wei = match amount.into().to_decimal() {
        Ok(Some(wei)) => wei,
        Ok(None) => return "0.00 ETH".to_string(),
        Err(_) => return "Error converting Wei to Ether".to_string(),
    };

    let ether = shift_decimals(&wei, WEI_DECIMALS);

    if ether.is_zero() {
        return "0.00 ETH".to_string();
    }

    if ether >= BigDecimal::one() {
        return format!(
            "{} ETH",
            group_thousands(&to_fixed(&ether, 2, RoundingMode::HalfEven))
        );
    }

    let tiny = BigDecimal::new(BigInt::one(), TINY_ETHER_DECIMALS);
    if ether < tiny {
        return format!(
            "{} ETH",
            strip_trailing_zeros(&to_fixed(&ether, WEI_DECIMALS, RoundingMode::HalfEven))
        );
    }

    if ether.with_scale_round(2, RoundingMode::HalfEven).is_zero() {
        format!(
            "{} ETH",
            strip_trailing_zeros(&to_fixed(&ether, 8, RoundingMode::HalfEven))
        )
    } else {
        format!("{} ETH", to_fixed(&ether, 2, RoundingMode::HalfEven))
    }
}

/// Convert a wei amount to a display string in gwei
///
/// **Public** - whole gwei print without decimals ("1,234 Gwei"),
/// fractional gwei with two ("1.23 Gwei")
pub fn wei_to_gwei_str(amount: impl Into<WeiAmount>) -> String {
    let wei = match amount.into().to_decimal() {
        Ok(Some(wei)) => wei,
        Ok(None) => return "0 Gwei".to_string(),
        Err(_) => return "Error converting Wei to Gwei".to_string(),
    };

    let gwei = shift_decimals(&wei, GWEI_DECIMALS);

    if gwei.is_zero() {
        return "0 Gwei".to_string();
    }

    let places = if gwei.with_scale(0) == gwei { 0 } else { 2 };
    format!(
        "{} Gwei",
        group_thousands(&to_fixed(&gwei, places, RoundingMode::HalfEven))
    )
}

/// Convert a wei amount to gwei as a decimal (for chart plotting)
///
/// **Public** - invalid or blank input yields zero
pub fn wei_to_gwei_decimal(amount: impl Into<WeiAmount>) -> BigDecimal {
    match amount.into().to_decimal() {
        Ok(Some(wei)) => shift_decimals(&wei, GWEI_DECIMALS),
        _ => BigDecimal::zero(),
    }
}

/// Calculate the fiat value of a wei amount at a spot price
///
/// **Public** - returns None when the price is absent or not positive
///
/// # Returns
/// `(wei / 10^18) * price`, rounded half-up to two decimals (0.005 -> 0.01)
pub fn calculate_fiat_value(wei: &BigInt, price: Option<&BigDecimal>) -> Option<BigDecimal> {
    let price = price?;
    if *price <= BigDecimal::zero() {
        return None;
    }

    let value = wei_to_ether(wei) * price;
    Some(value.with_scale_round(2, RoundingMode::HalfUp))
}

/// Format a fiat amount as "$12.34 USD"
pub fn usd_string(value: &BigDecimal) -> String {
    format!("${} USD", to_fixed(value, 2, RoundingMode::HalfEven))
}

/// Format a gwei gas price as "0.01 Gwei"
pub fn gwei_price_string(gwei: &BigDecimal) -> String {
    format!("{} Gwei", to_fixed(gwei, 2, RoundingMode::HalfEven))
}
