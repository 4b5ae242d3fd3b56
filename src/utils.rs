use anyhow::{anyhow, Result};
use ethers::types::U256;

pub fn format_ether(wei: U256) -> String {
    ethers::utils::format_units(wei, "ether").unwrap_or_else(|_| "0.0".to_string())
}

/// True for plain unsigned decimals such as `12`, `0.5` or `.5`.
///
/// Validation accepts more than this (hex, exponents, signs); those amounts
/// are fine to keep on a line but are not converted to wei.
pub fn is_plain_decimal(input: &str) -> bool {
    let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && digits(whole) && digits(fraction)
}

/// Parse a string representing ETH to Wei
///
/// # Errors
/// Returns an error if the string is empty, not a plain decimal, or has more
/// precision than wei allows
pub fn parse_eth_str_to_wei(input: &str) -> Result<U256> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("ETH amount cannot be empty"));
    }
    if !is_plain_decimal(trimmed) {
        return Err(anyhow!("Invalid ETH amount '{}': not a plain decimal", trimmed));
    }

    let normalized = match trimmed.split_once('.') {
        Some(("", fraction)) => format!("0.{}", fraction),
        Some((whole, "")) => whole.to_string(),
        _ => trimmed.to_string(),
    };

    ethers::utils::parse_ether(normalized)
        .map_err(|e| anyhow!("Invalid ETH amount '{}': {}", trimmed, e))
}

/// Sum of wei amounts, clamped at `U256::MAX`.
///
/// The flag is true when the real total does not fit in uint256.
pub fn saturating_sum_wei<I: IntoIterator<Item = U256>>(amounts: I) -> (U256, bool) {
    amounts
        .into_iter()
        .fold((U256::zero(), false), |(acc, overflowed), x| match acc.checked_add(x) {
            Some(sum) => (sum, overflowed),
            None => (U256::MAX, true),
        })
}
