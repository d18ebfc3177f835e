use alloy::primitives::utils::{parse_units, ParseUnits};
use alloy::primitives::U256;
use anyhow::{Context, Result};

/// Every contract in the suite works in 18-decimals fixed point.
pub const UNITS: u8 = 18;

/// Parse a human amount ("1", "0.5", "1000") into raw 18-decimals units.
pub fn parse_amount(amount: &str) -> Result<U256> {
    let parsed: ParseUnits = parse_units(amount, UNITS)
        .with_context(|| format!("bad token amount `{amount}`"))?;
    Ok(parsed.into())
}

pub fn format_token(amount: U256, decimals: u32) -> String {
    let base = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / base;
    let frac = amount % base;
    if frac.is_zero() {
        return format!("{whole}");
    }
    let mut frac_str = format!("{:0width$}", frac, width = decimals as usize);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}

/// Insert thousands separators into the whole part of a decimal string.
pub fn with_commas(value: &str) -> String {
    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (value, None),
    };

    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    let digits: Vec<char> = whole.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    match frac {
        Some(f) => format!("{out}.{f}"),
        None => out,
    }
}

/// Operator-facing rendering of a raw amount: trimmed fraction, commas.
pub fn format_amount(amount: U256) -> String {
    with_commas(&format_token(amount, UNITS as u32))
}

/// Collapse a raw amount to its whole-token figure. Activity records on
/// the leaderboard store whole tokens, not raw units.
pub fn whole_units(amount: U256) -> U256 {
    amount / U256::from(10u64).pow(U256::from(UNITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_amount() {
        let one = parse_amount("1").unwrap();
        assert_eq!(one, U256::from(10u64).pow(U256::from(18u64)));
    }

    #[test]
    fn parse_fractional_amount() {
        let half = parse_amount("0.5").unwrap();
        assert_eq!(format_token(half, 18), "0.5");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn format_trims_trailing_zeros() {
        let amount = parse_amount("1.250000").unwrap();
        assert_eq!(format_token(amount, 18), "1.25");
    }

    #[test]
    fn format_zero() {
        assert_eq!(format_token(U256::ZERO, 18), "0");
        assert_eq!(format_amount(U256::ZERO), "0");
    }

    #[test]
    fn commas_group_thousands() {
        assert_eq!(with_commas("1"), "1");
        assert_eq!(with_commas("999"), "999");
        assert_eq!(with_commas("1000"), "1,000");
        assert_eq!(with_commas("1234567"), "1,234,567");
        assert_eq!(with_commas("1234567.89"), "1,234,567.89");
    }

    #[test]
    fn whole_units_truncates_fraction() {
        assert_eq!(whole_units(parse_amount("10").unwrap()), U256::from(10u64));
        assert_eq!(whole_units(parse_amount("10.9").unwrap()), U256::from(10u64));
        assert_eq!(whole_units(U256::from(1u64)), U256::ZERO);
    }

    #[test]
    fn full_amount_rendering() {
        let amount = parse_amount("1000000").unwrap();
        assert_eq!(format_amount(amount), "1,000,000");
    }
}
