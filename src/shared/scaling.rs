//! Pure conversion of raw fixed-point token amounts into human units.
//!
//! Reserve prices use `f64`: pair reserves are `uint112` and routinely exceed
//! the 96-bit mantissa of `rust_decimal::Decimal`. Individual transfer amounts
//! use `Decimal` where they fit. No async, no network calls.

use std::fmt;

use alloy::primitives::U256;
use rust_decimal::Decimal;

/// Largest scale `rust_decimal` can represent.
const MAX_DECIMAL_SCALE: u8 = 28;

/// Errors that can occur during amount scaling.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalingError {
    /// The base side of a ratio is zero; the price is undefined.
    ZeroReserve,
    Overflow { context: String },
    UnsupportedDecimals(u8),
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::ZeroReserve => write!(f, "reserve0 is zero, price is undefined"),
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
            ScalingError::UnsupportedDecimals(d) => {
                write!(f, "{} decimals exceed the supported scale of {}", d, MAX_DECIMAL_SCALE)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

/// `raw / 10^decimals` as a float.
pub fn scale_down(raw: u128, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}

/// Price of token0 quoted in token1.
///
/// ```text
/// price = (reserve1 / 10^decimals1) / (reserve0 / 10^decimals0)
/// ```
pub fn reserve_ratio(
    reserve0: u128,
    decimals0: u8,
    reserve1: u128,
    decimals1: u8,
) -> Result<f64, ScalingError> {
    if reserve0 == 0 {
        return Err(ScalingError::ZeroReserve);
    }
    Ok(scale_down(reserve1, decimals1) / scale_down(reserve0, decimals0))
}

/// Exact `raw / 10^decimals` for token amounts that fit a `Decimal`.
pub fn scale_amount(raw: U256, decimals: u8) -> Result<Decimal, ScalingError> {
    if decimals > MAX_DECIMAL_SCALE {
        return Err(ScalingError::UnsupportedDecimals(decimals));
    }
    let value = u128::try_from(raw)
        .ok()
        .and_then(|v| i128::try_from(v).ok())
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} does not fit in 127 bits", raw),
        })?;
    Decimal::try_from_i128_with_scale(value, decimals as u32).map_err(|e| ScalingError::Overflow {
        context: format!("{} at scale {}: {}", raw, decimals, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(f64::MIN_POSITIVE);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_scale_down() {
        assert_close(scale_down(1_000_000, 6), 1.0);
        assert_close(scale_down(1_500_000_000_000_000_000, 18), 1.5);
        assert_close(scale_down(42, 0), 42.0);
    }

    #[test]
    fn test_reserve_ratio_mixed_decimals() {
        // 1 USDC (6 decimals) against 500 wei of an 18-decimal token.
        let price = reserve_ratio(1_000_000, 6, 500, 18).unwrap();
        assert_close(price, 5e-16);
    }

    #[test]
    fn test_reserve_ratio_usdc_weth() {
        // 30,000,000 USDC vs 10,000 WETH → 1 USDC = 1/3000 WETH.
        let price = reserve_ratio(30_000_000_000_000, 6, 10_000 * 10u128.pow(18), 18).unwrap();
        assert_close(price, 1.0 / 3000.0);
    }

    #[test]
    fn test_reserve_ratio_formula_grid() {
        for (r0, d0, r1, d1) in [
            (1u128, 0u8, 1u128, 0u8),
            (123_456_789, 8, 987_654_321, 18),
            (5_192_296_858_534_827_628_530_496_329_220_095, 18, 1, 6),
        ] {
            let expected = (r1 as f64 / 10f64.powi(d1 as i32)) / (r0 as f64 / 10f64.powi(d0 as i32));
            assert_close(reserve_ratio(r0, d0, r1, d1).unwrap(), expected);
        }
    }

    #[test]
    fn test_reserve_ratio_zero_reserve0() {
        assert_eq!(reserve_ratio(0, 18, 100, 18), Err(ScalingError::ZeroReserve));
    }

    #[test]
    fn test_scale_amount() {
        let amount = scale_amount(U256::from(1_234_500_000u64), 6).unwrap();
        assert_eq!(amount, Decimal::from_str("1234.5").unwrap());
    }

    #[test]
    fn test_scale_amount_rejects_large_scale() {
        assert_eq!(
            scale_amount(U256::from(1u64), 30),
            Err(ScalingError::UnsupportedDecimals(30))
        );
    }

    #[test]
    fn test_scale_amount_overflow() {
        assert!(matches!(
            scale_amount(U256::MAX, 18),
            Err(ScalingError::Overflow { .. })
        ));
    }
}
