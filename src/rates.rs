//! Fixed-point conversion from payment currency to DHV allocation units.

use alloy_primitives::U256;

/// `amount_in * rate / precision`, rounding down, or None when the scaled
/// product does not fit in 256 bits. The same floor policy as the vesting
/// release math, so the sale never over-promises a fractional allocation
/// unit.
pub fn convert(amount_in: U256, rate: U256, precision: U256) -> Option<U256> {
    amount_in.checked_mul(rate).map(|scaled| scaled / precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precision() -> U256 {
        U256::from(100_000)
    }

    #[test]
    fn identity_rate_converts_one_to_one() {
        // rate == precision means one allocation unit per currency unit
        let amount = U256::from(45) * U256::from(10).pow(U256::from(18));
        assert_eq!(convert(amount, precision(), precision()), Some(amount));
    }

    #[test]
    fn conversion_rounds_down() {
        // 3 units at a rate of 1/100000 would be 0.00003 allocation units
        assert_eq!(
            convert(U256::from(3), U256::from(1), precision()),
            Some(U256::ZERO)
        );
        assert_eq!(
            convert(U256::from(150_000), U256::from(1), precision()),
            Some(U256::from(1))
        );
    }

    #[test]
    fn zero_rate_quotes_zero() {
        assert_eq!(
            convert(U256::from(1_000_000), U256::ZERO, precision()),
            Some(U256::ZERO)
        );
    }

    #[test]
    fn rate_scales_linearly() {
        let amount = U256::from(1_000);
        let double = convert(amount, U256::from(200_000), precision()).unwrap();
        let single = convert(amount, U256::from(100_000), precision()).unwrap();
        assert_eq!(double, single * U256::from(2));
    }

    #[test]
    fn overflowing_product_is_refused() {
        assert_eq!(convert(U256::MAX, U256::from(2), precision()), None);
        // The full range still converts when the rate cannot scale it up
        assert_eq!(
            convert(U256::MAX, U256::from(1), U256::from(1)),
            Some(U256::MAX)
        );
    }
}
