//! Routing of purchases onto the capacity pool they debit.
//!
//! Presale and public sale each draw from their own pool. NUX is accepted
//! during presale only and debits a guaranteed sub-pool, so NUX holders
//! cannot be crowded out by ETH or stablecoin buyers sharing the window.

use crate::stage::Stage;
use alloy_primitives::U256;

/// Accepted payment methods, tagged once at the entry point instead of
/// being re-compared by raw address on every check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Eth,
    Usdt,
    Dai,
    Nux,
}

/// The three capacity pools of the sale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    PreSale,
    PreSaleNux,
    PublicSale,
}

/// Which pool a purchase made in `stage` with `method` debits, if any.
pub fn pool_for(stage: Stage, method: PaymentMethod) -> Option<Pool> {
    match (stage, method) {
        (Stage::PreSale, PaymentMethod::Nux) => Some(Pool::PreSaleNux),
        (Stage::PreSale, _) => Some(Pool::PreSale),
        (Stage::PublicSale, PaymentMethod::Nux) => None,
        (Stage::PublicSale, _) => Some(Pool::PublicSale),
        _ => None,
    }
}

/// Remaining capacity of a pool with cap `cap` and running total `used`.
pub fn remaining(cap: U256, used: U256) -> U256 {
    cap.saturating_sub(used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nux_debits_its_own_sub_pool_during_presale() {
        assert_eq!(
            pool_for(Stage::PreSale, PaymentMethod::Nux),
            Some(Pool::PreSaleNux)
        );
    }

    #[test]
    fn other_currencies_share_the_presale_pool() {
        for method in [PaymentMethod::Eth, PaymentMethod::Usdt, PaymentMethod::Dai] {
            assert_eq!(pool_for(Stage::PreSale, method), Some(Pool::PreSale));
        }
    }

    #[test]
    fn nux_is_not_accepted_in_public_sale() {
        assert_eq!(pool_for(Stage::PublicSale, PaymentMethod::Nux), None);
    }

    #[test]
    fn other_currencies_share_the_public_pool() {
        for method in [PaymentMethod::Eth, PaymentMethod::Usdt, PaymentMethod::Dai] {
            assert_eq!(pool_for(Stage::PublicSale, method), Some(Pool::PublicSale));
        }
    }

    #[test]
    fn no_pool_applies_outside_the_sale_windows() {
        for stage in [Stage::NotStarted, Stage::Closed] {
            for method in [
                PaymentMethod::Eth,
                PaymentMethod::Usdt,
                PaymentMethod::Dai,
                PaymentMethod::Nux,
            ] {
                assert_eq!(pool_for(stage, method), None);
            }
        }
    }

    #[test]
    fn remaining_capacity_saturates_at_zero() {
        assert_eq!(
            remaining(U256::from(10), U256::from(4)),
            U256::from(6)
        );
        assert_eq!(remaining(U256::from(10), U256::from(10)), U256::ZERO);
        assert_eq!(remaining(U256::from(10), U256::from(11)), U256::ZERO);
    }

    #[test]
    fn bounded_debits_never_exceed_the_cap() {
        // The purchase path only debits when the allocation fits in the
        // remaining capacity; under that rule no sequence of debits can
        // push the counter past the cap.
        let cap = U256::from(100);
        let mut used = U256::ZERO;
        for request in [30u64, 50, 40, 20, 1] {
            let request = U256::from(request);
            if request <= remaining(cap, used) {
                used += request;
            }
            assert!(used <= cap);
        }
        assert_eq!(used, cap);
    }
}
