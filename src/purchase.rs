//! The purchase validation pipeline, factored over a state snapshot so the
//! whole check sequence is unit-testable off-chain.

use crate::pools::{pool_for, PaymentMethod, Pool};
use crate::rates;
use crate::stage::Stage;
use alloy_primitives::U256;

/// Snapshot of everything a single purchase reads from storage.
#[derive(Clone, Copy, Debug)]
pub struct SaleSnapshot {
    pub paused: bool,
    pub stage: Stage,
    pub precision: U256,
    pub max_purchase: U256,
    pub presale_remaining: U256,
    pub nux_remaining: U256,
    pub public_remaining: U256,
}

impl SaleSnapshot {
    fn remaining_in(&self, pool: Pool) -> U256 {
        match pool {
            Pool::PreSale => self.presale_remaining,
            Pool::PreSaleNux => self.nux_remaining,
            Pool::PublicSale => self.public_remaining,
        }
    }
}

/// Why a purchase was rejected, mirrored one-to-one onto the contract's
/// Solidity errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseError {
    SalePaused,
    PresaleStagesOver,
    SaleStagesOver,
    ZeroAmount,
    TokenNotSupported,
    RatesNotSet,
    AmountTooLarge,
    MaxPurchaseExceeded,
    PoolExhausted(Pool),
}

/// Runs the fixed validation order of a purchase - pause, stage, amount,
/// currency support, rate, investor ceiling, pool capacity - so the failure
/// reason is deterministic whichever conditions hold. On success yields the
/// allocation to grant and the pool it debits.
///
/// # Arguments
///
/// * `snapshot` - The sale state the checks read
/// * `method` - The tagged payment method, or None if the entry point could
///   not classify the currency
/// * `rate` - The configured rate for the currency, zero if unset
/// * `amount_in` - The contribution in the currency's own units
/// * `already_purchased` - The investor's cumulative allocation so far
pub fn check_purchase(
    snapshot: &SaleSnapshot,
    method: Option<PaymentMethod>,
    rate: U256,
    amount_in: U256,
    already_purchased: U256,
) -> Result<(U256, Pool), PurchaseError> {
    if snapshot.paused {
        return Err(PurchaseError::SalePaused);
    }

    // NUX is presale-only, everything else just needs an open window
    if method == Some(PaymentMethod::Nux) && snapshot.stage != Stage::PreSale {
        return Err(PurchaseError::PresaleStagesOver);
    }
    if !snapshot.stage.is_open() {
        return Err(PurchaseError::SaleStagesOver);
    }

    if amount_in.is_zero() {
        return Err(PurchaseError::ZeroAmount);
    }

    let method = match method {
        Some(method) => method,
        None => return Err(PurchaseError::TokenNotSupported),
    };

    if rate.is_zero() {
        return Err(PurchaseError::RatesNotSet);
    }
    let allocation = match rates::convert(amount_in, rate, snapshot.precision) {
        Some(allocation) => allocation,
        None => return Err(PurchaseError::AmountTooLarge),
    };

    // The ceiling is cumulative per investor, not per call
    if !snapshot.max_purchase.is_zero() {
        match already_purchased.checked_add(allocation) {
            Some(total) if total <= snapshot.max_purchase => {}
            _ => return Err(PurchaseError::MaxPurchaseExceeded),
        }
    }

    let pool = match pool_for(snapshot.stage, method) {
        Some(pool) => pool,
        None => return Err(PurchaseError::SaleStagesOver),
    };
    if allocation > snapshot.remaining_in(pool) {
        return Err(PurchaseError::PoolExhausted(pool));
    }

    Ok((allocation, pool))
}
