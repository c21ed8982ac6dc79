//! Linear vesting release math.
//!
//! An investor's allocation unlocks proportionally to the time elapsed since
//! `vesting_start`, saturating at the full amount after `duration` seconds.
//! All division rounds down, so the released amount can lag the exact linear
//! share by at most one allocation unit and never exceeds it.

use alloy_primitives::U256;

/// Allocation units released by `now` out of `total` purchased.
/// A zero `duration` degenerates to a full unlock once `start` is reached.
pub fn vested(total: U256, now: U256, start: U256, duration: U256) -> U256 {
    if now < start {
        return U256::ZERO;
    }
    let elapsed = now - start;
    if duration.is_zero() || elapsed >= duration {
        return total;
    }
    total * elapsed / duration
}

/// Newly claimable amount: released so far minus already claimed.
pub fn claimable(total: U256, claimed: U256, now: U256, start: U256, duration: U256) -> U256 {
    vested(total, now, start, duration).saturating_sub(claimed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: u64 = 1_625_097_600;
    const DURATION: u64 = 26_352_000; // 305 days

    fn vested_at(total: u64, now: u64) -> U256 {
        vested(
            U256::from(total),
            U256::from(now),
            U256::from(START),
            U256::from(DURATION),
        )
    }

    #[test]
    fn nothing_vests_before_the_start() {
        assert_eq!(vested_at(305_000, 0), U256::ZERO);
        assert_eq!(vested_at(305_000, START - 1), U256::ZERO);
        assert_eq!(vested_at(305_000, START), U256::ZERO);
    }

    #[test]
    fn one_day_releases_one_linear_share() {
        // 305_000 over 305 days vests 1000 per day
        assert_eq!(vested_at(305_000, START + 86_400), U256::from(1_000));
    }

    #[test]
    fn everything_vests_at_the_end() {
        assert_eq!(vested_at(305_000, START + DURATION), U256::from(305_000));
        assert_eq!(
            vested_at(305_000, START + DURATION + 1_000_000),
            U256::from(305_000)
        );
    }

    #[test]
    fn vested_amount_is_monotone_and_bounded() {
        let mut previous = U256::ZERO;
        for day in 0..=310 {
            let current = vested_at(305_000, START + day * 86_400);
            assert!(current >= previous);
            assert!(current <= U256::from(305_000));
            previous = current;
        }
        assert_eq!(previous, U256::from(305_000));
    }

    #[test]
    fn zero_duration_unlocks_everything_at_start() {
        let total = U256::from(42);
        assert_eq!(
            vested(total, U256::from(START), U256::from(START), U256::ZERO),
            total
        );
        assert_eq!(
            vested(total, U256::from(START - 1), U256::from(START), U256::ZERO),
            U256::ZERO
        );
    }

    #[test]
    fn claimable_subtracts_what_was_already_claimed() {
        let now = START + 86_400;
        let due = claimable(
            U256::from(305_000),
            U256::ZERO,
            U256::from(now),
            U256::from(START),
            U256::from(DURATION),
        );
        assert_eq!(due, U256::from(1_000));

        // An immediate second claim has nothing left to release.
        let again = claimable(
            U256::from(305_000),
            due,
            U256::from(now),
            U256::from(START),
            U256::from(DURATION),
        );
        assert_eq!(again, U256::ZERO);
    }

    #[test]
    fn claimable_never_underflows() {
        // claimed can equal vested but the subtraction still saturates
        assert_eq!(
            claimable(
                U256::from(100),
                U256::from(100),
                U256::from(START + DURATION),
                U256::from(START),
                U256::from(DURATION),
            ),
            U256::ZERO
        );
    }

    #[test]
    fn zero_purchase_has_nothing_to_claim() {
        assert_eq!(
            claimable(
                U256::ZERO,
                U256::ZERO,
                U256::from(START + DURATION),
                U256::from(START),
                U256::from(DURATION),
            ),
            U256::ZERO
        );
    }
}
