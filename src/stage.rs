//! Sale stage derivation from the configured sale windows.

use alloy_primitives::U256;

/// Where the sale currently sits relative to its two configured windows.
///
/// Purchases are only accepted in `PreSale` and `PublicSale`; `NotStarted`
/// and `Closed` behave identically everywhere else (no capacity, no
/// purchases) and differ only in what `currentStage()` reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    NotStarted,
    PreSale,
    PublicSale,
    Closed,
}

/// The two half-open sale windows, `[start, end)` each. The windows are not
/// required to be ordered or disjoint; any gap between them is `Closed`.
#[derive(Clone, Copy, Debug)]
pub struct SaleWindows {
    pub pre_sale_start: U256,
    pub pre_sale_end: U256,
    pub public_sale_start: U256,
    pub public_sale_end: U256,
}

impl Stage {
    /// ABI encoding used by `currentStage()` and `availableIn()`.
    pub fn as_u8(self) -> u8 {
        match self {
            Stage::NotStarted => 0,
            Stage::PreSale => 1,
            Stage::PublicSale => 2,
            Stage::Closed => 3,
        }
    }

    pub fn from_u8(raw: u8) -> Option<Stage> {
        match raw {
            0 => Some(Stage::NotStarted),
            1 => Some(Stage::PreSale),
            2 => Some(Stage::PublicSale),
            3 => Some(Stage::Closed),
            _ => None,
        }
    }

    /// Whether purchases are accepted at all in this stage.
    pub fn is_open(self) -> bool {
        matches!(self, Stage::PreSale | Stage::PublicSale)
    }
}

/// Derives the stage for `now`. Total: every instant maps to exactly one
/// stage, with the presale window winning if the windows happen to overlap.
pub fn stage_at(now: U256, windows: &SaleWindows) -> Stage {
    if windows.pre_sale_start <= now && now < windows.pre_sale_end {
        Stage::PreSale
    } else if windows.public_sale_start <= now && now < windows.public_sale_end {
        Stage::PublicSale
    } else if now < windows.pre_sale_start {
        Stage::NotStarted
    } else {
        Stage::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows() -> SaleWindows {
        SaleWindows {
            pre_sale_start: U256::from(100),
            pre_sale_end: U256::from(200),
            public_sale_start: U256::from(300),
            public_sale_end: U256::from(400),
        }
    }

    fn at(now: u64) -> Stage {
        stage_at(U256::from(now), &windows())
    }

    #[test]
    fn before_presale_is_not_started() {
        assert_eq!(at(0), Stage::NotStarted);
        assert_eq!(at(99), Stage::NotStarted);
    }

    #[test]
    fn presale_window_is_half_open() {
        assert_eq!(at(100), Stage::PreSale);
        assert_eq!(at(199), Stage::PreSale);
        assert_eq!(at(200), Stage::Closed);
    }

    #[test]
    fn gap_between_windows_is_closed() {
        assert_eq!(at(250), Stage::Closed);
    }

    #[test]
    fn public_sale_window_is_half_open() {
        assert_eq!(at(300), Stage::PublicSale);
        assert_eq!(at(399), Stage::PublicSale);
        assert_eq!(at(400), Stage::Closed);
    }

    #[test]
    fn after_everything_is_closed() {
        assert_eq!(at(1_000_000), Stage::Closed);
    }

    #[test]
    fn only_sale_windows_are_open() {
        assert!(Stage::PreSale.is_open());
        assert!(Stage::PublicSale.is_open());
        assert!(!Stage::NotStarted.is_open());
        assert!(!Stage::Closed.is_open());
    }

    #[test]
    fn u8_encoding_round_trips() {
        for stage in [
            Stage::NotStarted,
            Stage::PreSale,
            Stage::PublicSale,
            Stage::Closed,
        ] {
            assert_eq!(Stage::from_u8(stage.as_u8()), Some(stage));
        }
        assert_eq!(Stage::from_u8(4), None);
    }
}
