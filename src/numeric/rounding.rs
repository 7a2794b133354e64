// ============================================================================
// Rounding
// Rounding policies and scale validation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a decimal value can carry.
pub const MAX_SCALE: u32 = 28;

/// Policy applied when a value has more fractional digits than the target scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round away from zero
    Up,
    /// Round toward zero (truncate)
    Down,
    /// Round toward positive infinity
    Ceiling,
    /// Round toward negative infinity
    Floor,
    /// Round to nearest, ties away from zero (0.125 -> 0.13, -0.125 -> -0.13)
    #[default]
    HalfUp,
    /// Round to nearest, ties toward zero
    HalfDown,
    /// Round to nearest, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Assert that no rounding is needed; fails otherwise
    Unnecessary,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` strategy.
    ///
    /// `Unnecessary` maps to truncation; the caller checks that nothing was lost.
    #[inline]
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down | RoundingMode::Unnecessary => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round `value` to `scale` fractional digits under this policy.
    ///
    /// # Errors
    /// Returns `RoundingNecessary` for `Unnecessary` when digits would be dropped.
    pub fn apply(self, value: Decimal, scale: u32) -> NumericResult<Decimal> {
        let rounded = value.round_dp_with_strategy(scale, self.strategy());
        if self == RoundingMode::Unnecessary && rounded != value {
            return Err(NumericError::RoundingNecessary);
        }
        Ok(rounded)
    }
}

/// Validate a caller-supplied scale.
///
/// # Errors
/// Returns `InvalidScale` when `scale < 0`.
#[inline]
pub fn check_scale(scale: i32) -> NumericResult<u32> {
    u32::try_from(scale).map_err(|_| NumericError::InvalidScale(scale))
}
