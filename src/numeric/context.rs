// ============================================================================
// Math Context
// Default scale and rounding policy for decimal operations
// ============================================================================

use super::arithmetic::{decimal_add, decimal_div, decimal_mul, decimal_sub};
use super::errors::NumericResult;
use super::operand::Operand;
use super::rounding::{check_scale, RoundingMode, MAX_SCALE};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding configuration shared by a group of decimal operations.
///
/// The free functions in [`crate::numeric`] use [`MathContext::DEFAULT`]:
/// ten fractional digits for division, half-up rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MathContext {
    /// Fractional digits kept by `divide` when no scale is given
    pub division_scale: u32,

    /// Policy used by every rounding step of this context
    pub rounding_mode: RoundingMode,
}

impl MathContext {
    /// Default number of fractional digits for division
    pub const DEFAULT_DIVISION_SCALE: u32 = 10;

    /// 10 digits, half-up
    pub const DEFAULT: Self = Self::new(Self::DEFAULT_DIVISION_SCALE, RoundingMode::HalfUp);

    /// Create a context with an explicit division scale and rounding mode
    pub const fn new(division_scale: u32, rounding_mode: RoundingMode) -> Self {
        Self {
            division_scale,
            rounding_mode,
        }
    }

    /// Builder method: Set the default division scale
    pub fn with_division_scale(mut self, scale: u32) -> Self {
        self.division_scale = scale;
        self
    }

    /// Builder method: Set the rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.division_scale > MAX_SCALE {
            return Err(format!(
                "Division scale must not exceed {}, got {}",
                MAX_SCALE, self.division_scale
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Operations
    // ========================================================================

    fn scaled<T, F>(&self, a: T, b: T, scale: i32, op: F) -> NumericResult<T>
    where
        T: Operand,
        F: FnOnce(Decimal, Decimal) -> NumericResult<Decimal>,
    {
        let scale = check_scale(scale)?;
        let exact = op(a.to_decimal()?, b.to_decimal()?)?;
        T::from_decimal(self.rounding_mode.apply(exact, scale)?)
    }

    /// Exact sum rounded to `scale` digits.
    ///
    /// # Errors
    /// `InvalidScale` if `scale < 0`.
    pub fn add_scaled<T: Operand>(&self, a: T, b: T, scale: i32) -> NumericResult<T> {
        self.scaled(a, b, scale, decimal_add)
    }

    /// Exact difference rounded to `scale` digits.
    pub fn subtract_scaled<T: Operand>(&self, a: T, b: T, scale: i32) -> NumericResult<T> {
        self.scaled(a, b, scale, decimal_sub)
    }

    /// Exact product rounded to `scale` digits.
    pub fn multiply_scaled<T: Operand>(&self, a: T, b: T, scale: i32) -> NumericResult<T> {
        self.scaled(a, b, scale, decimal_mul)
    }

    /// Quotient rounded to this context's division scale.
    ///
    /// # Errors
    /// `DivisionByZero` if `b` is zero.
    pub fn divide<T: Operand>(&self, a: T, b: T) -> NumericResult<T> {
        let quotient = decimal_div(
            a.to_decimal()?,
            b.to_decimal()?,
            self.division_scale,
            self.rounding_mode,
        )?;
        T::from_decimal(quotient)
    }

    /// Quotient rounded to `scale` digits.
    ///
    /// # Errors
    /// - `InvalidScale` if `scale < 0`
    /// - `DivisionByZero` if `b` is zero
    pub fn divide_scaled<T: Operand>(&self, a: T, b: T, scale: i32) -> NumericResult<T> {
        let scale = check_scale(scale)?;
        let quotient = decimal_div(a.to_decimal()?, b.to_decimal()?, scale, self.rounding_mode)?;
        T::from_decimal(quotient)
    }

    /// Round `value` to `scale` digits.
    pub fn round<T: Operand>(&self, value: T, scale: i32) -> NumericResult<T> {
        let scale = check_scale(scale)?;
        T::from_decimal(self.rounding_mode.apply(value.to_decimal()?, scale)?)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl MathContext {
    /// Currency amounts: two digits, half-up
    pub const fn financial() -> Self {
        Self::new(2, RoundingMode::HalfUp)
    }

    /// Two digits, ties to even (banker's rounding)
    pub const fn bankers() -> Self {
        Self::new(2, RoundingMode::HalfEven)
    }
}
