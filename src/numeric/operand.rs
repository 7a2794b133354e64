// ============================================================================
// Operands
// Conversion between native numbers and exact decimals
// ============================================================================
//
// Floats are converted through their shortest round-trip decimal string
// (the digits `Display` prints), never through the binary expansion:
//
//     0.1_f64 -> "0.1" -> Decimal(1, scale 1)
//
// rather than 0.1000000000000000055511151231257827... The way back is the
// same path reversed, so the nearest float to the exact decimal result is
// returned.
//
// A float whose digits do not fit in 28 fractional places (1e-30, subnormals)
// is rejected with `PrecisionLoss`: the parsed decimal must convert back to
// the same float.

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A value that can take part in decimal arithmetic.
pub trait Operand: Copy {
    /// Convert into an exact decimal.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and infinities
    /// - `Overflow` if the value is outside the decimal range
    /// - `PrecisionLoss` if significant digits would be dropped
    fn to_decimal(self) -> NumericResult<Decimal>;

    /// Convert an exact decimal result back into this type.
    fn from_decimal(value: Decimal) -> NumericResult<Self>;
}

macro_rules! impl_float_operand {
    ($($ty:ty),*) => {
        $(
            impl Operand for $ty {
                fn to_decimal(self) -> NumericResult<Decimal> {
                    if !self.is_finite() {
                        return Err(NumericError::NonFinite);
                    }
                    let parsed = Decimal::from_str(&self.to_string()).map_err(|_| {
                        if self.is_sign_negative() {
                            NumericError::Underflow
                        } else {
                            NumericError::Overflow
                        }
                    })?;
                    if Self::from_decimal(parsed)? != self {
                        return Err(NumericError::PrecisionLoss);
                    }
                    Ok(parsed)
                }

                fn from_decimal(value: Decimal) -> NumericResult<Self> {
                    value
                        .to_string()
                        .parse::<$ty>()
                        .map_err(|_| NumericError::InvalidInput)
                }
            }
        )*
    };
}

impl_float_operand!(f64, f32);

impl Operand for Decimal {
    #[inline]
    fn to_decimal(self) -> NumericResult<Decimal> {
        Ok(self)
    }

    #[inline]
    fn from_decimal(value: Decimal) -> NumericResult<Self> {
        Ok(value)
    }
}

macro_rules! impl_integer_operand {
    ($($ty:ty => $to:ident),*) => {
        $(
            impl Operand for $ty {
                #[inline]
                fn to_decimal(self) -> NumericResult<Decimal> {
                    Ok(Decimal::from(self))
                }

                /// # Errors
                /// - `RoundingNecessary` if `value` has a fractional part
                /// - `Overflow` / `Underflow` if it does not fit the integer type
                fn from_decimal(value: Decimal) -> NumericResult<Self> {
                    if !value.fract().is_zero() {
                        return Err(NumericError::RoundingNecessary);
                    }
                    value.$to().ok_or(if value.is_sign_negative() {
                        NumericError::Underflow
                    } else {
                        NumericError::Overflow
                    })
                }
            }
        )*
    };
}

impl_integer_operand!(i64 => to_i64, i32 => to_i32);

/// Widen an `f32` to `f64` through its decimal form, so `0.1f32` becomes `0.1`.
pub fn to_f64(value: f32) -> NumericResult<f64> {
    f64::from_decimal(value.to_decimal()?)
}

/// Narrow an `f64` to the nearest `f32` of its decimal form.
pub fn to_f32(value: f64) -> NumericResult<f32> {
    f32::from_decimal(value.to_decimal()?)
}
