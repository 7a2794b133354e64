// ============================================================================
// Decimal Arithmetic
// Precision-safe arithmetic over floating-point (and decimal) operands
// ============================================================================
//
// Every function converts its operands to exact decimals (see `operand`),
// performs the operation in base 10 and converts the result back once.
// Functions are pure: no shared state, no locking, no logging.

use super::context::MathContext;
use super::errors::{NumericError, NumericResult};
use super::operand::Operand;
use super::rounding::RoundingMode;
use rust_decimal::Decimal;
use std::cmp::Ordering;

// ============================================================================
// Decimal Kernels
// ============================================================================

#[inline]
pub(crate) fn decimal_add(a: Decimal, b: Decimal) -> NumericResult<Decimal> {
    a.checked_add(b).ok_or_else(|| {
        if b.is_sign_positive() {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        }
    })
}

#[inline]
pub(crate) fn decimal_sub(a: Decimal, b: Decimal) -> NumericResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| {
        if b.is_sign_negative() {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        }
    })
}

#[inline]
fn sign_error(a: Decimal, b: Decimal) -> NumericError {
    if a.is_sign_negative() != b.is_sign_negative() {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    }
}

#[inline]
pub(crate) fn decimal_mul(a: Decimal, b: Decimal) -> NumericResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| sign_error(a, b))
}

/// Quotient rounded to `scale` digits under `mode`.
///
/// The quotient is first computed to 28 significant digits and then rounded
/// to `scale`. When `scale` reaches into those 28 digits (large quotients, or
/// scales near `MAX_SCALE`) the result is rounded twice and may differ from
/// a single correctly rounded quotient in the last place.
pub(crate) fn decimal_div(
    a: Decimal,
    b: Decimal,
    scale: u32,
    mode: RoundingMode,
) -> NumericResult<Decimal> {
    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let quotient = a.checked_div(b).ok_or_else(|| sign_error(a, b))?;
    mode.apply(quotient, scale)
}

#[inline]
fn binary<T, F>(a: T, b: T, op: F) -> NumericResult<T>
where
    T: Operand,
    F: FnOnce(Decimal, Decimal) -> NumericResult<Decimal>,
{
    T::from_decimal(op(a.to_decimal()?, b.to_decimal()?)?)
}

fn fold<T, F>(first: T, rest: &[T], op: F) -> NumericResult<T>
where
    T: Operand,
    F: Fn(Decimal, Decimal) -> NumericResult<Decimal>,
{
    let total = rest
        .iter()
        .try_fold(first.to_decimal()?, |acc, v| op(acc, v.to_decimal()?))?;
    T::from_decimal(total)
}

// ============================================================================
// Addition / Subtraction / Multiplication
// ============================================================================

/// Exact decimal sum: `add(0.1, 0.2) == 0.3`.
pub fn add<T: Operand>(a: T, b: T) -> NumericResult<T> {
    binary(a, b, decimal_add)
}

/// Exact sum rounded half-up to `scale` fractional digits.
///
/// # Errors
/// `InvalidScale` if `scale < 0`.
pub fn add_scaled<T: Operand>(a: T, b: T, scale: i32) -> NumericResult<T> {
    MathContext::DEFAULT.add_scaled(a, b, scale)
}

/// Left-to-right exact sum of `first` and every value in `rest`.
pub fn add_all<T: Operand>(first: T, rest: &[T]) -> NumericResult<T> {
    fold(first, rest, decimal_add)
}

/// Exact decimal difference `a - b`.
pub fn subtract<T: Operand>(a: T, b: T) -> NumericResult<T> {
    binary(a, b, decimal_sub)
}

/// Exact difference rounded half-up to `scale` fractional digits.
pub fn subtract_scaled<T: Operand>(a: T, b: T, scale: i32) -> NumericResult<T> {
    MathContext::DEFAULT.subtract_scaled(a, b, scale)
}

/// Subtract every value in `rest` from `first`, left to right.
pub fn subtract_all<T: Operand>(first: T, rest: &[T]) -> NumericResult<T> {
    fold(first, rest, decimal_sub)
}

/// Exact decimal product.
pub fn multiply<T: Operand>(a: T, b: T) -> NumericResult<T> {
    binary(a, b, decimal_mul)
}

/// Exact product rounded half-up to `scale` fractional digits.
pub fn multiply_scaled<T: Operand>(a: T, b: T, scale: i32) -> NumericResult<T> {
    MathContext::DEFAULT.multiply_scaled(a, b, scale)
}

/// Product of `first` and every value in `rest`.
pub fn multiply_all<T: Operand>(first: T, rest: &[T]) -> NumericResult<T> {
    fold(first, rest, decimal_mul)
}

// ============================================================================
// Division / Rounding
// ============================================================================

/// Quotient rounded half-up to 10 fractional digits.
///
/// # Errors
/// `DivisionByZero` if `b` is zero.
pub fn divide<T: Operand>(a: T, b: T) -> NumericResult<T> {
    MathContext::DEFAULT.divide(a, b)
}

/// Quotient rounded half-up to `scale` fractional digits.
///
/// # Errors
/// - `InvalidScale` if `scale < 0`
/// - `DivisionByZero` if `b` is zero
pub fn divide_scaled<T: Operand>(a: T, b: T, scale: i32) -> NumericResult<T> {
    MathContext::DEFAULT.divide_scaled(a, b, scale)
}

/// Quotient rounded to `scale` fractional digits under an explicit `mode`.
pub fn divide_with_mode<T: Operand>(
    a: T,
    b: T,
    scale: i32,
    mode: RoundingMode,
) -> NumericResult<T> {
    MathContext::DEFAULT
        .with_rounding_mode(mode)
        .divide_scaled(a, b, scale)
}

/// Round half-up to `scale` fractional digits: `round(0.125, 2) == 0.13`.
pub fn round<T: Operand>(value: T, scale: i32) -> NumericResult<T> {
    MathContext::DEFAULT.round(value, scale)
}

/// Round to `scale` fractional digits under an explicit `mode`.
pub fn round_with_mode<T: Operand>(value: T, scale: i32, mode: RoundingMode) -> NumericResult<T> {
    MathContext::DEFAULT.with_rounding_mode(mode).round(value, scale)
}

// ============================================================================
// Comparison
// ============================================================================

/// Exact decimal ordering of `a` and `b`.
///
/// # Errors
/// - `NonFinite` if either float is NaN or infinite
/// - `PrecisionLoss` if either float has digits past the 28th fractional place
pub fn compare<T: Operand>(a: T, b: T) -> NumericResult<Ordering> {
    Ok(a.to_decimal()?.cmp(&b.to_decimal()?))
}

/// `compare` as -1, 0 or 1.
pub fn signum_compare<T: Operand>(a: T, b: T) -> NumericResult<i32> {
    Ok(compare(a, b)? as i32)
}

/// True iff `a` and `b` are decimal-equal (`1.10` equals `1.1`).
pub fn equals<T: Operand>(a: T, b: T) -> NumericResult<bool> {
    Ok(compare(a, b)? == Ordering::Equal)
}

fn extremum<T: Operand>(values: &[T], keep: Ordering) -> NumericResult<T> {
    let (first, rest) = values.split_first().ok_or(NumericError::EmptyInput)?;
    let mut best = *first;
    let mut best_dec = first.to_decimal()?;
    for &v in rest {
        let d = v.to_decimal()?;
        if d.cmp(&best_dec) == keep {
            best = v;
            best_dec = d;
        }
    }
    Ok(best)
}

/// Largest value by exact decimal ordering.
///
/// # Errors
/// `EmptyInput` if `values` is empty.
pub fn max<T: Operand>(values: &[T]) -> NumericResult<T> {
    extremum(values, Ordering::Greater)
}

/// Smallest value by exact decimal ordering.
///
/// # Errors
/// `EmptyInput` if `values` is empty.
pub fn min<T: Operand>(values: &[T]) -> NumericResult<T> {
    extremum(values, Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_add_is_exact() {
        assert_ne!(0.1 + 0.2, 0.3);
        assert_eq!(add(0.1, 0.2).unwrap(), 0.3);
        assert_eq!(compare(add(0.1, 0.2).unwrap(), 0.3).unwrap(), Ordering::Equal);
        assert_eq!(add(0.1_f32, 0.2_f32).unwrap(), 0.3_f32);
    }

    #[test]
    fn test_add_scaled() {
        assert_eq!(add_scaled(1.005, 0.0, 2).unwrap(), 1.01);
        assert_eq!(add_scaled(1.0, 2.0, -1), Err(NumericError::InvalidScale(-1)));
    }

    #[test]
    fn test_add_all() {
        assert_eq!(add_all(0.1, &[0.2, 0.3, 0.4]).unwrap(), 1.0);
        assert_eq!(add_all(5.5, &[]).unwrap(), 5.5);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(1.0, 0.9).unwrap(), 0.1);
        assert_eq!(subtract(0.3, 0.3).unwrap(), 0.0);
        assert_eq!(subtract_scaled(1.0, 0.333, 2).unwrap(), 0.67);
        assert_eq!(subtract_all(1.0, &[0.1, 0.2]).unwrap(), 0.7);
        assert_eq!(subtract_scaled(1.0, 0.5, -2), Err(NumericError::InvalidScale(-2)));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(1.1, 3.0).unwrap(), 3.3);
        assert_eq!(multiply_scaled(0.105, 0.5, 2).unwrap(), 0.05);
        assert_eq!(multiply_scaled(0.125, 1.0, 2).unwrap(), 0.13);
        assert_eq!(multiply_all(1.5, &[2.0, 0.1]).unwrap(), 0.3);
        assert_eq!(multiply_scaled(1.0, 2.0, -1), Err(NumericError::InvalidScale(-1)));
    }

    #[test]
    fn test_divide_default_scale() {
        assert_eq!(divide(1.0, 3.0).unwrap(), 0.3333333333);
        assert_eq!(divide(2.0, 3.0).unwrap(), 0.6666666667);
        assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_scaled() {
        assert_eq!(divide_scaled(1.0, 3.0, 2).unwrap(), 0.33);
        assert_eq!(divide_scaled(2.0, 3.0, 0).unwrap(), 1.0);
        assert_eq!(divide_scaled(1.0, 8.0, 2).unwrap(), 0.13);
        assert_eq!(divide_scaled(1.0, 3.0, -1), Err(NumericError::InvalidScale(-1)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide_scaled(1.0, 0.0, 2), Err(NumericError::DivisionByZero));
        assert_eq!(divide(1.0, -0.0), Err(NumericError::DivisionByZero));
        assert_eq!(divide(0.0_f32, 0.0_f32), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_divide_with_mode() {
        assert_eq!(divide_with_mode(1.0, 8.0, 2, RoundingMode::HalfEven).unwrap(), 0.12);
        assert_eq!(divide_with_mode(2.0, 3.0, 2, RoundingMode::Down).unwrap(), 0.66);
        assert_eq!(
            divide_with_mode(1.0, 3.0, 5, RoundingMode::Unnecessary),
            Err(NumericError::RoundingNecessary)
        );
        assert_eq!(divide_with_mode(1.0, 4.0, 2, RoundingMode::Unnecessary).unwrap(), 0.25);
    }

    #[test]
    fn test_round() {
        assert_eq!(round(0.125, 2).unwrap(), 0.13);
        assert_eq!(round(-0.125, 2).unwrap(), -0.13);
        assert_eq!(round(2.5, 0).unwrap(), 3.0);
        assert_eq!(round(1.2345, 10).unwrap(), 1.2345);
        assert_eq!(round(1.0, -1), Err(NumericError::InvalidScale(-1)));
    }

    #[test]
    fn test_round_with_mode() {
        assert_eq!(round_with_mode(2.5, 0, RoundingMode::HalfEven).unwrap(), 2.0);
        assert_eq!(round_with_mode(1.21, 1, RoundingMode::Ceiling).unwrap(), 1.3);
        assert_eq!(round_with_mode(-1.21, 1, RoundingMode::Floor).unwrap(), -1.3);
        assert_eq!(
            round_with_mode(1.0, -3, RoundingMode::HalfUp),
            Err(NumericError::InvalidScale(-3))
        );
    }

    #[test]
    fn test_compare_and_equals() {
        assert_eq!(compare(1.0, 2.0).unwrap(), Ordering::Less);
        assert_eq!(compare(2.0, 1.0).unwrap(), Ordering::Greater);
        assert_eq!(signum_compare(1.0, 2.0).unwrap(), -1);
        assert_eq!(signum_compare(2.0, 2.0).unwrap(), 0);
        assert_eq!(signum_compare(3.0, 2.0).unwrap(), 1);
        assert!(equals(0.0, -0.0).unwrap());
        assert!(!equals(0.1, 0.10000001).unwrap());
        assert_eq!(compare(f64::NAN, 1.0), Err(NumericError::NonFinite));
    }

    #[test]
    fn test_equals_ignores_trailing_zeros() {
        let a = Decimal::from_str("1.10").unwrap();
        let b = Decimal::from_str("1.1").unwrap();
        assert!(equals(a, b).unwrap());
    }

    #[test]
    fn test_max_min() {
        assert_eq!(max(&[1.0, 2.5, -3.0]).unwrap(), 2.5);
        assert_eq!(min(&[1.0, 2.5, -3.0]).unwrap(), -3.0);
        assert_eq!(max(&[7.0]).unwrap(), 7.0);
        assert_eq!(max::<f64>(&[]), Err(NumericError::EmptyInput));
        assert_eq!(min::<f32>(&[]), Err(NumericError::EmptyInput));
        assert_eq!(max(&[1.0, f64::NAN]), Err(NumericError::NonFinite));
    }

    #[test]
    fn test_divide_at_max_scale() {
        let third = divide_scaled(Decimal::ONE, Decimal::from(3), 28).unwrap();
        assert_eq!(third, Decimal::from_str("0.3333333333333333333333333333").unwrap());
        // integer digits eat into the fractional places the quotient can carry
        let big = divide_scaled(Decimal::from(10), Decimal::from(3), 28).unwrap();
        assert_eq!(
            round(big, 27).unwrap(),
            Decimal::from_str("3.333333333333333333333333333").unwrap()
        );
    }

    #[test]
    fn test_tiny_floats_are_not_zero() {
        assert_eq!(divide(1.0, 1e-30), Err(NumericError::PrecisionLoss));
        assert_eq!(compare(1e-30, 0.0), Err(NumericError::PrecisionLoss));
        assert_eq!(equals(1e-30, 2e-30), Err(NumericError::PrecisionLoss));
        assert_eq!(max(&[0.0, 1e-30]), Err(NumericError::PrecisionLoss));
        assert_eq!(add(1e-30, 1e-30), Err(NumericError::PrecisionLoss));
        assert_eq!(compare(1e-28, 0.0).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_integer_operands() {
        assert_eq!(add(2_i64, 3).unwrap(), 5);
        assert_eq!(multiply_all(2_i32, &[3, -4]).unwrap(), -24);
        assert_eq!(divide(10_i64, 5).unwrap(), 2);
        assert_eq!(divide(10_i64, 4), Err(NumericError::RoundingNecessary));
        assert_eq!(divide(1_i64, 0), Err(NumericError::DivisionByZero));
        assert_eq!(max(&[3_i64, -1, 7]).unwrap(), 7);
        assert_eq!(multiply(i32::MAX, 2), Err(NumericError::Overflow));
    }

    #[test]
    fn test_decimal_operands() {
        let a = Decimal::new(1, 1);
        let b = Decimal::new(2, 1);
        assert_eq!(add(a, b).unwrap(), Decimal::new(3, 1));
        assert_eq!(
            divide(Decimal::ONE, Decimal::from(3)).unwrap(),
            Decimal::from_str("0.3333333333").unwrap()
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(add(Decimal::MAX, Decimal::ONE), Err(NumericError::Overflow));
        assert_eq!(subtract(Decimal::MIN, Decimal::ONE), Err(NumericError::Underflow));
        assert_eq!(multiply(Decimal::MAX, Decimal::from(2)), Err(NumericError::Overflow));
        assert_eq!(multiply(Decimal::MAX, -Decimal::from(2)), Err(NumericError::Underflow));
    }
}
