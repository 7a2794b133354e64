// ============================================================================
// Numeric Module
// Precision-safe decimal arithmetic over floating-point inputs
// ============================================================================
//
// This module provides:
// - Free functions (add, subtract, multiply, divide, round, compare, ...)
//   that compute in exact base-10 arithmetic
// - MathContext: default division scale and rounding policy
// - RoundingMode: rounding policies (half-up by default)
// - Operand: f64 / f32 / Decimal conversion through the shortest decimal form
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - Floats enter and leave through their decimal string form
// - All arithmetic returns Result (no panics)
// - Stateless and lock-free; safe to call from any thread

mod arithmetic;
mod context;
mod errors;
mod operand;
mod rounding;

pub use arithmetic::{
    add, add_all, add_scaled, compare, divide, divide_scaled, divide_with_mode, equals, max, min,
    multiply, multiply_all, multiply_scaled, round, round_with_mode, signum_compare, subtract,
    subtract_all, subtract_scaled,
};
pub use context::MathContext;
pub use errors::{NumericError, NumericResult};
pub use operand::{to_f32, to_f64, Operand};
pub use rounding::{check_scale, RoundingMode, MAX_SCALE};

pub use rust_decimal::Decimal;
