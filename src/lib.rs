// ============================================================================
// Common Tools Library
// Precision-safe decimal arithmetic and batch helpers
// ============================================================================

//! # Common Tools
//!
//! Arithmetic on floating-point numbers that behaves like exact base-10
//! decimal arithmetic.
//!
//! ## Features
//!
//! - **Exact decimal math** over `f64`, `f32`, `i64`, `i32` and `rust_decimal::Decimal` operands
//! - **Shortest-form conversion**: floats enter as the digits they print as,
//!   so `0.1 + 0.2 == 0.3`
//! - **Configurable rounding** (half-up by default, banker's and directed modes)
//! - **Sectioned batch processing** for large parameter lists
//!
//! ## Example
//!
//! ```rust
//! use common_tools::prelude::*;
//!
//! assert_eq!(add(0.1, 0.2).unwrap(), 0.3);
//! assert_eq!(round(0.125, 2).unwrap(), 0.13);
//! assert_eq!(divide(1.0, 3.0).unwrap(), 0.3333333333);
//! assert_eq!(max(&[1.0, 2.5, -3.0]).unwrap(), 2.5);
//!
//! // Division by zero is an error, not infinity
//! assert_eq!(divide_scaled(1.0, 0.0, 2), Err(NumericError::DivisionByZero));
//!
//! // Banker's rounding through an explicit context
//! let ctx = MathContext::bankers();
//! assert_eq!(ctx.round(2.5, 0).unwrap(), 2.0);
//! ```

pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        add, add_all, add_scaled, compare, divide, divide_scaled, divide_with_mode, equals, max,
        min, multiply, multiply_all, multiply_scaled, round, round_with_mode, signum_compare,
        subtract, subtract_all, subtract_scaled, Decimal, MathContext, NumericError,
        NumericResult, Operand, RoundingMode,
    };
    pub use crate::utils::{process_in_sections, SectionError};
}
