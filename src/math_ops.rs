//! Factorial and Fibonacci with domain validation.

use crate::error::{LessonError, Result};
use tracing::debug;

/// Largest input whose factorial fits in an `i64`.
pub const FACTORIAL_MAX: i64 = 20;

/// `n!` for `0 <= n <= 20`.
pub fn factorial(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(LessonError::domain("factorial", "not defined for negative numbers"));
    }
    if n > FACTORIAL_MAX {
        return Err(LessonError::domain("factorial", "inputs above 20 overflow the numeric type"));
    }

    debug!(n, "computing factorial");
    Ok((1..=n).product())
}

/// The `n`th Fibonacci number, `fibonacci(0) == 0`.
///
/// There is no upper bound: past `n = 92` the value no longer fits in an `i64`
/// and wraps around like fixed-width integer arithmetic.
/// The loop runs `n` times, so inputs in the billions take noticeably long.
pub fn fibonacci(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(LessonError::domain("fibonacci", "not defined for negative numbers"));
    }

    debug!(n, "computing fibonacci");
    let (mut current, mut next) = (0i64, 1i64);
    for _ in 0..n {
        let sum = current.wrapping_add(next);
        current = next;
        next = sum;
    }
    Ok(current)
}
