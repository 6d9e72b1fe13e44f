use crate::error::{LessonError, Result};
use tracing::debug;

/// `a / b`, refusing an exactly-zero denominator.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(LessonError::DivisionByZero { numerator: a });
    }
    debug!(a, b, "dividing");
    Ok(a / b)
}
