use crate::error::{LessonError, Result};
use tracing::debug;

/// Largest size whose last square, `(size - 1)²`, still fits in an `i64`.
pub const SQUARES_MAX: i64 = 3_037_000_500;

/// `[0², 1², …, (size-1)²]`.
///
/// Sizes up to [`SQUARES_MAX`] are accepted; if the allocation itself cannot
/// be made the call fails with [`LessonError::Unexpected`] instead of aborting.
pub fn squares(size: i64) -> Result<Vec<i64>> {
    if size <= 0 {
        return Err(LessonError::invalid_argument("size", size, "must be greater than zero"));
    }
    if size > SQUARES_MAX {
        return Err(LessonError::invalid_argument(
            "size",
            size,
            "the largest square would overflow the numeric type",
        ));
    }
    let capacity = usize::try_from(size)
        .map_err(|_| LessonError::invalid_argument("size", size, "too large for this platform"))?;

    debug!(size, "generating squares");
    let mut values = Vec::new();
    values
        .try_reserve_exact(capacity)
        .map_err(|err| LessonError::Unexpected {
            subject: "squares".to_string(),
            message: err.to_string(),
        })?;
    values.extend((0..size).map(|i| i * i));
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_squares() {
        assert_eq!(squares(4).unwrap(), vec![0, 1, 4, 9]);
        assert_eq!(squares(1).unwrap(), vec![0]);
    }

    #[test]
    fn test_squares_rejects_zero() {
        let err = squares(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "invalid size 0: must be greater than zero");
    }

    #[test]
    fn test_squares_rejects_negative() {
        assert_eq!(squares(-3).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_squares_rejects_max_size() {
        let err = squares(i64::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_squares_rejects_first_overflowing_size() {
        assert!((SQUARES_MAX - 1).checked_mul(SQUARES_MAX - 1).is_some());
        assert!(SQUARES_MAX.checked_mul(SQUARES_MAX).is_none());
        assert_eq!(
            squares(SQUARES_MAX + 1).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    proptest! {
        #[test]
        fn test_squares_shape(size in 1i64..500) {
            let values = squares(size).unwrap();
            prop_assert_eq!(values.len() as i64, size);
            for (i, value) in values.iter().enumerate() {
                prop_assert_eq!(*value, (i * i) as i64);
            }
        }
    }
}
