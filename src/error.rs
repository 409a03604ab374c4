use std::collections::TryReserveError;

use thiserror::Error;

/// Top-level error type for the figura shape library.
#[derive(Debug, Error)]
pub enum FiguraError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("allocation failure: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// A precondition of a constructor or collection operation was violated.
#[derive(Debug, Error)]
pub enum InvalidArgument {
    #[error("invalid size: {parameter} = {value} must be positive")]
    NonPositiveSize { parameter: &'static str, value: f64 },

    #[error("not enough vertices for polygon: got {count}, need at least 3")]
    TooFewVertices { count: usize },

    #[error("empty collection of shapes")]
    EmptyCollection,
}

/// Convenience type alias for results using [`FiguraError`].
pub type Result<T> = std::result::Result<T, FiguraError>;

/// Fails with [`InvalidArgument::NonPositiveSize`] unless `value > 0`.
///
/// NaN is rejected as well.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(InvalidArgument::NonPositiveSize { parameter, value }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_value_passes() {
        assert!(ensure_positive("width", 0.5).is_ok());
    }

    #[test]
    fn zero_negative_and_nan_fail() {
        for v in [0.0, -1.0, f64::NAN] {
            let err = ensure_positive("width", v);
            assert!(matches!(
                err,
                Err(FiguraError::InvalidArgument(
                    InvalidArgument::NonPositiveSize {
                        parameter: "width",
                        ..
                    }
                ))
            ));
        }
    }

    #[test]
    fn messages_name_the_failed_precondition() {
        let e: FiguraError = InvalidArgument::TooFewVertices { count: 2 }.into();
        assert_eq!(
            e.to_string(),
            "not enough vertices for polygon: got 2, need at least 3"
        );
        let e: FiguraError = InvalidArgument::EmptyCollection.into();
        assert_eq!(e.to_string(), "empty collection of shapes");
    }
}
