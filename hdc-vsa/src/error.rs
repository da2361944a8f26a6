//! Error types for hypervector generation.
//!
//! Every failure mode has a named variant. No stringly-typed errors.

use std::mem::size_of;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HdcError {
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl HdcError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        HdcError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias for generation operations.
pub type HdcResult<T> = Result<T, HdcError>;

/// Convert a caller-supplied size to `usize`, rejecting negatives.
pub(crate) fn non_negative(name: &'static str, value: i64) -> HdcResult<usize> {
    usize::try_from(value).map_err(|_| {
        if value < 0 {
            HdcError::invalid(name, format!("must be non-negative, got {}", value))
        } else {
            HdcError::invalid(name, format!("{} does not fit in usize", value))
        }
    })
}

/// Reject a `rows` x `cols` table of `i16` whose storage would exceed
/// `isize::MAX` bytes, the most a single allocation can hold. Each axis on
/// its own must also fit in `isize`, even when the other one is zero.
pub(crate) fn addressable(name: &'static str, rows: usize, cols: usize) -> HdcResult<()> {
    let axis_limit = isize::MAX as usize;
    let fits = rows <= axis_limit
        && cols <= axis_limit
        && rows
            .checked_mul(cols)
            .and_then(|total| total.checked_mul(size_of::<i16>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if fits {
        Ok(())
    } else {
        Err(HdcError::invalid(
            name,
            format!("{} x {} table is too large", rows, cols),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(non_negative("dimensionality", 0), Ok(0));
        assert_eq!(non_negative("dimensionality", 8), Ok(8));
    }

    #[test]
    fn rejects_negative_with_named_argument() {
        let err = non_negative("count", -3).unwrap_err();
        match &err {
            HdcError::InvalidArgument { name, reason } => {
                assert_eq!(*name, "count");
                assert!(reason.contains("-3"), "reason was {}", reason);
            }
        }
        assert_eq!(
            err.to_string(),
            "Invalid argument count: must be non-negative, got -3"
        );
    }

    #[test]
    fn addressable_counts_bytes_not_elements() {
        let limit = isize::MAX as usize / size_of::<i16>();
        assert!(addressable("dimensionality", 1, limit).is_ok());
        assert!(addressable("dimensionality", 1, limit + 1).is_err());
        assert!(addressable("dimensionality", 1, 1 << 62).is_err());
    }

    #[test]
    fn addressable_rejects_overflowing_products() {
        assert!(addressable("count", usize::MAX, 2).is_err());
        assert!(addressable("count", isize::MAX as usize, 0).is_ok());
        assert!(addressable("count", 0, isize::MAX as usize).is_ok());
        assert!(addressable("count", usize::MAX, 0).is_err());
    }
}
