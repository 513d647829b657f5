//! Construction errors.

use thiserror::Error;

/// Reasons a node cannot be constructed.
///
/// Evaluation never fails; every error is raised when a tree is built, so no
/// node ever holds a zero-length period.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SyncError {
    /// The node's period would be zero.
    #[error("{node} requires a non-zero period")]
    ZeroPeriod { node: &'static str },

    /// A multi-segment shape has a zero-length segment it divides by.
    #[error("{node} requires a non-zero {segment} segment")]
    ZeroSegment {
        node: &'static str,
        segment: &'static str,
    },

    /// A scale factor that must be finite and positive is not.
    #[error("{node} factor must be finite and positive, got {factor}")]
    InvalidFactor { node: &'static str, factor: f32 },

    /// The resulting period does not fit in `u32` milliseconds.
    #[error("{node} period overflows the millisecond range")]
    PeriodOverflow { node: &'static str },
}

/// Result alias used by fallible constructors.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Rejects a zero `period` for `node`.
pub(crate) fn require_period(node: &'static str, period: u32) -> Result<()> {
    if period == 0 {
        log::debug!("rejecting {node}: zero period");
        return Err(SyncError::ZeroPeriod { node });
    }
    Ok(())
}

/// Rejects a zero-length `segment` of `node`.
pub(crate) fn require_segment(
    node: &'static str,
    segment: &'static str,
    length: u32,
) -> Result<()> {
    if length == 0 {
        log::debug!("rejecting {node}: zero {segment} segment");
        return Err(SyncError::ZeroSegment { node, segment });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_period() {
        assert!(require_period("Ramp", 1).is_ok());
        assert_eq!(
            require_period("Ramp", 0),
            Err(SyncError::ZeroPeriod { node: "Ramp" })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SyncError::ZeroSegment {
            node: "Triangular",
            segment: "fall",
        };
        assert_eq!(
            err.to_string(),
            "Triangular requires a non-zero fall segment"
        );

        let err = SyncError::InvalidFactor {
            node: "Speed",
            factor: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "Speed factor must be finite and positive, got -2"
        );
    }
}
