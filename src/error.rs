//! Error types shared by every component.
//!
//! All computations in this crate are deterministic, so an error always
//! signals a caller or configuration bug. Configuration errors surface at
//! construction time; per-call input errors are returned without touching
//! existing state.

/// Errors raised by the selection and archiving core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParetoError {
    /// A configuration value is out of its valid range (non-positive
    /// capacity, `k == 0`, non-finite reference point, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An objective vector length disagrees with the established
    /// dimensionality or with the reference point.
    #[error("dimension mismatch: expected {expected} objectives, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A collection that must be non-empty was empty.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParetoError>;

/// Returns the common objective count of `points`, or `None` when empty.
///
/// Every vector is checked against the first one.
pub(crate) fn common_dimension<P: AsRef<[f64]>>(points: &[P]) -> Result<Option<usize>> {
    let Some(first) = points.first() else {
        return Ok(None);
    };
    let expected = first.as_ref().len();
    for p in &points[1..] {
        let actual = p.as_ref().len();
        if actual != expected {
            return Err(ParetoError::DimensionMismatch { expected, actual });
        }
    }
    Ok(Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_dimension_empty() {
        let pts: Vec<Vec<f64>> = Vec::new();
        assert_eq!(common_dimension(&pts), Ok(None));
    }

    #[test]
    fn test_common_dimension_consistent() {
        let pts = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(common_dimension(&pts), Ok(Some(2)));
    }

    #[test]
    fn test_common_dimension_mismatch() {
        let pts = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            common_dimension(&pts),
            Err(ParetoError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_display() {
        let err = ParetoError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 3 objectives, got 2"
        );
        assert_eq!(
            ParetoError::EmptyInput("reference front").to_string(),
            "reference front must not be empty"
        );
    }
}
