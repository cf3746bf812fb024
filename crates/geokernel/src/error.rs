//! Error type shared by the whole kernel.

use thiserror::Error;

/// Failures surfaced by coordinate math, transforms, samplers and containers.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeomError {
    /// A caller-supplied divisor was exactly zero.
    #[error("division by a zero scalar")]
    DivideByZero,
    /// The linear part of an affine map is singular (or a frame collapsed).
    #[error("degenerate transform: {reason}")]
    DegenerateTransform { reason: String },
    /// An element id addressed past the end of a container.
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    /// A shape parameter or layout argument was rejected at the setter.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GeomError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateTransform {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { what, index, len }
    }
}

/// Accept only finite, non-negative shape parameters.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64, GeomError> {
    if !value.is_finite() {
        return Err(GeomError::invalid(name, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(GeomError::invalid(name, format!("must be >= 0, got {value}")));
    }
    Ok(value)
}
