//! Error types for lookup table operations.

use core::fmt;

/// Error type for lookup table construction and queries.
///
/// Numeric fields are stored as their `Debug` rendering so the error stays
/// independent of the table's sample type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LutError {
    /// The requested domain cannot be sampled.
    ///
    /// Raised when `min > max`, when `step` is zero or negative, or when any
    /// of the three values is not finite. The table is left untouched.
    #[error("invalid table domain: min {min}, max {max}, step {step}")]
    InvalidDomain {
        /// Requested lower bound.
        min: String,
        /// Requested upper bound.
        max: String,
        /// Requested sampling step.
        step: String,
    },

    /// A query was made before any successful `create`.
    #[error("uninitialized table, call create() before use")]
    UninitializedTable,

    /// A query fell outside `[min, max]` while the policy is `Fail`.
    #[error("out of bound access: {value} is outside [{min}, {max}]")]
    OutOfDomain {
        /// The rejected query.
        value: String,
        /// Table lower bound.
        min: String,
        /// Table upper bound.
        max: String,
    },
}

impl LutError {
    /// Create an invalid domain error.
    pub fn invalid_domain<T: fmt::Debug>(min: T, max: T, step: T) -> Self {
        LutError::InvalidDomain {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
            step: format!("{step:?}"),
        }
    }

    /// Create an out of domain error.
    pub fn out_of_domain<T: fmt::Debug>(value: T, min: T, max: T) -> Self {
        LutError::OutOfDomain {
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }
}
