//! Error types for the friction model.

use stiction_lut::LutError;

use crate::lambert::LambertError;

/// Error type for friction model construction and stepping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrictionError {
    /// A joint parameter is outside its physical range.
    #[error("invalid friction parameter '{field}': {reason}")]
    InvalidParameter {
        /// Parameter name, as spelled in configuration files.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The dry-friction closed form left the principal branch of W₀ while
    /// the table was being built.
    #[error("dry-friction table construction failed: {0}")]
    SpecialFunctionDomain(#[from] LambertError),

    /// Table construction or lookup failed.
    #[error("lookup table error: {0}")]
    Table(#[from] LutError),
}

impl FrictionError {
    /// Create an invalid parameter error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FrictionError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
