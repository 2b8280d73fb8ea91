//! Behavior of a table outside of its sampled domain.

use serde::{Deserialize, Serialize};

/// What a [`LookUpTable`](crate::LookUpTable) returns for queries outside
/// `[min, max]`.
///
/// # Example
///
/// ```
/// use stiction_lut::{LookUpTable, OutOfBoundsPolicy};
///
/// let table = LookUpTable::build(0.0, 1.0, 0.25, |x: f64| x + 1.0)?
///     .with_out_of_bounds(OutOfBoundsPolicy::ClampToBound);
///
/// assert_eq!(table.evaluate(-3.0)?.to_bits(), 1.0_f64.to_bits());
/// assert_eq!(table.evaluate(3.0)?.to_bits(), 2.0_f64.to_bits());
/// # Ok::<(), stiction_lut::LutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsPolicy {
    /// Return [`LutError::OutOfDomain`](crate::LutError::OutOfDomain).
    Fail,
    /// Return the first sample below `min` and the last sample above `max`.
    ClampToBound,
    /// Return the additive identity.
    #[default]
    Zero,
}

impl OutOfBoundsPolicy {
    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            OutOfBoundsPolicy::Fail => "fail",
            OutOfBoundsPolicy::ClampToBound => "clamp_to_bound",
            OutOfBoundsPolicy::Zero => "zero",
        }
    }
}

impl core::fmt::Display for OutOfBoundsPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
