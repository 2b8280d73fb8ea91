//! Prelude for the lookup table crate.
//!
//! ```
//! use stiction_lut::prelude::*;
//!
//! let table: LookUpTable<f64> = LookUpTable::with_policy(OutOfBoundsPolicy::Fail);
//! assert!(table.is_empty());
//! ```

pub use crate::error::LutError;
pub use crate::policy::OutOfBoundsPolicy;
pub use crate::table::LookUpTable;
