//! Prelude for the friction model crate.
//!
//! ```
//! use stiction_friction::prelude::*;
//!
//! let params = FrictionParams::default().with_gains(4000.0, 40.0);
//! let model = FrictionModel::new(params)?;
//! assert!(!model.is_table_built());
//! # Ok::<(), FrictionError>(())
//! ```

pub use crate::curve::DryFrictionCurve;
pub use crate::error::FrictionError;
pub use crate::model::{FrictionModel, StepReport};
pub use crate::params::FrictionParams;
pub use crate::regime::FrictionRegime;
pub use stiction_lut::OutOfBoundsPolicy;
