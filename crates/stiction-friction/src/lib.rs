//! Chattering-Free Joint Stiction Model
//!
//! This crate models dry friction in a rotary joint without the chattering
//! that switching stick/slip models show around zero velocity. The friction
//! torque is driven by an auxiliary velocity that combines the measured joint
//! velocity with a spring-damper error state, and the sliding branch uses a
//! closed form in the principal branch of the Lambert W function.
//!
//! # Overview
//!
//! - [`FrictionParams`]: physical parameters of one joint
//! - [`FrictionConstants`]: values derived once from the parameters
//! - [`DryFrictionCurve`]: the Lambert-W closed form sampled into a
//!   [`stiction_lut::LookUpTable`]
//! - [`FrictionModel`]: per-joint state and the per-step update
//! - [`lambert::lambert_w0`]: the W₀ evaluator used to build the table
//!
//! # RT Safety Guarantees
//!
//! ## RT-Safe: `FrictionModel::step()` once the table is built
//! - No heap allocations
//! - At most one table lookup per step
//! - No syscalls or I/O outside disabled-by-default `trace` events
//!
//! ## NOT RT-Safe: table construction
//! - `FrictionModel::build_table()` and `DryFrictionCurve::build()` allocate
//!   and evaluate W₀ once per sample
//! - The first `step()` on a model without a table builds it
//!
//! # Example
//!
//! ```
//! use stiction_friction::{FrictionModel, FrictionParams};
//!
//! let mut model = FrictionModel::new(FrictionParams::default())?;
//! model.build_table()?;
//!
//! for i in 0..1000 {
//!     let position = f64::from(i) * 1e-4;
//!     model.set_torque(0.0);
//!     let torque = model.step(position)?;
//!     assert!(torque.is_finite());
//! }
//! # Ok::<(), stiction_friction::FrictionError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod error;
pub mod lambert;
pub mod model;
pub mod params;
pub mod prelude;
pub mod regime;

pub use curve::DryFrictionCurve;
pub use error::FrictionError;
pub use lambert::{LambertError, lambert_w0};
pub use model::{FrictionModel, JointFrictionState, StepReport};
pub use params::{DEFAULT_LUT_STEP, FrictionConstants, FrictionParams, LAMBERT_ARG_THRESHOLD};
pub use regime::{FrictionRegime, FrictionTorque};
pub use stiction_lut::{LookUpTable, LutError, OutOfBoundsPolicy};
