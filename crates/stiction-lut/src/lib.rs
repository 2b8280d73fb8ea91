//! Sampled-Function Lookup Tables
//!
//! This crate provides a generic lookup table that pre-computes a scalar
//! function over an evenly sampled domain and answers queries by linear
//! interpolation. It is meant for functions that are too expensive to evaluate
//! inside a control loop (transcendental or special functions).
//!
//! # Overview
//!
//! - [`LookUpTable`]: the table, generic over any [`num_traits::Float`] type
//! - [`OutOfBoundsPolicy`]: what queries outside `[min, max]` return
//! - [`LutError`]: construction and query failures
//!
//! # RT Safety Guarantees
//!
//! ## RT-Safe: `LookUpTable::evaluate()`
//! - No heap allocations
//! - O(1) index computation, adjusted by at most one position for rounding
//! - No syscalls or I/O
//!
//! ## NOT RT-Safe: `LookUpTable::create()` and the `build` constructors
//! - Allocate the sample storage
//! - Call the sampled function once per sample
//! - Should only run at initialization
//!
//! # Example
//!
//! ```
//! use stiction_lut::{LookUpTable, OutOfBoundsPolicy};
//!
//! // Build once, ahead of the control loop
//! let table = LookUpTable::build(0.0, 2.0, 0.001, |x: f64| x.sqrt())?
//!     .with_out_of_bounds(OutOfBoundsPolicy::ClampToBound);
//!
//! // Query at loop rate
//! let y = table.evaluate(1.5)?;
//! assert!((y - 1.5_f64.sqrt()).abs() < 1e-6);
//! # Ok::<(), stiction_lut::LutError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod policy;
pub mod prelude;
pub mod table;

pub use error::LutError;
pub use policy::OutOfBoundsPolicy;
pub use table::LookUpTable;
