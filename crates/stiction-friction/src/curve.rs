//! Dry-friction curve: the Lambert-W closed form sampled into a lookup table.
//!
//! Under the spring-damper error model, the sliding friction torque has a
//! closed form in the auxiliary velocity `w`:
//!
//! ```text
//! dry(w) = -(wbrk/Z) · W₀( -(Z/wbrk) · (Tsc/den) · exp((Z·Tc - w) / (wbrk·den)) )
//! ```
//!
//! `W₀` is too expensive for the per-step path, so the curve is sampled once
//! over `[Z·Ts, table_max]` (see [`FrictionConstants`]) and interpolated.
//! The curve is odd in `w`; negative velocities query the table with `-w`.

use std::sync::Arc;

use stiction_lut::LookUpTable;
use tracing::{debug, warn};

use crate::error::FrictionError;
use crate::lambert::{LambertError, lambert_w0};
use crate::params::{FrictionConstants, FrictionParams};
use crate::regime::{FrictionRegime, FrictionTorque};

/// Pre-computed dry-friction curve of one joint.
///
/// Cloning is cheap: the table is shared behind an [`Arc`] and never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct DryFrictionCurve {
    params: FrictionParams,
    constants: FrictionConstants,
    table: Arc<LookUpTable<f64>>,
}

impl DryFrictionCurve {
    /// Build the curve with the bundled W₀ evaluator.
    ///
    /// This is NOT RT-safe: it evaluates W₀ once per table sample.
    ///
    /// # Errors
    ///
    /// - [`FrictionError::InvalidParameter`] for inconsistent parameters.
    /// - [`FrictionError::SpecialFunctionDomain`] if a W₀ argument leaves the
    ///   principal branch.
    /// - [`FrictionError::Table`] if the derived domain cannot be sampled.
    pub fn build(params: &FrictionParams) -> Result<Self, FrictionError> {
        Self::build_with(params, lambert_w0)
    }

    /// Build the curve with a caller-supplied W₀ evaluator.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build); evaluator failures abort construction.
    pub fn build_with<W>(params: &FrictionParams, w0: W) -> Result<Self, FrictionError>
    where
        W: Fn(f64) -> Result<f64, LambertError>,
    {
        params.validate()?;
        let constants = FrictionConstants::from_params(params);

        if constants.breakaway_ratio > 1.0 {
            warn!(
                breakaway_ratio = constants.breakaway_ratio,
                "stick and slip torques no longer meet at the static friction threshold"
            );
        }

        let table = LookUpTable::try_build(
            constants.table_min,
            constants.table_max,
            params.lut_step,
            |w| {
                let argument = lambert_argument(params, &constants, w);
                let value = w0(argument)?;
                Ok::<f64, FrictionError>(-(params.breakaway_velocity / constants.z) * value)
            },
        )?
        .with_out_of_bounds(params.out_of_bounds);

        debug!(
            samples = table.len(),
            min = constants.table_min,
            max = constants.table_max,
            step = params.lut_step,
            "dry-friction table built"
        );

        Ok(Self {
            params: *params,
            constants,
            table: Arc::new(table),
        })
    }

    /// Parameters the curve was built from.
    pub fn params(&self) -> &FrictionParams {
        &self.params
    }

    /// Derived constants.
    pub fn constants(&self) -> &FrictionConstants {
        &self.constants
    }

    /// Shared handle to the sampled table.
    pub fn table(&self) -> &Arc<LookUpTable<f64>> {
        &self.table
    }

    /// W₀ argument of the closed form at auxiliary velocity `w`.
    pub fn lambert_argument(&self, w: f64) -> f64 {
        lambert_argument(&self.params, &self.constants, w)
    }

    /// Friction torque for the auxiliary velocity `w_ast`.
    ///
    /// RT-safe: one table lookup at most.
    ///
    /// # Errors
    ///
    /// Only when the table's policy is `Fail` and the slip lookup leaves the
    /// table domain.
    #[inline]
    pub fn friction_torque(&self, w_ast: f64) -> Result<FrictionTorque, FrictionError> {
        let FrictionParams {
            static_friction: ts,
            coulomb_friction: tc,
            viscous_friction: tv,
            ..
        } = self.params;
        let FrictionConstants { z, den, .. } = self.constants;

        let predictor_torque = w_ast / z;
        let regime = FrictionRegime::classify(predictor_torque, ts);

        let torque = match regime {
            FrictionRegime::PositiveSlip => {
                self.table.evaluate(w_ast)? + tv.mul_add(w_ast, tc) / den
            }
            FrictionRegime::NegativeSlip => {
                -self.table.evaluate(-w_ast)? + tv.mul_add(w_ast, -tc) / den
            }
            FrictionRegime::Stick => predictor_torque,
        };

        Ok(FrictionTorque {
            regime,
            predictor_torque,
            torque,
        })
    }
}

fn lambert_argument(params: &FrictionParams, constants: &FrictionConstants, w: f64) -> f64 {
    let wbrk = params.breakaway_velocity;
    let FrictionConstants { z, den, tsc, .. } = *constants;
    let exponent = z.mul_add(params.coulomb_friction, -w) / (wbrk * den);
    -(z / wbrk) * (tsc / den) * exponent.exp()
}
