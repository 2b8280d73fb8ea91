//! Per-joint friction model: error integrator, regime switch, torque output.

use std::sync::Arc;

use serde::Serialize;
use stiction_lut::{LookUpTable, LutError};
use tracing::{debug, trace};

use crate::curve::DryFrictionCurve;
use crate::error::FrictionError;
use crate::lambert::LambertError;
use crate::params::{FrictionConstants, FrictionParams};
use crate::regime::{FrictionRegime, FrictionTorque};

/// Mutable state of one joint, updated every step.
///
/// The error accumulator `e` is the only memory the friction law carries
/// between steps; the previous position only feeds the velocity estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct JointFrictionState {
    /// Spring-damper error `e`.
    pub error: f64,
    /// Position at the previous step; `None` until the first step.
    pub prev_position: Option<f64>,
    /// Auxiliary velocity `w_ast` of the last step.
    pub w_ast: f64,
    /// Predictor torque `T_ast` of the last step.
    pub t_ast: f64,
    /// Cumulative torque, reduced by the friction torque on every step.
    pub torque: f64,
}

impl JointFrictionState {
    /// True until the first step has run.
    pub fn is_first_step(&self) -> bool {
        self.prev_position.is_none()
    }
}

/// Everything computed during one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepReport {
    /// Branch of the friction law that applied.
    pub regime: FrictionRegime,
    /// Finite-difference joint velocity (zero on the first step).
    pub velocity: f64,
    /// Auxiliary velocity `w_ast`.
    pub w_ast: f64,
    /// Predictor torque `T_ast`.
    pub t_ast: f64,
    /// Friction torque `Tf` subtracted from the cumulative torque.
    pub friction_torque: f64,
    /// Cumulative torque after the step.
    pub torque: f64,
}

/// Chattering-free stiction model for a single joint.
///
/// The model owns its joint's parameters, the derived constants, the
/// dry-friction curve (built once, lazily or through
/// [`build_table`](Self::build_table)), and the per-step state.
///
/// # RT Safety
///
/// - `step()` is RT-safe once the table is built: no allocation, O(1).
/// - The first `step()` on a model without a table builds it, which is NOT
///   RT-safe. Call `build_table()` during initialization.
///
/// # Example
///
/// ```
/// use stiction_friction::{FrictionModel, FrictionParams, FrictionRegime};
///
/// let mut model = FrictionModel::new(FrictionParams::default())?;
/// model.build_table()?;
///
/// // Joint at rest: no friction torque.
/// model.set_torque(1.0);
/// let torque = model.step(0.0)?;
/// assert!((torque - 1.0).abs() < 1e-12);
/// assert_eq!(model.last_step().map(|s| s.regime), Some(FrictionRegime::Stick));
/// # Ok::<(), stiction_friction::FrictionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FrictionModel {
    params: FrictionParams,
    constants: FrictionConstants,
    curve: Option<DryFrictionCurve>,
    state: JointFrictionState,
    last: Option<StepReport>,
}

impl FrictionModel {
    /// Create a model without building its table.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::InvalidParameter`] if `params` fail validation.
    pub fn new(params: FrictionParams) -> Result<Self, FrictionError> {
        params.validate()?;
        let constants = FrictionConstants::from_params(&params);
        debug!(
            z = constants.z,
            den = constants.den,
            table_min = constants.table_min,
            table_max = constants.table_max,
            "friction model created"
        );

        Ok(Self {
            params,
            constants,
            curve: None,
            state: JointFrictionState::default(),
            last: None,
        })
    }

    /// Create a model around an already built curve.
    pub fn with_curve(curve: DryFrictionCurve) -> Self {
        Self {
            params: *curve.params(),
            constants: *curve.constants(),
            curve: Some(curve),
            state: JointFrictionState::default(),
            last: None,
        }
    }

    /// Build the dry-friction table if it is not built yet.
    ///
    /// # Errors
    ///
    /// Propagates curve construction failures; see [`DryFrictionCurve::build`].
    pub fn build_table(&mut self) -> Result<&DryFrictionCurve, FrictionError> {
        self.build_table_with(crate::lambert::lambert_w0)
    }

    /// Build the table with a caller-supplied W₀ evaluator, if not built yet.
    ///
    /// # Errors
    ///
    /// Propagates curve construction failures.
    pub fn build_table_with<W>(&mut self, w0: W) -> Result<&DryFrictionCurve, FrictionError>
    where
        W: Fn(f64) -> Result<f64, LambertError>,
    {
        let curve = match self.curve.take() {
            Some(curve) => curve,
            None => DryFrictionCurve::build_with(&self.params, w0)?,
        };
        Ok(self.curve.insert(curve))
    }

    /// Whether the table has been built.
    pub fn is_table_built(&self) -> bool {
        self.curve.is_some()
    }

    /// The built curve, if any.
    pub fn curve(&self) -> Option<&DryFrictionCurve> {
        self.curve.as_ref()
    }

    /// Shared handle to the dry-friction table, if built.
    pub fn table(&self) -> Option<&Arc<LookUpTable<f64>>> {
        self.curve.as_ref().map(DryFrictionCurve::table)
    }

    /// Evaluate the friction law at `w_ast` without touching the state.
    ///
    /// # Errors
    ///
    /// [`LutError::UninitializedTable`] (wrapped) if the table is not built,
    /// otherwise as [`DryFrictionCurve::friction_torque`].
    pub fn friction_torque(&self, w_ast: f64) -> Result<FrictionTorque, FrictionError> {
        match &self.curve {
            Some(curve) => curve.friction_torque(w_ast),
            None => Err(LutError::UninitializedTable.into()),
        }
    }

    /// Joint parameters.
    pub fn params(&self) -> &FrictionParams {
        &self.params
    }

    /// Derived constants.
    pub fn constants(&self) -> &FrictionConstants {
        &self.constants
    }

    /// Current per-step state.
    pub fn state(&self) -> &JointFrictionState {
        &self.state
    }

    /// Report of the most recent successful step.
    pub fn last_step(&self) -> Option<&StepReport> {
        self.last.as_ref()
    }

    /// Cumulative torque.
    pub fn torque(&self) -> f64 {
        self.state.torque
    }

    /// Overwrite the cumulative torque, typically with the actuator command
    /// before the step.
    pub fn set_torque(&mut self, torque: f64) {
        self.state.torque = torque;
    }

    /// Clear the dynamic state. The table is kept.
    pub fn reset(&mut self) {
        self.state = JointFrictionState::default();
        self.last = None;
    }

    /// Advance the model by one time step at the given joint position.
    ///
    /// Subtracts the friction torque from the cumulative torque and returns
    /// the result. Builds the table first if needed.
    ///
    /// # Errors
    ///
    /// Table construction failures, or a table lookup failure under the
    /// `Fail` out-of-bounds policy. On error the state is left unchanged.
    pub fn step(&mut self, position: f64) -> Result<f64, FrictionError> {
        let FrictionConstants { z, error_gain, .. } = self.constants;
        let dt = self.params.time_step;

        let velocity = match self.state.prev_position {
            Some(prev) => (position - prev) / dt,
            None => 0.0,
        };
        let w_ast = error_gain.mul_add(self.state.error, velocity);

        let friction = match &self.curve {
            Some(curve) => curve.friction_torque(w_ast)?,
            None => self.build_table()?.friction_torque(w_ast)?,
        };
        let tf = friction.torque;

        self.state.error = z * self.params.damping.mul_add(self.state.error, tf * dt);
        self.state.prev_position = Some(position);
        self.state.w_ast = w_ast;
        self.state.t_ast = friction.predictor_torque;
        self.state.torque -= tf;

        if self.last.is_some_and(|last| last.regime != friction.regime) {
            trace!(regime = %friction.regime, t_ast = friction.predictor_torque, "friction regime changed");
        }

        self.last = Some(StepReport {
            regime: friction.regime,
            velocity,
            w_ast,
            t_ast: friction.predictor_torque,
            friction_torque: tf,
            torque: self.state.torque,
        });

        Ok(self.state.torque)
    }
}
