//! Joint friction parameters and the constants derived from them.

use serde::{Deserialize, Serialize};
use stiction_lut::OutOfBoundsPolicy;

use crate::error::FrictionError;

/// Lambert-W argument at which the dry-friction table ends.
///
/// The table's upper bound is the auxiliary velocity at which the W₀ argument
/// of the dry-friction closed form has shrunk to this value. Past it the
/// closed form is treated as saturated and the table's out-of-bounds policy
/// takes over. The value comes from the reference joint model and has no
/// derivation in terms of the other parameters; it needs review by someone
/// who owns the friction identification before it is changed.
pub const LAMBERT_ARG_THRESHOLD: f64 = -0.001;

/// Default table resolution in auxiliary-velocity units (rad/s).
pub const DEFAULT_LUT_STEP: f64 = 0.001;

/// Physical friction parameters of one joint.
///
/// Every field has a default matching the reference joint, so configuration
/// files only need to list what differs. The short symbols used in the
/// friction literature are accepted as aliases.
///
/// # Example
///
/// ```
/// use stiction_friction::FrictionParams;
///
/// let params: FrictionParams = serde_json::from_str(r#"{ "Ts": 3.0, "damping": 40.0 }"#)?;
/// assert!((params.static_friction - 3.0).abs() < f64::EPSILON);
/// assert!((params.coulomb_friction - 0.2).abs() < f64::EPSILON);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrictionParams {
    /// Static friction `Ts` (Nm), the stiction threshold.
    #[serde(alias = "Ts")]
    pub static_friction: f64,
    /// Coulomb friction `Tc` (Nm).
    #[serde(alias = "Tc")]
    pub coulomb_friction: f64,
    /// Viscous friction coefficient `Tv` (Nm·s/rad).
    #[serde(alias = "Tv")]
    pub viscous_friction: f64,
    /// Break-away angular velocity `wbrk` (rad/s).
    #[serde(alias = "wbrk")]
    pub breakaway_velocity: f64,
    /// Spring constant `Kf` of the error model (Nm/rad).
    #[serde(alias = "Kf")]
    pub spring_stiffness: f64,
    /// Damper constant `Bf` of the error model (Nm·s/rad).
    #[serde(alias = "Bf")]
    pub damping: f64,
    /// Simulation time step `dt` (s).
    #[serde(alias = "dt")]
    pub time_step: f64,
    /// Dry-friction table resolution (rad/s).
    #[serde(alias = "LUTstep")]
    pub lut_step: f64,
    /// Table behavior past its upper bound.
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl Default for FrictionParams {
    fn default() -> Self {
        Self {
            static_friction: 2.5,
            coulomb_friction: 0.2,
            viscous_friction: 4.5,
            breakaway_velocity: 0.04,
            spring_stiffness: 5000.0,
            damping: 50.0,
            time_step: 0.001,
            lut_step: DEFAULT_LUT_STEP,
            out_of_bounds: OutOfBoundsPolicy::Zero,
        }
    }
}

impl FrictionParams {
    /// Set the static and Coulomb friction levels.
    pub fn with_friction(mut self, static_friction: f64, coulomb_friction: f64) -> Self {
        self.static_friction = static_friction;
        self.coulomb_friction = coulomb_friction;
        self
    }

    /// Set the viscous friction coefficient.
    pub fn with_viscous(mut self, viscous_friction: f64) -> Self {
        self.viscous_friction = viscous_friction;
        self
    }

    /// Set the break-away velocity.
    pub fn with_breakaway(mut self, breakaway_velocity: f64) -> Self {
        self.breakaway_velocity = breakaway_velocity;
        self
    }

    /// Set the spring and damper gains of the error model.
    pub fn with_gains(mut self, spring_stiffness: f64, damping: f64) -> Self {
        self.spring_stiffness = spring_stiffness;
        self.damping = damping;
        self
    }

    /// Set the simulation time step.
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the dry-friction table resolution.
    pub fn with_lut_step(mut self, lut_step: f64) -> Self {
        self.lut_step = lut_step;
        self
    }

    /// Check the parameters for physical consistency.
    ///
    /// # Errors
    ///
    /// Returns [`FrictionError::InvalidParameter`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), FrictionError> {
        let fields = [
            ("static_friction", self.static_friction),
            ("coulomb_friction", self.coulomb_friction),
            ("viscous_friction", self.viscous_friction),
            ("breakaway_velocity", self.breakaway_velocity),
            ("spring_stiffness", self.spring_stiffness),
            ("damping", self.damping),
            ("time_step", self.time_step),
            ("lut_step", self.lut_step),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(FrictionError::invalid(field, "must be finite"));
            }
        }

        positive("time_step", self.time_step)?;
        positive("lut_step", self.lut_step)?;
        positive("breakaway_velocity", self.breakaway_velocity)?;
        non_negative("coulomb_friction", self.coulomb_friction)?;
        non_negative("viscous_friction", self.viscous_friction)?;
        non_negative("spring_stiffness", self.spring_stiffness)?;
        non_negative("damping", self.damping)?;

        if self.static_friction <= self.coulomb_friction {
            return Err(FrictionError::invalid(
                "static_friction",
                format!(
                    "must exceed coulomb_friction ({}), got {}",
                    self.coulomb_friction, self.static_friction
                ),
            ));
        }

        let compliance = self.spring_stiffness.mul_add(self.time_step, self.damping);
        if compliance <= 0.0 {
            return Err(FrictionError::invalid(
                "damping",
                "spring_stiffness * time_step + damping must be > 0",
            ));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), FrictionError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(FrictionError::invalid(field, format!("must be > 0, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), FrictionError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(FrictionError::invalid(field, format!("must be >= 0, got {value}")))
    }
}

/// Constants derived once from [`FrictionParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrictionConstants {
    /// `Z = 1 / (Kf·dt + Bf)`.
    pub z: f64,
    /// `den = 1 + Z·Tv`.
    pub den: f64,
    /// `Tsc = Ts - Tc`.
    pub tsc: f64,
    /// `Z·Kf`, the gain from the error state to the auxiliary velocity.
    pub error_gain: f64,
    /// Table lower bound `Z·Ts`.
    pub table_min: f64,
    /// Table upper bound, where the W₀ argument reaches [`LAMBERT_ARG_THRESHOLD`].
    pub table_max: f64,
    /// `Z·Tsc / (wbrk·den)`; the stick and slip branches meet at `±Ts` only
    /// while this stays at or below 1.
    pub breakaway_ratio: f64,
}

impl FrictionConstants {
    /// Derive the constants. The parameters are assumed valid.
    pub fn from_params(params: &FrictionParams) -> Self {
        let z = 1.0
            / params
                .spring_stiffness
                .mul_add(params.time_step, params.damping);
        let den = z.mul_add(params.viscous_friction, 1.0);
        let tsc = params.static_friction - params.coulomb_friction;
        let wbrk = params.breakaway_velocity;

        let table_min = z * params.static_friction;
        let table_max = z * params.coulomb_friction
            - wbrk * den * (-wbrk / z * den / tsc * LAMBERT_ARG_THRESHOLD).ln();

        Self {
            z,
            den,
            tsc,
            error_gain: z * params.spring_stiffness,
            table_min,
            table_max,
            breakaway_ratio: z * tsc / (wbrk * den),
        }
    }
}
