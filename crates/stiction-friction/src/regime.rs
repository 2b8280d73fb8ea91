//! Friction regimes and the torque produced in each.

use serde::Serialize;

/// Which branch of the friction law applies at a step.
///
/// Recomputed from the predictor torque on every step; the model never latches
/// a regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionRegime {
    /// `T_ast > Ts`: sliding forward, table-corrected torque.
    PositiveSlip,
    /// `T_ast < -Ts`: sliding backward, mirrored table lookup.
    NegativeSlip,
    /// `-Ts <= T_ast <= Ts`: stuck, the predictor torque passes through.
    Stick,
}

impl FrictionRegime {
    /// Classify a predictor torque against the static friction threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use stiction_friction::FrictionRegime;
    ///
    /// assert_eq!(FrictionRegime::classify(2.5, 2.5), FrictionRegime::Stick);
    /// assert_eq!(FrictionRegime::classify(2.6, 2.5), FrictionRegime::PositiveSlip);
    /// assert_eq!(FrictionRegime::classify(-2.6, 2.5), FrictionRegime::NegativeSlip);
    /// ```
    #[inline]
    pub fn classify(predictor_torque: f64, static_friction: f64) -> Self {
        if predictor_torque > static_friction {
            FrictionRegime::PositiveSlip
        } else if predictor_torque < -static_friction {
            FrictionRegime::NegativeSlip
        } else {
            FrictionRegime::Stick
        }
    }

    /// Whether the joint is sliding.
    pub fn is_slipping(self) -> bool {
        !matches!(self, FrictionRegime::Stick)
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            FrictionRegime::PositiveSlip => "positive_slip",
            FrictionRegime::NegativeSlip => "negative_slip",
            FrictionRegime::Stick => "stick",
        }
    }
}

impl core::fmt::Display for FrictionRegime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Friction torque for a given auxiliary velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrictionTorque {
    /// Branch that produced the torque.
    pub regime: FrictionRegime,
    /// Predictor torque `T_ast = w_ast / Z`.
    pub predictor_torque: f64,
    /// Friction torque `Tf`.
    pub torque: f64,
}
