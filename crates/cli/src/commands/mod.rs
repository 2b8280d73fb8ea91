//! Command implementations for stictionctl

pub mod params;
pub mod simulate;
pub mod table;

use clap::ValueEnum;
use serde::Serialize;
use std::f64::consts::TAU;

/// Serialization format for `params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParamsFormat {
    Yaml,
    Json,
}

/// Open-loop position trajectory for `simulate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Hold the joint at `amplitude` rad.
    Hold,
    /// Move at a constant `amplitude` rad/s.
    Ramp,
    /// Oscillate as `amplitude * sin(2π * frequency * t)`.
    Sine,
}

impl Scenario {
    /// Joint position at time `t` seconds.
    pub fn position(self, t: f64, amplitude: f64, frequency: f64) -> f64 {
        match self {
            Scenario::Hold => amplitude,
            Scenario::Ramp => amplitude * t,
            Scenario::Sine => amplitude * (TAU * frequency * t).sin(),
        }
    }
}
