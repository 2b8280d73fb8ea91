//! Open-loop friction simulation

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use stiction_friction::{FrictionModel, FrictionRegime};
use tracing::{debug, info};

use crate::commands::Scenario;
use crate::config::{JointConfig, JointSetConfig};
use crate::error::CliError;
use crate::output;

/// Trajectory settings shared by every joint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SimulateOptions {
    pub steps: u32,
    pub scenario: Scenario,
    pub amplitude: f64,
    pub frequency: f64,
    pub every: u32,
}

/// One recorded step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TracePoint {
    pub step: u32,
    pub time: f64,
    pub position: f64,
    pub regime: FrictionRegime,
    pub t_ast: f64,
    pub friction_torque: f64,
    pub torque: f64,
}

/// Recorded trace and totals for one joint.
#[derive(Debug, Clone, Serialize)]
pub struct JointTrace {
    pub joint: String,
    pub stick_steps: u32,
    pub slip_steps: u32,
    pub final_torque: f64,
    pub final_error: f64,
    pub points: Vec<TracePoint>,
}

/// Execute simulate command
pub fn execute(config: &Path, joint: Option<&str>, options: &SimulateOptions, json: bool) -> Result<()> {
    let config = JointSetConfig::load(config)?;

    let mut traces = Vec::new();
    for joint in config.select(joint)? {
        traces.push(simulate_joint(joint, options)?);
    }

    output::print_simulation(options, &traces, json)
}

/// Drive one joint through the trajectory.
pub fn simulate_joint(joint: &JointConfig, options: &SimulateOptions) -> Result<JointTrace, CliError> {
    let mut model =
        FrictionModel::new(joint.params).map_err(|e| CliError::model(&joint.name, e))?;
    model
        .build_table()
        .map_err(|e| CliError::model(&joint.name, e))?;
    model.set_torque(joint.initial_torque);

    info!(joint = %joint.name, steps = options.steps, scenario = ?options.scenario, "simulating joint");

    let dt = joint.params.time_step;
    let every = options.every.max(1);
    let mut trace = JointTrace {
        joint: joint.name.clone(),
        stick_steps: 0,
        slip_steps: 0,
        final_torque: model.torque(),
        final_error: 0.0,
        points: Vec::new(),
    };

    for step in 0..options.steps {
        let time = f64::from(step) * dt;
        let position = options
            .scenario
            .position(time, options.amplitude, options.frequency);
        let torque = model
            .step(position)
            .map_err(|e| CliError::model(&joint.name, e))?;

        let Some(report) = model.last_step().copied() else {
            continue;
        };
        if report.regime.is_slipping() {
            trace.slip_steps += 1;
        } else {
            trace.stick_steps += 1;
        }

        if step % every == 0 || step + 1 == options.steps {
            trace.points.push(TracePoint {
                step,
                time,
                position,
                regime: report.regime,
                t_ast: report.t_ast,
                friction_torque: report.friction_torque,
                torque,
            });
        }
    }

    trace.final_torque = model.torque();
    trace.final_error = model.state().error;
    debug!(
        joint = %joint.name,
        stick_steps = trace.stick_steps,
        slip_steps = trace.slip_steps,
        "simulation finished"
    );

    Ok(trace)
}
