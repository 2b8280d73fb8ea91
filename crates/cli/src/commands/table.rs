//! Dry-friction table inspection

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use stiction_friction::{DryFrictionCurve, OutOfBoundsPolicy};
use tracing::info;

use crate::config::JointSetConfig;
use crate::error::CliError;
use crate::output;

/// Layout and a few samples of one joint's table.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub joint: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub len: usize,
    pub breakaway_ratio: f64,
    pub out_of_bounds: OutOfBoundsPolicy,
    pub samples: Vec<(f64, f64)>,
}

impl TableSummary {
    pub fn from_curve(joint: &str, curve: &DryFrictionCurve, count: usize) -> Self {
        let table = curve.table();
        Self {
            joint: joint.to_string(),
            min: table.min(),
            max: table.max(),
            step: table.step(),
            len: table.len(),
            breakaway_ratio: curve.constants().breakaway_ratio,
            out_of_bounds: table.policy(),
            samples: pick_samples(table.samples(), count),
        }
    }
}

/// Execute table command
pub fn execute(config: &Path, joint: Option<&str>, samples: usize, json: bool) -> Result<()> {
    let config = JointSetConfig::load(config)?;

    let mut summaries = Vec::new();
    for joint in config.select(joint)? {
        info!(joint = %joint.name, "building dry-friction table");
        let curve = DryFrictionCurve::build(&joint.params)
            .map_err(|e| CliError::model(&joint.name, e))?;
        summaries.push(TableSummary::from_curve(&joint.name, &curve, samples));
    }

    output::print_tables(&summaries, json)
}

/// `count` samples spread evenly over `all`, first and last included.
fn pick_samples(all: &[(f64, f64)], count: usize) -> Vec<(f64, f64)> {
    if count == 0 || all.is_empty() {
        return Vec::new();
    }
    if count >= all.len() {
        return all.to_vec();
    }
    if count == 1 {
        return all.first().copied().into_iter().collect();
    }

    let last = all.len() - 1;
    (0..count)
        .filter_map(|i| all.get(i * last / (count - 1)))
        .copied()
        .collect()
}
