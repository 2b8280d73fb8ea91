//! Joint configuration files

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use stiction_friction::FrictionParams;
use tracing::debug;

use crate::error::CliError;

/// A set of joints to build tables for or simulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointSetConfig {
    pub joints: Vec<JointConfig>,
}

/// One joint: a name, the starting cumulative torque and its friction
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointConfig {
    pub name: String,
    #[serde(default)]
    pub initial_torque: f64,
    #[serde(default)]
    pub params: FrictionParams,
}

impl JointSetConfig {
    /// Load and validate a config file. YAML for `.yaml`/`.yml`, JSON otherwise.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Err(CliError::ConfigNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let config = if is_yaml(path) {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };

        debug!(path = %path.display(), joints = config.joints.len(), "configuration loaded");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, CliError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, CliError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty joint lists, duplicate names and non-finite initial
    /// torques. Friction parameters are validated when the model is built.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.joints.is_empty() {
            return Err(CliError::InvalidConfiguration(
                "at least one joint is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for joint in &self.joints {
            if joint.name.trim().is_empty() {
                return Err(CliError::InvalidConfiguration(
                    "joint names must not be empty".to_string(),
                ));
            }
            if !seen.insert(joint.name.as_str()) {
                return Err(CliError::InvalidConfiguration(format!(
                    "duplicate joint name '{}'",
                    joint.name
                )));
            }
            if !joint.initial_torque.is_finite() {
                return Err(CliError::InvalidConfiguration(format!(
                    "joint '{}': initial_torque must be finite",
                    joint.name
                )));
            }
        }

        Ok(())
    }

    /// All joints, or only the one named `name`.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&JointConfig>, CliError> {
        match name {
            None => Ok(self.joints.iter().collect()),
            Some(name) => self
                .joints
                .iter()
                .find(|joint| joint.name == name)
                .map(|joint| vec![joint])
                .ok_or_else(|| CliError::JointNotFound(name.to_string())),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
