//! Error types for stictionctl

use stiction_friction::FrictionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration not found: {0}")]
    ConfigNotFound(String),

    #[error("Joint not found: {0}")]
    JointNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Friction model failed for joint '{joint}'")]
    Model {
        joint: String,
        #[source]
        source: FrictionError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    pub fn model(joint: &str, source: FrictionError) -> Self {
        CliError::Model {
            joint: joint.to_string(),
            source,
        }
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ConfigNotFound(_) | CliError::JointNotFound(_) => 2,
            CliError::InvalidConfiguration(_) | CliError::JsonError(_) | CliError::YamlError(_) => 3,
            CliError::Model { .. } => 4,
            CliError::IoError(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::ConfigNotFound("a.yaml".into()).exit_code(), 2);
        assert_eq!(CliError::JointNotFound("knee".into()).exit_code(), 2);
        assert_eq!(CliError::InvalidConfiguration("empty".into()).exit_code(), 3);
        let model = CliError::model("knee", FrictionError::invalid("damping", "must be >= 0"));
        assert_eq!(model.exit_code(), 4);
        let io = CliError::from(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn model_error_keeps_source() {
        let err = CliError::model("hip", FrictionError::invalid("time_step", "must be > 0, got 0"));
        insta::assert_snapshot!(err.to_string(), @"Friction model failed for joint 'hip'");
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("invalid friction parameter 'time_step': must be > 0, got 0")
        );
    }
}
