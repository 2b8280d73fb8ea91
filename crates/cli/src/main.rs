//! stictionctl - Joint Stiction Model CLI
//!
//! Builds dry-friction lookup tables from joint configuration files and
//! drives the chattering-free friction model through open-loop trajectories.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::simulate::SimulateOptions;
use crate::commands::{ParamsFormat, Scenario};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "stictionctl")]
#[command(about = "Joint stiction model CLI - Build dry-friction tables and simulate joints")]
#[command(version)]
#[command(long_about = "
stictionctl drives the chattering-free joint stiction model. It prints the
default joint parameters, builds and inspects each joint's Lambert-W
dry-friction table, and simulates joints along open-loop trajectories.

Joint configuration files are YAML (.yaml/.yml) or JSON.
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default joint friction parameters
    Params {
        /// Serialization format
        #[arg(long, value_enum, default_value_t = ParamsFormat::Yaml)]
        format: ParamsFormat,
    },

    /// Build and inspect dry-friction tables
    Table {
        /// Joint configuration file
        #[arg(short, long, env = "STICTIONCTL_CONFIG")]
        config: PathBuf,
        /// Only this joint
        #[arg(short, long)]
        joint: Option<String>,
        /// Number of evenly spaced samples to print
        #[arg(short, long, default_value_t = 8)]
        samples: usize,
    },

    /// Simulate joints along an open-loop trajectory
    Simulate {
        /// Joint configuration file
        #[arg(short, long, env = "STICTIONCTL_CONFIG")]
        config: PathBuf,
        /// Only this joint
        #[arg(short, long)]
        joint: Option<String>,
        /// Number of time steps
        #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
        steps: u32,
        /// Position trajectory
        #[arg(long, value_enum, default_value_t = Scenario::Sine)]
        scenario: Scenario,
        /// Position (hold, rad), velocity (ramp, rad/s) or amplitude (sine, rad)
        #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
        amplitude: f64,
        /// Sine frequency in Hz
        #[arg(long, default_value_t = 1.0)]
        frequency: f64,
        /// Print every K-th step
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        every: u32,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "stictionctl={log_level},stiction_friction={log_level},stiction_lut={log_level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(exit_code(&e))
        }
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Params { format } => commands::params::execute(*format, cli.json),
        Commands::Table {
            config,
            joint,
            samples,
        } => commands::table::execute(config, joint.as_deref(), *samples, cli.json),
        Commands::Simulate {
            config,
            joint,
            steps,
            scenario,
            amplitude,
            frequency,
            every,
        } => {
            let options = SimulateOptions {
                steps: *steps,
                scenario: *scenario,
                amplitude: *amplitude,
                frequency: *frequency,
                every: *every,
            };
            commands::simulate::execute(config, joint.as_deref(), &options, cli.json)
        }
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
