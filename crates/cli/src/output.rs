//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::*;
use serde::Serialize;
use serde_json::json;
use stiction_friction::{FrictionConstants, FrictionParams, FrictionRegime};

use crate::commands::ParamsFormat;
use crate::commands::simulate::{JointTrace, SimulateOptions};
use crate::commands::table::TableSummary;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "causes": error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".yellow(), cause);
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::ConfigNotFound(_)) => "ConfigNotFound",
        Some(CliError::JointNotFound(_)) => "JointNotFound",
        Some(CliError::InvalidConfiguration(_)) => "InvalidConfiguration",
        Some(CliError::Model { .. }) => "Model",
        Some(CliError::IoError(_)) => "IoError",
        Some(CliError::JsonError(_)) => "JsonError",
        Some(CliError::YamlError(_)) => "YamlError",
        None => "Unknown",
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the default joint parameters
pub fn print_params(
    params: &FrictionParams,
    constants: &FrictionConstants,
    format: ParamsFormat,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&json!({
            "success": true,
            "params": params,
            "derived": constants
        }));
    }

    match format {
        ParamsFormat::Json => print_json(params),
        ParamsFormat::Yaml => {
            print!("{}", serde_yaml::to_string(params)?);
            Ok(())
        }
    }
}

/// Print table summaries
pub fn print_tables(summaries: &[TableSummary], json: bool) -> Result<()> {
    if json {
        return print_json(&json!({
            "success": true,
            "tables": summaries
        }));
    }

    for summary in summaries {
        println!("{} {}", "Joint:".bold(), summary.joint.cyan());
        println!("  Domain: [{:.6}, {:.6}] rad/s", summary.min, summary.max);
        println!("  Samples: {} (step {})", summary.len, summary.step);
        println!("  Out of bounds: {}", summary.out_of_bounds);

        let ratio = format!("{:.4}", summary.breakaway_ratio);
        if summary.breakaway_ratio > 1.0 {
            println!("  Break-away ratio: {} {}", ratio.red(), "(stick and slip do not meet)".red());
        } else {
            println!("  Break-away ratio: {}", ratio.green());
        }

        if !summary.samples.is_empty() {
            println!("  {:>12}  {:>12}", "w".dimmed(), "dry(w)".dimmed());
            for (w, y) in &summary.samples {
                println!("  {:>12.6}  {:>12.6}", w, y);
            }
        }
    }
    Ok(())
}

/// Print simulation traces
pub fn print_simulation(options: &SimulateOptions, traces: &[JointTrace], json: bool) -> Result<()> {
    if json {
        return print_json(&json!({
            "success": true,
            "options": options,
            "joints": traces
        }));
    }

    for trace in traces {
        println!(
            "{} {} ({} steps, {} stick / {} slip)",
            "Joint:".bold(),
            trace.joint.cyan(),
            options.steps,
            trace.stick_steps,
            trace.slip_steps
        );
        println!(
            "  {:>6}  {:>8}  {:>10}  {:>13}  {:>10}  {:>10}  {:>10}",
            "step", "time", "position", "regime", "T_ast", "Tf", "torque"
        );
        for point in &trace.points {
            println!(
                "  {:>6}  {:>8.3}  {:>10.5}  {}  {:>10.4}  {:>10.4}  {:>10.4}",
                point.step,
                point.time,
                point.position,
                regime_label(point.regime),
                point.t_ast,
                point.friction_torque,
                point.torque
            );
        }
        println!(
            "  Final torque: {:.6} Nm, error state: {:.3e}",
            trace.final_torque, trace.final_error
        );
    }
    Ok(())
}

fn regime_label(regime: FrictionRegime) -> ColoredString {
    let label = format!("{:>13}", regime.as_str());
    match regime {
        FrictionRegime::Stick => label.green(),
        FrictionRegime::PositiveSlip | FrictionRegime::NegativeSlip => label.yellow(),
    }
}
