//! Default joint parameters

use anyhow::Result;
use stiction_friction::{FrictionConstants, FrictionParams};

use crate::commands::ParamsFormat;
use crate::output;

/// Execute params command
pub fn execute(format: ParamsFormat, json: bool) -> Result<()> {
    let params = FrictionParams::default();
    let constants = FrictionConstants::from_params(&params);
    output::print_params(&params, &constants, format, json)
}
