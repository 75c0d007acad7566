//! Implementation of the `minuta vars` command.

use super::read_template;
use crate::cli::VarsArgs;
use minuta::error::Result;
use minuta::template::{extract_variables, sample_fields};

/// Execute the `minuta vars` command.
pub fn cmd_vars(args: VarsArgs) -> Result<()> {
    let source = read_template(&args.template)?;

    if args.sample {
        println!("{}", sample_fields(&source).to_json()?);
        return Ok(());
    }

    for name in extract_variables(&source) {
        println!("{}", name);
    }
    Ok(())
}
