//! Implementation of the `minuta anonymize` command.

use super::read_fields;
use crate::cli::AnonymizeArgs;
use minuta::anonymize::anonymize_fields;
use minuta::error::Result;

/// Execute the `minuta anonymize` command.
///
/// Redacts the dictionary as given, without deriving agreement fields.
pub fn cmd_anonymize(args: AnonymizeArgs) -> Result<()> {
    let raw = read_fields(&args.fields)?;
    println!("{}", anonymize_fields(&raw).to_json()?);
    Ok(())
}
