//! Implementation of the `minuta resolve` command.

use super::read_fields;
use crate::cli::ResolveArgs;
use chrono::{Local, NaiveDateTime};
use minuta::config::Config;
use minuta::engine::DocumentEngine;
use minuta::error::Result;
use minuta::fields::FieldMap;

/// Execute the `minuta resolve` command.
///
/// Prints the resolved dictionary as pretty JSON, ordered by field name.
pub fn cmd_resolve(args: ResolveArgs, config: Config) -> Result<()> {
    let resolved = resolve_fields(&args, config, Local::now().naive_local())?;
    println!("{}", resolved.to_json()?);
    Ok(())
}

fn resolve_fields(args: &ResolveArgs, mut config: Config, now: NaiveDateTime) -> Result<FieldMap> {
    let raw = read_fields(&args.fields)?;
    if args.anonymize {
        config.anonymize = true;
    }
    Ok(DocumentEngine::new(config).prepare(&raw, now))
}
