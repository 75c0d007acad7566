//! Command implementations for minuta.
//!
//! The dispatcher loads the engine configuration once and routes each
//! subcommand to its handler. Handlers read inputs from disk, call into the
//! library, and print results to stdout.

mod anonymize;
mod lint;
mod render;
mod resolve;
mod vars;

use crate::cli::{Cli, Command};
use minuta::config::Config;
use minuta::error::{MinutaError, Result};
use minuta::fields::FieldMap;
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render(args) => render::cmd_render(args, config),
        Command::Resolve(args) => resolve::cmd_resolve(args, config),
        Command::Anonymize(args) => anonymize::cmd_anonymize(args),
        Command::Lint(args) => lint::cmd_lint(args),
        Command::Vars(args) => vars::cmd_vars(args),
    }
}

// ============================================================================
// Shared Input Helpers
// ============================================================================

/// Load the engine config, or the defaults when no file was given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)
        }
        None => Ok(Config::default()),
    }
}

/// Read a template file.
fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        MinutaError::UserError(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Read a field dictionary from a JSON file.
fn read_fields(path: &Path) -> Result<FieldMap> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        MinutaError::UserError(format!(
            "failed to read fields file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let fields = FieldMap::from_json(&content).map_err(|e| {
        MinutaError::UserError(format!("{} (in '{}')", e, path.display()))
    })?;
    debug!(count = fields.len(), "loaded fields");
    Ok(fields)
}
