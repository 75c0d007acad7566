//! CLI argument parsing for minuta.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Minuta: document generation for rental-contract paperwork.
///
/// Field dictionaries are JSON objects of form fields; templates are plain
/// text with `{{...}}` directives.
#[derive(Parser, Debug)]
#[command(name = "minuta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Engine configuration file (YAML).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for minuta.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a template against a field dictionary.
    ///
    /// Derives agreement fields, optionally anonymizes, and prints the
    /// document (or writes it to --output).
    Render(RenderArgs),

    /// Print the resolved field dictionary as JSON.
    Resolve(ResolveArgs),

    /// Print a redacted copy of a field dictionary as JSON.
    ///
    /// Applies the redaction table only; no fields are derived.
    Anonymize(AnonymizeArgs),

    /// Check a template for syntax problems.
    ///
    /// Exits with code 2 when problems are found.
    Lint(LintArgs),

    /// List the field names a template reads, one per line.
    Vars(VarsArgs),
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file.
    pub template: PathBuf,

    /// Field dictionary (JSON object).
    #[arg(short, long)]
    pub fields: PathBuf,

    /// Redact personal data before rendering.
    #[arg(long)]
    pub anonymize: bool,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Field dictionary (JSON object).
    #[arg(short, long)]
    pub fields: PathBuf,

    /// Redact personal data after resolving.
    #[arg(long)]
    pub anonymize: bool,
}

/// Arguments for the `anonymize` command.
#[derive(Parser, Debug)]
pub struct AnonymizeArgs {
    /// Field dictionary (JSON object).
    #[arg(short, long)]
    pub fields: PathBuf,
}

/// Arguments for the `lint` command.
#[derive(Parser, Debug)]
pub struct LintArgs {
    /// Template file.
    pub template: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
pub struct VarsArgs {
    /// Template file.
    pub template: PathBuf,

    /// Print example values as a JSON field dictionary instead.
    #[arg(long)]
    pub sample: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_minimal() {
        let cli =
            Cli::try_parse_from(["minuta", "render", "aviso.hbs", "--fields", "f.json"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
        if let Command::Render(args) = cli.command {
            assert_eq!(args.template, PathBuf::from("aviso.hbs"));
            assert_eq!(args.fields, PathBuf::from("f.json"));
            assert!(!args.anonymize);
            assert!(args.output.is_none());
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_render_full() {
        let cli = Cli::try_parse_from([
            "minuta",
            "render",
            "aviso.hbs",
            "-f",
            "f.json",
            "--anonymize",
            "-o",
            "out.html",
            "--config",
            "minuta.yaml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("minuta.yaml")));
        assert_eq!(cli.verbose, 2);
        if let Command::Render(args) = cli.command {
            assert!(args.anonymize);
            assert_eq!(args.output, Some(PathBuf::from("out.html")));
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_render_requires_fields() {
        assert!(Cli::try_parse_from(["minuta", "render", "aviso.hbs"]).is_err());
    }

    #[test]
    fn parse_resolve() {
        let cli =
            Cli::try_parse_from(["minuta", "resolve", "--fields", "f.json", "--anonymize"]).unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.fields, PathBuf::from("f.json"));
            assert!(args.anonymize);
        } else {
            panic!("Expected Resolve command");
        }
    }

    #[test]
    fn parse_anonymize() {
        let cli = Cli::try_parse_from(["minuta", "anonymize", "-f", "f.json"]).unwrap();
        assert!(matches!(cli.command, Command::Anonymize(_)));
    }

    #[test]
    fn parse_lint_json() {
        let cli = Cli::try_parse_from(["minuta", "lint", "aviso.hbs", "--json"]).unwrap();
        if let Command::Lint(args) = cli.command {
            assert_eq!(args.template, PathBuf::from("aviso.hbs"));
            assert!(args.json);
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn parse_vars() {
        let cli = Cli::try_parse_from(["minuta", "vars", "aviso.hbs"]).unwrap();
        if let Command::Vars(args) = cli.command {
            assert!(!args.sample);
        } else {
            panic!("Expected Vars command");
        }
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["minuta", "vars", "aviso.hbs", "--config", "c.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
    }
}
