//! Implementation of the `minuta render` command.

use super::{read_fields, read_template};
use crate::cli::RenderArgs;
use chrono::{Local, NaiveDateTime};
use minuta::config::Config;
use minuta::engine::DocumentEngine;
use minuta::error::{MinutaError, Result};
use minuta::template::Template;
use tracing::warn;

/// Execute the `minuta render` command.
///
/// Syntax problems in the template are logged as warnings; the document is
/// rendered regardless.
pub fn cmd_render(args: RenderArgs, config: Config) -> Result<()> {
    let document = render_document(&args, config, Local::now().naive_local())?;

    match &args.output {
        Some(path) => std::fs::write(path, &document).map_err(|e| {
            MinutaError::UserError(format!(
                "failed to write document to '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            println!("{}", document);
            Ok(())
        }
    }
}

fn render_document(args: &RenderArgs, mut config: Config, now: NaiveDateTime) -> Result<String> {
    let source = read_template(&args.template)?;
    let raw = read_fields(&args.fields)?;

    if args.anonymize {
        config.anonymize = true;
    }

    let template = Template::parse(&source);
    for issue in template.issues() {
        warn!(template = %args.template.display(), "{}", issue);
    }

    Ok(DocumentEngine::new(config).generate_parsed(&template, &raw, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::write_file;
    use chrono::NaiveDate;
    use minuta::exit_codes;
    use tempfile::TempDir;

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn args(dir: &TempDir, template: &str, fields: &str) -> RenderArgs {
        RenderArgs {
            template: write_file(dir, "aviso.hbs", template),
            fields: write_file(dir, "fields.json", fields),
            anonymize: false,
            output: None,
        }
    }

    #[test]
    fn test_render_document_resolves_agreement() {
        let dir = TempDir::new().unwrap();
        let args = args(
            &dir,
            "{{saudacaoLocatario}}, {{saudacaoComercial}}!",
            r#"{"primeiroLocatario": "joão silva", "generoLocatario": "masculino"}"#,
        );
        let document = render_document(&args, Config::default(), morning()).unwrap();
        assert_eq!(document, "Prezado João, bom dia!");
    }

    #[test]
    fn test_render_document_anonymize_flag() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, "{{cpfLocatario}}", r#"{"cpfLocatario": "123.456.789-09"}"#);
        args.anonymize = true;
        let document = render_document(&args, Config::default(), morning()).unwrap();
        assert_eq!(document, "***.***.***-09");
    }

    #[test]
    fn test_render_document_uses_config() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "{{currency valor}}", r#"{"valor": "1500"}"#);
        let config = Config {
            currency_symbol: "US$".to_string(),
            ..Config::default()
        };
        let document = render_document(&args, config, morning()).unwrap();
        assert_eq!(document, "US$ 1.500,00");
    }

    #[test]
    fn test_render_document_malformed_template_still_renders() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, "{{#if x}}texto", "{}");
        let document = render_document(&args, Config::default(), morning()).unwrap();
        assert_eq!(document, "{{#if x}}texto");
    }

    #[test]
    fn test_cmd_render_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, "Olá {{nome}}", r#"{"nome": "Ana"}"#);
        let output = dir.path().join("out.txt");
        args.output = Some(output.clone());
        cmd_render(args, Config::default()).unwrap();
        assert_eq!(std::fs::read_to_string(output).unwrap(), "Olá Ana");
    }

    #[test]
    fn test_cmd_render_missing_fields_file() {
        let dir = TempDir::new().unwrap();
        let args = RenderArgs {
            template: write_file(&dir, "aviso.hbs", "{{nome}}"),
            fields: dir.path().join("missing.json"),
            anonymize: false,
            output: None,
        };
        let err = cmd_render(args, Config::default()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }
}
