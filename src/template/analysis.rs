//! Template inspection for authoring tools.

use super::Template;
use super::ast::{Node, walk};
use super::parser::TemplateIssue;
use crate::dates::{DEFAULT_DATE_KEYWORDS, format_local_date, is_date_like_field};
use crate::fields::FieldMap;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<TemplateIssue>,
}

impl ValidationReport {
    /// Error messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Serializable form used by `minuta lint --json`.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl From<&ValidationReport> for ValidationSummary {
    fn from(report: &ValidationReport) -> Self {
        Self {
            is_valid: report.is_valid,
            errors: report.messages(),
        }
    }
}

/// Check a template for syntax problems. Advisory only: every template
/// renders regardless of the outcome.
pub fn validate(template: &str) -> ValidationReport {
    let errors = Template::parse(template).issues().to_vec();
    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Field names a template reads: simple `{{name}}` references plus the
/// first argument of `if`, `unless` and `eq` blocks.
pub fn extract_variables(template: &str) -> BTreeSet<String> {
    Template::parse(template).variables()
}

pub(crate) fn variables_of(nodes: &[Node]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    walk(nodes, &mut |node| {
        let name = match node {
            Node::Variable(name) => name,
            Node::If { field, .. } | Node::Unless { field, .. } | Node::Equals { field, .. } => {
                field
            }
            _ => return,
        };
        if name != "this" && name != "@index" {
            names.insert(name.clone());
        }
    });
    names
}

/// Example values for every variable of a template, dated today.
pub fn sample_fields(template: &str) -> FieldMap {
    sample_fields_on(template, Local::now().date_naive())
}

/// Example values for every variable of a template.
pub fn sample_fields_on(template: &str, today: NaiveDate) -> FieldMap {
    extract_variables(template)
        .into_iter()
        .map(|name| {
            let value = sample_value(&name, today);
            (name, value)
        })
        .collect()
}

fn sample_value(name: &str, today: NaiveDate) -> String {
    let lower = name.to_lowercase();
    if is_date_like_field(name, DEFAULT_DATE_KEYWORDS) {
        format_local_date(today)
    } else if lower.contains("nome") {
        "Nome de Exemplo".to_string()
    } else if lower.contains("endereco") {
        "Endereço de Exemplo, 123".to_string()
    } else if lower.contains("valor") {
        "R$ 1.000,00".to_string()
    } else {
        format!("Exemplo {name}")
    }
}
