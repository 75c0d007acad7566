//! Directive-tree evaluation.

use super::ast::{Helper, Node};
use super::helpers::{format_currency, format_number, parse_decimal};
use crate::config::Config;
use crate::dates::to_local_date_format;
use crate::fields::{FieldMap, FieldValue};
use std::borrow::Cow;

const THIS: &str = "this";
const INDEX: &str = "@index";

/// The current `{{#each}}` element.
#[derive(Debug, Clone, Copy)]
struct Scope<'a> {
    item: &'a str,
    index: usize,
}

/// Placeholder for a missing field: `[FIELDNAME]`.
pub fn placeholder(field: &str) -> String {
    format!("[{}]", field.to_uppercase())
}

pub(crate) struct Renderer<'a> {
    fields: &'a FieldMap,
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(fields: &'a FieldMap, config: &'a Config) -> Self {
        Self { fields, config }
    }

    pub(crate) fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        self.render_into(nodes, None, &mut out);
        out
    }

    fn render_into(&self, nodes: &[Node], scope: Option<Scope<'_>>, out: &mut String) {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Variable(name) => out.push_str(&self.variable(name, scope)),
                Node::Helper { helper, field } => {
                    out.push_str(&self.helper(*helper, field, scope));
                }
                Node::Each { list, body } => {
                    for (index, item) in self.list(list).iter().enumerate() {
                        let inner = Scope { item, index };
                        self.render_into(body, Some(inner), out);
                    }
                }
                Node::Equals {
                    field,
                    literal,
                    then,
                    otherwise,
                } => {
                    let matched = self.text(field, scope).as_deref() == Some(literal.as_str());
                    self.render_into(if matched { then } else { otherwise }, scope, out);
                }
                Node::If {
                    field,
                    then,
                    otherwise,
                } => {
                    let branch = if self.is_present(field, scope) { then } else { otherwise };
                    self.render_into(branch, scope, out);
                }
                Node::Unless { field, body } => {
                    if !self.is_present(field, scope) {
                        self.render_into(body, scope, out);
                    }
                }
            }
        }
    }

    /// The display text of a name, without blank filtering.
    ///
    /// Lists render with the Portuguese join rule.
    fn text(&self, name: &str, scope: Option<Scope<'_>>) -> Option<Cow<'a, str>> {
        match (name, scope) {
            (THIS, Some(scope)) => Some(Cow::Owned(scope.item.to_string())),
            (INDEX, Some(scope)) => Some(Cow::Owned(scope.index.to_string())),
            (THIS | INDEX, None) => None,
            _ => self.fields.get(name).map(FieldValue::display_text),
        }
    }

    /// Display text of a name, treating an empty string as missing.
    ///
    /// Whitespace-only text is a value here and is substituted as it is.
    fn value(&self, name: &str, scope: Option<Scope<'_>>) -> Option<Cow<'a, str>> {
        self.text(name, scope).filter(|text| !text.is_empty())
    }

    /// Conditionals are stricter: whitespace-only counts as absent.
    fn is_present(&self, name: &str, scope: Option<Scope<'_>>) -> bool {
        self.value(name, scope).is_some_and(|text| !text.trim().is_empty())
    }

    fn variable(&self, name: &str, scope: Option<Scope<'_>>) -> String {
        match self.value(name, scope) {
            Some(text) if self.config.is_date_field(name) => to_local_date_format(&text),
            Some(text) => text.into_owned(),
            None if self.config.is_blank_when_missing(name) => String::new(),
            None => placeholder(name),
        }
    }

    fn helper(&self, helper: Helper, field: &str, scope: Option<Scope<'_>>) -> String {
        let Some(text) = self.value(field, scope) else {
            return placeholder(field);
        };
        match helper {
            Helper::Currency => parse_decimal(&text)
                .map(|v| format_currency(v, &self.config.currency_symbol))
                .unwrap_or_else(|| placeholder(field)),
            Helper::Number => parse_decimal(&text)
                .map(format_number)
                .unwrap_or_else(|| placeholder(field)),
            Helper::Upper => text.to_uppercase(),
            Helper::Lower => text.to_lowercase(),
        }
    }

    /// Elements to iterate; anything that is not a list iterates nothing.
    fn list(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .and_then(FieldValue::to_list)
            .unwrap_or_default()
    }
}
