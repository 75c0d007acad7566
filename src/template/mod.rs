//! Template interpreter.
//!
//! Templates are plain text with Handlebars-style directives:
//!
//! | Directive | Form |
//! |---|---|
//! | Variable | `{{name}}` |
//! | Iteration | `{{#each list}} … {{this}} … {{@index}} … {{/each}}` |
//! | Equality | `{{#eq name "literal"}} … {{#else}} … {{/eq}}` |
//! | Condition | `{{#if name}} … {{#else}} … {{/if}}` (`{{else}}` also accepted) |
//! | Negation | `{{#unless name}} … {{/unless}}` |
//! | Helpers | `{{currency name}}`, `{{number name}}`, `{{upper name}}`, `{{lower name}}` |
//!
//! A template is parsed once into a directive tree ([`Node`]) and rendered by
//! a single recursive walk. Rendering is total and pure: it never fails,
//! never touches the field dictionary, and substituted values are output
//! text only, never re-read as directives.
//!
//! Missing or empty values render as `[FIELDNAME]`, except for fields
//! configured as blank-when-missing. Whitespace-only values are substituted
//! as they are, though `{{#if}}` and `{{#unless}}` treat them as absent.
//! Malformed directives render as the literal text they were written as;
//! [`validate`] reports them. Blocks nest at most [`MAX_NESTING_DEPTH`]
//! levels deep; deeper openers stay literal text.
//!
//! # Examples
//!
//! ```
//! use minuta::config::Config;
//! use minuta::template::Template;
//!
//! let fields = minuta::fields! { "status" => "aprovada" };
//! let template = Template::parse(r#"{{#eq status "aprovada"}}OK{{/eq}}"#);
//! assert_eq!(template.render(&fields, &Config::default()), "OK");
//! ```

mod analysis;
mod ast;
mod helpers;
mod lexer;
mod parser;
mod render;


pub use analysis::{
    ValidationReport, ValidationSummary, extract_variables, sample_fields, sample_fields_on,
    validate,
};
pub use ast::{Helper, Node};
pub use helpers::{format_currency, format_number, parse_decimal};
pub use parser::{MAX_NESTING_DEPTH, TemplateIssue};
pub use render::placeholder;

use crate::config::Config;
use crate::fields::FieldMap;
use std::collections::BTreeSet;
use tracing::trace;

/// A parsed template, reusable across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
    issues: Vec<TemplateIssue>,
}

impl Template {
    /// Parse a template. Never fails; see [`Template::issues`].
    pub fn parse(source: &str) -> Self {
        let (nodes, issues) = parser::parse(source);
        trace!(nodes = nodes.len(), issues = issues.len(), "parsed template");
        Self { nodes, issues }
    }

    /// The directive tree.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Syntax problems found while parsing.
    pub fn issues(&self) -> &[TemplateIssue] {
        &self.issues
    }

    /// Field names this template reads.
    pub fn variables(&self) -> BTreeSet<String> {
        analysis::variables_of(&self.nodes)
    }

    /// Render against a resolved field dictionary.
    pub fn render(&self, fields: &FieldMap, config: &Config) -> String {
        render::Renderer::new(fields, config).render(&self.nodes)
    }
}

/// Parse and render in one step with the default configuration.
///
/// ```
/// let fields = minuta::fields! { "nomeLocatario" => "Ana Souza" };
/// assert_eq!(
///     minuta::template::render("Locatária: {{nomeLocatario}}, {{cpf}}", &fields),
///     "Locatária: Ana Souza, [CPF]"
/// );
/// ```
pub fn render(template: &str, fields: &FieldMap) -> String {
    Template::parse(template).render(fields, &Config::default())
}
