//! Document generation pipeline.
//!
//! Raw form fields flow through three pure stages:
//!
//! ```text
//! raw fields ──► Resolver ──► [anonymize_fields] ──► Template::render ──► document
//! ```
//!
//! The engine owns no I/O. It only carries the [`Config`] shared by the
//! stages.

use crate::anonymize::anonymize_fields;
use crate::config::Config;
use crate::fields::FieldMap;
use crate::grammar::Resolver;
use crate::template::Template;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, debug_span};

/// Runs resolve, optional anonymization and render with one configuration.
#[derive(Debug, Clone, Default)]
pub struct DocumentEngine {
    config: Config,
    resolver: Resolver,
}

impl DocumentEngine {
    pub fn new(config: Config) -> Self {
        let resolver = Resolver::new(&config);
        Self { config, resolver }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve derived fields, then redact them when the config asks for it.
    pub fn prepare(&self, raw: &FieldMap, now: NaiveDateTime) -> FieldMap {
        let resolved = self.resolver.resolve(raw, now);
        if self.config.anonymize {
            debug!("anonymizing resolved fields");
            anonymize_fields(&resolved)
        } else {
            resolved
        }
    }

    /// Generate a document from a template and raw form fields.
    pub fn generate(&self, template: &str, raw: &FieldMap, now: NaiveDateTime) -> String {
        let _span = debug_span!("generate", fields = raw.len()).entered();
        let parsed = Template::parse(template);
        self.generate_parsed(&parsed, raw, now)
    }

    /// Generate from an already-parsed template.
    pub fn generate_parsed(
        &self,
        template: &Template,
        raw: &FieldMap,
        now: NaiveDateTime,
    ) -> String {
        if !template.issues().is_empty() {
            debug!(issues = template.issues().len(), "template has syntax issues");
        }
        let fields = self.prepare(raw, now);
        let document = template.render(&fields, &self.config);
        debug!(bytes = document.len(), "document rendered");
        document
    }

    /// Generate using the current local time.
    pub fn generate_now(&self, template: &str, raw: &FieldMap) -> String {
        self.generate(template, raw, Local::now().naive_local())
    }
}
