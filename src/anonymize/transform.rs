//! Whole-dictionary redaction.

use super::rules::{
    anonymize_address, anonymize_cpf, anonymize_document, anonymize_email, anonymize_name,
    anonymize_names_list, anonymize_phone, anonymize_rg, is_placeholder, strip_braces,
};
use crate::fields::{FieldKey, FieldMap, FieldValue};
use crate::grammar::Role;
use crate::names::split_names;
use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

/// How a field's value is redacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redaction {
    Name,
    NameList,
    Address,
    Cpf,
    Rg,
    /// CPF or RG, decided by digit count.
    Document,
    Phone,
    Email,
    /// Prose that may mention party names.
    FreeText,
}

/// Fields carrying personal data and the rule applied to each.
pub const REDACTIONS: &[(FieldKey, Redaction)] = &[
    // Single people
    (FieldKey::PrimeiroLocatario, Redaction::Name),
    (FieldKey::SegundoLocatario, Redaction::Name),
    (FieldKey::TerceiroLocatario, Redaction::Name),
    (FieldKey::QuartoLocatario, Redaction::Name),
    (FieldKey::PrimeiroFiador, Redaction::Name),
    (FieldKey::SegundoFiador, Redaction::Name),
    (FieldKey::TerceiroFiador, Redaction::Name),
    (FieldKey::QuartoFiador, Redaction::Name),
    (FieldKey::Fiadores, Redaction::Name),
    (FieldKey::Fiador1, Redaction::Name),
    (FieldKey::Fiador2, Redaction::Name),
    (FieldKey::Fiador3, Redaction::Name),
    (FieldKey::Fiador4, Redaction::Name),
    (FieldKey::NomeQuemRetira, Redaction::Name),
    (FieldKey::AssinanteSelecionado, Redaction::Name),
    (FieldKey::NomeGestor, Redaction::Name),
    (FieldKey::NomeVistoriador, Redaction::Name),
    // Name lists
    (FieldKey::NomeLocatario, Redaction::NameList),
    (FieldKey::NomeLocatarioFormatado, Redaction::NameList),
    (FieldKey::NomeProprietario, Redaction::NameList),
    (FieldKey::NomesResumidosLocadores, Redaction::NameList),
    (FieldKey::NomeProprietarioFormatado, Redaction::NameList),
    (FieldKey::NomeFiador, Redaction::NameList),
    (FieldKey::NomeFiadoresFormatado, Redaction::NameList),
    (FieldKey::QualificacaoCompletaLocatarios, Redaction::NameList),
    (FieldKey::QualificacaoCompletaLocadores, Redaction::NameList),
    (FieldKey::QualificacaoCompletaProprietario, Redaction::NameList),
    (FieldKey::QualificacaoCompleta, Redaction::NameList),
    // Addresses
    (FieldKey::Endereco, Redaction::Address),
    (FieldKey::EnderecoImovel, Redaction::Address),
    (FieldKey::Logradouro, Redaction::Address),
    (FieldKey::Rua, Redaction::Address),
    // Documents
    (FieldKey::CpfLocatario, Redaction::Cpf),
    (FieldKey::CpfProprietario, Redaction::Cpf),
    (FieldKey::Cpf, Redaction::Cpf),
    (FieldKey::RgLocatario, Redaction::Rg),
    (FieldKey::RgProprietario, Redaction::Rg),
    (FieldKey::Rg, Redaction::Rg),
    (FieldKey::DocumentoQuemRetira, Redaction::Document),
    // Contacts
    (FieldKey::TelefoneLocatario, Redaction::Phone),
    (FieldKey::CelularLocatario, Redaction::Phone),
    (FieldKey::TelefoneProprietario, Redaction::Phone),
    (FieldKey::CelularProprietario, Redaction::Phone),
    (FieldKey::Telefone, Redaction::Phone),
    (FieldKey::Celular, Redaction::Phone),
    (FieldKey::EmailLocatario, Redaction::Email),
    (FieldKey::EmailProprietario, Redaction::Email),
    (FieldKey::Email, Redaction::Email),
    // Prose
    (FieldKey::TextoEntregaChaves, Redaction::FreeText),
    (FieldKey::Observacao, Redaction::FreeText),
    (FieldKey::CitacaoLocatarios, Redaction::FreeText),
    (FieldKey::LocatarioTerm, Redaction::FreeText),
    (FieldKey::ProprietarioTerm, Redaction::FreeText),
    (FieldKey::SaudacaoProprietario, Redaction::FreeText),
    (FieldKey::SaudacaoLocatario, Redaction::FreeText),
];

/// The redaction rule for a field, if it carries personal data.
pub fn redaction_for(key: &FieldKey) -> Option<Redaction> {
    REDACTIONS
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|&(_, redaction)| redaction)
}

/// Return a redacted copy of `fields`.
///
/// Blank values and engine placeholders are left as they are, so
/// conditionals over optional fields behave the same before and after
/// redaction.
pub fn anonymize_fields(fields: &FieldMap) -> FieldMap {
    let replacer = NameReplacer::from_fields(fields);
    debug!(known_names = replacer.pairs.len(), "anonymizing fields");

    let mut redacted_count = 0usize;
    let out = fields
        .iter()
        .map(|(key, value)| {
            let redacted = match redaction_for(key) {
                Some(redaction) => {
                    redacted_count += 1;
                    redact_value(value, redaction, &replacer)
                }
                None => value.clone(),
            };
            (key.clone(), redacted)
        })
        .collect();

    trace!(redacted = redacted_count, "anonymization complete");
    out
}

fn redact_value(value: &FieldValue, redaction: Redaction, replacer: &NameReplacer) -> FieldValue {
    match value {
        FieldValue::Text(text) => match serialized_list(value) {
            // Keep the JSON array shape the value arrived in.
            Some(items) => FieldValue::Text(
                FieldValue::List(redact_items(&items, redaction, replacer)).to_serialized(),
            ),
            None => FieldValue::Text(redact_text(text, redaction, replacer)),
        },
        FieldValue::List(items) => FieldValue::List(redact_items(items, redaction, replacer)),
    }
}

/// Elements of a `Text` value holding a JSON array.
fn serialized_list(value: &FieldValue) -> Option<Vec<String>> {
    let text = value.as_text()?;
    if !text.trim_start().starts_with('[') {
        return None;
    }
    value.to_list()
}

fn redact_items(items: &[String], redaction: Redaction, replacer: &NameReplacer) -> Vec<String> {
    items
        .iter()
        .map(|item| redact_text(item, redaction, replacer))
        .collect()
}

fn redact_text(text: &str, redaction: Redaction, replacer: &NameReplacer) -> String {
    if text.trim().is_empty() || is_placeholder(text) {
        return text.to_string();
    }
    match redaction {
        Redaction::Name => anonymize_name(text),
        Redaction::NameList => anonymize_names_list(text),
        Redaction::Address => anonymize_address(text),
        Redaction::Cpf => anonymize_cpf(text),
        Redaction::Rg => anonymize_rg(text),
        Redaction::Document => anonymize_document(text),
        Redaction::Phone => anonymize_phone(text),
        Redaction::Email => anonymize_email(text),
        Redaction::FreeText => strip_braces(&replacer.replace(text)),
    }
}

/// Case-insensitive replacement of known party names inside prose.
///
/// Only exact spellings of names present in the input are found; nicknames,
/// abbreviations and declined forms slip through.
struct NameReplacer {
    /// `(original, redacted)`, longest original first.
    pairs: Vec<(String, String)>,
}

impl NameReplacer {
    fn from_fields(fields: &FieldMap) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut push = |original: &str, redacted: String| {
            if original != redacted && !pairs.iter().any(|(o, _)| o == original) {
                pairs.push((original.to_string(), redacted));
            }
        };

        for role in [Role::Tenant, Role::Owner, Role::Guarantor] {
            let free_text = role.free_text_keys().iter().filter_map(|key| fields.filled(key));
            for text in free_text {
                if is_placeholder(text) {
                    continue;
                }
                push(text, anonymize_names_list(text));
                for name in split_names(text) {
                    push(&name, anonymize_name(&name));
                }
            }
            for name in role.slot_keys().iter().filter_map(|key| fields.filled(key)) {
                push(name, anonymize_name(name));
            }
        }

        let listed = fields.get(FieldKey::Fiadores).and_then(FieldValue::to_list);
        for name in listed.unwrap_or_default() {
            let name = name.trim();
            if !name.is_empty() && !is_placeholder(name) {
                push(name, anonymize_name(name));
            }
        }

        pairs.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
        Self { pairs }
    }

    fn replace(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (original, redacted) in &self.pairs {
            let pattern = RegexBuilder::new(&regex::escape(original))
                .case_insensitive(true)
                .build();
            if let Ok(pattern) = pattern {
                out = replace_name(&pattern, &out, redacted);
            }
        }
        out
    }
}

/// Replace every match of `pattern`, dropping the abbreviation dot of
/// `redacted` when the text already has a period right after the name.
fn replace_name(pattern: &Regex, text: &str, redacted: &str) -> String {
    let shortened = redacted.strip_suffix('.').unwrap_or(redacted);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for found in pattern.find_iter(text) {
        out.push_str(&text[last..found.start()]);
        if text[found.end()..].starts_with('.') {
            out.push_str(shortened);
        } else {
            out.push_str(redacted);
        }
        last = found.end();
    }
    out.push_str(&text[last..]);
    out
}
