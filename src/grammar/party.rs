//! Party descriptors: who holds a role and how to address them.

use super::agreement::{Agreement, FIADOR, GenderMarker, LOCADOR, LOCATARIO, Noun};
use crate::fields::{FieldKey, FieldMap, FieldValue};
use crate::names::{capitalize_first, first_name, join_names, split_names};

/// Contract role a party plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Tenant,
    Guarantor,
}

impl Role {
    /// Discrete name slots, in order.
    pub fn slot_keys(self) -> &'static [FieldKey] {
        match self {
            Role::Owner => &[],
            Role::Tenant => &[
                FieldKey::PrimeiroLocatario,
                FieldKey::SegundoLocatario,
                FieldKey::TerceiroLocatario,
                FieldKey::QuartoLocatario,
            ],
            Role::Guarantor => &[
                FieldKey::PrimeiroFiador,
                FieldKey::SegundoFiador,
                FieldKey::TerceiroFiador,
                FieldKey::QuartoFiador,
            ],
        }
    }

    /// Free-text name fields, by priority.
    pub fn free_text_keys(self) -> &'static [FieldKey] {
        match self {
            Role::Owner => &[FieldKey::NomesResumidosLocadores, FieldKey::NomeProprietario],
            Role::Tenant => &[FieldKey::NomeLocatario],
            Role::Guarantor => &[FieldKey::NomeFiador],
        }
    }

    pub fn gender_key(self) -> FieldKey {
        match self {
            Role::Owner => FieldKey::GeneroProprietario,
            Role::Tenant => FieldKey::GeneroLocatario,
            Role::Guarantor => FieldKey::GeneroFiador,
        }
    }

    /// The legal noun for the role.
    pub fn noun(self) -> Noun {
        match self {
            Role::Owner => LOCADOR,
            Role::Tenant => LOCATARIO,
            Role::Guarantor => FIADOR,
        }
    }
}

/// Where a party's names were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Slots,
    FreeText,
    /// An incoming `fiadores` list.
    List,
    Missing,
}

/// The people sharing a role, with their resolved agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub role: Role,
    pub names: Vec<String>,
    pub source: NameSource,
    pub marker: Option<GenderMarker>,
    pub agreement: Agreement,
}

impl Party {
    /// Read a party from raw fields.
    ///
    /// Filled slots win over the free-text field; the free-text field is only
    /// split when every slot is empty. Guarantors fall back to an incoming
    /// `fiadores` list last, and have no names at all when `temFiador` is
    /// present and not `sim`.
    pub fn from_fields(role: Role, fields: &FieldMap) -> Self {
        let (names, source) = if role == Role::Guarantor && !has_guarantor(fields) {
            (Vec::new(), NameSource::Missing)
        } else {
            read_names(role, fields)
        };

        let marker = fields.text(role.gender_key()).and_then(GenderMarker::parse);
        let agreement = Agreement::resolve(marker, names.len() > 1);

        Self {
            role,
            names,
            source,
            marker,
            agreement,
        }
    }

    pub fn is_plural(&self) -> bool {
        self.agreement.is_plural()
    }

    pub fn noun(&self) -> Noun {
        self.role.noun()
    }

    /// Capitalized first given name of every party member.
    pub fn first_names(&self) -> Vec<String> {
        self.names
            .iter()
            .filter_map(|name| first_name(name))
            .map(capitalize_first)
            .collect()
    }

    /// First names joined with the list rule, or `placeholder` when none.
    pub fn first_names_joined(&self, placeholder: &str) -> String {
        let first_names = self.first_names();
        if first_names.is_empty() {
            placeholder.to_string()
        } else {
            join_names(&first_names)
        }
    }

    /// Salutation such as `Prezadas Ana e Beatriz`.
    pub fn greeting(&self, placeholder: &str) -> String {
        format!("{} {}", self.agreement.dear(), self.first_names_joined(placeholder))
    }
}

/// `temFiador` gates guarantors only when it is filled.
fn has_guarantor(fields: &FieldMap) -> bool {
    fields
        .filled(FieldKey::TemFiador)
        .is_none_or(|flag| flag.eq_ignore_ascii_case("sim"))
}

fn read_names(role: Role, fields: &FieldMap) -> (Vec<String>, NameSource) {
    let slots: Vec<String> = role
        .slot_keys()
        .iter()
        .filter_map(|key| fields.filled(key))
        .map(str::to_string)
        .collect();
    if !slots.is_empty() {
        return (slots, NameSource::Slots);
    }

    let free_text = role
        .free_text_keys()
        .iter()
        .find_map(|key| fields.filled(key))
        .map(split_names)
        .unwrap_or_default();
    if !free_text.is_empty() {
        return (free_text, NameSource::FreeText);
    }

    if role == Role::Guarantor {
        let listed = list_names(fields, FieldKey::Fiadores);
        if !listed.is_empty() {
            return (listed, NameSource::List);
        }
    }

    (Vec::new(), NameSource::Missing)
}

/// Non-blank entries of a list field, whether sent as a list or as a JSON
/// array string.
fn list_names(fields: &FieldMap, key: FieldKey) -> Vec<String> {
    fields
        .get(key)
        .and_then(FieldValue::to_list)
        .unwrap_or_default()
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
