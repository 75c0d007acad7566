//! Personal-data redaction.
//!
//! [`anonymize_fields`] returns a copy of a field dictionary with names,
//! addresses, documents and contacts reduced to non-identifying forms, for
//! screen recordings and demos. The input is never modified.
//!
//! Redaction is field-driven: [`REDACTIONS`] maps each sensitive field to a
//! rule. Fields outside the table pass through unchanged. Prose fields get a
//! best-effort pass that replaces the party names found elsewhere in the
//! dictionary.

mod rules;
mod transform;

#[cfg(test)]
mod tests;

pub use rules::{
    ADDRESS_MISSING, CITY_UNKNOWN, CPF_INVALID, CPF_MISSING, EMAIL_INVALID, EMAIL_MISSING,
    NAME_MISSING, NAMES_MISSING, PHONE_INVALID, PHONE_MISSING, RG_INVALID, RG_MISSING,
    anonymize_address, anonymize_cpf, anonymize_document, anonymize_email, anonymize_name,
    anonymize_names_list, anonymize_phone, anonymize_rg, is_placeholder,
};
pub use transform::{REDACTIONS, Redaction, anonymize_fields, redaction_for};
