//! Per-value redaction rules.
//!
//! Every rule is total: empty input yields a `[… NÃO INFORMADO]` marker and
//! unusable input yields a `[… INVÁLIDO]` marker.

use crate::names::{join_names, split_names};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_MISSING: &str = "[NOME NÃO INFORMADO]";
pub const NAMES_MISSING: &str = "[NOMES NÃO INFORMADOS]";
pub const ADDRESS_MISSING: &str = "[ENDEREÇO NÃO INFORMADO]";
pub const CITY_UNKNOWN: &str = "[CIDADE]";
pub const CPF_MISSING: &str = "[CPF NÃO INFORMADO]";
pub const CPF_INVALID: &str = "[CPF INVÁLIDO]";
pub const RG_MISSING: &str = "[RG NÃO INFORMADO]";
pub const RG_INVALID: &str = "[RG INVÁLIDO]";
pub const PHONE_MISSING: &str = "[TELEFONE NÃO INFORMADO]";
pub const PHONE_INVALID: &str = "[TELEFONE INVÁLIDO]";
pub const EMAIL_MISSING: &str = "[EMAIL NÃO INFORMADO]";
pub const EMAIL_INVALID: &str = "[EMAIL INVÁLIDO]";

const CPF_DIGITS: usize = 11;
const RG_DIGITS: std::ops::RangeInclusive<usize> = 5..=12;
const MIN_PHONE_DIGITS: usize = 8;

/// `City - UF`, e.g. `São Paulo - SP` or `Campinas – sp`.
static CITY_STATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{L}[\p{L} ]*?)\s*[-–]\s*(\p{L}{2})\b").expect("valid city/state pattern")
});

/// Whether a value is an engine placeholder such as `[NOME DO LOCATÁRIO]`.
///
/// Only the engine's own shape counts: upper-case words, spaces, digits,
/// `/` and `_` between brackets. A JSON array such as `["Ana Souza"]` is
/// not a placeholder.
///
/// ```
/// use minuta::anonymize::is_placeholder;
///
/// assert!(is_placeholder("[CPFL/DAEV]"));
/// assert!(!is_placeholder(r#"["Carlos Lima"]"#));
/// ```
pub fn is_placeholder(value: &str) -> bool {
    let Some(inner) = value
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };
    inner.chars().any(char::is_uppercase)
        && inner.chars().all(|c| {
            c.is_uppercase() || c.is_ascii_digit() || matches!(c, ' ' | '/' | '_')
        })
}

/// Remove directive braces so redacted text can never become template syntax.
pub fn strip_braces(value: &str) -> String {
    value.replace(['{', '}'], "")
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn last_two(digits: &str) -> &str {
    &digits[digits.len().saturating_sub(2)..]
}

/// `"Carlos Eduardo Souza"` → `"Carlos S."`; a single word is kept.
///
/// ```
/// use minuta::anonymize::anonymize_name;
///
/// assert_eq!(anonymize_name("Carlos Eduardo Souza"), "Carlos S.");
/// assert_eq!(anonymize_name("Madonna"), "Madonna");
/// ```
pub fn anonymize_name(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    let redacted = match parts.as_slice() {
        [] => return NAME_MISSING.to_string(),
        [only] => only.to_string(),
        [first, .., last] => {
            let initial: String = last.chars().take(1).flat_map(char::to_uppercase).collect();
            format!("{first} {initial}.")
        }
    };
    strip_braces(&redacted)
}

/// Redact every name of a list, keeping emphasis markup and the join rule.
pub fn anonymize_names_list(names: &str) -> String {
    let entries = split_names(names);
    if entries.is_empty() {
        return NAMES_MISSING.to_string();
    }
    let redacted: Vec<String> = entries.iter().map(|entry| redact_list_entry(entry)).collect();
    strip_braces(&join_names(&redacted))
}

fn redact_list_entry(entry: &str) -> String {
    match split_emphasis(entry) {
        Some((tag, inner)) => format!("<{tag}>{}</{tag}>", redact_list_entry(inner)),
        None if is_placeholder(entry) => entry.to_string(),
        None => anonymize_name(entry),
    }
}

/// Split `<tag>inner</tag>` into its tag and inner text.
fn split_emphasis(entry: &str) -> Option<(&str, &str)> {
    let rest = entry.strip_prefix('<')?;
    let (tag, rest) = rest.split_once('>')?;
    if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let inner = rest.strip_suffix('>')?.strip_suffix(tag)?.strip_suffix("</")?;
    Some((tag, inner))
}

/// Reduce an address to `City - UF`.
///
/// ```
/// use minuta::anonymize::anonymize_address;
///
/// assert_eq!(
///     anonymize_address("Rua das Flores, 123, Centro, São Paulo - SP"),
///     "São Paulo - SP"
/// );
/// ```
pub fn anonymize_address(address: &str) -> String {
    let address = address.trim();
    if address.is_empty() {
        return ADDRESS_MISSING.to_string();
    }

    let segments: Vec<&str> = address.split(',').map(str::trim).collect();
    let last = segments.last().copied().unwrap_or(address);

    let city_state = CITY_STATE
        .captures(last)
        .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0 && m.end() == last.len()))
        .or_else(|| CITY_STATE.captures(address));
    if let Some(caps) = city_state {
        let city = caps.get(1).map_or("", |m| m.as_str().trim());
        let state = caps.get(2).map_or(String::new(), |m| m.as_str().to_uppercase());
        return strip_braces(&format!("{city} - {state}"));
    }

    let alphabetic = last.chars().next().is_some_and(char::is_alphabetic)
        && !last.chars().any(|c| c.is_ascii_digit());
    if segments.len() > 1 && alphabetic {
        return strip_braces(last);
    }

    CITY_UNKNOWN.to_string()
}

/// Mask a CPF, keeping its last two digits.
///
/// ```
/// use minuta::anonymize::anonymize_cpf;
///
/// assert_eq!(anonymize_cpf("123.456.789-09"), "***.***.***-09");
/// assert_eq!(anonymize_cpf("123.456"), "[CPF INVÁLIDO]");
/// ```
pub fn anonymize_cpf(cpf: &str) -> String {
    if cpf.trim().is_empty() {
        return CPF_MISSING.to_string();
    }
    let digits = digits(cpf);
    if digits.len() != CPF_DIGITS {
        return CPF_INVALID.to_string();
    }
    format!("***.***.***-{}", last_two(&digits))
}

/// Mask an RG, keeping its last two digits.
pub fn anonymize_rg(rg: &str) -> String {
    if rg.trim().is_empty() {
        return RG_MISSING.to_string();
    }
    let digits = digits(rg);
    if !RG_DIGITS.contains(&digits.len()) {
        return RG_INVALID.to_string();
    }
    format!("***.***-{}", last_two(&digits))
}

/// A document that may be either a CPF or an RG.
pub fn anonymize_document(document: &str) -> String {
    if digits(document).len() == CPF_DIGITS {
        anonymize_cpf(document)
    } else {
        anonymize_rg(document)
    }
}

pub fn anonymize_phone(phone: &str) -> String {
    if phone.trim().is_empty() {
        return PHONE_MISSING.to_string();
    }
    let digits = digits(phone);
    if digits.len() < MIN_PHONE_DIGITS {
        return PHONE_INVALID.to_string();
    }
    format!("(**) *****-{}", last_two(&digits))
}

/// Keep the first character of the local part and the domain.
pub fn anonymize_email(email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        return EMAIL_MISSING.to_string();
    }
    let Some((local, domain)) = email.split_once('@') else {
        return EMAIL_INVALID.to_string();
    };
    if domain.is_empty() {
        return EMAIL_INVALID.to_string();
    }
    let first = local.chars().next().unwrap_or('*');
    strip_braces(&format!("{first}***@{domain}"))
}
