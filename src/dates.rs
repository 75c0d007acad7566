//! Brazilian date handling.
//!
//! Contract documents carry dates as `DD/MM/YYYY` strings, while some producers
//! still send ISO `YYYY-MM-DD`. Every function here is total: bad input yields a
//! documented sentinel (`None`, `0`, `false`, or the input unchanged) instead of
//! an error.

use chrono::{Datelike, Days, NaiveDate};

/// `strftime` pattern for the local date format.
pub const LOCAL_DATE_FORMAT: &str = "%d/%m/%Y";

/// Field-name fragments that mark a field as date-bearing.
pub const DEFAULT_DATE_KEYWORDS: &[&str] = &[
    "data",
    "date",
    "vencimento",
    "prazo",
    "inicio",
    "fim",
    "termino",
];

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parse a `DD/MM/YYYY` date.
///
/// Day and month may have one or two digits. The year has four digits, or a
/// sign and at least four digits for years outside `0000..=9999` (the form
/// [`format_local_date`] writes them in, e.g. `01/01/+10000`).
/// Returns `None` for malformed text, non-numeric parts, or dates that do not
/// exist in the calendar (`31/02/2024`).
pub fn parse_local_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let numeric = |part: &str, max_len: usize| {
        !part.is_empty() && part.len() <= max_len && part.chars().all(|c| c.is_ascii_digit())
    };
    if !numeric(day, 2) || !numeric(month, 2) {
        return None;
    }
    let year: i32 = match year.strip_prefix(['+', '-']) {
        Some(digits) if digits.len() >= 4 && numeric(digits, digits.len()) => year.parse().ok()?,
        None if year.len() == 4 && numeric(year, 4) => year.parse().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Format a date as `DD/MM/YYYY`.
///
/// Years outside `0000..=9999` carry a sign (`01/01/-0001`), which
/// [`parse_local_date`] reads back.
pub fn format_local_date(date: NaiveDate) -> String {
    date.format(LOCAL_DATE_FORMAT).to_string()
}

/// Format an optional date; `None` formats as the empty string.
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_local_date).unwrap_or_default()
}

/// Bring a date value into `DD/MM/YYYY`.
///
/// ISO dates (`2024-03-15`, optionally followed by a `T` or space and a time)
/// are converted. Values already in the local format, and anything that is
/// not a recognisable date, come back unchanged.
pub fn to_local_date_format(value: &str) -> String {
    let trimmed = value.trim();
    if parse_local_date(trimmed).is_some() {
        return value.to_string();
    }

    let iso = match trimmed.get(..10) {
        Some(head) if matches!(trimmed[10..].chars().next(), None | Some('T') | Some(' ')) => head,
        _ => return value.to_string(),
    };

    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => format_local_date(date),
        Err(_) => value.to_string(),
    }
}

/// Check whether a field name looks date-bearing.
///
/// The match is a case-insensitive substring test against `keywords`.
pub fn is_date_like_field<S: AsRef<str>>(name: &str, keywords: &[S]) -> bool {
    let lower = name.to_lowercase();
    keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !k.is_empty())
        .any(|k| lower.contains(&k.to_lowercase()))
}

/// Number of days from `from` to `to` (negative when `to` is earlier).
///
/// Returns `0` if either date is unparseable.
pub fn days_between(from: &str, to: &str) -> i64 {
    match (parse_local_date(from), parse_local_date(to)) {
        (Some(a), Some(b)) => (b - a).num_days(),
        _ => 0,
    }
}

/// Whether the date lies strictly before `today`. Unparseable → `false`.
pub fn is_past(text: &str, today: NaiveDate) -> bool {
    parse_local_date(text).is_some_and(|date| date < today)
}

/// Whether the date falls within `[today, today + days]`. Unparseable → `false`.
pub fn is_within_days(text: &str, days: u64, today: NaiveDate) -> bool {
    let Some(date) = parse_local_date(text) else {
        return false;
    };
    let Some(limit) = today.checked_add_days(Days::new(days)) else {
        return false;
    };
    date >= today && date <= limit
}

/// Add `days` (possibly negative) to a `DD/MM/YYYY` date.
///
/// The input is returned unchanged if it does not parse or the result would
/// fall outside the supported calendar range.
pub fn add_days(text: &str, days: i64) -> String {
    let Some(date) = parse_local_date(text) else {
        return text.to_string();
    };

    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    shifted.map(format_local_date).unwrap_or_else(|| text.to_string())
}

/// Portuguese name of a month (1-based). Out-of-range months give `""`.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// The two months before `today` plus the current one, e.g.
/// `"janeiro, fevereiro, março de 2024"`.
///
/// The year is always the year of `today`, matching how proof-of-payment
/// requests are phrased in the notices.
pub fn last_three_months(today: NaiveDate) -> String {
    let current = today.month0() as i32;
    let names: Vec<&str> = (0..3)
        .rev()
        .map(|back| MONTH_NAMES[(current - back).rem_euclid(12) as usize])
        .collect();
    format!("{} de {}", names.join(", "), today.year())
}

/// `"bom dia"` before noon, `"boa tarde"` afterwards.
pub fn business_greeting(hour: u32) -> &'static str {
    if hour < 12 { "bom dia" } else { "boa tarde" }
}
