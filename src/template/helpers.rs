//! Brazilian number and currency formatting.
//!
//! Values are exact decimals; rounding is half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Fraction digits kept by the `number` helper.
const MAX_NUMBER_FRACTION_DIGITS: usize = 3;

/// Parse a number written in pt-BR or plain decimal notation.
///
/// Accepts `1234.5`, `1.234,50`, `R$ 1.234,50`, `1234,5` and `-12`. When
/// both separators appear the last one is the decimal separator; a lone
/// separator is decimal unless it repeats (`1.234.567`).
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let last_comma = cleaned.rfind(',');
    let last_dot = cleaned.rfind('.');
    let normalized = match (last_comma, last_dot) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) if cleaned.matches(',').count() == 1 => cleaned.replace(',', "."),
        (Some(_), None) => cleaned.replace(',', ""),
        (None, Some(_)) if cleaned.matches('.').count() > 1 => cleaned.replace('.', ""),
        _ => cleaned,
    };

    Decimal::from_str(&normalized).ok()
}

/// Format with `.` grouping and `,` decimals, keeping between
/// `min_fraction` and `max_fraction` fraction digits.
pub fn format_grouped(value: Decimal, min_fraction: usize, max_fraction: usize) -> String {
    let rounded = value
        .abs()
        .round_dp_with_strategy(max_fraction as u32, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut fraction = fraction.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }
    while fraction.len() < min_fraction {
        fraction.push('0');
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{fraction}")
    }
}

/// `R$ 1.234,56`. The sign goes before the symbol.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let amount = format_grouped(value, 2, 2);
    match amount.strip_prefix('-') {
        Some(positive) => format!("-{symbol} {positive}"),
        None => format!("{symbol} {amount}"),
    }
}

/// pt-BR grouping with up to three fraction digits.
pub fn format_number(value: Decimal) -> String {
    format_grouped(value, 0, MAX_NUMBER_FRACTION_DIGITS)
}
