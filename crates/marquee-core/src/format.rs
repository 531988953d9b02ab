//! Number and currency formatting shared by every surface

use num_format::{Locale, ToFormattedString};

/// Format a number with comma thousands separators.
///
/// Fractions keep up to three digits with trailing zeros dropped, so
/// `1234567.0` renders as `1,234,567` and `1234.5` as `1,234.5`.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    match int_part.parse::<u128>() {
        Ok(whole) => out.push_str(&whole.to_formatted_string(&Locale::en)),
        Err(_) => out.push_str(int_part),
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format an integer count with thousands separators.
pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

/// `$` followed by the thousands-separated amount.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_thousands(value))
}

/// Currency for an optional box office value; absent renders as `$0`.
pub fn format_box_office(value: Option<f64>) -> String {
    format_currency(value.unwrap_or(0.0))
}

/// Compact currency for narrow chart axes: `$2.9B`, `$467.2M`, `$12.5K`.
pub fn format_compact_currency(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        return format_currency(value.round());
    };
    format!("${:.1}{}", scaled, suffix)
}
