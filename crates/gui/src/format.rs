//! Human-readable scalar and tuple formatting

use shared::Components;

use crate::i18n::{lang, separators_for, Lang};

/// Maximum number of fraction digits shown for a scalar
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Format a scalar in the current language
pub fn format_scalar(value: f64) -> String {
    format_scalar_for(value, lang())
}

/// Format a scalar with at most two fraction digits, trailing zeros trimmed,
/// thousands grouped using the separators of `l`.
pub fn format_scalar_for(value: f64, l: Lang) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (decimal, grouping) = separators_for(l);

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let is_zero = int_part.chars().all(|c| c == '0') && frac.is_empty();
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if !frac.is_empty() {
        out.push(decimal);
        out.push_str(frac);
    }
    out
}

/// `(i, j)` or `(i, j, k)` in the current language
pub fn format_components(components: &Components) -> String {
    format_components_for(components, lang())
}

pub fn format_components_for(components: &Components, l: Lang) -> String {
    let parts: Vec<String> = components
        .to_vec()
        .into_iter()
        .map(|v| format_scalar_for(v, l))
        .collect();
    format!("({})", parts.join(", "))
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
