//! Number formatting for display

use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for values upstream did not provide
pub const NOT_AVAILABLE: &str = "n/a";

/// Fixed number of decimal places, half-way cases rounded away from zero
pub fn fixed(value: Decimal, decimals: usize) -> String {
    let rounded =
        value.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1$}", rounded, decimals)
}

/// Whole number with thousands separators
pub fn grouped(value: Decimal) -> String {
    let rounded = value.round().to_string();
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    format!("{}{}", sign, out)
}

/// Format an optional value, falling back to [`NOT_AVAILABLE`]
pub fn or_na(value: Option<Decimal>, f: impl FnOnce(Decimal) -> String) -> String {
    value.map(f).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Dollar amount, or [`NOT_AVAILABLE`] without a currency sign
pub fn dollars(value: Option<Decimal>, f: impl FnOnce(Decimal) -> String) -> String {
    or_na(value, |v| format!("${}", f(v)))
}

/// Percentage with `decimals` places, or [`NOT_AVAILABLE`] without a `%`
pub fn percent(value: Option<Decimal>, decimals: usize) -> String {
    or_na(value, |v| format!("{}%", fixed(v, decimals)))
}
