//! Indian-rupee display formatting

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

/// Value in crore, e.g. `₹17.25 Cr`
#[must_use]
pub fn crore(value: f64) -> String {
    format!("₹{:.2} Cr", value / CRORE)
}

/// Value in lakh, e.g. `₹45.00 L`
#[must_use]
pub fn lakh(value: f64) -> String {
    format!("₹{:.2} L", value / LAKH)
}

/// Largest fitting unit: crore from 1 Cr, lakh from 1 L, else grouped rupees
#[must_use]
pub fn compact(value: f64) -> String {
    if value.abs() >= CRORE {
        crore(value)
    } else if value.abs() >= LAKH {
        lakh(value)
    } else {
        format!("₹{}", grouped(value))
    }
}

/// Thousands-grouped number with up to three decimals, e.g. `139,230`
#[must_use]
pub fn grouped(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let text = format!("{:.3}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    out.push_str(sign);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Percentage with fixed decimals, e.g. `86.2%`
#[must_use]
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Share of `part` in `whole` as a percentage, zero for an empty whole
#[inline]
#[must_use]
pub fn share(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}
