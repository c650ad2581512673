//! Indian-locale number formatting
//!
//! Digits are grouped as thousands first, then in pairs: `12,34,56,789`.

/// Insert Indian grouping separators into a run of ASCII digits
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        grouped.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            grouped.push(',');
        }
        grouped.extend(pair.iter().map(|&b| char::from(b)));
    }
    grouped.push(',');
    grouped.push_str(last_three);
    grouped
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" }.to_string())
    } else {
        None
    }
}

/// `-` for values that stay negative after rounding, so `-0.4` prints as zero
fn sign(value: f64, rounded: &str) -> &'static str {
    if value < 0.0 && rounded.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    }
}

/// Format a rupee amount with no fractional digits, e.g. `₹1,06,05,000` or `-₹2,500`.
/// Halves round away from zero.
pub fn format_inr(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }
    let rounded = format!("{:.0}", value.abs().round());
    format!("{}₹{}", sign(value, &rounded), group_indian(&rounded))
}

/// Format a plain number with Indian grouping and at most two fractional digits
pub fn format_number(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text;
    }
    let rounded = format!("{:.2}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let fraction = fraction.trim_end_matches('0');

    let mut text = String::from(sign(value, &rounded));
    text.push_str(&group_indian(whole));
    if !fraction.is_empty() {
        text.push('.');
        text.push_str(fraction);
    }
    text
}

/// Format a value in the given unit: rupees for `INR`, a grouped number otherwise
pub fn format_with_unit(value: f64, unit: &str) -> String {
    match unit {
        "INR" => format_inr(value),
        "" => format_number(value),
        _ => format!("{} {unit}", format_number(value)),
    }
}

/// Format a percentage with two decimals
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}
