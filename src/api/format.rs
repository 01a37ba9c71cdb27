//! Presentation formatting for API responses.
//!
//! The query core hands rows back as raw JSON; these helpers turn the
//! stored shapes (minor-unit-free dollar amounts, JSON-encoded name lists)
//! into display strings. Anything unformattable becomes JSON null rather
//! than an error.

use serde_json::Value as JsonValue;

/// Render a numeric value as a US-dollar string ("$1,234,567.00").
/// Accepts numbers and numeric strings; everything else is null.
pub fn format_dollars(value: &JsonValue) -> JsonValue {
    let amount = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) if amount.is_finite() => JsonValue::String(dollars(amount)),
        _ => JsonValue::Null,
    }
}

/// Flatten a stored name list into "A, B, C".
///
/// The column holds either a JSON array (of strings or `{name}` objects) or
/// a plain delimited string. Arrays are flattened to their names; a string
/// that is not JSON passes through untouched; anything else is null.
pub fn format_name_list(value: &JsonValue) -> JsonValue {
    let JsonValue::String(raw) = value else {
        return JsonValue::Null;
    };

    match serde_json::from_str::<JsonValue>(raw) {
        Ok(JsonValue::Array(items)) => {
            let names: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    JsonValue::String(s) => Some(s.as_str()),
                    JsonValue::Object(object) => object.get("name").and_then(JsonValue::as_str),
                    _ => None,
                })
                .collect();

            if names.is_empty() {
                JsonValue::Null
            } else {
                JsonValue::String(names.join(", "))
            }
        }
        Ok(_) => JsonValue::Null,
        Err(_) => JsonValue::String(raw.clone()),
    }
}

/// Render an average rating with two decimals; null stays null.
pub fn format_rating(value: &JsonValue) -> JsonValue {
    value
        .as_f64()
        .map_or(JsonValue::Null, |avg| JsonValue::String(format!("{avg:.2}")))
}

fn dollars(amount: f64) -> String {
    let negative = amount < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let digits = whole.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}
