use super::ApiError;

/// Resolve a requested `fields` projection against an endpoint's allow-list.
///
/// Absent or all-blank input selects the whole allow-list in its declared
/// order. Unknown fields are rejected here, before they reach the query
/// core, which treats its projection input as already validated.
pub fn parse_fields(raw: Option<&str>, allowed: &[&str]) -> Result<Vec<String>, ApiError> {
    let Some(raw) = raw else {
        return Ok(allowed.iter().map(ToString::to_string).collect());
    };

    let mut selected = Vec::new();
    for field in raw.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        if !allowed.contains(&field) {
            return Err(ApiError::validation(format!("Unknown field: {field}")));
        }
        selected.push(field.to_string());
    }

    if selected.is_empty() {
        return Ok(allowed.iter().map(ToString::to_string).collect());
    }

    Ok(selected)
}
