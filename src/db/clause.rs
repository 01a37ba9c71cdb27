//! Pure predicate and sort-fragment compilation.
//!
//! Structured filter intent comes in as ordered `(field, value)` tuples and
//! leaves as a SQL fragment plus a parallel list of bound values. Values are
//! never interpolated into the fragment; every condition emits a positional
//! `?` placeholder and pushes its value onto the parameter list. That is the
//! safety invariant the rest of the query engine builds on.

use sea_orm::Value;
use serde_json::Value as JsonValue;

/// A compiled `WHERE` fragment and its bound values, placeholder-aligned
/// left to right.
#[derive(Debug, Clone)]
pub struct WhereClause {
    pub clause: String,
    pub params: Vec<Value>,
}

enum Op {
    Eq,
    Like,
}

/// Compile equality and pattern conditions into one AND-joined predicate.
///
/// Equality conditions whose value is a JSON null (or not a scalar) are
/// elided rather than compiled, as are empty patterns. Equality conditions
/// precede pattern conditions, each group keeping its input order. No
/// surviving conditions yields an empty clause and an empty parameter list.
#[must_use]
pub fn build_where_clause(eq: &[(String, JsonValue)], like: &[(String, String)]) -> WhereClause {
    let mut conditions: Vec<(&str, Op, Value)> = Vec::new();

    for (field, value) in eq {
        if let Some(bound) = bind_scalar(value) {
            conditions.push((field.as_str(), Op::Eq, bound));
        }
    }

    for (field, pattern) in like {
        if !pattern.is_empty() {
            conditions.push((field.as_str(), Op::Like, pattern.clone().into()));
        }
    }

    if conditions.is_empty() {
        return WhereClause {
            clause: String::new(),
            params: Vec::new(),
        };
    }

    let mut parts = Vec::with_capacity(conditions.len());
    let mut params = Vec::with_capacity(conditions.len());
    for (field, op, value) in conditions {
        match op {
            Op::Eq => parts.push(format!("{field} = ?")),
            Op::Like => parts.push(format!("{field} LIKE ?")),
        }
        params.push(value);
    }

    WhereClause {
        clause: format!("WHERE {}", parts.join(" AND ")),
        params,
    }
}

/// Compile sort pairs into an `ORDER BY` fragment, fields in input order.
///
/// The direction token is upper-cased and emitted as given. Callers supply
/// directions from their own constants; this function does not tighten them.
#[must_use]
pub fn build_order_clause(order: &[(String, String)]) -> String {
    if order.is_empty() {
        return String::new();
    }

    let parts: Vec<String> = order
        .iter()
        .map(|(field, direction)| format!("{field} {}", direction.to_uppercase()))
        .collect();

    format!("ORDER BY {}", parts.join(", "))
}

fn bind_scalar(value: &JsonValue) -> Option<Value> {
    match value {
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
        JsonValue::Bool(b) => Some((*b).into()),
        JsonValue::Number(n) => n
            .as_i64()
            .map(Value::from)
            .or_else(|| n.as_f64().map(Value::from)),
        JsonValue::String(s) => Some(s.clone().into()),
    }
}
