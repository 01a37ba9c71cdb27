use serde::Serialize;
use serde_json::Value as JsonValue;

/// Structured filter/sort/select intent for a `find_all` call.
///
/// Conditions are ordered `(field, value)` tuples rather than a map, so the
/// compiled predicate reproduces the order they were added in. Values never
/// reach the SQL text; the clause builder turns them into bound parameters.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Equality conditions. JSON nulls are elided at compile time, which
    /// turns "filter on an absent value" into "no filter on that field".
    pub eq: Vec<(String, JsonValue)>,

    /// LIKE pattern conditions. Empty patterns are elided.
    pub like: Vec<(String, String)>,

    /// Sort pairs, applied in order. The direction string is emitted
    /// upper-cased as given, not validated against an enum.
    pub order: Vec<(String, String)>,

    /// Projection. Empty means all columns.
    pub select: Vec<String>,
}

impl FilterSpec {
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.eq.push((field.into(), value.into()));
        self
    }

    #[must_use]
    pub fn like(mut self, field: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.like.push((field.into(), pattern.into()));
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.order.push((field.into(), direction.into()));
        self
    }

    #[must_use]
    pub fn select(mut self, fields: &[String]) -> Self {
        self.select = fields.to_vec();
        self
    }
}

/// One windowed slice of a filtered result set.
///
/// `total` counts the whole filtered set before pagination, independent of
/// `page`/`limit`. Both are echoed back exactly as requested.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
