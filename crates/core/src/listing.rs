//! The shared list-query contract consumed by every list endpoint.
//!
//! Admin clients send three JSON-encoded query parameters:
//! `range=[start,end]`, `sort=[field,"ASC"|"DESC"]` and
//! `filter={field: value, ...}`. This module resolves those untrusted
//! strings into a normalized [`ListQuery`] against a per-resource
//! [`ResourcePolicy`], and formats the `Content-Range`-style response
//! header once the store has produced a total count.
//!
//! Resolution is pure and deterministic; rendering the filter clauses into
//! SQL lives in `portal-db`. Field and sort identifiers that reach the
//! store come exclusively from the policy's field table, never from raw
//! client input.

use serde_json::Value;

/// Window size used when a request carries no `range` parameter.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// `range_end` used by the [`DefaultWindow::All`] policy when no explicit
/// range is requested. Kept one below `i64::MAX` so the inclusive window
/// arithmetic cannot overflow.
const UNBOUNDED_END: i64 = i64::MAX - 1;

/// Sort field applied when a request carries no `sort` parameter.
const DEFAULT_SORT_FIELD: &str = "createdAt";

// ---------------------------------------------------------------------------
// Resource policies
// ---------------------------------------------------------------------------

/// Storage type of a filterable/sortable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Timestamp,
}

/// One client-visible field: its query-parameter name, the store column it
/// resolves to, and the column's kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn text(name: &'static str, column: &'static str) -> Self {
        Self { name, column, kind: FieldKind::Text }
    }

    pub const fn integer(name: &'static str, column: &'static str) -> Self {
        Self { name, column, kind: FieldKind::Integer }
    }

    pub const fn float(name: &'static str, column: &'static str) -> Self {
        Self { name, column, kind: FieldKind::Float }
    }

    pub const fn boolean(name: &'static str, column: &'static str) -> Self {
        Self { name, column, kind: FieldKind::Boolean }
    }

    pub const fn timestamp(name: &'static str, column: &'static str) -> Self {
        Self { name, column, kind: FieldKind::Timestamp }
    }
}

/// Window applied when a request does not specify `range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultWindow {
    /// Serve the first `n` rows.
    Page(i64),
    /// Serve every matching row. Must be opted into explicitly per
    /// resource; reference-data endpoints (the region maps) use it so
    /// their clients never paginate.
    All,
}

/// Per-resource listing policy: the resource name used in the
/// `Content-Range` header, the table of permitted fields, and the default
/// window. Declared as a `const` next to each repository.
#[derive(Debug, Clone, Copy)]
pub struct ResourcePolicy {
    pub resource: &'static str,
    pub fields: &'static [FieldDef],
    pub default_window: DefaultWindow,
}

impl ResourcePolicy {
    pub const fn new(resource: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { resource, fields, default_window: DefaultWindow::Page(DEFAULT_PAGE_SIZE) }
    }

    /// Policy variant whose default (rangeless) request returns all rows.
    pub const fn serving_all(resource: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { resource, fields, default_window: DefaultWindow::All }
    }

    fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

/// A list-query parameter that could not be resolved. Always a client
/// error; the API layer maps every variant to HTTP 400. Each message names
/// the offending parameter so clients can tell which of the three inputs
/// to fix.
#[derive(Debug, thiserror::Error)]
pub enum QueryRejection {
    #[error("malformed `range` parameter: expected JSON `[start, end]`")]
    MalformedRange,

    #[error("malformed `sort` parameter: expected JSON `[field, \"ASC\"|\"DESC\"]`")]
    MalformedSort,

    #[error("malformed `filter` parameter: expected a JSON object of field/value pairs")]
    MalformedFilter,

    #[error("invalid `range` parameter: [{start}, {end}] is not a valid window")]
    InvalidRange { start: i64, end: i64 },

    #[error("invalid `sort` parameter: unknown sort order {0:?}")]
    InvalidSortOrder(String),

    #[error("unknown sort field {field:?} for resource {resource:?}")]
    UnknownSortField { resource: &'static str, field: String },

    #[error("unknown filter field {field:?} for resource {resource:?}")]
    UnknownFilterField { resource: &'static str, field: String },

    #[error("invalid `filter` value for field {field:?}: {detail}")]
    InvalidFilterValue { field: String, detail: &'static str },
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Sort direction, normalized from case-insensitive client input. Words
/// other than `asc`/`desc` are rejected rather than forwarded to the
/// store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// SQL keyword for the direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Filter values and clauses
// ---------------------------------------------------------------------------

/// Raw filter-value shape, classified exactly once when the filter JSON is
/// decoded. The three-way branch mirrors what admin clients send: an array
/// asks for membership, a string asks for a case-insensitive substring
/// match, anything else asks for exact equality.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Many(Vec<Value>),
    Text(String),
    Scalar(Value),
}

impl FilterValue {
    fn classify(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Many(items),
            Value::String(s) => Self::Text(s),
            other => Self::Scalar(other),
        }
    }
}

/// Backend-agnostic comparison, fully typed against the field's kind so
/// the store layer binds parameters without re-inspecting JSON shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    /// `field ∈ set` over text values.
    InText(Vec<String>),
    /// `field ∈ set` over integer values.
    InInt(Vec<i64>),
    /// Case-insensitive substring containment.
    Contains(String),
    EqText(String),
    EqInt(i64),
    EqFloat(f64),
    EqBool(bool),
    IsNull,
}

/// One resolved filter: a validated store column plus the comparison to
/// apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub column: &'static str,
    pub op: FilterOp,
}

fn int_element(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        // Admin clients serialize ids as strings in some membership
        // requests; accept the numeric form of either.
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Refine a classified filter value into a typed comparison for `field`.
fn clause_for(field: &FieldDef, value: FilterValue) -> Result<FilterClause, QueryRejection> {
    let invalid = |detail: &'static str| QueryRejection::InvalidFilterValue {
        field: field.name.to_string(),
        detail,
    };

    let op = match value {
        FilterValue::Many(items) => match field.kind {
            FieldKind::Integer => {
                let values = items
                    .iter()
                    .map(int_element)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| invalid("expected an array of integers"))?;
                FilterOp::InInt(values)
            }
            FieldKind::Text => {
                let values = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| invalid("expected an array of strings"))?;
                FilterOp::InText(values)
            }
            _ => return Err(invalid("membership filters apply to text and integer fields only")),
        },
        FilterValue::Text(s) => match field.kind {
            FieldKind::Text => FilterOp::Contains(s),
            FieldKind::Integer => {
                FilterOp::EqInt(s.parse().map_err(|_| invalid("expected an integer"))?)
            }
            FieldKind::Float => {
                FilterOp::EqFloat(s.parse().map_err(|_| invalid("expected a number"))?)
            }
            FieldKind::Boolean => {
                FilterOp::EqBool(s.parse().map_err(|_| invalid("expected a boolean"))?)
            }
            FieldKind::Timestamp => {
                return Err(invalid("timestamp fields accept no text filters"))
            }
        },
        FilterValue::Scalar(value) => match value {
            Value::Null => FilterOp::IsNull,
            Value::Bool(b) => match field.kind {
                FieldKind::Boolean => FilterOp::EqBool(b),
                _ => return Err(invalid("expected a non-boolean value")),
            },
            Value::Number(n) => match field.kind {
                FieldKind::Integer => FilterOp::EqInt(
                    n.as_i64().ok_or_else(|| invalid("expected an integer"))?,
                ),
                FieldKind::Float => FilterOp::EqFloat(
                    n.as_f64().ok_or_else(|| invalid("expected a number"))?,
                ),
                _ => return Err(invalid("expected a non-numeric value")),
            },
            _ => return Err(invalid("unsupported filter value")),
        },
    };

    Ok(FilterClause { column: field.column, op })
}

// ---------------------------------------------------------------------------
// The resolved query
// ---------------------------------------------------------------------------

/// A normalized list request: the inclusive result window, the validated
/// sort column/direction, and the typed filter clauses. Built fresh per
/// request from untrusted strings; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub range_start: i64,
    pub range_end: i64,
    pub sort_column: &'static str,
    pub sort_order: SortOrder,
    pub filters: Vec<FilterClause>,
}

impl ListQuery {
    /// Resolve the three raw query parameters against `policy`.
    ///
    /// Absent parameters take the documented defaults (window per the
    /// policy, sort `createdAt` descending, match-all filter). Any decode
    /// or validation failure is a [`QueryRejection`] naming the offending
    /// parameter.
    pub fn resolve(
        policy: &ResourcePolicy,
        raw_range: Option<&str>,
        raw_sort: Option<&str>,
        raw_filter: Option<&str>,
    ) -> Result<Self, QueryRejection> {
        let (range_start, range_end) = match raw_range {
            Some(raw) => {
                let [start, end]: [i64; 2] =
                    serde_json::from_str(raw).map_err(|_| QueryRejection::MalformedRange)?;
                (start, end)
            }
            None => match policy.default_window {
                DefaultWindow::Page(size) => (0, size - 1),
                DefaultWindow::All => (0, UNBOUNDED_END),
            },
        };
        if range_start < 0 || range_end < range_start {
            return Err(QueryRejection::InvalidRange { start: range_start, end: range_end });
        }

        let (sort_field, sort_order) = match raw_sort {
            Some(raw) => {
                let [field, order]: [String; 2] =
                    serde_json::from_str(raw).map_err(|_| QueryRejection::MalformedSort)?;
                let order = SortOrder::parse(&order)
                    .ok_or(QueryRejection::InvalidSortOrder(order.clone()))?;
                (field, order)
            }
            None => (DEFAULT_SORT_FIELD.to_string(), SortOrder::Desc),
        };
        let sort_column = policy
            .field(&sort_field)
            .ok_or(QueryRejection::UnknownSortField {
                resource: policy.resource,
                field: sort_field.clone(),
            })?
            .column;

        let filters = match raw_filter {
            Some(raw) => {
                let map: serde_json::Map<String, Value> =
                    serde_json::from_str(raw).map_err(|_| QueryRejection::MalformedFilter)?;
                map.into_iter()
                    .map(|(name, value)| {
                        let field = policy.field(&name).ok_or_else(|| {
                            QueryRejection::UnknownFilterField {
                                resource: policy.resource,
                                field: name.clone(),
                            }
                        })?;
                        clause_for(field, FilterValue::classify(value))
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => Vec::new(),
        };

        Ok(Self { range_start, range_end, sort_column, sort_order, filters })
    }

    /// Rows to skip before the window (the store's `OFFSET`).
    pub fn skip(&self) -> i64 {
        self.range_start
    }

    /// Maximum rows in the window (the store's `LIMIT`).
    pub fn take(&self) -> i64 {
        (self.range_end - self.range_start).saturating_add(1)
    }

    /// Format the `Content-Range`-style header value for a completed
    /// fetch: `"{resource} {start}-{end}/{total}"` with the end index
    /// clamped to the last existing row.
    ///
    /// When `total` is zero the end index collapses to `-1` (for example
    /// `"news 0--1/0"`). Existing admin clients parse that exact form, so
    /// it is preserved rather than special-cased.
    pub fn content_range(&self, resource: &str, total: i64) -> String {
        format!("{resource} {}-{}/{total}", self.range_start, self.range_end.min(total - 1))
    }
}
