use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored document: a store-generated id plus a schema-flexible JSON body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

/// Typed filter predicates understood by the document store.
#[derive(Debug, Clone)]
pub enum DocumentFilter {
    IdIn(Vec<Uuid>),
}

/// Numeric cast for loosely-typed document fields. Accepts JSON numbers and
/// numeric strings; everything else is `None`.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Truthiness cast for loosely-typed document fields. Null is falsy, numbers
/// are falsy at zero, strings and containers are falsy when empty.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
