//! Dynamic row value: the closed set of shapes a fetched row or API payload can take.
//!
//! Unlike `serde_json::Value`, timestamps stay typed (`Datum::DateTime`) until serialization,
//! so key conversion never mistakes them for keyed containers.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    DateTime(DateTime<Utc>),
    Array(Vec<Datum>),
    /// Field name -> value, in insertion order.
    Object(IndexMap<String, Datum>),
}

impl Datum {
    /// Short name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Datum::Null => "null",
            Datum::Bool(_) => "bool",
            Datum::Number(_) => "number",
            Datum::String(_) => "string",
            Datum::DateTime(_) => "datetime",
            Datum::Array(_) => "array",
            Datum::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Datum>> {
        match self {
            Datum::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut IndexMap<String, Datum>> {
        match self {
            Datum::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Datum::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Field lookup on an object; `None` for other variants or a missing key.
    pub fn get(&self, key: &str) -> Option<&Datum> {
        self.as_object().and_then(|m| m.get(key))
    }

    /// Build an object from `(key, value)` pairs, later duplicates replacing earlier ones.
    pub fn object<K, I>(fields: I) -> Datum
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Datum)>,
    {
        Datum::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for Datum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Datum::Null => serializer.serialize_unit(),
            Datum::Bool(b) => serializer.serialize_bool(*b),
            Datum::Number(n) => n.serialize(serializer),
            Datum::String(s) => serializer.serialize_str(s),
            Datum::DateTime(d) => serializer.serialize_str(&d.to_rfc3339()),
            Datum::Array(items) => items.serialize(serializer),
            Datum::Object(map) => map.serialize(serializer),
        }
    }
}

/// JSON has no timestamp type: strings stay strings, even if they look like dates.
impl From<Value> for Datum {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Datum::Null,
            Value::Bool(b) => Datum::Bool(b),
            Value::Number(n) => Datum::Number(n),
            Value::String(s) => Datum::String(s),
            Value::Array(arr) => Datum::Array(arr.into_iter().map(Datum::from).collect()),
            Value::Object(map) => Datum::Object(map.into_iter().map(|(k, v)| (k, Datum::from(v))).collect()),
        }
    }
}

/// Timestamps render as RFC 3339 strings.
impl From<Datum> for Value {
    fn from(d: Datum) -> Self {
        match d {
            Datum::Null => Value::Null,
            Datum::Bool(b) => Value::Bool(b),
            Datum::Number(n) => Value::Number(n),
            Datum::String(s) => Value::String(s),
            Datum::DateTime(t) => Value::String(t.to_rfc3339()),
            Datum::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Datum::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<bool> for Datum {
    fn from(b: bool) -> Self {
        Datum::Bool(b)
    }
}

impl From<i64> for Datum {
    fn from(n: i64) -> Self {
        Datum::Number(n.into())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::String(s)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for Datum {
    fn from(d: DateTime<Utc>) -> Self {
        Datum::DateTime(d)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Datum::Null)
    }
}

impl<T: Into<Datum>> From<Vec<T>> for Datum {
    fn from(items: Vec<T>) -> Self {
        Datum::Array(items.into_iter().map(Into::into).collect())
    }
}
