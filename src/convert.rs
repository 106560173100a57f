//! Recursive key conversion over nested values: rows fetched as snake_case go out as camelCase, request bodies come back as snake_case.
//!
//! Conversion borrows its input and builds a new value; nothing is mutated. Only keyed mappings have
//! their keys renamed. Sequences keep length and order; strings, numbers, booleans, null and
//! timestamps come back unchanged.
//!
//! Key collisions are not rejected: when two input keys rename to the same key (`totalSeats` and
//! `total_Seats` both camelize to `totalSeats`), the key visited last in the map's iteration order wins.

use crate::case::KeyCase;
use crate::datum::Datum;
use crate::error::CaseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A value whose keyed mappings can be renamed to another case.
///
/// Implementations for scalar types return a copy of `self`. Container implementations convert
/// every element, and map implementations additionally rename every key with [`KeyCase::apply`].
pub trait ConvertKeys: Sized {
    fn convert_keys(&self, case: KeyCase) -> Self;

    fn to_camel(&self) -> Self {
        self.convert_keys(KeyCase::Camel)
    }

    fn to_snake(&self) -> Self {
        self.convert_keys(KeyCase::Snake)
    }
}

/// Rename every keyed-mapping key in `value` from snake_case to camelCase.
pub fn convert_to_camel<T: ConvertKeys>(value: &T) -> T {
    value.convert_keys(KeyCase::Camel)
}

/// Rename every keyed-mapping key in `value` from camelCase to snake_case.
pub fn convert_to_snake<T: ConvertKeys>(value: &T) -> T {
    value.convert_keys(KeyCase::Snake)
}

macro_rules! convert_as_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl ConvertKeys for $t {
                fn convert_keys(&self, _case: KeyCase) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

convert_as_identity!(
    (),
    bool,
    char,
    String,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    NaiveDate,
    NaiveDateTime,
    uuid::Uuid,
    serde_json::Number,
);

impl<Tz: TimeZone> ConvertKeys for DateTime<Tz> {
    fn convert_keys(&self, _case: KeyCase) -> Self {
        self.clone()
    }
}

impl<T: ConvertKeys> ConvertKeys for Option<T> {
    fn convert_keys(&self, case: KeyCase) -> Self {
        self.as_ref().map(|v| v.convert_keys(case))
    }
}

impl<T: ConvertKeys> ConvertKeys for Box<T> {
    fn convert_keys(&self, case: KeyCase) -> Self {
        Box::new(self.as_ref().convert_keys(case))
    }
}

impl<T: ConvertKeys> ConvertKeys for Vec<T> {
    fn convert_keys(&self, case: KeyCase) -> Self {
        self.iter().map(|v| v.convert_keys(case)).collect()
    }
}

impl<V: ConvertKeys, S: BuildHasher + Default> ConvertKeys for HashMap<String, V, S> {
    fn convert_keys(&self, case: KeyCase) -> Self {
        let mut out = HashMap::with_capacity_and_hasher(self.len(), S::default());
        for (k, v) in self {
            out.insert(case.apply(k), v.convert_keys(case));
        }
        out
    }
}

impl<V: ConvertKeys> ConvertKeys for BTreeMap<String, V> {
    fn convert_keys(&self, case: KeyCase) -> Self {
        let mut out = BTreeMap::new();
        for (k, v) in self {
            out.insert(case.apply(k), v.convert_keys(case));
        }
        out
    }
}

/// A colliding key keeps the slot of its first occurrence but takes the last value.
impl<V: ConvertKeys, S: BuildHasher + Default> ConvertKeys for IndexMap<String, V, S> {
    fn convert_keys(&self, case: KeyCase) -> Self {
        let mut out = IndexMap::with_capacity_and_hasher(self.len(), S::default());
        for (k, v) in self {
            out.insert(case.apply(k), v.convert_keys(case));
        }
        out
    }
}

impl ConvertKeys for Map<String, Value> {
    fn convert_keys(&self, case: KeyCase) -> Self {
        let mut out = Map::with_capacity(self.len());
        for (k, v) in self {
            out.insert(case.apply(k), v.convert_keys(case));
        }
        out
    }
}

impl ConvertKeys for Value {
    fn convert_keys(&self, case: KeyCase) -> Self {
        match self {
            Value::Object(map) => Value::Object(map.convert_keys(case)),
            Value::Array(items) => Value::Array(items.convert_keys(case)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => self.clone(),
        }
    }
}

impl ConvertKeys for Datum {
    fn convert_keys(&self, case: KeyCase) -> Self {
        match self {
            Datum::Object(map) => Datum::Object(map.convert_keys(case)),
            Datum::Array(items) => Datum::Array(items.convert_keys(case)),
            Datum::Null | Datum::Bool(_) | Datum::Number(_) | Datum::String(_) | Datum::DateTime(_) => self.clone(),
        }
    }
}

/// Serialize a typed record (snake_case fields, as fetched) and camelize every key.
pub fn to_camel_json<T: Serialize + ?Sized>(record: &T) -> Result<Value, CaseError> {
    let value = serde_json::to_value(record).map_err(CaseError::Serialize)?;
    Ok(value.to_camel())
}

/// Snake-case every key of a camelCase payload, then deserialize it into `T`.
pub fn from_camel_json<T: DeserializeOwned>(value: Value) -> Result<T, CaseError> {
    serde_json::from_value(value.to_snake()).map_err(CaseError::Deserialize)
}

/// Serialize a typed record into snake_case row fields. The record must serialize to a keyed mapping.
pub fn snake_fields<T: Serialize + ?Sized>(record: &T) -> Result<IndexMap<String, Datum>, CaseError> {
    let value = serde_json::to_value(record).map_err(CaseError::Serialize)?;
    match Datum::from(value).to_snake() {
        Datum::Object(fields) => Ok(fields),
        other => Err(CaseError::NotAnObject {
            found: other.type_name(),
        }),
    }
}

/// Keys that would be overwritten by a later key when converted to `case`.
///
/// Conversion keeps last-wins semantics regardless; this is for callers that want to log or reject such payloads.
pub fn colliding_keys<'a, I>(keys: I, case: KeyCase) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen: HashMap<String, &'a String> = HashMap::new();
    let mut lost = Vec::new();
    for k in keys {
        if let Some(prev) = seen.insert(case.apply(k), k) {
            lost.push(prev.clone());
        }
    }
    lost
}
