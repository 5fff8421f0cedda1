//! [`JsonObject`]: an owned JSON object with dot-path access.
//!
//! A `JsonObject` owns an ordered `serde_json::Map`. Path methods (`get`,
//! `contains_key`, `put`, `remove`) split their argument on `.` and walk
//! nested objects; single-key methods (`get_key`, `insert`, `remove_key`,
//! ...) touch only the top-level map. For a path without dots the two
//! families agree, except that path reads treat a stored `null` as absent.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::access::PathAccess;
use crate::config::PathConfig;
use crate::error::{kind_name, DotJsonError, Result};
use crate::path::KeyPath;
use crate::resolve::{resolve_segments, write_segments};

/// A JSON object addressable by dot paths.
///
/// # Examples
///
/// ```
/// use dotjson::JsonObject;
/// use serde_json::json;
///
/// let mut obj = JsonObject::parse_lossy(r#"{"a": {"b": {"c": 1}}}"#);
/// assert_eq!(obj.get("a.b.c"), Some(&json!(1)));
/// assert!(!obj.contains_key("a.x.c"));
///
/// obj.put("a.b.c", json!(2));
/// assert_eq!(obj.get_i64("a.b.c"), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonObject(Map<String, Value>);

impl JsonObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse `text`, yielding an empty object if it is not a valid JSON
    /// object.
    pub fn parse_lossy(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Self(map),
            Ok(other) => {
                debug!(
                    found = kind_name(&other),
                    "top-level value is not an object; using empty object"
                );
                Self::new()
            }
            Err(e) => {
                debug!(error = %e, "invalid JSON text; using empty object");
                Self::new()
            }
        }
    }

    /// Parse `text` as a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }

    /// Read and parse a JSON object from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::try_from(value)
    }

    /// Copy the entries of an existing map.
    pub fn from_map_ref(map: &Map<String, Value>) -> Self {
        Self(map.clone())
    }

    // ---- path operations ----

    /// Value at a dot path, or `None` if any segment is missing, an
    /// intermediate is not an object, or the value is `null`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.0.path_get(path)
    }

    /// [`get`](Self::get) with an explicit config.
    pub fn get_with(&self, path: &str, config: &PathConfig) -> Option<&Value> {
        self.0.path_get_with(path, config)
    }

    /// Mutable access to the value at a dot path.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut Value> {
        self.0.path_get_mut(path)
    }

    /// `true` if [`get`](Self::get) would find a value.
    ///
    /// A key holding `null` is reported as absent.
    pub fn contains_key(&self, path: &str) -> bool {
        self.0.path_contains(path)
    }

    /// [`contains_key`](Self::contains_key) with an explicit config.
    pub fn contains_key_with(&self, path: &str, config: &PathConfig) -> bool {
        self.0.path_contains_with(path, config)
    }

    /// Write `value` at a dot path; `null` deletes.
    ///
    /// Intermediate objects are not created. When the walk cannot descend
    /// (a segment is missing or not an object), the last segment of `path`
    /// is written into the deepest object reached. On an empty object,
    /// `put("x.y", 5)` therefore stores `{"y": 5}`.
    ///
    /// Returns the value previously held by the written key.
    pub fn put(&mut self, path: &str, value: Value) -> Option<Value> {
        self.0.path_put(path, value)
    }

    /// [`put`](Self::put) with an explicit config.
    pub fn put_with(&mut self, path: &str, value: Value, config: &PathConfig) -> Option<Value> {
        self.0.path_put_with(path, value, config)
    }

    /// Same as `put(path, Value::Null)`, returning the deleted value.
    ///
    /// Deletes follow the write walk, fallback included: when an
    /// intermediate segment is missing or not an object, the last segment
    /// is removed from the deepest object reached. On `{"s": 1, "a": {}}`,
    /// `remove("q.r.s")` deletes the top-level `s`.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        self.0.path_remove(path)
    }

    /// Value at an already split path.
    pub fn get_at(&self, path: &KeyPath<'_>) -> Option<&Value> {
        resolve_segments(&self.0, path.segments())
    }

    pub fn contains_at(&self, path: &KeyPath<'_>) -> bool {
        self.get_at(path).is_some()
    }

    /// [`put`](Self::put) at an already split path.
    ///
    /// Only `config.create_missing` applies; the separator was consumed when
    /// `path` was parsed.
    pub fn put_at(
        &mut self,
        path: &KeyPath<'_>,
        value: Value,
        config: &PathConfig,
    ) -> Option<Value> {
        write_segments(&mut self.0, path.segments(), value, config)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path)?.as_i64()
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path)?.as_f64()
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path)?.as_bool()
    }

    pub fn get_object(&self, path: &str) -> Option<&Map<String, Value>> {
        self.get(path)?.as_object()
    }

    pub fn get_array(&self, path: &str) -> Option<&Vec<Value>> {
        self.get(path)?.as_array()
    }

    // ---- single-key operations ----

    /// Value stored under a top-level key, `null` included.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Store `value` under a top-level key. A `null` value is stored as-is.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Remove a top-level key, keeping the order of the remaining keys.
    pub fn remove_key(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// `true` if the top-level key exists, even when it holds `null`.
    pub fn contains_plain_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy every entry of `other` into this object, overwriting on collision.
    pub fn put_all<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.0.extend(other);
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Serialize as indented JSON.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.0).map_err(DotJsonError::from)
    }
}

impl PathAccess for JsonObject {
    fn path_get_with(&self, path: &str, config: &PathConfig) -> Option<&Value> {
        self.0.path_get_with(path, config)
    }

    fn path_get_mut_with(&mut self, path: &str, config: &PathConfig) -> Option<&mut Value> {
        self.0.path_get_mut_with(path, config)
    }

    fn path_put_with(&mut self, path: &str, value: Value, config: &PathConfig) -> Option<Value> {
        self.0.path_put_with(path, value, config)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for JsonObject {
    type Err = DotJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl From<Map<String, Value>> for JsonObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<JsonObject> for Map<String, Value> {
    fn from(obj: JsonObject) -> Self {
        obj.0
    }
}

impl From<JsonObject> for Value {
    fn from(obj: JsonObject) -> Self {
        Value::Object(obj.0)
    }
}

impl TryFrom<Value> for JsonObject {
    type Error = DotJsonError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DotJsonError::NotAnObject {
                found: kind_name(&other),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
