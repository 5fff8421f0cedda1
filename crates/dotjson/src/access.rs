//! The [`PathAccess`] extension trait.
//!
//! Implemented for `serde_json::Map<String, Value>` and `serde_json::Value`,
//! so every object in a parsed tree can be addressed by path directly. A
//! nested object returned by a read supports the same calls as the root.

use serde_json::{Map, Value};

use crate::config::PathConfig;
use crate::path::KeyPath;
use crate::resolve::{resolve_segments, resolve_segments_mut, write_segments};

/// Path-based reads and writes over a JSON object tree.
///
/// Misses are never errors: reads return `None`, writes with an empty path
/// do nothing.
///
/// # Examples
///
/// ```
/// use dotjson::PathAccess;
/// use serde_json::json;
///
/// let mut doc = json!({"server": {"port": 8080}});
/// assert_eq!(doc.path_get("server.port"), Some(&json!(8080)));
///
/// doc.path_put("server.port", json!(9090));
/// assert_eq!(doc.path_get("server.port"), Some(&json!(9090)));
///
/// doc.path_put("server.port", json!(null));
/// assert!(!doc.path_contains("server.port"));
/// ```
pub trait PathAccess {
    /// Read the value at `path`, splitting with `config.separator`.
    fn path_get_with(&self, path: &str, config: &PathConfig) -> Option<&Value>;

    /// Mutable access to the value at `path`. Follows the read walk.
    fn path_get_mut_with(&mut self, path: &str, config: &PathConfig) -> Option<&mut Value>;

    /// Write `value` at `path`; a `null` value deletes the target key.
    ///
    /// Returns the value previously held by the key that was written.
    fn path_put_with(&mut self, path: &str, value: Value, config: &PathConfig) -> Option<Value>;

    /// Read the value at `path`.
    fn path_get(&self, path: &str) -> Option<&Value> {
        self.path_get_with(path, &PathConfig::default())
    }

    /// Mutable access to the value at `path`.
    fn path_get_mut(&mut self, path: &str) -> Option<&mut Value> {
        self.path_get_mut_with(path, &PathConfig::default())
    }

    /// `true` if a read of `path` finds a value.
    ///
    /// A key holding `null` reports `false`, same as a missing key.
    fn path_contains(&self, path: &str) -> bool {
        self.path_get(path).is_some()
    }

    /// [`path_contains`](Self::path_contains) with an explicit config.
    fn path_contains_with(&self, path: &str, config: &PathConfig) -> bool {
        self.path_get_with(path, config).is_some()
    }

    /// Write `value` at `path`.
    fn path_put(&mut self, path: &str, value: Value) -> Option<Value> {
        self.path_put_with(path, value, &PathConfig::default())
    }

    /// Write `null` at `path`, returning the deleted value.
    ///
    /// Follows the write walk: if an intermediate is missing or not an
    /// object, the last segment is removed from the deepest object reached.
    fn path_remove(&mut self, path: &str) -> Option<Value> {
        self.path_put(path, Value::Null)
    }
}

impl PathAccess for Map<String, Value> {
    fn path_get_with(&self, path: &str, config: &PathConfig) -> Option<&Value> {
        let path = KeyPath::parse_with(path, config.separator)?;
        resolve_segments(self, path.segments())
    }

    fn path_get_mut_with(&mut self, path: &str, config: &PathConfig) -> Option<&mut Value> {
        let path = KeyPath::parse_with(path, config.separator)?;
        resolve_segments_mut(self, path.segments())
    }

    fn path_put_with(&mut self, path: &str, value: Value, config: &PathConfig) -> Option<Value> {
        let path = KeyPath::parse_with(path, config.separator)?;
        write_segments(self, path.segments(), value, config)
    }
}

/// Non-object values have no addressable keys: reads miss and writes are
/// ignored.
impl PathAccess for Value {
    fn path_get_with(&self, path: &str, config: &PathConfig) -> Option<&Value> {
        self.as_object()?.path_get_with(path, config)
    }

    fn path_get_mut_with(&mut self, path: &str, config: &PathConfig) -> Option<&mut Value> {
        self.as_object_mut()?.path_get_mut_with(path, config)
    }

    fn path_put_with(&mut self, path: &str, value: Value, config: &PathConfig) -> Option<Value> {
        self.as_object_mut()?.path_put_with(path, value, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn map_and_value_agree() {
        let value = json!({"a": {"b": {"c": 1}}});
        let map = value.as_object().unwrap().clone();
        assert_eq!(value.path_get("a.b.c"), map.path_get("a.b.c"));
        assert_eq!(value.path_get("a.b"), map.path_get("a.b"));
    }

    #[test]
    fn nested_object_supports_paths_too() {
        let value = json!({"a": {"b": {"c": 1}}});
        let inner = value.path_get("a").unwrap();
        assert_eq!(inner.path_get("b.c"), Some(&json!(1)));
    }

    #[test]
    fn non_object_value_misses_and_ignores_writes() {
        let mut value = json!([1, 2, 3]);
        assert_eq!(value.path_get("0"), None);
        assert_eq!(value.path_put("a", json!(1)), None);
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn empty_path_is_a_no_op() {
        let mut value = json!({"": 1});
        assert_eq!(value.path_get(""), None);
        assert!(!value.path_contains(""));
        assert_eq!(value.path_put("", json!(2)), None);
        assert_eq!(value, json!({"": 1}));
    }

    #[test]
    fn remove_returns_the_old_value() {
        let mut value = json!({"a": {"b": "x"}});
        assert_eq!(value.path_remove("a.b"), Some(json!("x")));
        assert_eq!(value, json!({"a": {}}));
        assert_eq!(value.path_remove("a.b"), None);
    }

    #[test]
    fn remove_through_missing_intermediate_falls_back() {
        let mut value = json!({"s": 1, "a": {"b": 1}});
        assert_eq!(value.path_remove("q.r.s"), Some(json!(1)));
        assert_eq!(value, json!({"a": {"b": 1}}));
    }

    #[test]
    fn get_mut_edits_nested_value() {
        let mut value = json!({"a": {"count": 1}});
        if let Some(count) = value.path_get_mut("a.count") {
            *count = json!(2);
        }
        assert_eq!(value, json!({"a": {"count": 2}}));
    }

    #[test]
    fn custom_separator_config() {
        let mut value = json!({"a": {"b.c": 1}});
        let config = PathConfig::default().with_separator('/');
        assert_eq!(value.path_get_with("a/b.c", &config), Some(&json!(1)));
        value.path_put_with("a/b.c", json!(2), &config);
        assert!(value.path_contains_with("a/b.c", &config));
        assert_eq!(value.path_get("a.b.c"), None);
    }
}
