//! The segment walk shared by every path operation.
//!
//! Reads descend while the current value is an object and segments remain;
//! any miss, or any non-object in an intermediate position, ends the walk
//! with `None`. A stored `null` reads the same as a missing key.
//!
//! Writes descend under the same condition, but a failed descent does not
//! abort: the container reached so far becomes the target and the *last*
//! segment of the path is written there. Missing intermediates are only
//! created when [`PathConfig::create_missing`] is set.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::PathConfig;

/// Resolve `segments` against `current`.
pub(crate) fn resolve_segments<'m>(
    current: &'m Map<String, Value>,
    segments: &[&str],
) -> Option<&'m Value> {
    let (first, rest) = segments.split_first()?;
    let value = current.get(*first)?;
    if rest.is_empty() {
        return (!value.is_null()).then_some(value);
    }
    match value {
        Value::Object(child) => resolve_segments(child, rest),
        _ => None,
    }
}

/// Mutable counterpart of [`resolve_segments`].
pub(crate) fn resolve_segments_mut<'m>(
    current: &'m mut Map<String, Value>,
    segments: &[&str],
) -> Option<&'m mut Value> {
    let (first, rest) = segments.split_first()?;
    let value = current.get_mut(*first)?;
    if rest.is_empty() {
        return (!value.is_null()).then_some(value);
    }
    match value {
        Value::Object(child) => resolve_segments_mut(child, rest),
        _ => None,
    }
}

/// Write `value` at `segments`, deleting when `value` is `null`.
///
/// Returns the value previously stored at the write target.
pub(crate) fn write_segments(
    current: &mut Map<String, Value>,
    segments: &[&str],
    value: Value,
    config: &PathConfig,
) -> Option<Value> {
    let last = *segments.last()?;
    write_at(current, segments, last, value, config)
}

fn write_at(
    current: &mut Map<String, Value>,
    segments: &[&str],
    last: &str,
    value: Value,
    config: &PathConfig,
) -> Option<Value> {
    if let [first, rest @ ..] = segments {
        if !rest.is_empty() {
            if config.create_missing && !current.contains_key(*first) && !value.is_null() {
                trace!(segment = *first, "creating intermediate object");
                current.insert((*first).to_string(), Value::Object(Map::new()));
            }
            if let Some(Value::Object(child)) = current.get_mut(*first) {
                return write_at(child, rest, last, value, config);
            }
            debug!(
                segment = *first,
                key = last,
                "cannot descend; writing at the current level"
            );
        }
    }
    store(current, last, value)
}

fn store(current: &mut Map<String, Value>, key: &str, value: Value) -> Option<Value> {
    if value.is_null() {
        trace!(key, "removing key");
        current.shift_remove(key)
    } else {
        current.insert(key.to_string(), value)
    }
}
