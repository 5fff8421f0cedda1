//! Splitting path strings into segments.
//!
//! A path like `"a.b.c"` addresses the value under key `c` of the object
//! under `b` of the object under `a`. Splitting follows these rules:
//!
//! - Segments are separated by the configured separator (default `.`)
//! - Trailing empty segments are dropped: `"a."` is `["a"]`
//! - Interior and leading empty segments are kept as `""` keys:
//!   `"a..b"` is `["a", "", "b"]`
//! - A path with no segments left (`""`, `"."`) is invalid
//!
//! There is no escaping, so a key that itself contains the separator cannot
//! be addressed by a multi-segment path.

use std::fmt;

use crate::config::DEFAULT_SEPARATOR;
use crate::error::{DotJsonError, Result};

/// A parsed, non-empty sequence of path segments borrowed from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPath<'a> {
    segments: Vec<&'a str>,
    separator: char,
}

impl<'a> KeyPath<'a> {
    /// Split `path` on `.`.
    ///
    /// Returns `None` when nothing addressable remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotjson::KeyPath;
    ///
    /// let path = KeyPath::parse("a.b.c").unwrap();
    /// assert_eq!(path.segments(), ["a", "b", "c"]);
    /// assert!(KeyPath::parse("").is_none());
    /// ```
    pub fn parse(path: &'a str) -> Option<Self> {
        Self::parse_with(path, DEFAULT_SEPARATOR)
    }

    /// Split `path` on an arbitrary separator.
    pub fn parse_with(path: &'a str, separator: char) -> Option<Self> {
        let mut segments: Vec<&'a str> = path.split(separator).collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments,
            separator,
        })
    }

    /// Split `path` on `separator`, rejecting empty paths and empty segments.
    pub fn parse_strict(path: &'a str, separator: char) -> Result<Self> {
        if path.is_empty() {
            return Err(DotJsonError::InvalidPath {
                path: path.to_string(),
                reason: "path must not be empty".into(),
            });
        }
        let segments: Vec<&'a str> = path.split(separator).collect();
        if let Some(pos) = segments.iter().position(|s| s.is_empty()) {
            return Err(DotJsonError::InvalidPath {
                path: path.to_string(),
                reason: format!("segment {pos} is empty"),
            });
        }
        Ok(Self {
            segments,
            separator,
        })
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments. Never zero.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.separator)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
