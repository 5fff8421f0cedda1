use serde::{Deserialize, Serialize};

/// Default segment separator.
pub const DEFAULT_SEPARATOR: char = '.';

/// Configuration for path parsing and path writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Character that splits a path string into segments.
    pub separator: char,
    /// When `true`, `put` creates empty objects for missing intermediate
    /// segments instead of falling back to a shallow write.
    ///
    /// An intermediate that exists but is not an object is never replaced;
    /// the shallow-write fallback still applies there.
    pub create_missing: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            create_missing: false,
        }
    }
}

impl PathConfig {
    /// A configuration that builds missing intermediate objects on write.
    pub fn create_missing() -> Self {
        Self {
            create_missing: true,
            ..Default::default()
        }
    }

    /// Same configuration with a different separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}
