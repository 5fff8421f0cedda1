//! Dot-path addressable JSON objects.
//!
//! This crate adds path access to `serde_json` object trees: given a path
//! like `"a.b.c"`, read, test, or write the value nested at that location
//! without descending through the intermediate objects by hand.
//!
//! # Semantics
//!
//! - Reads miss silently. A missing segment, a non-object intermediate, or a
//!   stored `null` all read as `None`.
//! - Writes never create intermediate objects unless
//!   [`PathConfig::create_missing`] is set. When the walk cannot descend,
//!   the last segment is written into the deepest object reached.
//! - Writing `null` deletes the key.
//! - Only object keys are addressed; array elements are opaque.
//!
//! # Key Types
//!
//! - [`JsonObject`] - Owned object with path and single-key operations
//! - [`PathAccess`] - Path operations for any `serde_json` map or value
//! - [`KeyPath`] - A path string split into segments
//! - [`PathConfig`] - Separator and write behavior
//! - [`DotJsonError`] - Errors from strict parsing

pub mod access;
pub mod config;
pub mod error;
pub mod object;
pub mod path;
mod resolve;

pub use access::PathAccess;
pub use config::{PathConfig, DEFAULT_SEPARATOR};
pub use error::{DotJsonError, Result};
pub use object::JsonObject;
pub use path::KeyPath;
