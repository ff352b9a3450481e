// src/core/common/path.rs
//! Safe nested-path lookup over untrusted payloads.
//!
//! Every variant reads the payload through [`get_path`]; a missing segment,
//! an out-of-range index, or a segment applied to a scalar all resolve to
//! `None` instead of an error.

use serde_json::Value;

/// One step of a lookup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Object member.
    Key(&'a str),
    /// Array position; negative values count from the end (`-1` is last).
    Index(isize),
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(key: &'a str) -> Self {
        Self::Key(key)
    }
}

impl From<isize> for PathSegment<'_> {
    fn from(index: isize) -> Self {
        Self::Index(index)
    }
}

/// Walks `root` along `path`.
///
/// A JSON `null` at the end of the path is reported as absent.
#[must_use]
pub fn get_path<'v>(root: &'v Value, path: &[PathSegment<'_>]) -> Option<&'v Value> {
    let found = path.iter().try_fold(root, |current, segment| match (segment, current) {
        (PathSegment::Key(key), Value::Object(map)) => map.get(*key),
        (PathSegment::Index(index), Value::Array(items)) => resolve_index(items.len(), *index)
            .and_then(|position| items.get(position)),
        _ => None,
    })?;
    if found.is_null() {
        None
    } else {
        Some(found)
    }
}

/// Shorthand for the common all-keys path.
#[must_use]
pub fn get_key_path<'v>(root: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    let path: Vec<PathSegment<'_>> = keys.iter().map(|key| PathSegment::Key(*key)).collect();
    get_path(root, &path)
}

fn resolve_index(len: usize, index: isize) -> Option<usize> {
    if index >= 0 {
        usize::try_from(index).ok()
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}
