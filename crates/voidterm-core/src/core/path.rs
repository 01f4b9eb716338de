//! Path resolution against the current directory.
//!
//! Paths are plain `/`-delimited strings. `"/"` and `"~"` both name the root.
//! No `.` or `..` segments are interpreted here: `cd` special-cases a bare
//! `..` argument, anything else is carried literally into the path.

use crate::config::HOME_DIR;

/// Resolve a user-typed path into an absolute path string.
///
/// # Rules (in order)
/// 1. `"~"` or `"/"` resolve to `"/"`
/// 2. Absolute paths are returned unchanged
/// 3. From the home directory (`"~"`), `raw` is rooted with `/`
/// 4. Otherwise `raw` is appended to `current` with exactly one separator
pub fn resolve(raw: &str, current: &str) -> String {
    if raw == HOME_DIR || raw == "/" {
        return "/".to_string();
    }
    if raw.starts_with('/') {
        return raw.to_string();
    }
    if current == HOME_DIR {
        return format!("/{}", raw);
    }
    if current.ends_with('/') {
        format!("{}{}", current, raw)
    } else {
        format!("{}/{}", current, raw)
    }
}

/// Check whether a path spells the root.
pub fn is_root(path: &str) -> bool {
    path == "/" || path == HOME_DIR
}

/// Non-empty segments of a path (`"//a/b/"` -> `["a", "b"]`).
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Split a path into its parent segments and leaf name.
///
/// Returns `None` for the root, which has no leaf.
pub fn split_leaf(path: &str) -> Option<(Vec<&str>, &str)> {
    if is_root(path) {
        return None;
    }
    let mut parts = segments(path);
    let leaf = parts.pop()?;
    Some((parts, leaf))
}

/// Check whether `inner` is `outer` itself or lies somewhere below it.
///
/// The root encloses nothing here, since it can be neither removed nor moved.
pub fn encloses(outer: &str, inner: &str) -> bool {
    if is_root(outer) || is_root(inner) {
        return false;
    }
    let outer = segments(outer);
    !outer.is_empty() && segments(inner).starts_with(&outer)
}

/// Drop the last segment of the current directory (`cd ..`).
///
/// Stays at the home directory when already at the root.
pub fn parent_of(current: &str) -> String {
    if is_root(current) {
        return HOME_DIR.to_string();
    }
    let mut parts: Vec<&str> = current.split('/').collect();
    parts.pop();
    if parts.len() <= 1 {
        HOME_DIR.to_string()
    } else {
        parts.join("/")
    }
}
