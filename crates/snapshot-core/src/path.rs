use crate::error::{Error, Result};
use std::borrow::Cow;

/// Percent-encodes a single path value. The wildcard `*` passes through as is.
pub fn escape(value: &str) -> Cow<'_, str> {
    if value == "*" {
        return Cow::Borrowed(value);
    }
    urlencoding::encode(value)
}

/// Rejects `.` and `..`. URL parsing resolves them (encoded or not) as dot
/// segments, which would point the request at a parent endpoint.
pub fn check_segment(key: &str, value: &str) -> Result<()> {
    if value == "." || value == ".." {
        return Err(Error::invalid(
            key,
            format!("`{value}` cannot be used as a path value"),
        ));
    }
    Ok(())
}

/// Escapes each name and joins them with a literal comma.
pub fn listify<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !name.is_empty())
        .map(escape)
        .collect::<Vec<_>>()
        .join(",")
}

/// Joins path segments into an absolute request path, skipping blank segments.
pub fn pathify(segments: &[&str]) -> String {
    let mut path = String::new();
    for segment in segments {
        for part in segment.split('/') {
            if part.trim().is_empty() {
                continue;
            }
            path.push('/');
            path.push_str(part);
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}
