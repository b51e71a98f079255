//! Canonical label-key encoding.
//!
//! Keys are built by walking the declared label names in declaration order,
//! so the caller's supply order never matters. An absent label contributes a
//! fixed sentinel, which keeps "label omitted" distinct from "label present
//! with empty value". Values are escaped so the encoding stays injective for
//! arbitrary strings.

use std::fmt;

use bytes::Bytes;

/// Field for a declared label absent from the input.
const ABSENT: char = '-';
/// Separator between declared-label fields.
const SEP: char = '|';
/// Marks a present label; the escaped value follows.
const PRESENT: char = '=';

/// Canonical, order-independent key for one label combination.
///
/// Backed by `Bytes` so clones into the value map and the notification path
/// are reference-counted, not copied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesKey(Bytes);

impl SeriesKey {
    /// Resolve an input label set against the declared label names.
    ///
    /// Only declared names participate; undeclared input pairs are ignored.
    /// If the input repeats a declared name, the last occurrence wins.
    pub fn resolve(label_names: &[String], labels: &[(&str, &str)]) -> SeriesKey {
        let mut out = String::with_capacity(label_names.len() * 8);
        for (i, name) in label_names.iter().enumerate() {
            if i > 0 {
                out.push(SEP);
            }
            match lookup(labels, name) {
                Some(value) => {
                    out.push(PRESENT);
                    escape_into(value, &mut out);
                }
                None => out.push(ABSENT),
            }
        }
        SeriesKey(Bytes::from(out.into_bytes()))
    }

    /// Raw encoded bytes (stable across processes; usable as a cache key).
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Last matching value for `name`, if any.
fn lookup<'a>(labels: &[(&'a str, &'a str)], name: &str) -> Option<&'a str> {
    labels
        .iter()
        .rev()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| *v)
}

/// Escape `\`, `|`, and `=` so values cannot forge field boundaries.
fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        if matches!(c, '\\' | '|' | '=') {
            out.push('\\');
        }
        out.push(c);
    }
}
