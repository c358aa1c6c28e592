//! Query-string codec for the URL fragment
//!
//! [`ParamMap`] is an ordered, multi-valued key/value view of the
//! `key=value&key=value` wire form used after `#`. Keys keep their first-seen
//! order, values keep their order of appearance within a key, and the store
//! surfaces raw decoded strings; semantic parsing belongs to callers.

use std::borrow::Cow;

/// Ordered multi-valued parameter map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses fragment text (without the leading `#`). Empty segments are
    /// skipped; a segment without `=` is a key with an empty value; `+`
    /// decodes as a space.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();
        for segment in text.split('&') {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = match segment.split_once('=') {
                Some((key, value)) => (key, value),
                None => (segment, ""),
            };
            map.append(&decode(key), decode(value));
        }
        map
    }

    /// Serializes back to wire form. Values of a multi-valued key are written
    /// as repeated `key=value` pairs.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (key, values) in &self.entries {
            for value in values {
                if !out.is_empty() {
                    out.push('&');
                }
                out.push_str(&urlencoding::encode(key));
                out.push('=');
                out.push_str(&urlencoding::encode(value));
            }
        }
        out
    }

    /// Current values for `key`, in order; empty if absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Replaces `key`'s values in place, appending the key if new.
    /// `values` must be non-empty; use [`remove`](Self::remove) to drop a key.
    pub fn set(&mut self, key: &str, values: Vec<String>) {
        debug_assert!(!values.is_empty());
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key.to_string(), values)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn append(&mut self, key: &str, value: String) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }
}

fn decode(text: &str) -> String {
    let text: Cow<str> = if text.contains('+') {
        Cow::Owned(text.replace('+', " "))
    } else {
        Cow::Borrowed(text)
    };
    match urlencoding::decode(&text) {
        Ok(decoded) => decoded.into_owned(),
        // invalid percent escapes are surfaced raw
        Err(_) => text.into_owned(),
    }
}
