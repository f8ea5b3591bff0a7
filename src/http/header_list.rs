// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Ordered list of raw `Name: Value` header lines

use std::collections::HashSet;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered header lines, kept exactly as they will be sent.
///
/// Lines are compared as whole strings when merging, so `X-Id: 1` and
/// `X-Id: 2` are distinct entries and both are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderList {
    lines: Vec<String>,
}

impl HeaderList {
    /// Create an empty header list
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge several sources into one list, keeping the first occurrence of
    /// each line and dropping later duplicates
    pub fn merge<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let lines = lines
            .into_iter()
            .map(Into::into)
            .filter(|line| seen.insert(line.clone()))
            .collect();
        Self { lines }
    }

    /// Append a `Name: Value` line
    pub fn push(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        self.lines
            .push(format!("{}: {}", name.as_ref(), value.as_ref()));
    }

    /// Append a preformatted line
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Builder form of [`push`](Self::push)
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.push(name, value);
        self
    }

    /// Iterate over the lines in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Lines as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check for an exact line
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// First value sent for a header name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let (n, v) = line.split_once(':')?;
            n.trim().eq_ignore_ascii_case(name).then(|| v.trim())
        })
    }

    /// Convert into a header map; repeated names are appended, not replaced
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.lines.len());
        for line in &self.lines {
            let (name, value) = parse_line(line)?;
            map.append(name, value);
        }
        Ok(map)
    }
}

/// Split a raw line into a validated name and value
fn parse_line(line: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| Error::invalid_header(line, "expected 'Name: Value'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_header(line, "empty header name"));
    }

    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::invalid_header(line, e.to_string()))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|e| Error::invalid_header(line, e.to_string()))?;

    Ok((name, value))
}

impl<S: Into<String>> FromIterator<S> for HeaderList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for HeaderList {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_formats_line() {
        let mut headers = HeaderList::new();
        headers.push("X-Id", "1");
        headers.push("X-Id", "1");

        assert_eq!(headers.as_slice(), ["X-Id: 1", "X-Id: 1"]);
    }

    #[test]
    fn test_merge_keeps_first_occurrence() {
        let defaults = ["X-Id: 1"];
        let embedded = ["X-Trace: t"];
        let call = ["X-Id: 1", "X-Debug: on"];

        let merged = HeaderList::merge(
            defaults.iter().chain(embedded.iter()).chain(call.iter()).copied(),
        );

        assert_eq!(merged.as_slice(), ["X-Id: 1", "X-Trace: t", "X-Debug: on"]);
    }

    #[test]
    fn test_merge_distinguishes_values() {
        let merged = HeaderList::merge(["X-Id: 1", "X-Id: 2", "X-Id: 1"]);
        assert_eq!(merged.as_slice(), ["X-Id: 1", "X-Id: 2"]);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let headers = HeaderList::new()
            .header("Content-Type", "application/json")
            .header("X-Debug", "on");

        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert_eq!(headers.get("x-missing"), None);
    }

    #[test]
    fn test_to_header_map_appends_repeated_names() {
        let headers: HeaderList = ["Accept: text/html", "accept: application/json"]
            .into_iter()
            .collect();
        let map = headers.to_header_map().unwrap();

        let values: Vec<_> = map.get_all("accept").iter().collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], "text/html");
        assert_eq!(values[1], "application/json");
    }

    #[test]
    fn test_invalid_lines_rejected() {
        for line in ["no-colon", ": value", "Bad Name: x", "X-Ok: line\nbreak"] {
            let headers = HeaderList::from(vec![line.to_string()]);
            let err = headers.to_header_map().unwrap_err();
            assert!(matches!(err, Error::InvalidHeader { .. }), "{line}");
        }
    }
}
