//! Turning pattern match results into highlight requests
//!
//! The hover text is the match name, or the name followed by the captured
//! values as a JSON object when the match captured anything.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::request::{HighlightRequest, Position};

/// A match reported by a pattern engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub name: String,
    pub start: Position,
    pub end: Position,
    pub captures: BTreeMap<String, String>,
}

impl MatchResult {
    pub fn new(name: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            captures: BTreeMap::new(),
        }
    }

    pub fn with_capture(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.captures.insert(key.into(), value.into());
        self
    }

    /// Text shown when hovering over the match.
    ///
    /// With captures this is `"<name>: {captures}"`, labelled with the match's
    /// own name rather than a fixed `name` prefix.
    pub fn hover_text(&self) -> String {
        if self.captures.is_empty() {
            return self.name.clone();
        }
        let captures: Map<String, Value> = self
            .captures
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        format!("{}: {}", self.name, Value::Object(captures))
    }

    pub fn to_request(&self, class_name: &str) -> HighlightRequest {
        HighlightRequest::new(self.start, self.end, class_name).with_text(self.hover_text())
    }
}

/// Convert matches to requests, keeping their order
pub fn requests_from_matches<'a, I>(matches: I, class_name: &str) -> Vec<HighlightRequest>
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    matches.into_iter().map(|m| m.to_request(class_name)).collect()
}
