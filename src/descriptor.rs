//! Decoration descriptors in the shape host widgets expect
//!
//! Serialized form:
//! ```text
//! { "range":   { "startLineNumber", "startColumn", "endLineNumber", "endColumn" },
//!   "options": { "inlineClassName", "hoverMessage"? } }
//! ```

use serde::{Deserialize, Serialize};

use crate::request::HighlightRequest;

/// Range in host coordinates (1-based, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationRange {
    pub start_line_number: usize,
    pub start_column: usize,
    pub end_line_number: usize,
    pub end_column: usize,
}

impl DecorationRange {
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line_number: start_line,
            start_column: start_col,
            end_line_number: end_line,
            end_column: end_col,
        }
    }

    /// Check if a position falls inside the range (end exclusive)
    pub fn contains(&self, line: usize, column: usize) -> bool {
        let pos = (line, column);
        pos >= (self.start_line_number, self.start_column)
            && pos < (self.end_line_number, self.end_column)
    }

    /// Check if the range covers no text
    pub fn is_empty(&self) -> bool {
        (self.start_line_number, self.start_column) >= (self.end_line_number, self.end_column)
    }
}

/// A single hover entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverMessage {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationOptions {
    pub inline_class_name: String,
    /// Absent rather than empty when there is nothing to show
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_message: Option<Vec<HoverMessage>>,
}

/// What gets handed to the host for each decoration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationDescriptor {
    pub range: DecorationRange,
    pub options: DecorationOptions,
}

impl From<&HighlightRequest> for DecorationDescriptor {
    fn from(req: &HighlightRequest) -> Self {
        Self {
            range: DecorationRange::new(req.start_line, req.start_col, req.end_line, req.end_col),
            options: DecorationOptions {
                inline_class_name: req.class_name.clone(),
                hover_message: req
                    .text
                    .as_ref()
                    .map(|text| vec![HoverMessage { value: text.clone() }]),
            },
        }
    }
}
