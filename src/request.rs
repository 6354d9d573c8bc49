//! Highlight requests supplied by callers
//!
//! A request names a text range, the style class to apply to it and an
//! optional hover text. Ranges are 1-based and end-exclusive, following
//! the host widget's convention. Nothing here validates them.

use serde::{Deserialize, Serialize};

/// A 1-based line/column position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// One highlight to be shown in the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRequest {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
    /// Style class applied to the inline text of the range
    pub class_name: String,
    /// Hover text; `None` means no tooltip at all
    #[serde(default)]
    pub text: Option<String>,
}

impl HighlightRequest {
    /// Create a request without hover text
    pub fn new(start: Position, end: Position, class_name: impl Into<String>) -> Self {
        Self {
            start_line: start.line,
            start_col: start.column,
            end_line: end.line,
            end_col: end.column,
            class_name: class_name.into(),
            text: None,
        }
    }

    /// Builder: attach hover text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_col)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_col)
    }

    /// Check that positions are 1-based and start does not come after end
    pub fn is_well_formed(&self) -> bool {
        let positive = self.start_line > 0
            && self.start_col > 0
            && self.end_line > 0
            && self.end_col > 0;
        positive && self.start() <= self.end()
    }
}
