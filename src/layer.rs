//! In-memory decoration host
//!
//! Keeps registered descriptors in insertion order and answers the queries
//! a terminal view needs: which decorations touch a line, what hover text
//! sits under a position, and which byte spans to style when drawing.

use std::collections::BTreeMap;
use std::convert::Infallible;

use log::trace;

use crate::descriptor::DecorationDescriptor;
use crate::host::DecorationHost;
use crate::style::{Span, Theme};

/// Handle of a decoration registered with a [`DecorationLayer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecorationId(u64);

/// Decorations attached to one text buffer
#[derive(Debug, Default)]
pub struct DecorationLayer {
    /// Ids are allocated increasing, so map order is insertion order
    decorations: BTreeMap<DecorationId, DecorationDescriptor>,
    next_id: u64,
}

impl DecorationLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn get(&self, id: DecorationId) -> Option<&DecorationDescriptor> {
        self.decorations.get(&id)
    }

    /// All live decorations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (DecorationId, &DecorationDescriptor)> {
        self.decorations.iter().map(|(id, desc)| (*id, desc))
    }

    /// Decorations whose range touches a 1-based line
    pub fn decorations_on_line(&self, line: usize) -> Vec<&DecorationDescriptor> {
        self.decorations
            .values()
            .filter(|d| d.range.start_line_number <= line && line <= d.range.end_line_number)
            .collect()
    }

    /// Hover texts of every decoration covering a 1-based position
    pub fn hover_at(&self, line: usize, column: usize) -> Vec<&str> {
        self.decorations
            .values()
            .filter(|d| d.range.contains(line, column))
            .filter_map(|d| d.options.hover_message.as_ref())
            .flatten()
            .map(|msg| msg.value.as_str())
            .collect()
    }

    /// Styled byte spans for a line of text, in insertion order.
    ///
    /// Columns count characters from 1. Ranges running past the end of the
    /// text are cut at the end; empty or inverted ranges yield nothing.
    pub fn spans_for_line(&self, line: usize, text: &str, theme: &Theme) -> Vec<Span> {
        let char_count = text.chars().count();
        let mut spans = Vec::new();

        for desc in self.decorations_on_line(line) {
            let range = &desc.range;
            let start_col = if line == range.start_line_number {
                range.start_column
            } else {
                1
            };
            let end_col = if line == range.end_line_number {
                range.end_column
            } else {
                char_count + 1
            };

            let start = column_to_byte(text, start_col);
            let end = column_to_byte(text, end_col);
            if start < end {
                spans.push(Span::new(start, end, theme.style_for(&desc.options.inline_class_name)));
            }
        }

        spans
    }

    fn allocate(&mut self) -> DecorationId {
        let id = DecorationId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl DecorationHost for DecorationLayer {
    type Handle = DecorationId;
    type Error = Infallible;

    fn replace_decorations(
        &mut self,
        old: &[DecorationId],
        new: Vec<DecorationDescriptor>,
    ) -> Result<Vec<DecorationId>, Infallible> {
        // Stale handles are ignored
        let removed = old
            .iter()
            .filter(|id| self.decorations.remove(*id).is_some())
            .count();

        let mut handles = Vec::with_capacity(new.len());
        for desc in new {
            let id = self.allocate();
            self.decorations.insert(id, desc);
            handles.push(id);
        }

        trace!("layer: removed {}, added {}", removed, handles.len());
        Ok(handles)
    }
}

/// Byte offset of a 1-based character column, clamped to the text
fn column_to_byte(text: &str, column: usize) -> usize {
    let index = column.saturating_sub(1);
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
