//! Terminal rendering of decorated lines and hover text

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Print, PrintStyledContent, SetAttribute, StyledContent};
use unicode_width::UnicodeWidthChar;

use crate::error::Result;
use crate::style::{Span, Style};

/// Write one line of text with decoration spans applied.
///
/// Where spans overlap the later one wins. Output stops once `max_cols`
/// display columns are filled.
pub fn render_line<W: Write>(out: &mut W, text: &str, spans: &[Span], max_cols: usize) -> Result<()> {
    let visible = truncate_to_width(text, max_cols);

    let mut run_start = 0;
    let mut run_style = style_at(spans, 0);
    for (offset, _) in visible.char_indices() {
        let style = style_at(spans, offset);
        if style != run_style {
            write_run(out, &visible[run_start..offset], run_style)?;
            run_start = offset;
            run_style = style;
        }
    }
    write_run(out, &visible[run_start..], run_style)?;

    queue!(out, SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Tooltip lines for a set of hover texts, each cut to `max_cols`
pub fn hover_lines(messages: &[&str], max_cols: usize) -> Vec<String> {
    messages
        .iter()
        .flat_map(|msg| msg.lines())
        .map(|line| truncate_to_width(line, max_cols).to_string())
        .collect()
}

fn style_at(spans: &[Span], offset: usize) -> Style {
    spans
        .iter()
        .rev()
        .find(|span| span.contains(offset))
        .map(|span| span.style)
        .unwrap_or_default()
}

fn write_run<W: Write>(out: &mut W, text: &str, style: Style) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    if style.is_default() {
        queue!(out, Print(text))?;
    } else {
        queue!(out, PrintStyledContent(StyledContent::new(style.to_content_style(), text)))?;
    }
    Ok(())
}

/// Longest prefix of `s` that fits within a display width
fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (offset, ch) in s.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            return &s[..offset];
        }
        width += ch_width;
    }
    s
}
