//! Style types for rendering decorations in a terminal
//!
//! Inline class names are resolved to terminal styles through a [`Theme`].

use std::collections::HashMap;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use serde::Deserialize;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn to_term(self) -> Option<TermColor> {
        let color = match self {
            Color::Default => return None,
            Color::Black => TermColor::Black,
            Color::Red => TermColor::DarkRed,
            Color::Green => TermColor::DarkGreen,
            Color::Yellow => TermColor::DarkYellow,
            Color::Blue => TermColor::DarkBlue,
            Color::Magenta => TermColor::DarkMagenta,
            Color::Cyan => TermColor::DarkCyan,
            Color::White => TermColor::Grey,
            Color::BrightBlack => TermColor::DarkGrey,
            Color::BrightRed => TermColor::Red,
            Color::BrightGreen => TermColor::Green,
            Color::BrightYellow => TermColor::Yellow,
            Color::BrightBlue => TermColor::Blue,
            Color::BrightMagenta => TermColor::Magenta,
            Color::BrightCyan => TermColor::Cyan,
            Color::BrightWhite => TermColor::White,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Reverse video (swap fg/bg)
    pub reverse: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Convert to a crossterm style
    pub fn to_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.to_term();
        style.background_color = self.bg.to_term();
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.underline {
            style.attributes.set(Attribute::Underlined);
        }
        if self.reverse {
            style.attributes.set(Attribute::Reverse);
        }
        style
    }
}

/// A styled span of text within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    pub style: Style,
}

impl Span {
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// Inline class name to style mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    classes: HashMap<String, Style>,
    /// Used for classes the theme does not know
    fallback: Style,
}

impl Theme {
    /// A theme with no class entries
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
            fallback: Style::underline(),
        }
    }

    /// Set the style for a class, replacing any previous one
    pub fn set(&mut self, class_name: impl Into<String>, style: Style) {
        self.classes.insert(class_name.into(), style);
    }

    /// Resolve a class name to a style
    pub fn style_for(&self, class_name: &str) -> Style {
        self.classes.get(class_name).copied().unwrap_or(self.fallback)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    /// Overlay entries from another map
    pub fn extend(&mut self, entries: impl IntoIterator<Item = (String, Style)>) {
        self.classes.extend(entries);
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Self::empty();
        theme.set(
            "match-highlight",
            Style {
                fg: Color::BrightWhite,
                bg: Color::Blue,
                ..Default::default()
            },
        );
        theme.set("error", Style::fg(Color::BrightRed).with_underline());
        theme.set("warning", Style::fg(Color::BrightYellow).with_underline());
        theme
    }
}
