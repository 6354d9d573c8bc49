//! Highlight decorations for text editor widgets
//!
//! Callers describe highlights as [`HighlightRequest`]s. A
//! [`DecorationSession`] turns them into host descriptors and swaps the
//! previous set for the new one through a [`DecorationHost`] in a single
//! call, remembering the returned handles for the next swap.
//!
//! [`DecorationLayer`] is a ready-made in-memory host for terminal views.

mod config;
mod descriptor;
mod error;
mod host;
mod layer;
mod matches;
mod render;
mod request;
mod session;
mod style;

pub use config::Config;
pub use descriptor::{DecorationDescriptor, DecorationOptions, DecorationRange, HoverMessage};
pub use error::{DecorationError, HostError, Result};
pub use host::DecorationHost;
pub use layer::{DecorationId, DecorationLayer};
pub use matches::{requests_from_matches, MatchResult};
pub use render::{hover_lines, render_line};
pub use request::{HighlightRequest, Position};
pub use session::{DecorationSession, RangeCheck};
pub use style::{Color, Span, Style, Theme};
