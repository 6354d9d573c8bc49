//! Error types for decoration handling

use thiserror::Error;

/// Result type alias for decoration operations
pub type Result<T> = std::result::Result<T, DecorationError>;

/// Boxed error raised by a host editor widget
pub type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Decoration error types
#[derive(Error, Debug)]
pub enum DecorationError {
    /// The host editor failed to replace decorations
    #[error("host editor error: {0}")]
    Host(#[source] HostError),

    /// A request range was rejected before reaching the host
    #[error("invalid range {start_line}:{start_col}-{end_line}:{end_col} (request {index})")]
    InvalidRange {
        index: usize,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl DecorationError {
    /// Wrap an error coming out of a host widget
    pub fn host<E>(err: E) -> Self
    where
        E: Into<HostError>,
    {
        DecorationError::Host(err.into())
    }
}
