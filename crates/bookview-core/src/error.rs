//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to install {signal} handler: {source}")]
    Signal {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Catalog file not found: {path}")]
    CatalogNotFound { path: PathBuf },

    #[error("No catalog provided. Pass --catalog <PATH> or set catalog.path in config.toml")]
    NoCatalog,

    #[error("Invalid catalog: {message}")]
    CatalogInvalid { message: String },

    #[error("Duplicate book id in catalog: {id}")]
    DuplicateBook { id: String },

    #[error("Book {book} references unknown author: {author}")]
    UnknownAuthor { book: String, author: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("Invalid color {value:?}: expected \"r, g, b\"")]
    InvalidColor { value: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn terminal_init(err: impl std::fmt::Display) -> Self {
        Self::TerminalInit(err.to_string())
    }

    pub fn signal(signal: &'static str, source: std::io::Error) -> Self {
        Self::Signal { signal, source }
    }

    pub fn catalog_not_found(path: impl Into<PathBuf>) -> Self {
        Self::CatalogNotFound { path: path.into() }
    }

    pub fn catalog_invalid(message: impl Into<String>) -> Self {
        Self::CatalogInvalid {
            message: message.into(),
        }
    }

    pub fn duplicate_book(id: impl Into<String>) -> Self {
        Self::DuplicateBook { id: id.into() }
    }

    pub fn unknown_author(book: impl Into<String>, author: impl Into<String>) -> Self {
        Self::UnknownAuthor {
            book: book.into(),
            author: author.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Check if this error should abort initialization
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::CatalogNotFound { .. }
                | Error::NoCatalog
                | Error::CatalogInvalid { .. }
                | Error::DuplicateBook { .. }
                | Error::UnknownAuthor { .. }
                | Error::Json(_)
                | Error::ConfigInvalid { .. }
                | Error::InvalidColor { .. }
                | Error::TerminalInit(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
