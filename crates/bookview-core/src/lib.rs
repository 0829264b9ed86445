//! # bookview-core - Core Domain Types
//!
//! Foundation crate for bookview. Provides the book store, the filter and
//! pagination engines, display-unit builders, theme types, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Book Store (`catalog`, `book`)
//! - [`Catalog`] - Validated, immutable book list with author and genre tables
//! - [`Book`] - A single catalog entry
//! - [`BookId`], [`AuthorId`], [`GenreId`] - Identifier newtypes
//!
//! ### Filtering and Pagination
//! - [`FilterCriteria`] - Title / author / genre predicates (AND semantics)
//! - [`Selector`] - `Any` or a concrete identifier
//! - [`ResultSet`] - Ordered catalog positions matching a filter
//! - [`Pagination`], [`Window`] - Additive "show more" windows
//!
//! ### Display Units
//! - [`BookPreview`] - List entry for one book
//! - [`BookDetail`] - Detail overlay content
//!
//! ### Themes (`theme`)
//! - [`ThemeColors`], [`ThemeTable`], [`ActiveTheme`], [`Rgb`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with startup-fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bookview_core::prelude::*;
//! ```

pub mod book;
pub mod catalog;
pub mod detail;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pagination;
pub mod preview;
pub mod theme;

/// Prelude for common imports used throughout all bookview crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use book::{AuthorId, Book, BookId, GenreId};
pub use catalog::Catalog;
pub use detail::BookDetail;
pub use error::{Error, Result, ResultExt};
pub use filter::{FilterCriteria, ResultSet, Selector};
pub use pagination::{Pagination, Window, DEFAULT_PAGE_SIZE};
pub use preview::{render_previews, BookPreview, UNKNOWN_AUTHOR};
pub use theme::{default_themes, ActiveTheme, Rgb, ThemeColors, ThemeTable, DEFAULT_THEME};
