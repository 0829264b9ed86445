//! Detail view lookup for the book overlay

use crate::book::BookId;
use crate::catalog::Catalog;
use crate::preview::UNKNOWN_AUTHOR;

/// Everything the detail overlay shows for one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: BookId,
    pub image: String,
    pub title: String,
    /// `"Author Name (Year)"`
    pub subtitle: String,
    pub description: String,
    /// Display names of the book's genres, in record order
    pub genres: Vec<String>,
}

impl BookDetail {
    /// Resolve a book id through the catalog index.
    ///
    /// Returns `None` for ids that are not in the catalog.
    pub fn lookup(catalog: &Catalog, id: &BookId) -> Option<Self> {
        let book = catalog.get(id)?;
        let author = catalog.author_name(&book.author).unwrap_or(UNKNOWN_AUTHOR);
        Some(Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author, book.publication_year()),
            description: book.description.clone(),
            genres: book
                .genres
                .iter()
                .map(|g| catalog.genre_name(g).unwrap_or(g.as_str()).to_string())
                .collect(),
        })
    }
}
