//! Preview renderer: book record → display unit description

use serde::Serialize;

use crate::book::{Book, BookId};
use crate::catalog::Catalog;

/// Label used when an author id has no entry in the author table
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Self-contained display unit for one book in the results list.
///
/// Carries the book id so the view can resolve the record later without
/// inspecting rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookPreview {
    pub id: BookId,
    pub image: String,
    pub title: String,
    pub author: String,
}

impl BookPreview {
    pub fn new(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            author: catalog
                .author_name(&book.author)
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_string(),
        }
    }
}

/// Previews for a run of catalog positions (one result-set window)
pub fn render_previews(catalog: &Catalog, positions: &[usize]) -> Vec<BookPreview> {
    positions
        .iter()
        .filter_map(|&i| catalog.book_at(i))
        .map(|book| BookPreview::new(book, catalog))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::sample_catalog;

    #[test]
    fn test_preview_resolves_author_name() {
        let catalog = sample_catalog();
        let book = catalog.get(&BookId::new("b2")).unwrap();
        let preview = BookPreview::new(book, &catalog);

        assert_eq!(preview.id, BookId::new("b2"));
        assert_eq!(preview.title, "Mort");
        assert_eq!(preview.author, "Terry Pratchett");
        assert_eq!(preview.image, "covers/b2.jpg");
    }

    #[test]
    fn test_render_previews_keeps_order() {
        let catalog = sample_catalog();
        let previews = render_previews(&catalog, &[3, 0]);
        let ids: Vec<&str> = previews.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b4", "b1"]);
    }

    #[test]
    fn test_render_previews_skips_out_of_range() {
        let catalog = sample_catalog();
        assert_eq!(render_previews(&catalog, &[1, 99]).len(), 1);
    }
}
