//! Search form state for the search overlay

use bookview_core::{AuthorId, Catalog, FilterCriteria, GenreId, Selector};

/// Label of the author selector's catch-all option
pub const ALL_AUTHORS: &str = "All Authors";
/// Label of the genre selector's catch-all option
pub const ALL_GENRES: &str = "All Genres";

/// Form field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Author,
            SearchField::Author => SearchField::Genre,
            SearchField::Genre => SearchField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SearchField::Title => SearchField::Genre,
            SearchField::Author => SearchField::Title,
            SearchField::Genre => SearchField::Author,
        }
    }
}

/// One entry of a dropdown-style selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: Selector<T>,
    pub label: String,
}

/// Cyclic selector over a fixed option list. Index 0 is always `Any`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList<T> {
    options: Vec<SelectOption<T>>,
    index: usize,
}

impl<T: Clone + PartialEq> OptionList<T> {
    fn new(any_label: &str, mut entries: Vec<(T, String)>) -> Self {
        entries.sort_by(|a, b| a.1.cmp(&b.1));
        let mut options = Vec::with_capacity(entries.len() + 1);
        options.push(SelectOption {
            value: Selector::Any,
            label: any_label.to_string(),
        });
        options.extend(entries.into_iter().map(|(id, label)| SelectOption {
            value: Selector::Only(id),
            label,
        }));
        Self { options, index: 0 }
    }

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    pub fn selected(&self) -> &SelectOption<T> {
        &self.options[self.index]
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
    }

    /// Point at `value`, or at `Any` if it is not an option
    pub fn select(&mut self, value: &Selector<T>) {
        self.index = self
            .options
            .iter()
            .position(|o| &o.value == value)
            .unwrap_or(0);
    }
}

/// Editable search form. Edits only take effect on submission.
#[derive(Debug, Clone)]
pub struct SearchFormState {
    pub title: String,
    pub authors: OptionList<AuthorId>,
    pub genres: OptionList<GenreId>,
    pub focus: SearchField,
}

impl SearchFormState {
    /// Populate the selectors from the catalog's author and genre tables
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let authors = catalog
            .authors()
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect();
        let genres = catalog
            .genres()
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect();
        Self {
            title: String::new(),
            authors: OptionList::new(ALL_AUTHORS, authors),
            genres: OptionList::new(ALL_GENRES, genres),
            focus: SearchField::Title,
        }
    }

    /// Reset the form to show the active criteria, discarding unsubmitted edits
    pub fn load(&mut self, criteria: &FilterCriteria) {
        self.title = criteria.title.clone();
        self.authors.select(&criteria.author);
        self.genres.select(&criteria.genre);
        self.focus = SearchField::Title;
    }

    /// Criteria for the current form contents
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.title.clone(),
            self.authors.selected().value.clone(),
            self.genres.selected().value.clone(),
        )
    }

    /// Cycle the selector under focus; no-op on the title field
    pub fn cycle_focused(&mut self, forward: bool) {
        match self.focus {
            SearchField::Title => {}
            SearchField::Author => self.authors.cycle(forward),
            SearchField::Genre => self.genres.cycle(forward),
        }
    }
}
