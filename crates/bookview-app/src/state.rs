//! Application state (Model in TEA pattern)

use bookview_core::prelude::*;
use bookview_core::{
    render_previews, ActiveTheme, BookDetail, BookId, BookPreview, Catalog, FilterCriteria,
    Pagination, ResultSet,
};

use crate::config::Settings;
use crate::search_form::SearchFormState;
use crate::settings_form::SettingsFormState;

/// Current UI mode. Each non-browse mode is one open overlay; overlays
/// never nest, so at most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Results list, no overlay
    #[default]
    Browse,

    /// Search form overlay
    Search,

    /// Theme settings overlay
    Settings,

    /// Book detail overlay
    Detail,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Immutable book store
    pub catalog: Catalog,

    /// Loaded configuration
    pub settings: Settings,

    pub phase: AppPhase,
    pub ui_mode: UiMode,

    /// Criteria of the last submitted search
    pub criteria: FilterCriteria,

    /// Books matching `criteria`
    pub results: ResultSet,

    pub pagination: Pagination,

    /// Rendered previews; always `pagination.shown(results.len())` long
    pub previews: Vec<BookPreview>,

    /// Index into `previews`
    pub selected: Option<usize>,

    /// First visible row of the results list (maintained by the view)
    pub list_offset: usize,

    pub search_form: SearchFormState,
    pub settings_form: SettingsFormState,

    /// Content of the detail overlay while it is open
    pub detail: Option<BookDetail>,

    pub theme: ActiveTheme,
}

impl AppState {
    /// Build the initial state and render the first window of the full catalog.
    pub fn new(catalog: Catalog, settings: Settings) -> Result<Self> {
        settings.validate()?;
        let theme = ActiveTheme::resolve(&settings.themes, &settings.ui.theme)
            .ok_or_else(|| Error::config_invalid("at least one theme must be defined"))?;

        let search_form = SearchFormState::from_catalog(&catalog);
        let settings_form = SettingsFormState::new(&settings.themes, &theme.name);
        let pagination = Pagination::new(settings.ui.page_size);

        let mut state = Self {
            catalog,
            settings,
            phase: AppPhase::Running,
            ui_mode: UiMode::Browse,
            criteria: FilterCriteria::default(),
            results: ResultSet::default(),
            pagination,
            previews: Vec::new(),
            selected: None,
            list_offset: 0,
            search_form,
            settings_form,
            detail: None,
            theme,
        };
        state.apply_filter(FilterCriteria::default());
        Ok(state)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Results
    // ─────────────────────────────────────────────────────────

    /// Recompute the result set and render its first window from scratch.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.results = criteria.apply(self.catalog.books());
        self.criteria = criteria;
        self.pagination.reset();

        let window = self.pagination.window(self.results.len());
        self.previews = render_previews(
            &self.catalog,
            self.results.slice(window.start, window.end),
        );
        self.selected = (!self.previews.is_empty()).then_some(0);
        self.list_offset = 0;

        info!(
            "Filter applied: title={:?} author={:?} genre={:?} -> {} matches",
            self.criteria.title,
            self.criteria.author.as_option().map(|a| a.as_str()),
            self.criteria.genre.as_option().map(|g| g.as_str()),
            self.results.len()
        );
    }

    /// Append the next window of previews. Returns false once exhausted.
    pub fn show_more(&mut self) -> bool {
        let total = self.results.len();
        let Some(window) = self.pagination.show_more(total) else {
            debug!("Show more ignored: no results remaining");
            return false;
        };
        let appended = render_previews(
            &self.catalog,
            self.results.slice(window.start, window.end),
        );
        debug!(
            "Show more: page {} appended [{}, {})",
            self.pagination.page(),
            window.start,
            window.end
        );
        self.previews.extend(appended);
        true
    }

    pub fn total_matches(&self) -> usize {
        self.results.len()
    }

    /// Matches not yet rendered
    pub fn remaining(&self) -> usize {
        self.pagination.remaining(self.results.len())
    }

    pub fn can_show_more(&self) -> bool {
        self.pagination.has_more(self.results.len())
    }

    /// Whether the "no results" message is visible
    pub fn shows_no_results(&self) -> bool {
        self.results.is_empty()
    }

    pub fn selected_preview(&self) -> Option<&BookPreview> {
        self.selected.and_then(|i| self.previews.get(i))
    }

    // ─────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────

    /// Whether any overlay is open
    pub fn has_overlay(&self) -> bool {
        self.ui_mode != UiMode::Browse
    }

    /// Populate the detail view for `id`. Returns false (and leaves the
    /// overlay closed) when the id does not resolve.
    pub fn open_detail(&mut self, id: &BookId) -> bool {
        match BookDetail::lookup(&self.catalog, id) {
            Some(detail) => {
                self.detail = Some(detail);
                self.ui_mode = UiMode::Detail;
                true
            }
            None => {
                debug!("Detail lookup ignored: no book with id {}", id);
                false
            }
        }
    }

    pub fn close_overlay(&mut self) {
        self.ui_mode = UiMode::Browse;
        self.detail = None;
    }

    /// Make `name` the active theme. Names outside the table are ignored.
    pub fn apply_theme(&mut self, name: &str) -> bool {
        let Some(colors) = self.settings.themes.get(name) else {
            warn!("Theme {:?} is not in the theme table", name);
            return false;
        };
        self.theme = ActiveTheme {
            name: name.to_string(),
            colors: *colors,
        };
        info!("Theme changed to {}", name);
        true
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use bookview_core::Selector;

    #[test]
    fn test_initial_render_is_first_window() {
        let state = state_with_books(40);
        assert_eq!(state.previews.len(), 36);
        assert_eq!(state.remaining(), 4);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert!(!state.shows_no_results());
    }

    #[test]
    fn test_show_more_is_additive() {
        let mut state = state_with_books(40);
        let first_page: Vec<BookId> = state.previews.iter().map(|p| p.id.clone()).collect();

        assert!(state.show_more());
        assert_eq!(state.previews.len(), 40);
        assert_eq!(state.previews[36].id, BookId::new("b36"));
        assert_eq!(state.previews[39].id, BookId::new("b39"));
        // Earlier previews untouched
        for (i, id) in first_page.iter().enumerate() {
            assert_eq!(&state.previews[i].id, id);
        }
        assert_eq!(state.remaining(), 0);
        assert!(!state.can_show_more());

        assert!(!state.show_more());
        assert_eq!(state.previews.len(), 40);
    }

    #[test]
    fn test_previews_always_match_shown_count() {
        let mut state = state_with_books(100);
        loop {
            assert_eq!(
                state.previews.len(),
                state.pagination.shown(state.total_matches())
            );
            if !state.show_more() {
                break;
            }
        }
    }

    #[test]
    fn test_apply_filter_resets_pagination() {
        let mut state = state_with_books(100);
        state.show_more();
        state.selected = Some(50);

        state.apply_filter(FilterCriteria::new(
            "",
            Selector::Any,
            Selector::parse("fiction"),
        ));

        assert_eq!(state.pagination.page(), 1);
        assert_eq!(state.total_matches(), 50);
        assert_eq!(state.previews.len(), 36);
        assert_eq!(state.remaining(), 14);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.list_offset, 0);
    }

    #[test]
    fn test_empty_filter_shows_no_results() {
        let mut state = state_with_books(5);
        state.apply_filter(FilterCriteria::new("nothing", Selector::Any, Selector::Any));
        assert!(state.shows_no_results());
        assert!(state.previews.is_empty());
        assert_eq!(state.selected, None);

        state.apply_filter(FilterCriteria::new("book 1", Selector::Any, Selector::Any));
        assert!(!state.shows_no_results());
    }

    #[test]
    fn test_open_detail_unknown_id_is_noop() {
        let mut state = state_with_books(3);
        assert!(!state.open_detail(&BookId::new("missing")));
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_open_detail_known_id() {
        let mut state = state_with_books(3);
        assert!(state.open_detail(&BookId::new("b1")));
        assert_eq!(state.ui_mode, UiMode::Detail);
        assert_eq!(
            state.detail.as_ref().unwrap().subtitle,
            "Bob Writer (2001)"
        );
    }

    #[test]
    fn test_apply_theme() {
        let mut state = state_with_books(1);
        assert_eq!(state.theme.name, "day");
        assert!(state.apply_theme("night"));
        assert_eq!(state.theme.name, "night");
        assert!(!state.apply_theme("sepia"));
        assert_eq!(state.theme.name, "night");
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = Settings::default();
        settings.ui.page_size = 0;
        let err = AppState::new(numbered_catalog(1), settings).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unknown_startup_theme_falls_back() {
        let mut settings = Settings::default();
        settings.ui.theme = "sepia".to_string();
        let state = AppState::new(numbered_catalog(1), settings).unwrap();
        assert_eq!(state.theme.name, "day");
        assert_eq!(state.settings_form.selected(), Some("day"));
    }
}
