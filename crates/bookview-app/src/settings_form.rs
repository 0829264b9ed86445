//! Theme selector state for the settings overlay

use bookview_core::ThemeTable;

/// Theme selector, limited to the names in the theme table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFormState {
    themes: Vec<String>,
    index: usize,
}

impl SettingsFormState {
    pub fn new(themes: &ThemeTable, current: &str) -> Self {
        let mut form = Self {
            themes: themes.keys().cloned().collect(),
            index: 0,
        };
        form.load(current);
        form
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Point the selector at `current`, discarding unsubmitted changes
    pub fn load(&mut self, current: &str) {
        self.index = self.themes.iter().position(|t| t == current).unwrap_or(0);
    }

    pub fn selected(&self) -> Option<&str> {
        self.themes.get(self.index).map(String::as_str)
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.themes.len();
        if len == 0 {
            return;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookview_core::default_themes;

    #[test]
    fn test_starts_on_current_theme() {
        let form = SettingsFormState::new(&default_themes(), "night");
        assert_eq!(form.selected(), Some("night"));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut form = SettingsFormState::new(&default_themes(), "day");
        form.cycle(true);
        assert_eq!(form.selected(), Some("night"));
        form.cycle(true);
        assert_eq!(form.selected(), Some("day"));
        form.cycle(false);
        assert_eq!(form.selected(), Some("night"));
    }

    #[test]
    fn test_empty_table() {
        let mut form = SettingsFormState::new(&ThemeTable::new(), "day");
        form.cycle(true);
        assert_eq!(form.selected(), None);
    }
}
