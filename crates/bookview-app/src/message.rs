//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use bookview_core::BookId;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the browser (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Browse Messages
    // ─────────────────────────────────────────────────────────
    /// Move selection to the next rendered preview
    SelectNext,
    /// Move selection to the previous rendered preview
    SelectPrevious,
    /// Move selection down by one screenful
    SelectPageDown,
    /// Move selection up by one screenful
    SelectPageUp,
    /// Select the first rendered preview
    SelectFirst,
    /// Select the last rendered preview
    SelectLast,
    /// Append the next window of results
    ShowMore,
    /// Re-run the filter with default criteria
    ResetFilters,

    // ─────────────────────────────────────────────────────────
    // Search Overlay Messages
    // ─────────────────────────────────────────────────────────
    /// Open the search overlay
    OpenSearch,
    /// Replace the title field text
    SearchInput { text: String },
    /// Focus the next form field
    SearchNextField,
    /// Focus the previous form field
    SearchPreviousField,
    /// Cycle the focused author/genre selector
    SearchCycleOption { forward: bool },
    /// Submit the form: filter, reset pagination, close overlay
    SubmitSearch,

    // ─────────────────────────────────────────────────────────
    // Settings Overlay Messages
    // ─────────────────────────────────────────────────────────
    /// Open the settings (theme) overlay
    OpenSettings,
    /// Cycle the theme selector
    SettingsCycleTheme { forward: bool },
    /// Apply the selected theme and close the overlay
    SubmitSettings,

    // ─────────────────────────────────────────────────────────
    // Detail Overlay Messages
    // ─────────────────────────────────────────────────────────
    /// Open the detail overlay for a rendered preview's book
    OpenDetail { id: BookId },
    /// Close the detail overlay
    CloseDetail,

    /// Cancel whichever overlay is open
    CloseOverlay,
}
