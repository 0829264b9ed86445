//! Widget components for the TUI

mod book_list;
mod detail_overlay;
mod header;
pub mod modal_overlay;
mod search_dialog;
mod settings_dialog;
mod show_more;

pub use book_list::{BookList, NO_RESULTS_MESSAGE};
pub use detail_overlay::DetailOverlay;
pub use header::Header;
pub use search_dialog::SearchDialog;
pub use settings_dialog::SettingsDialog;
pub use show_more::ShowMore;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` terminal columns, ending with `…`
/// when anything was dropped.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
