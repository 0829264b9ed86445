//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + filter row + bottom border
const HEADER_HEIGHT: u16 = 4;

/// Footer height: the "show more" bar and the key hints
const FOOTER_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, active filter and match count
    pub header: Rect,

    /// Results list (or the "no results" message)
    pub results: Rect,

    /// "Show more" bar and key hints
    pub footer: Rect,
}

/// Split the terminal into header, results and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        results: chunks[1],
        footer: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.results.y, 4);
        assert_eq!(layout.results.height, 18); // 24 - 4 - 2
        assert_eq!(layout.footer.y, 22);
        assert_eq!(layout.footer.height, 2);
    }

    #[test]
    fn test_areas_span_full_width() {
        let layout = create(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.width, 120);
        assert_eq!(layout.results.width, 120);
        assert_eq!(layout.footer.width, 120);
    }

    #[test]
    fn test_small_terminal_keeps_results_area() {
        let layout = create(Rect::new(0, 0, 40, 9));
        assert!(layout.results.height >= 3);
    }
}
