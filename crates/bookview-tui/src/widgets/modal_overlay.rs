//! Shared modal overlay utilities: centering, backdrop dimming and shadows.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use bookview_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Center a percentage-based rect within an area (percentages are 0-100).
pub fn centered_rect_percent(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let width_percent = width_percent.min(100);
    let height_percent = height_percent.min(100);
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Restyle every cell in `area` with the palette's backdrop colors so the
/// page behind a modal reads as inactive.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default().fg(palette.muted).bg(palette.backdrop);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow along the right and bottom edges of `modal_rect`.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.border).bg(palette.border);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    let y_end = modal_rect
        .y
        .saturating_add(modal_rect.height)
        .saturating_add(1);
    for y in modal_rect.y.saturating_add(1)..y_end {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    let x_end = modal_rect
        .x
        .saturating_add(modal_rect.width)
        .saturating_add(1);
    for x in modal_rect.x.saturating_add(1)..x_end {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset the cells in `area` before drawing modal content
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

/// Dim the page, then clear and shadow a centered box of the given size.
/// Returns the box.
pub fn prepare_modal(
    buf: &mut Buffer,
    area: Rect,
    width: u16,
    height: u16,
    palette: &Palette,
) -> Rect {
    dim_background(buf, area, palette);
    let modal = centered_rect(width, height, area);
    render_shadow(buf, modal, palette);
    clear_area(buf, modal);
    modal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::day_palette;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let result = centered_rect(40, 10, Rect::new(0, 0, 30, 10));
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let result = centered_rect(40, 10, Rect::new(10, 5, 80, 24));
        assert_eq!(result, Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_centered_rect_percent() {
        let result = centered_rect_percent(80, 70, Rect::new(0, 0, 100, 50));
        assert!(result.width >= 78 && result.width <= 82);
        assert!(result.height >= 33 && result.height <= 37);
    }

    #[test]
    fn test_dim_background_only_touches_area() {
        let palette = day_palette();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, Rect::new(5, 3, 10, 5), &palette);

        assert_eq!(buf[(5, 3)].bg, palette.backdrop);
        assert_eq!(buf[(14, 7)].fg, palette.muted);
        assert_ne!(buf[(4, 3)].bg, palette.backdrop);
        assert_ne!(buf[(15, 8)].bg, palette.backdrop);
    }

    #[test]
    fn test_render_shadow_offset() {
        let palette = day_palette();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        render_shadow(&mut buf, Rect::new(5, 2, 10, 6), &palette);

        assert_eq!(buf[(15, 3)].bg, palette.border);
        assert_eq!(buf[(6, 8)].bg, palette.border);
        assert_eq!(buf[(6, 8)].symbol(), " ");
    }

    #[test]
    fn test_render_shadow_no_overflow() {
        let palette = day_palette();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        render_shadow(&mut buf, Rect::new(8, 8, 2, 2), &palette);
    }

    #[test]
    fn test_prepare_modal_clears_box() {
        let palette = day_palette();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        for y in 0..10 {
            for x in 0..20 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('X');
                }
            }
        }

        let modal = prepare_modal(&mut buf, area, 10, 4, &palette);

        assert_eq!(modal, Rect::new(5, 3, 10, 4));
        assert_eq!(buf[(6, 4)].symbol(), " ");
        assert_eq!(buf[(0, 0)].symbol(), "X");
    }
}
