//! Results list: one two-line entry per rendered preview

use bookview_core::BookPreview;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget};

use super::truncate_to_width;
use crate::theme::{styles, Palette};

/// Shown in place of the list when the filter matched nothing
pub const NO_RESULTS_MESSAGE: &str = "No results found";

pub struct BookList<'a> {
    previews: &'a [BookPreview],
    palette: &'a Palette,
}

impl<'a> BookList<'a> {
    pub fn new(previews: &'a [BookPreview], palette: &'a Palette) -> Self {
        Self { previews, palette }
    }

    fn item(&self, preview: &BookPreview, width: usize) -> ListItem<'static> {
        let p = self.palette;
        let title = truncate_to_width(&preview.title, width.saturating_sub(2));
        let byline = truncate_to_width(
            &format!("{}  ·  {}", preview.author, preview.image),
            width.saturating_sub(4),
        );
        ListItem::new(Text::from(vec![
            Line::from(Span::styled(title, styles::title(p))),
            Line::from(vec![Span::raw("  "), Span::styled(byline, styles::text_muted(p))]),
        ]))
    }
}

impl StatefulWidget for BookList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let p = self.palette;
        let block = styles::panel_block(p).title(" Books ");
        let inner = block.inner(area);

        if self.previews.is_empty() {
            block.render(area, buf);
            if inner.height > 0 {
                let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
                Paragraph::new(Span::styled(NO_RESULTS_MESSAGE, styles::no_results()))
                    .alignment(Alignment::Center)
                    .render(middle, buf);
            }
            return;
        }

        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .previews
            .iter()
            .map(|preview| self.item(preview, width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(styles::selected(p))
            .highlight_symbol("▌");
        StatefulWidget::render(list, area, buf, state);
    }
}
