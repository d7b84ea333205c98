use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Cell, Row, StatefulWidget, Table, TableState, Widget};

use crate::ui::theme::Theme;
use crate::view::list::ListRow;

/// Table over the rows of a list view. Rows are drawn in the order given; an
/// empty slice still draws the header.
pub struct DataTable<'a, T> {
    title: String,
    rows: &'a [T],
    selected: usize,
    theme: &'a Theme,
}

impl<'a, T: ListRow> DataTable<'a, T> {
    pub fn new(title: impl Into<String>, rows: &'a [T], selected: usize, theme: &'a Theme) -> Self {
        Self {
            title: title.into(),
            rows,
            selected,
            theme,
        }
    }
}

impl<T: ListRow> Widget for DataTable<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let header = Row::new(T::headers().into_iter().map(Cell::from)).style(
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        );

        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(row.cells().into_iter().map(Cell::from)));

        let table = Table::new(rows, T::widths())
            .header(header)
            .block(
                Block::bordered()
                    .title(format!(" {} ", self.title))
                    .border_style(Style::default().fg(colors.border())),
            )
            .style(Style::default().fg(colors.fg()).bg(colors.bg()))
            .row_highlight_style(Style::default().bg(colors.selection_bg()))
            .highlight_symbol("> ");

        let mut state = TableState::default();
        if !self.rows.is_empty() {
            state.select(Some(self.selected.min(self.rows.len() - 1)));
        }
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ActivityRecord, BookmarkEntry};
    use crate::snapshot::buffer_to_text;

    fn activity(date: &str, detail: &str) -> ActivityRecord {
        ActivityRecord {
            date: Some(date.to_string()),
            detail: detail.to_string(),
            kind: None,
        }
    }

    #[test]
    fn test_rows_drawn_in_order() {
        let theme = Theme::default();
        let rows = vec![
            activity("2021/03/02", "zebra added"),
            activity("2021/03/01", "apple added"),
            activity("2021/03/03", "mango added"),
        ];
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        DataTable::new("Activity", &rows, 0, &theme).render(area, &mut buf);
        let text = buffer_to_text(&buf);

        let zebra = text.find("zebra added").unwrap();
        let apple = text.find("apple added").unwrap();
        let mango = text.find("mango added").unwrap();
        assert!(zebra < apple && apple < mango);
    }

    #[test]
    fn test_empty_rows_keep_header() {
        let theme = Theme::default();
        let rows: Vec<BookmarkEntry> = Vec::new();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        DataTable::new("Bookmark List", &rows, 0, &theme).render(area, &mut buf);
        let text = buffer_to_text(&buf);
        assert!(text.contains("English"));
        assert!(text.contains("Japanese"));
    }
}
