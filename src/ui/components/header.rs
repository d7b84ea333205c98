use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::route::Route;
use crate::ui::theme::Theme;

/// App title plus one tab per route, the active one highlighted.
pub struct Header<'a> {
    active: Route,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(active: Route, theme: &'a Theme) -> Self {
        Self { active, theme }
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let colors = &self.theme.colors;
        let mut spans = Vec::new();
        for (i, route) in Route::ALL.iter().enumerate() {
            let is_active = *route == self.active;
            let label = format!(" [{}] {} ", i + 1, route.title());
            let style = if is_active {
                Style::default()
                    .fg(colors.header_bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.header_fg()).bg(colors.header_bg())
            };
            spans.push(Span::styled(label, style));
        }
        spans
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", t!("app.title")),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.header_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.tab_spans())).render(inner, buf);
    }
}
