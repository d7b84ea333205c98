use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::ui::components::button::{Button, ButtonKind, button_row};
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// Generic "request failed" dialog. Drawing only; the key handler decides
/// what acknowledging it does.
pub struct ErrorModal<'a> {
    theme: &'a Theme,
}

impl<'a> ErrorModal<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let popup = centered_rect(50, 30, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(format!(" {} ", t!("modal.title")))
            .title_style(Style::default().fg(colors.error()).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(colors.error()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(t!("modal.body").to_string())
            .style(Style::default().fg(colors.fg()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout[1], buf);

        let ok = Button::new("Enter", t!("modal.ok").to_string(), self.theme)
            .kind(ButtonKind::Danger);
        Paragraph::new(button_row(vec![ok]))
            .alignment(Alignment::Center)
            .render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::buffer_to_text;

    #[test]
    fn test_modal_shows_title_body_and_ok() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ErrorModal::new(&theme).render(area, &mut buf);
        let text = buffer_to_text(&buf);
        assert!(text.contains("Error"));
        assert!(text.contains("An error occurred."));
        assert!(text.contains("[Enter] OK"));
    }

    #[test]
    fn test_ok_button_uses_error_color() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        ErrorModal::new(&theme).render(area, &mut buf);

        let key_cell = (area.top()..area.bottom())
            .flat_map(|y| (area.left()..area.right().saturating_sub(1)).map(move |x| (x, y)))
            .find(|&(x, y)| buf[(x, y)].symbol() == "[" && buf[(x + 1, y)].symbol() == "E")
            .unwrap();
        assert_eq!(buf[key_cell].fg, theme.colors.error());
    }
}
