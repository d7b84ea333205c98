use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::layout::pack_hint_lines;
use crate::ui::theme::Theme;

/// Key hints for the mounted screen, wrapped to the terminal width, with an
/// optional notice line above them.
pub struct Footer<'a> {
    hints: Vec<String>,
    notice: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(hints: Vec<String>, notice: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            hints,
            notice,
            theme,
        }
    }

    fn lines(&self, width: u16) -> Vec<String> {
        let hints: Vec<&str> = self.hints.iter().map(String::as_str).collect();
        pack_hint_lines(&hints, width as usize)
    }

    pub fn height(&self, width: u16) -> u16 {
        let notice = u16::from(self.notice.is_some());
        (self.lines(width).len() as u16).saturating_add(notice).max(1)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut lines: Vec<Line> = Vec::new();
        if let Some(notice) = self.notice {
            lines.push(Line::from(Span::styled(
                format!("  {notice}"),
                Style::default().fg(colors.success()),
            )));
        }
        for hint in self.lines(area.width) {
            lines.push(Line::from(Span::styled(
                hint,
                Style::default().fg(colors.muted()),
            )));
        }

        Paragraph::new(lines)
            .style(Style::default().bg(colors.bg()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_counts_notice_and_wrapped_hints() {
        let theme = Theme::default();
        let hints = vec!["[1-5] Switch view".to_string(), "[q] Quit".to_string()];
        let footer = Footer::new(hints.clone(), None, &theme);
        assert_eq!(footer.height(80), 1);
        assert_eq!(footer.height(20), 2);
        let footer = Footer::new(hints, Some("saved"), &theme);
        assert_eq!(footer.height(80), 2);
    }
}
