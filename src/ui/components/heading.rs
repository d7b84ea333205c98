use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    Primary,
    Secondary,
}

pub struct Heading<'a> {
    text: String,
    level: HeadingLevel,
    theme: &'a Theme,
}

impl<'a> Heading<'a> {
    pub fn primary(text: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            text: text.into(),
            level: HeadingLevel::Primary,
            theme,
        }
    }

    pub fn secondary(text: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            text: text.into(),
            level: HeadingLevel::Secondary,
            theme,
        }
    }

    /// Rows the heading occupies.
    pub fn height(&self) -> u16 {
        match self.level {
            HeadingLevel::Primary => 2,
            HeadingLevel::Secondary => 1,
        }
    }
}

impl Widget for Heading<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lines = match self.level {
            HeadingLevel::Primary => vec![
                Line::from(Span::styled(
                    format!(" {}", self.text),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "\u{2500}".repeat(area.width as usize),
                    Style::default().fg(colors.border()),
                )),
            ],
            HeadingLevel::Secondary => vec![Line::from(Span::styled(
                format!(" {}", self.text),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ))],
        };
        Paragraph::new(lines).render(area, buf);
    }
}
