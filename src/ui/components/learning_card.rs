use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::session::feedback::{BookmarkControl, OptionMark};
use crate::session::learning::LearningSession;
use crate::ui::components::button::{Button, ButtonKind, button_row};
use crate::ui::components::heading::Heading;
use crate::ui::theme::Theme;

/// The current quiz item, or a completion panel once the learner has moved
/// past the last one. An empty session draws nothing.
pub struct LearningCard<'a> {
    session: &'a LearningSession,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> LearningCard<'a> {
    pub fn new(session: &'a LearningSession, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            session,
            cursor,
            theme,
        }
    }

    fn option_lines(&self) -> Vec<Line<'static>> {
        let colors = &self.theme.colors;
        let Some(item) = self.session.current() else {
            return Vec::new();
        };
        let answered = self.session.answer().is_answered();

        item.answers
            .iter()
            .enumerate()
            .map(|(i, answer)| {
                let mark = self.session.option_mark(i);
                let pointer = if i == self.cursor && !answered { "> " } else { "  " };
                let style = match mark {
                    OptionMark::Correct => Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                    OptionMark::NoMatch => Style::default()
                        .fg(colors.error())
                        .add_modifier(Modifier::CROSSED_OUT),
                    OptionMark::Plain if answered => Style::default().fg(colors.muted()),
                    OptionMark::Plain if i == self.cursor => Style::default()
                        .fg(colors.accent())
                        .bg(colors.selection_bg()),
                    OptionMark::Plain => Style::default().fg(colors.fg()),
                };
                Line::from(vec![
                    Span::styled(pointer, Style::default().fg(colors.accent())),
                    Span::styled(format!("{} ", mark.glyph()), style),
                    Span::styled(answer.clone(), style),
                ])
            })
            .collect()
    }

    fn action_line(&self) -> Line<'static> {
        let theme = self.theme;
        let mut buttons = vec![
            Button::new("p", t!("common.pronounce").to_string(), theme)
                .icon("\u{266a}")
                .kind(ButtonKind::Secondary),
        ];
        let bookmark = self.session.bookmark();
        match self.session.bookmark_control() {
            BookmarkControl::Hidden => {}
            BookmarkControl::Active => {
                buttons.push(Button::new("b", bookmark.label(), theme).icon(bookmark.icon()));
            }
            BookmarkControl::Disabled => {
                buttons.push(
                    Button::new("b", bookmark.label(), theme)
                        .icon(bookmark.icon())
                        .enabled(false),
                );
            }
        }
        buttons.push(Button::new("n", t!("learning.next").to_string(), theme));
        button_row(buttons)
    }

    fn render_finished(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                t!("learning.finished").to_string(),
                Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                t!("learning.finished_hint").to_string(),
                Style::default().fg(colors.muted()),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Widget for LearningCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.session.is_finished() {
            self.render_finished(area, buf);
            return;
        }
        let Some(item) = self.session.current() else {
            return;
        };
        let colors = &self.theme.colors;

        let progress = t!(
            "learning.progress",
            current = self.session.index() + 1,
            total = self.session.len()
        );
        let block = Block::bordered()
            .title(format!(" {progress} "))
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let option_count = item.answers.len() as u16;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(option_count),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        Heading::secondary(item.english.clone(), self.theme).render(layout[1], buf);

        Paragraph::new(self.option_lines()).render(layout[3], buf);
        Paragraph::new(self.action_line()).render(layout[5], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::VocabularyItem;
    use crate::snapshot::buffer_to_text;

    fn session(bookmarked: bool) -> LearningSession {
        LearningSession::new(vec![VocabularyItem {
            id: 1,
            english: "cat".to_string(),
            japanese: None,
            correct: "ねこ".to_string(),
            answers: vec!["ねこ".to_string(), "いぬ".to_string()],
            bookmark_flag: bookmarked,
            is_correct: None,
        }])
    }

    fn render(session: &LearningSession) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        LearningCard::new(session, 0, &theme).render(area, &mut buf);
        buffer_to_text(&buf)
    }

    #[test]
    fn test_marks_after_answer() {
        let mut session = session(false);
        session.select_answer(1);
        let text = render(&session);
        assert!(text.contains("cat"));
        assert!(text.contains("\u{25cb} ねこ"));
        assert!(text.contains("\u{2715} いぬ"));
        assert!(text.contains("[b] \u{2606} Bookmark"));
    }

    #[test]
    fn test_bookmark_control_hidden_for_bookmarked_item() {
        let text = render(&session(true));
        assert!(!text.contains("[b]"));
        assert!(text.contains("[n] Next"));
    }

    #[test]
    fn test_bookmarked_shows_done() {
        let mut session = session(false);
        session.bookmark_current();
        assert!(render(&session).contains("[b] \u{2713} Done"));
    }

    #[test]
    fn test_past_last_item_shows_completion() {
        let mut session = session(false);
        session.next();
        let text = render(&session);
        assert!(!text.contains("cat"));
        assert!(text.contains("Every word in this session has been reviewed."));
    }

    #[test]
    fn test_empty_session_draws_nothing() {
        let session = LearningSession::new(Vec::new());
        assert_eq!(render(&session), "");
    }
}
