use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use rust_i18n::t;

use crate::api::models::{ActivityRecord, DashboardSummary};
use crate::ui::components::chart::LearningLogChart;
use crate::ui::components::progress_bar::LearningRateBar;
use crate::ui::layout::LayoutTier;
use crate::ui::theme::Theme;

/// The loaded dashboard: totals cards, learning rate, learning log and the
/// recent-activity feed.
pub struct DashboardPanel<'a> {
    summary: &'a DashboardSummary,
    tier: LayoutTier,
    theme: &'a Theme,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(summary: &'a DashboardSummary, tier: LayoutTier, theme: &'a Theme) -> Self {
        Self {
            summary,
            tier,
            theme,
        }
    }
}

impl Widget for DashboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.summary.total;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(match self.tier {
                LayoutTier::Wide => vec![
                    Constraint::Length(4),
                    Constraint::Min(10),
                    Constraint::Length(8),
                ],
                LayoutTier::Narrow => vec![
                    Constraint::Length(4),
                    Constraint::Length(4),
                    Constraint::Min(8),
                    Constraint::Length(6),
                ],
            })
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        TotalCard::new(t!("dashboard.word_total").to_string(), total.word, self.theme)
            .render(cards[0], buf);
        TotalCard::new(
            t!("dashboard.bookmark_total").to_string(),
            total.bookmark,
            self.theme,
        )
        .render(cards[1], buf);

        let rate = LearningRateBar::new(total.is_correct, total.non_correct_total(), self.theme);
        let chart = LearningLogChart::new(self.summary, self.theme);

        match self.tier {
            LayoutTier::Wide => {
                let middle = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(rows[1]);
                let rate_area = Rect {
                    height: middle[0].height.min(4),
                    ..middle[0]
                };
                rate.render(rate_area, buf);
                chart.render(middle[1], buf);
                ActivityFeed::new(&self.summary.activitys, self.theme).render(rows[2], buf);
            }
            LayoutTier::Narrow => {
                rate.render(rows[1], buf);
                chart.render(rows[2], buf);
                ActivityFeed::new(&self.summary.activitys, self.theme).render(rows[3], buf);
            }
        }
    }
}

struct TotalCard<'a> {
    label: String,
    value: i64,
    theme: &'a Theme,
}

impl<'a> TotalCard<'a> {
    fn new(label: String, value: i64, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            theme,
        }
    }
}

impl Widget for TotalCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::styled(
                self.value.to_string(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", t!("common.unit_words")),
                Style::default().fg(colors.muted()),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Every record's detail, verbatim and in order.
struct ActivityFeed<'a> {
    records: &'a [ActivityRecord],
    theme: &'a Theme,
}

impl<'a> ActivityFeed<'a> {
    fn new(records: &'a [ActivityRecord], theme: &'a Theme) -> Self {
        Self { records, theme }
    }
}

impl Widget for ActivityFeed<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", t!("dashboard.recent_activity")))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = if self.records.is_empty() {
            vec![Line::from(Span::styled(
                t!("common.no_data").to_string(),
                Style::default().fg(colors.muted()),
            ))]
        } else {
            self.records
                .iter()
                .map(|record| {
                    Line::from(vec![
                        Span::styled("\u{2022} ", Style::default().fg(colors.accent())),
                        Span::styled(record.detail.clone(), Style::default().fg(colors.fg())),
                    ])
                })
                .collect()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Totals;
    use crate::snapshot::buffer_to_text;

    fn render(summary: &DashboardSummary, width: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, 30);
        let mut buf = Buffer::empty(area);
        DashboardPanel::new(summary, LayoutTier::from_area(area), &theme).render(area, &mut buf);
        buffer_to_text(&buf)
    }

    #[test]
    fn test_totals_and_negative_not_learned() {
        let summary = DashboardSummary {
            total: Totals {
                word: 5,
                bookmark: 2,
                is_correct: 8,
            },
            ..Default::default()
        };
        for width in [80, 120] {
            let text = render(&summary, width);
            assert!(text.contains("Registered words"));
            assert!(text.contains("Not learned -3"));
            assert!(text.contains("Learned 8"));
        }
    }

    #[test]
    fn test_feed_lists_details_or_no_data() {
        let empty = render(&DashboardSummary::default(), 120);
        assert!(empty.contains("Recent activity"));
        assert!(empty.contains("No data"));

        let summary = DashboardSummary {
            activitys: vec![
                ActivityRecord {
                    detail: "cat was added".to_string(),
                    kind: Some("register".to_string()),
                    ..Default::default()
                },
                ActivityRecord {
                    detail: "dog was learned".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let text = render(&summary, 120);
        let cat = text.find("cat was added").unwrap();
        let dog = text.find("dog was learned").unwrap();
        assert!(cat < dog);
    }
}
