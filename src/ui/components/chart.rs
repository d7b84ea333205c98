use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget};
use rust_i18n::t;

use crate::api::models::DashboardSummary;
use crate::ui::theme::Theme;

/// Learning-log line chart: one point per entry, in the order received.
pub struct LearningLogChart<'a> {
    pub summary: &'a DashboardSummary,
    pub theme: &'a Theme,
}

impl<'a> LearningLogChart<'a> {
    pub fn new(summary: &'a DashboardSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for LearningLogChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", t!("dashboard.learning_log")))
            .border_style(Style::default().fg(colors.border()));

        let entries = &self.summary.learning_log;
        if entries.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(t!("common.no_data").to_string())
                .style(Style::default().fg(colors.muted()))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let data = self.summary.learning_log_points();

        let max_x = (data.len().saturating_sub(1) as f64).max(1.0);
        let min_y = data.iter().map(|(_, y)| *y).fold(0.0f64, f64::min);
        let max_y = data.iter().map(|(_, y)| *y).fold(0.0f64, f64::max).max(1.0);

        let date_labels: Vec<Span> = entries.iter().map(|e| Span::raw(e.date.clone())).collect();
        let label_style = Style::default().fg(colors.muted());

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.chart_line()))
            .data(&data);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(label_style)
                    .bounds([0.0, max_x])
                    .labels(date_labels),
            )
            .y_axis(
                Axis::default()
                    .title(t!("common.unit_words").to_string())
                    .style(label_style)
                    .bounds([min_y, max_y * 1.1])
                    .labels([
                        Span::raw(format!("{min_y:.0}")),
                        Span::raw(format!("{max_y:.0}")),
                    ]),
            );

        chart.render(area, buf);
    }
}
