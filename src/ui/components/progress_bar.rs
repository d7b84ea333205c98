use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::ui::theme::Theme;

/// Learned vs not-learned proportion. The bar clamps its own fill ratio; the
/// legend prints both counts exactly as given, negatives included.
pub struct LearningRateBar<'a> {
    pub learned: i64,
    pub not_learned: i64,
    pub theme: &'a Theme,
}

impl<'a> LearningRateBar<'a> {
    pub fn new(learned: i64, not_learned: i64, theme: &'a Theme) -> Self {
        Self {
            learned,
            not_learned,
            theme,
        }
    }

    pub fn ratio(&self) -> f64 {
        let total = self.learned.saturating_add(self.not_learned);
        if total <= 0 {
            return 0.0;
        }
        (self.learned as f64 / total as f64).clamp(0.0, 1.0)
    }
}

impl Widget for LearningRateBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", t!("dashboard.learning_rate")))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let ratio = self.ratio();
        let filled_width = (ratio * inner.width as f64) as u16;
        let label = format!("{:.0}%", ratio * 100.0);

        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.bg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.bg()));

        if inner.height < 2 {
            return;
        }
        let legend = Line::from(vec![
            Span::styled("\u{25a0} ", Style::default().fg(colors.bar_filled())),
            Span::styled(
                format!("{} {}", t!("dashboard.learned"), self.learned),
                Style::default().fg(colors.fg()),
            ),
            Span::raw("   "),
            Span::styled("\u{25a0} ", Style::default().fg(colors.bar_empty())),
            Span::styled(
                format!("{} {}", t!("dashboard.not_learned"), self.not_learned),
                Style::default().fg(colors.fg()),
            ),
        ]);
        let legend_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        Paragraph::new(legend).render(legend_area, buf);
    }
}
