use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// A key-activated action drawn as `[key] icon label`.
pub struct Button<'a> {
    key: &'a str,
    icon: Option<&'a str>,
    label: String,
    enabled: bool,
    kind: ButtonKind,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(key: &'a str, label: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            key,
            icon: None,
            label: label.into(),
            enabled: true,
            kind: ButtonKind::Primary,
            theme,
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn spans(&self) -> Vec<Span<'static>> {
        let colors = &self.theme.colors;
        let (key_style, label_style) = if self.enabled {
            let accent = match self.kind {
                ButtonKind::Primary => colors.accent(),
                ButtonKind::Secondary => colors.fg(),
                ButtonKind::Danger => colors.error(),
            };
            (
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
                Style::default().fg(accent),
            )
        } else {
            let muted = Style::default().fg(colors.muted());
            (muted, muted.add_modifier(Modifier::DIM))
        };

        let mut spans = vec![Span::styled(format!("[{}] ", self.key), key_style)];
        if let Some(icon) = self.icon {
            spans.push(Span::styled(format!("{icon} "), label_style));
        }
        spans.push(Span::styled(self.label.clone(), label_style));
        spans
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans())).render(area, buf);
    }
}

/// Lay several buttons out on one line, two spaces apart.
pub fn button_row(buttons: Vec<Button<'_>>) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.extend(button.spans());
    }
    Line::from(spans)
}
