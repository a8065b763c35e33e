//! Bottom navigation bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::UiTheme;

/// Page counter, slug, progress strip, and the prev/next affordances with
/// end-of-range dimming.
pub struct NavigationWidget<'a> {
    current: u32,
    total: u32,
    slug: &'a str,
    theme: &'a UiTheme,
}

impl<'a> NavigationWidget<'a> {
    pub fn new(current: u32, total: u32, slug: &'a str, theme: &'a UiTheme) -> Self {
        Self {
            current,
            total,
            slug,
            theme,
        }
    }
}

impl Widget for NavigationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let at_first = self.current == 1;
        let at_last = self.current == self.total;

        let arrow_style = |disabled: bool| {
            if disabled {
                self.theme.system_style()
            } else {
                Style::default()
                    .fg(self.theme.progress_fill)
                    .add_modifier(Modifier::BOLD)
            }
        };

        let counter = Line::from(vec![
            Span::styled(
                format!("PG {:02} / {:02}", self.current, self.total),
                self.theme.readout_style(),
            ),
            Span::raw("  "),
            Span::styled(self.slug.to_uppercase(), self.theme.system_style()),
        ]);
        Paragraph::new(counter).render(row(area, 0), buf);

        // Progress strip, filled to the current page.
        let strip_width = area.width.saturating_sub(14) as usize;
        let filled = (strip_width * self.current as usize) / self.total.max(1) as usize;
        let strip = Line::from(vec![
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(self.theme.progress_fill),
            ),
            Span::styled(
                "░".repeat(strip_width.saturating_sub(filled)),
                Style::default().fg(self.theme.progress_track),
            ),
            Span::raw("  "),
            Span::styled("‹ prev", arrow_style(at_first)),
            Span::raw("  "),
            Span::styled("next ›", arrow_style(at_last)),
        ]);
        Paragraph::new(strip).render(row(area, 1), buf);
    }
}

fn row(area: Rect, offset: u16) -> Rect {
    Rect {
        y: area.y + offset.min(area.height.saturating_sub(1)),
        height: 1,
        ..area
    }
}
