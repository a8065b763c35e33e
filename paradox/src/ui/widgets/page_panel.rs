//! Narrative page panel widget.

use paradox_core::NarrativeRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

use crate::ui::theme::UiTheme;

/// Left-column panel: log-entry header, title, subtitle, narrative quote,
/// and the tag chips.
pub struct PagePanelWidget<'a> {
    record: &'a NarrativeRecord,
    theme: &'a UiTheme,
}

impl<'a> PagePanelWidget<'a> {
    pub fn new(record: &'a NarrativeRecord, theme: &'a UiTheme) -> Self {
        Self { record, theme }
    }
}

impl Widget for PagePanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(self.theme.border_style(Some(self.record.theme)))
            .padding(Padding::new(2, 1, 1, 1));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("◦ LOG ENTRY: {}", self.record.slug),
            self.theme.readout_style(),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            self.record.title.clone(),
            self.theme.title_style(),
        )));
        lines.push(Line::from(Span::styled(
            self.record.subtitle.clone(),
            self.theme.subtitle_style(self.record.theme),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", self.record.narrative),
            self.theme.narrative_style(),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled(format!("[ {} ]", self.record.kind.name()), self.theme.tag_style()),
            Span::raw(" "),
            Span::styled("[ astrobiology ]", self.theme.tag_style()),
            Span::raw(" "),
            Span::styled("[ clearance: alpha ]", self.theme.tag_style()),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
