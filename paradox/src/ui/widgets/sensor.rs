//! Sensor data overlay widget.

use paradox_core::{SensorReading, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

use crate::ui::theme::UiTheme;

/// Compact readout box showing a record's sensor kind and headline value.
pub struct SensorOverlayWidget<'a> {
    sensor: &'a SensorReading,
    accent: Theme,
    theme: &'a UiTheme,
}

impl<'a> SensorOverlayWidget<'a> {
    pub fn new(sensor: &'a SensorReading, accent: Theme, theme: &'a UiTheme) -> Self {
        Self {
            sensor,
            accent,
            theme,
        }
    }
}

impl Widget for SensorOverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(" SENSOR DATA ", self.theme.readout_style()))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(None))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        let reading = self.sensor.display_value().unwrap_or("—");
        let width = inner.width as usize;

        let lines = vec![
            readout_row("Type", &self.sensor.kind, width, self.theme, self.accent),
            Line::from(""),
            readout_row("Reading", reading, width, self.theme, self.accent),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// One "label ... value" row, value right-aligned in the accent color.
fn readout_row<'a>(
    label: &'a str,
    value: &'a str,
    width: usize,
    theme: &UiTheme,
    accent: Theme,
) -> Line<'a> {
    let pad = width
        .saturating_sub(label.chars().count() + value.chars().count())
        .max(1);
    Line::from(vec![
        Span::styled(label, theme.system_style()),
        Span::raw(" ".repeat(pad)),
        Span::styled(
            value,
            theme
                .subtitle_style(accent)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
