//! Acceleration figure widget for the chart page.

use paradox_core::{ChartPoint, PARADOX_DATA};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::ui::theme::UiTheme;

/// Observed vs model-predicted non-gravitational acceleration, with the
/// model's uncertainty band drawn as its two edge traces. The dataset is
/// fixed; the widget ignores whatever sensor entry the page carries.
pub struct ChartPanelWidget<'a> {
    theme: &'a UiTheme,
    caption: &'a str,
}

impl<'a> ChartPanelWidget<'a> {
    pub fn new(theme: &'a UiTheme) -> Self {
        Self {
            theme,
            caption: "Non-Gravitational Acceleration",
        }
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = caption;
        self
    }
}

fn trace(points: &[ChartPoint], pick: fn(&ChartPoint) -> f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, pick(p)))
        .collect()
}

impl Widget for ChartPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.caption),
                self.theme.readout_style(),
            ))
            .title_top(Line::from(" FIG 5.1 ").right_aligned())
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(None));

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(inner);

        let observed = trace(&PARADOX_DATA, |p| p.observed);
        let predicted = trace(&PARADOX_DATA, |p| p.predicted);
        let lower = trace(&PARADOX_DATA, |p| p.lower);
        let upper = trace(&PARADOX_DATA, |p| p.upper);

        let band_style = Style::default()
            .fg(self.theme.chart_band)
            .add_modifier(Modifier::DIM);

        let datasets = vec![
            Dataset::default()
                .name("band")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(band_style)
                .data(&lower),
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(band_style)
                .data(&upper),
            Dataset::default()
                .name("passive model")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.chart_predicted))
                .data(&predicted),
            Dataset::default()
                .name("observed")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(
                    Style::default()
                        .fg(self.theme.chart_observed)
                        .add_modifier(Modifier::BOLD),
                )
                .data(&observed),
        ];

        let x_max = (PARADOX_DATA.len() - 1) as f64;
        let first = PARADOX_DATA.first().map(|p| p.time).unwrap_or("");
        let last = PARADOX_DATA.last().map(|p| p.time).unwrap_or("");

        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .style(self.theme.system_style())
                    .bounds([0.0, x_max])
                    .labels(vec![Line::from(first), Line::from(last)]),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("×10⁻⁶ m/s²", self.theme.system_style()))
                    .style(self.theme.system_style())
                    .bounds([0.0, 3.0])
                    .labels(vec![
                        Line::from("0.0"),
                        Line::from("1.5"),
                        Line::from("3.0"),
                    ]),
            );

        chart.render(rows[0], buf);

        let footnote = Paragraph::new(Line::from(Span::styled(
            "* a_ng = (2.3 ± 0.7) × 10⁻⁶ m/s² exceeds standard sublimation predictions",
            self.theme.system_style(),
        )));
        footnote.render(rows[1], buf);
    }
}
