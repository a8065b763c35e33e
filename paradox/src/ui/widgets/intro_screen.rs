//! Full-screen intro sequence widget.

use paradox_core::{IntroPlayer, INTRO_SEQUENCE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Widget},
};

use crate::ui::layout::IntroLayout;
use crate::ui::theme::UiTheme;

/// The gating intro: title block, the playing record's frame with label,
/// quote and playback progress, sequence position pips, and the enter
/// prompt. Rendered exclusively while the intro is visible.
pub struct IntroScreenWidget<'a> {
    player: &'a IntroPlayer,
    theme: &'a UiTheme,
}

impl<'a> IntroScreenWidget<'a> {
    pub fn new(player: &'a IntroPlayer, theme: &'a UiTheme) -> Self {
        Self { player, theme }
    }
}

impl Widget for IntroScreenWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = IntroLayout::calculate(area);

        self.render_title(layout.title_area, buf);
        self.render_player(layout.player_area, buf);
        self.render_enter_prompt(layout.enter_area, buf);

        Paragraph::new(Line::from(Span::styled(
            "IMMERSIVE SCIENTIFIC EXPERIENCE V1.0",
            self.theme.system_style(),
        )))
        .alignment(Alignment::Center)
        .render(layout.footer_area, buf);
    }
}

impl IntroScreenWidget<'_> {
    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("◉ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    "3i ATLAS",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "P A R A D O X",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_player(&self, area: Rect, buf: &mut Buffer) {
        let record = self.player.current();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(None))
            .padding(Padding::new(2, 2, 1, 0));

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // label + quote
                Constraint::Length(1), // playback gauge
                Constraint::Length(1), // position pips
            ])
            .split(inner);

        let text = vec![
            Line::from(Span::styled(
                record.label.to_uppercase(),
                self.theme.readout_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", record.quote),
                self.theme.narrative_style(),
            )),
        ];
        Paragraph::new(text).render(rows[0], buf);

        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(self.theme.progress_fill)
                    .bg(self.theme.progress_track),
            )
            .ratio(self.player.progress())
            .label(Span::styled(
                record.src.clone(),
                self.theme.system_style(),
            ));
        gauge.render(rows[1], buf);

        // One pip per record in the sequence, the playing one lit.
        let mut pips: Vec<Span> = Vec::new();
        for (index, _) in INTRO_SEQUENCE.iter().enumerate() {
            let style = if index == self.player.cursor() {
                Style::default().fg(self.theme.progress_fill)
            } else {
                self.theme.system_style()
            };
            pips.push(Span::styled("▰▰▰▰", style));
            pips.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(pips))
            .alignment(Alignment::Right)
            .render(rows[2], buf);
    }

    fn render_enter_prompt(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[ Enter ] ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "ENTER EXPERIENCE",
                    Style::default()
                        .fg(self.theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("   [ s ] skip clip", self.theme.system_style()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
