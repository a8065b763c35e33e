//! Render orchestration for the story TUI.

use paradox_core::assets::INTRO_TEXTURE_URL;
use paradox_core::DataPanel;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, shift_rect, AppLayout};
use crate::ui::widgets::{
    BackgroundWidget, ChartPanelWidget, IntroScreenWidget, NavigationWidget, PagePanelWidget,
    SensorOverlayWidget,
};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // The intro owns the whole screen until the viewer enters. Main
    // content state lives on underneath, it just isn't drawn.
    if app.intro_visible {
        frame.render_widget(IntroScreenWidget::new(&app.intro, &app.theme), area);
        return;
    }

    let record = app.pager.current();
    let layout = AppLayout::calculate(area);

    let mut background = BackgroundWidget::new(record, &app.theme).frame(app.animation_frame);
    if app.pager.at_first() {
        background = background.hero(&app.hero_art);
    }
    frame.render_widget(background, area);

    render_title_bar(frame, app, layout.title_area);

    // Both content columns ride the slide transition together.
    let dx = app.transition_offset();
    let page_area = shift_rect(layout.page_area, dx, area);
    frame.render_widget(PagePanelWidget::new(record, &app.theme), page_area);

    render_data_panel(frame, app, shift_rect(layout.data_area, dx, area));

    let nav = NavigationWidget::new(
        app.pager.page(),
        app.pager.total(),
        &record.slug,
        &app.theme,
    );
    frame.render_widget(nav, layout.nav_area);

    render_hotkey_bar(frame, app, layout.hotkey_area);

    if let Some(Overlay::Help) = app.overlay() {
        render_help_overlay(frame, app, area);
    }
}

/// Render the persistent header: the masthead doubles as the intro replay
/// control.
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let masthead = Line::from(vec![
        Span::styled("◉ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            "3i ATLAS ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("PARADOX", Style::default().fg(Color::DarkGray)),
        Span::styled("  [i] replay intro", app.theme.system_style()),
    ]);
    frame.render_widget(Paragraph::new(masthead), area);
}

/// Render the data slot for the current record.
fn render_data_panel(frame: &mut Frame, app: &App, area: Rect) {
    let record = app.pager.current();
    match DataPanel::for_record(record) {
        DataPanel::Chart => {
            let caption = record
                .sensor
                .as_ref()
                .and_then(|s| s.display_label())
                .unwrap_or("Non-Gravitational Acceleration");
            let panel = centered_rect_fixed(
                area.width.saturating_sub(4).min(64),
                area.height.min(18),
                area,
            );
            frame.render_widget(Clear, panel);
            frame.render_widget(ChartPanelWidget::new(&app.theme).caption(caption), panel);
        }
        DataPanel::Sensor(sensor) => {
            let panel = centered_rect_fixed(area.width.saturating_sub(8).min(38), 7, area);
            frame.render_widget(Clear, panel);
            frame.render_widget(
                SensorOverlayWidget::new(sensor, record.theme, &app.theme),
                panel,
            );
        }
        DataPanel::Empty => {}
    }
}

/// Render the hotkey bar
fn render_hotkey_bar(frame: &mut Frame, app: &App, area: Rect) {
    let keys = Paragraph::new(Line::from(Span::styled(
        " ‹h  next l›  [i] intro  [?] help  [q] quit",
        app.theme.system_style(),
    )));
    frame.render_widget(keys, area);

    if let Some(message) = app.status_message() {
        let status = Paragraph::new(Line::from(Span::styled(
            format!("{message} "),
            app.theme.system_style(),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(status, area);
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(52, 17, area);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            " 3i ATLAS PARADOX - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pages:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  l / → / Space   Next page"),
        Line::from("  h / ←           Previous page"),
        Line::from("  Mouse wheel     Turn pages"),
        Line::from(""),
        Line::from(Span::styled(
            "Intro:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  i               Replay the intro sequence"),
        Line::from("  Enter           Enter the experience"),
        Line::from("  s               Skip the current clip"),
        Line::from(""),
        Line::from("  q               Quit"),
        Line::from(""),
        Line::from(Span::styled(
            format!("texture: {INTRO_TEXTURE_URL}"),
            app.theme.system_style(),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(None));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
