//! Background treatment widget.
//!
//! The first page gets the hero artwork; every other page gets the generic
//! ambient treatment: a sparse noise speckle in the page's accent color
//! with a cooler secondary scatter. Drawn before the content panels, which
//! paint over it.

use paradox_core::{HeroArt, NarrativeRecord};
use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::ui::theme::UiTheme;

pub struct BackgroundWidget<'a> {
    record: &'a NarrativeRecord,
    hero: Option<&'a HeroArt>,
    theme: &'a UiTheme,
    frame: u8,
}

impl<'a> BackgroundWidget<'a> {
    pub fn new(record: &'a NarrativeRecord, theme: &'a UiTheme) -> Self {
        Self {
            record,
            hero: None,
            theme,
            frame: 0,
        }
    }

    /// Hero treatment: supply the artwork (first page only).
    pub fn hero(mut self, art: &'a HeroArt) -> Self {
        self.hero = Some(art);
        self
    }

    pub fn frame(mut self, frame: u8) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for BackgroundWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.hero {
            Some(art) => render_hero(art, area, buf),
            None => render_ambient(self.record, self.theme, self.frame, area, buf),
        }
    }
}

fn render_hero(art: &HeroArt, area: Rect, buf: &mut Buffer) {
    let style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);

    let art_height = art.lines().len() as u16;
    let top = area.y + area.height.saturating_sub(art_height) / 2;

    for (row, line) in art.lines().iter().enumerate() {
        let y = top + row as u16;
        if y >= area.y + area.height {
            break;
        }
        let line_width = line.chars().count() as u16;
        let left = area.x + area.width.saturating_sub(line_width) / 2;
        for (col, ch) in line.chars().enumerate() {
            let x = left + col as u16;
            if x < area.x + area.width && ch != ' ' {
                buf[(x, y)].set_char(ch).set_style(style);
            }
        }
    }
}

fn render_ambient(
    record: &NarrativeRecord,
    theme: &UiTheme,
    frame: u8,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    // Reseed every few frames so the speckle shimmers instead of strobing.
    let mut rng = StdRng::seed_from_u64(u64::from(frame / 8));

    let accent = Style::default()
        .fg(theme.accent(record.theme))
        .add_modifier(Modifier::DIM);
    let secondary = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::DIM);

    let cells = u32::from(area.width) * u32::from(area.height);
    let speckles = (cells / 48).max(8);

    for i in 0..speckles {
        let x = area.x + rng.gen_range(0..area.width);
        let y = area.y + rng.gen_range(0..area.height);
        let (ch, style) = if i % 3 == 0 {
            ('·', secondary)
        } else if i % 7 == 0 {
            ('✦', accent)
        } else {
            ('·', accent)
        };
        buf[(x, y)].set_char(ch).set_style(style);
    }
}
