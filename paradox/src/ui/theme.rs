//! Color theme and styling for the story TUI.

use paradox_core::Theme;
use ratatui::style::{Color, Modifier, Style};

/// UI color theme.
#[derive(Debug, Clone)]
pub struct UiTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_accent: Color,

    // Text colors
    pub title_text: Color,
    pub narrative_text: Color,
    pub system_text: Color,
    pub tag_text: Color,

    // Chart colors
    pub chart_observed: Color,
    pub chart_predicted: Color,
    pub chart_band: Color,

    // Navigation
    pub progress_fill: Color,
    pub progress_track: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_accent: Color::Cyan,

            title_text: Color::White,
            narrative_text: Color::Gray,
            system_text: Color::DarkGray,
            tag_text: Color::DarkGray,

            chart_observed: Color::LightRed,
            chart_predicted: Color::Gray,
            chart_band: Color::DarkGray,

            progress_fill: Color::Cyan,
            progress_track: Color::DarkGray,
        }
    }
}

impl UiTheme {
    /// Terminal color for a page accent theme.
    pub fn accent(&self, theme: Theme) -> Color {
        match theme {
            Theme::Emerald => Color::Green,
            Theme::Cyan => Color::Cyan,
            Theme::Violet => Color::Magenta,
            Theme::Amber => Color::Yellow,
            Theme::Rose => Color::LightRed,
            Theme::Blue => Color::Blue,
            Theme::Slate => Color::DarkGray,
        }
    }

    /// Get style for page titles
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for page subtitles, tinted by the page accent
    pub fn subtitle_style(&self, theme: Theme) -> Style {
        Style::default().fg(self.accent(theme))
    }

    /// Get style for narrative body text
    pub fn narrative_style(&self) -> Style {
        Style::default()
            .fg(self.narrative_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for system hints and chrome
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for tag chips
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag_text)
    }

    /// Get border style, optionally tinted by a page accent
    pub fn border_style(&self, accent: Option<Theme>) -> Style {
        Style::default().fg(match accent {
            Some(theme) => self.accent(theme),
            None => self.border,
        })
    }

    /// Get style for the monospace "sensor readout" labels
    pub fn readout_style(&self) -> Style {
        Style::default().fg(self.border_accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_tag_has_an_accent() {
        let ui = UiTheme::default();
        for theme in Theme::all() {
            // A closed enum: each tag must resolve to a concrete color.
            let _ = ui.accent(*theme);
        }
    }
}
