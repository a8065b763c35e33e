//! Screen layout calculations for the story TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout: header, the two content columns, navigation, and
/// the hotkey bar.
pub struct AppLayout {
    pub title_area: Rect,
    pub page_area: Rect,
    pub data_area: Rect,
    pub nav_area: Rect,
    pub hotkey_area: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title bar
                Constraint::Min(10),   // content
                Constraint::Length(3), // navigation
                Constraint::Length(1), // hotkey bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);

        Self {
            title_area: rows[0],
            page_area: columns[0],
            data_area: columns[1],
            nav_area: rows[2],
            hotkey_area: rows[3],
        }
    }
}

/// Intro screen layout: title block, the player box, the enter prompt, and
/// a footer line.
pub struct IntroLayout {
    pub title_area: Rect,
    pub player_area: Rect,
    pub enter_area: Rect,
    pub footer_area: Rect,
}

impl IntroLayout {
    pub fn calculate(area: Rect) -> Self {
        // Cap the column width so the player box keeps a media-like shape
        // on wide terminals.
        let column = centered_rect_fixed(area.width.min(78), area.height, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // title
                Constraint::Min(9),    // player
                Constraint::Length(3), // enter prompt
                Constraint::Length(1), // footer
            ])
            .split(column);

        Self {
            title_area: rows[0],
            player_area: rows[1],
            enter_area: rows[2],
            footer_area: rows[3],
        }
    }
}

/// A fixed-size rect centered in `area`, clamped to fit.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Shift a rect horizontally by `dx` columns, clamped to `bounds`. Used by
/// the page slide transition.
pub fn shift_rect(area: Rect, dx: i32, bounds: Rect) -> Rect {
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.x) + i32::from(bounds.width.saturating_sub(area.width));
    let x = (i32::from(area.x) + dx).clamp(min_x, max_x.max(min_x));
    Rect { x: x as u16, ..area }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::calculate(area);
        let used = layout.title_area.height
            + layout.page_area.height
            + layout.nav_area.height
            + layout.hotkey_area.height;
        assert_eq!(used, area.height);
        assert_eq!(
            layout.page_area.width + layout.data_area.width,
            area.width
        );
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(100, 100, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_shift_rect_clamps_to_bounds() {
        let bounds = Rect::new(0, 0, 100, 40);
        let area = Rect::new(10, 5, 50, 20);

        let left = shift_rect(area, -500, bounds);
        assert_eq!(left.x, 0);

        let right = shift_rect(area, 500, bounds);
        assert_eq!(right.x + right.width, bounds.width);

        let still = shift_rect(area, 0, bounds);
        assert_eq!(still, area);
    }
}
