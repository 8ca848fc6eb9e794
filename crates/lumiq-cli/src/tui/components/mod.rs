//! Reusable TUI components.

mod dark_toggle;
mod help_overlay;
mod status_bar;
mod theme_menu;
mod trigger;

pub use dark_toggle::DarkToggle;
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use theme_menu::ThemeMenu;
pub use trigger::Trigger;

use lumiq_core::catalog::ThemeRecord;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;

use super::theme::color;

/// Create a centered rectangle with percentage-based sizing.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// The three swatch colors as block spans.
pub fn swatch_spans(record: &ThemeRecord) -> Vec<Span<'static>> {
    record
        .swatch
        .iter()
        .map(|rgb| Span::styled("██", Style::default().fg(color(*rgb))))
        .collect()
}
