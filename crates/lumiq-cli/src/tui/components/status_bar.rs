//! Status bar component.
//!
//! Shows the live announcement while it is active, key hints otherwise.

use std::time::Instant;

use lumiq_core::picker::PickerController;
use lumiq_core::storage::KeyValueStore;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::theme::Palette;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render<S: KeyValueStore>(
        frame: &mut Frame,
        area: Rect,
        picker: &PickerController<S>,
        palette: &Palette,
    ) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background));

        let mut spans = Vec::new();

        if let Some(message) = picker.announcement(Instant::now()) {
            spans.push(Span::styled(
                format!(" {message}"),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let hints = Self::hints(picker.is_open(), picker.shows_dark_mode());
            spans.push(Span::styled(
                format!(" {hints}"),
                Style::default().fg(palette.text_muted),
            ));
        }

        if !picker.is_persisted() {
            spans.push(Span::styled(
                "  ⚠ preferences not saved",
                Style::default().fg(palette.warning),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn hints(open: bool, dark_toggle: bool) -> String {
        let mut hints = if open {
            vec!["[↑↓] Move", "[Enter] Select", "[Esc] Close"]
        } else {
            vec!["[Enter] Themes"]
        };
        if dark_toggle {
            hints.push("[d] Dark mode");
        }
        hints.extend(["[?] Help", "[q] Quit"]);
        hints.join("  ")
    }
}
