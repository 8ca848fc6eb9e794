//! Picker trigger button.

use lumiq_core::picker::PickerController;
use lumiq_core::storage::KeyValueStore;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::theme::Palette;

/// The button showing the current theme. Opens and closes the menu.
pub struct Trigger;

impl Trigger {
    /// Render the trigger.
    pub fn render<S: KeyValueStore>(
        frame: &mut Frame,
        area: Rect,
        picker: &PickerController<S>,
        palette: &Palette,
    ) {
        let record = picker.current_theme();
        let open = picker.is_open();

        let border_color = if open {
            palette.border_focused
        } else {
            palette.border
        };

        let block = Block::default()
            .title(" Theme ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.background));

        let line = Line::from(vec![
            Span::raw(format!("{} ", record.emoji)),
            Span::styled(
                record.name,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if open { "  ▴" } else { "  ▾" },
                Style::default().fg(palette.accent),
            ),
        ]);

        let paragraph = Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
