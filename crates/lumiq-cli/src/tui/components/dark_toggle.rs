//! Dark mode switch.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::theme::Palette;

/// Switch showing whether dark mode is on.
pub struct DarkToggle;

impl DarkToggle {
    /// Render the switch.
    pub fn render(frame: &mut Frame, area: Rect, dark_mode: bool, palette: &Palette) {
        let block = Block::default()
            .title(" Dark mode ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background));

        let (knob, label, knob_color) = if dark_mode {
            ("○━━●", "On", palette.success)
        } else {
            ("●━━○", "Off", palette.text_muted)
        };

        let line = Line::from(vec![
            Span::styled(knob, Style::default().fg(knob_color)),
            Span::raw(" "),
            Span::styled(
                label,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
