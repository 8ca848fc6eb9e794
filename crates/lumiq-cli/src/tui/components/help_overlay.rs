//! Help overlay component.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;
use crate::tui::theme::Palette;

/// Help overlay component
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay.
    pub fn render(frame: &mut Frame, area: Rect, show_dark_mode: bool, palette: &Palette) {
        let popup_area = centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border_focused))
            .style(Style::default().bg(palette.background));

        let mut lines = vec![
            Line::from(Span::styled(
                "Picker",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            binding_line("Enter/Space", "Open the list, or select", palette),
            binding_line("↑/← ↓/→", "Move focus (wraps)", palette),
            binding_line("Home/End", "First / last theme", palette),
            binding_line("1-9, 0", "Select by position", palette),
            binding_line("Esc", "Close the list", palette),
            binding_line("Click", "Select; click outside to close", palette),
        ];

        if show_dark_mode {
            lines.push(binding_line("d", "Toggle dark mode", palette));
        }

        lines.extend([
            Line::from(""),
            Line::from(Span::styled(
                "General",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            binding_line("?/F1", "Toggle help", palette),
            binding_line("q/Ctrl+C", "Quit", palette),
        ]);

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn binding_line<'a>(key: &'a str, desc: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<14}"),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(palette.text_secondary)),
    ])
}
