//! Theme dropdown menu.

use lumiq_core::catalog;
use lumiq_core::picker::PickerController;
use lumiq_core::storage::KeyValueStore;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem};
use ratatui::Frame;

use super::swatch_spans;
use crate::tui::theme::Palette;

/// The open list of themes.
pub struct ThemeMenu;

impl ThemeMenu {
    /// Render the menu. The focused entry is highlighted, the active entry
    /// carries a check mark.
    pub fn render<S: KeyValueStore>(
        frame: &mut Frame,
        area: Rect,
        picker: &PickerController<S>,
        palette: &Palette,
    ) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Choose a theme ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border_focused))
            .style(Style::default().bg(palette.background));

        let selected = picker.preferences().selected_theme;
        let focus = picker.focus();

        let items: Vec<ListItem> = catalog::list_themes()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let focused = i == focus;
                let active = record.id == selected;

                let marker = if focused { "▸ " } else { "  " };
                let check = if active { " ✓" } else { "  " };

                let name_style = if active {
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text_primary)
                };

                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(palette.accent)),
                    Span::raw(format!("{} ", record.emoji)),
                    Span::styled(format!("{:<10}", record.name), name_style),
                ];
                spans.extend(swatch_spans(record));
                spans.push(Span::styled(check, Style::default().fg(palette.success)));
                spans.push(Span::styled(
                    format!("  {}", record.tagline),
                    Style::default().fg(palette.text_muted),
                ));

                let item = ListItem::new(Line::from(spans));
                if focused {
                    item.style(Style::default().bg(palette.selection))
                } else {
                    item
                }
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
